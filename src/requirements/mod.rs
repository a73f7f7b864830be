//! Requirement-file resolution.
//!
//! Requirement files live below a requirements root (`requirements/` by
//! convention): base files directly in it, optional extras in `extras/`.
//! Each file holds one requirement specifier or comment per line, and a
//! `-r <relative/path>` line includes another file in place.
//!
//! - [`RequirementLine`] classifies a single raw line
//! - [`RequirementResolver`] flattens a file and everything it includes
//! - [`ExtrasAggregator`] resolves every entry of an [`ExtrasTable`]
//!
//! Specifiers are opaque: nothing here parses version constraints or
//! removes duplicates. That is left to the installer.

pub mod extras;
pub mod line;
pub mod resolver;

pub use extras::{ExtraEntry, ExtrasAggregator, ExtrasMap, ExtrasTable};
pub use line::RequirementLine;
pub use resolver::RequirementResolver;
