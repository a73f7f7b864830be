//! Metadata extraction from the package header file.
//!
//! The header (`<package>/__init__.py` by convention) carries the distribution
//! metadata as dunder assignments and a one-line docstring. The
//! [`MetadataExtractor`] scans it with an ordered list of [`LineRule`]s and
//! returns a [`MetadataRecord`].

pub mod extractor;
pub mod record;

pub use extractor::{LineHandler, LineRule, MetadataExtractor};
pub use record::MetadataRecord;
