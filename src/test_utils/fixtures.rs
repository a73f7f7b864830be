//! Sample metadata headers.

use crate::constants::DEFAULT_SENTINEL;

/// Test fixture for a package `__init__.py`.
#[derive(Clone, Debug)]
pub struct HeaderFixture {
    pub content: String,
}

impl HeaderFixture {
    /// Header defining every default required key, followed by code past the sentinel.
    pub fn complete() -> Self {
        Self {
            content: format!(
                r#""""Distributed Task Queue."""
# :copyright: (c) 2017-2026 Asif Saif Uddin, celery core and individual
#                 contributors, All rights reserved.

__version__ = '5.3.1'
__author__ = 'Ask Solem'
__contact__ = 'auvipy@gmail.com'
__homepage__ = 'https://docs.celeryq.dev/'
__docformat__ = 'restructuredtext'
__keywords__ = 'task job queue distributed messaging actor'

{DEFAULT_SENTINEL}

__version__ = 'ignored'
import os
"#
            ),
        }
    }

    /// [`complete`](Self::complete) with the assignment of `key` removed.
    pub fn without(key: &str) -> Self {
        let prefix = format!("__{key}__");
        let content = Self::complete()
            .content
            .lines()
            .filter(|line| !line.starts_with(&prefix))
            .map(|line| format!("{line}\n"))
            .collect();
        Self {
            content,
        }
    }
}
