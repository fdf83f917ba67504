//! Rule implementations for tscat.
//!
//! Each rule is a pure function over one parsed [`CatalogFile`] plus a
//! `check_*_issues` wrapper that runs it over every catalog of a
//! [`CheckContext`].
//!
//! - `unfinished`: translations still marked `type="unfinished"`
//! - `vanished`: messages whose source left the application
//! - `placeholder`: translations whose placeholders differ from the source
//! - `duplicate`: source and comment defined twice in one context
//! - `untranslated`: finished translations identical to the source
//! - `numerus`: numerus messages with the wrong number of forms
//!
//! [`CatalogFile`]: crate::context::CatalogFile
//! [`CheckContext`]: crate::context::CheckContext

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod duplicate;
pub mod numerus;
pub mod placeholder;
pub mod unfinished;
pub mod untranslated;
pub mod vanished;

/// Rules selectable on the command line and in `checks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckRule {
    Unfinished,
    Vanished,
    PlaceholderMismatch,
    Duplicate,
    Untranslated,
    NumerusForms,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Unfinished,
            CheckRule::Vanished,
            CheckRule::PlaceholderMismatch,
            CheckRule::Duplicate,
            CheckRule::Untranslated,
            CheckRule::NumerusForms,
        ]
    }
}
