//! Identifiers for the documented examples on the examples page.
//!
//! # Design
//! - The example set is fixed at compile time; lookups by wire key return an
//!   explicit error instead of a missing entry.
//! - Wire keys match the identifiers used in page markup (`ajaxPost` keeps its
//!   camel case).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the fixed documentation examples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExampleId {
    /// E-mail address extraction.
    Mail,
    /// Article body extraction.
    Article,
    /// DuckDuckGo result scraping.
    Ddg,
    /// Link collection.
    Links,
    /// Interactive extraction.
    Inter,
    /// Heroes table extraction.
    Heroes,
    /// Extraction driven by an AJAX POST request.
    AjaxPost,
}

/// Raised when a key does not name a known example.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown example '{key}'")]
pub struct UnknownExample {
    /// Key supplied by the caller.
    pub key: String,
}

impl ExampleId {
    /// All examples in display order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Mail,
            Self::Article,
            Self::Ddg,
            Self::Links,
            Self::Inter,
            Self::Heroes,
            Self::AjaxPost,
        ]
    }

    /// Key used in markup and configuration documents.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Mail => "mail",
            Self::Article => "article",
            Self::Ddg => "ddg",
            Self::Links => "links",
            Self::Inter => "inter",
            Self::Heroes => "heroes",
            Self::AjaxPost => "ajaxPost",
        }
    }

    /// Human-readable heading for the example card.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Mail => "E-mail addresses",
            Self::Article => "Article text",
            Self::Ddg => "DuckDuckGo results",
            Self::Links => "Page links",
            Self::Inter => "Interactive selection",
            Self::Heroes => "Heroes table",
            Self::AjaxPost => "AJAX POST",
        }
    }

    /// Resolve a wire key into an example identifier.
    ///
    /// # Errors
    /// Returns [`UnknownExample`] when `key` is not one of the fixed keys.
    pub fn parse(key: &str) -> Result<Self, UnknownExample> {
        Self::all()
            .into_iter()
            .find(|id| id.key() == key)
            .ok_or_else(|| UnknownExample {
                key: key.to_string(),
            })
    }
}

impl FromStr for ExampleId {
    type Err = UnknownExample;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for ExampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
