//! Selector descriptors: the declarative half of element lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::LocatorError;

/// Declarative pointer to one interactive element on the page.
///
/// The `kind` is kept as the raw configured string so an unknown kind is
/// surfaced by the resolver as a configuration bug instead of failing at
/// deserialization time with a less useful message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    /// One of `text`, `id`, `class`, `attribute`, `xpath`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Kind-specific payload: visible text fragment, id, class name,
    /// `data-testid` value, or a raw XPath expression.
    pub value: String,
}

/// Concrete lookup strategy a selector compiles down to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Css(String),
    XPath(String),
}

impl Selector {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Compile the descriptor into a concrete query.
    ///
    /// `text` matches buttons whose visible text contains the value;
    /// `attribute` matches on `data-testid`, the attribute the storefront
    /// tags its controls with. Unknown kinds fail immediately.
    pub fn query(&self) -> Result<Query, LocatorError> {
        match self.kind.as_str() {
            "text" => Ok(Query::XPath(format!(
                "//button[contains(text(), '{}')]",
                self.value
            ))),
            "id" => Ok(Query::Css(format!("#{}", self.value))),
            "class" => Ok(Query::Css(format!(".{}", self.value))),
            "attribute" => Ok(Query::Css(format!("[data-testid='{}']", self.value))),
            "xpath" => Ok(Query::XPath(self.value.clone())),
            other => Err(LocatorError::UnsupportedSelector {
                kind: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind, self.value)
    }
}
