//! Temp-mail directory entry

use serde::Serialize;

/// Third-party disposable-email provider link.
///
/// Not generated or verified by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TempEmailEntry {
    pub name: &'static str,
    pub url: &'static str,
    /// English description
    pub description: &'static str,
    /// Chinese description
    #[serde(rename = "descriptionZh")]
    pub description_zh: &'static str,
}

impl TempEmailEntry {
    /// Case-insensitive match of an already lower-cased query against name and descriptions
    pub(crate) fn matches_lowercase(&self, query: &str) -> bool {
        [self.name, self.description, self.description_zh]
            .iter()
            .any(|field| field.to_lowercase().contains(query))
    }
}
