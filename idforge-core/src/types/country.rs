//! Country configuration type definitions

use serde::Serialize;

/// Placeholder inside a phone template that is replaced by one of the prefixes.
const PREFIX_PLACEHOLDER: &str = "{p}";

/// Placeholder inside a phone template that is replaced by a random digit.
pub(crate) const DIGIT_PLACEHOLDER: char = '#';

/// Phone number rule of one country.
///
/// A number is rendered as `"{dial_code} {template}"` where `{p}` in the template
/// is replaced by one of `prefixes` and every `#` by a random ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhoneRule {
    /// International dial code, e.g. `+1`
    #[serde(rename = "dialCode")]
    pub dial_code: &'static str,
    /// Allowed leading groups (area codes, mobile prefixes)
    pub prefixes: &'static [&'static str],
    /// Layout of the national part
    pub template: &'static str,
}

impl PhoneRule {
    /// Check whether `phone` is a number this rule could have produced.
    pub fn matches(&self, phone: &str) -> bool {
        let Some(national) = phone
            .strip_prefix(self.dial_code)
            .and_then(|rest| rest.strip_prefix(' '))
        else {
            return false;
        };

        self.prefixes
            .iter()
            .any(|prefix| matches_layout(&self.layout_for(prefix), national))
    }

    /// Layout of the national part with a concrete prefix filled in.
    pub(crate) fn layout_for(&self, prefix: &str) -> String {
        self.template.replace(PREFIX_PLACEHOLDER, prefix)
    }

    /// Example rendering with the first prefix and `#` kept, for display.
    pub fn example(&self) -> String {
        let prefix = self.prefixes.first().copied().unwrap_or_default();
        format!("{} {}", self.dial_code, self.layout_for(prefix))
    }
}

/// Compare a layout (`#` = any digit) with a concrete string.
fn matches_layout(layout: &str, value: &str) -> bool {
    let mut expected = layout.chars();
    let mut actual = value.chars();
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(DIGIT_PLACEHOLDER), Some(c)) if c.is_ascii_digit() => {}
            (Some(e), Some(c)) if e != DIGIT_PLACEHOLDER && e == c => {}
            _ => return false,
        }
    }
}

/// Per-country generation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryConfig {
    /// ISO 3166-1 alpha-2 code
    pub code: &'static str,
    /// English display name
    pub name: &'static str,
    /// Chinese display name
    #[serde(rename = "nameZh")]
    pub name_zh: &'static str,
    /// Phone number rule
    pub phone: PhoneRule,
    /// Given-name pool
    #[serde(rename = "firstNames")]
    pub first_names: &'static [&'static str],
    /// Family-name pool
    #[serde(rename = "lastNames")]
    pub last_names: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE: PhoneRule = PhoneRule {
        dial_code: "+1",
        prefixes: &["212", "415"],
        template: "({p}) ###-####",
    };

    #[test]
    fn test_matches_valid_number() {
        assert!(RULE.matches("+1 (212) 555-0134"));
        assert!(RULE.matches("+1 (415) 000-9999"));
    }

    #[test]
    fn test_rejects_unknown_prefix() {
        assert!(!RULE.matches("+1 (999) 555-0134"));
    }

    #[test]
    fn test_rejects_wrong_layout() {
        assert!(!RULE.matches("+1 212-555-0134"));
        assert!(!RULE.matches("+1 (212) 555-013"));
        assert!(!RULE.matches("+1 (212) 555-01345"));
        assert!(!RULE.matches("+1 (212) 555-01a4"));
    }

    #[test]
    fn test_rejects_wrong_dial_code() {
        assert!(!RULE.matches("+44 (212) 555-0134"));
        assert!(!RULE.matches("(212) 555-0134"));
    }

    #[test]
    fn test_example() {
        assert_eq!(RULE.example(), "+1 (212) ###-####");
    }
}
