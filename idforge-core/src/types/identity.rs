//! Generated identity type definitions

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Given name + family name pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

/// One generated synthetic identity.
///
/// Always replaced as a whole on regeneration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// `YYYY-MM-DD`
    pub birthday: String,
    pub phone: String,
    pub password: String,
    pub email: String,
}

impl UserInfo {
    /// Whether this is the empty placeholder shown before the first generation
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
    }

    /// Part of the email before `@`
    pub fn email_local_part(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }
}

/// Email domain selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "domain", rename_all = "lowercase")]
pub enum DomainChoice {
    /// Draw from the known domain set on every generation
    #[default]
    Random,
    /// Always use this domain
    Fixed(String),
}

impl DomainChoice {
    /// The fixed domain, if any
    pub fn fixed(&self) -> Option<&str> {
        match self {
            Self::Random => None,
            Self::Fixed(domain) => Some(domain),
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Self::Random)
    }

    /// Fixed choice from user input (trimmed, lower-cased).
    ///
    /// Rejects empty input, whitespace inside the domain and anything containing `@`.
    pub fn custom(domain: &str) -> CoreResult<Self> {
        normalize_domain(domain).map(Self::Fixed)
    }
}

/// Validate a user-selected domain.
pub(crate) fn normalize_domain(domain: &str) -> CoreResult<String> {
    let domain = domain.trim();
    validate_domain(domain)?;
    Ok(domain.to_ascii_lowercase())
}

/// Reject empty domains, whitespace and `@`; the text itself is not rewritten.
pub(crate) fn validate_domain(domain: &str) -> CoreResult<()> {
    if domain.is_empty() || domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return Err(CoreError::InvalidDomain(domain.to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_default_is_empty() {
        assert!(UserInfo::default().is_empty());
    }

    #[test]
    fn test_email_local_part() {
        let info = UserInfo {
            email: "jane.doe42@gmail.com".to_string(),
            ..UserInfo::default()
        };
        assert_eq!(info.email_local_part(), "jane.doe42");
    }

    #[test]
    fn test_user_info_serializes_camel_case() {
        let info = UserInfo {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            ..UserInfo::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["lastName"], "Doe");
    }

    #[test]
    fn test_domain_choice() {
        assert!(DomainChoice::default().is_random());
        assert_eq!(
            DomainChoice::custom("  Example.ORG ").unwrap(),
            DomainChoice::Fixed("example.org".to_string())
        );
        assert!(matches!(
            DomainChoice::custom("me@example.org"),
            Err(CoreError::InvalidDomain(_))
        ));
        assert_eq!(DomainChoice::Random.fixed(), None);
        assert_eq!(
            DomainChoice::Fixed("yopmail.com".to_string()).fixed(),
            Some("yopmail.com")
        );
    }
}
