//! Public types returned by toolbox operations.

use serde::{Deserialize, Serialize};

/// Visitor IP and country as seen by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpInfo {
    /// Public IP address; `None` when the endpoint did not report one
    pub ip: Option<String>,
    /// ISO 3166-1 alpha-2 country code, upper case
    pub country: Option<String>,
    /// Whether the country is reliable enough to preselect
    pub accurate: bool,
}

impl IpInfo {
    /// Country code to preselect, only when the lookup is accurate.
    pub fn preselect_country(&self) -> Option<&str> {
        if self.accurate {
            self.country.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preselect_only_when_accurate() {
        let mut info = IpInfo {
            ip: Some("1.2.3.4".to_string()),
            country: Some("JP".to_string()),
            accurate: true,
        };
        assert_eq!(info.preselect_country(), Some("JP"));
        info.accurate = false;
        assert_eq!(info.preselect_country(), None);
    }
}
