//! 静态数据注册表
//!
//! 国家配置、邮箱域名与临时邮箱列表均为编译期常量，进程内只读。

mod countries;
mod domains;
mod temp_mail;

use crate::types::{CountryConfig, TempEmailEntry};

/// Code of the country used when nothing else is known.
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// All supported countries, in display order.
pub fn countries() -> &'static [CountryConfig] {
    &countries::COUNTRIES
}

/// Look up a country by code (case-insensitive, surrounding whitespace ignored).
pub fn get_country_config(code: &str) -> Option<&'static CountryConfig> {
    let code = code.trim();
    countries()
        .iter()
        .find(|country| country.code.eq_ignore_ascii_case(code))
}

/// The baseline country.
pub fn default_country() -> &'static CountryConfig {
    // COUNTRIES 的第一项即为默认国家
    &countries::COUNTRIES[0]
}

/// Known email domains, in display order.
pub fn all_domains() -> &'static [&'static str] {
    domains::KNOWN_DOMAINS
}

/// Whether `domain` belongs to the known set (case-insensitive).
pub fn is_known_domain(domain: &str) -> bool {
    all_domains().iter().any(|d| d.eq_ignore_ascii_case(domain))
}

pub(crate) fn temp_email_table() -> &'static [TempEmailEntry] {
    &temp_mail::TEMP_EMAIL_SERVICES
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_country_is_us() {
        assert_eq!(default_country().code, DEFAULT_COUNTRY_CODE);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(get_country_config("jp").map(|c| c.code), Some("JP"));
        assert_eq!(get_country_config(" gb ").map(|c| c.code), Some("GB"));
        assert!(get_country_config("ZZ").is_none());
        assert!(get_country_config("").is_none());
    }

    #[test]
    fn test_country_codes_are_unique() {
        let codes: HashSet<_> = countries().iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), countries().len());
    }

    #[test]
    fn test_every_country_has_usable_rules() {
        for country in countries() {
            assert!(!country.first_names.is_empty(), "{}", country.code);
            assert!(!country.last_names.is_empty(), "{}", country.code);
            assert!(!country.phone.prefixes.is_empty(), "{}", country.code);
            assert!(country.phone.template.contains("{p}"), "{}", country.code);
            assert!(country.phone.dial_code.starts_with('+'), "{}", country.code);
        }
    }

    #[test]
    fn test_names_are_ascii() {
        for country in countries() {
            for name in country.first_names.iter().chain(country.last_names) {
                assert!(name.is_ascii(), "{}: {name}", country.code);
            }
        }
    }

    #[test]
    fn test_known_domains() {
        assert!(is_known_domain("gmail.com"));
        assert!(is_known_domain("GMAIL.COM"));
        assert!(!is_known_domain("example.org"));
        let unique: HashSet<_> = all_domains().iter().collect();
        assert_eq!(unique.len(), all_domains().len());
    }

    #[test]
    fn test_temp_email_table_size() {
        assert_eq!(temp_email_table().len(), 15);
        assert!(temp_email_table().iter().all(|e| e.url.starts_with("https://")));
    }
}
