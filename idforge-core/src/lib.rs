//! idforge Core Library
//!
//! Provides the platform-independent logic behind the idforge applications:
//! - Country registry (phone rules and name pools per country)
//! - Identity generator (name, birthday, phone, password, email)
//! - Temp-mail directory (static service list with substring filter)
//!
//! Nothing in this crate performs IO. Randomness is injected through
//! [`IdentityGenerator`] so that callers can seed it for deterministic tests.

pub mod data;
pub mod error;
pub mod services;
pub mod types;

// Re-export common types
pub use data::{all_domains, countries, default_country, get_country_config, is_known_domain};
pub use error::{CoreError, CoreResult};
pub use services::{filter_temp_emails, inbox_url, temp_email_services, IdentityGenerator};
pub use types::{CountryConfig, DomainChoice, PersonName, PhoneRule, TempEmailEntry, UserInfo};
