//! Known email domains

/// Domains offered for random selection and in the domain picker.
pub(crate) const KNOWN_DOMAINS: &[&str] = &[
    "gmail.com",
    "outlook.com",
    "hotmail.com",
    "yahoo.com",
    "icloud.com",
    "protonmail.com",
    "aol.com",
    "mail.com",
    "gmx.com",
    "zoho.com",
    "yopmail.com",
];
