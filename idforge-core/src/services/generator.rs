//! Identity generator
//!
//! Builds [`UserInfo`] records from the country table and an injected random
//! source. Output is plausible-looking only; nothing here is suitable for
//! secrets.

use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::data::{all_domains, default_country, get_country_config};
use crate::error::{CoreError, CoreResult};
use crate::types::country::DIGIT_PLACEHOLDER;
use crate::types::identity::validate_domain;
use crate::types::{CountryConfig, DomainChoice, PersonName, UserInfo};

/// Youngest generated age, in years
const MIN_AGE_YEARS: u32 = 18;
/// Oldest generated age, in years
const MAX_AGE_YEARS: u32 = 60;

const PASSWORD_MIN_LEN: usize = 12;
const PASSWORD_MAX_LEN: usize = 16;

const UPPERCASE: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%&*?";

/// Separators placed between the name parts of an email local part
const EMAIL_SEPARATORS: &[&str] = &[".", "_", ""];

/// Local part used when neither name contributes an ASCII letter or digit
const FALLBACK_LOCAL_PART: &str = "user";

/// Random identity generator.
///
/// The type parameter is the random source; [`IdentityGenerator::from_seed`]
/// gives reproducible output for tests.
pub struct IdentityGenerator<R = StdRng> {
    rng: R,
    /// Date the birthday range is computed from
    today: NaiveDate,
}

impl IdentityGenerator<StdRng> {
    /// Seeded generator; the same seed and reference date give the same identities.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), Local::now().date_naive())
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng(), Local::now().date_naive())
    }
}

impl<R: Rng> IdentityGenerator<R> {
    /// Generator with an explicit random source and reference date
    pub fn with_rng(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    /// Reference date for birthdays
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Generate a full identity for `country_code`.
    ///
    /// Unknown codes are rejected with [`CoreError::UnknownCountry`].
    pub fn generate(&mut self, country_code: &str, domain: &DomainChoice) -> CoreResult<UserInfo> {
        let country = get_country_config(country_code)
            .ok_or_else(|| CoreError::UnknownCountry(country_code.to_string()))?;
        self.generate_for(country, domain)
    }

    /// Like [`generate`](Self::generate), but unknown codes fall back to the default country.
    pub fn generate_or_default(
        &mut self,
        country_code: &str,
        domain: &DomainChoice,
    ) -> CoreResult<UserInfo> {
        let country = get_country_config(country_code).unwrap_or_else(|| {
            let fallback = default_country();
            log::warn!(
                "Unknown country code {country_code:?}, falling back to {}",
                fallback.code
            );
            fallback
        });
        self.generate_for(country, domain)
    }

    /// Generate a full identity for an already resolved country.
    pub fn generate_for(
        &mut self,
        country: &CountryConfig,
        domain: &DomainChoice,
    ) -> CoreResult<UserInfo> {
        let PersonName {
            first_name,
            last_name,
        } = self.generate_name(country)?;
        let birthday = self.generate_birthday();
        let phone = self.generate_phone(country)?;
        let password = self.generate_password();
        let email = self.generate_email(&first_name, &last_name, domain)?;

        log::debug!("Generated identity for {}", country.code);

        Ok(UserInfo {
            first_name,
            last_name,
            birthday,
            phone,
            password,
            email,
        })
    }

    /// Pick a first and last name from the country's pools.
    pub fn generate_name(&mut self, country: &CountryConfig) -> CoreResult<PersonName> {
        let first_name = pick(&mut self.rng, country.first_names, country.code, "first-name")?;
        let last_name = pick(&mut self.rng, country.last_names, country.code, "last-name")?;
        Ok(PersonName {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }

    /// Birthday as `YYYY-MM-DD`, between 18 and 60 years before the reference date.
    pub fn generate_birthday(&mut self) -> String {
        let latest = years_before(self.today, MIN_AGE_YEARS);
        let earliest = years_before(self.today, MAX_AGE_YEARS);
        let span = (latest - earliest).num_days().max(0);
        let date = earliest + Duration::days(self.rng.random_range(0..=span));
        date.format("%Y-%m-%d").to_string()
    }

    /// Phone number following the country's rule.
    pub fn generate_phone(&mut self, country: &CountryConfig) -> CoreResult<String> {
        let rule = &country.phone;
        let prefix = pick(&mut self.rng, rule.prefixes, country.code, "phone prefix")?;

        let national: String = rule
            .layout_for(prefix)
            .chars()
            .map(|c| {
                if c == DIGIT_PLACEHOLDER {
                    char::from(b'0' + self.rng.random_range(0..10u8))
                } else {
                    c
                }
            })
            .collect();

        Ok(format!("{} {national}", rule.dial_code))
    }

    /// 12–16 character password with at least one upper, lower, digit and symbol.
    pub fn generate_password(&mut self) -> String {
        let len = self.rng.random_range(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN);
        let classes = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS];

        // 每类至少一个字符，剩余位置从全部字符中抽取
        let mut chars: Vec<u8> = classes
            .iter()
            .map(|class| class[self.rng.random_range(0..class.len())])
            .collect();
        let all: Vec<u8> = classes.concat();
        while chars.len() < len {
            chars.push(all[self.rng.random_range(0..all.len())]);
        }
        chars.shuffle(&mut self.rng);

        chars.into_iter().map(char::from).collect()
    }

    /// Email address derived from the names.
    ///
    /// The local part is `first{sep}last{suffix}` in lower case with everything
    /// but ASCII letters and digits removed.
    pub fn generate_email(
        &mut self,
        first_name: &str,
        last_name: &str,
        domain: &DomainChoice,
    ) -> CoreResult<String> {
        let domain = match domain {
            DomainChoice::Random => pick(&mut self.rng, all_domains(), "-", "domain")?.to_string(),
            DomainChoice::Fixed(domain) => {
                validate_domain(domain)?;
                domain.clone()
            }
        };

        let first = sanitize(first_name);
        let last = sanitize(last_name);
        let separator = EMAIL_SEPARATORS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();

        let mut local = match (first.is_empty(), last.is_empty()) {
            (true, true) => FALLBACK_LOCAL_PART.to_string(),
            (false, true) => first,
            (true, false) => last,
            (false, false) => format!("{first}{separator}{last}"),
        };

        if self.rng.random_bool(0.6) {
            let suffix: u32 = self.rng.random_range(10..10_000);
            local.push_str(&suffix.to_string());
        }

        Ok(format!("{local}@{domain}"))
    }
}

/// Uniform pick from a static pool.
fn pick<'a, R: Rng>(
    rng: &mut R,
    pool: &'a [&'a str],
    country_code: &str,
    what: &str,
) -> CoreResult<&'a str> {
    pool.choose(rng).copied().ok_or_else(|| {
        CoreError::ValidationError(format!("Empty {what} pool for {country_code}"))
    })
}

/// Lower-case ASCII letters and digits only.
fn sanitize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Same calendar day `years` earlier; Feb 29 becomes Feb 28.
fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .or_else(|| NaiveDate::from_ymd_opt(date.year() - i32::try_from(years).unwrap_or(0), 1, 1))
        .unwrap_or(date)
}
