//! Temp-mail directory queries

use crate::data::temp_email_table;
use crate::types::TempEmailEntry;

/// Public inbox viewer the "open inbox" action points at.
const INBOX_BASE_URL: &str = "https://yopmail.net/?login=";

/// All temp-mail services, in display order.
pub fn temp_email_services() -> &'static [TempEmailEntry] {
    temp_email_table()
}

/// Services whose name or description contains `query`.
///
/// Matching is case-insensitive; an empty (or all-whitespace) query returns
/// the full list in display order.
pub fn filter_temp_emails(query: &str) -> Vec<&'static TempEmailEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return temp_email_services().iter().collect();
    }
    temp_email_services()
        .iter()
        .filter(|entry| entry.matches_lowercase(&query))
        .collect()
}

/// Inbox URL for an address, keyed by its local part.
///
/// Returns `None` when there is no usable local part.
pub fn inbox_url(email: &str) -> Option<String> {
    let (local, _) = email.trim().split_once('@')?;
    if local.is_empty() {
        return None;
    }
    Some(format!("{INBOX_BASE_URL}{local}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(filter_temp_emails("").len(), temp_email_services().len());
        assert_eq!(filter_temp_emails("   ").len(), temp_email_services().len());
    }

    #[test]
    fn test_filter_by_name() {
        let names: Vec<_> = filter_temp_emails("MAILDROP").iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Maildrop", "MailDrop"]);
    }

    #[test]
    fn test_filter_by_description() {
        let hits = filter_temp_emails("10 minutes");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "10 Minute Mail");

        let hits = filter_temp_emails("阿拉伯");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Mohmal");
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_temp_emails("no such service").is_empty());
    }

    #[test]
    fn test_inbox_url() {
        assert_eq!(
            inbox_url("jane.doe42@gmail.com").as_deref(),
            Some("https://yopmail.net/?login=jane.doe42")
        );
        assert_eq!(inbox_url(""), None);
        assert_eq!(inbox_url("@gmail.com"), None);
        assert_eq!(inbox_url("no-at-sign"), None);
    }
}
