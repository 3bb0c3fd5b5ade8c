//! Visitor IP / country lookup module.

use std::sync::LazyLock;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::IpInfo;

/// Shared HTTP client for IP-info calls.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Per-request timeout; the lookup only preselects a country.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Response body accepted from the endpoint.
///
/// Two shapes are understood:
/// - `{ ip, country, accurate }` where `country` is an alpha-2 code
/// - ipwho.is: `{ ip, success, message, country, country_code }`
#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    ip: Option<String>,
    success: Option<bool>,
    message: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    accurate: Option<bool>,
}

/// Validate the endpoint URL; only http(s) is allowed.
fn parse_endpoint(endpoint: &str) -> ToolboxResult<Url> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(ToolboxError::ValidationError(
            "IP endpoint is required".to_string(),
        ));
    }
    let url = Url::parse(endpoint)
        .map_err(|e| ToolboxError::ValidationError(format!("Invalid IP endpoint: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ToolboxError::ValidationError(format!(
            "Unsupported IP endpoint scheme: {scheme}"
        ))),
    }
}

/// Normalise a country field to an upper-case alpha-2 code.
fn country_code(value: Option<String>) -> Option<String> {
    value
        .map(|c| c.trim().to_ascii_uppercase())
        .filter(|c| c.len() == 2 && c.chars().all(|ch| ch.is_ascii_alphabetic()))
}

/// Map a decoded response to [`IpInfo`].
fn into_ip_info(response: IpInfoResponse) -> ToolboxResult<IpInfo> {
    if response.success == Some(false) {
        let msg = response.message.unwrap_or_else(|| "Lookup failed".to_string());
        return Err(ToolboxError::NetworkError(msg));
    }

    let ip = response
        .ip
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty());

    // ipwho.is 的 country 是国家全名，优先使用 country_code
    let country = country_code(response.country_code).or_else(|| country_code(response.country));

    // 缺 IP 时仍可以预选国家，两者都没有才算失败
    if ip.is_none() && country.is_none() {
        return Err(ToolboxError::NetworkError(
            "Response has neither IP address nor country".to_string(),
        ));
    }

    let accurate = response
        .accurate
        .unwrap_or(response.success == Some(true))
        && country.is_some();

    Ok(IpInfo {
        ip,
        country,
        accurate,
    })
}

/// Decode a raw response body.
fn parse_body(body: &str) -> ToolboxResult<IpInfo> {
    let response: IpInfoResponse = serde_json::from_str(body)
        .map_err(|e| ToolboxError::NetworkError(format!("Failed to parse response: {e}")))?;
    into_ip_info(response)
}

/// Look up the caller's public IP and country.
pub async fn ip_info(endpoint: &str) -> ToolboxResult<IpInfo> {
    let url = parse_endpoint(endpoint)?;
    log::debug!("Looking up visitor IP via {url}");

    let body = HTTP_CLIENT
        .get(url)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(|e| ToolboxError::NetworkError(format!("Request failed: {e}")))?
        .error_for_status()
        .map_err(|e| ToolboxError::NetworkError(format!("Request failed: {e}")))?
        .text()
        .await
        .map_err(|e| ToolboxError::NetworkError(format!("Failed to read response: {e}")))?;

    parse_body(&body)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_shape() {
        let info = parse_body(r#"{"ip":"203.0.113.7","country":"jp","accurate":true}"#).unwrap();
        assert_eq!(info.ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(info.country.as_deref(), Some("JP"));
        assert!(info.accurate);
    }

    #[test]
    fn test_parse_simple_shape_inaccurate() {
        let info = parse_body(r#"{"ip":"203.0.113.7","country":"DE","accurate":false}"#).unwrap();
        assert_eq!(info.country.as_deref(), Some("DE"));
        assert!(!info.accurate);
        assert_eq!(info.preselect_country(), None);
    }

    #[test]
    fn test_parse_ipwhois_shape() {
        let body = r#"{"ip":"8.8.8.8","success":true,"country":"United States","country_code":"US"}"#;
        let info = parse_body(body).unwrap();
        assert_eq!(info.country.as_deref(), Some("US"));
        assert!(info.accurate);
    }

    #[test]
    fn test_parse_ipwhois_failure() {
        let body = r#"{"ip":"10.0.0.1","success":false,"message":"Reserved range"}"#;
        match parse_body(body) {
            Err(ToolboxError::NetworkError(msg)) => assert_eq!(msg, "Reserved range"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_missing_country_is_never_accurate() {
        let info = parse_body(r#"{"ip":"1.1.1.1","accurate":true}"#).unwrap();
        assert_eq!(info.country, None);
        assert!(!info.accurate);
    }

    #[test]
    fn test_missing_ip_still_preselects_country() {
        let info = parse_body(r#"{"country":"JP","accurate":true}"#).unwrap();
        assert_eq!(info.ip, None);
        assert_eq!(info.preselect_country(), Some("JP"));
    }

    #[test]
    fn test_missing_ip_and_country() {
        assert!(matches!(
            parse_body(r#"{"accurate":true}"#),
            Err(ToolboxError::NetworkError(_))
        ));
    }

    #[test]
    fn test_garbage_body() {
        assert!(matches!(
            parse_body("<html>"),
            Err(ToolboxError::NetworkError(_))
        ));
    }

    #[test]
    fn test_parse_endpoint() {
        assert!(parse_endpoint("https://ipwho.is/").is_ok());
        assert!(parse_endpoint(" http://localhost:8080/api/ip-info ").is_ok());
        assert!(matches!(
            parse_endpoint(""),
            Err(ToolboxError::ValidationError(_))
        ));
        assert!(matches!(
            parse_endpoint("ftp://example.com"),
            Err(ToolboxError::ValidationError(_))
        ));
        assert!(matches!(
            parse_endpoint("not a url"),
            Err(ToolboxError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_ip_info_invalid_endpoint() {
        let result = ip_info("   ").await;
        assert!(matches!(result, Err(ToolboxError::ValidationError(_))));
    }

    // NOTE: depends on the ipwho.is external API; failures may be rate limiting or network issues

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_ip_info_real() {
        let info = ip_info("https://ipwho.is/")
            .await
            .unwrap_or_else(|e| panic!("IP lookup failed (ipwho.is unreachable?): {e}"));
        assert!(info.ip.is_some());
    }
}
