//! IP 查询集成测试
//!
//! 离线部分只覆盖端点校验；真实查询需要网络，默认忽略：
//!
//! ```bash
//! cargo test -p idforge-toolbox --test ip_info_test -- --ignored --nocapture
//! ```

#![allow(clippy::unwrap_used, clippy::panic)]

use idforge_toolbox::{ToolboxError, ToolboxService, DEFAULT_IP_ENDPOINT};

#[tokio::test]
async fn test_rejects_blank_endpoint() {
    let result = ToolboxService::ip_info("").await;
    assert!(matches!(result, Err(ToolboxError::ValidationError(_))));
}

#[tokio::test]
async fn test_rejects_non_http_endpoint() {
    for endpoint in ["file:///etc/passwd", "ftp://example.com/ip", "example.com"] {
        let result = ToolboxService::ip_info(endpoint).await;
        assert!(
            matches!(result, Err(ToolboxError::ValidationError(_))),
            "{endpoint} should be rejected, got {result:?}"
        );
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // 端口 9 (discard) 在本机上通常没有监听
    let result = ToolboxService::ip_info("http://127.0.0.1:9/api/ip-info").await;
    assert!(matches!(result, Err(ToolboxError::NetworkError(_))));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_default_endpoint() {
    let info = ToolboxService::ip_info(DEFAULT_IP_ENDPOINT).await.unwrap();
    println!("ip = {:?}, country = {:?}, accurate = {}", info.ip, info.country, info.accurate);
    assert!(info.ip.is_some() || info.country.is_some());
    if info.accurate {
        assert!(info.preselect_country().is_some());
    }
}
