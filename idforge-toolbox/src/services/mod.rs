//! Stateless service façade exposing all toolbox operations.
//!
//! Every method on [`ToolboxService`] is an async associated function; no instance is needed.

mod ip;

use crate::error::ToolboxResult;
use crate::types::IpInfo;

/// Endpoint used when the configuration does not name one.
pub const DEFAULT_IP_ENDPOINT: &str = "https://ipwho.is/";

/// Entry point for network operations.
///
/// ```rust,no_run
/// use idforge_toolbox::{ToolboxService, DEFAULT_IP_ENDPOINT};
/// # async fn demo() -> idforge_toolbox::ToolboxResult<()> {
/// let info = ToolboxService::ip_info(DEFAULT_IP_ENDPOINT).await?;
/// println!("{:?} {:?}", info.ip, info.country);
/// # Ok(())
/// # }
/// ```
pub struct ToolboxService;

impl ToolboxService {
    /// Look up the caller's public IP and country.
    ///
    /// `endpoint` must be an http(s) URL answering with either
    /// `{ ip, country, accurate }` or the ipwho.is format. Requests time out
    /// after five seconds.
    pub async fn ip_info(endpoint: &str) -> ToolboxResult<IpInfo> {
        ip::ip_info(endpoint).await
    }
}
