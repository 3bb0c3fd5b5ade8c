//! 启动时的 IP 查询
//!
//! 查询在 tokio 运行时上执行，结果通过 channel 交回主循环。
//! 主循环退出后 receiver 被丢弃，发送失败即代表结果不再需要。

use idforge_toolbox::{IpInfo, ToolboxService};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

/// 查询结果；错误以文本形式交给 UI
pub type IpLookupOutcome = Result<IpInfo, String>;

/// 在后台发起一次 IP 查询
pub fn spawn_ip_lookup(runtime: &Handle, endpoint: String, tx: UnboundedSender<IpLookupOutcome>) {
    runtime.spawn(async move {
        let outcome = ToolboxService::ip_info(&endpoint)
            .await
            .map_err(|e| e.to_string());

        match &outcome {
            Ok(info) => tracing::info!(
                ip = ?info.ip,
                country = ?info.country,
                accurate = info.accurate,
                "IP lookup finished"
            ),
            Err(e) => tracing::warn!("IP lookup failed: {e}"),
        }

        if tx.send(outcome).is_err() {
            tracing::debug!("UI already closed, dropping IP lookup result");
        }
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use tokio::sync::mpsc::unbounded_channel;

    use super::*;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_invalid_endpoint_reports_error() {
        let rt = runtime();
        let (tx, mut rx) = unbounded_channel();
        spawn_ip_lookup(rt.handle(), String::new(), tx);
        let outcome = rt.block_on(rx.recv()).unwrap();
        assert!(outcome.is_err());
    }

    #[test]
    fn test_closed_receiver_is_ignored() {
        let rt = runtime();
        let (tx, rx) = unbounded_channel();
        drop(rx);
        spawn_ip_lookup(rt.handle(), "not a url".to_string(), tx);
        // 让任务运行完毕，不应 panic
        rt.block_on(tokio::task::yield_now());
    }
}
