//! Shared setup for update check integration tests

use mockito::{Mock, ServerGuard};

use version_notice::config::NoticeConfig;
use version_notice::version::client::ReqwestClient;
use version_notice::version::UpdateChecker;

pub const LOCAL_PATH: &str = "/VERSION.txt";
pub const PROXY_PATH: &str = "/proxy/NEWversion.txt";
pub const DIRECT_PATH: &str = "/direct/NEWversion.txt";
pub const REPOSITORY_URL: &str = "https://github.com/BTYcloud/LTV";

/// Config pointing every source at the mock server
pub fn test_config(server: &ServerGuard) -> NoticeConfig {
    NoticeConfig {
        local_version: LOCAL_PATH.to_string(),
        base_url: Some(server.url()),
        proxy_url: format!("{}{}", server.url(), PROXY_PATH),
        direct_url: format!("{}{}", server.url(), DIRECT_PATH),
        repository_url: REPOSITORY_URL.to_string(),
        ..NoticeConfig::default()
    }
}

pub fn create_checker(config: &NoticeConfig) -> UpdateChecker<ReqwestClient> {
    UpdateChecker::from_config(ReqwestClient::new().unwrap(), config)
}

/// Serve `body` at `path`, expecting exactly `hits` requests
pub async fn serve(
    server: &mut ServerGuard,
    path: &str,
    status: usize,
    body: &str,
    hits: usize,
) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}
