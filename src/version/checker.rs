//! Update check: current marker, latest marker, comparison

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::NoticeConfig;
use crate::i18n::{Locale, Messages};
use crate::version::client::{FetchOptions, HttpClient};
use crate::version::compare::has_update;
use crate::version::error::{FetchError, HttpError};
use crate::version::format::format_version_with;
use crate::version::source::{LocalSource, VersionSources};

/// Outcome of one update check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    /// Trimmed current token
    pub current: String,
    /// Trimmed latest token
    pub latest: String,
    /// Latest orders strictly above current
    pub has_update: bool,
    pub current_formatted: String,
    pub latest_formatted: String,
}

impl UpdateResult {
    /// Build a result from raw tokens, formatting empty ones as `unknown`
    pub fn new(current: &str, latest: &str, unknown: &str) -> Self {
        let current = current.trim();
        let latest = latest.trim();

        Self {
            current: current.to_string(),
            latest: latest.to_string(),
            has_update: has_update(current, latest),
            current_formatted: format_version_with(current, unknown),
            latest_formatted: format_version_with(latest, unknown),
        }
    }
}

/// Runs update checks against a set of sources.
///
/// Each check is independent; the checker holds no state between calls.
pub struct UpdateChecker<C> {
    client: C,
    sources: VersionSources,
    proxy_timeout: Duration,
    locale: Locale,
}

impl<C: HttpClient> UpdateChecker<C> {
    pub fn new(client: C, sources: VersionSources, proxy_timeout: Duration) -> Self {
        Self {
            client,
            sources,
            proxy_timeout,
            locale: Locale::default(),
        }
    }

    pub fn from_config(client: C, config: &NoticeConfig) -> Self {
        Self::new(client, VersionSources::from(config), config.proxy_timeout())
            .with_locale(config.locale)
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    /// Fetch both markers and compare them.
    ///
    /// The local marker is read first; when it fails no remote request is made.
    pub async fn check_for_updates(&self) -> Result<UpdateResult, FetchError> {
        let current = self
            .fetch_current()
            .await
            .inspect_err(|e| error!("Version check failed: {}", e.detail()))?;
        let latest = self
            .fetch_latest()
            .await
            .inspect_err(|e| error!("Version check failed: {}", e.detail()))?;

        info!("Current version: {}", current.trim());
        info!("Latest version: {}", latest.trim());

        Ok(UpdateResult::new(
            &current,
            &latest,
            self.messages().unknown_version,
        ))
    }

    /// Read the local marker, bypassing any cache
    pub async fn fetch_current(&self) -> Result<String, FetchError> {
        debug!("Reading current version from {}", self.sources.local);

        let result = match &self.sources.local {
            LocalSource::Url(url) => self.client.get(url, FetchOptions::no_store()).await,
            LocalSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(HttpError::from),
        };

        result.map_err(|source| FetchError::Local {
            message: self.messages().local_fetch_failed.to_string(),
            source,
        })
    }

    /// Read the latest marker through the proxy, falling back to the direct source
    pub async fn fetch_latest(&self) -> Result<String, FetchError> {
        let proxy_error = match self.fetch_via_proxy().await {
            Ok(latest) => {
                info!("Fetched latest version through proxy");
                return Ok(latest);
            }
            Err(e) => e,
        };

        warn!(
            "Proxy request failed, trying direct request: {}",
            proxy_error.detail()
        );

        match self
            .client
            .get(&self.sources.direct_url, FetchOptions::default())
            .await
        {
            Ok(latest) => {
                info!("Fetched latest version directly");
                Ok(latest)
            }
            Err(source) => {
                let direct_error = FetchError::Direct {
                    message: self.messages().direct_fetch_failed.to_string(),
                    source,
                };
                error!(
                    "All latest version requests failed: {}",
                    direct_error.detail()
                );
                Err(FetchError::Aggregate {
                    message: self.messages().latest_unavailable.to_string(),
                    proxy: Box::new(proxy_error),
                    direct: Box::new(direct_error),
                })
            }
        }
    }

    /// Race the proxy request against the timeout; a late proxy response is dropped
    async fn fetch_via_proxy(&self) -> Result<String, FetchError> {
        let request = self
            .client
            .get(&self.sources.proxy_url, FetchOptions::default());

        match tokio::time::timeout(self.proxy_timeout, request).await {
            Ok(Ok(latest)) => Ok(latest),
            Ok(Err(source)) => Err(FetchError::Proxy {
                message: self.messages().proxy_fetch_failed.to_string(),
                source,
            }),
            Err(_) => Err(FetchError::ProxyTimeout {
                message: self.messages().proxy_timeout.to_string(),
                timeout: self.proxy_timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::client::{CacheMode, MockHttpClient};
    use std::collections::HashMap;
    use std::sync::Mutex;

    const LOCAL: &str = "http://site.test/VERSION.txt";
    const PROXY: &str = "http://proxy.test/NEWversion.txt";
    const DIRECT: &str = "http://direct.test/NEWversion.txt";
    const TIMEOUT: Duration = Duration::from_millis(1500);

    fn sources() -> VersionSources {
        VersionSources {
            local: LocalSource::Url(LOCAL.to_string()),
            proxy_url: PROXY.to_string(),
            direct_url: DIRECT.to_string(),
        }
    }

    /// Client answering each URL after a fixed delay
    struct ScriptedClient {
        routes: HashMap<&'static str, (Duration, Result<&'static str, u16>)>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedClient {
        fn new() -> Self {
            Self {
                routes: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn route(
            mut self,
            url: &'static str,
            delay_ms: u64,
            body: Result<&'static str, u16>,
        ) -> Self {
            self.routes
                .insert(url, (Duration::from_millis(delay_ms), body));
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl HttpClient for ScriptedClient {
        async fn get(&self, url: &str, _options: FetchOptions) -> Result<String, HttpError> {
            self.calls.lock().unwrap().push(url.to_string());
            let (delay, body) = self
                .routes
                .get(url)
                .cloned()
                .unwrap_or((Duration::ZERO, Err(404)));
            tokio::time::sleep(delay).await;
            body.map(str::to_string).map_err(HttpError::Status)
        }
    }

    #[tokio::test]
    async fn check_for_updates_reports_update_from_proxy() {
        let mut client = MockHttpClient::new();
        client
            .expect_get()
            .withf(|url, options| url == LOCAL && options.cache == CacheMode::NoStore)
            .times(1)
            .returning(|_, _| Ok("1.2.3\n".to_string()));
        client
            .expect_get()
            .withf(|url, options| url == PROXY && options.cache == CacheMode::Default)
            .times(1)
            .returning(|_, _| Ok(" 1.2.4 ".to_string()));
        client.expect_get().withf(|url, _| url == DIRECT).never();

        let checker = UpdateChecker::new(client, sources(), TIMEOUT);
        let result = checker.check_for_updates().await.unwrap();

        assert_eq!(
            result,
            UpdateResult {
                current: "1.2.3".to_string(),
                latest: "1.2.4".to_string(),
                has_update: true,
                current_formatted: "1.2.3".to_string(),
                latest_formatted: "1.2.4".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn check_for_updates_falls_back_to_direct_when_proxy_fails_fast() {
        let mut client = MockHttpClient::new();
        client
            .expect_get()
            .withf(|url, _| url == LOCAL)
            .returning(|_, _| Ok("beta0.3.5".to_string()));
        client
            .expect_get()
            .withf(|url, _| url == PROXY)
            .times(1)
            .returning(|_, _| Err(HttpError::Status(502)));
        client
            .expect_get()
            .withf(|url, _| url == DIRECT)
            .times(1)
            .returning(|_, _| Ok("beta0.3.5".to_string()));

        let checker = UpdateChecker::new(client, sources(), TIMEOUT);
        let result = checker.check_for_updates().await.unwrap();

        assert!(!result.has_update);
        assert_eq!(result.latest, "beta0.3.5");
        assert_eq!(result.current_formatted, "Beta 0.3.5");
    }

    #[tokio::test]
    async fn check_for_updates_fails_without_remote_requests_when_local_fails() {
        let mut client = MockHttpClient::new();
        client
            .expect_get()
            .withf(|url, _| url == LOCAL)
            .times(1)
            .returning(|_, _| Err(HttpError::Status(404)));
        client.expect_get().withf(|url, _| url != LOCAL).never();

        let checker = UpdateChecker::new(client, sources(), TIMEOUT);
        let result = checker.check_for_updates().await;

        assert!(matches!(
            result,
            Err(FetchError::Local {
                source: HttpError::Status(404),
                ..
            })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn check_for_updates_uses_direct_when_proxy_exceeds_timeout() {
        let client = ScriptedClient::new()
            .route(LOCAL, 0, Ok("1.0.0"))
            .route(PROXY, 2000, Ok("9.9.9"))
            .route(DIRECT, 100, Ok("1.0.1"));

        let checker = UpdateChecker::new(client, sources(), TIMEOUT);
        let result = checker.check_for_updates().await.unwrap();

        assert_eq!(result.latest, "1.0.1");
        assert!(result.has_update);
        assert_eq!(
            checker.client.calls(),
            vec![LOCAL.to_string(), PROXY.to_string(), DIRECT.to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn check_for_updates_keeps_proxy_answer_within_timeout() {
        let client = ScriptedClient::new()
            .route(LOCAL, 0, Ok("1.0.0"))
            .route(PROXY, 1400, Ok("1.0.0"))
            .route(DIRECT, 0, Ok("2.0.0"));

        let checker = UpdateChecker::new(client, sources(), TIMEOUT);
        let result = checker.check_for_updates().await.unwrap();

        assert_eq!(result.latest, "1.0.0");
        assert!(!result.has_update);
        assert_eq!(
            checker.client.calls(),
            vec![LOCAL.to_string(), PROXY.to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn check_for_updates_returns_aggregate_when_both_remotes_fail() {
        let client = ScriptedClient::new()
            .route(LOCAL, 0, Ok("1.0.0"))
            .route(PROXY, 5000, Ok("2.0.0"))
            .route(DIRECT, 0, Err(503));

        let checker = UpdateChecker::new(client, sources(), TIMEOUT).with_locale(Locale::ZhCn);
        let error = checker.check_for_updates().await.unwrap_err();

        assert_eq!(error.to_string(), "无法获取最新版本信息");
        let FetchError::Aggregate { proxy, direct, .. } = error else {
            panic!("expected aggregate error");
        };
        assert!(matches!(
            *proxy,
            FetchError::ProxyTimeout { timeout, .. } if timeout == TIMEOUT
        ));
        assert!(matches!(
            *direct,
            FetchError::Direct {
                source: HttpError::Status(503),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn fetch_current_reads_local_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("VERSION.txt");
        std::fs::write(&path, "202310271530\n").unwrap();

        let checker = UpdateChecker::new(
            MockHttpClient::new(),
            VersionSources {
                local: LocalSource::File(path),
                ..sources()
            },
            TIMEOUT,
        );

        assert_eq!(checker.fetch_current().await.unwrap(), "202310271530\n");
    }

    #[tokio::test]
    async fn fetch_current_reports_missing_local_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        let checker = UpdateChecker::new(
            MockHttpClient::new(),
            VersionSources {
                local: LocalSource::File(temp_dir.path().join("missing.txt")),
                ..sources()
            },
            TIMEOUT,
        );

        let error = checker.fetch_current().await.unwrap_err();
        assert_eq!(error.to_string(), "Failed to read the current version");
        assert!(matches!(error, FetchError::Local { source: HttpError::Io(_), .. }));
    }

    #[test]
    fn update_result_formats_empty_tokens_with_sentinel() {
        let result = UpdateResult::new("", "202310271530", "unknown version");

        assert_eq!(result.current_formatted, "unknown version");
        assert_eq!(result.latest_formatted, "2023-10-27 15:30");
        assert!(result.has_update);
    }

    #[test]
    fn update_result_serializes_with_camel_case_fields() {
        let result = UpdateResult::new("1.0.0", "1.0.0", "unknown version");

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "current": "1.0.0",
                "latest": "1.0.0",
                "hasUpdate": false,
                "currentFormatted": "1.0.0",
                "latestFormatted": "1.0.0"
            })
        );
    }
}
