//! Where version tokens are read from

use std::path::PathBuf;

use crate::config::NoticeConfig;

/// Location of the locally deployed version marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalSource {
    /// Served over HTTP, fetched with cache bypass
    Url(String),
    /// Read straight from disk
    File(PathBuf),
}

impl LocalSource {
    /// Resolve a configured value.
    ///
    /// Absolute `http(s)://` values are used as is. Anything else is joined onto
    /// `base_url` when one is given, or treated as a file path otherwise.
    pub fn parse(value: &str, base_url: Option<&str>) -> Self {
        if is_http_url(value) {
            return LocalSource::Url(value.to_string());
        }

        match base_url {
            Some(base) => LocalSource::Url(format!(
                "{}/{}",
                base.trim_end_matches('/'),
                value.trim_start_matches('/')
            )),
            None => LocalSource::File(PathBuf::from(value)),
        }
    }
}

impl std::fmt::Display for LocalSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalSource::Url(url) => write!(f, "{url}"),
            LocalSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// All three places a check reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSources {
    pub local: LocalSource,
    /// Mirror tried first, bounded by the proxy timeout
    pub proxy_url: String,
    /// Fallback used when the proxy fails or is too slow
    pub direct_url: String,
}

impl From<&NoticeConfig> for VersionSources {
    fn from(config: &NoticeConfig) -> Self {
        Self {
            local: LocalSource::parse(&config.local_version, config.base_url.as_deref()),
            proxy_url: config.proxy_url.clone(),
            direct_url: config.direct_url.clone(),
        }
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
