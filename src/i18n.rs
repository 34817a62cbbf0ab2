//! User-facing strings

use serde::Deserialize;

/// Display language of the notice and of error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    /// Returns the string catalog for this locale
    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::ZhCn => &ZH_CN,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "zh-CN" | "zh" => Ok(Locale::ZhCn),
            _ => Err(format!("unsupported locale: {s}")),
        }
    }
}

/// String catalog for one locale
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub unknown_version: &'static str,
    pub version_label: &'static str,
    pub update_badge: &'static str,
    pub up_to_date: &'static str,
    pub check_failed: &'static str,
    pub error_prefix: &'static str,
    pub local_fetch_failed: &'static str,
    pub proxy_fetch_failed: &'static str,
    pub proxy_timeout: &'static str,
    pub direct_fetch_failed: &'static str,
    pub latest_unavailable: &'static str,
}

static EN: Messages = Messages {
    unknown_version: crate::version::format::UNKNOWN_VERSION,
    version_label: "Version",
    update_badge: "New version",
    up_to_date: "(latest)",
    check_failed: "check failed",
    error_prefix: "Error",
    local_fetch_failed: "Failed to read the current version",
    proxy_fetch_failed: "Proxy request failed",
    proxy_timeout: "Proxy request timed out",
    direct_fetch_failed: "Failed to fetch the latest version",
    latest_unavailable: "Unable to retrieve the latest version",
};

static ZH_CN: Messages = Messages {
    unknown_version: "未知版本",
    version_label: "版本",
    update_badge: "发现新版",
    up_to_date: "(最新版本)",
    check_failed: "检测失败",
    error_prefix: "错误信息",
    local_fetch_failed: "获取当前版本失败",
    proxy_fetch_failed: "代理请求失败",
    proxy_timeout: "代理请求超时",
    direct_fetch_failed: "获取最新版本失败",
    latest_unavailable: "无法获取最新版本信息",
};
