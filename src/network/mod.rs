//! # 网络模块
//!
//! 增强管线只在两处访问网络：性能配置的远程拉取和图片替代格式的
//! 存在性探测。两处都容忍失败——调用方拿到错误或 `false` 后回落默认。

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::core::{SiteError, SiteResult};

/// 网络请求超时
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn client() -> SiteResult<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| SiteError::Network(e.to_string()))
}

/// 以 HEAD 请求探测资源是否存在
///
/// 任何网络错误或非 2xx 状态都视为不存在。
pub fn head_exists(url: &str) -> bool {
    let Ok(client) = client() else {
        return false;
    };

    client
        .head(url)
        .send()
        .map(|response| response.status().is_success())
        .unwrap_or(false)
}

/// 拉取并反序列化一个JSON资源
pub fn fetch_json<T: DeserializeOwned>(url: &str) -> SiteResult<T> {
    let response = client()?
        .get(url)
        .send()
        .map_err(|e| SiteError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(SiteError::Network(format!(
            "GET {} 返回 {}",
            url,
            response.status()
        )));
    }

    response
        .json::<T>()
        .map_err(|e| SiteError::Network(e.to_string()))
}
