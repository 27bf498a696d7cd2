//! 性能配置
//!
//! 与站点 `performance-config.json` 同构的配置结构，字段名用
//! camelCase 以兼容既有配置文件。从文件或URL加载；任何失败
//! （缺文件、网络错误、解析错误）都告警并回落内置默认值。

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{SiteError, SiteResult};
use crate::network;

/// 配置常量
pub const DEFAULT_COMPRESSION_QUALITY: u8 = 85;
pub const CONSTRAINED_IMAGE_QUALITY: u8 = 60;
pub const DEFAULT_FADE_IN_MS: u64 = 300;

/// Core Web Vitals 默认阈值
pub const DEFAULT_LCP_THRESHOLD_MS: f64 = 2500.0;
pub const DEFAULT_FID_THRESHOLD_MS: f64 = 100.0;
pub const DEFAULT_CLS_THRESHOLD: f64 = 0.1;

/// 性能配置根
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerfConfig {
    pub optimization: Optimization,
    pub monitoring: Monitoring,
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Optimization {
    pub images: ImageOptions,
    pub css: CssOptions,
    pub javascript: JsOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageOptions {
    pub lazy_loading: bool,
    pub webp_support: bool,
    pub compression_quality: u8,
    pub fade_in_duration: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CssOptions {
    pub critical_css: bool,
    pub prefetch: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsOptions {
    pub defer_non_critical: bool,
    pub preload_critical: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontOptions {
    pub preload: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Monitoring {
    pub performance_metrics: bool,
    pub error_tracking: bool,
}

/// Core Web Vitals 阈值（毫秒；CLS无量纲）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Thresholds {
    pub largest_contentful_paint: f64,
    pub first_input_delay: f64,
    pub cumulative_layout_shift: f64,
}

impl Default for PerfConfig {
    fn default() -> Self {
        Self {
            optimization: Optimization::default(),
            monitoring: Monitoring::default(),
            thresholds: Thresholds::default(),
        }
    }
}

impl Default for Optimization {
    fn default() -> Self {
        Self {
            images: ImageOptions::default(),
            css: CssOptions::default(),
            javascript: JsOptions::default(),
            fonts: None,
        }
    }
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            lazy_loading: true,
            webp_support: true,
            compression_quality: DEFAULT_COMPRESSION_QUALITY,
            fade_in_duration: DEFAULT_FADE_IN_MS,
        }
    }
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            critical_css: true,
            prefetch: vec!["style.css".to_string()],
        }
    }
}

impl Default for JsOptions {
    fn default() -> Self {
        Self {
            defer_non_critical: true,
            preload_critical: vec!["main.js".to_string()],
        }
    }
}

impl Default for FontOptions {
    fn default() -> Self {
        Self { preload: Vec::new() }
    }
}

impl Default for Monitoring {
    fn default() -> Self {
        Self {
            performance_metrics: true,
            error_tracking: true,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            largest_contentful_paint: DEFAULT_LCP_THRESHOLD_MS,
            first_input_delay: DEFAULT_FID_THRESHOLD_MS,
            cumulative_layout_shift: DEFAULT_CLS_THRESHOLD,
        }
    }
}

impl PerfConfig {
    /// 从本地文件加载；失败时回落默认配置
    pub fn load_from_file(path: &Path) -> Self {
        match Self::try_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("性能配置 {} 加载失败，使用默认配置: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// 从URL加载；失败时回落默认配置
    pub fn load_from_url(url: &str) -> Self {
        match network::fetch_json::<PerfConfig>(url) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("性能配置 {} 拉取失败，使用默认配置: {}", url, e);
                Self::default()
            }
        }
    }

    fn try_from_file(path: &Path) -> SiteResult<Self> {
        let data = std::fs::read(path).map_err(|e| SiteError::Config(e.to_string()))?;
        serde_json::from_slice(&data).map_err(|e| SiteError::Config(e.to_string()))
    }

    /// 校验配置
    pub fn validate(&self) -> SiteResult<()> {
        if self.optimization.images.compression_quality > 100 {
            return Err(SiteError::Config("图片压缩质量不能超过100".to_string()));
        }

        if self.thresholds.largest_contentful_paint <= 0.0
            || self.thresholds.first_input_delay <= 0.0
            || self.thresholds.cumulative_layout_shift <= 0.0
        {
            return Err(SiteError::Config("阈值必须大于0".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = PerfConfig::load_from_file(Path::new("/no/such/performance-config.json"));
        assert!(config.optimization.images.lazy_loading);
        assert_eq!(
            config.thresholds.largest_contentful_paint,
            DEFAULT_LCP_THRESHOLD_MS
        );
    }

    #[test]
    fn camel_case_config_parses() {
        let json = r#"{
            "optimization": {
                "images": { "lazyLoading": false, "webpSupport": false,
                            "compressionQuality": 70, "fadeInDuration": 150 },
                "css": { "criticalCss": true, "prefetch": ["critical.css"] },
                "javascript": { "deferNonCritical": true, "preloadCritical": [] }
            },
            "monitoring": { "performanceMetrics": true, "errorTracking": false },
            "thresholds": { "largestContentfulPaint": 2000 }
        }"#;

        let config: PerfConfig = serde_json::from_str(json).expect("parse");
        assert!(!config.optimization.images.lazy_loading);
        assert_eq!(config.optimization.images.compression_quality, 70);
        assert_eq!(config.thresholds.largest_contentful_paint, 2000.0);
        // 缺省字段取默认值
        assert_eq!(config.thresholds.first_input_delay, DEFAULT_FID_THRESHOLD_MS);
        assert!(config.validate().is_ok());
    }
}
