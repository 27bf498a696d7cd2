//! 性能优化模块
//!
//! 浏览器端性能脚本的静态化改写，分为四块：
//! - **config**: 性能配置（JSON），远程/本地加载失败时回落内置默认值
//! - **vitals**: Core Web Vitals 条目的观察、阈值比对与报告
//! - **images**: 延迟加载图片的源改写与替代格式探测
//! - **preload**: 关键资源的 `<link rel="preload">` 注入
//!
//! 弱网条件下（2G或省流模式）降低图片质量配置并给 `<html>`
//! 打上减少动效的标记类。

pub mod config;
pub mod images;
pub mod preload;
pub mod vitals;

use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

use crate::parsers::html::{add_class, find_first_element};

pub use config::{PerfConfig, Thresholds};
pub use images::{rewrite_lazy_images, AlternateFormatProbe, HttpProbe, NoProbe};
pub use preload::inject_preloads;
pub use vitals::{EntryKind, PerformanceEntry, PerformanceMetrics, VitalsMonitor};

/// 弱网降级时给 `<html>` 添加的标记类
pub const REDUCED_MOTION_CLASS: &str = "reduced-motion";

/// 网络连接画像
///
/// 对应浏览器 `navigator.connection` 暴露的字段子集。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionProfile {
    pub effective_type: String,
    pub save_data: bool,
}

impl ConnectionProfile {
    /// 是否属于受限连接
    pub fn is_constrained(&self) -> bool {
        matches!(self.effective_type.as_str(), "slow-2g" | "2g") || self.save_data
    }
}

/// 按连接画像降级
///
/// 受限连接下压低图片压缩质量并标记整篇文档减少动效；
/// 正常连接不做任何修改。
pub fn apply_connection_profile(
    document: &Handle,
    config: &mut PerfConfig,
    profile: &ConnectionProfile,
) {
    if !profile.is_constrained() {
        return;
    }

    config.optimization.images.compression_quality = config::CONSTRAINED_IMAGE_QUALITY;

    if let Some(html) = find_first_element(document, "html") {
        add_class(&html, REDUCED_MOTION_CLASS);
    }

    tracing::info!(
        "检测到受限连接（{}），已降低图片质量并减少动效",
        profile.effective_type
    );
}
