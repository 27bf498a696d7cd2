//! # ledsite 库
//!
//! 面向LED显示屏宣传站点的静态页面增强工具库。把原本在浏览器里运行的
//! 三个页面增强脚本（国际化、面包屑导航、性能优化）改写为对HTML文档的
//! 离线处理管线：解析DOM、应用变换、序列化输出。
//!
//! ## 模块组织
//!
//! - `core` - 核心选项、错误类型和文档增强管线
//! - `parsers` - HTML解析与DOM操作
//! - `i18n` - 双语（英/中）翻译系统
//! - `breadcrumb` - 面包屑导航生成与主导航同步
//! - `perf` - 性能配置、Core Web Vitals 监测与资源优化改写
//! - `network` - 配置拉取与资源存在性探测
//! - `env` - 环境变量访问

pub mod breadcrumb;
pub mod core;
pub mod env;
pub mod i18n;
pub mod network;
pub mod parsers;
pub mod perf;

// Re-export commonly used items for convenience
pub use crate::core::{enhance_document, EnhanceOptions, SiteError, SiteResult};
pub use crate::i18n::{Locale, Translator};
