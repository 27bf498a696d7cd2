//! 双语国际化模块
//!
//! 站点的英/中双语文本替换系统，采用清晰的模块化架构：
//! - **locale**: 语言枚举、检测与回落规则
//! - **catalog**: 内置的键→文案静态词表
//! - **store**: 语言偏好持久化（localStorage 的文件版）
//! - **translator**: 查找、参数插值、DOM改写与语言变更广播
//!
//! # 基本用法
//!
//! ```rust,no_run
//! use ledsite::i18n::{Locale, MemoryPreferenceStore, Translator};
//! use ledsite::parsers::html::html_to_dom;
//!
//! let dom = html_to_dom(b"<html></html>", "utf-8".to_string());
//! let mut translator = Translator::new(Box::new(MemoryPreferenceStore::default()), None);
//! translator.apply(&dom.document);
//! translator.set_locale(Locale::Zh, &dom.document);
//! ```

pub mod catalog;
pub mod locale;
pub mod store;
pub mod translator;

// 核心API导出
pub use locale::Locale;
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, STORAGE_KEY};
pub use translator::{LanguageChange, Translator};

/// 可接收翻译值的元素属性标记
///
/// 元素通过 `data-i18n` 声明翻译键；默认替换文本内容，
/// `data-i18n-attr` 指定时改写该属性。
pub const I18N_ATTR: &str = "data-i18n";
pub const I18N_TARGET_ATTR: &str = "data-i18n-attr";

/// 语言切换控件的类名
pub const SWITCHER_CLASS: &str = "lang-switcher";
