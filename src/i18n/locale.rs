//! 语言枚举与检测
//!
//! 站点支持英文和中文两种语言；检测失败时一律回落到英文。

use std::fmt;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// 语言代码（持久化与 `<html lang>` 使用）
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// 语言显示名
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }

    /// 全部支持的语言
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Zh]
    }

    /// 查找失败时的回落语言
    pub fn fallback() -> Locale {
        Locale::En
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    /// 从浏览器风格的语言标签检测语言
    ///
    /// `zh`、`zh-CN`、`zh-Hant` 等一律视为中文，其余回落英文。
    pub fn detect(language_tag: Option<&str>) -> Locale {
        match language_tag {
            Some(tag) if tag.to_ascii_lowercase().starts_with("zh") => Locale::Zh,
            _ => Locale::En,
        }
    }

    /// 在两种语言之间切换
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
