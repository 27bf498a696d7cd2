//! 统一的环境变量管理
//!
//! 提供类型安全、可验证的环境变量访问。

use std::env;
use std::fmt;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Environment variable '{}': {}",
            self.variable, self.message
        )
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn default() -> T;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    fn get_or_default() -> T {
        Self::get().unwrap_or_else(|_| Self::default())
    }
}

/// 日志级别
pub struct LogLevel;

impl EnvVar<String> for LogLevel {
    const NAME: &'static str = "LEDSITE_LOG_LEVEL";
    const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

    fn parse(value: &str) -> EnvResult<String> {
        match value.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
            _ => Err(EnvError {
                variable: Self::NAME.to_string(),
                message: format!(
                    "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                    value
                ),
            }),
        }
    }

    fn default() -> String {
        "info".to_string()
    }
}

/// 禁用颜色输出
pub struct NoColor;

impl EnvVar<bool> for NoColor {
    const NAME: &'static str = "NO_COLOR";
    const DESCRIPTION: &'static str = "Disable colored output when set to any value";

    fn parse(value: &str) -> EnvResult<bool> {
        // NO_COLOR 遵循标准：任何非空值都表示禁用颜色
        Ok(!value.is_empty())
    }

    fn default() -> bool {
        false
    }
}
