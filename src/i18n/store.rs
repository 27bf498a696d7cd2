//! 语言偏好持久化
//!
//! 浏览器端用 localStorage 保存 `preferred_language`；这里抽象成
//! `PreferenceStore` 特性：文件实现用于CLI，内存实现用于测试。
//! 写入失败只记录警告，不影响语言切换本身。

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::core::{SiteError, SiteResult};

/// 语言偏好的存储键（与浏览器端保持一致）
pub const STORAGE_KEY: &str = "preferred_language";

/// 键值偏好存储
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()>;
}

/// 基于JSON文件的偏好存储
///
/// 文件不存在或损坏时视为空存储；每次写入都落盘。
pub struct FilePreferenceStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FilePreferenceStore {
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read(&path) {
            Ok(data) => serde_json::from_slice(&data).unwrap_or_else(|e| {
                tracing::warn!("偏好文件 {} 解析失败，按空存储处理: {}", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };

        Self { path, values }
    }

    fn flush(&self) -> SiteResult<()> {
        let data = serde_json::to_vec_pretty(&self.values)
            .map_err(|e| SiteError::Store(e.to_string()))?;
        fs::write(&self.path, data).map_err(|e| SiteError::Store(e.to_string()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// 内存偏好存储（测试用）
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
