//! Core Web Vitals 监测
//!
//! 消费性能条目（绘制、LCP、首次输入、布局偏移），维护一次页面
//! 访问生命周期内的指标记录，并按配置阈值比对：超限只告警，
//! 不影响任何处理流程。观察器按条目类型注册在登记表里，
//! `teardown` 一次性全部注销，之后的条目被静默丢弃。

use std::collections::HashSet;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::config::Thresholds;
use super::ConnectionProfile;

/// 性能条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Paint,
    LargestContentfulPaint,
    FirstInput,
    LayoutShift,
}

impl EntryKind {
    pub fn all() -> &'static [EntryKind] {
        &[
            EntryKind::Paint,
            EntryKind::LargestContentfulPaint,
            EntryKind::FirstInput,
            EntryKind::LayoutShift,
        ]
    }
}

/// 浏览器上报的单个性能条目
#[derive(Debug, Clone)]
pub enum PerformanceEntry {
    Paint { name: String, start_time: f64 },
    LargestContentfulPaint { start_time: f64 },
    FirstInput { start_time: f64, processing_start: f64 },
    LayoutShift { value: f64, had_recent_input: bool },
}

impl PerformanceEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            PerformanceEntry::Paint { .. } => EntryKind::Paint,
            PerformanceEntry::LargestContentfulPaint { .. } => EntryKind::LargestContentfulPaint,
            PerformanceEntry::FirstInput { .. } => EntryKind::FirstInput,
            PerformanceEntry::LayoutShift { .. } => EntryKind::LayoutShift,
        }
    }
}

/// 一次页面访问的指标记录（单位毫秒，CLS无量纲）
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformanceMetrics {
    pub load_time: f64,
    pub dom_content_loaded: f64,
    pub first_paint: f64,
    pub first_contentful_paint: f64,
    pub largest_contentful_paint: f64,
    pub first_input_delay: f64,
    pub cumulative_layout_shift: f64,
}

/// 阈值超限记录
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdViolation {
    pub vital: &'static str,
    pub value: f64,
    pub threshold: f64,
}

/// 指标报告快照（仅用于诊断日志）
#[derive(Debug, Serialize)]
pub struct MetricsReport {
    #[serde(flatten)]
    pub metrics: PerformanceMetrics,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionProfile>,
}

/// Vitals 监视器
pub struct VitalsMonitor {
    thresholds: Thresholds,
    metrics: PerformanceMetrics,
    observed: HashSet<EntryKind>,
    violations: Vec<ThresholdViolation>,
}

impl VitalsMonitor {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            metrics: PerformanceMetrics::default(),
            observed: HashSet::new(),
            violations: Vec::new(),
        }
    }

    /// 注册单个条目类型的观察器
    pub fn observe(&mut self, kind: EntryKind) {
        self.observed.insert(kind);
    }

    /// 注册全部观察器
    pub fn observe_all(&mut self) {
        for kind in EntryKind::all() {
            self.observed.insert(*kind);
        }
    }

    pub fn is_observing(&self, kind: EntryKind) -> bool {
        self.observed.contains(&kind)
    }

    /// 消费一个性能条目
    ///
    /// 条目类型未注册观察器（能力缺失或已注销）时静默丢弃。
    pub fn record(&mut self, entry: PerformanceEntry) {
        if !self.observed.contains(&entry.kind()) {
            return;
        }

        match entry {
            PerformanceEntry::Paint { name, start_time } => match name.as_str() {
                "first-paint" => self.metrics.first_paint = start_time,
                "first-contentful-paint" => self.metrics.first_contentful_paint = start_time,
                _ => {}
            },
            PerformanceEntry::LargestContentfulPaint { start_time } => {
                // 始终以最后一个条目为准
                self.metrics.largest_contentful_paint = start_time;
                self.check(
                    "LCP",
                    start_time,
                    self.thresholds.largest_contentful_paint,
                );
            }
            PerformanceEntry::FirstInput {
                start_time,
                processing_start,
            } => {
                let delay = processing_start - start_time;
                self.metrics.first_input_delay = delay;
                self.check("FID", delay, self.thresholds.first_input_delay);
            }
            PerformanceEntry::LayoutShift {
                value,
                had_recent_input,
            } => {
                // 用户输入紧随其后的偏移不计入CLS
                if !had_recent_input {
                    self.metrics.cumulative_layout_shift += value;
                }
                self.check(
                    "CLS",
                    self.metrics.cumulative_layout_shift,
                    self.thresholds.cumulative_layout_shift,
                );
            }
        }
    }

    fn check(&mut self, vital: &'static str, value: f64, threshold: f64) {
        if value > threshold {
            tracing::warn!("{} 超过阈值: {} > {}", vital, value, threshold);
            self.violations.push(ThresholdViolation {
                vital,
                value,
                threshold,
            });
        }
    }

    /// 记录页面加载完成时刻
    pub fn mark_loaded(&mut self, at_ms: f64) {
        self.metrics.load_time = at_ms;
    }

    /// 记录 DOMContentLoaded 时刻
    pub fn mark_dom_content_loaded(&mut self, at_ms: f64) {
        self.metrics.dom_content_loaded = at_ms;
    }

    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.metrics
    }

    pub fn violations(&self) -> &[ThresholdViolation] {
        &self.violations
    }

    /// 生成报告快照
    pub fn report(&self, connection: Option<ConnectionProfile>) -> MetricsReport {
        MetricsReport {
            metrics: self.metrics.clone(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            connection,
        }
    }

    /// 把报告写进诊断日志
    pub fn log_report(&self, connection: Option<ConnectionProfile>) {
        let report = self.report(connection);
        match serde_json::to_string(&report) {
            Ok(json) => tracing::info!("性能指标: {}", json),
            Err(e) => tracing::warn!("性能报告序列化失败: {}", e),
        }
    }

    /// 注销全部观察器
    ///
    /// 之后的 `record` 调用全部为空操作；已累计的指标保留可读。
    pub fn teardown(&mut self) {
        self.observed.clear();
    }
}
