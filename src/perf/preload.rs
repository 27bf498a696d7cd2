//! 关键资源预加载
//!
//! 按性能配置把关键样式表、脚本和字体注入为 `<head>` 里的
//! `<link rel="preload">`。没有 `<head>` 的文档不做处理。

use markup5ever_rcdom::{Handle, RcDom};

use crate::parsers::html::{append_child, create_element_in, get_child_node_by_name};

use super::config::PerfConfig;

/// 注入预加载链接，返回注入数量
pub fn inject_preloads(dom: &RcDom, config: &PerfConfig) -> usize {
    let Some(head) = document_head(&dom.document) else {
        tracing::debug!("文档没有 <head>，跳过资源预加载");
        return 0;
    };

    let mut injected = 0;

    for href in &config.optimization.css.prefetch {
        append_child(
            &head,
            create_element_in(
                dom,
                "link",
                &[("rel", "preload"), ("href", href), ("as", "style")],
            ),
        );
        injected += 1;
    }

    for src in &config.optimization.javascript.preload_critical {
        let href = format!("/js/{src}");
        append_child(
            &head,
            create_element_in(
                dom,
                "link",
                &[("rel", "preload"), ("href", &href), ("as", "script")],
            ),
        );
        injected += 1;
    }

    if let Some(fonts) = &config.optimization.fonts {
        for family in &fonts.preload {
            let href = format!(
                "https://fonts.googleapis.com/css2?family={family}:wght@400;500;600;700&display=swap"
            );
            append_child(
                &head,
                create_element_in(
                    dom,
                    "link",
                    &[("rel", "preload"), ("href", &href), ("as", "style")],
                ),
            );
            injected += 1;
        }
    }

    injected
}

fn document_head(document: &Handle) -> Option<Handle> {
    let html = get_child_node_by_name(document, "html")?;
    get_child_node_by_name(&html, "head")
}
