//! 延迟加载图片改写
//!
//! 浏览器端用 IntersectionObserver 在图片进入视口时把 `data-src`
//! 换成真实来源；静态管线直接完成这次交换，并交给浏览器原生的
//! `loading="lazy"`。启用WebP时先以 HEAD 请求探测同名 `.webp`
//! 是否存在，探测失败一律回落原始来源。

use markup5ever_rcdom::Handle;
use regex::Regex;
use url::Url;

use crate::network;
use crate::parsers::html::{
    add_class, find_elements_with_attr, get_node_attr, get_node_name, set_node_attr,
};

use super::config::ImageOptions;

/// 延迟加载图片的来源属性
pub const LAZY_SRC_ATTR: &str = "data-src";

/// 替代格式存在性探测
pub trait AlternateFormatProbe {
    fn exists(&self, url: &str) -> bool;
}

/// 基于 HEAD 请求的探测
pub struct HttpProbe;

impl AlternateFormatProbe for HttpProbe {
    fn exists(&self, url: &str) -> bool {
        network::head_exists(url)
    }
}

/// 离线模式：从不使用替代格式
pub struct NoProbe;

impl AlternateFormatProbe for NoProbe {
    fn exists(&self, _url: &str) -> bool {
        false
    }
}

/// 把所有 `img[data-src]` 改写为延迟加载的真实来源
///
/// 返回改写的图片数量。`base_url` 用于把相对来源解析成
/// 可探测的绝对地址；解析不了时跳过探测、直接用原始来源。
pub fn rewrite_lazy_images(
    document: &Handle,
    options: &ImageOptions,
    probe: &dyn AlternateFormatProbe,
    base_url: &Url,
) -> usize {
    if !options.lazy_loading {
        return 0;
    }

    let extension_re = Regex::new(r"(?i)\.(jpe?g|png)$").unwrap();
    let mut rewritten = 0;

    for image in find_elements_with_attr(document, LAZY_SRC_ATTR) {
        if get_node_name(&image) != Some("img") {
            continue;
        }
        let Some(src) = get_node_attr(&image, LAZY_SRC_ATTR) else {
            continue;
        };

        let final_src = alternate_source(&src, options, probe, base_url, &extension_re)
            .unwrap_or_else(|| src.clone());

        set_node_attr(&image, "src", Some(final_src));
        set_node_attr(&image, LAZY_SRC_ATTR, None);
        set_node_attr(&image, "loading", Some("lazy".to_string()));
        set_node_attr(&image, "decoding", Some("async".to_string()));
        set_node_attr(
            &image,
            "style",
            Some(format!(
                "transition: opacity {}ms ease-in-out",
                options.fade_in_duration
            )),
        );
        add_class(&image, "loaded");

        rewritten += 1;
    }

    rewritten
}

/// 计算可用的替代格式来源
///
/// WebP未启用、来源扩展名不可转换或探测失败时返回 `None`。
fn alternate_source(
    src: &str,
    options: &ImageOptions,
    probe: &dyn AlternateFormatProbe,
    base_url: &Url,
    extension_re: &Regex,
) -> Option<String> {
    if !options.webp_support || !extension_re.is_match(src) {
        return None;
    }

    let candidate = extension_re.replace(src, ".webp").to_string();

    let probe_url = match base_url.join(&candidate) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            tracing::warn!("图片地址 {} 解析失败，跳过WebP探测: {}", candidate, e);
            return None;
        }
    };

    if probe.exists(&probe_url) {
        Some(candidate)
    } else {
        None
    }
}
