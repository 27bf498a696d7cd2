//! 核心功能
//!
//! 统一错误类型、增强选项和文档增强管线。管线按固定顺序执行：
//! 解析 → 翻译器初始化 → 面包屑注入与导航同步 → 首轮全文翻译
//! （覆盖刚注入的面包屑）→ 可选的语言切换（走广播路径）→
//! 性能改写 → 序列化。
//! 增强过程内部没有致命错误：查不到的映射静默回落，网络失败
//! 回落默认值，只有CLI边界的I/O会把 `SiteError` 交还调用方。

use std::path::PathBuf;

use markup5ever_rcdom::RcDom;
use thiserror::Error;
use url::Url;

use crate::breadcrumb::{self, BreadcrumbBuilder};
use crate::i18n::{
    FilePreferenceStore, Locale, MemoryPreferenceStore, PreferenceStore, Translator,
};
use crate::parsers::html::{get_charset, html_to_dom, serialize_document};
use crate::perf::{
    apply_connection_profile, inject_preloads, rewrite_lazy_images, AlternateFormatProbe,
    ConnectionProfile, HttpProbe, NoProbe, PerfConfig,
};

/// 站点增强错误
#[derive(Error, Debug)]
pub enum SiteError {
    /// I/O错误
    #[error("I/O错误: {0}")]
    Io(#[from] std::io::Error),

    /// URL解析错误
    #[error("URL解析错误: {0}")]
    Url(#[from] url::ParseError),

    /// 网络错误
    #[error("网络错误: {0}")]
    Network(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 偏好存储错误
    #[error("偏好存储错误: {0}")]
    Store(String),
}

/// 错误结果类型别名
pub type SiteResult<T> = Result<T, SiteError>;

/// 文档增强选项
#[derive(Default)]
pub struct EnhanceOptions {
    /// 显式切换到的目标语言（走语言变更广播路径）
    pub locale: Option<Locale>,
    /// 浏览器风格语言标签，参与语言检测
    pub language_tag: Option<String>,
    /// 语言偏好文件；缺省用内存存储（不跨运行持久化）
    pub preference_file: Option<PathBuf>,
    /// 本地性能配置文件
    pub perf_config: Option<PathBuf>,
    /// 远程性能配置地址（本地文件优先）
    pub perf_config_url: Option<String>,
    /// 网络连接画像，用于弱网降级
    pub connection: Option<ConnectionProfile>,
    /// 跳过翻译
    pub no_i18n: bool,
    /// 跳过面包屑
    pub no_breadcrumb: bool,
    /// 跳过性能改写
    pub no_perf: bool,
    /// 以 HEAD 请求探测WebP替代图（离线处理时关闭）
    pub probe_alternate_formats: bool,
    /// 强制指定文档编码；缺省从 `<meta charset>` 推断
    pub document_encoding: Option<String>,
}

/// 对单个HTML文档执行完整的增强管线
///
/// `page_url` 是该页面发布后的URL，用来推导页面标识和解析
/// 相对资源地址。返回序列化后的文档字节。
pub fn enhance_document(
    data: &[u8],
    page_url: &Url,
    options: &EnhanceOptions,
) -> SiteResult<Vec<u8>> {
    let mut document_encoding = options.document_encoding.clone().unwrap_or_default();
    let dom: RcDom = html_to_dom(data, document_encoding.clone());

    if document_encoding.is_empty() {
        if let Some(charset) = get_charset(&dom.document) {
            document_encoding = charset;
        }
    }

    let page = BreadcrumbBuilder::current_page(page_url);
    tracing::debug!("开始增强页面: {}", page);

    let mut translator = if options.no_i18n {
        None
    } else {
        let store: Box<dyn PreferenceStore> = match &options.preference_file {
            Some(path) => Box::new(FilePreferenceStore::open(path.clone())),
            None => Box::new(MemoryPreferenceStore::default()),
        };
        Some(Translator::new(store, options.language_tag.as_deref()))
    };

    // 面包屑注入、主导航同步，并订阅语言变更
    if !options.no_breadcrumb {
        let builder = BreadcrumbBuilder::new();
        builder.inject(&dom, &page);
        builder.mark_active_navigation(&dom.document, &page);

        if let Some(translator) = translator.as_mut() {
            let document = dom.document.clone();
            translator
                .on_language_changed(move |change| breadcrumb::refresh_texts(&document, change));
        }
    }

    // 首轮全文翻译放在面包屑注入之后，恢复或检测出的语言
    // 同样覆盖刚注入的条目
    if let Some(translator) = translator.as_ref() {
        translator.apply(&dom.document);
    }

    // 显式语言切换走完整的广播路径
    if let (Some(translator), Some(locale)) = (translator.as_mut(), options.locale) {
        translator.set_locale(locale, &dom.document);
    }

    if !options.no_perf {
        let mut config = match (&options.perf_config, &options.perf_config_url) {
            (Some(path), _) => PerfConfig::load_from_file(path),
            (None, Some(url)) => PerfConfig::load_from_url(url),
            (None, None) => PerfConfig::default(),
        };
        if let Err(e) = config.validate() {
            tracing::warn!("性能配置无效，使用默认配置: {}", e);
            config = PerfConfig::default();
        }

        let probe: Box<dyn AlternateFormatProbe> = if options.probe_alternate_formats {
            Box::new(HttpProbe)
        } else {
            Box::new(NoProbe)
        };

        let rewritten =
            rewrite_lazy_images(&dom.document, &config.optimization.images, probe.as_ref(), page_url);
        let preloaded = inject_preloads(&dom, &config);
        tracing::debug!("改写延迟图片 {} 张，注入预加载 {} 条", rewritten, preloaded);

        if let Some(connection) = &options.connection {
            apply_connection_profile(&dom.document, &mut config, connection);
        }
    }

    Ok(serialize_document(dom, document_encoding))
}
