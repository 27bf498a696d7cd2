//! 面包屑导航模块
//!
//! 根据页面URL的末段文件名查表生成面包屑：祖先链接序列 + 当前页的
//! 不可点击终点。未收录的页面静默跳过（这是预期情况，不是错误）。
//! 插入位置优先在 `<main>` 之前，其次在 `<header>` 之后，否则不插入。
//! 每个条目同时携带翻译键和英文兜底文案，语言切换时只就地改文本，
//! 不重建元素。同时负责把主导航中指向当前页的链接标记为 active。

pub mod pages;

use std::collections::HashMap;

use markup5ever_rcdom::{Handle, RcDom};
use url::Url;

use crate::i18n::{LanguageChange, I18N_ATTR};
use crate::parsers::html::{
    add_class, append_child, create_element_in, create_text_node, find_elements_with_attr,
    find_elements_with_class, find_first_element, get_node_attr, get_parent_node, insert_child_at,
    remove_class, set_text_content,
};

pub use pages::PageEntry;

/// 面包屑容器的类名
pub const CONTAINER_CLASS: &str = "breadcrumb-nav";

/// 首页哨兵文件名（URL路径为空时使用）
pub const HOME_PAGE: &str = "index.html";

/// 面包屑生成器
///
/// 持有页面映射和URL映射的可变副本，支持为动态页面追加映射。
pub struct BreadcrumbBuilder {
    pages: HashMap<String, PageEntry>,
    urls: HashMap<String, String>,
}

impl Default for BreadcrumbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadcrumbBuilder {
    pub fn new() -> Self {
        let pages = pages::PAGE_MAP
            .iter()
            .map(|(file, title, ancestors)| (file.to_string(), PageEntry::new(title, ancestors)))
            .collect();
        let urls = pages::URL_MAP
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self { pages, urls }
    }

    /// 从页面URL推导当前页面标识
    ///
    /// 取路径最后一段，为空（站点根）时回落到首页哨兵。
    pub fn current_page(url: &Url) -> String {
        url.path_segments()
            .and_then(|segments| segments.last().map(|s| s.to_string()))
            .filter(|segment| !segment.is_empty())
            .unwrap_or_else(|| HOME_PAGE.to_string())
    }

    /// 为动态页面追加映射
    pub fn add_page_mapping(&mut self, filename: &str, entry: PageEntry) {
        self.pages.insert(filename.to_string(), entry);
    }

    /// 覆盖当前页面的面包屑并立即重建
    pub fn update(&mut self, dom: &RcDom, page: &str, title_key: &str, ancestors: &[&str]) -> bool {
        self.add_page_mapping(page, PageEntry::new(title_key, ancestors));
        self.inject(dom, page)
    }

    /// 生成并注入面包屑元素
    ///
    /// 返回是否注入成功。页面未收录或文档中既无 `<main>` 也无
    /// `<header>` 时返回 `false`，文档不变。
    pub fn inject(&self, dom: &RcDom, page: &str) -> bool {
        let Some(entry) = self.pages.get(page) else {
            tracing::debug!("页面 {} 不在面包屑映射中，跳过", page);
            return false;
        };

        let container = match self.find_or_create_container(dom) {
            Some(container) => container,
            None => return false,
        };

        // 重建容器内容
        container.children.borrow_mut().clear();

        let inner = create_element_in(dom, "div", &[("class", "container")]);
        let list = create_element_in(dom, "ol", &[("class", "breadcrumb")]);

        for ancestor_key in &entry.ancestor_keys {
            // 没有URL映射的祖先退化为占位锚点
            let href = self
                .urls
                .get(ancestor_key)
                .map(String::as_str)
                .unwrap_or("#");

            let item = create_element_in(dom, "li", &[]);
            let link = create_element_in(
                dom,
                "a",
                &[("href", href), (I18N_ATTR, ancestor_key)],
            );
            append_child(&link, create_text_node(pages::default_text(ancestor_key)));
            append_child(&item, link);
            append_child(&list, item);
        }

        let terminal = create_element_in(dom, "li", &[("class", "active")]);
        let label = create_element_in(dom, "span", &[(I18N_ATTR, &entry.title_key)]);
        append_child(&label, create_text_node(pages::default_text(&entry.title_key)));
        append_child(&terminal, label);
        append_child(&list, terminal);

        append_child(&inner, list);
        append_child(&container, inner);

        true
    }

    /// 查找既有容器，没有则按放置策略创建
    fn find_or_create_container(&self, dom: &RcDom) -> Option<Handle> {
        if let Some(existing) = find_elements_with_class(&dom.document, CONTAINER_CLASS)
            .into_iter()
            .next()
        {
            return Some(existing);
        }

        let container = create_element_in(dom, "nav", &[("class", CONTAINER_CLASS)]);

        if let Some(main) = find_first_element(&dom.document, "main") {
            let parent = get_parent_node(&main)?;
            let index = child_index(&parent, &main)?;
            insert_child_at(&parent, index, container.clone());
            return Some(container);
        }

        if let Some(header) = find_first_element(&dom.document, "header") {
            let parent = get_parent_node(&header)?;
            let index = child_index(&parent, &header)?;
            insert_child_at(&parent, index + 1, container.clone());
            return Some(container);
        }

        None
    }

    /// 同步主导航的 active 状态
    ///
    /// 链接 `href` 与当前页一致时标记 active；产品系列页面
    /// 额外点亮指向 `products.html` 的链接。
    pub fn mark_active_navigation(&self, document: &Handle, page: &str) {
        let is_product_page = pages::PRODUCT_PAGES.contains(&page);

        for nav in find_elements_with_class(document, "navbar-nav") {
            for link in find_elements_with_class(&nav, "nav-link") {
                remove_class(&link, "active");

                let href = get_node_attr(&link, "href").unwrap_or_default();
                if href == page || (is_product_page && href == "products.html") {
                    add_class(&link, "active");
                }
            }
        }
    }
}

/// 语言变更时就地刷新面包屑文本
///
/// 只改写已渲染条目的文本内容，面包屑元素本身不重建。
/// 载荷词表中没有的键保持键名显示。
pub fn refresh_texts(document: &Handle, change: &LanguageChange) {
    for list in find_elements_with_class(document, "breadcrumb") {
        for element in find_elements_with_attr(&list, I18N_ATTR) {
            let Some(key) = get_node_attr(&element, I18N_ATTR) else {
                continue;
            };
            let text = change
                .translations
                .get(&key)
                .map(String::as_str)
                .unwrap_or(&key);
            set_text_content(&element, text);
        }
    }
}

fn child_index(parent: &Handle, child: &Handle) -> Option<usize> {
    parent
        .children
        .borrow()
        .iter()
        .position(|c| std::rc::Rc::ptr_eq(c, child))
}

/// 文档中是否已有面包屑容器
pub fn has_breadcrumb(document: &Handle) -> bool {
    !find_elements_with_class(document, CONTAINER_CLASS).is_empty()
}
