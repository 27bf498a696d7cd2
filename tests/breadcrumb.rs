//! 面包屑集成测试
//!
//! 覆盖页面映射查找、放置策略、占位锚点退化、语言变更的就地刷新
//! 和主导航的 active 同步。

use std::collections::HashMap;

use ledsite::breadcrumb::{self, BreadcrumbBuilder, PageEntry};
use ledsite::i18n::LanguageChange;
use ledsite::i18n::Locale;
use ledsite::parsers::html::{
    find_elements_with_class, find_first_element, get_node_attr, get_node_name, get_text_content,
    has_class,
};
use markup5ever_rcdom::Handle;

mod common {
    include!("common/mod.rs");
}

use common::HtmlTestHelper;

fn list_items(document: &Handle) -> Vec<Handle> {
    let list = find_elements_with_class(document, "breadcrumb")
        .into_iter()
        .next()
        .expect("breadcrumb list should exist");
    let items = list
        .children
        .borrow()
        .iter()
        .filter(|n| get_node_name(n) == Some("li"))
        .cloned()
        .collect();
    items
}

/// fine-pitch.html 渲染两级祖先链接加一个不可点击终点
#[test]
fn test_fine_pitch_breadcrumb_shape() {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_product_page());
    let builder = BreadcrumbBuilder::new();

    assert!(builder.inject(&dom, "fine-pitch.html"));

    let items = list_items(&dom.document);
    assert_eq!(items.len(), 3);

    let home = find_first_element(&items[0], "a").expect("home link");
    assert_eq!(get_node_attr(&home, "href").as_deref(), Some("index.html"));
    assert_eq!(get_text_content(&home), "Home");

    let products = find_first_element(&items[1], "a").expect("products link");
    assert_eq!(
        get_node_attr(&products, "href").as_deref(),
        Some("products.html")
    );

    // 终点不可点击：li.active 里是 span 而不是链接
    assert!(has_class(&items[2], "active"));
    assert!(find_first_element(&items[2], "a").is_none());
    let label = find_first_element(&items[2], "span").expect("terminal label");
    assert_eq!(get_text_content(&label), "Fine Pitch LED");
    assert_eq!(
        get_node_attr(&label, "data-i18n").as_deref(),
        Some("products.fine-pitch")
    );
}

/// 未收录页面不创建任何元素也不报错
#[test]
fn test_unknown_page_is_skipped_silently() {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_product_page());
    let builder = BreadcrumbBuilder::new();

    assert!(!builder.inject(&dom, "unknown.html"));
    assert!(!breadcrumb::has_breadcrumb(&dom.document));
}

/// 有main时插在main之前
#[test]
fn test_placement_before_main() {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_product_page());
    BreadcrumbBuilder::new().inject(&dom, "about.html");

    let body = find_first_element(&dom.document, "body").expect("body");
    let elements: Vec<String> = body
        .children
        .borrow()
        .iter()
        .filter_map(|n| get_node_name(n).map(|s| s.to_string()))
        .collect();

    let nav_pos = elements.iter().position(|n| n == "nav").expect("nav");
    let main_pos = elements.iter().position(|n| n == "main").expect("main");
    assert_eq!(nav_pos + 1, main_pos);
}

/// 没有main时插在header之后
#[test]
fn test_placement_after_header() {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_header_only_page());
    assert!(BreadcrumbBuilder::new().inject(&dom, "about.html"));

    let body = find_first_element(&dom.document, "body").expect("body");
    let elements: Vec<String> = body
        .children
        .borrow()
        .iter()
        .filter_map(|n| get_node_name(n).map(|s| s.to_string()))
        .collect();

    let header_pos = elements.iter().position(|n| n == "header").expect("header");
    let nav_pos = elements.iter().position(|n| n == "nav").expect("nav");
    assert_eq!(header_pos + 1, nav_pos);
}

/// 既无main也无header时不插入
#[test]
fn test_placement_nowhere() {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_bare_page());
    assert!(!BreadcrumbBuilder::new().inject(&dom, "about.html"));
    assert!(!breadcrumb::has_breadcrumb(&dom.document));
}

/// 没有URL映射的祖先键退化为占位锚点
#[test]
fn test_unmapped_ancestor_degrades_to_placeholder() {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_product_page());
    let mut builder = BreadcrumbBuilder::new();
    builder.add_page_mapping(
        "landing.html",
        PageEntry::new("nav.home", &["nav.unmapped-section"]),
    );

    assert!(builder.inject(&dom, "landing.html"));

    let items = list_items(&dom.document);
    let link = find_first_element(&items[0], "a").expect("ancestor link");
    assert_eq!(get_node_attr(&link, "href").as_deref(), Some("#"));
}

/// update 覆盖已有映射并立即重建面包屑
#[test]
fn test_update_overrides_mapping_and_rebuilds() {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_product_page());
    let mut builder = BreadcrumbBuilder::new();
    assert!(builder.inject(&dom, "fine-pitch.html"));

    assert!(builder.update(&dom, "fine-pitch.html", "nav.contact", &["nav.home"]));

    let items = list_items(&dom.document);
    assert_eq!(items.len(), 2);

    let label = find_first_element(&items[1], "span").expect("terminal label");
    assert_eq!(
        get_node_attr(&label, "data-i18n").as_deref(),
        Some("nav.contact")
    );
    assert_eq!(get_text_content(&label), "Contact");
}

/// 语言变更只就地改文本，不重建元素
#[test]
fn test_refresh_texts_updates_in_place() {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_product_page());
    BreadcrumbBuilder::new().inject(&dom, "fine-pitch.html");

    let before = list_items(&dom.document);

    let translations: HashMap<String, String> = [
        ("nav.home", "首页"),
        ("nav.products", "产品中心"),
        ("products.fine-pitch", "小间距LED显示屏"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    breadcrumb::refresh_texts(
        &dom.document,
        &LanguageChange {
            language: Locale::Zh,
            translations,
        },
    );

    let after = list_items(&dom.document);
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after.iter()) {
        assert!(std::rc::Rc::ptr_eq(b, a), "entries must not be rebuilt");
    }

    let label = find_first_element(&after[2], "span").expect("terminal label");
    assert_eq!(get_text_content(&label), "小间距LED显示屏");
}

/// 产品系列页面点亮“产品中心”导航链接
#[test]
fn test_product_page_activates_products_nav() {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_product_page());
    let builder = BreadcrumbBuilder::new();
    builder.mark_active_navigation(&dom.document, "fine-pitch.html");

    let nav = find_elements_with_class(&dom.document, "navbar-nav")
        .into_iter()
        .next()
        .expect("navbar");

    for link in find_elements_with_class(&nav, "nav-link") {
        let href = get_node_attr(&link, "href").unwrap_or_default();
        assert_eq!(
            has_class(&link, "active"),
            href == "products.html",
            "only products link should be active, checked {href}"
        );
    }
}

/// 普通页面只点亮自身链接
#[test]
fn test_exact_match_activates_own_link() {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_product_page());
    BreadcrumbBuilder::new().mark_active_navigation(&dom.document, "contact.html");

    let nav = find_elements_with_class(&dom.document, "navbar-nav")
        .into_iter()
        .next()
        .expect("navbar");

    for link in find_elements_with_class(&nav, "nav-link") {
        let href = get_node_attr(&link, "href").unwrap_or_default();
        assert_eq!(has_class(&link, "active"), href == "contact.html");
    }
}
