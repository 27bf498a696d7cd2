//! 端到端增强管线测试
//!
//! 把完整的产品页字节喂给 `enhance_document`，检查翻译、面包屑、
//! 导航同步和性能改写在同一次调用里协同生效。

use ledsite::{enhance_document, EnhanceOptions, Locale};
use url::Url;

mod common {
    include!("common/mod.rs");
}

use common::HtmlTestHelper;

fn enhance(page: &str, options: &EnhanceOptions) -> String {
    let url = Url::parse(&format!("https://www.lianjin-led.com/{page}")).expect("url");
    let html = HtmlTestHelper::create_product_page();
    let out = enhance_document(html.as_bytes(), &url, options).expect("enhance");
    String::from_utf8(out).expect("utf-8 output")
}

/// 中文增强：翻译、面包屑、导航和懒加载一次到位
#[test]
fn test_full_pipeline_in_chinese() {
    let options = EnhanceOptions {
        locale: Some(Locale::Zh),
        ..Default::default()
    };
    let html = enhance("fine-pitch.html", &options);

    // 翻译
    assert!(html.contains("lang=\"zh\""));
    assert!(html.contains("小间距LED显示屏"));
    assert!(html.contains("placeholder=\"您的姓名\""));
    assert!(html.contains("中/EN"));

    // 面包屑已注入且文本跟随语言变更刷新
    assert!(html.contains("breadcrumb-nav"));
    assert!(html.contains("首页"));

    // 产品系列页点亮“产品中心”导航
    assert!(html.contains("nav-link active"));

    // 懒加载改写
    assert!(html.contains("loading=\"lazy\""));
    assert!(!html.contains("data-src"));

    // 预加载注入；空元素不得带多余的闭合标签
    assert!(html.contains("rel=\"preload\""));
    assert!(!html.contains("</link>"));
}

/// 检测出的中文同样覆盖刚注入的面包屑
#[test]
fn test_detected_locale_translates_breadcrumb() {
    let options = EnhanceOptions {
        language_tag: Some("zh-CN".to_string()),
        ..Default::default()
    };
    let html = enhance("fine-pitch.html", &options);

    assert!(html.contains("lang=\"zh\""));
    assert!(html.contains("breadcrumb-nav"));
    assert!(html.contains("首页"));
    assert!(html.contains("产品中心"));
    assert!(!html.contains(">Home<"));
    assert!(!html.contains(">Products<"));
}

/// 缺省选项下保持英文，仅做结构性增强
#[test]
fn test_default_options_keep_english() {
    let html = enhance("fine-pitch.html", &EnhanceOptions::default());

    assert!(html.contains("lang=\"en\""));
    assert!(html.contains("Fine Pitch LED"));
    assert!(html.contains("EN/中"));
    assert!(html.contains("breadcrumb-nav"));
}

/// 未收录页面：不注入面包屑，其余增强照常
#[test]
fn test_unknown_page_skips_breadcrumb_only() {
    let html = enhance("unknown.html", &EnhanceOptions::default());

    assert!(!html.contains("breadcrumb-nav"));
    assert!(html.contains("loading=\"lazy\""));
}

/// 跳过开关各自独立生效
#[test]
fn test_skip_flags() {
    let options = EnhanceOptions {
        locale: Some(Locale::Zh),
        no_i18n: true,
        no_breadcrumb: true,
        no_perf: true,
        ..Default::default()
    };
    let html = enhance("fine-pitch.html", &options);

    assert!(html.contains("lang=\"en\""));
    assert!(!html.contains("breadcrumb-nav"));
    assert!(html.contains("data-src"));
    assert!(!html.contains("rel=\"preload\""));
}

/// 语言偏好跨调用持久化：第二次增强无须显式指定语言
#[test]
fn test_preference_persists_across_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = dir.path().join("prefs.json");

    let first = EnhanceOptions {
        locale: Some(Locale::Zh),
        preference_file: Some(prefs.clone()),
        ..Default::default()
    };
    enhance("fine-pitch.html", &first);

    let second = EnhanceOptions {
        preference_file: Some(prefs),
        ..Default::default()
    };
    let html = enhance("products.html", &second);

    assert!(html.contains("lang=\"zh\""));
    assert!(html.contains("产品中心"));
    // 恢复出的语言同样覆盖面包屑条目
    assert!(html.contains("首页"));
    assert!(!html.contains(">Home<"));
}

/// 语言标签检测：zh 前缀默认中文，无偏好文件也生效
#[test]
fn test_language_tag_detection() {
    let options = EnhanceOptions {
        language_tag: Some("zh-CN".to_string()),
        ..Default::default()
    };
    let html = enhance("index.html", &options);

    assert!(html.contains("lang=\"zh\""));
}

/// 受限连接画像在管线末尾生效
#[test]
fn test_connection_profile_applies_in_pipeline() {
    let options = EnhanceOptions {
        connection: Some(ledsite::perf::ConnectionProfile {
            effective_type: "2g".to_string(),
            save_data: true,
        }),
        ..Default::default()
    };
    let html = enhance("fine-pitch.html", &options);

    assert!(html.contains("reduced-motion"));
}
