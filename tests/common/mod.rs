// 集成测试公共模块
//
// 提供测试页面模板和DOM辅助函数

use markup5ever_rcdom::{Handle, RcDom};

use ledsite::parsers::html::{get_text_content, html_to_dom, serialize_document};

/// HTML测试辅助
pub struct HtmlTestHelper;

#[allow(dead_code)]
impl HtmlTestHelper {
    /// 从HTML字符串构建测试DOM
    pub fn create_test_dom(html: &str) -> RcDom {
        html_to_dom(html.as_bytes(), "utf-8".to_string())
    }

    /// 序列化为字符串（消耗DOM）
    pub fn serialize(dom: RcDom) -> String {
        String::from_utf8_lossy(&serialize_document(dom, String::new())).to_string()
    }

    /// 典型产品页：带header/nav/main、翻译标记、语言切换器和延迟图片
    pub fn create_product_page() -> String {
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Fine Pitch LED</title>
</head>
<body>
    <header>
        <ul class="navbar-nav">
            <li><a class="nav-link" href="index.html" data-i18n="nav.home">Home</a></li>
            <li><a class="nav-link" href="products.html" data-i18n="nav.products">Products</a></li>
            <li><a class="nav-link" href="contact.html" data-i18n="nav.contact">Contact</a></li>
        </ul>
        <button class="lang-switcher">EN/中</button>
    </header>
    <main>
        <h1 data-i18n="products.fine-pitch">Fine Pitch LED</h1>
        <p data-i18n="products.fine-pitch.subtitle">Unmatched Clarity for Mission-Critical Visuals</p>
        <input data-i18n="form.name" data-i18n-attr="placeholder" placeholder="Your Name">
        <img data-src="images/fine-pitch-hero.jpg" alt="Fine pitch panel">
        <a class="btn" data-i18n="btn.get-quote">Get a Quote</a>
    </main>
</body>
</html>"#
            .to_string()
    }

    /// 只有header、没有main的页面
    pub fn create_header_only_page() -> String {
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>About</title></head>
<body>
    <header><h1 data-i18n="nav.about">About Us</h1></header>
    <section><p>Company history.</p></section>
</body>
</html>"#
            .to_string()
    }

    /// 既无main也无header、也没有任何翻译标记的页面
    pub fn create_bare_page() -> String {
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Bare</title></head>
<body><p>Nothing to enhance here.</p></body>
</html>"#
            .to_string()
    }
}

/// 断言辅助
pub struct AssertionHelper;

#[allow(dead_code)]
impl AssertionHelper {
    /// 断言节点的文本内容（忽略首尾空白）
    pub fn assert_text(node: &Handle, expected: &str, context: &str) {
        assert_eq!(get_text_content(node).trim(), expected, "{context}");
    }
}
