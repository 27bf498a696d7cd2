//! 站点页面静态映射
//!
//! 面包屑需要的三张表：页面→(标题键, 祖先键序列)、翻译键→URL、
//! 以及翻译器未初始化时的英文兜底文案。祖先键没有URL映射时
//! 链接退化为占位锚点。

/// 页面的面包屑条目
#[derive(Debug, Clone)]
pub struct PageEntry {
    pub title_key: String,
    pub ancestor_keys: Vec<String>,
}

impl PageEntry {
    pub fn new(title_key: &str, ancestor_keys: &[&str]) -> Self {
        Self {
            title_key: title_key.to_string(),
            ancestor_keys: ancestor_keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// 页面文件名 → 面包屑条目
pub const PAGE_MAP: &[(&str, &str, &[&str])] = &[
    ("index.html", "nav.home", &[]),
    ("about.html", "nav.about", &["nav.home"]),
    ("products.html", "nav.products", &["nav.home"]),
    ("fine-pitch.html", "products.fine-pitch", &["nav.home", "nav.products"]),
    ("outdoor.html", "products.outdoor", &["nav.home", "nav.products"]),
    ("rental.html", "products.rental", &["nav.home", "nav.products"]),
    ("creative.html", "products.creative", &["nav.home", "nav.products"]),
    ("transparent.html", "products.transparent", &["nav.home", "nav.products"]),
    ("solutions.html", "nav.solutions", &["nav.home"]),
    ("cases.html", "nav.cases", &["nav.home"]),
    ("news.html", "nav.news", &["nav.home"]),
    ("support.html", "nav.support", &["nav.home"]),
    ("contact.html", "nav.contact", &["nav.home"]),
    ("product-detail.html", "Product Details", &["nav.home", "nav.products"]),
];

/// 翻译键 → 页面URL
pub const URL_MAP: &[(&str, &str)] = &[
    ("nav.home", "index.html"),
    ("nav.about", "about.html"),
    ("nav.products", "products.html"),
    ("nav.solutions", "solutions.html"),
    ("nav.cases", "cases.html"),
    ("nav.news", "news.html"),
    ("nav.support", "support.html"),
    ("nav.contact", "contact.html"),
    ("products.fine-pitch", "fine-pitch.html"),
    ("products.outdoor", "outdoor.html"),
    ("products.rental", "rental.html"),
    ("products.creative", "creative.html"),
    ("products.transparent", "transparent.html"),
];

/// 翻译器完成初始化之前的兜底显示文案
pub const DEFAULT_TEXTS: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.about", "About Us"),
    ("nav.products", "Products"),
    ("nav.solutions", "Solutions"),
    ("nav.cases", "Cases"),
    ("nav.news", "News"),
    ("nav.support", "Support"),
    ("nav.contact", "Contact"),
    ("products.fine-pitch", "Fine Pitch LED"),
    ("products.outdoor", "Outdoor LED"),
    ("products.rental", "Rental LED"),
    ("products.creative", "Creative LED"),
    ("products.transparent", "Transparent LED"),
    ("Product Details", "Product Details"),
];

/// 产品系列页面：它们同时点亮主导航的“产品中心”链接
pub const PRODUCT_PAGES: &[&str] = &[
    "fine-pitch.html",
    "outdoor.html",
    "rental.html",
    "creative.html",
    "transparent.html",
    "product-detail.html",
];

/// 取兜底文案；没有时返回键本身
pub fn default_text(key: &str) -> &str {
    DEFAULT_TEXTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}
