//! 翻译器
//!
//! 词表查找、`{{name}}` 参数插值、整篇文档的标记元素改写，
//! 以及语言变更的同步广播。广播在内部状态完全更新之后进行，
//! 监听器看到的一定是新语言和新词表。

use std::collections::HashMap;

use markup5ever_rcdom::Handle;

use crate::network;
use crate::parsers::html::{
    find_elements_with_attr, find_elements_with_class, find_first_element, get_node_attr,
    set_node_attr, set_text_content,
};

use super::catalog;
use super::locale::Locale;
use super::store::{PreferenceStore, STORAGE_KEY};
use super::{I18N_ATTR, I18N_TARGET_ATTR, SWITCHER_CLASS};

/// 语言变更通知载荷
///
/// 对应浏览器端 `languageChanged` 事件的 `{ language, translations }`。
pub struct LanguageChange {
    pub language: Locale,
    pub translations: HashMap<String, String>,
}

type LanguageListener = Box<dyn Fn(&LanguageChange)>;

/// 双语翻译器
///
/// 构造时一次性装入全部支持语言的词表（不做惰性加载），
/// 当前语言从偏好存储恢复，恢复不到再按语言标签检测。
pub struct Translator {
    current: Locale,
    tables: HashMap<Locale, HashMap<String, String>>,
    store: Box<dyn PreferenceStore>,
    listeners: Vec<LanguageListener>,
}

impl Translator {
    /// 创建翻译器
    ///
    /// `language_tag` 是浏览器风格的语言标签（如 `zh-CN`），
    /// 仅在偏好存储中没有已保存语言时参与检测。
    pub fn new(store: Box<dyn PreferenceStore>, language_tag: Option<&str>) -> Self {
        let current = store
            .get(STORAGE_KEY)
            .and_then(|code| Locale::from_code(&code))
            .unwrap_or_else(|| Locale::detect(language_tag));

        let mut tables = HashMap::new();
        for locale in Locale::all() {
            let table: HashMap<String, String> = catalog::table(*locale)
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            tables.insert(*locale, table);
        }

        tracing::debug!("翻译器初始化完成，当前语言: {}", current);

        Self {
            current,
            tables,
            store,
            listeners: Vec::new(),
        }
    }

    /// 当前语言
    pub fn current_locale(&self) -> Locale {
        self.current
    }

    /// 查找翻译文本
    ///
    /// 当前语言 → 回落语言 → 键本身，永不失败。
    pub fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    /// 带参数的查找
    ///
    /// 每个参数替换一次对应的 `{{name}}` 占位符；
    /// 没有对应参数的占位符原样保留。
    pub fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut translation = self.translate(key);

        for (name, value) in params {
            let placeholder = format!("{{{{{name}}}}}");
            translation = translation.replacen(&placeholder, value, 1);
        }

        translation
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.tables
            .get(&self.current)
            .and_then(|table| table.get(key))
            .or_else(|| {
                self.tables
                    .get(&Locale::fallback())
                    .and_then(|table| table.get(key))
            })
            .cloned()
    }

    /// 切换当前语言并改写文档
    ///
    /// 目标语言没有词表时整个调用是空操作。否则：更新当前语言、
    /// 持久化偏好（失败仅告警）、改写文档中全部标记元素、
    /// 最后同步派发语言变更通知。
    pub fn set_locale(&mut self, locale: Locale, document: &Handle) {
        if !self.tables.contains_key(&locale) {
            tracing::warn!("忽略未注册词表的语言: {}", locale);
            return;
        }

        self.current = locale;

        if let Err(e) = self.store.set(STORAGE_KEY, locale.code()) {
            tracing::warn!("语言偏好保存失败: {}", e);
        }

        self.apply(document);
        self.dispatch();

        tracing::debug!("语言已切换为: {}", locale);
    }

    /// 对整篇文档执行一次翻译
    ///
    /// 设置 `<html lang>`，改写所有 `data-i18n` 元素
    /// （默认替换文本内容，`data-i18n-attr` 指定时改写该属性），
    /// 并刷新语言切换控件的显示。
    pub fn apply(&self, document: &Handle) {
        if let Some(html) = find_first_element(document, "html") {
            set_node_attr(&html, "lang", Some(self.current.code().to_string()));
        }

        for element in find_elements_with_attr(document, I18N_ATTR) {
            let Some(key) = get_node_attr(&element, I18N_ATTR) else {
                continue;
            };
            let translation = self.translate(&key);

            match get_node_attr(&element, I18N_TARGET_ATTR) {
                Some(target_attr) => set_node_attr(&element, &target_attr, Some(translation)),
                None => set_text_content(&element, &translation),
            }
        }

        self.update_switchers(document);
    }

    /// 刷新语言切换控件
    fn update_switchers(&self, document: &Handle) {
        let label = match self.current {
            Locale::Zh => "中/EN",
            Locale::En => "EN/中",
        };

        for switcher in find_elements_with_class(document, SWITCHER_CLASS) {
            set_text_content(&switcher, label);
            set_node_attr(&switcher, "data-lang", Some(self.current.code().to_string()));
        }
    }

    /// 订阅语言变更通知
    ///
    /// 通知在 `set_locale` 内部状态全部更新后同步派发，
    /// 携带新语言及其完整词表。
    pub fn on_language_changed(&mut self, listener: impl Fn(&LanguageChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn dispatch(&self) {
        let change = LanguageChange {
            language: self.current,
            translations: self
                .tables
                .get(&self.current)
                .cloned()
                .unwrap_or_default(),
        };

        for listener in &self.listeners {
            listener(&change);
        }
    }

    /// 注册或覆盖单条文案
    ///
    /// 供动态注册的页面补充词表使用；`locale` 必须是支持的语言。
    pub fn register_entry(&mut self, locale: Locale, key: &str, value: &str) {
        if let Some(table) = self.tables.get_mut(&locale) {
            table.insert(key.to_string(), value.to_string());
        }
    }

    /// 从远端加载词表（扩展点）
    ///
    /// 站点当前全部使用内置词表；该路径为将来动态加载预留，
    /// 拉取失败只告警并返回 `false`。
    pub fn load_remote_table(&mut self, locale: Locale, url: &str) -> bool {
        match network::fetch_json::<HashMap<String, String>>(url) {
            Ok(table) => {
                self.tables.insert(locale, table);
                true
            }
            Err(e) => {
                tracing::warn!("加载 {} 词表失败: {}", locale, e);
                false
            }
        }
    }
}
