//! # 解析器模块
//!
//! HTML文档的解析、查询、修改和序列化。
//!
//! # 模块组织
//!
//! - `html` - DOM解析与操作、序列化

pub mod html;

// Re-export commonly used items for convenience
pub use html::{
    find_elements_with_attr, find_elements_with_class, find_first_element, get_charset,
    get_node_attr, get_text_content, html_to_dom, serialize_document, set_node_attr,
    set_text_content,
};
