//! HTML解析和处理模块
//!
//! - `dom`: DOM解析、查询与修改
//! - `serializer`: 序列化功能

pub mod dom;
pub mod serializer;

// 重新导出主要的公共 API
pub use dom::{
    add_class, append_child, create_element_in, create_text_node, find_elements_with_attr,
    find_elements_with_class, find_first_element, get_charset, get_child_node_by_name,
    get_node_attr, get_node_name, get_parent_node, get_text_content, has_class, html_to_dom,
    insert_child_at, remove_class, set_node_attr, set_text_content,
};
pub use serializer::serialize_document;
