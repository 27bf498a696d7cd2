//! 基础DOM操作
//!
//! HTML字节流到DOM的解析，以及增强管线需要的查询与修改原语：
//! 按属性/类名查找元素、读写属性、读写文本内容、创建并插入节点。

use std::cell::RefCell;
use std::rc::Rc;

use encoding_rs::Encoding;
use html5ever::interface::{Attribute, QualName};
use html5ever::parse_document;
use html5ever::tendril::{format_tendril, StrTendril, TendrilSink};
use html5ever::tree_builder::create_element;
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

/// 将 HTML 字节转换为 DOM
pub fn html_to_dom(data: &[u8], document_encoding: String) -> RcDom {
    let s: String;

    if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (string, _, _) = encoding.decode(data);
        s = string.to_string();
    } else {
        s = String::from_utf8_lossy(data).to_string();
    }

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())
        .unwrap()
}

/// 获取节点名称
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// 设置节点属性；`attr_value` 为 `None` 时删除该属性
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: Option<String>) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let attrs_mut = &mut attrs.borrow_mut();

        if let Some(existing) = attrs_mut
            .iter_mut()
            .find(|attr| &*attr.name.local == attr_name)
        {
            match attr_value {
                Some(value) => {
                    existing.value.clear();
                    existing.value.push_slice(&value);
                }
                None => {
                    attrs_mut.retain(|attr| &*attr.name.local != attr_name);
                }
            }
        } else if let Some(value) = attr_value {
            attrs_mut.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(attr_name)),
                value: format_tendril!("{}", value),
            });
        }
    }
}

/// 根据名称获取直接子节点
pub fn get_child_node_by_name(parent: &Handle, node_name: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| matches!(get_node_name(child), Some(name) if name == node_name))
        .cloned()
}

/// 获取父节点（保留原有的父指针）
pub fn get_parent_node(child: &Handle) -> Option<Handle> {
    let weak = child.parent.take();
    child.parent.set(weak.clone());
    weak.and_then(|w| w.upgrade())
}

/// 深度优先查找第一个指定名称的元素
pub fn find_first_element(node: &Handle, node_name: &str) -> Option<Handle> {
    if matches!(get_node_name(node), Some(name) if name == node_name) {
        return Some(node.clone());
    }

    for child in node.children.borrow().iter() {
        if let Some(found) = find_first_element(child, node_name) {
            return Some(found);
        }
    }

    None
}

/// 收集携带指定属性的所有元素（文档顺序）
pub fn find_elements_with_attr(node: &Handle, attr_name: &str) -> Vec<Handle> {
    let mut found = Vec::new();

    if get_node_attr(node, attr_name).is_some() {
        found.push(node.clone());
    }

    for child in node.children.borrow().iter() {
        found.append(&mut find_elements_with_attr(child, attr_name));
    }

    found
}

/// 收集class列表中含有指定类名的所有元素
pub fn find_elements_with_class(node: &Handle, class_name: &str) -> Vec<Handle> {
    let mut found = Vec::new();

    if has_class(node, class_name) {
        found.push(node.clone());
    }

    for child in node.children.borrow().iter() {
        found.append(&mut find_elements_with_class(child, class_name));
    }

    found
}

/// 检查元素的class属性是否包含指定类名
pub fn has_class(node: &Handle, class_name: &str) -> bool {
    get_node_attr(node, "class")
        .map(|value| value.split_ascii_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

/// 向元素的class属性追加类名（已存在时不变）
pub fn add_class(node: &Handle, class_name: &str) {
    if has_class(node, class_name) {
        return;
    }

    let new_value = match get_node_attr(node, "class") {
        Some(existing) if !existing.trim().is_empty() => {
            format!("{} {}", existing.trim(), class_name)
        }
        _ => class_name.to_string(),
    };
    set_node_attr(node, "class", Some(new_value));
}

/// 从元素的class属性移除类名
pub fn remove_class(node: &Handle, class_name: &str) {
    if let Some(existing) = get_node_attr(node, "class") {
        let remaining: Vec<&str> = existing
            .split_ascii_whitespace()
            .filter(|c| *c != class_name)
            .collect();
        set_node_attr(node, "class", Some(remaining.join(" ")));
    }
}

/// 拼接节点的全部后代文本
pub fn get_text_content(node: &Handle) -> String {
    let mut text = String::new();

    if let NodeData::Text { contents } = &node.data {
        text.push_str(&contents.borrow());
    }

    for child in node.children.borrow().iter() {
        text.push_str(&get_text_content(child));
    }

    text
}

/// 用单个文本节点替换元素的全部子节点
pub fn set_text_content(node: &Handle, text: &str) {
    let text_node = create_text_node(text);
    text_node.parent.set(Some(Rc::downgrade(node)));

    let mut children = node.children.borrow_mut();
    children.clear();
    children.push(text_node);
}

/// 创建文本节点
pub fn create_text_node(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from(text)),
    })
}

/// 在指定DOM中创建元素节点
pub fn create_element_in(dom: &RcDom, name: &str, attrs: &[(&str, &str)]) -> Handle {
    let attributes = attrs
        .iter()
        .map(|(attr_name, attr_value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(*attr_name)),
            value: format_tendril!("{}", attr_value),
        })
        .collect();

    // 元素必须落在HTML命名空间里，序列化器才会把 link/meta 等视为空元素
    create_element(
        dom,
        QualName::new(None, ns!(html), LocalName::from(name)),
        attributes,
    )
}

/// 追加子节点并维护父指针
pub fn append_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// 在指定下标处插入子节点并维护父指针
pub fn insert_child_at(parent: &Handle, index: usize, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));

    let mut children = parent.children.borrow_mut();
    let index = index.min(children.len());
    children.insert(index, child);
}

/// 获取文档字符编码
///
/// 只处理 HTML5 的 `<meta charset="...">` 声明；
/// 未声明时调用方应回落到 UTF-8。
pub fn get_charset(node: &Handle) -> Option<String> {
    let html = get_child_node_by_name(node, "html")?;
    let head = get_child_node_by_name(&html, "head")?;

    for child in head.children.borrow().iter() {
        if matches!(get_node_name(child), Some("meta")) {
            if let Some(charset) = get_node_attr(child, "charset") {
                return Some(charset);
            }
        }
    }

    None
}
