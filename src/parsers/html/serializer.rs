//! 序列化文档
//!
//! 把处理后的DOM写回字节流，并按文档声明的字符编码重新编码。

use encoding_rs::Encoding;
use html5ever::serialize::{serialize, SerializeOpts};
use markup5ever_rcdom::{RcDom, SerializableHandle};

/// 序列化文档
///
/// `document_encoding` 为空时输出 UTF-8。
pub fn serialize_document(dom: RcDom, document_encoding: String) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();

    let serializable: SerializableHandle = dom.document.into();
    serialize(&mut buf, &serializable, SerializeOpts::default())
        .expect("Unable to serialize DOM into buffer");

    if !document_encoding.is_empty() {
        if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
            let s: &str = &String::from_utf8_lossy(&buf);
            let (data, _, _) = encoding.encode(s);
            buf = data.to_vec();
        }
    }

    buf
}
