//! EBML DocType 消歧.
//!
//! Matroska 与 WebM 共用同一个 4 字节 EBML Header 魔数, 只能通过头部内的
//! DocType 元素区分:
//!
//! ```text
//! 1A 45 DF A3  [header size]  ...  42 82  [size]  "webm" / "matroska"
//! |-- 魔数 --|                     |DocType ID|1字节| 文档类型字符串
//! ```
//!
//! DocType 的位置不固定, 这里在魔数之后的有限区域内线性扫描元素 ID.
//! 大小字段按固定 1 字节跳过, 不做 VINT 解码; 实际文件中的 DocType
//! 字符串都很短, 大小总是 1 字节编码.

use jian_core::ByteWindow;
use log::trace;

use crate::matcher::Matcher;

/// EBML Header 魔数
pub const EBML_MAGIC: [u8; 4] = [0x1A, 0x45, 0xDF, 0xA3];

/// DocType 元素 ID
pub const EBML_DOC_TYPE: [u8; 2] = [0x42, 0x82];

/// 魔数之后最多扫描的字节数
pub const EBML_SCAN_LIMIT: usize = 4096;

/// 从 DocType ID 起到字符串起点的距离 (2 字节 ID + 1 字节大小)
const DOC_TYPE_VALUE_SKIP: usize = 3;

/// 按 DocType 区分 EBML 容器的匹配器
#[derive(Debug, Clone, Copy)]
pub struct EbmlDocType {
    doc_type: &'static str,
}

impl EbmlDocType {
    /// 创建匹配指定 DocType 的匹配器
    pub const fn new(doc_type: &'static str) -> Self {
        Self { doc_type }
    }

    /// 期望的文档类型
    pub const fn doc_type(&self) -> &'static str {
        self.doc_type
    }
}

/// 在扫描区域内查找 DocType 元素, 返回其在缓冲区中的绝对偏移
pub fn find_doc_type(window: &ByteWindow<'_>) -> Option<usize> {
    let start = EBML_MAGIC.len();
    let region = window.extended(start, EBML_SCAN_LIMIT);
    region
        .windows(EBML_DOC_TYPE.len())
        .position(|pair| pair == EBML_DOC_TYPE)
        .map(|pos| start + pos)
}

impl Matcher for EbmlDocType {
    fn evaluate(&self, window: &ByteWindow<'_>) -> bool {
        if !window.matches_at(0, &EBML_MAGIC) {
            return false;
        }

        let Some(pos) = find_doc_type(window) else {
            trace!("EBML: 扫描区域内未找到 DocType");
            return false;
        };

        let expected = self.doc_type.as_bytes();
        window
            .extended_range(pos + DOC_TYPE_VALUE_SKIP, expected.len())
            .is_some_and(|value| value == expected)
    }

    fn required_len(&self) -> usize {
        EBML_MAGIC.len()
    }

    fn sample(&self) -> Vec<u8> {
        let doc_type = self.doc_type.as_bytes();
        let mut buf = EBML_MAGIC.to_vec();
        // EBML Header 大小 (1 字节 VINT)
        buf.push(0x80 | (DOC_TYPE_VALUE_SKIP + doc_type.len()) as u8);
        buf.extend_from_slice(&EBML_DOC_TYPE);
        buf.push(0x80 | doc_type.len() as u8);
        buf.extend_from_slice(doc_type);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 构建一个真实布局的 EBML Header
    fn make_ebml_header(doc_type: &str) -> Vec<u8> {
        let mut body = Vec::new();
        // EBMLVersion = 1
        body.extend_from_slice(&[0x42, 0x86, 0x81, 0x01]);
        // EBMLReadVersion = 1
        body.extend_from_slice(&[0x42, 0xF7, 0x81, 0x01]);
        // EBMLMaxIDLength = 4
        body.extend_from_slice(&[0x42, 0xF2, 0x81, 0x04]);
        // EBMLMaxSizeLength = 8
        body.extend_from_slice(&[0x42, 0xF3, 0x81, 0x08]);
        // DocType
        body.extend_from_slice(&EBML_DOC_TYPE);
        body.push(0x80 | doc_type.len() as u8);
        body.extend_from_slice(doc_type.as_bytes());

        let mut buf = EBML_MAGIC.to_vec();
        buf.push(0x80 | body.len() as u8);
        buf.extend_from_slice(&body);
        buf
    }

    #[test]
    fn test_doc_type_distinguishes_siblings() {
        let webm = EbmlDocType::new("webm");
        let mkv = EbmlDocType::new("matroska");

        let data = make_ebml_header("webm");
        let window = ByteWindow::new(&data, 4);
        assert!(webm.evaluate(&window));
        assert!(!mkv.evaluate(&window));

        let data = make_ebml_header("matroska");
        let window = ByteWindow::new(&data, 4);
        assert!(mkv.evaluate(&window));
        assert!(!webm.evaluate(&window));
    }

    #[test]
    fn test_magic_without_doc_type() {
        let mut data = EBML_MAGIC.to_vec();
        data.resize(4 + 4096, 0);
        let window = ByteWindow::new(&data, 4);
        assert_eq!(find_doc_type(&window), None);
        assert!(!EbmlDocType::new("webm").evaluate(&window));
        assert!(!EbmlDocType::new("matroska").evaluate(&window));
    }

    #[test]
    fn test_doc_type_beyond_scan_limit() {
        let mut data = EBML_MAGIC.to_vec();
        data.resize(4 + EBML_SCAN_LIMIT, 0);
        data.extend_from_slice(&[0x42, 0x82, 0x84]);
        data.extend_from_slice(b"webm");
        let window = ByteWindow::new(&data, 4);
        assert!(!EbmlDocType::new("webm").evaluate(&window));
    }

    #[test]
    fn test_doc_type_value_truncated() {
        let mut data = EBML_MAGIC.to_vec();
        data.extend_from_slice(&[0x42, 0x82, 0x84]);
        data.extend_from_slice(b"we");
        let window = ByteWindow::new(&data, 4);
        assert_eq!(find_doc_type(&window), Some(4));
        assert!(!EbmlDocType::new("webm").evaluate(&window));
    }

    #[test]
    fn test_wrong_magic() {
        let mut data = make_ebml_header("webm");
        data[0] = 0x1B;
        assert!(!EbmlDocType::new("webm").evaluate(&ByteWindow::new(&data, 4)));
    }

    #[test]
    fn test_sample_matches_itself() {
        for doc_type in ["webm", "matroska"] {
            let matcher = EbmlDocType::new(doc_type);
            let sample = matcher.sample();
            assert!(sample.len() >= matcher.required_len());
            assert!(matcher.evaluate(&ByteWindow::new(&sample, 4)));
        }
    }
}
