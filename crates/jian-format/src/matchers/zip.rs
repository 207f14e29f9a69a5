//! ZIP 族消歧.
//!
//! EPUB, OpenDocument, XPI 等格式本质上都是 ZIP, 头部完全相同.
//! 这些格式约定了第一个条目的内容, 因此可以直接比较第一个 Local File
//! Header 中文件名处的字节:
//!
//! ```text
//! 偏移  0: 50 4B 03 04           Local File Header 签名
//! 偏移  4: version/flags/...     (26 字节)
//! 偏移 30: 文件名 [+ 未压缩的内容]
//!          EPUB: "mimetype" + "application/epub+zip"
//!          XPI:  "META-INF/mozilla.rsa"
//! ```
//!
//! 通用 ZIP 匹配器只检查签名, 在目录中必须排在所有派生格式之后.

use byteorder::{ByteOrder, LittleEndian};
use jian_core::ByteWindow;

use crate::matcher::Matcher;

/// Local File Header 签名 ("PK\x03\x04")
pub const LOCAL_FILE_HEADER: u32 = 0x0403_4B50;

/// End of Central Directory 签名 ("PK\x05\x06", 空归档)
pub const END_OF_CENTRAL_DIRECTORY: u32 = 0x0605_4B50;

/// 分卷归档标记 ("PK\x07\x08")
pub const SPANNED_MARKER: u32 = 0x0807_4B50;

/// 第一个条目文件名在 Local File Header 中的偏移
pub const LOCAL_HEADER_NAME_OFFSET: usize = 30;

/// 读取前 4 字节的 ZIP 签名
fn read_signature(window: &ByteWindow<'_>) -> Option<u32> {
    window.range(0, 4).ok().map(LittleEndian::read_u32)
}

/// 签名第 3 字节可接受的值 (记录类型高位)
const RECORD_HI: [u8; 3] = [0x03, 0x05, 0x07];

/// 签名第 4 字节可接受的值 (记录类型低位)
const RECORD_LO: [u8; 3] = [0x04, 0x06, 0x08];

/// 通用 ZIP 匹配器
///
/// 检查 "PK" 之后的两个记录类型字节, 覆盖 LFH/EOCD/分卷标记.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchive;

impl Matcher for ZipArchive {
    fn evaluate(&self, window: &ByteWindow<'_>) -> bool {
        match window.range(0, 4) {
            Ok(&[b'P', b'K', hi, lo]) => RECORD_HI.contains(&hi) && RECORD_LO.contains(&lo),
            _ => false,
        }
    }

    fn required_len(&self) -> usize {
        4
    }

    fn sample(&self) -> Vec<u8> {
        let mut buf = vec![0u8; 4];
        LittleEndian::write_u32(&mut buf, LOCAL_FILE_HEADER);
        buf
    }
}

/// 按第一个条目内容识别的 ZIP 派生格式
#[derive(Debug, Clone, Copy)]
pub struct ZipEntry {
    offset: usize,
    token: &'static [u8],
}

impl ZipEntry {
    /// 在指定偏移处期望 `token`
    pub const fn new(offset: usize, token: &'static [u8]) -> Self {
        Self { offset, token }
    }

    /// 期望第一个条目的文件名 (及紧随的内容) 以 `token` 开头
    pub const fn first_entry(token: &'static [u8]) -> Self {
        Self::new(LOCAL_HEADER_NAME_OFFSET, token)
    }
}

impl Matcher for ZipEntry {
    fn evaluate(&self, window: &ByteWindow<'_>) -> bool {
        read_signature(window) == Some(LOCAL_FILE_HEADER)
            && window.matches_at(self.offset, self.token)
    }

    fn required_len(&self) -> usize {
        self.offset + self.token.len()
    }

    fn sample(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.required_len()];
        LittleEndian::write_u32(&mut buf[..4], LOCAL_FILE_HEADER);
        buf[self.offset..].copy_from_slice(self.token);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPUB: ZipEntry = ZipEntry::first_entry(b"mimetypeapplication/epub+zip");

    /// 构建只含一个 STORED 条目的 Local File Header
    fn make_local_header(name: &[u8], content: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"PK\x03\x04");
        buf.extend_from_slice(&10u16.to_le_bytes()); // version needed
        buf.extend_from_slice(&0u16.to_le_bytes()); // flags
        buf.extend_from_slice(&0u16.to_le_bytes()); // STORED
        buf.extend_from_slice(&[0u8; 4]); // 修改时间/日期
        buf.extend_from_slice(&[0u8; 4]); // CRC-32
        buf.extend_from_slice(&(content.len() as u32).to_le_bytes());
        buf.extend_from_slice(&(content.len() as u32).to_le_bytes());
        buf.extend_from_slice(&(name.len() as u16).to_le_bytes());
        buf.extend_from_slice(&0u16.to_le_bytes()); // extra field
        buf.extend_from_slice(name);
        buf.extend_from_slice(content);
        buf
    }

    #[test]
    fn test_epub_entry() {
        let data = make_local_header(b"mimetype", b"application/epub+zip");
        assert_eq!(data.len(), 58);
        let window = ByteWindow::new(&data, 262);
        assert!(EPUB.evaluate(&window));
        assert!(ZipArchive.evaluate(&window));
    }

    #[test]
    fn test_plain_zip_is_not_epub() {
        let data = make_local_header(b"readme.txt", b"hello");
        let window = ByteWindow::new(&data, 262);
        assert!(!EPUB.evaluate(&window));
        assert!(ZipArchive.evaluate(&window));
    }

    #[test]
    fn test_truncated_entry() {
        let data = make_local_header(b"mimetype", b"application/epub+zip");
        let window = ByteWindow::new(&data[..57], 262);
        assert!(!EPUB.evaluate(&window));
    }

    #[test]
    fn test_zip_signatures() {
        for signature in [LOCAL_FILE_HEADER, END_OF_CENTRAL_DIRECTORY, SPANNED_MARKER] {
            let mut data = [0u8; 4];
            LittleEndian::write_u32(&mut data, signature);
            assert!(ZipArchive.evaluate(&ByteWindow::new(&data, 4)), "{signature:#x}");
        }
        assert!(ZipArchive.evaluate(&ByteWindow::new(b"PK\x03\x06", 4)));
        assert!(!ZipArchive.evaluate(&ByteWindow::new(b"PK\x01\x02", 4)));
        assert!(!ZipArchive.evaluate(&ByteWindow::new(b"PK\x03", 4)));
        assert!(!ZipArchive.evaluate(&ByteWindow::new(b"PKZIP", 8)));
    }

    #[test]
    fn test_entry_requires_local_header() {
        // 空归档签名后不可能有条目
        let mut data = EPUB.sample();
        data[2] = 0x05;
        data[3] = 0x06;
        assert!(!EPUB.evaluate(&ByteWindow::new(&data, 262)));
    }

    #[test]
    fn test_samples() {
        assert_eq!(ZipArchive.sample(), b"PK\x03\x04");
        let sample = EPUB.sample();
        assert_eq!(sample.len(), EPUB.required_len());
        assert!(EPUB.evaluate(&ByteWindow::new(&sample, 262)));
    }
}
