//! # jian-format
//!
//! Jian 格式嗅探库, 根据数据开头的若干字节识别二进制格式.
//!
//! 本 crate 只处理调用方提供的字节, 不做任何文件 I/O.
//!
//! ```rust
//! let result = jian_format::detect(b"\x89PNG\r\n\x1a\n").unwrap();
//! assert_eq!(result.mime_type, "image/png");
//! ```

pub mod catalog;
pub mod format_id;
pub mod matcher;
pub mod matchers;
pub mod sniffer;

// 重导出常用类型
pub use catalog::{CatalogBuilder, FormatCatalog, FormatSpec};
pub use format_id::FormatId;
pub use matcher::Matcher;
pub use sniffer::{DetectionResult, PREFIX_CEILING, PROBE_READ_SIZE, Sniffer};

/// 进程级共享的内置嗅探器
pub fn sniffer() -> &'static Sniffer {
    Sniffer::builtin()
}

/// 使用内置目录识别数据格式
pub fn detect(data: &[u8]) -> Option<DetectionResult> {
    Sniffer::builtin().detect(data)
}
