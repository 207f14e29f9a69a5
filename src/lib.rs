//! # Jian (鉴)
//!
//! 纯 Rust 实现的二进制格式嗅探库.
//!
//! 只看数据开头的有限字节, 与内置的格式签名目录比对, 返回格式标识和媒体类型,
//! 不依赖文件名或扩展名:
//! - **图像**: JPEG, PNG, GIF, WebP, TIFF, ...
//! - **其他二进制**: PE/ELF 可执行文件, PDF, WebAssembly, 字体, ...
//! - **归档**: ZIP 及其派生格式 (EPUB, OpenDocument, XPI), TAR, gzip, ...
//! - **视频**: MP4, Matroska, WebM, AVI, ...
//! - **音频**: MP3, FLAC, Ogg, Opus, WAV, ...
//!
//! # 快速开始
//!
//! ```rust
//! let data = b"%PDF-1.7\n";
//! let result = jian::detect(data).expect("应识别为 PDF");
//! assert_eq!(result.mime_type, "application/pdf");
//! assert_eq!(result.extension, "pdf");
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `jian-core` | 错误类型、格式类别、字节窗口 |
//! | `jian-format` | 格式目录、匹配器与嗅探器 |

/// 核心类型与工具
pub use jian_core as core;

/// 格式目录与嗅探
pub use jian_format as format;

pub use jian_format::{DetectionResult, FormatId, detect};

/// 获取 Jian 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// 获取进程级共享的内置嗅探器
pub fn default_sniffer() -> &'static jian_format::Sniffer {
    jian_format::sniffer()
}
