//! # jian-core
//!
//! Jian 格式嗅探框架核心库, 提供错误类型、格式类别和字节窗口.
//!
//! 本 crate 不依赖任何格式知识, 为 `jian-format` 提供底层基础设施.

pub mod category;
pub mod error;
pub mod window;

// 重导出常用类型
pub use category::Category;
pub use error::{JianError, JianResult};
pub use window::ByteWindow;
