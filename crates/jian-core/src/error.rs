//! 统一错误类型定义.
//!
//! 所有 Jian crate 共用的错误类型, 支持跨模块传播.
//!
//! 注意: "未识别" 不是错误, 嗅探接口用 `Option` 表达.

use thiserror::Error;

/// Jian 框架统一错误类型
#[derive(Debug, Error)]
pub enum JianError {
    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 数据不足, 访问超出了可用前缀
    #[error("数据不足: 需要 {needed} 字节, 仅有 {available} 字节")]
    NeedMoreData {
        /// 访问所需的字节数 (偏移 + 长度)
        needed: usize,
        /// 当前可用的字节数
        available: usize,
    },

    /// 未找到指定的格式
    #[error("未找到格式: {0}")]
    FormatNotFound(String),

    /// 格式目录构建缺陷 (遮蔽、重复匹配等)
    #[error("格式目录缺陷: {0}")]
    CatalogDefect(String),

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// Jian 框架统一 Result 类型
pub type JianResult<T> = Result<T, JianError>;
