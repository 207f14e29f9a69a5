//! 字节窗口.
//!
//! 对输入数据开头 N 字节的只读视图, 每次嗅探创建一个.
//!
//! # 两种访问方式
//! ```text
//! |<------------- 完整缓冲区 (data) ------------->|
//! |<--- 前缀 (prefix_len) --->|
//!   byte()/range(): 只能访问前缀, 越界返回 NeedMoreData
//!   extended()/extended_range(): 可越过前缀, 以缓冲区实际长度为界
//! ```
//!
//! 扩展访问仅供结构化消歧匹配器 (EBML DocType 扫描等) 使用.

use crate::error::{JianError, JianResult};

/// 只读字节窗口
#[derive(Debug, Clone, Copy)]
pub struct ByteWindow<'a> {
    /// 完整的可用缓冲区
    data: &'a [u8],
    /// 前缀长度 (不超过 data.len())
    prefix_len: usize,
}

impl<'a> ByteWindow<'a> {
    /// 创建字节窗口, 前缀长度为 `min(data.len(), max_prefix)`
    pub fn new(data: &'a [u8], max_prefix: usize) -> Self {
        Self {
            data,
            prefix_len: data.len().min(max_prefix),
        }
    }

    /// 前缀长度
    pub const fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    /// 完整缓冲区长度
    pub const fn total_len(&self) -> usize {
        self.data.len()
    }

    /// 前缀是否为空
    pub const fn is_empty(&self) -> bool {
        self.prefix_len == 0
    }

    /// 前缀数据
    pub fn prefix(&self) -> &'a [u8] {
        &self.data[..self.prefix_len]
    }

    /// 读取前缀中的单个字节
    pub fn byte(&self, index: usize) -> JianResult<u8> {
        if index >= self.prefix_len {
            return Err(JianError::NeedMoreData {
                needed: index.saturating_add(1),
                available: self.prefix_len,
            });
        }
        Ok(self.data[index])
    }

    /// 读取前缀中的一段字节
    pub fn range(&self, offset: usize, len: usize) -> JianResult<&'a [u8]> {
        let end = offset
            .checked_add(len)
            .ok_or_else(|| JianError::InvalidArgument(format!("范围溢出: {offset}+{len}")))?;
        if end > self.prefix_len {
            return Err(JianError::NeedMoreData {
                needed: end,
                available: self.prefix_len,
            });
        }
        Ok(&self.data[offset..end])
    }

    /// 判断前缀在 `offset` 处是否为 `expected`
    ///
    /// 数据不足时返回 false.
    pub fn matches_at(&self, offset: usize, expected: &[u8]) -> bool {
        self.range(offset, expected.len())
            .is_ok_and(|bytes| bytes == expected)
    }

    /// 扩展访问: 从 `offset` 起最多 `max_len` 字节, 以缓冲区长度截断
    ///
    /// `offset` 超出缓冲区时返回空切片.
    pub fn extended(&self, offset: usize, max_len: usize) -> &'a [u8] {
        if offset >= self.data.len() {
            return &[];
        }
        let end = offset.saturating_add(max_len).min(self.data.len());
        &self.data[offset..end]
    }

    /// 扩展访问: 恰好 `len` 字节, 超出缓冲区时返回 None
    pub fn extended_range(&self, offset: usize, len: usize) -> Option<&'a [u8]> {
        let end = offset.checked_add(len)?;
        self.data.get(offset..end)
    }
}
