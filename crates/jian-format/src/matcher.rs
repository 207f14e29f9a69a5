//! 格式匹配器.
//!
//! 每个格式在目录中绑定一个匹配器. 大多数格式只需比较固定偏移处的魔数
//! ([`Signature`], [`AnyOf`]); 共享外层封装的格式使用结构化消歧匹配器
//! (见 [`crate::matchers`]).

use std::fmt;

use jian_core::ByteWindow;

/// 格式匹配器 trait
///
/// 实现必须是纯函数, 且对任意前缀长度不小于 `required_len()` 的窗口都有定义:
/// 数据不足时返回 false, 不得 panic.
pub trait Matcher: fmt::Debug + Send + Sync {
    /// 判断窗口数据是否为此格式
    fn evaluate(&self, window: &ByteWindow<'_>) -> bool;

    /// 求值前前缀至少需要的字节数
    fn required_len(&self) -> usize;

    /// 求值时可能读取的最大前缀长度
    ///
    /// 嗅探器的前缀长度取目录中所有格式的此值的最大值.
    fn window_len(&self) -> usize {
        self.required_len()
    }

    /// 构造能被此匹配器识别的最小样本
    ///
    /// 长度不小于 `required_len()`, 未声明的字节填 0. 用于目录自检.
    fn sample(&self) -> Vec<u8>;
}

/// 固定偏移魔数
///
/// 所有片段都匹配时才算命中.
#[derive(Debug, Clone)]
pub struct Signature {
    parts: Vec<(usize, &'static [u8])>,
}

impl Signature {
    /// 创建在 `offset` 处要求 `bytes` 的魔数
    pub fn at(offset: usize, bytes: &'static [u8]) -> Self {
        Self {
            parts: vec![(offset, bytes)],
        }
    }

    /// 追加一个片段
    pub fn and(mut self, offset: usize, bytes: &'static [u8]) -> Self {
        self.parts.push((offset, bytes));
        self
    }

    /// 把样本中对应位置写入魔数
    fn write_into(&self, buf: &mut Vec<u8>) {
        for &(offset, bytes) in &self.parts {
            let end = offset + bytes.len();
            if buf.len() < end {
                buf.resize(end, 0);
            }
            buf[offset..end].copy_from_slice(bytes);
        }
    }
}

impl Matcher for Signature {
    fn evaluate(&self, window: &ByteWindow<'_>) -> bool {
        self.parts
            .iter()
            .all(|&(offset, bytes)| window.matches_at(offset, bytes))
    }

    fn required_len(&self) -> usize {
        self.parts
            .iter()
            .map(|(offset, bytes)| offset + bytes.len())
            .max()
            .unwrap_or(0)
    }

    fn sample(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.required_len()];
        self.write_into(&mut buf);
        buf
    }
}

/// 多个候选魔数, 任意一个匹配即命中
///
/// 所需长度取各候选的最小值: 较长的候选在数据不足时由 `matches_at`
/// 返回 false. 样本由第一个候选构造.
#[derive(Debug, Clone)]
pub struct AnyOf {
    alternatives: Vec<Signature>,
}

impl AnyOf {
    /// 创建候选集合
    pub fn new(alternatives: Vec<Signature>) -> Self {
        Self { alternatives }
    }
}

impl Matcher for AnyOf {
    fn evaluate(&self, window: &ByteWindow<'_>) -> bool {
        self.alternatives.iter().any(|sig| sig.evaluate(window))
    }

    fn required_len(&self) -> usize {
        self.alternatives
            .iter()
            .map(Signature::required_len)
            .min()
            .unwrap_or(0)
    }

    fn window_len(&self) -> usize {
        self.alternatives
            .iter()
            .map(Signature::required_len)
            .max()
            .unwrap_or(0)
    }

    fn sample(&self) -> Vec<u8> {
        self.alternatives
            .first()
            .map(Signature::sample)
            .unwrap_or_default()
    }
}
