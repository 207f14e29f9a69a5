//! 格式目录.
//!
//! 按类别分组、顺序固定的格式描述集合. 目录通过 [`CatalogBuilder`] 在初始化时
//! 一次性构建, 之后只读, 可以在线程间自由共享.

use std::collections::HashSet;

use jian_core::{ByteWindow, Category, JianError, JianResult};
use log::debug;

use crate::format_id::FormatId;
use crate::matcher::Matcher;
use crate::matchers;
use crate::sniffer::{PREFIX_CEILING, first_match};

/// 单个格式的描述: 身份 + 匹配器
#[derive(Debug)]
pub struct FormatSpec {
    /// 格式标识 (携带短名称、媒体类型和类别)
    format: FormatId,
    /// 求值前前缀至少需要的字节数
    required_len: usize,
    /// 求值时可能读取的最大前缀长度
    window_len: usize,
    /// 匹配器
    matcher: Box<dyn Matcher>,
}

impl FormatSpec {
    /// 创建格式描述, 所需长度取自匹配器
    pub fn new(format: FormatId, matcher: impl Matcher + 'static) -> Self {
        Self {
            format,
            required_len: matcher.required_len(),
            window_len: matcher.window_len(),
            matcher: Box::new(matcher),
        }
    }

    /// 格式标识
    pub const fn format(&self) -> FormatId {
        self.format
    }

    /// 所属类别
    pub const fn category(&self) -> Category {
        self.format.category()
    }

    /// 求值前前缀至少需要的字节数
    pub const fn required_len(&self) -> usize {
        self.required_len
    }

    /// 求值时可能读取的最大前缀长度
    pub const fn window_len(&self) -> usize {
        self.window_len
    }

    /// 对窗口求值
    ///
    /// 前缀不足 `required_len` 时不调用匹配器, 直接返回 false.
    pub fn evaluate(&self, window: &ByteWindow<'_>) -> bool {
        window.prefix_len() >= self.required_len && self.matcher.evaluate(window)
    }

    /// 最小样本
    pub fn sample(&self) -> Vec<u8> {
        self.matcher.sample()
    }
}

/// 格式目录构建器
///
/// 类别内的注册顺序即求值顺序.
pub struct CatalogBuilder {
    groups: Vec<(Category, Vec<FormatSpec>)>,
}

impl CatalogBuilder {
    /// 创建空的构建器, 类别按固定顺序预先排好
    pub fn new() -> Self {
        Self {
            groups: Category::ORDER
                .iter()
                .map(|&category| (category, Vec::new()))
                .collect(),
        }
    }

    /// 注册一个格式, 追加到其类别的末尾
    pub fn register(&mut self, format: FormatId, matcher: impl Matcher + 'static) -> &mut Self {
        let spec = FormatSpec::new(format, matcher);
        self.groups[format.category().rank()].1.push(spec);
        self
    }

    /// 构建只读目录
    pub fn build(self) -> FormatCatalog {
        let max_required_len = self
            .groups
            .iter()
            .flat_map(|(_, specs)| specs)
            .map(FormatSpec::window_len)
            .max()
            .unwrap_or(0);
        let catalog = FormatCatalog {
            groups: self.groups,
            max_required_len,
        };
        debug!(
            "格式目录构建完成: {} 个格式, 最大前缀需求 {} 字节",
            catalog.len(),
            max_required_len
        );
        catalog
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 只读格式目录
#[derive(Debug)]
pub struct FormatCatalog {
    groups: Vec<(Category, Vec<FormatSpec>)>,
    max_required_len: usize,
}

impl FormatCatalog {
    /// 创建构建器
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// 构建包含所有内置格式的目录
    pub fn builtin() -> Self {
        let mut builder = CatalogBuilder::new();
        matchers::register_all(&mut builder);
        builder.build()
    }

    /// 按求值顺序返回所有类别及其格式
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[FormatSpec])> + '_ {
        self.groups
            .iter()
            .map(|(category, specs)| (*category, specs.as_slice()))
    }

    /// 按求值顺序遍历所有格式
    pub fn iter(&self) -> impl Iterator<Item = &FormatSpec> + '_ {
        self.groups.iter().flat_map(|(_, specs)| specs.iter())
    }

    /// 指定类别的格式
    pub fn specs_in(&self, category: Category) -> &[FormatSpec] {
        &self.groups[category.rank()].1
    }

    /// 查找指定格式的描述
    pub fn get(&self, format: FormatId) -> Option<&FormatSpec> {
        self.specs_in(format.category())
            .iter()
            .find(|spec| spec.format == format)
    }

    /// 格式总数
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, specs)| specs.len()).sum()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 所有格式中最大的前缀需求
    pub const fn max_required_len(&self) -> usize {
        self.max_required_len
    }

    /// 是否支持指定短名称的格式 (忽略大小写)
    pub fn is_supported(&self, name: &str) -> bool {
        FormatId::from_name(name).is_some_and(|format| self.get(format).is_some())
    }

    /// 是否支持指定媒体类型 (忽略大小写)
    pub fn is_mime_supported(&self, mime: &str) -> bool {
        FormatId::from_mime_type(mime).is_some_and(|format| self.get(format).is_some())
    }

    /// 根据短名称查找格式描述
    pub fn find_by_name(&self, name: &str) -> JianResult<&FormatSpec> {
        FormatId::from_name(name)
            .and_then(|format| self.get(format))
            .ok_or_else(|| JianError::FormatNotFound(name.to_string()))
    }

    /// 目录自检
    ///
    /// 检查项:
    /// - 每个格式的前缀需求不超过 `PREFIX_CEILING`, 否则永远不会被求值
    /// - 每个格式只注册一次
    /// - 用每个格式的最小样本按完整目录求值, 必须停在该格式本身
    ///   (没有被之前的格式遮蔽)
    /// - 样本截断到恰好 `required_len` 字节时仍然匹配
    pub fn self_check(&self) -> JianResult<()> {
        let mut seen = HashSet::new();
        for spec in self.iter() {
            let format = spec.format;
            if !seen.insert(format) {
                return Err(JianError::CatalogDefect(format!("{format} 重复注册")));
            }
            if spec.window_len > PREFIX_CEILING {
                return Err(JianError::CatalogDefect(format!(
                    "{format} 需要 {} 字节, 超过前缀上限 {PREFIX_CEILING}",
                    spec.window_len
                )));
            }

            let sample = spec.sample();
            if sample.len() < spec.required_len {
                return Err(JianError::CatalogDefect(format!(
                    "{format} 的样本只有 {} 字节, 少于所需的 {}",
                    sample.len(),
                    spec.required_len
                )));
            }

            let prefix_len = self.max_required_len.min(PREFIX_CEILING);
            let window = ByteWindow::new(&sample, prefix_len);
            match first_match(self, &window) {
                Some(winner) if winner.format == format => {}
                Some(winner) => {
                    return Err(JianError::CatalogDefect(format!(
                        "{format} 被 {} 遮蔽",
                        winner.format
                    )));
                }
                None => {
                    return Err(JianError::CatalogDefect(format!(
                        "{format} 无法识别自己的样本"
                    )));
                }
            }

            // 样本完全位于前缀内时, 检查下界
            if sample.len() == spec.required_len {
                let exact = ByteWindow::new(&sample, spec.required_len);
                if !spec.evaluate(&exact) {
                    return Err(JianError::CatalogDefect(format!(
                        "{format} 在恰好 {} 字节时不匹配",
                        spec.required_len
                    )));
                }
            }
        }
        debug!("格式目录自检通过: {} 个格式", seen.len());
        Ok(())
    }
}
