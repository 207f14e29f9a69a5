//! 格式嗅探.
//!
//! 按固定顺序遍历目录, 第一个匹配的格式胜出:
//!
//! ```text
//! detect(data)
//!   → ByteWindow(data, min(max_required_len, PREFIX_CEILING))
//!   → for category in [image, binary, archive, video, audio]
//!       → for spec in category (注册顺序)
//!           → prefix_len < required_len ? 跳过 : spec.evaluate(window)
//!   → 第一个 true 返回 DetectionResult, 全部失败返回 None
//! ```

use std::sync::OnceLock;

use jian_core::{ByteWindow, Category};
use log::trace;

use crate::catalog::{FormatCatalog, FormatSpec};
use crate::format_id::FormatId;

/// 前缀长度上限
///
/// 不小于内置目录中最大的单格式需求 (TAR 的 ustar 魔数位于 257..262).
pub const PREFIX_CEILING: usize = 262;

/// 建议调用方提供的数据量
///
/// 覆盖前缀上限和 EBML DocType 扫描区域.
pub const PROBE_READ_SIZE: usize = 8192;

/// 嗅探结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionResult {
    /// 识别出的格式
    pub format: FormatId,
    /// 媒体类型 (`type/subtype`)
    pub mime_type: &'static str,
    /// 媒体类型最后一个 '/' 之后的部分
    pub extension: &'static str,
}

impl DetectionResult {
    /// 由格式标识构造结果
    pub fn new(format: FormatId) -> Self {
        let mime_type = format.mime_type();
        let extension = mime_type.rsplit('/').next().unwrap_or(mime_type);
        Self {
            format,
            mime_type,
            extension,
        }
    }

    /// 格式短名称
    pub const fn name(&self) -> &'static str {
        self.format.name()
    }

    /// 格式类别
    pub const fn category(&self) -> Category {
        self.format.category()
    }
}

/// 在目录中按固定顺序查找第一个匹配的格式
pub(crate) fn first_match<'c>(
    catalog: &'c FormatCatalog,
    window: &ByteWindow<'_>,
) -> Option<&'c FormatSpec> {
    catalog
        .categories()
        .find_map(|(_, specs)| first_match_in(specs, window))
}

fn first_match_in<'c>(specs: &'c [FormatSpec], window: &ByteWindow<'_>) -> Option<&'c FormatSpec> {
    specs.iter().find(|spec| spec.evaluate(window))
}

/// 格式嗅探器
///
/// 持有只读目录, 不含可变状态, 可在多个线程中共享同一个实例.
#[derive(Debug)]
pub struct Sniffer {
    catalog: FormatCatalog,
    /// 每次嗅探使用的前缀长度
    prefix_len: usize,
}

impl Sniffer {
    /// 基于给定目录创建嗅探器
    pub fn new(catalog: FormatCatalog) -> Self {
        let prefix_len = catalog.max_required_len().min(PREFIX_CEILING);
        Self {
            catalog,
            prefix_len,
        }
    }

    /// 进程级共享的内置嗅探器
    pub fn builtin() -> &'static Sniffer {
        static BUILTIN: OnceLock<Sniffer> = OnceLock::new();
        BUILTIN.get_or_init(|| Sniffer::new(FormatCatalog::builtin()))
    }

    /// 只读目录
    pub fn catalog(&self) -> &FormatCatalog {
        &self.catalog
    }

    /// 每次嗅探使用的前缀长度
    pub const fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    fn window<'a>(&self, data: &'a [u8]) -> ByteWindow<'a> {
        ByteWindow::new(data, self.prefix_len)
    }

    /// 识别数据的格式
    ///
    /// 未识别返回 None, 这是正常结果而非错误.
    pub fn detect(&self, data: &[u8]) -> Option<DetectionResult> {
        let window = self.window(data);
        let result =
            first_match(&self.catalog, &window).map(|spec| DetectionResult::new(spec.format()));
        match &result {
            Some(r) => trace!("嗅探命中: {} ({})", r.format, r.mime_type),
            None => trace!("嗅探未命中: {} 字节", data.len()),
        }
        result
    }

    /// 只在指定类别内识别
    pub fn detect_in(&self, data: &[u8], category: Category) -> Option<DetectionResult> {
        let window = self.window(data);
        first_match_in(self.catalog.specs_in(category), &window)
            .map(|spec| DetectionResult::new(spec.format()))
    }

    /// 判断数据是否为指定格式
    ///
    /// 只对该格式求值, 不考虑目录中的优先级.
    pub fn matches(&self, data: &[u8], format: FormatId) -> bool {
        let window = self.window(data);
        self.catalog
            .get(format)
            .is_some_and(|spec| spec.evaluate(&window))
    }

    /// 是否为图像
    pub fn is_image(&self, data: &[u8]) -> bool {
        self.detect_in(data, Category::Image).is_some()
    }

    /// 是否为其他二进制格式
    pub fn is_binary(&self, data: &[u8]) -> bool {
        self.detect_in(data, Category::Binary).is_some()
    }

    /// 是否为归档
    pub fn is_archive(&self, data: &[u8]) -> bool {
        self.detect_in(data, Category::Archive).is_some()
    }

    /// 是否为视频
    pub fn is_video(&self, data: &[u8]) -> bool {
        self.detect_in(data, Category::Video).is_some()
    }

    /// 是否为音频
    pub fn is_audio(&self, data: &[u8]) -> bool {
        self.detect_in(data, Category::Audio).is_some()
    }
}

impl Default for Sniffer {
    fn default() -> Self {
        Self::new(FormatCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::ebml::EBML_MAGIC;

    fn sniffer() -> &'static Sniffer {
        Sniffer::builtin()
    }

    #[test]
    fn test_prefix_len() {
        assert_eq!(sniffer().prefix_len(), PREFIX_CEILING);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sniffer().detect(&[]), None);
    }

    #[test]
    fn test_too_short_input() {
        // 1 字节不足以满足任何格式
        let min_required = sniffer()
            .catalog()
            .iter()
            .map(FormatSpec::required_len)
            .min()
            .unwrap();
        assert_eq!(min_required, 2);
        assert_eq!(sniffer().detect(b"M"), None);
    }

    #[test]
    fn test_detection_result_fields() {
        let result = sniffer().detect(b"\x89PNG\r\n\x1a\n").unwrap();
        assert_eq!(result.format, FormatId::Png);
        assert_eq!(result.mime_type, "image/png");
        assert_eq!(result.extension, "png");
        assert_eq!(result.name(), "png");
        assert_eq!(result.category(), Category::Image);

        let epub = DetectionResult::new(FormatId::Epub);
        assert_eq!(epub.extension, "epub+zip");
    }

    #[test]
    fn test_every_sample_detects_itself() {
        for spec in sniffer().catalog().iter() {
            let result = sniffer().detect(&spec.sample());
            assert_eq!(result.map(|r| r.format), Some(spec.format()));
        }
    }

    #[test]
    fn test_unknown_content() {
        assert_eq!(sniffer().detect(b"hello, world\n"), None);
        assert_eq!(sniffer().detect(&[0u8; 1024]), None);
    }

    #[test]
    fn test_detect_in_category() {
        let data = b"OggS\0\0\0\0";
        assert!(sniffer().is_audio(data));
        assert!(!sniffer().is_video(data));
        assert!(sniffer().detect_in(data, Category::Image).is_none());
        assert_eq!(
            sniffer().detect_in(data, Category::Audio).map(|r| r.format),
            Some(FormatId::Ogg)
        );
    }

    #[test]
    fn test_matches_ignores_priority() {
        // deb 同时满足 ar 的签名
        let data = b"!<arch>\ndebian-binary   ";
        assert!(sniffer().matches(data, FormatId::Deb));
        assert!(sniffer().matches(data, FormatId::Ar));
        assert_eq!(sniffer().detect(data).map(|r| r.format), Some(FormatId::Deb));
        assert!(!sniffer().matches(data, FormatId::Zip));
    }

    #[test]
    fn test_ebml_magic_only() {
        let mut data = EBML_MAGIC.to_vec();
        data.resize(4 + 4096, 0);
        assert_eq!(sniffer().detect(&data), None);
        assert!(!sniffer().is_video(&data));
    }

    #[test]
    fn test_prefix_covers_longest_alternative() {
        use crate::matcher::{AnyOf, Signature};

        let mut builder = FormatCatalog::builder();
        builder.register(
            FormatId::Mov,
            AnyOf::new(vec![Signature::at(4, b"ftypqt  "), Signature::at(4, b"moov")]),
        );
        let sniffer = Sniffer::new(builder.build());
        assert_eq!(sniffer.prefix_len(), 12);
        assert!(sniffer.matches(b"\0\0\0\x14ftypqt  \0\0\0\0", FormatId::Mov));
        assert!(sniffer.matches(b"\0\0\0\x08moov", FormatId::Mov));
    }

    #[test]
    fn test_custom_catalog() {
        let mut builder = FormatCatalog::builder();
        builder.register(FormatId::Gif, crate::matcher::Signature::at(0, b"GIF8"));
        let sniffer = Sniffer::new(builder.build());
        assert_eq!(sniffer.prefix_len(), 4);
        assert!(sniffer.detect(b"GIF89a").is_some());
        assert!(sniffer.detect(b"\x89PNG").is_none());
    }
}
