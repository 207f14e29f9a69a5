//! 格式类别定义.
//!
//! 类别顺序决定了嗅探时的求值顺序.

use std::fmt;

/// 格式类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// 图像
    Image,
    /// 其他二进制 (可执行文件、文档、字体等)
    Binary,
    /// 归档与压缩
    Archive,
    /// 视频
    Video,
    /// 音频
    Audio,
}

impl Category {
    /// 固定的求值顺序
    ///
    /// 跨类别的签名冲突按此顺序裁决, 先出现的类别优先.
    pub const ORDER: [Category; 5] = [
        Self::Image,
        Self::Binary,
        Self::Archive,
        Self::Video,
        Self::Audio,
    ];

    /// 获取类别的短名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Binary => "binary",
            Self::Archive => "archive",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }

    /// 在求值顺序中的位置
    pub const fn rank(&self) -> usize {
        match self {
            Self::Image => 0,
            Self::Binary => 1,
            Self::Archive => 2,
            Self::Video => 3,
            Self::Audio => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Image => "图像",
            Self::Binary => "二进制",
            Self::Archive => "归档",
            Self::Video => "视频",
            Self::Audio => "音频",
        };
        write!(f, "{name}")
    }
}
