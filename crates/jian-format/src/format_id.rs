//! 格式标识符.
//!
//! 每个可识别的格式对应一个枚举值, 携带短名称、媒体类型和类别.

use std::fmt;

use jian_core::Category;

/// 格式标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FormatId {
    // ========================
    // 图像
    // ========================
    /// JPEG
    Jpeg,
    /// JPEG 2000
    Jpeg2000,
    /// PNG
    Png,
    /// GIF
    Gif,
    /// WebP
    Webp,
    /// Canon RAW (CR2)
    Cr2,
    /// TIFF
    Tiff,
    /// BMP
    Bmp,
    /// JPEG XR
    Jxr,
    /// Photoshop
    Psd,
    /// Windows 图标
    Ico,

    // ========================
    // 其他二进制
    // ========================
    /// WebAssembly
    Wasm,
    /// Windows PE 可执行文件
    Exe,
    /// ELF 可执行文件
    Elf,
    /// PDF
    Pdf,
    /// RTF
    Rtf,
    /// Flash (SWF)
    Swf,
    /// SQLite 数据库
    Sqlite,
    /// NES ROM
    Nes,
    /// Chrome 扩展
    Crx,
    /// WOFF 字体
    Woff,
    /// WOFF2 字体
    Woff2,
    /// TrueType 字体
    Ttf,
    /// OpenType 字体
    Otf,

    // ========================
    // 归档与压缩
    // ========================
    /// EPUB (ZIP 封装)
    Epub,
    /// OpenDocument 文本 (ZIP 封装)
    Odt,
    /// OpenDocument 表格 (ZIP 封装)
    Ods,
    /// OpenDocument 演示文稿 (ZIP 封装)
    Odp,
    /// Firefox 扩展 (ZIP 封装)
    Xpi,
    /// ZIP
    Zip,
    /// TAR (ustar)
    Tar,
    /// RAR
    Rar,
    /// gzip
    Gzip,
    /// bzip2
    Bzip2,
    /// 7-Zip
    SevenZip,
    /// XZ
    Xz,
    /// Zstandard
    Zstd,
    /// lzip
    Lzip,
    /// Microsoft Cabinet
    Cab,
    /// RPM 软件包
    Rpm,
    /// Debian 软件包
    Deb,
    /// Unix ar 归档
    Ar,
    /// Unix compress (.Z)
    Compress,

    // ========================
    // 视频
    // ========================
    /// MPEG-4 视频 (Apple M4V)
    M4v,
    /// QuickTime
    Mov,
    /// MPEG-4 Part 14 (MP4)
    Mp4,
    /// Matroska (MKV)
    Matroska,
    /// WebM (Matroska 子集)
    Webm,
    /// Audio Video Interleave (AVI)
    Avi,
    /// Windows Media Video (ASF)
    Wmv,
    /// Flash Video (FLV)
    Flv,
    /// MPEG Program Stream
    Mpeg,
    /// 3GPP
    ThreeGp,

    // ========================
    // 音频
    // ========================
    /// MIDI
    Midi,
    /// MP3
    Mp3,
    /// MPEG-4 音频 (M4A)
    M4a,
    /// Opus (Ogg 封装)
    Opus,
    /// Ogg
    Ogg,
    /// FLAC
    Flac,
    /// WAV (RIFF WAVE)
    Wav,
    /// AMR
    Amr,
    /// AAC (ADTS)
    Aac,
    /// AIFF
    Aiff,
}

impl FormatId {
    /// 获取格式的短名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Jpeg2000 => "jp2",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Webp => "webp",
            Self::Cr2 => "cr2",
            Self::Tiff => "tif",
            Self::Bmp => "bmp",
            Self::Jxr => "jxr",
            Self::Psd => "psd",
            Self::Ico => "ico",
            Self::Wasm => "wasm",
            Self::Exe => "exe",
            Self::Elf => "elf",
            Self::Pdf => "pdf",
            Self::Rtf => "rtf",
            Self::Swf => "swf",
            Self::Sqlite => "sqlite",
            Self::Nes => "nes",
            Self::Crx => "crx",
            Self::Woff => "woff",
            Self::Woff2 => "woff2",
            Self::Ttf => "ttf",
            Self::Otf => "otf",
            Self::Epub => "epub",
            Self::Odt => "odt",
            Self::Ods => "ods",
            Self::Odp => "odp",
            Self::Xpi => "xpi",
            Self::Zip => "zip",
            Self::Tar => "tar",
            Self::Rar => "rar",
            Self::Gzip => "gz",
            Self::Bzip2 => "bz2",
            Self::SevenZip => "7z",
            Self::Xz => "xz",
            Self::Zstd => "zst",
            Self::Lzip => "lz",
            Self::Cab => "cab",
            Self::Rpm => "rpm",
            Self::Deb => "deb",
            Self::Ar => "ar",
            Self::Compress => "z",
            Self::M4v => "m4v",
            Self::Mov => "mov",
            Self::Mp4 => "mp4",
            Self::Matroska => "mkv",
            Self::Webm => "webm",
            Self::Avi => "avi",
            Self::Wmv => "wmv",
            Self::Flv => "flv",
            Self::Mpeg => "mpg",
            Self::ThreeGp => "3gp",
            Self::Midi => "mid",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Opus => "opus",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
            Self::Wav => "wav",
            Self::Amr => "amr",
            Self::Aac => "aac",
            Self::Aiff => "aiff",
        }
    }

    /// 获取格式的媒体类型 (`type/subtype`)
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Jpeg2000 => "image/jp2",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
            Self::Cr2 => "image/x-canon-cr2",
            Self::Tiff => "image/tiff",
            Self::Bmp => "image/bmp",
            Self::Jxr => "image/vnd.ms-photo",
            Self::Psd => "image/vnd.adobe.photoshop",
            Self::Ico => "image/vnd.microsoft.icon",
            Self::Wasm => "application/wasm",
            Self::Exe => "application/vnd.microsoft.portable-executable",
            Self::Elf => "application/x-executable",
            Self::Pdf => "application/pdf",
            Self::Rtf => "application/rtf",
            Self::Swf => "application/x-shockwave-flash",
            Self::Sqlite => "application/vnd.sqlite3",
            Self::Nes => "application/x-nintendo-nes-rom",
            Self::Crx => "application/x-google-chrome-extension",
            Self::Woff => "font/woff",
            Self::Woff2 => "font/woff2",
            Self::Ttf => "font/ttf",
            Self::Otf => "font/otf",
            Self::Epub => "application/epub+zip",
            Self::Odt => "application/vnd.oasis.opendocument.text",
            Self::Ods => "application/vnd.oasis.opendocument.spreadsheet",
            Self::Odp => "application/vnd.oasis.opendocument.presentation",
            Self::Xpi => "application/x-xpinstall",
            Self::Zip => "application/zip",
            Self::Tar => "application/x-tar",
            Self::Rar => "application/vnd.rar",
            Self::Gzip => "application/gzip",
            Self::Bzip2 => "application/x-bzip2",
            Self::SevenZip => "application/x-7z-compressed",
            Self::Xz => "application/x-xz",
            Self::Zstd => "application/zstd",
            Self::Lzip => "application/x-lzip",
            Self::Cab => "application/vnd.ms-cab-compressed",
            Self::Rpm => "application/x-rpm",
            Self::Deb => "application/vnd.debian.binary-package",
            Self::Ar => "application/x-unix-archive",
            Self::Compress => "application/x-compress",
            Self::M4v => "video/x-m4v",
            Self::Mov => "video/quicktime",
            Self::Mp4 => "video/mp4",
            Self::Matroska => "video/x-matroska",
            Self::Webm => "video/webm",
            Self::Avi => "video/x-msvideo",
            Self::Wmv => "video/x-ms-wmv",
            Self::Flv => "video/x-flv",
            Self::Mpeg => "video/mpeg",
            Self::ThreeGp => "video/3gpp",
            Self::Midi => "audio/midi",
            Self::Mp3 => "audio/mpeg",
            Self::M4a => "audio/mp4",
            Self::Opus => "audio/opus",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
            Self::Wav => "audio/wav",
            Self::Amr => "audio/amr",
            Self::Aac => "audio/aac",
            Self::Aiff => "audio/aiff",
        }
    }

    /// 获取格式所属类别
    pub const fn category(&self) -> Category {
        match self {
            Self::Jpeg
            | Self::Jpeg2000
            | Self::Png
            | Self::Gif
            | Self::Webp
            | Self::Cr2
            | Self::Tiff
            | Self::Bmp
            | Self::Jxr
            | Self::Psd
            | Self::Ico => Category::Image,
            Self::Wasm
            | Self::Exe
            | Self::Elf
            | Self::Pdf
            | Self::Rtf
            | Self::Swf
            | Self::Sqlite
            | Self::Nes
            | Self::Crx
            | Self::Woff
            | Self::Woff2
            | Self::Ttf
            | Self::Otf => Category::Binary,
            Self::Epub
            | Self::Odt
            | Self::Ods
            | Self::Odp
            | Self::Xpi
            | Self::Zip
            | Self::Tar
            | Self::Rar
            | Self::Gzip
            | Self::Bzip2
            | Self::SevenZip
            | Self::Xz
            | Self::Zstd
            | Self::Lzip
            | Self::Cab
            | Self::Rpm
            | Self::Deb
            | Self::Ar
            | Self::Compress => Category::Archive,
            Self::M4v
            | Self::Mov
            | Self::Mp4
            | Self::Matroska
            | Self::Webm
            | Self::Avi
            | Self::Wmv
            | Self::Flv
            | Self::Mpeg
            | Self::ThreeGp => Category::Video,
            Self::Midi
            | Self::Mp3
            | Self::M4a
            | Self::Opus
            | Self::Ogg
            | Self::Flac
            | Self::Wav
            | Self::Amr
            | Self::Aac
            | Self::Aiff => Category::Audio,
        }
    }
}

impl FormatId {
    /// 所有已知格式标识的列表
    pub const ALL: &[FormatId] = &[
        Self::Jpeg,
        Self::Jpeg2000,
        Self::Png,
        Self::Gif,
        Self::Webp,
        Self::Cr2,
        Self::Tiff,
        Self::Bmp,
        Self::Jxr,
        Self::Psd,
        Self::Ico,
        Self::Wasm,
        Self::Exe,
        Self::Elf,
        Self::Pdf,
        Self::Rtf,
        Self::Swf,
        Self::Sqlite,
        Self::Nes,
        Self::Crx,
        Self::Woff,
        Self::Woff2,
        Self::Ttf,
        Self::Otf,
        Self::Epub,
        Self::Odt,
        Self::Ods,
        Self::Odp,
        Self::Xpi,
        Self::Zip,
        Self::Tar,
        Self::Rar,
        Self::Gzip,
        Self::Bzip2,
        Self::SevenZip,
        Self::Xz,
        Self::Zstd,
        Self::Lzip,
        Self::Cab,
        Self::Rpm,
        Self::Deb,
        Self::Ar,
        Self::Compress,
        Self::M4v,
        Self::Mov,
        Self::Mp4,
        Self::Matroska,
        Self::Webm,
        Self::Avi,
        Self::Wmv,
        Self::Flv,
        Self::Mpeg,
        Self::ThreeGp,
        Self::Midi,
        Self::Mp3,
        Self::M4a,
        Self::Opus,
        Self::Ogg,
        Self::Flac,
        Self::Wav,
        Self::Amr,
        Self::Aac,
        Self::Aiff,
    ];

    /// 根据短名称查找格式 (忽略大小写)
    pub fn from_name(name: &str) -> Option<FormatId> {
        Self::ALL
            .iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
            .copied()
    }

    /// 根据媒体类型查找格式 (忽略大小写)
    pub fn from_mime_type(mime: &str) -> Option<FormatId> {
        Self::ALL
            .iter()
            .find(|id| id.mime_type().eq_ignore_ascii_case(mime))
            .copied()
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
