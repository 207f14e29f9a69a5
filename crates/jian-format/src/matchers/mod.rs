//! 内置格式的匹配器注册.
//!
//! 同一类别内的注册顺序即求值顺序: 更具体的签名必须先于可能遮蔽它的
//! 通用签名注册 (如 EPUB 先于 ZIP, deb 先于 ar).

pub mod ebml;
pub mod zip;

use crate::catalog::CatalogBuilder;
use crate::format_id::FormatId;
use crate::matcher::{AnyOf, Signature};

use ebml::EbmlDocType;
use zip::{ZipArchive, ZipEntry};

/// 注册所有内置格式
pub fn register_all(builder: &mut CatalogBuilder) {
    register_images(builder);
    register_binaries(builder);
    register_archives(builder);
    register_videos(builder);
    register_audios(builder);
}

fn register_images(builder: &mut CatalogBuilder) {
    builder.register(FormatId::Jpeg, Signature::at(0, &[0xFF, 0xD8, 0xFF]));
    builder.register(
        FormatId::Jpeg2000,
        Signature::at(0, b"\x00\x00\x00\x0CjP  \r\n\x87\n"),
    );
    builder.register(FormatId::Png, Signature::at(0, b"\x89PNG"));
    builder.register(FormatId::Gif, Signature::at(0, b"GIF"));
    builder.register(FormatId::Webp, Signature::at(0, b"RIFF").and(8, b"WEBP"));
    // CR2 基于 TIFF, 必须先于 TIFF
    builder.register(FormatId::Cr2, Signature::at(0, b"II*\0").and(8, b"CR"));
    builder.register(
        FormatId::Tiff,
        AnyOf::new(vec![Signature::at(0, b"II*\0"), Signature::at(0, b"MM\0*")]),
    );
    builder.register(FormatId::Bmp, Signature::at(0, b"BM"));
    builder.register(FormatId::Jxr, Signature::at(0, b"II\xBC"));
    builder.register(FormatId::Psd, Signature::at(0, b"8BPS"));
    builder.register(FormatId::Ico, Signature::at(0, &[0x00, 0x00, 0x01, 0x00]));
}

fn register_binaries(builder: &mut CatalogBuilder) {
    builder.register(FormatId::Wasm, Signature::at(0, b"\0asm"));
    builder.register(FormatId::Exe, Signature::at(0, b"MZ"));
    builder.register(FormatId::Elf, Signature::at(0, b"\x7FELF"));
    builder.register(FormatId::Pdf, Signature::at(0, b"%PDF"));
    builder.register(FormatId::Rtf, Signature::at(0, b"{\\rtf"));
    builder.register(
        FormatId::Swf,
        AnyOf::new(vec![
            Signature::at(0, b"FWS"),
            Signature::at(0, b"CWS"),
            Signature::at(0, b"ZWS"),
        ]),
    );
    builder.register(FormatId::Sqlite, Signature::at(0, b"SQLite format 3\0"));
    builder.register(FormatId::Nes, Signature::at(0, b"NES\x1A"));
    builder.register(FormatId::Crx, Signature::at(0, b"Cr24"));
    builder.register(FormatId::Woff, Signature::at(0, b"wOFF\x00\x01\x00\x00"));
    builder.register(FormatId::Woff2, Signature::at(0, b"wOF2\x00\x01\x00\x00"));
    builder.register(FormatId::Ttf, Signature::at(0, b"\x00\x01\x00\x00\x00"));
    builder.register(FormatId::Otf, Signature::at(0, b"OTTO\x00"));
}

fn register_archives(builder: &mut CatalogBuilder) {
    // ZIP 派生格式, 全部先于通用 ZIP
    builder.register(
        FormatId::Epub,
        ZipEntry::first_entry(b"mimetypeapplication/epub+zip"),
    );
    builder.register(
        FormatId::Odt,
        ZipEntry::first_entry(b"mimetypeapplication/vnd.oasis.opendocument.text"),
    );
    builder.register(
        FormatId::Ods,
        ZipEntry::first_entry(b"mimetypeapplication/vnd.oasis.opendocument.spreadsheet"),
    );
    builder.register(
        FormatId::Odp,
        ZipEntry::first_entry(b"mimetypeapplication/vnd.oasis.opendocument.presentation"),
    );
    builder.register(FormatId::Xpi, ZipEntry::first_entry(b"META-INF/mozilla.rsa"));
    builder.register(FormatId::Zip, ZipArchive);

    builder.register(FormatId::Tar, Signature::at(257, b"ustar"));
    builder.register(
        FormatId::Rar,
        AnyOf::new(vec![
            Signature::at(0, b"Rar!\x1A\x07\x00"),
            Signature::at(0, b"Rar!\x1A\x07\x01\x00"),
        ]),
    );
    builder.register(FormatId::Gzip, Signature::at(0, &[0x1F, 0x8B, 0x08]));
    builder.register(FormatId::Bzip2, Signature::at(0, b"BZh"));
    builder.register(
        FormatId::SevenZip,
        Signature::at(0, &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C]),
    );
    builder.register(
        FormatId::Xz,
        Signature::at(0, &[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00]),
    );
    builder.register(FormatId::Zstd, Signature::at(0, &[0x28, 0xB5, 0x2F, 0xFD]));
    builder.register(FormatId::Lzip, Signature::at(0, b"LZIP"));
    builder.register(
        FormatId::Cab,
        AnyOf::new(vec![Signature::at(0, b"MSCF"), Signature::at(0, b"ISc(")]),
    );
    builder.register(FormatId::Rpm, Signature::at(0, &[0xED, 0xAB, 0xEE, 0xDB]));
    // deb 是带固定首成员的 ar 归档, 必须先于 ar
    builder.register(FormatId::Deb, Signature::at(0, b"!<arch>\ndebian-binary"));
    builder.register(FormatId::Ar, Signature::at(0, b"!<arch>"));
    builder.register(
        FormatId::Compress,
        AnyOf::new(vec![
            Signature::at(0, &[0x1F, 0x9D]),
            Signature::at(0, &[0x1F, 0xA0]),
        ]),
    );
}

fn register_videos(builder: &mut CatalogBuilder) {
    // M4V 品牌同时出现在 MP4 的品牌表中, 必须先于 MP4
    builder.register(
        FormatId::M4v,
        AnyOf::new(vec![
            Signature::at(4, b"ftypM4V "),
            Signature::at(4, b"ftypM4VH"),
            Signature::at(4, b"ftypM4VP"),
        ]),
    );
    builder.register(
        FormatId::Mov,
        AnyOf::new(vec![Signature::at(4, b"ftypqt  "), Signature::at(4, b"moov")]),
    );
    builder.register(
        FormatId::Mp4,
        AnyOf::new(
            MP4_BRANDS
                .iter()
                .map(|&brand| Signature::at(4, b"ftyp").and(8, brand))
                .collect(),
        ),
    );
    builder.register(FormatId::Matroska, EbmlDocType::new("matroska"));
    builder.register(FormatId::Webm, EbmlDocType::new("webm"));
    builder.register(FormatId::Avi, Signature::at(0, b"RIFF").and(8, b"AVI "));
    builder.register(
        FormatId::Wmv,
        Signature::at(0, &[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9]),
    );
    builder.register(FormatId::Flv, Signature::at(0, b"FLV\x01"));
    builder.register(
        FormatId::Mpeg,
        AnyOf::new(vec![
            Signature::at(0, &[0x00, 0x00, 0x01, 0xBA]),
            Signature::at(0, &[0x00, 0x00, 0x01, 0xB3]),
        ]),
    );
    builder.register(FormatId::ThreeGp, Signature::at(4, b"ftyp3g"));
}

/// 按 MP4 识别的 ftyp 主品牌
///
/// 不含 `M4A `, 避免与音频类别的 M4A 冲突.
const MP4_BRANDS: &[&[u8]] = &[
    b"isom", b"iso2", b"iso5", b"mp41", b"mp42", b"avc1", b"dash", b"M4V ", b"MSNV", b"F4V ",
    b"mmp4", b"NDAS",
];

fn register_audios(builder: &mut CatalogBuilder) {
    builder.register(FormatId::Midi, Signature::at(0, b"MThd"));
    builder.register(
        FormatId::Mp3,
        AnyOf::new(vec![
            Signature::at(0, b"ID3"),
            Signature::at(0, &[0xFF, 0xFB]),
            Signature::at(0, &[0xFF, 0xF3]),
            Signature::at(0, &[0xFF, 0xF2]),
        ]),
    );
    builder.register(FormatId::M4a, Signature::at(4, b"ftypM4A"));
    // Opus 是 Ogg 的特化, 必须先于 Ogg
    builder.register(FormatId::Opus, Signature::at(0, b"OggS").and(28, b"OpusHead"));
    builder.register(FormatId::Ogg, Signature::at(0, b"OggS"));
    builder.register(FormatId::Flac, Signature::at(0, b"fLaC"));
    builder.register(FormatId::Wav, Signature::at(0, b"RIFF").and(8, b"WAVE"));
    builder.register(FormatId::Amr, Signature::at(0, b"#!AMR\n"));
    builder.register(
        FormatId::Aac,
        AnyOf::new(vec![
            Signature::at(0, &[0xFF, 0xF1]),
            Signature::at(0, &[0xFF, 0xF9]),
        ]),
    );
    builder.register(FormatId::Aiff, Signature::at(0, b"FORM").and(8, b"AIFF"));
}
