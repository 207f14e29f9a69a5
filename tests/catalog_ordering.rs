//! 目录顺序回归测试.
//!
//! 同一外层签名下的具体格式必须排在通用格式之前, 否则会被遮蔽.

use jian::core::{Category, JianError};
use jian::format::matcher::Signature;
use jian::format::matchers::zip::{ZipArchive, ZipEntry};
use jian::format::{FormatCatalog, FormatId, Sniffer};

/// 具体格式与会遮蔽它的通用格式
const SPECIFIC_BEFORE_GENERAL: &[(FormatId, FormatId)] = &[
    (FormatId::Epub, FormatId::Zip),
    (FormatId::Odt, FormatId::Zip),
    (FormatId::Ods, FormatId::Zip),
    (FormatId::Odp, FormatId::Zip),
    (FormatId::Xpi, FormatId::Zip),
    (FormatId::Deb, FormatId::Ar),
    (FormatId::Cr2, FormatId::Tiff),
    (FormatId::Opus, FormatId::Ogg),
    (FormatId::M4v, FormatId::Mp4),
];

fn position(catalog: &FormatCatalog, format: FormatId) -> usize {
    catalog
        .iter()
        .position(|spec| spec.format() == format)
        .unwrap_or_else(|| panic!("{format} 未注册"))
}

#[test]
fn test_builtin_self_check() {
    let catalog = FormatCatalog::builtin();
    catalog.self_check().unwrap();
    for id in FormatId::ALL {
        assert!(catalog.get(*id).is_some(), "{id} 未注册");
    }
}

#[test]
fn test_specific_formats_precede_general_ones() {
    let sniffer = jian::default_sniffer();
    let catalog = sniffer.catalog();
    for &(specific, general) in SPECIFIC_BEFORE_GENERAL {
        assert_eq!(specific.category(), general.category());
        assert!(
            position(catalog, specific) < position(catalog, general),
            "{specific} 必须先于 {general}"
        );

        // 具体格式的样本同时满足通用格式, 求值必须停在具体格式
        let sample = catalog.get(specific).unwrap().sample();
        assert!(sniffer.matches(&sample, general), "{specific} 的样本应满足 {general}");
        assert_eq!(jian::detect(&sample).map(|r| r.format), Some(specific));

        // 通用格式的样本不应被识别为具体格式
        let sample = catalog.get(general).unwrap().sample();
        assert_eq!(jian::detect(&sample).map(|r| r.format), Some(general));
    }
}

#[test]
fn test_reordered_catalog_is_rejected() {
    let mut builder = FormatCatalog::builder();
    builder
        .register(FormatId::Ar, Signature::at(0, b"!<arch>"))
        .register(FormatId::Deb, Signature::at(0, b"!<arch>\ndebian-binary"));
    let catalog = builder.build();
    assert!(matches!(catalog.self_check(), Err(JianError::CatalogDefect(_))));

    // 通用 ZIP 在前时 EPUB 永远不会命中
    let mut builder = FormatCatalog::builder();
    builder.register(FormatId::Zip, ZipArchive).register(
        FormatId::Epub,
        ZipEntry::first_entry(b"mimetypeapplication/epub+zip"),
    );
    let sniffer = Sniffer::new(builder.build());
    let epub = sniffer.catalog().get(FormatId::Epub).unwrap().sample();
    assert_eq!(sniffer.detect(&epub).map(|r| r.format), Some(FormatId::Zip));
    assert!(sniffer.catalog().self_check().is_err());
}

#[test]
fn test_category_order_breaks_cross_category_ties() {
    // 两个类别注册同一签名时, 类别顺序靠前者胜出
    let mut builder = FormatCatalog::builder();
    builder
        .register(FormatId::Ogg, Signature::at(0, b"SAME"))
        .register(FormatId::Png, Signature::at(0, b"SAME"));
    let sniffer = Sniffer::new(builder.build());
    let result = sniffer.detect(b"SAME").unwrap();
    assert_eq!(result.format, FormatId::Png);
    assert_eq!(result.category(), Category::Image);
}

#[test]
fn test_categories_listed_in_evaluation_order() {
    let catalog = FormatCatalog::builtin();
    let categories: Vec<Category> = catalog.categories().map(|(c, _)| c).collect();
    assert_eq!(
        categories,
        [
            Category::Image,
            Category::Binary,
            Category::Archive,
            Category::Video,
            Category::Audio
        ]
    );
    let flattened: Vec<FormatId> = catalog.iter().map(|s| s.format()).collect();
    let grouped: Vec<FormatId> = catalog
        .categories()
        .flat_map(|(_, specs)| specs.iter().map(|s| s.format()))
        .collect();
    assert_eq!(flattened, grouped);
}
