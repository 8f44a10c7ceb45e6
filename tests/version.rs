use na_snbt::{Config, Kind, TagID, UnknownVersion, Version};

#[test]
fn test_order_and_predicates() {
    assert!(Version::V1_8 < Version::V1_12);
    assert!(Version::V1_14.at_least(Version::V1_12));
    assert!(Version::V1_14.at_most(Version::V1_14));
    assert!(Version::V1_12.is_before(Version::V1_21_5));
    assert!(Version::LATEST.is_after(Version::V1_14));

    assert!(Version::V1_8.is_wild_west());
    assert!(!Version::V1_12.is_wild_west());
    assert!(!Version::V1_8.primitive_arrays());
    assert!(Version::V1_12.long_array_tag());
    assert!(!Version::V1_12.single_quotes());
    assert!(Version::V1_14.single_quotes());
    assert!(!Version::V1_14.unicode_escapes());
    assert!(Version::V1_21_5.array_header_whitespace());
    assert!(Version::V1_12.boolean_literals());
    assert!(!Version::V1_8.exponents());
}

#[test]
fn test_names() {
    for version in Version::ALL {
        assert_eq!(version.to_string().parse::<Version>(), Ok(version));
    }
    assert_eq!(" 1.21.5 ".parse::<Version>(), Ok(Version::V1_21_5));
    assert_eq!("1.13".parse::<Version>(), Err(UnknownVersion("1.13".into())));
}

#[test]
fn test_config_builders() {
    let config = Config::default();
    assert_eq!(config.version, Version::LATEST);
    assert!(!config.minimal);
    assert!(config.retroactive_adoption);
    assert_eq!(config.max_depth, 512);

    let config = Config::new(Version::V1_12)
        .with_minimal(true)
        .with_retroactive_adoption(false)
        .with_max_depth(8)
        .with_version(Version::V1_14);
    assert_eq!(config.version, Version::V1_14);
    assert!(config.minimal);
    assert!(!config.retroactive_adoption);
    assert_eq!(config.max_depth, 8);
}

#[test]
fn test_tag_ids() {
    for byte in 0..=12u8 {
        let tag = TagID::from_u8(byte, Version::LATEST).unwrap();
        assert_eq!(tag.to_u8(), byte);
        assert_eq!(u8::from(tag), byte);
        assert_eq!(tag.kind().tag_id(), tag);
    }
    assert_eq!(TagID::from_u8(12, Version::V1_8), None);
    assert_eq!(TagID::from_u8(13, Version::LATEST), None);
    assert!(TagID::IntArray.is_array());
    assert!(TagID::Compound.is_composite());
    assert_eq!(TagID::LongArray.to_string(), "LongArray");
}

#[test]
fn test_kinds() {
    assert_eq!(Kind::Boolean.tag_id(), TagID::Byte);
    assert!(Kind::Long.is_integer());
    assert!(!Kind::Boolean.is_integer());
    assert!(Kind::Float.is_numeric());
    assert_eq!(Kind::IntArray.array_element(), Some(Kind::Int));
    assert_eq!(Kind::LongArray.array_token(), Some('L'));
    assert_eq!(Kind::from_array_token('B'), Some(Kind::ByteArray));
    assert_eq!(Kind::from_array_token('X'), None);
}
