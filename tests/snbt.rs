use na_snbt::{
    Config, Kind, ParseErrorKind, Parser, Sequence, Value, Version, parse_compound, parse_text,
};

fn latest(text: &str) -> Value {
    parse_text(text, &Config::default()).unwrap()
}

fn error_kind(text: &str, version: Version) -> ParseErrorKind {
    parse_text(text, &Config::new(version)).unwrap_err().kind
}

#[test]
fn test_parse_scalars() {
    assert_eq!(latest("1b").as_byte(), Some(1));
    assert_eq!(latest("-2s").as_short(), Some(-2));
    assert_eq!(latest("3").as_int(), Some(3));
    assert_eq!(latest("4L").as_long(), Some(4));
    assert_eq!(latest("5.5f").as_float(), Some(5.5));
    assert_eq!(latest("6.5").as_double(), Some(6.5));
    assert_eq!(latest("7d").as_double(), Some(7.0));
    assert_eq!(latest(".25").as_double(), Some(0.25));
    assert_eq!(latest("1e2").as_double(), Some(100.0));
    assert_eq!(latest("\"text\"").as_str(), Some("text"));
    assert_eq!(latest("abc").as_str(), Some("abc"));
}

#[test]
fn test_booleans() {
    assert_eq!(latest("true").as_bool(), Some(true));
    assert_eq!(latest("FALSE").as_bool(), Some(false));
    assert_eq!(latest("trueish").as_str(), Some("trueish"));
    assert_eq!(latest("\"true\"").as_str(), Some("true"));
}

#[test]
fn test_not_a_number_falls_back_to_string() {
    assert_eq!(latest("1a").as_str(), Some("1a"));
    assert_eq!(latest("1.5b").as_str(), Some("1.5b"));
    assert_eq!(latest("-").as_str(), Some("-"));
    assert_eq!(latest("1.2.3").as_str(), Some("1.2.3"));
    assert_eq!(latest("[1a,2b]").as_list().unwrap().element_kind(), Some(Kind::String));
}

#[test]
fn test_duplicate_key_last_wins() {
    for version in [Version::V1_8, Version::V1_12, Version::V1_14, Version::V1_21_5] {
        let value = parse_text("{a:1,a:2}", &Config::new(version)).unwrap();
        let compound = value.as_compound().unwrap();
        assert_eq!(compound.len(), 1);
        assert_eq!(compound["a"].as_int(), Some(2));
    }
}

#[test]
fn test_numeric_boundaries() {
    let cases = [
        ("-128b", "-1280b"),
        ("-32768s", "-327680s"),
        ("-2147483648", "-21474836480"),
        ("-9223372036854775808L", "-92233720368547758080L"),
        ("127b", "1270b"),
        ("9223372036854775807L", "92233720368547758070L"),
    ];
    for version in Version::ALL {
        let config = Config::new(version);
        for (fits, overflows) in cases {
            assert!(parse_text(fits, &config).is_ok(), "{fits} under {version}");
            let err = parse_text(overflows, &config).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::NumericOverflow, "{overflows} under {version}");
        }
    }
    assert_eq!(latest("-128b").as_byte(), Some(i8::MIN));
    assert_eq!(latest("-9223372036854775808L").as_long(), Some(i64::MIN));
}

#[test]
fn test_missing_closing_brace() {
    for version in Version::ALL {
        let err = parse_text("{a:1", &Config::new(version)).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingClosingCharacter, "{version}");
        assert_eq!(err.offset, 4, "{version}");
    }
}

#[test]
fn test_trailing_comma() {
    let list = latest("[1,2,]");
    assert_eq!(list.as_list().unwrap().len(), 2);
    let compound = latest("{a:1,}");
    assert_eq!(compound.as_compound().unwrap().len(), 1);
    assert_eq!(
        error_kind("[1,,2]", Version::LATEST),
        ParseErrorKind::EmptyValue
    );
}

#[test]
fn test_single_quotes_gated() {
    assert_eq!(
        parse_text("'it\"s'", &Config::new(Version::V1_14)).unwrap().as_str(),
        Some("it\"s")
    );
    assert!(parse_text("'a'", &Config::new(Version::V1_12)).is_err());
}

#[test]
fn test_escapes_gated() {
    assert_eq!(latest(r#""a\nb\tc""#).as_str(), Some("a\nb\tc"));
    assert_eq!(latest(r#""\u00e9""#).as_str(), Some("é"));
    assert_eq!(latest(r#""\uD83D\uDE00""#).as_str(), Some("😀"));
    assert_eq!(latest(r#""a\\b\"c""#).as_str(), Some("a\\b\"c"));
    assert_eq!(error_kind(r#""a\nb""#, Version::V1_14), ParseErrorKind::InvalidEscape);
    assert_eq!(error_kind(r#""\q""#, Version::LATEST), ParseErrorKind::InvalidEscape);
    assert_eq!(
        error_kind(r#""\uD83D""#, Version::LATEST),
        ParseErrorKind::InvalidEscape
    );
}

#[test]
fn test_unterminated_string() {
    let err = parse_text("\"abc", &Config::default()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingClosingCharacter);
}

#[test]
fn test_typed_arrays() {
    let value = latest("[B;1b,-2b]");
    assert_eq!(value.as_byte_array().unwrap().as_slice(), &[1, -2]);
    let value = latest("[I;1,2,3]");
    assert_eq!(value.as_int_array().unwrap().as_slice(), &[1, 2, 3]);
    let value = latest("[L;1L,5000000000]");
    assert_eq!(value.as_long_array().unwrap().as_slice(), &[1, 5_000_000_000]);
    let value = latest("[I;]");
    assert!(value.as_int_array().unwrap().is_empty());

    assert_eq!(error_kind("[B;300]", Version::LATEST), ParseErrorKind::NumericOverflow);
    assert!(matches!(
        error_kind("[B;1b,abc]", Version::LATEST),
        ParseErrorKind::Conversion(_)
    ));
}

#[test]
fn test_array_header_whitespace() {
    let value = latest("[ I ; 1, 2 ]");
    assert_eq!(value.as_int_array().unwrap().as_slice(), &[1, 2]);
    assert!(parse_text("[ I ; 1, 2 ]", &Config::new(Version::V1_14)).is_err());
}

#[test]
fn test_arrays_before_primitive_arrays() {
    // the header is only a string before the strict grammar
    let value = parse_text("[I;1,2]", &Config::new(Version::V1_8)).unwrap();
    assert_eq!(value.as_list().unwrap().element_kind(), Some(Kind::String));
}

#[test]
fn test_nested_structures() {
    let value = latest("{pos:[1.0,2.0,3.0],tags:{a:[{b:\"c\"}]},empty:[],none:{}}");
    let root = value.as_compound().unwrap();
    let pos = root["pos"].as_list().unwrap();
    assert_eq!(pos.element_kind(), Some(Kind::Double));
    assert_eq!(pos[2].as_double(), Some(3.0));
    let inner = root["tags"].as_compound().unwrap()["a"].as_list().unwrap();
    assert_eq!(inner[0].as_compound().unwrap()["b"].as_str(), Some("c"));
    assert_eq!(root["empty"].as_list().unwrap().element_kind(), None);
    assert!(root["none"].as_compound().unwrap().is_empty());
}

#[test]
fn test_quoted_keys() {
    let value = latest(r#"{"a b":1,' x ':2,"x:y":3}"#);
    let root = value.as_compound().unwrap();
    assert_eq!(root["a b"].as_int(), Some(1));
    assert_eq!(root[" x "].as_int(), Some(2));
    assert_eq!(root["x:y"].as_int(), Some(3));
}

#[test]
fn test_blank_keys_are_rejected() {
    for version in Version::ALL {
        let config = Config::new(version);
        for text in [r#"{"":1}"#, r#"{"  ":1}"#, "{a:1, \"\t\":2}"] {
            let err = parse_text(text, &config).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::EmptyValue, "{text} under {version}");
        }
    }
    assert_eq!(parse_text(r#"{"":1}"#, &Config::default()).unwrap_err().offset, 1);
}

#[test]
fn test_whitespace_everywhere() {
    let value = latest("  { a : [ 1 , 2 ] , b : \"x\" }  ");
    let root = value.as_compound().unwrap();
    assert_eq!(root["a"].as_list().unwrap().len(), 2);
    assert_eq!(root["b"].as_str(), Some("x"));
}

#[test]
fn test_empty_input() {
    assert_eq!(error_kind("", Version::LATEST), ParseErrorKind::EmptyValue);
    assert_eq!(error_kind("   ", Version::LATEST), ParseErrorKind::EmptyValue);
    assert_eq!(error_kind("", Version::V1_8), ParseErrorKind::EmptyValue);
}

#[test]
fn test_trailing_data() {
    let err = parse_text("1 2", &Config::default()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TrailingData);
    assert_eq!(err.offset, 2);
    assert_eq!(error_kind("{} x", Version::V1_8), ParseErrorKind::TrailingData);
}

#[test]
fn test_parse_compound_requires_object() {
    let compound = parse_compound("{a:1b}", &Config::default()).unwrap();
    assert_eq!(compound["a"].as_byte(), Some(1));
    let err = parse_compound("  [1]", &Config::default()).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::Conversion(_)));
    assert_eq!(err.offset, 2);
}

#[test]
fn test_minimal_flag_from_config() {
    let config = Config::default().with_minimal(true);
    let value = parse_text("{a:[1,2],b:\"x\"}", &config).unwrap();
    assert!(value.is_minimal());
    assert!(value.as_compound().unwrap()["a"].as_list().unwrap()[0].is_minimal());
    assert!(!latest("{a:1}").is_minimal());
}

#[test]
fn test_parser_routines() {
    let parser = Parser::new(Config::default());

    let seq = Sequence::new("12, x]");
    let mut cursor = seq.cursor();
    let value = parser.parse_value(&mut cursor, Some(']'), true).unwrap();
    assert_eq!(value.as_int(), Some(12));
    assert_eq!(cursor.peek(), Some(','));

    let mut cursor = Sequence::new("12").cursor();
    let err = parser.parse_value(&mut cursor, Some(']'), true).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingTerminator);
    assert_eq!(err.offset, 2);
    let mut cursor = Sequence::new("12").cursor();
    assert!(parser.parse_value(&mut cursor, None, true).is_ok());
    let legacy = Parser::new(Config::new(Version::V1_8));
    let mut cursor = Sequence::new("a:b").cursor();
    assert_eq!(
        legacy.parse_value(&mut cursor, Some('}'), true).unwrap_err().kind,
        ParseErrorKind::MissingTerminator
    );

    let mut cursor = Sequence::new("abc").cursor();
    assert!(parser.parse_number(&mut cursor).unwrap().is_none());
    assert_eq!(cursor.offset(), 0);
    assert!(parser.parse_boolean(&mut cursor).is_none());
    let value = parser.parse_string(&mut cursor, None, false).unwrap();
    assert_eq!(value.as_str(), Some("abc"));

    let mut cursor = Sequence::new("42b").cursor();
    let value = parser.parse_number(&mut cursor).unwrap().unwrap();
    assert_eq!(value.as_byte(), Some(42));

    let mut cursor = Sequence::new("[1,2] tail").cursor();
    let value = parser.parse_list(&mut cursor).unwrap();
    assert_eq!(value.as_list().unwrap().len(), 2);
    assert_eq!(cursor.remaining().as_str(), " tail");

    let mut cursor = Sequence::new("{a:1}").cursor();
    let value = parser.parse_compound(&mut cursor).unwrap();
    assert_eq!(value.as_compound().unwrap()["a"].as_int(), Some(1));
    assert!(cursor.is_at_end());
}

#[test]
fn test_depth_limit() {
    let deep = format!("{}{}", "[".repeat(100), "]".repeat(100));
    let err = parse_text(&deep, &Config::default().with_max_depth(64)).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TooDeep);
    assert_eq!(err.offset, 64);
    assert!(parse_text(&deep, &Config::default()).is_ok());
}

#[test]
fn test_error_excerpt() {
    let err = parse_text("{a:1,b:[1,2}", &Config::default()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingTerminator);
    assert!(err.excerpt.ends_with("<--[HERE]"));
    assert!(err.to_string().contains("<--[HERE]"));
}
