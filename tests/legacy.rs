use na_snbt::{Config, Kind, List, ParseErrorKind, Value, Version, parse_text};

fn legacy(text: &str) -> Value {
    parse_text(text, &Config::new(Version::V1_8)).unwrap()
}

#[test]
fn test_index_prefixes_match_modern_list() {
    let old = legacy("[0:1,1:2]");
    let modern = parse_text("[1,2]", &Config::default()).unwrap();
    assert_eq!(old, modern);
    assert_eq!(old.as_list().unwrap().element_kind(), Some(Kind::Int));
}

#[test]
fn test_unquoted_values_with_structure_characters() {
    let value = legacy("{id:minecraft:stone,Damage:0s}");
    let root = value.as_compound().unwrap();
    assert_eq!(root["id"].as_str(), Some("minecraft:stone"));
    assert_eq!(root["Damage"].as_short(), Some(0));
}

#[test]
fn test_quoted_strings() {
    let value = legacy(r#"{a:"x,y",b:"say \"hi\"",c:"back\slash"}"#);
    let root = value.as_compound().unwrap();
    assert_eq!(root["a"].as_str(), Some("x,y"));
    assert_eq!(root["b"].as_str(), Some("say \"hi\""));
    assert_eq!(root["c"].as_str(), Some("back\\slash"));
}

#[test]
fn test_single_quotes_are_text() {
    assert_eq!(legacy("'a'").as_str(), Some("'a'"));
}

#[test]
fn test_mismatched_list_elements_are_dropped() {
    let value = legacy("[1,abc,2]");
    let list = value.as_list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].as_int(), Some(2));
}

#[test]
fn test_exponents_are_strings() {
    assert_eq!(legacy("1e5").as_str(), Some("1e5"));
    assert_eq!(legacy("1.5").as_double(), Some(1.5));
}

#[test]
fn test_booleans_and_spaces() {
    let value = legacy("{ flag : true , name : two words }");
    let root = value.as_compound().unwrap();
    assert_eq!(root["flag"].as_bool(), Some(true));
    assert_eq!(root["name"].as_str(), Some("two words"));
}

#[test]
fn test_nested() {
    let value = legacy("{display:{Lore:[\"a\",\"b\"]},ench:[{id:16s,lvl:5s}]}");
    let root = value.as_compound().unwrap();
    let lore = root["display"].as_compound().unwrap()["Lore"].as_list().unwrap();
    assert_eq!(lore.len(), 2);
    let ench = root["ench"].as_list().unwrap();
    assert_eq!(ench[0].as_compound().unwrap()["lvl"].as_short(), Some(5));
}

#[test]
fn test_errors() {
    let config = Config::new(Version::V1_8);
    let err = parse_text("{a:1", &config).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingClosingCharacter);
    assert_eq!(err.offset, 4);

    assert_eq!(
        parse_text("{a:[1}", &config).unwrap_err().kind,
        ParseErrorKind::InvalidCharacter
    );
    assert_eq!(
        parse_text("[1,,2]", &config).unwrap_err().kind,
        ParseErrorKind::EmptyValue
    );
    assert_eq!(
        parse_text("{a}", &config).unwrap_err().kind,
        ParseErrorKind::MissingTerminator
    );
    assert_eq!(
        parse_text("\"abc", &config).unwrap_err().kind,
        ParseErrorKind::MissingClosingCharacter
    );
    assert_eq!(
        parse_text("128b", &config).unwrap_err().kind,
        ParseErrorKind::NumericOverflow
    );
}

#[test]
fn test_minimal_empty_strings_read_back() {
    let config = Config::new(Version::V1_8);
    let mut list = List::new();
    list.add(Value::from(""), &config).unwrap();
    list.add(Value::from("x"), &config).unwrap();
    let value = Value::from(list);
    let text = value.render_minimal(&config);
    assert_eq!(text, r#"["",x]"#);
    assert_eq!(parse_text(&text, &config).unwrap(), value);

    let root = Value::from("");
    assert_eq!(root.render_minimal(&config), r#""""#);
    assert_eq!(legacy(&root.render_minimal(&config)).as_str(), Some(""));
}
