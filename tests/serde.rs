#![cfg(feature = "serde")]

use na_snbt::{Config, Kind, Value, parse_text};
use serde::Deserialize;

#[test]
fn test_serialize_to_json() {
    let value = parse_text(
        "{name:'Steve',hp:20.5f,lvl:3b,on:true,pos:[1,2],ids:[I;7,8],none:[]}",
        &Config::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "hp": 20.5,
            "ids": [7, 8],
            "lvl": 3,
            "name": "Steve",
            "none": [],
            "on": true,
            "pos": [1, 2],
        })
    );
}

#[test]
fn test_deserialize_from_json() {
    let value: Value =
        serde_json::from_str(r#"{"a": 1, "b": -2, "c": 1.5, "d": "x", "e": [1, "y"], "f": null}"#)
            .unwrap();
    let root = value.as_compound().unwrap();
    // JSON integers arrive as u64 or i64
    assert_eq!(root["a"].as_long(), Some(1));
    assert_eq!(root["b"].as_long(), Some(-2));
    assert_eq!(root["c"].as_double(), Some(1.5));
    assert_eq!(root["d"].as_str(), Some("x"));
    let list = root["e"].as_list().unwrap();
    assert_eq!(list.element_kind(), Some(Kind::String));
    assert_eq!(list[0].as_str(), Some("1"));
    assert!(root["f"].is_end());
}

#[test]
fn test_unsigned_widening() {
    #[derive(serde::Serialize)]
    struct Unsigned {
        a: u8,
        b: u16,
        c: u32,
    }

    let json = serde_json::to_string(&Unsigned { a: 200, b: 60000, c: 4_000_000_000 }).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    let root = value.as_compound().unwrap();
    assert_eq!(root["a"].as_long(), Some(200));

    let value = Value::deserialize(serde::de::value::U8Deserializer::<serde::de::value::Error>::new(200))
        .unwrap();
    assert_eq!(value.as_short(), Some(200));
    let value = Value::deserialize(serde::de::value::U16Deserializer::<serde::de::value::Error>::new(60000))
        .unwrap();
    assert_eq!(value.as_int(), Some(60000));
    let value = Value::deserialize(serde::de::value::U32Deserializer::<serde::de::value::Error>::new(
        4_000_000_000,
    ))
    .unwrap();
    assert_eq!(value.as_long(), Some(4_000_000_000));
    assert!(
        Value::deserialize(serde::de::value::U64Deserializer::<serde::de::value::Error>::new(
            u64::MAX
        ))
        .is_err()
    );
}

#[test]
fn test_json_round_trip_of_strings_and_lists() {
    let value = parse_text("{a:['x','y'],b:{c:\"z\"}}", &Config::default()).unwrap();
    let json = serde_json::to_string(&value).unwrap();
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
