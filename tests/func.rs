use std::collections::{BTreeMap, HashMap};

use fortis::{
    func::{curry2, curry3, fallible, flagged, ignore, try_parse, try_parse_float},
    Lookup, NativeOptionExt, NativeResultExt, Option, Result, SequenceExt, Unit,
};
use test_log::test;

mod common;
use common::parse_port;

fn checked_halve(value: i32) -> (bool, i32) {
    (value % 2 == 0, value / 2)
}

#[test]
fn flagged_functions_chain() {
    let halve = flagged(checked_halve);
    assert_eq!(
        Option::some(12).and_then(halve).and_then(flagged(checked_halve)),
        Option::some(3)
    );
    assert_eq!(
        Option::some(6)
            .and_then(flagged(checked_halve))
            .and_then(flagged(checked_halve)),
        Option::none()
    );
}

#[test]
fn fallible_functions_chain() {
    let parse = fallible(|text: &str| text.parse::<u8>());
    assert_eq!(Option::some("200").and_then(parse), Option::some(200));
    assert_eq!(
        Option::some("300").and_then(fallible(|text: &str| text.parse::<u8>())),
        Option::none()
    );
}

#[test]
fn parsing() {
    assert_eq!(try_parse::<i64>("-12"), Option::some(-12));
    assert_eq!(try_parse::<i64>("twelve"), Option::none());
    assert_eq!(try_parse_float("2.5"), Option::some(2.5));
    assert_eq!(try_parse_float("NaN"), Option::none());
    assert_eq!(["1", "x", "3"].into_iter().choose(try_parse::<u32>), [1, 3]);
}

#[test]
fn curried_functions_apply_partially() {
    let join = curry3(|a: String, b: char, c: &'static str| format!("{a}{b}{c}"));
    let with_prefix = join("key".to_string());
    let with_separator = with_prefix('=');
    assert_eq!(with_separator("value"), "key=value");
    assert_eq!(with_separator("other"), "key=other");
    assert_eq!(with_prefix(':')("v"), "key:v");

    let add = curry2(|a: i32, b: i32| a + b);
    let add_ten = add(10);
    assert_eq!(Option::some(5).map(add_ten), Option::some(15));
}

fn port_of(map: &impl Lookup<str, Value = &'static str>, key: &str) -> Option<u16> {
    map.try_get_value(key).and_then(|text| parse_port(text))
}

#[test]
fn lookups_across_maps() {
    let hash: HashMap<&str, &str> = [("port", "8080"), ("zero", "0")].into();
    let tree: BTreeMap<&str, &str> = [("port", "9090")].into();

    assert_eq!(port_of(&hash, "port"), Option::some(8080));
    assert_eq!(port_of(&hash, "zero"), Option::none());
    assert_eq!(port_of(&tree, "port"), Option::some(9090));
    assert_eq!(port_of(&tree, "zero"), Option::none());
}

#[cfg(feature = "indexmap")]
#[test]
fn lookup_in_index_map() {
    let mut map = indexmap::IndexMap::new();
    map.insert("b".to_string(), 2_u8);
    map.insert("a".to_string(), 1_u8);
    assert_eq!(map.try_get_value("a"), Option::some(&1));
    assert_eq!(map.try_get_value("c"), Option::none());
}

#[test]
fn native_bridge() {
    let native: std::option::Option<u8> = Some(4);
    assert_eq!(native.to_option(), Option::some(4));
    let back: std::option::Option<u8> = Option::some(4).into();
    assert_eq!(back, Some(4));

    let parsed = "x".parse::<i32>().to_result();
    assert!(parsed.is_error());
    let native: std::result::Result<i32, Unit> = Result::success(1).into();
    assert_eq!(native, Ok(1));
    assert_eq!(ignore(native), Unit);
}
