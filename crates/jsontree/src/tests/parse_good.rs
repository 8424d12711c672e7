use alloc::{string::String, vec::Vec};

use rstest::rstest;

use crate::{Kind, Node, ParserOptions, deserialize, deserialize_slice, deserialize_with};

fn keys(node: &Node) -> Vec<&str> {
    node.iter().filter_map(Node::key).collect()
}

#[rstest]
#[case("[]", 0)]
#[case("[1]", 1)]
#[case("[1, \"two\", true, null]", 4)]
#[case("[[], {}, [[]]]", 3)]
#[case(r#"{"a": 1, "b": [2, 3], "c": {}}"#, 3)]
#[case("\n\t[ 1 ,2\r\n]  ", 2)]
fn child_count_matches_source(#[case] text: &str, #[case] count: usize) {
    let root = deserialize(text).unwrap();
    assert_eq!(root.len(), count);
    assert_eq!(root.iter().count(), count);
}

#[test]
fn duplicate_keys_keep_source_order() {
    let root = deserialize(r#"{"a":1,"b":2,"a":3}"#).unwrap();
    assert_eq!(keys(&root), ["a", "b", "a"]);
    assert_eq!(root.get_keyed("a").unwrap().get::<i32>(), Ok(1));
    assert_eq!(root.get_indexed(2).unwrap().get::<i32>(), Ok(3));
}

#[test]
#[allow(clippy::approx_constant)]
fn numeric_coercion_is_deferred() {
    let root = deserialize(r#"{"x": 3.14}"#).unwrap();
    let x = root.get_keyed("x").unwrap();
    assert_eq!(x.kind(), Kind::Numeric);
    assert_eq!(x.as_literal(), Some("3.14"));
    assert_eq!(x.get::<f64>(), Ok(3.14));
    assert!(x.get::<i32>().is_err());
}

#[test]
fn nested_arrays_balance() {
    let root = deserialize("[1,[2,3],4]").unwrap();
    assert_eq!(root.kind(), Kind::Array);
    assert_eq!(root.len(), 3);

    let inner = root.get_indexed(1).unwrap();
    assert_eq!(inner.kind(), Kind::Array);
    let values: Vec<u8> = inner.iter().map(|n| n.get().unwrap()).collect();
    assert_eq!(values, [2, 3]);
    assert_eq!(root.get_indexed(2).unwrap().get::<u8>(), Ok(4));
}

#[test]
fn escaped_quote_stays_raw() {
    let root = deserialize(r#"{"s": "a\"b"}"#).unwrap();
    let s = root.get_keyed("s").unwrap();
    assert_eq!(s.get::<&str>(), Ok(r#"a\"b"#));
    assert_eq!(s.get::<&str>().unwrap().chars().count(), 4);
    assert_eq!(s.unescaped().unwrap(), "a\"b");
}

#[test]
fn escaped_keys_are_matched_raw() {
    let root = deserialize(r#"{"a\nb": 1}"#).unwrap();
    assert!(root.contains_key(r"a\nb"));
    assert!(!root.contains_key("a\nb"));
}

#[rstest]
#[case("{}", Kind::Object)]
#[case("[]", Kind::Array)]
#[case("{ }", Kind::Object)]
#[case("[\n]", Kind::Array)]
fn empty_containers(#[case] text: &str, #[case] kind: Kind) {
    let root = deserialize(text).unwrap();
    assert_eq!(root.kind(), kind);
    assert!(root.is_empty());
    assert_eq!(root.iter().next(), None);
}

#[test]
fn scalars_of_every_kind() {
    let root = deserialize(r#"["s", -1.5e2, true, false, null, 0]"#).unwrap();
    let kinds: Vec<Kind> = root.iter().map(Node::kind).collect();
    assert_eq!(
        kinds,
        [
            Kind::String,
            Kind::Numeric,
            Kind::Boolean,
            Kind::Boolean,
            Kind::Null,
            Kind::Numeric
        ]
    );
    assert_eq!(root.get_indexed(1).unwrap().get::<f64>(), Ok(-150.0));
    assert_eq!(root.get_indexed(3).unwrap().get::<bool>(), Ok(false));
    assert_eq!(root.get_indexed(5).unwrap().get::<u64>(), Ok(0));
}

#[test]
fn root_and_elements_have_no_key() {
    let root = deserialize(r#"[{"k": [1]}]"#).unwrap();
    assert_eq!(root.key(), None);
    let object = root.get_indexed(0).unwrap();
    assert_eq!(object.key(), None);
    let member = object.get_indexed(0).unwrap();
    assert_eq!(member.key(), Some("k"));
    assert_eq!(member.get_indexed(0).unwrap().key(), None);
}

#[test]
fn empty_key_is_allowed() {
    let root = deserialize(r#"{"": 1}"#).unwrap();
    assert_eq!(root.get_keyed("").unwrap().get::<i8>(), Ok(1));
}

#[test]
fn objects_support_ordinal_access() {
    let root = deserialize(r#"{"first": "x", "second": "y"}"#).unwrap();
    let second = root.get_indexed(1).unwrap();
    assert_eq!(second.key(), Some("second"));
    assert_eq!(second.get::<String>(), Ok(String::from("y")));
}

#[test]
fn lenient_numbers_fail_only_on_access() {
    let root = deserialize("[1-2, 1e]").unwrap();
    assert_eq!(root.get_indexed(0).unwrap().as_literal(), Some("1-2"));
    assert!(root.get_indexed(0).unwrap().get::<f64>().is_err());
    assert!(root.get_indexed(1).unwrap().get::<f64>().is_err());
}

#[test]
fn options_that_tighten_still_accept_valid_documents() {
    let options = ParserOptions {
        strict_numbers: true,
        reject_duplicate_keys: true,
        max_depth: Some(3),
    };
    let root = deserialize_with(r#"{"a": [0, -1.5, 2e10], "b": {"a": null}}"#, options).unwrap();
    assert_eq!(keys(&root), ["a", "b"]);
}

#[test]
fn non_ascii_content() {
    let root = deserialize(r#"{"名前": "値", "emoji": "😀"}"#).unwrap();
    assert_eq!(root.get_keyed("名前").unwrap().get::<&str>(), Ok("値"));
    assert_eq!(root.get_keyed("emoji").unwrap().get::<&str>(), Ok("😀"));
}

#[test]
fn slices_parse_like_strings() {
    let text = r#"{"a": [true, null]}"#;
    assert_eq!(deserialize_slice(text.as_bytes()), deserialize(text));
}

#[test]
fn trees_are_independent() {
    let first = deserialize("[1]").unwrap();
    let second = deserialize("[1]").unwrap();
    assert_eq!(first, second);
    drop(first);
    assert_eq!(second.get_indexed(0).unwrap().get::<i32>(), Ok(1));
}
