#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use jsontree::{Kind, Node, ParserOptions};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // option flags

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Most of the time defer to libFuzzer. Otherwise replace the input with a
/// freshly generated document, so the corpus keeps reaching the tree builder
/// instead of dying in the scanner.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size <= HEADER || (size >= HEADER && !seed.is_multiple_of(10)) {
        return fuzzer_mutate(data, size, max_size);
    }

    let mut raw = vec![0u8; 256];
    with_rng(|rng| rng.fill_bytes(&mut raw));
    let Ok(ArbitraryValue(value)) = ArbitraryValue::arbitrary(&mut Unstructured::new(&raw)) else {
        return fuzzer_mutate(data, size, max_size);
    };
    let root = match value {
        root @ (Value::Array(_) | Value::Object(_)) => root,
        scalar => Value::Array(vec![scalar]),
    };
    let text = if with_rng(|rng| rng.random_bool(0.5)) {
        serde_json::to_string_pretty(&root)
    } else {
        serde_json::to_string(&root)
    };
    let Ok(text) = text else {
        return fuzzer_mutate(data, size, max_size);
    };

    let limit = max_size - HEADER;
    let len = text.len().min(limit);
    data[0] = with_rng(|rng| rng.next_u32() as u8);
    data[HEADER..HEADER + len].copy_from_slice(&text.as_bytes()[..len]);
    HEADER + len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::from(u.arbitrary::<i64>()?),
            4..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

/// Depth bound used when the flags do not pick a small one. Above
/// serde_json's own recursion limit, so it never rejects a document
/// serde_json accepts, and far below what exhausts the stack.
const DEFAULT_MAX_DEPTH: usize = 256;

fn small_depth(flags: u8) -> bool {
    flags & 4 != 0
}

fn options(flags: u8) -> ParserOptions {
    ParserOptions {
        strict_numbers: flags & 1 != 0,
        reject_duplicate_keys: flags & 2 != 0,
        // Three bits of depth, 1..=8, when enabled.
        max_depth: Some(if small_depth(flags) {
            usize::from((flags >> 3) & 7) + 1
        } else {
            DEFAULT_MAX_DEPTH
        }),
    }
}

/// Every string and key of an accepted document must decode.
fn check_escapes(node: &Node) {
    if let Some(key) = node.key() {
        jsontree::unescape(key).expect("key from a valid document must decode");
    }
    if node.kind() == Kind::String {
        node.unescaped().expect("string from a valid document must decode");
    }
    for child in node {
        check_escapes(child);
    }
}

fn deserialize(data: &[u8]) {
    let Some((&flags, body)) = data.split_first() else {
        return;
    };
    let options = options(flags);

    // Must never panic, whatever the input.
    let result = jsontree::deserialize_slice_with(body, options);

    // A container document serde_json accepts must be accepted too, unless an
    // option tightens the grammar beyond what serde_json checks.
    let reference: Result<Value, _> = serde_json::from_slice(body);
    let comparable = !options.reject_duplicate_keys && !small_depth(flags);
    if let Ok(Value::Array(_) | Value::Object(_)) = reference {
        if comparable {
            let node = result.expect("serde_json accepted this document");
            check_escapes(&node);
        }
    }
}

fuzz_target!(|data: &[u8]| deserialize(data));
