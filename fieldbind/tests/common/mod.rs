#![allow(dead_code)]

use fieldbind::{RawValue, UInt32Value, record};
use indexmap::IndexMap;

record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Grandson {
        pub g_a: String,
        pub g_b: isize,
        pub g_c: bool,
    }
}

record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct ChildA {
        pub ca_a: String,
        pub ca_b: isize,
        pub ca_c: bool,
        pub ca_d: Grandson,
    }
}

record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct ChildB {
        pub cb_a: String,
    }
}

record! {
    /// The record graph the binder is exercised against: scalars, a nested
    /// record two levels deep, optional scalars, an optional record, an
    /// optional wrapper and a collection.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Parent {
        pub p_a: String,
        pub p_b: isize,
        pub p_c: bool,
        pub p_d: ChildA,
        pub p_e: Option<String>,
        pub p_f: Option<isize>,
        pub p_g: Option<ChildB>,
        pub p_h: Option<UInt32Value>,
        pub tags: Vec<String>,
    }
}

/// A mapping in a fixed order.
pub fn mapping<const N: usize>(entries: [(&'static str, &str); N]) -> IndexMap<&'static str, RawValue> {
    entries
        .into_iter()
        .map(|(key, value)| (key, RawValue::from(value)))
        .collect()
}

/// Every kind of field in [`Parent`], with well-formed values.
pub fn fixture() -> IndexMap<&'static str, RawValue> {
    mapping([
        ("p_a", "Parent p_a string"),
        ("p_b", "1"),
        ("p_c", "true"),
        ("ca_a", "ChildA ca_a string"),
        ("g_a", "Grandson g_a string"),
        ("p_e", "Parent p_e optional string"),
        ("p_f", "432"),
        ("p_h", "56"),
        ("cb_a", "ChildB cb_a string"),
    ])
}
