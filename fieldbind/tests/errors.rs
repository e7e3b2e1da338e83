mod common;

use common::{Parent, mapping};
use fieldbind::{BindError, BindErrorKind, RawValue, ScalarValue, bind, build_wrapper_named};
use indexmap::IndexMap;

fn bind_err(key: &'static str, value: &str) -> BindError {
    bind(&mapping([(key, value)]), &mut Parent::default()).unwrap_err()
}

#[fieldbind_testhelpers::test]
fn parse_error_message() {
    insta::assert_snapshot!(bind_err("p_b", "x"), @"cannot bind `p_b`: invalid isize literal `x`");
    insta::assert_snapshot!(bind_err("g_c", "yes"), @"cannot bind `g_c`: invalid bool literal `yes`");
}

#[fieldbind_testhelpers::test]
fn overflow_error_message() {
    insta::assert_snapshot!(
        bind_err("p_f", "9223372036854775808"),
        @"cannot bind `p_f`: `9223372036854775808` is out of range for isize"
    );
}

#[fieldbind_testhelpers::test]
fn wrapper_parse_error_message() {
    insta::assert_snapshot!(bind_err("p_h", "-1"), @"cannot bind `p_h`: invalid UInt32Value literal `-1`");
}

#[fieldbind_testhelpers::test]
fn unsupported_kind_message() {
    insta::assert_snapshot!(bind_err("p_d", "{}"), @"cannot bind `p_d`: no coercion from a string into ChildA");
}

#[fieldbind_testhelpers::test]
fn type_mismatch_message() {
    let input = IndexMap::from([("p_c", RawValue::Typed(ScalarValue::Bool(true)))]);
    let err = bind(&input, &mut Parent::default()).unwrap_err();
    insta::assert_snapshot!(err, @"cannot bind `p_c`: expected string input, found bool");
}

#[fieldbind_testhelpers::test]
fn not_a_wrapper_message() {
    let kind = build_wrapper_named("Timestamp", &RawValue::from("0")).unwrap_err();
    insta::assert_snapshot!(kind.at("created"), @"cannot bind `created`: `Timestamp` is not a known wrapper type");
}

#[fieldbind_testhelpers::test]
fn errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(BindError::new("k", BindErrorKind::NotFound));
    assert_eq!(err.to_string(), "cannot bind `k`: no field with this name");
}
