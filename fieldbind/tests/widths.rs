use fieldbind::{BindErrorKind, RawValue, bind, record};

record! {
    #[derive(Debug, Default, PartialEq)]
    pub struct Widths {
        pub i8: i8,
        pub i16: i16,
        pub i32: i32,
        pub i64: i64,
        pub u8: u8,
        pub u16: u16,
        pub u32: u32,
        pub u64: u64,
        pub f32: f32,
        pub f64: f64,
        pub opt_u16: Option<u16>,
    }
}

fn bind_one(key: &str, value: &str) -> Result<Widths, BindErrorKind> {
    let mut widths = Widths::default();
    let input = [(key, RawValue::from(value))];
    bind(input.iter().map(|(k, v)| (*k, v)), &mut widths)
        .map(|()| widths)
        .map_err(|err| err.kind)
}

fn overflows(key: &str, value: &str) -> bool {
    matches!(bind_one(key, value), Err(BindErrorKind::OverflowError { .. }))
}

#[fieldbind_testhelpers::test]
fn extremes_bind_and_one_past_overflows() {
    assert_eq!(bind_one("i8", "-128").unwrap().i8, i8::MIN);
    assert!(overflows("i8", "-129"));
    assert_eq!(bind_one("i16", "32767").unwrap().i16, i16::MAX);
    assert!(overflows("i16", "32768"));
    assert_eq!(bind_one("i32", "2147483647").unwrap().i32, i32::MAX);
    assert!(overflows("i32", "2147483648"));
    assert_eq!(bind_one("i64", "-9223372036854775808").unwrap().i64, i64::MIN);
    assert!(overflows("i64", "-9223372036854775809"));
    assert_eq!(bind_one("u8", "255").unwrap().u8, u8::MAX);
    assert!(overflows("u8", "256"));
    assert_eq!(bind_one("u16", "65535").unwrap().u16, u16::MAX);
    assert!(overflows("u16", "65536"));
    assert_eq!(bind_one("u32", "4294967295").unwrap().u32, u32::MAX);
    assert!(overflows("u32", "4294967296"));
    assert_eq!(bind_one("u64", "18446744073709551615").unwrap().u64, u64::MAX);
    assert!(overflows("u64", "18446744073709551616"));
}

#[fieldbind_testhelpers::test]
fn float_widths() {
    assert_eq!(bind_one("f32", "0.5").unwrap().f32, 0.5);
    assert!(overflows("f32", "1e39"));
    assert_eq!(bind_one("f64", "1e39").unwrap().f64, 1e39);
    assert!(overflows("f64", "1e309"));
}

#[fieldbind_testhelpers::test]
fn optional_widths_are_checked_too() {
    assert_eq!(bind_one("opt_u16", "65535").unwrap().opt_u16, Some(u16::MAX));
    assert!(overflows("opt_u16", "65536"));
}

#[fieldbind_testhelpers::test]
fn only_signed_targets_take_a_plus_sign() {
    assert_eq!(bind_one("i8", "+5").unwrap().i8, 5);
    assert_eq!(bind_one("i64", "+5").unwrap().i64, 5);
    for key in ["u8", "u16", "u32", "u64", "opt_u16"] {
        assert_eq!(
            bind_one(key, "+5"),
            Err(BindErrorKind::ParseError {
                target: if key == "opt_u16" { "u16" } else { key },
                input: "+5".to_string(),
            }),
            "{key}"
        );
    }
}
