//! Binds a flat mapping into a small record graph and logs the record before
//! and after.
//!
//! Run with `RUST_LOG=trace` to see each entry being resolved.

use fieldbind::{Binder, RawValue, UInt32Value, record};
use indexmap::IndexMap;
use tracing_subscriber::EnvFilter;

record! {
    #[derive(Debug, Default)]
    pub struct Grandson {
        pub g_a: String,
        pub g_b: isize,
        pub g_c: bool,
    }
}

record! {
    #[derive(Debug, Default)]
    pub struct ChildA {
        pub ca_a: String,
        pub ca_b: isize,
        pub ca_c: bool,
        pub ca_d: Grandson,
    }
}

record! {
    #[derive(Debug, Default)]
    pub struct ChildB {
        pub cb_a: String,
    }
}

record! {
    #[derive(Debug, Default)]
    pub struct Parent {
        pub p_a: String,
        pub p_b: isize,
        pub p_c: bool,
        pub p_d: ChildA,
        pub p_e: Option<String>,
        pub p_f: Option<isize>,
        pub p_g: Option<ChildB>,
        pub p_h: Option<UInt32Value>,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mapping: IndexMap<&str, RawValue> = [
        ("p_a", "Parent p_a string"),
        ("p_b", "1"),
        ("p_c", "true"),
        ("ca_a", "ChildA ca_a string"),
        ("g_a", "Grandson g_a string"),
        ("p_e", "Parent p_e optional string"),
        ("p_f", "432"),
        ("p_h", "56"),
        ("cb_a", "ChildB cb_a string"),
        ("unknown", "ignored"),
    ]
    .into_iter()
    .map(|(key, value)| (key, RawValue::from(value)))
    .collect();

    let mut parent = Parent::default();
    tracing::info!("before: {parent:#?}");

    match Binder::new().bind(&mapping, &mut parent) {
        Ok(report) => {
            for (key, path) in &report.bound {
                tracing::info!("{key} -> {path}");
            }
            for key in &report.skipped {
                tracing::warn!("{key} matched no field");
            }
            tracing::info!("after: {parent:#?}");
        }
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
}
