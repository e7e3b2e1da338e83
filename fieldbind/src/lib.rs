#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! Bind flat name → value mappings into nested records.
//!
//! Given a mapping such as `{"port": "8080", "tls_cert": "/etc/cert.pem"}`
//! and a record declared with [`record!`], the binder finds each key's field
//! anywhere in the record graph, converts the raw string into the field's
//! type, and writes it:
//!
//! - plain scalars are [coerced](coerce()) in place, with exact range checks;
//! - `Option<scalar>` fields receive `Some(value)`;
//! - `Option<record>` fields on the way to a match are allocated with
//!   `Default`;
//! - `Option` of a well-known [wrapper](fieldbind_core::wrappers) record is
//!   built directly by [`build_wrapper`].
//!
//! Keys that name no field are skipped. Any other failure stops the bind and
//! is returned as a [`BindError`]; entries bound before it stay bound unless
//! the [`Binder`] is configured as [atomic](Binder::atomic).
//!
//! ```
//! use fieldbind::{RawValue, bind, record};
//! use std::collections::BTreeMap;
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct Tls {
//!         pub tls_cert: String,
//!     }
//! }
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct Server {
//!         pub port: u16,
//!         pub tls: Option<Tls>,
//!     }
//! }
//!
//! let mapping = BTreeMap::from([
//!     ("port", RawValue::from("8080")),
//!     ("tls_cert", RawValue::from("/etc/cert.pem")),
//! ]);
//!
//! let mut server = Server::default();
//! bind(&mapping, &mut server).unwrap();
//!
//! assert_eq!(server.port, 8080);
//! assert_eq!(server.tls.unwrap().tls_cert, "/etc/cert.pem");
//! ```

extern crate alloc;

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}

pub use fieldbind_core::*;

mod bind;
pub use bind::{BindReport, Binder, Order, bind};

pub mod coerce;
pub use coerce::coerce;

mod error;
pub use error::{BindError, BindErrorKind};

mod raw;
pub use raw::RawValue;

pub mod resolve;
pub use resolve::{FieldPath, PathStep, resolve};

mod wrapper;
pub use wrapper::{build_wrapper, build_wrapper_named};
