mod scalar;
pub use scalar::*;

mod shape;
pub use shape::*;

mod slot;
pub use slot::*;

pub mod wrappers;
pub use wrappers::{
    BoolValue, BytesValue, DoubleValue, FloatValue, Int32Value, Int64Value, StringValue,
    UInt32Value, UInt64Value, UnknownWrapper, WellKnown, Wrapper, WrapperKind,
};
