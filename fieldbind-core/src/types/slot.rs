//! Typed mutable views of record fields.
//!
//! A [`Shape`] says what a field is; a [`FieldMut`] lets you write to it.
//! Records hand out `FieldMut`s by field index, and the slot traits below give
//! each category of field exactly the operations the binder needs.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use std::collections::HashMap;

use crate::{Def, OptionDef, Scalar, ScalarType, ScalarValue, Shape, WellKnown, Wrapper, WrapperKind};

/// A record: a struct with a static [`Shape`] and indexed field access.
///
/// Implemented by the [`record!`](crate::record) macro; field `i` of
/// [`Record::field_mut`] corresponds to `shape().fields[i]`.
pub trait Record {
    /// The descriptor table of this record's type.
    fn shape(&self) -> &'static Shape;

    /// Mutable access to the field at `index`, or `None` past the last field.
    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;
}

/// A record type whose shape is known without an instance.
pub trait Describe: Record + 'static {
    /// The descriptor table of this type.
    const SHAPE: &'static Shape;
}

/// A mutable view of one field, by category.
pub enum FieldMut<'a> {
    /// A plain scalar.
    Scalar(&'a mut dyn ScalarSlot),

    /// An `Option<scalar>`.
    OptionScalar(&'a mut dyn OptionScalarSlot),

    /// An `Option<wrapper>`.
    Wrapper(&'a mut dyn WrapperSlot),

    /// A nested record stored by value.
    Record(&'a mut dyn Record),

    /// An `Option<record>`.
    OptionRecord(&'a mut dyn OptionRecordSlot),

    /// A field that cannot be written to by name. Carries the type name.
    Opaque(&'static str),
}

impl FieldMut<'_> {
    /// A short name for the category, for diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            FieldMut::Scalar(_) => "scalar",
            FieldMut::OptionScalar(_) => "optional scalar",
            FieldMut::Wrapper(_) => "optional wrapper",
            FieldMut::Record(_) => "record",
            FieldMut::OptionRecord(_) => "optional record",
            FieldMut::Opaque(_) => "opaque",
        }
    }
}

/// A plain scalar field.
pub trait ScalarSlot {
    /// The declared type of the field.
    fn scalar_type(&self) -> ScalarType;

    /// Overwrites the field. A value of the wrong type is handed back untouched.
    fn put(&mut self, value: ScalarValue) -> Result<(), ScalarValue>;
}

impl<T: Scalar> ScalarSlot for T {
    fn scalar_type(&self) -> ScalarType {
        T::SCALAR_TYPE
    }

    fn put(&mut self, value: ScalarValue) -> Result<(), ScalarValue> {
        *self = T::from_scalar(value)?;
        Ok(())
    }
}

/// An `Option<scalar>` field.
pub trait OptionScalarSlot {
    /// The declared type of the value behind the option.
    fn pointee_type(&self) -> ScalarType;

    /// Whether the option holds a value.
    fn is_set(&self) -> bool;

    /// Stores `Some(value)`. A value of the wrong type is handed back untouched.
    fn put(&mut self, value: ScalarValue) -> Result<(), ScalarValue>;
}

impl<T: Scalar> OptionScalarSlot for Option<T> {
    fn pointee_type(&self) -> ScalarType {
        T::SCALAR_TYPE
    }

    fn is_set(&self) -> bool {
        self.is_some()
    }

    fn put(&mut self, value: ScalarValue) -> Result<(), ScalarValue> {
        *self = Some(T::from_scalar(value)?);
        Ok(())
    }
}

/// An `Option<wrapper>` field.
pub trait WrapperSlot {
    /// The wrapper kind the field is declared with.
    fn kind(&self) -> WrapperKind;

    /// Whether the option holds a wrapper.
    fn is_set(&self) -> bool;

    /// Stores `Some(wrapper)`. A wrapper of another kind is handed back untouched.
    fn put(&mut self, wrapper: Wrapper) -> Result<(), Wrapper>;
}

impl<W: WellKnown> WrapperSlot for Option<W> {
    fn kind(&self) -> WrapperKind {
        W::KIND
    }

    fn is_set(&self) -> bool {
        self.is_some()
    }

    fn put(&mut self, wrapper: Wrapper) -> Result<(), Wrapper> {
        *self = Some(W::from_wrapper(wrapper)?);
        Ok(())
    }
}

/// An `Option<record>` field.
pub trait OptionRecordSlot {
    /// Shape of the record behind the option.
    fn pointee_shape(&self) -> &'static Shape;

    /// Whether the record has been allocated.
    fn is_set(&self) -> bool;

    /// The record, allocated with `Default` first if the option is empty.
    fn get_or_default(&mut self) -> &mut dyn Record;
}

impl<R: Describe + Default> OptionRecordSlot for Option<R> {
    fn pointee_shape(&self) -> &'static Shape {
        R::SHAPE
    }

    fn is_set(&self) -> bool {
        self.is_some()
    }

    fn get_or_default(&mut self) -> &mut dyn Record {
        self.get_or_insert_with(R::default)
    }
}

/// A type that can be declared as a field of a record.
pub trait Slot {
    /// Descriptor of a field of this type.
    const DEF: Def;

    /// A typed mutable view of a field of this type.
    fn as_field_mut(&mut self) -> FieldMut<'_>;
}

/// A type that can sit behind an `Option` field of a record.
pub trait Nullable: Sized {
    /// Descriptor of the pointee of an `Option<Self>` field.
    const OPTION_DEF: OptionDef;

    /// A typed mutable view of an `Option<Self>` field.
    fn option_field_mut(slot: &mut Option<Self>) -> FieldMut<'_>;
}

impl<T: Nullable> Slot for Option<T> {
    const DEF: Def = Def::Option(T::OPTION_DEF);

    #[inline]
    fn as_field_mut(&mut self) -> FieldMut<'_> {
        T::option_field_mut(self)
    }
}

impl<T> Slot for Vec<T> {
    const DEF: Def = Def::Opaque("Vec");

    fn as_field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Opaque("Vec")
    }
}

impl<K, V, S> Slot for HashMap<K, V, S> {
    const DEF: Def = Def::Opaque("HashMap");

    fn as_field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Opaque("HashMap")
    }
}

impl<K, V> Slot for BTreeMap<K, V> {
    const DEF: Def = Def::Opaque("BTreeMap");

    fn as_field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Opaque("BTreeMap")
    }
}
