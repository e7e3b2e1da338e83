/// Declares a record: a struct together with its descriptor table.
///
/// The struct is emitted as written. Alongside it the macro implements
/// [`Describe`](crate::Describe) (the static [`Shape`](crate::Shape), one
/// [`Field`](crate::Field) per struct field, named after the field),
/// [`Record`](crate::Record) (indexed field access), and
/// [`Slot`](crate::Slot)/[`Nullable`](crate::Nullable) so that the record can
/// itself be nested in another record, by value or as an `Option`.
///
/// Every field type must implement [`Slot`](crate::Slot): the scalar types,
/// `Option` of a scalar, of a wrapper or of another record, and the opaque
/// collections. The record must implement `Default`, which is how it is
/// allocated when nested behind an `Option`.
///
/// # Example
///
/// ```
/// use fieldbind_core::{Def, Describe, OptionDef, ScalarType, UInt32Value, record};
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct Child {
///         pub name: String,
///     }
/// }
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct Parent {
///         pub id: u64,
///         pub child: Option<Child>,
///         pub quota: Option<UInt32Value>,
///     }
/// }
///
/// let fields = Parent::SHAPE.fields;
/// assert_eq!(fields[0].def, Def::Scalar(ScalarType::U64));
/// assert_eq!(fields[1].def, Def::Option(OptionDef::Record(Child::SHAPE)));
/// assert_eq!(fields[2].name, "quota");
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Describe for $name {
            const SHAPE: &'static $crate::Shape = &$crate::Shape {
                type_name: ::core::stringify!($name),
                fields: &[
                    $(
                        $crate::Field {
                            name: ::core::stringify!($field),
                            def: <$ty as $crate::Slot>::DEF,
                        },
                    )*
                ],
            };
        }

        impl $crate::Record for $name {
            #[inline]
            fn shape(&self) -> &'static $crate::Shape {
                <Self as $crate::Describe>::SHAPE
            }

            #[allow(unused_variables, unused_mut, unused_assignments)]
            fn field_mut(&mut self, index: usize) -> ::core::option::Option<$crate::FieldMut<'_>> {
                let mut next = 0usize;
                $(
                    if index == next {
                        return ::core::option::Option::Some(
                            $crate::Slot::as_field_mut(&mut self.$field),
                        );
                    }
                    next += 1;
                )*
                ::core::option::Option::None
            }
        }

        impl $crate::Slot for $name {
            const DEF: $crate::Def = $crate::Def::Record(<Self as $crate::Describe>::SHAPE);

            #[inline]
            fn as_field_mut(&mut self) -> $crate::FieldMut<'_> {
                $crate::FieldMut::Record(self)
            }
        }

        impl $crate::Nullable for $name {
            const OPTION_DEF: $crate::OptionDef =
                $crate::OptionDef::Record(<Self as $crate::Describe>::SHAPE);

            #[inline]
            fn option_field_mut(
                slot: &mut ::core::option::Option<Self>,
            ) -> $crate::FieldMut<'_> {
                $crate::FieldMut::OptionRecord(slot)
            }
        }
    };
}
