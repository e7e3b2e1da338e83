#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! Descriptor tables for records that can be filled field by field.
//!
//! A record is a struct declared through [`record!`]. The macro emits the
//! struct unchanged plus a static [`Shape`]: the record's fields in
//! declaration order, each with a name and a [`Def`] saying whether it is a
//! scalar, a nested record, an `Option` of either (or of a well-known
//! [wrapper](wrappers)), or an opaque collection. The same macro implements
//! [`Record`], which hands out a typed [`FieldMut`] for each field index.
//!
//! Nothing here inspects types at run time: shapes are `const` data, and
//! field access goes through the slot traits.

extern crate alloc;

mod macros;

mod types;
pub use types::*;

#[cfg(test)]
mod tests {
    use crate::*;

    record! {
        #[derive(Debug, Default, PartialEq)]
        struct Leaf {
            label: String,
            weight: f32,
        }
    }

    record! {
        /// Root of the test graph.
        #[derive(Debug, Default, PartialEq)]
        struct Root {
            id: u8,
            leaf: Leaf,
            maybe_leaf: Option<Leaf>,
            note: Option<String>,
            quota: Option<Int64Value>,
            tags: Vec<String>,
        }
    }

    #[test]
    fn shape_lists_fields_in_declaration_order() {
        let names: Vec<_> = Root::SHAPE.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["id", "leaf", "maybe_leaf", "note", "quota", "tags"]
        );
        assert_eq!(Root::SHAPE.type_name, "Root");
        assert_eq!(Root::SHAPE.field_index("note"), Some(3));
        assert_eq!(Root::SHAPE.field_index("label"), None);
    }

    #[test]
    fn defs_follow_field_types() {
        let defs: Vec<_> = Root::SHAPE.fields.iter().map(|f| f.def).collect();
        assert_eq!(
            defs,
            [
                Def::Scalar(ScalarType::U8),
                Def::Record(Leaf::SHAPE),
                Def::Option(OptionDef::Record(Leaf::SHAPE)),
                Def::Option(OptionDef::Scalar(ScalarType::String)),
                Def::Option(OptionDef::Wrapper(WrapperKind::Int64)),
                Def::Opaque("Vec"),
            ]
        );
        assert_eq!(Root::SHAPE.fields[1].nested_shape(), Some(Leaf::SHAPE));
        assert_eq!(Root::SHAPE.fields[2].nested_shape(), Some(Leaf::SHAPE));
        assert_eq!(Root::SHAPE.fields[3].nested_shape(), None);
        assert_eq!(Root::SHAPE.fields[4].def.type_name(), "Int64Value");
    }

    #[test]
    fn field_mut_writes_through() {
        let mut root = Root::default();

        match root.field_mut(0) {
            Some(FieldMut::Scalar(slot)) => {
                assert_eq!(slot.scalar_type(), ScalarType::U8);
                slot.put(ScalarValue::U8(7)).unwrap();
            }
            _ => panic!("expected a scalar slot"),
        }

        match root.field_mut(2) {
            Some(FieldMut::OptionRecord(slot)) => {
                assert!(!slot.is_set());
                let leaf = slot.get_or_default();
                assert_eq!(leaf.shape(), Leaf::SHAPE);
                match leaf.field_mut(0) {
                    Some(FieldMut::Scalar(label)) => {
                        label.put(ScalarValue::String("hi".into())).unwrap()
                    }
                    _ => panic!("expected a scalar slot"),
                }
            }
            _ => panic!("expected an optional record slot"),
        }

        match root.field_mut(4) {
            Some(FieldMut::Wrapper(slot)) => {
                assert_eq!(slot.kind(), WrapperKind::Int64);
                let wrong = Wrapper::Bool(BoolValue::new(true));
                assert_eq!(slot.put(wrong.clone()), Err(wrong));
                slot.put(Int64Value::new(-5).into()).unwrap();
            }
            _ => panic!("expected a wrapper slot"),
        }

        assert!(matches!(root.field_mut(5), Some(FieldMut::Opaque("Vec"))));
        assert!(root.field_mut(6).is_none());

        assert_eq!(root.id, 7);
        assert_eq!(root.maybe_leaf.as_ref().map(|l| l.label.as_str()), Some("hi"));
        assert_eq!(root.quota, Some(Int64Value::new(-5)));
        assert_eq!(root.note, None);
    }

    #[test]
    fn scalar_slot_refuses_other_types() {
        let mut root = Root::default();
        let Some(FieldMut::OptionScalar(slot)) = root.field_mut(3) else {
            panic!("expected an optional scalar slot");
        };
        assert_eq!(slot.pointee_type(), ScalarType::String);
        assert_eq!(slot.put(ScalarValue::Bool(true)), Err(ScalarValue::Bool(true)));
        assert!(!slot.is_set());
    }
}
