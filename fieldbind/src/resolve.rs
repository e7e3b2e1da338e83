//! Finding a field by name anywhere in a record graph.
//!
//! Resolution happens in two phases. [`resolve`] searches the static
//! [`Shape`] tree without touching any record and returns a [`FieldPath`].
//! [`FieldPath::apply`] then walks that one path through a live record,
//! allocating the optional records on it. A search that finds nothing
//! allocates nothing.
//!
//! # Search order
//!
//! At each record the fields declared directly on it are checked first. If
//! none matches, the nested records (by value or optional) are searched in
//! declaration order, depth first. The first match wins, so when two nested
//! records declare a field with the same name, only the first one reached is
//! addressable by that name.

use alloc::vec::Vec;
use core::fmt;

use fieldbind_core::{Def, FieldMut, OptionDef, Record, Shape};

use crate::trace;

/// A single step in a path through a record graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Navigate to a field by index
    Field(u32),
    /// Navigate into `Some` of an optional record, allocating it if empty
    OptionSome,
}

/// The location of a field, as a series of steps from a root shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    /// The shape the path starts from.
    pub shape: &'static Shape,

    /// The steps, ending with the `Field` step of the target.
    pub steps: Vec<PathStep>,
}

/// Searches `shape` for a field named `name`.
///
/// See the [module docs](self) for the search order. Returns `None` if no
/// field anywhere under `shape` has this name.
pub fn resolve(name: &str, shape: &'static Shape) -> Option<FieldPath> {
    let mut steps = Vec::new();
    search(name, shape, &mut steps).then_some(FieldPath { shape, steps })
}

fn search(name: &str, shape: &'static Shape, steps: &mut Vec<PathStep>) -> bool {
    if let Some(index) = shape.field_index(name) {
        steps.push(PathStep::Field(index as u32));
        return true;
    }

    for (index, field) in shape.fields.iter().enumerate() {
        let (nested, optional) = match field.def {
            Def::Record(nested) => (nested, false),
            Def::Option(OptionDef::Record(nested)) => (nested, true),
            _ => continue,
        };

        let depth = steps.len();
        steps.push(PathStep::Field(index as u32));
        if optional {
            steps.push(PathStep::OptionSome);
        }
        if search(name, nested, steps) {
            return true;
        }
        steps.truncate(depth);
    }

    false
}

impl FieldPath {
    /// The definition of the field this path leads to.
    pub fn target_def(&self) -> Option<Def> {
        let mut shape = self.shape;
        let mut def = None;
        for step in &self.steps {
            if let PathStep::Field(index) = *step {
                let field = shape.fields.get(index as usize)?;
                if let Some(nested) = field.nested_shape() {
                    shape = nested;
                }
                def = Some(field.def);
            }
        }
        def
    }

    /// Walks the path through `root` and returns the target field.
    ///
    /// Every optional record along the way that is still `None` is allocated
    /// with `Default`. Returns `None` if `root` does not have the shape the
    /// path was resolved against.
    pub fn apply<'r>(&self, root: &'r mut dyn Record) -> Option<FieldMut<'r>> {
        if root.shape() != self.shape {
            return None;
        }

        let mut node = root;
        let mut steps = self.steps.iter().peekable();
        while let Some(step) = steps.next() {
            let PathStep::Field(index) = *step else {
                return None;
            };
            let field = node.field_mut(index as usize)?;
            if steps.peek().is_none() {
                return Some(field);
            }
            node = match field {
                FieldMut::Record(child) => child,
                FieldMut::OptionRecord(slot) => {
                    if steps.next() != Some(&PathStep::OptionSome) {
                        return None;
                    }
                    if !slot.is_set() {
                        trace!("allocating {} on the way to {self}", slot.pointee_shape());
                    }
                    slot.get_or_default()
                }
                _ => return None,
            };
        }
        None
    }
}

impl fmt::Display for FieldPath {
    /// Dotted field names, e.g. `child.grandchild.name`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shape = self.shape;
        let mut first = true;
        for step in &self.steps {
            let PathStep::Field(index) = *step else {
                continue;
            };
            let Some(field) = shape.fields.get(index as usize) else {
                return write!(f, "<invalid path>");
            };
            if !first {
                f.write_str(".")?;
            }
            f.write_str(field.name)?;
            first = false;
            if let Some(nested) = field.nested_shape() {
                shape = nested;
            }
        }
        Ok(())
    }
}
