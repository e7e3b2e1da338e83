use alloc::string::{String, ToString};
use alloc::vec::Vec;

use fieldbind_core::{Def, FieldMut, OptionDef, Record, ScalarValue, Shape, Wrapper};

use crate::resolve::{FieldPath, resolve};
use crate::{BindError, BindErrorKind, RawValue, build_wrapper, coerce, debug, trace};

/// The order in which mapping entries are bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// The mapping's own iteration order. For a `HashMap` that order is
    /// arbitrary, and so are the final state and the reported error when
    /// several entries fail or touch the same field.
    #[default]
    AsGiven,

    /// Lexicographic key order.
    Sorted,
}

/// Binds flat key/value mappings into records.
///
/// ```
/// use fieldbind::{Binder, Order, RawValue, record};
/// use std::collections::HashMap;
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct Settings {
///         pub retries: u8,
///         pub verbose: Option<bool>,
///     }
/// }
///
/// let mapping = HashMap::from([
///     ("retries", RawValue::from("3")),
///     ("verbose", RawValue::from("true")),
///     ("colour", RawValue::from("blue")),
/// ]);
///
/// let mut settings = Settings::default();
/// let report = Binder::new()
///     .order(Order::Sorted)
///     .bind(&mapping, &mut settings)
///     .unwrap();
///
/// assert_eq!(settings.retries, 3);
/// assert_eq!(settings.verbose, Some(true));
/// assert_eq!(report.skipped, ["colour"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Binder {
    order: Order,
    atomic: bool,
}

/// What a successful bind did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Keys that were bound, with the path of the field each one landed in.
    pub bound: Vec<(String, String)>,

    /// Keys that matched no field.
    pub skipped: Vec<String>,
}

/// A converted entry, ready to be written.
enum Value {
    Scalar(ScalarValue),
    Wrapper(Wrapper),
}

impl Value {
    fn category(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Wrapper(_) => "optional wrapper",
        }
    }
}

struct Planned {
    key: String,
    path: FieldPath,
    value: Value,
}

impl Binder {
    /// A binder with the default options: mapping order, no atomicity.
    pub const fn new() -> Self {
        Self {
            order: Order::AsGiven,
            atomic: false,
        }
    }

    /// Sets the order in which entries are bound.
    pub const fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// When enabled, every entry is resolved and converted before any field
    /// is written, so a failing entry leaves the record untouched.
    ///
    /// When disabled (the default) entries are written one at a time, and
    /// the ones bound before a failure stay bound.
    pub const fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Binds every entry of `mapping` into `target`.
    ///
    /// Keys that match no field are skipped. Any other failure stops the
    /// bind and is returned, tagged with its key.
    pub fn bind<'m, I, K>(
        &self,
        mapping: I,
        target: &mut dyn Record,
    ) -> Result<BindReport, BindError>
    where
        I: IntoIterator<Item = (K, &'m RawValue)>,
        K: AsRef<str>,
    {
        let mut entries: Vec<(K, &RawValue)> = mapping.into_iter().collect();
        if self.order == Order::Sorted {
            entries.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));
        }

        let shape = target.shape();
        let mut report = BindReport::default();
        let mut pending = Vec::new();

        for (key, raw) in entries {
            let key = key.as_ref();
            let planned = match plan(key, raw, shape) {
                Ok(planned) => planned,
                Err(BindError {
                    kind: BindErrorKind::NotFound,
                    ..
                }) => {
                    debug!("no field named `{key}` in {shape}, skipping");
                    report.skipped.push(key.to_string());
                    continue;
                }
                Err(err) => return Err(err),
            };

            if self.atomic {
                pending.push(planned);
            } else {
                write(planned, target, &mut report)?;
            }
        }

        for planned in pending {
            write(planned, target, &mut report)?;
        }

        Ok(report)
    }
}

/// Binds every entry of `mapping` into `target` with the default [`Binder`].
pub fn bind<'m, I, K>(mapping: I, target: &mut dyn Record) -> Result<(), BindError>
where
    I: IntoIterator<Item = (K, &'m RawValue)>,
    K: AsRef<str>,
{
    Binder::new().bind(mapping, target).map(|_| ())
}

/// Resolves `key` and converts `raw` for the field it names, without
/// touching any record.
fn plan(key: &str, raw: &RawValue, shape: &'static Shape) -> Result<Planned, BindError> {
    let Some((path, def)) =
        resolve(key, shape).and_then(|path| path.target_def().map(|def| (path, def)))
    else {
        return Err(BindErrorKind::NotFound.at(key));
    };
    trace!("`{key}` resolves to {path} ({})", def.type_name());

    let value = match def {
        Def::Scalar(scalar) | Def::Option(OptionDef::Scalar(scalar)) => {
            Value::Scalar(coerce(raw, scalar).map_err(|kind| kind.at(key))?)
        }
        Def::Option(OptionDef::Wrapper(kind)) => {
            Value::Wrapper(build_wrapper(kind, raw).map_err(|err| err.at(key))?)
        }
        Def::Record(_) | Def::Option(OptionDef::Record(_)) | Def::Opaque(_) => {
            return Err(BindErrorKind::UnsupportedKind {
                type_name: def.type_name(),
            }
            .at(key));
        }
    };

    Ok(Planned {
        key: key.to_string(),
        path,
        value,
    })
}

/// Writes a planned entry into `target` and records it in `report`.
fn write(
    planned: Planned,
    target: &mut dyn Record,
    report: &mut BindReport,
) -> Result<(), BindError> {
    let Planned { key, path, value } = planned;
    let Some(field) = path.apply(target) else {
        return Err(BindErrorKind::ShapeMismatch {
            path: path.to_string(),
        }
        .at(key));
    };

    let outcome = match (field, value) {
        (FieldMut::Scalar(slot), Value::Scalar(value)) => {
            let expected = slot.scalar_type().name();
            slot.put(value).map_err(|value| BindErrorKind::TypeMismatch {
                expected,
                found: value.scalar_type().name(),
            })
        }
        (FieldMut::OptionScalar(slot), Value::Scalar(value)) => {
            let expected = slot.pointee_type().name();
            slot.put(value).map_err(|value| BindErrorKind::TypeMismatch {
                expected,
                found: value.scalar_type().name(),
            })
        }
        (FieldMut::Wrapper(slot), Value::Wrapper(wrapper)) => {
            slot.put(wrapper).map_err(|wrapper| BindErrorKind::NotAWrapper {
                tag: wrapper.kind().type_name().to_string(),
            })
        }
        (field, value) => Err(BindErrorKind::TypeMismatch {
            expected: field.category(),
            found: value.category(),
        }),
    };
    outcome.map_err(|kind| kind.at(&key))?;

    trace!("bound `{key}` into {path}");
    report.bound.push((key, path.to_string()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldbind_core::{Field, ScalarType, WrapperKind};

    /// Declares `value` as an optional wrapper but stores an `Option<u8>`, and
    /// declares `gone` without handing it out.
    #[derive(Debug, Default)]
    struct Misdescribed {
        value: Option<u8>,
    }

    static MISDESCRIBED: Shape = Shape {
        type_name: "Misdescribed",
        fields: &[
            Field {
                name: "value",
                def: Def::Option(OptionDef::Wrapper(WrapperKind::UInt32)),
            },
            Field {
                name: "gone",
                def: Def::Scalar(ScalarType::U8),
            },
        ],
    };

    impl Record for Misdescribed {
        fn shape(&self) -> &'static Shape {
            &MISDESCRIBED
        }

        fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
            match index {
                0 => Some(FieldMut::OptionScalar(&mut self.value)),
                _ => None,
            }
        }
    }

    fn bind_one(key: &str, value: &str, target: &mut dyn Record) -> Result<BindReport, BindError> {
        let raw = RawValue::from(value);
        Binder::new().bind([(key, &raw)], target)
    }

    #[test]
    fn misses_plan_to_not_found() {
        let raw = RawValue::from("1");
        let Err(err) = plan("missing", &raw, &MISDESCRIBED) else {
            panic!("expected a miss");
        };
        assert_eq!(err, BindErrorKind::NotFound.at("missing"));

        let report = bind_one("missing", "1", &mut Misdescribed::default()).unwrap();
        assert_eq!(report.skipped, ["missing"]);
        assert!(report.bound.is_empty());
    }

    #[test]
    fn a_field_of_another_category_is_a_type_mismatch() {
        let mut record = Misdescribed::default();
        let err = bind_one("value", "3", &mut record).unwrap_err();
        assert_eq!(
            err.kind,
            BindErrorKind::TypeMismatch {
                expected: "optional scalar",
                found: "optional wrapper",
            }
        );
        assert_eq!(record.value, None);
    }

    #[test]
    fn a_field_missing_from_the_record_is_a_shape_mismatch() {
        let mut record = Misdescribed::default();
        let err = bind_one("gone", "3", &mut record).unwrap_err();
        assert_eq!(err.key, "gone");
        assert_eq!(
            err.kind,
            BindErrorKind::ShapeMismatch {
                path: String::from("gone"),
            }
        );
        assert_eq!(
            err.to_string(),
            "cannot bind `gone`: record does not match its shape at `gone`"
        );
    }
}
