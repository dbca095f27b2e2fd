//! Aggregation queries over an object's declared fields by capability.
//!
//! Both queries look at the fields declared on the object's runtime type,
//! in declaration order, and keep those whose registration lists the
//! requested [`Capability`]:
//!
//! - [`collect_by_capability`]: single-valued fields, one entry per field.
//!   A field holding `None` yields a `None` entry, so entries line up with
//!   the matching fields.
//! - [`flatten_lists_by_capability`]: list fields, all elements of every
//!   matching list concatenated in field order, then list order. A list
//!   field holding `None` counts as empty.

use crate::errors::{RefDiffError, Result};
use crate::introspect::{Capability, FieldDescriptor, FieldRead, FieldShape, Reflect};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// Values of every single-valued field whose declared type satisfies `capability`.
///
/// One entry per matching field, in declaration order; `None` for a field
/// that currently holds no value.
///
/// # Errors
///
/// Returns `RefDiffError::FieldAccess` if a field reader rejects `obj` even
/// though `obj` reports the reader's declaring type. This indicates a
/// broken registration, not bad input.
pub fn collect_by_capability<'a>(
    obj: &'a dyn Reflect,
    capability: &Capability,
) -> Result<Vec<Option<&'a dyn Reflect>>> {
    aggregate(
        "collect_by_capability",
        obj,
        capability,
        FieldShape::Single,
        |_, _, value, out| {
            out.push(value);
            Ok(())
        },
    )
}

/// Elements of every list field whose element type satisfies `capability`.
///
/// # Errors
///
/// Returns `RefDiffError::FieldAccess` on a reader that rejects its own
/// declaring type, and `RefDiffError::ShapeMismatch` when a field registered
/// as a list holds something that is not a sequence.
pub fn flatten_lists_by_capability<'a>(
    obj: &'a dyn Reflect,
    capability: &Capability,
) -> Result<Vec<&'a dyn Reflect>> {
    aggregate(
        "flatten_lists_by_capability",
        obj,
        capability,
        FieldShape::List,
        |type_name, field, value, out| {
            let Some(value) = value else {
                return Ok(());
            };
            let elements = value
                .elements()
                .ok_or_else(|| RefDiffError::ShapeMismatch {
                    type_name: type_name.to_string(),
                    field: field.name().to_string(),
                })?;
            out.extend(elements);
            Ok(())
        },
    )
}

fn aggregate<'a, T, F>(
    op: &str,
    obj: &'a dyn Reflect,
    capability: &Capability,
    shape: FieldShape,
    mut gather: F,
) -> Result<Vec<T>>
where
    F: FnMut(&str, &FieldDescriptor, Option<&'a dyn Reflect>, &mut Vec<T>) -> Result<()>,
{
    let start = Instant::now();
    let ty = obj.type_descriptor();
    log_op_start!(op, type_name = ty.name(), capability = capability.name());

    let mut result = Vec::new();
    let outcome = ty
        .fields()
        .iter()
        .filter(|f| f.shape() == shape && f.satisfies(capability))
        .try_for_each(|field| -> Result<()> {
            let value = read_declared(obj, ty.name(), field)?;
            gather(ty.name(), field, value, &mut result)
        });

    let duration_ms = start.elapsed().as_millis() as u64;
    match outcome {
        Ok(()) => {
            log_op_end!(op, duration_ms = duration_ms, matched_len = result.len());
            Ok(result)
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
            Err(e)
        }
    }
}

fn read_declared<'a>(
    obj: &'a dyn Reflect,
    type_name: &str,
    field: &FieldDescriptor,
) -> Result<Option<&'a dyn Reflect>> {
    match field.read(obj) {
        FieldRead::Value(value) => Ok(Some(value)),
        FieldRead::Null => Ok(None),
        FieldRead::Unreadable => Err(RefDiffError::FieldAccess {
            type_name: type_name.to_string(),
            field: field.name().to_string(),
        }),
    }
}
