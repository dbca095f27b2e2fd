//! Field lookup against a registered type.

use crate::introspect::reflect::{FieldRead, Reflect, TypeDescriptor};

/// Read the field `field_name` declared directly on `ty` from `obj`.
///
/// Returns `None` when `ty` declares no such field, when the field holds no
/// value, or when `obj` is not an instance of `ty`. None of these are errors.
pub fn get_field<'a>(
    obj: &'a dyn Reflect,
    ty: &TypeDescriptor,
    field_name: &str,
) -> Option<&'a dyn Reflect> {
    let field = ty.field(field_name)?;
    match field.read(obj) {
        FieldRead::Value(value) => Some(value),
        FieldRead::Null => None,
        FieldRead::Unreadable => {
            tracing::trace!(
                type_name = ty.name(),
                field = field_name,
                receiver = obj.type_descriptor().name(),
                "receiver is not an instance of the lookup type"
            );
            None
        }
    }
}

/// Downcast a reflected value to a concrete type.
///
/// Boxed values downcast as their contents.
pub fn downcast<T: Reflect>(value: &dyn Reflect) -> Option<&T> {
    value.as_any().downcast_ref::<T>()
}
