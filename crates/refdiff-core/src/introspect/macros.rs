//! Registration macro for walkable types.

/// Register a struct's fields with the introspection registry.
///
/// Each field is listed with its kind and, optionally, the capabilities its
/// declared type (or, for lists, its element type) satisfies:
///
/// | kind            | field type          | reads `None` as |
/// |-----------------|---------------------|-----------------|
/// | `value`         | `T`                 | n/a             |
/// | `optional`      | `Option<T>`         | absent          |
/// | `list`          | `Vec<T>`            | n/a             |
/// | `optional_list` | `Option<Vec<T>>`    | absent          |
///
/// `T` must implement [`Reflect`](crate::introspect::Reflect). Capabilities
/// are named by `Capability` constants in scope. Fields not listed are
/// invisible to the registry. Only non-generic structs can be registered.
///
/// ```
/// use refdiff_core::introspect::{Capability, Typed};
/// use refdiff_core::reflect;
///
/// const PRICED: Capability = Capability::new("priced");
///
/// struct Line {
///     sku: String,
/// }
/// reflect!(Line { sku: value });
///
/// struct Order {
///     id: u64,
///     lines: Vec<Line>,
///     note: Option<String>,
/// }
/// reflect!(Order {
///     id: value,
///     lines: list [PRICED],
///     note: optional,
/// });
///
/// let names: Vec<_> = Order::descriptor().fields().iter().map(|f| f.name()).collect();
/// assert_eq!(names, vec!["id", "lines", "note"]);
/// ```
#[macro_export]
macro_rules! reflect {
    (@shape value) => { $crate::introspect::FieldShape::Single };
    (@shape optional) => { $crate::introspect::FieldShape::Single };
    (@shape list) => { $crate::introspect::FieldShape::List };
    (@shape optional_list) => { $crate::introspect::FieldShape::List };

    (@read value, $place:expr) => {
        $crate::introspect::FieldRead::Value(&$place)
    };
    (@read list, $place:expr) => {
        $crate::introspect::FieldRead::Value(&$place)
    };
    (@read optional, $place:expr) => {
        match &$place {
            ::std::option::Option::Some(v) => $crate::introspect::FieldRead::Value(v),
            ::std::option::Option::None => $crate::introspect::FieldRead::Null,
        }
    };
    (@read optional_list, $place:expr) => {
        $crate::reflect!(@read optional, $place)
    };

    ($ty:ident { $($field:ident : $kind:ident $([$($cap:ident),* $(,)?])?),* $(,)? }) => {
        impl $crate::introspect::Typed for $ty {
            const NAME: &'static str = stringify!($ty);
            const FIELDS: &'static [$crate::introspect::FieldDescriptor] = &[
                $(
                    $crate::introspect::FieldDescriptor::new(
                        stringify!($field),
                        $crate::reflect!(@shape $kind),
                        &[$($($cap),*)?],
                        {
                            fn read<'a>(
                                receiver: &'a dyn ::std::any::Any,
                            ) -> $crate::introspect::FieldRead<'a> {
                                match receiver.downcast_ref::<$ty>() {
                                    ::std::option::Option::Some(this) => {
                                        $crate::reflect!(@read $kind, this.$field)
                                    }
                                    ::std::option::Option::None => {
                                        $crate::introspect::FieldRead::Unreadable
                                    }
                                }
                            }
                            read
                        },
                    )
                ),*
            ];
        }

        impl $crate::introspect::Reflect for $ty {
            fn type_descriptor(&self) -> $crate::introspect::TypeDescriptor {
                <$ty as $crate::introspect::Typed>::descriptor()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}
