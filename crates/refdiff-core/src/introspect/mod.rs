//! Read access to an object's declared fields by name.
//!
//! Rust has no runtime reflection, so every type that should be walkable
//! registers its fields once with the [`reflect!`](crate::reflect) macro.
//! The registration produces a [`TypeDescriptor`]: the type's declared
//! fields in declaration order, each with a shape (single value or list),
//! the capability tags its declared type satisfies, and a reader function.
//!
//! Readers are generated next to the struct definition, so private fields
//! are reachable through the registry without being exposed in the type's
//! public API.
//!
//! ```
//! use refdiff_core::introspect::{get_field, downcast, Reflect};
//! use refdiff_core::reflect;
//!
//! struct Point {
//!     x: i64,
//!     label: Option<String>,
//! }
//!
//! reflect!(Point {
//!     x: value,
//!     label: optional,
//! });
//!
//! let p = Point { x: 3, label: None };
//! let ty = p.type_descriptor();
//! let x = get_field(&p, &ty, "x").unwrap();
//! assert_eq!(downcast::<i64>(x), Some(&3));
//! assert!(get_field(&p, &ty, "label").is_none());
//! assert!(get_field(&p, &ty, "y").is_none());
//! ```

pub mod introspector;
mod macros;
pub mod reflect;

pub use introspector::{downcast, get_field};
pub use reflect::{
    Capability, FieldDescriptor, FieldRead, FieldReader, FieldShape, Reflect, TypeDescriptor,
    Typed,
};
