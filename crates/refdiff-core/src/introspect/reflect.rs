//! Field registry types and the [`Reflect`] trait.

use std::any::{type_name, Any};
use std::fmt;

/// A named contract a field's declared type may satisfy.
///
/// Satisfaction is declared, not inferred: a field satisfies a capability
/// when the capability is listed in its registration. Supertype-style
/// relationships are expressed by listing every capability that applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capability {
    name: &'static str,
}

impl Capability {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Declared shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A single value (possibly optional)
    Single,
    /// A list whose element type carries the field's capabilities
    List,
}

/// Outcome of reading one field from one receiver.
pub enum FieldRead<'a> {
    Value(&'a dyn Reflect),
    /// The field exists but currently holds no value
    Null,
    /// The receiver is not an instance of the field's declaring type
    Unreadable,
}

impl fmt::Debug for FieldRead<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRead::Value(v) => write!(f, "Value({})", v.type_descriptor().name()),
            FieldRead::Null => f.write_str("Null"),
            FieldRead::Unreadable => f.write_str("Unreadable"),
        }
    }
}

/// Reads a field out of a type-erased receiver.
pub type FieldReader = for<'a> fn(&'a dyn Any) -> FieldRead<'a>;

/// One declared field of a registered type.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    name: &'static str,
    shape: FieldShape,
    capabilities: &'static [Capability],
    reader: FieldReader,
}

impl FieldDescriptor {
    pub const fn new(
        name: &'static str,
        shape: FieldShape,
        capabilities: &'static [Capability],
        reader: FieldReader,
    ) -> Self {
        Self {
            name,
            shape,
            capabilities,
            reader,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> FieldShape {
        self.shape
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        self.capabilities
    }

    /// Whether the field's declared type (element type, for lists) carries `capability`.
    pub fn satisfies(&self, capability: &Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// Read this field from `receiver`.
    pub fn read<'a>(&self, receiver: &'a dyn Reflect) -> FieldRead<'a> {
        (self.reader)(receiver.as_any())
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

/// A registered type: its name and its declared fields in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
    name: &'static str,
    fields: &'static [FieldDescriptor],
}

impl TypeDescriptor {
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    /// Look up a field declared directly on this type.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A value whose declared fields can be read by name.
pub trait Reflect: Any {
    /// Descriptor of this value's runtime type.
    fn type_descriptor(&self) -> TypeDescriptor;

    fn as_any(&self) -> &dyn Any;

    /// Elements, for list-like values.
    fn elements(&self) -> Option<Vec<&dyn Reflect>> {
        None
    }
}

/// A registered type that can be named without an instance.
pub trait Typed: Reflect {
    const NAME: &'static str;
    const FIELDS: &'static [FieldDescriptor];

    fn descriptor() -> TypeDescriptor
    where
        Self: Sized,
    {
        TypeDescriptor::new(Self::NAME, Self::FIELDS)
    }
}

macro_rules! leaf_reflect {
    ($($t:ty),* $(,)?) => {
        $(
            impl Reflect for $t {
                fn type_descriptor(&self) -> TypeDescriptor {
                    TypeDescriptor::new(type_name::<$t>(), &[])
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

leaf_reflect!(
    String,
    &'static str,
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);

impl<T: Reflect> Reflect for Vec<T> {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new(type_name::<Vec<T>>(), &[])
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn elements(&self) -> Option<Vec<&dyn Reflect>> {
        Some(self.iter().map(|e| e as &dyn Reflect).collect())
    }
}

// Boxes are transparent: a boxed node reads and downcasts as the node itself.
impl<T: Reflect> Reflect for Box<T> {
    fn type_descriptor(&self) -> TypeDescriptor {
        (**self).type_descriptor()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn elements(&self) -> Option<Vec<&dyn Reflect>> {
        (**self).elements()
    }
}
