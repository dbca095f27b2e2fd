//! Path-based value resolution over registered object graphs.
//!
//! A [`FieldPath`] is a dot-delimited chain of field names. Resolution walks
//! it from a root object, one declared field at a time, and returns the last
//! value it managed to reach.
//!
//! ## Behaviour worth knowing
//!
//! - **Stop early**: the first segment that cannot be resolved (undeclared
//!   field, field holding `None`, receiver of another type) ends the walk,
//!   and the object reached so far is returned. A misspelled segment is not
//!   an error.
//! - **One lookup type per walk**: every segment is looked up on the same
//!   type descriptor, the one the walk was seeded with (the root's runtime
//!   type, unless the caller supplies one). The descriptor is not re-derived
//!   from the value reached at each level, so a walk only descends through
//!   values of the seed type.
//! - **Blank segments are removed**: `"a..b"` walks `a` then `b`. An empty
//!   or blank segment is never a stop point.
//! - **Null root**: an absent root fails with `RefDiffError::NullObject`
//!   before the path is looked at.

use crate::errors::{RefDiffError, Result};
use crate::introspect::{get_field, Reflect, TypeDescriptor};
use crate::{log_op_end, log_op_error, log_op_start};
use crate::schema::EVENT_STOP_EARLY;
use std::fmt;
use std::time::Instant;

/// Ordered, non-empty, trimmed field name segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Split `path` on `.`; segments are trimmed and empty ones dropped.
    ///
    /// Blank segments are removed rather than kept as unresolvable names,
    /// so they never end a walk early.
    ///
    /// ```
    /// use refdiff_core::path::FieldPath;
    ///
    /// let p = FieldPath::parse(" a . b..c ");
    /// assert_eq!(p.segments(), &["a", "b", "c"]);
    /// assert!(FieldPath::parse("").is_empty());
    /// ```
    pub fn parse(path: &str) -> Self {
        Self::from_segments(path.split('.'))
    }

    /// Build a path from already split segments, applying the same trimming.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(|s| s.as_ref().trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

/// Resolve a dot-delimited `path` starting at `obj`, looked up on `obj`'s
/// runtime type.
///
/// # Errors
///
/// Returns `RefDiffError::NullObject` if `obj` is `None`.
///
/// # Example
///
/// ```
/// use refdiff_core::introspect::downcast;
/// use refdiff_core::path::resolve_from;
/// use refdiff_core::reflect;
///
/// struct Node {
///     next: Option<Box<Node>>,
///     tag: Option<String>,
/// }
/// reflect!(Node { next: optional, tag: optional });
///
/// let root = Node {
///     next: Some(Box::new(Node { next: None, tag: Some("deep".into()) })),
///     tag: None,
/// };
/// let found = resolve_from(Some(&root), "next.tag").unwrap();
/// assert_eq!(downcast::<String>(found).map(String::as_str), Some("deep"));
/// ```
pub fn resolve_from<'a>(obj: Option<&'a dyn Reflect>, path: &str) -> Result<&'a dyn Reflect> {
    let obj = require_root(obj, "resolve_from")?;
    let ty = obj.type_descriptor();
    Ok(walk_logged("resolve_from", obj, &ty, &FieldPath::parse(path)))
}

/// Resolve a path given as separate segments, looked up on `obj`'s runtime type.
///
/// # Errors
///
/// Returns `RefDiffError::NullObject` if `obj` is `None`.
pub fn resolve_path<'a, S: AsRef<str>>(
    obj: Option<&'a dyn Reflect>,
    segments: &[S],
) -> Result<&'a dyn Reflect> {
    let obj = require_root(obj, "resolve_path")?;
    let ty = obj.type_descriptor();
    Ok(walk_logged(
        "resolve_path",
        obj,
        &ty,
        &FieldPath::from_segments(segments),
    ))
}

/// Resolve `path` starting at `obj`, looking every segment up on `ty`.
///
/// # Errors
///
/// Returns `RefDiffError::NullObject` if `obj` is `None`.
pub fn resolve_with_type<'a>(
    obj: Option<&'a dyn Reflect>,
    ty: &TypeDescriptor,
    path: &FieldPath,
) -> Result<&'a dyn Reflect> {
    let obj = require_root(obj, "resolve_with_type")?;
    Ok(walk_logged("resolve_with_type", obj, ty, path))
}

fn require_root<'a>(obj: Option<&'a dyn Reflect>, op: &str) -> Result<&'a dyn Reflect> {
    obj.ok_or_else(|| {
        let err = RefDiffError::NullObject { op: op.to_string() };
        log_op_error!(op, err.clone(), duration_ms = 0u64);
        err
    })
}

fn walk_logged<'a>(
    op: &str,
    obj: &'a dyn Reflect,
    ty: &TypeDescriptor,
    path: &FieldPath,
) -> &'a dyn Reflect {
    let start = Instant::now();
    log_op_start!(op, type_name = ty.name(), path_len = path.len());
    let resolved = walk(obj, ty, path);
    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        type_name = resolved.type_descriptor().name()
    );
    resolved
}

fn walk<'a>(root: &'a dyn Reflect, ty: &TypeDescriptor, path: &FieldPath) -> &'a dyn Reflect {
    let mut current = root;
    for (depth, segment) in path.segments().iter().enumerate() {
        match get_field(current, ty, segment) {
            Some(next) => current = next,
            None => {
                tracing::trace!(
                    event = EVENT_STOP_EARLY,
                    type_name = ty.name(),
                    field = segment.as_str(),
                    depth = depth as u64,
                );
                return current;
            }
        }
    }
    current
}
