//! Annotation kinds and attached annotation instances.

use std::any::{type_name, Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Declarative metadata attached to a type or one of its members.
///
/// Every annotation kind is a concrete Rust type; configuration fields live
/// on the value. Implementations usually need no body:
///
/// ```
/// use annot_core::Annotation;
///
/// #[derive(Debug)]
/// struct Audited;
///
/// impl Annotation for Audited {}
/// ```
pub trait Annotation: Any + fmt::Debug + Send + Sync {
    /// Display name of the kind used in diagnostics.
    fn kind_name() -> &'static str
    where
        Self: Sized,
    {
        short_type_name(type_name::<Self>())
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let head = full.split('<').next().unwrap_or(full);
    head.rsplit("::").next().unwrap_or(head)
}

/// Identity of an annotation's declared type (never an instance).
///
/// Equality and hashing use the Rust type identity only; the name is carried
/// for diagnostics.
#[derive(Clone, Copy)]
pub struct AnnotationKind {
    id: TypeId,
    name: &'static str,
}

impl AnnotationKind {
    /// Returns the kind of annotation type `A`.
    pub fn of<A: Annotation>() -> Self {
        Self {
            id: TypeId::of::<A>(),
            name: A::kind_name(),
        }
    }

    /// Display name of the kind.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this kind identifies annotation type `A`.
    pub fn is<A: Annotation>(&self) -> bool {
        self.id == TypeId::of::<A>()
    }
}

impl PartialEq for AnnotationKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AnnotationKind {}

impl Hash for AnnotationKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for AnnotationKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AnnotationKind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Debug for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnnotationKind").field(&self.name).finish()
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for AnnotationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

trait DynAnnotation: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<A: Annotation> DynAnnotation for A {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An attached, already configured occurrence of an annotation kind.
#[derive(Clone)]
pub struct AnnotationInstance {
    kind: AnnotationKind,
    value: Arc<dyn DynAnnotation>,
}

impl AnnotationInstance {
    /// Wraps a configured annotation value.
    pub fn new<A: Annotation>(annotation: A) -> Self {
        Self {
            kind: AnnotationKind::of::<A>(),
            value: Arc::new(annotation),
        }
    }

    /// Kind of the wrapped annotation.
    pub fn kind(&self) -> AnnotationKind {
        self.kind
    }

    /// Whether the instance is of kind `A`.
    pub fn is<A: Annotation>(&self) -> bool {
        self.kind.is::<A>()
    }

    /// Borrows the configured annotation as `A`, if it is one.
    pub fn downcast_ref<A: Annotation>(&self) -> Option<&A> {
        self.value.as_any().downcast_ref::<A>()
    }
}

impl fmt::Debug for AnnotationInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.value, f)
    }
}

impl<A: Annotation> From<A> for AnnotationInstance {
    fn from(annotation: A) -> Self {
        Self::new(annotation)
    }
}
