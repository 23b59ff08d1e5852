//! Read-only descriptors the matcher queries for attached annotations.

use crate::annotation::{AnnotationInstance, AnnotationKind};
use crate::metadata::{Annotated, MemberKind, MemberMetadata, TypeMetadata};

/// Anything annotations can be attached to.
pub trait Subject {
    /// Name used in diagnostics (`Type` or `Type::member`).
    fn subject_name(&self) -> String;

    /// Annotations attached directly to the subject, in declaration order.
    fn annotations(&self) -> &[AnnotationInstance];

    /// Attached instances of `kind`, in declaration order.
    fn annotations_of(&self, kind: AnnotationKind) -> Vec<&AnnotationInstance> {
        self.annotations()
            .iter()
            .filter(|instance| instance.kind() == kind)
            .collect()
    }
}

/// Identifies a type under test.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    metadata: TypeMetadata,
}

impl TypeDescriptor {
    /// Materializes the descriptor for `T`.
    pub fn of<T: Annotated>() -> Self {
        Self::from_metadata(T::type_metadata())
    }

    pub fn from_metadata(metadata: TypeMetadata) -> Self {
        Self { metadata }
    }

    pub fn name(&self) -> &str {
        self.metadata.name()
    }

    pub fn metadata(&self) -> &TypeMetadata {
        &self.metadata
    }
}

impl Subject for TypeDescriptor {
    fn subject_name(&self) -> String {
        self.metadata.name().to_string()
    }

    fn annotations(&self) -> &[AnnotationInstance] {
        self.metadata.annotations()
    }
}

/// Identifies a single method, property or field of a type.
///
/// Produced by member resolution; tests obtain one through a selector, not
/// by constructing it.
#[derive(Debug, Clone)]
pub struct MemberDescriptor {
    type_name: String,
    member: MemberMetadata,
}

impl MemberDescriptor {
    /// Looks up `name` among the members declared on `metadata`, accepting
    /// only members whose kind satisfies `accept`. Seam for the resolver.
    #[doc(hidden)]
    pub fn lookup(
        metadata: TypeMetadata,
        name: &str,
        accept: impl Fn(MemberKind) -> bool,
    ) -> Option<Self> {
        let type_name = metadata.name().to_string();
        let member = metadata.into_member(name)?;
        if !accept(member.kind()) {
            return None;
        }
        Some(Self { type_name, member })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> &str {
        self.member.name()
    }

    pub fn kind(&self) -> MemberKind {
        self.member.kind()
    }
}

impl Subject for MemberDescriptor {
    fn subject_name(&self) -> String {
        format!("{}::{}", self.type_name, self.member.name())
    }

    fn annotations(&self) -> &[AnnotationInstance] {
        self.member.annotations()
    }
}
