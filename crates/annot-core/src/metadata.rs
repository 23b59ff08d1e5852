//! Explicit metadata registration for types under test.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::annotation::{Annotation, AnnotationInstance};
use crate::errors::{codes, AnnotError, ErrorInfo};

/// Implemented by every type whose annotations can be asserted.
///
/// The metadata is materialized on every call; implementations should build
/// it from scratch rather than hand out shared state.
pub trait Annotated {
    /// Returns the annotations attached to the type and its members.
    fn type_metadata() -> TypeMetadata;
}

/// Category of a registered member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    Property,
    Field,
}

impl MemberKind {
    /// Whether a plain member access (not a call) may denote this kind.
    pub fn is_accessible_value(&self) -> bool {
        matches!(self, MemberKind::Property | MemberKind::Field)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MemberKind::Method => "method",
            MemberKind::Property => "property",
            MemberKind::Field => "field",
        };
        f.write_str(label)
    }
}

/// A method, property or field together with its own annotations.
#[derive(Debug, Clone)]
pub struct MemberMetadata {
    name: String,
    kind: MemberKind,
    annotations: Vec<AnnotationInstance>,
}

impl MemberMetadata {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Annotations in declaration order.
    pub fn annotations(&self) -> &[AnnotationInstance] {
        &self.annotations
    }
}

/// Annotations attached to a type and its members.
#[derive(Debug, Clone)]
pub struct TypeMetadata {
    name: String,
    annotations: Vec<AnnotationInstance>,
    members: Vec<MemberMetadata>,
    base: Option<Box<TypeMetadata>>,
}

impl TypeMetadata {
    /// Starts building metadata for the type called `name`.
    pub fn builder(name: impl Into<String>) -> TypeMetadataBuilder {
        TypeMetadataBuilder {
            name: name.into(),
            annotations: Vec::new(),
            members: Vec::new(),
            base: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Annotations declared on the type itself; base-type annotations are
    /// not included.
    pub fn annotations(&self) -> &[AnnotationInstance] {
        &self.annotations
    }

    /// Members declared on the type itself.
    pub fn members(&self) -> &[MemberMetadata] {
        &self.members
    }

    /// Looks up a member declared on the type itself.
    pub fn member(&self, name: &str) -> Option<&MemberMetadata> {
        self.members.iter().find(|member| member.name == name)
    }

    /// Metadata of the base type, if one was declared.
    pub fn base(&self) -> Option<&TypeMetadata> {
        self.base.as_deref()
    }

    /// Consumes the metadata, returning the named member if present.
    pub fn into_member(self, name: &str) -> Option<MemberMetadata> {
        self.members.into_iter().find(|member| member.name == name)
    }
}

/// Collects the annotations of a single member.
#[derive(Debug, Default)]
pub struct MemberBuilder {
    annotations: Vec<AnnotationInstance>,
}

impl MemberBuilder {
    /// Attaches an annotation to the member.
    pub fn annotate<A: Annotation>(mut self, annotation: A) -> Self {
        self.annotations.push(AnnotationInstance::new(annotation));
        self
    }
}

/// Fluent builder for [`TypeMetadata`].
#[derive(Debug)]
pub struct TypeMetadataBuilder {
    name: String,
    annotations: Vec<AnnotationInstance>,
    members: Vec<MemberMetadata>,
    base: Option<Box<TypeMetadata>>,
}

impl TypeMetadataBuilder {
    /// Attaches an annotation to the type.
    pub fn annotate<A: Annotation>(mut self, annotation: A) -> Self {
        self.annotations.push(AnnotationInstance::new(annotation));
        self
    }

    /// Declares a member of the given kind.
    pub fn member(
        mut self,
        name: impl Into<String>,
        kind: MemberKind,
        annotate: impl FnOnce(MemberBuilder) -> MemberBuilder,
    ) -> Self {
        let built = annotate(MemberBuilder::default());
        self.members.push(MemberMetadata {
            name: name.into(),
            kind,
            annotations: built.annotations,
        });
        self
    }

    pub fn method(
        self,
        name: impl Into<String>,
        annotate: impl FnOnce(MemberBuilder) -> MemberBuilder,
    ) -> Self {
        self.member(name, MemberKind::Method, annotate)
    }

    pub fn property(
        self,
        name: impl Into<String>,
        annotate: impl FnOnce(MemberBuilder) -> MemberBuilder,
    ) -> Self {
        self.member(name, MemberKind::Property, annotate)
    }

    pub fn field(
        self,
        name: impl Into<String>,
        annotate: impl FnOnce(MemberBuilder) -> MemberBuilder,
    ) -> Self {
        self.member(name, MemberKind::Field, annotate)
    }

    /// Records the base type. Its annotations stay invisible to lookups on
    /// the derived type.
    pub fn extends(mut self, base: TypeMetadata) -> Self {
        self.base = Some(Box::new(base));
        self
    }

    /// Finishes the metadata, rejecting duplicate member names.
    pub fn try_build(self) -> Result<TypeMetadata, AnnotError> {
        for (idx, member) in self.members.iter().enumerate() {
            if self.members[..idx].iter().any(|m| m.name == member.name) {
                return Err(AnnotError::Usage(
                    ErrorInfo::new(
                        codes::DUPLICATE_MEMBER,
                        format!("{} declares member {} twice", self.name, member.name),
                    )
                    .with_context("subject", self.name.clone())
                    .with_context("member", member.name.clone()),
                ));
            }
        }
        Ok(TypeMetadata {
            name: self.name,
            annotations: self.annotations,
            members: self.members,
            base: self.base,
        })
    }

    /// Finishes the metadata, keeping the first declaration of a duplicated
    /// member name.
    pub fn build(self) -> TypeMetadata {
        let mut members: Vec<MemberMetadata> = Vec::with_capacity(self.members.len());
        for member in self.members {
            if members.iter().any(|m| m.name == member.name) {
                warn!(
                    subject = %self.name,
                    member = %member.name,
                    "dropping duplicate member declaration"
                );
                continue;
            }
            members.push(member);
        }
        TypeMetadata {
            name: self.name,
            annotations: self.annotations,
            members,
            base: self.base,
        }
    }
}
