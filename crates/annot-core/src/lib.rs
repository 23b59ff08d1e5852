#![doc = "Annotation metadata model shared by the annot crates: annotation kinds, attached instances, type and member descriptors, expected values and the error surface."]

pub mod annotation;
pub mod builtin;
pub mod descriptor;
pub mod errors;
pub mod metadata;
mod value;

pub use annotation::{Annotation, AnnotationInstance, AnnotationKind};
pub use builtin::{
    Compare, DataType, DataTypeHint, DisplayMeta, Key, Range, RegularExpression, Required,
    StringLength,
};
pub use descriptor::{MemberDescriptor, Subject, TypeDescriptor};
pub use errors::{AnnotError, ErrorInfo};
pub use metadata::{
    Annotated, MemberBuilder, MemberKind, MemberMetadata, TypeMetadata, TypeMetadataBuilder,
};
pub use value::Value;

/// Shorthand for [`AnnotationKind::of`].
pub fn kind<A: Annotation>() -> AnnotationKind {
    AnnotationKind::of::<A>()
}
