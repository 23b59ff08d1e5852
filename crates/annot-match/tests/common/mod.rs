#![allow(dead_code)]

use annot_core::{
    Annotated, Annotation, Compare, DataType, DataTypeHint, DisplayMeta, Key, RegularExpression,
    Required, StringLength, TypeMetadata,
};

/// Marker annotation without a comparison rule.
#[derive(Debug)]
pub struct Audited;

impl Annotation for Audited {}

#[derive(Debug)]
pub struct Sensitive;

impl Annotation for Sensitive {}

pub struct Entity;

impl Annotated for Entity {
    fn type_metadata() -> TypeMetadata {
        TypeMetadata::builder("Entity")
            .annotate(Audited)
            .property("id", |m| m.annotate(Key))
            .build()
    }
}

pub struct Registration;

impl Annotated for Registration {
    fn type_metadata() -> TypeMetadata {
        TypeMetadata::builder("Registration")
            .extends(Entity::type_metadata())
            .annotate(DisplayMeta::named("Registration"))
            .property("email", |m| {
                m.annotate(Required::default())
                    .annotate(StringLength::new(50))
                    .annotate(DisplayMeta::named("Email Address"))
                    .annotate(DataTypeHint::new(DataType::EmailAddress))
                    .annotate(RegularExpression::new(r"^[^@\s]+@[^@\s]+$"))
                    .annotate(Audited)
            })
            .property("confirm_email", |m| {
                m.annotate(Compare::new("email"))
                    .annotate(StringLength::new(50))
            })
            .property("nickname", |m| {
                m.annotate(StringLength::new(20))
                    .annotate(StringLength::new(40))
            })
            .field("retries", |m| m.annotate(RegularExpression::new("3")))
            .property("notes", |m| m)
            .method("submit", |m| m.annotate(DisplayMeta::named("Submit")))
            .build()
    }
}
