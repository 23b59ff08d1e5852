//! Annotation presence and canonical value assertions for types under test.
//!
//! A [`Matcher`] checks that requested annotation kinds are attached to a
//! type or to a member picked by a [`Selector`](annot_resolve::Selector),
//! and optionally compares one canonical field per kind against an expected
//! value using its [`ComparisonRules`].

mod ext;
mod macros;
mod matcher;
mod options;
mod rules;

pub use ext::ShouldHave;
pub use matcher::{
    assert_has_annotations, assert_member_has_annotation_values, assert_member_has_annotations,
    Matcher,
};
pub use options::{MatcherOptions, UnknownKindPolicy};
pub use rules::{Comparison, ComparisonRule, ComparisonRules};

#[doc(hidden)]
pub use annot_core::kind as __kind;
#[doc(hidden)]
pub use annot_resolve::selector as __selector;
#[doc(hidden)]
pub use macros::__panic_on_failure;
