use annot_core::{Annotated, AnnotError, AnnotationKind, Value};
use annot_resolve::{Expr, Param, Selector};

use crate::matcher::Matcher;

/// Annotation assertions callable on an instance of the type under test.
///
/// The instance is used only for its type; no field is read.
///
/// ```
/// use annot_core::{kind, Annotated, Required, StringLength, TypeMetadata};
/// use annot_match::ShouldHave;
///
/// struct Customer;
///
/// impl Annotated for Customer {
///     fn type_metadata() -> TypeMetadata {
///         TypeMetadata::builder("Customer")
///             .property("email", |m| m.annotate(Required::default()).annotate(StringLength::new(50)))
///             .build()
///     }
/// }
///
/// let customer = Customer;
/// customer
///     .should_have_with(|x| x.member("email"), 50, &[kind::<StringLength>()])
///     .unwrap();
/// assert!(customer.should_have(&[kind::<Required>()]).is_err());
/// ```
pub trait ShouldHave: Annotated + Sized {
    /// Every kind in `kinds` must be attached to the type.
    fn should_have(&self, kinds: &[AnnotationKind]) -> Result<(), AnnotError> {
        Matcher::default().check_type::<Self>(kinds)
    }

    /// Every kind in `kinds` must be attached to the selected member.
    fn should_have_on<E: Into<Expr>>(
        &self,
        select: impl FnOnce(Param) -> E,
        kinds: &[AnnotationKind],
    ) -> Result<(), AnnotError> {
        Matcher::default().check_member(&Selector::<Self>::new(select), kinds)
    }

    /// Presence on the selected member plus a canonical value check.
    fn should_have_with<E: Into<Expr>>(
        &self,
        select: impl FnOnce(Param) -> E,
        expected: impl Into<Value>,
        kinds: &[AnnotationKind],
    ) -> Result<(), AnnotError> {
        Matcher::default().check_member_value(&Selector::<Self>::new(select), expected, kinds)
    }
}

impl<T: Annotated> ShouldHave for T {}
