//! Typed selector expressions over a type under test.

use std::fmt;
use std::marker::PhantomData;

use crate::expr::{Expr, Param};

/// A single-parameter expression naming one member of `T`.
///
/// ```
/// use annot_resolve::Selector;
///
/// struct Customer;
///
/// let by_closure = Selector::<Customer>::new(|x| x.member("email"));
/// let direct = Selector::<Customer>::member("email");
/// assert_eq!(by_closure.body(), direct.body());
/// ```
pub struct Selector<T> {
    body: Expr,
    _subject: PhantomData<fn(&T)>,
}

impl<T> Selector<T> {
    /// Builds a selector from a closure over the parameter.
    pub fn new<E: Into<Expr>>(build: impl FnOnce(Param) -> E) -> Self {
        Self::from_body(build(Param).into())
    }

    /// Wraps an already built expression body.
    pub fn from_body(body: Expr) -> Self {
        Self {
            body,
            _subject: PhantomData,
        }
    }

    /// `x => x.name`
    pub fn member(name: impl Into<String>) -> Self {
        Self::from_body(Param.member(name))
    }

    /// `x => x.name()`
    pub fn method(name: impl Into<String>) -> Self {
        Self::from_body(Param.call(name, Vec::new()))
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        Self::from_body(self.body.clone())
    }
}

impl<T> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("subject", &std::any::type_name::<T>())
            .field("body", &self.body)
            .finish()
    }
}

/// Builds a [`Selector`] from a member path.
///
/// `selector!(Customer, email)` selects a property or field;
/// `selector!(Customer, save())` or `selector!(Customer, rename("x"))`
/// selects a method call. Call arguments become constants.
#[macro_export]
macro_rules! selector {
    ($ty:ty, $name:ident ( $($arg:expr),* $(,)? )) => {
        $crate::Selector::<$ty>::new(|x| {
            x.call(
                stringify!($name),
                vec![$($crate::Expr::constant($arg)),*],
            )
        })
    };
    ($ty:ty, $name:ident) => {
        $crate::Selector::<$ty>::member(stringify!($name))
    };
}
