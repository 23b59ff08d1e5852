//! Selector expressions and member resolution for annotation assertions.

mod expr;
mod resolver;
mod selector;

pub use expr::{BinaryOp, Expr, Param};
pub use resolver::{classify, resolve, Target};
pub use selector::Selector;
