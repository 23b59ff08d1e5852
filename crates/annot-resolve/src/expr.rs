//! Expression tree for member selectors.

use std::ops;

use annot_core::Value;
use serde::Serialize;

/// Binary operators a composed selector body may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Gt,
    And,
    Or,
}

/// Body of a selector expression.
///
/// Only `Call` and `Member` directly on `Param` denote a member; the other
/// shapes exist so that composed selectors can be written down and rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Expr {
    /// The selector's parameter itself.
    Param,
    /// Method invocation.
    Call {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    /// Property or field access.
    Member { receiver: Box<Expr>, name: String },
    /// Indexer access.
    Index {
        receiver: Box<Expr>,
        index: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    Constant(Value),
}

impl Expr {
    pub fn constant(value: impl Into<Value>) -> Self {
        Expr::Constant(value.into())
    }

    pub fn conditional(
        test: impl Into<Expr>,
        then: impl Into<Expr>,
        otherwise: impl Into<Expr>,
    ) -> Self {
        Expr::Conditional {
            test: Box::new(test.into()),
            then: Box::new(then.into()),
            otherwise: Box::new(otherwise.into()),
        }
    }

    /// Invokes `method` on this expression.
    pub fn call(self, method: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Call {
            receiver: Box::new(self),
            method: method.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Accesses the property or field `name` on this expression.
    pub fn member(self, name: impl Into<String>) -> Self {
        Expr::Member {
            receiver: Box::new(self),
            name: name.into(),
        }
    }

    pub fn index(self, index: impl Into<Expr>) -> Self {
        Expr::Index {
            receiver: Box::new(self),
            index: Box::new(index.into()),
        }
    }

    pub fn binary(self, op: BinaryOp, rhs: impl Into<Expr>) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(self),
            rhs: Box::new(rhs.into()),
        }
    }

    /// Short label of the outermost shape.
    pub fn shape(&self) -> &'static str {
        match self {
            Expr::Param => "parameter",
            Expr::Call { .. } => "call",
            Expr::Member { .. } => "member",
            Expr::Index { .. } => "index",
            Expr::Binary { .. } => "binary",
            Expr::Conditional { .. } => "conditional",
            Expr::Constant(_) => "constant",
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Expr::Param)
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        self.binary(BinaryOp::Add, rhs)
    }
}

/// Handle for the selector's single parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Param;

impl Param {
    pub fn call(self, method: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Param.call(method, args)
    }

    pub fn member(self, name: impl Into<String>) -> Expr {
        Expr::Param.member(name)
    }

    pub fn index(self, index: impl Into<Expr>) -> Expr {
        Expr::Param.index(index)
    }
}

impl From<Param> for Expr {
    fn from(_: Param) -> Self {
        Expr::Param
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Constant(value)
    }
}
