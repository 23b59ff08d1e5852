//! Member resolution from selector expressions.

use annot_core::errors::{codes, AnnotError, ErrorInfo};
use annot_core::{Annotated, MemberDescriptor, MemberKind};
use tracing::debug;

use crate::expr::Expr;
use crate::selector::Selector;

/// What a valid selector body denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// A method invocation on the parameter.
    Method { name: &'a str, arity: usize },
    /// A property or field access on the parameter.
    Member { name: &'a str },
}

impl Target<'_> {
    pub fn name(&self) -> &str {
        match self {
            Target::Method { name, .. } | Target::Member { name } => name,
        }
    }

    fn accepts(&self, kind: MemberKind) -> bool {
        match self {
            Target::Method { .. } => kind == MemberKind::Method,
            Target::Member { .. } => kind.is_accessible_value(),
        }
    }
}

/// Classifies a selector body without consulting any metadata.
pub fn classify(body: &Expr) -> Result<Target<'_>, AnnotError> {
    match body {
        Expr::Call {
            receiver,
            method,
            args,
        } if receiver.is_param() => Ok(Target::Method {
            name: method,
            arity: args.len(),
        }),
        Expr::Member { receiver, name } if receiver.is_param() => Ok(Target::Member { name }),
        Expr::Call { .. } | Expr::Member { .. } => Err(invalid_shape(
            body,
            "chained access on an intermediate value",
        )),
        _ => Err(invalid_shape(body, "not a method call or member access")),
    }
}

fn invalid_shape(body: &Expr, reason: &str) -> AnnotError {
    AnnotError::Usage(
        ErrorInfo::new(
            codes::INVALID_EXPRESSION_SHAPE,
            "The expression does not represent a type member or a method call.",
        )
        .with_context("shape", body.shape())
        .with_context("reason", reason)
        .with_hint("select exactly one member: |x| x.member(\"name\") or |x| x.call(\"name\", [])"),
    )
}

/// Resolves the member a selector denotes on `T`.
///
/// Only members declared on `T` itself are resolvable. A call must name a
/// method; a plain access must name a property or field.
pub fn resolve<T: Annotated>(selector: &Selector<T>) -> Result<MemberDescriptor, AnnotError> {
    let target = classify(selector.body())?;
    let metadata = T::type_metadata();
    let type_name = metadata.name().to_string();
    let declared = metadata.member(target.name()).map(|member| member.kind());

    match MemberDescriptor::lookup(metadata, target.name(), |kind| target.accepts(kind)) {
        Some(descriptor) => {
            debug!(
                subject = %type_name,
                member = %descriptor.name(),
                kind = %descriptor.kind(),
                "resolved selector"
            );
            Ok(descriptor)
        }
        None => Err(unknown_member(&type_name, &target, declared)),
    }
}

fn unknown_member(
    type_name: &str,
    target: &Target<'_>,
    declared: Option<MemberKind>,
) -> AnnotError {
    let wanted = match target {
        Target::Method { .. } => "method",
        Target::Member { .. } => "property or field",
    };
    let mut info = ErrorInfo::new(
        codes::UNKNOWN_MEMBER,
        format!("{type_name} has no {wanted} named {}", target.name()),
    )
    .with_context("subject", type_name)
    .with_context("member", target.name());
    if let Some(kind) = declared {
        info = info
            .with_context("declared", kind.to_string())
            .with_hint(match kind {
                MemberKind::Method => "select methods with a call: |x| x.call(name, [])",
                _ => "select properties and fields without a call: |x| x.member(name)",
            });
    }
    AnnotError::Usage(info)
}
