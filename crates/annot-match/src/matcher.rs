use annot_core::errors::{codes, AnnotError, ErrorInfo};
use annot_core::{Annotated, AnnotationInstance, AnnotationKind, Subject, TypeDescriptor, Value};
use annot_resolve::{resolve, Selector};
use tracing::{debug, trace};

use crate::options::{MatcherOptions, UnknownKindPolicy};
use crate::rules::{ComparisonRule, ComparisonRules};

/// Asserts annotation presence and canonical values on types and members.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    rules: ComparisonRules,
    options: MatcherOptions,
}

impl Matcher {
    pub fn new(rules: ComparisonRules, options: MatcherOptions) -> Self {
        Self { rules, options }
    }

    /// Built-in comparison rules with the given options.
    pub fn with_options(options: MatcherOptions) -> Self {
        Self::new(ComparisonRules::builtin(), options)
    }

    pub fn rules(&self) -> &ComparisonRules {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut ComparisonRules {
        &mut self.rules
    }

    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// Every kind in `kinds` must be attached to `T` itself.
    pub fn check_type<T: Annotated>(&self, kinds: &[AnnotationKind]) -> Result<(), AnnotError> {
        self.check_subject(&TypeDescriptor::of::<T>(), None, kinds)
    }

    /// Every kind in `kinds` must be attached to the selected member.
    pub fn check_member<T: Annotated>(
        &self,
        selector: &Selector<T>,
        kinds: &[AnnotationKind],
    ) -> Result<(), AnnotError> {
        let member = resolve(selector)?;
        self.check_subject(&member, None, kinds)
    }

    /// Like [`Matcher::check_member`], and the canonical field of the first
    /// instance of every kind with a comparison rule must equal `expected`.
    pub fn check_member_value<T: Annotated>(
        &self,
        selector: &Selector<T>,
        expected: impl Into<Value>,
        kinds: &[AnnotationKind],
    ) -> Result<(), AnnotError> {
        let member = resolve(selector)?;
        let expected = expected.into();
        self.check_subject(&member, Some(&expected), kinds)
    }

    fn check_subject(
        &self,
        subject: &dyn Subject,
        expected: Option<&Value>,
        kinds: &[AnnotationKind],
    ) -> Result<(), AnnotError> {
        let subject_name = subject.subject_name();
        let mut failures = Vec::new();
        for &kind in kinds {
            let instances = subject.annotations_of(kind);
            debug!(
                kind = %kind,
                subject = %subject_name,
                instances = instances.len(),
                "checking annotation"
            );
            let outcome = match instances.first() {
                None => Err(missing(kind, &subject_name)),
                Some(first) => match expected {
                    Some(expected) => self.check_value(kind, first, expected, &subject_name),
                    None => Ok(()),
                },
            };
            if let Err(failure) = outcome {
                if !self.options.report_all {
                    return Err(failure);
                }
                failures.push(failure);
            }
        }
        combine(failures)
    }

    fn check_value(
        &self,
        kind: AnnotationKind,
        instance: &AnnotationInstance,
        expected: &Value,
        subject_name: &str,
    ) -> Result<(), AnnotError> {
        match self.rules.rule_for(kind) {
            Some(rule) => compare(rule, instance, expected, subject_name),
            None => match self.options.unknown_kind_policy {
                UnknownKindPolicy::Permissive => {
                    trace!(kind = %kind, "no comparison rule; value ignored");
                    Ok(())
                }
                UnknownKindPolicy::Strict => Err(AnnotError::Assertion(
                    ErrorInfo::new(
                        codes::UNSUPPORTED_KIND,
                        format!("{kind} on {subject_name} has no comparable field"),
                    )
                    .with_context("kind", kind.name())
                    .with_context("subject", subject_name)
                    .with_context("expected", expected.string_form()),
                )),
            },
        }
    }
}

fn missing(kind: AnnotationKind, subject_name: &str) -> AnnotError {
    AnnotError::Assertion(
        ErrorInfo::new(
            codes::MISSING_ANNOTATION,
            format!("{kind} not found on {subject_name}"),
        )
        .with_context("kind", kind.name())
        .with_context("subject", subject_name),
    )
}

fn compare(
    rule: &ComparisonRule,
    instance: &AnnotationInstance,
    expected: &Value,
    subject_name: &str,
) -> Result<(), AnnotError> {
    let actual = rule.canonical(instance);
    trace!(
        kind = %rule.kind(),
        field = rule.field(),
        expected = %expected,
        actual = ?actual,
        "comparing canonical field"
    );
    if let Some(actual) = &actual {
        if rule.comparison().matches(expected, actual) {
            return Ok(());
        }
    }
    let found = actual
        .as_ref()
        .map(Value::string_form)
        .unwrap_or_else(|| "<unset>".to_string());
    let mut info = ErrorInfo::new(
        codes::VALUE_MISMATCH,
        format!(
            "{}.{} on {subject_name}: expected {expected}, found {found}",
            rule.kind(),
            rule.field()
        ),
    )
    .with_context("kind", rule.kind().name())
    .with_context("subject", subject_name)
    .with_context("field", rule.field())
    .with_context("expected", expected.string_form())
    .with_context("actual", found);
    if let Some(actual) = &actual {
        if actual.type_name() != expected.type_name() {
            info = info.with_hint(format!(
                "{} compares {} values, got {}",
                rule.field(),
                actual.type_name(),
                expected.type_name()
            ));
        }
    }
    Err(AnnotError::Assertion(info))
}

fn combine(mut failures: Vec<AnnotError>) -> Result<(), AnnotError> {
    if failures.len() <= 1 {
        return failures.pop().map_or(Ok(()), Err);
    }
    let count = failures.len();
    let rest: Vec<String> = failures[1..]
        .iter()
        .map(|failure| failure.message().to_string())
        .collect();
    let mut info = failures.swap_remove(0).info().clone();
    info.message = format!("{}; {}", info.message, rest.join("; "));
    info = info.with_context("failures", count.to_string());
    Err(AnnotError::Assertion(info))
}

/// Asserts that every kind in `kinds` is attached to `T` itself.
pub fn assert_has_annotations<T: Annotated>(kinds: &[AnnotationKind]) -> Result<(), AnnotError> {
    Matcher::default().check_type::<T>(kinds)
}

/// Asserts that every kind in `kinds` is attached to the selected member.
pub fn assert_member_has_annotations<T: Annotated>(
    selector: &Selector<T>,
    kinds: &[AnnotationKind],
) -> Result<(), AnnotError> {
    Matcher::default().check_member(selector, kinds)
}

/// Asserts presence on the selected member and that each kind's canonical
/// field equals `expected`.
pub fn assert_member_has_annotation_values<T: Annotated>(
    selector: &Selector<T>,
    expected: impl Into<Value>,
    kinds: &[AnnotationKind],
) -> Result<(), AnnotError> {
    Matcher::default().check_member_value(selector, expected, kinds)
}
