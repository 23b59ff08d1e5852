//! Registry of comparison rules for annotation kinds with a canonical field.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use annot_core::{
    Annotation, AnnotationInstance, AnnotationKind, Compare, DataTypeHint, DisplayMeta,
    RegularExpression, StringLength, Value,
};
use serde::{Deserialize, Serialize};

/// How an expected value is compared with a canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Value equality; differing value types never match.
    Exact,
    /// Equality of the rendered string forms.
    StringForm,
}

impl Comparison {
    pub fn matches(&self, expected: &Value, actual: &Value) -> bool {
        match self {
            Comparison::Exact => expected == actual,
            Comparison::StringForm => expected.string_form() == actual.string_form(),
        }
    }
}

type Extractor = dyn Fn(&AnnotationInstance) -> Option<Value> + Send + Sync;

/// Extracts and compares the canonical field of one annotation kind.
#[derive(Clone)]
pub struct ComparisonRule {
    kind: AnnotationKind,
    field: &'static str,
    comparison: Comparison,
    extract: Arc<Extractor>,
}

impl ComparisonRule {
    /// Rule for kind `A` reading `field` through `extract`. An extractor
    /// returning `None` means the field is unset on that instance.
    pub fn new<A: Annotation>(
        field: &'static str,
        comparison: Comparison,
        extract: fn(&A) -> Option<Value>,
    ) -> Self {
        Self {
            kind: AnnotationKind::of::<A>(),
            field,
            comparison,
            extract: Arc::new(move |instance: &AnnotationInstance| {
                instance.downcast_ref::<A>().and_then(extract)
            }),
        }
    }

    pub fn kind(&self) -> AnnotationKind {
        self.kind
    }

    /// Name of the canonical field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Reads the canonical field from `instance`.
    pub fn canonical(&self, instance: &AnnotationInstance) -> Option<Value> {
        (self.extract)(instance)
    }
}

impl fmt::Debug for ComparisonRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparisonRule")
            .field("kind", &self.kind)
            .field("field", &self.field)
            .field("comparison", &self.comparison)
            .finish_non_exhaustive()
    }
}

/// Mapping from annotation kind to its comparison rule.
#[derive(Debug, Clone)]
pub struct ComparisonRules {
    rules: BTreeMap<AnnotationKind, ComparisonRule>,
}

impl ComparisonRules {
    /// A registry without any rules; every kind degrades to presence checks.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// The built-in table:
    ///
    /// | kind | field | comparison |
    /// |---|---|---|
    /// | [`StringLength`] | `maximum_length` | exact |
    /// | [`DisplayMeta`] | `name` | exact |
    /// | [`RegularExpression`] | `pattern` | string form |
    /// | [`Compare`] | `other_property` | string form |
    /// | [`DataTypeHint`] | `data_type` | exact |
    pub fn builtin() -> Self {
        Self::empty()
            .with(ComparisonRule::new::<StringLength>(
                "maximum_length",
                Comparison::Exact,
                |a| Some(Value::Int(a.maximum_length)),
            ))
            .with(ComparisonRule::new::<DisplayMeta>(
                "name",
                Comparison::Exact,
                |a| a.name.clone().map(Value::Str),
            ))
            .with(ComparisonRule::new::<RegularExpression>(
                "pattern",
                Comparison::StringForm,
                |a| Some(Value::Str(a.pattern.clone())),
            ))
            .with(ComparisonRule::new::<Compare>(
                "other_property",
                Comparison::StringForm,
                |a| Some(Value::Str(a.other_property.clone())),
            ))
            .with(ComparisonRule::new::<DataTypeHint>(
                "data_type",
                Comparison::Exact,
                |a| Some(Value::DataType(a.data_type)),
            ))
    }

    /// Adds `rule`, replacing any rule already registered for its kind.
    pub fn register(&mut self, rule: ComparisonRule) -> &mut Self {
        self.rules.insert(rule.kind(), rule);
        self
    }

    pub fn with(mut self, rule: ComparisonRule) -> Self {
        self.register(rule);
        self
    }

    pub fn rule_for(&self, kind: AnnotationKind) -> Option<&ComparisonRule> {
        self.rules.get(&kind)
    }

    pub fn contains(&self, kind: AnnotationKind) -> bool {
        self.rules.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ComparisonRules {
    fn default() -> Self {
        Self::builtin()
    }
}
