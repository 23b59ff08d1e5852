mod common;

use annot_core::errors::codes;
use annot_core::{
    kind, Compare, DataType, DataTypeHint, DisplayMeta, RegularExpression, Required, StringLength,
};
use annot_match::{
    assert_member_has_annotation_values, Matcher, MatcherOptions, ShouldHave,
};
use annot_resolve::selector;

use common::{Audited, Registration};

#[test]
fn maximum_length_matches() {
    assert_member_has_annotation_values(
        &selector!(Registration, email),
        50,
        &[kind::<StringLength>()],
    )
    .expect("50 matches");
}

#[test]
fn maximum_length_mismatch_fails() {
    let err = assert_member_has_annotation_values(
        &selector!(Registration, email),
        51,
        &[kind::<StringLength>()],
    )
    .expect_err("51 differs");
    assert!(err.is_assertion());
    assert_eq!(err.code(), codes::VALUE_MISMATCH);
    assert_eq!(
        err.message(),
        "StringLength.maximum_length on Registration::email: expected 51, found 50"
    );
    assert_eq!(err.info().context["actual"], "50");
}

#[test]
fn display_name_matches_exactly() {
    let email = selector!(Registration, email);
    assert_member_has_annotation_values(&email, "Email Address", &[kind::<DisplayMeta>()])
        .expect("full name");
    let err = assert_member_has_annotation_values(&email, "Email", &[kind::<DisplayMeta>()])
        .expect_err("prefix only");
    assert_eq!(err.info().context["field"], "name");
}

#[test]
fn pattern_compares_string_form() {
    let retries = selector!(Registration, retries);
    assert_member_has_annotation_values(&retries, 3, &[kind::<RegularExpression>()])
        .expect("3 renders as the pattern");
    assert_member_has_annotation_values(&retries, "3", &[kind::<RegularExpression>()])
        .expect("string form");
}

#[test]
fn compared_property_matches() {
    let confirm = selector!(Registration, confirm_email);
    assert_member_has_annotation_values(&confirm, "email", &[kind::<Compare>()])
        .expect("compares with email");
    assert!(
        assert_member_has_annotation_values(&confirm, "nickname", &[kind::<Compare>()]).is_err()
    );
}

#[test]
fn data_type_matches_enum_value() {
    let email = selector!(Registration, email);
    assert_member_has_annotation_values(&email, DataType::EmailAddress, &[kind::<DataTypeHint>()])
        .expect("email address");
    let err =
        assert_member_has_annotation_values(&email, DataType::Url, &[kind::<DataTypeHint>()])
            .expect_err("url differs");
    assert_eq!(err.info().context["expected"], "Url");
    assert_eq!(err.info().context["actual"], "EmailAddress");
}

#[test]
fn mismatched_value_type_fails_with_hint() {
    let err = assert_member_has_annotation_values(
        &selector!(Registration, email),
        "50",
        &[kind::<StringLength>()],
    )
    .expect_err("string against int field");
    assert!(err.is_assertion());
    assert!(err.info().hint.as_deref().unwrap_or_default().contains("int"));
}

#[test]
fn kinds_without_rule_skip_value_comparison() {
    let email = selector!(Registration, email);
    assert_member_has_annotation_values(
        &email,
        "anything at all",
        &[kind::<Required>(), kind::<Audited>()],
    )
    .expect("presence only");
}

#[test]
fn expected_value_applies_to_every_ruled_kind() {
    let email = selector!(Registration, email);
    let err = assert_member_has_annotation_values(
        &email,
        50,
        &[kind::<Required>(), kind::<StringLength>(), kind::<DisplayMeta>()],
    )
    .expect_err("50 does not match the display name");
    assert_eq!(err.info().context["kind"], "DisplayMeta");
}

#[test]
fn only_first_instance_is_compared() {
    let nickname = selector!(Registration, nickname);
    assert_member_has_annotation_values(&nickname, 20, &[kind::<StringLength>()])
        .expect("first instance");
    assert!(assert_member_has_annotation_values(&nickname, 40, &[kind::<StringLength>()]).is_err());
}

#[test]
fn missing_kind_fails_before_value_comparison() {
    let err = assert_member_has_annotation_values(
        &selector!(Registration, notes),
        50,
        &[kind::<StringLength>()],
    )
    .expect_err("missing");
    assert_eq!(err.code(), codes::MISSING_ANNOTATION);
}

#[test]
fn strict_policy_rejects_value_for_unruled_kind() {
    let matcher = Matcher::with_options(MatcherOptions::strict());
    let err = matcher
        .check_member_value(&selector!(Registration, email), true, &[kind::<Required>()])
        .expect_err("strict");
    assert!(err.is_assertion());
    assert_eq!(err.code(), codes::UNSUPPORTED_KIND);
}

#[test]
fn custom_rule_extends_table() {
    let mut matcher = Matcher::default();
    matcher
        .rules_mut()
        .register(annot_match::ComparisonRule::new::<Required>(
            "allow_empty_strings",
            annot_match::Comparison::Exact,
            |a| Some(a.allow_empty_strings.into()),
        ));
    matcher
        .check_member_value(&selector!(Registration, email), false, &[kind::<Required>()])
        .expect("default is false");
    assert!(matcher
        .check_member_value(&selector!(Registration, email), true, &[kind::<Required>()])
        .is_err());
}

#[test]
fn extension_trait_value_check() {
    Registration
        .should_have_with(|x| x.call("submit", vec![]), "Submit", &[kind::<DisplayMeta>()])
        .expect("method display name");
}

struct Limits;

impl annot_core::Annotated for Limits {
    fn type_metadata() -> annot_core::TypeMetadata {
        annot_core::TypeMetadata::builder("Limits")
            .property("payload", |m| {
                m.annotate(StringLength::new(i64::MAX))
                    .annotate(RegularExpression::new("True"))
                    .annotate(DataTypeHint::custom("E164"))
            })
            .build()
    }
}

#[test]
fn unsigned_values_beyond_int_range_do_not_match() {
    let payload = selector!(Limits, payload);
    let err = assert_member_has_annotation_values(&payload, u64::MAX, &[kind::<StringLength>()])
        .expect_err("u64::MAX is not i64::MAX");
    assert_eq!(err.code(), codes::VALUE_MISMATCH);
    assert_eq!(err.info().context["expected"], u64::MAX.to_string());
    assert_member_has_annotation_values(&payload, i64::MAX as u64, &[kind::<StringLength>()])
        .expect("in range");
}

#[test]
fn booleans_compare_in_capitalized_string_form() {
    let payload = selector!(Limits, payload);
    assert_member_has_annotation_values(&payload, true, &[kind::<RegularExpression>()])
        .expect("true renders as True");
    assert!(
        assert_member_has_annotation_values(&payload, false, &[kind::<RegularExpression>()])
            .is_err()
    );
}

#[test]
fn custom_data_type_compares_as_custom() {
    assert_member_has_annotation_values(
        &selector!(Limits, payload),
        DataType::Custom,
        &[kind::<DataTypeHint>()],
    )
    .expect("custom classification");
}

#[test]
fn matcher_exposes_its_configuration() {
    let matcher = Matcher::with_options(MatcherOptions::strict());
    assert_eq!(matcher.options(), &MatcherOptions::strict());
    assert_eq!(matcher.rules().len(), 5);
    assert!(matcher.rules().contains(kind::<Compare>()));
}
