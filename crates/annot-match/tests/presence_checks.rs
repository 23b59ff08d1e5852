mod common;

use annot_core::errors::codes;
use annot_core::{kind, DisplayMeta, Key, Required, StringLength};
use annot_match::{
    assert_has_annotations, assert_member_has_annotations, Matcher, MatcherOptions, ShouldHave,
};
use annot_resolve::{selector, Expr, Selector};

use common::{Audited, Registration, Sensitive};

#[test]
fn type_level_kinds_are_found() {
    assert_has_annotations::<Registration>(&[kind::<DisplayMeta>()]).expect("display on type");
}

#[test]
fn type_level_missing_kind_names_kind_and_type() {
    let err = assert_has_annotations::<Registration>(&[kind::<Required>()]).expect_err("missing");
    assert!(err.is_assertion());
    assert_eq!(err.code(), codes::MISSING_ANNOTATION);
    assert_eq!(err.message(), "Required not found on Registration");
    assert_eq!(err.info().context["kind"], "Required");
    assert_eq!(err.info().context["subject"], "Registration");
}

#[test]
fn base_type_annotations_are_invisible() {
    let err = assert_has_annotations::<Registration>(&[kind::<Audited>()]).expect_err("inherited");
    assert_eq!(err.message(), "Audited not found on Registration");
}

#[test]
fn member_check_uses_member_annotations_only() {
    let email = Selector::<Registration>::new(|x| x.member("email"));
    assert_member_has_annotations(&email, &[kind::<Required>(), kind::<StringLength>()])
        .expect("email annotations");

    let notes = selector!(Registration, notes);
    let err = assert_member_has_annotations(&notes, &[kind::<DisplayMeta>()])
        .expect_err("type-level display is not a member annotation");
    assert_eq!(err.message(), "DisplayMeta not found on Registration::notes");
}

#[test]
fn method_annotations_are_found() {
    assert_member_has_annotations(&selector!(Registration, submit()), &[kind::<DisplayMeta>()])
        .expect("submit display");
}

#[test]
fn first_absent_kind_is_reported() {
    let err = assert_member_has_annotations(
        &selector!(Registration, email),
        &[kind::<Required>(), kind::<Key>(), kind::<Sensitive>()],
    )
    .expect_err("key missing");
    assert_eq!(err.info().context["kind"], "Key");
    assert!(!err.message().contains("Sensitive"));
}

#[test]
fn duplicate_kinds_are_tolerated() {
    assert_member_has_annotations(
        &selector!(Registration, email),
        &[kind::<Required>(), kind::<Required>()],
    )
    .expect("duplicates checked redundantly");
}

#[test]
fn empty_kind_list_passes() {
    assert_has_annotations::<Registration>(&[]).expect("nothing requested");
}

#[test]
fn invalid_selector_is_usage_defect_not_assertion() {
    let indexer = Selector::<Registration>::new(|x| x.index(Expr::constant(0)));
    let err = assert_member_has_annotations(&indexer, &[kind::<Required>()]).expect_err("indexer");
    assert!(err.is_usage());
    assert_eq!(err.code(), codes::INVALID_EXPRESSION_SHAPE);

    let binary = Selector::<Registration>::new(|x| x.member("email") + x.member("notes"));
    let err = assert_member_has_annotations(&binary, &[kind::<Required>()]).expect_err("binary");
    assert!(err.is_usage());
}

#[test]
fn report_all_collects_every_missing_kind() {
    let matcher = Matcher::with_options(MatcherOptions::default().with_report_all(true));
    let err = matcher
        .check_member(
            &selector!(Registration, notes),
            &[kind::<Required>(), kind::<Key>()],
        )
        .expect_err("both missing");
    assert_eq!(err.info().context["failures"], "2");
    assert!(err.message().contains("Required not found on Registration::notes"));
    assert!(err.message().contains("Key not found on Registration::notes"));
}

#[test]
fn extension_trait_checks_through_instance() {
    let subject = Registration;
    subject
        .should_have(&[kind::<DisplayMeta>()])
        .expect("type display");
    subject
        .should_have_on(|x| x.member("email"), &[kind::<Audited>()])
        .expect("member marker");
    let err = subject
        .should_have_on(|x| x.member("email").member("len"), &[kind::<Audited>()])
        .expect_err("chained");
    assert!(err.is_usage());
}
