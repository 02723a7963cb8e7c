use n8n_node_types::{
    load_and_lint,
    lint::{TriggerPresentRule, lint_node_types, lint_workflow},
    loader::load_workflow_from_str,
};
use std::path::Path;

#[test]
fn clean_workflow_has_no_findings() {
    let workflow =
        n8n_node_types::loader::load_workflow_from_path(Path::new("tests/data/valid.json"))
            .unwrap();
    let errors = lint_workflow(&workflow);
    assert!(errors.is_empty(), "unexpected lint errors: {errors:?}");
}

#[test]
fn short_forms_are_flagged_with_full_form() {
    let workflow = load_workflow_from_str(
        r#"{ "nodes": [{ "name": "Hook", "type": "nodes-base.webhook" }] }"#,
    )
    .unwrap();
    let errors = lint_node_types(&workflow);
    assert_eq!(
        errors,
        vec![
            "node_type_short_form: node #0 ('Hook') type 'nodes-base.webhook' should be 'n8n-nodes-base.webhook'"
                .to_string()
        ]
    );
}

#[test]
fn bad_format_and_missing_type_are_flagged() {
    let workflow = load_workflow_from_str(
        r#"{ "nodes": [
            { "name": "Hook", "type": "n8n-nodes-base.webhook" },
            { "name": "Odd", "type": "widget" },
            { "type": "" },
            { "name": "Bare" }
        ] }"#,
    )
    .unwrap();
    let errors = lint_node_types(&workflow);
    assert_eq!(errors.len(), 3, "{errors:?}");
    assert!(errors[0].starts_with("node_type_format: node #1 ('Odd')"));
    assert_eq!(errors[1], "node_type_present: node #2 has no string type");
    assert_eq!(errors[2], "node_type_present: node #3 ('Bare') has no string type");
}

#[test]
fn workflow_without_trigger_is_flagged() {
    let workflow = load_workflow_from_str(
        r#"{ "nodes": [
            { "name": "Set", "type": "n8n-nodes-base.set" },
            { "name": "Reply", "type": "n8n-nodes-base.respondToWebhook" }
        ] }"#,
    )
    .unwrap();
    let errors = TriggerPresentRule::check(&workflow);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("trigger_present:"));
}

#[test]
fn empty_workflow_needs_no_trigger() {
    let workflow = load_workflow_from_str(r#"{ "nodes": [] }"#).unwrap();
    assert!(lint_workflow(&workflow).is_empty());
}

#[test]
fn non_string_types_are_lint_findings_not_load_errors() {
    let findings = load_and_lint(
        r#"{ "nodes": [
            { "name": "A", "type": 7 },
            { "name": "N", "type": null },
            { "name": "W", "type": "n8n-nodes-base.webhook" }
        ] }"#,
    )
    .expect("valid JSON workflow loads");
    assert_eq!(
        findings,
        vec![
            "node_type_present: node #0 ('A') has no string type".to_string(),
            "node_type_present: node #1 ('N') has no string type".to_string(),
        ]
    );
}
