use n8n_node_types::{NodePackage, NodeTypeReport};
use pretty_assertions::assert_eq;

#[test]
fn report_for_short_webhook() {
    let report = NodeTypeReport::new("nodes-base.webhook");
    assert_eq!(report.normalization.normalized, "n8n-nodes-base.webhook");
    assert_eq!(report.normalization.package, NodePackage::Base);
    assert_eq!(report.node_name, "webhook");
    assert_eq!(report.package_name.as_deref(), Some("n8n-nodes-base"));
    assert!(report.is_base);
    assert!(!report.is_langchain);
    assert!(report.valid_format);
    assert!(report.is_trigger);
    assert!(report.is_activatable);
    assert_eq!(
        report.trigger_description,
        Some("Webhook Trigger (HTTP requests)")
    );
    assert_eq!(
        report.variations,
        vec!["n8n-nodes-base.webhook", "nodes-base.webhook"]
    );
}

#[test]
fn non_trigger_has_no_description() {
    let report = NodeTypeReport::new("nodes-langchain.agent");
    assert!(report.is_langchain);
    assert!(!report.is_trigger);
    assert_eq!(report.trigger_description, None);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["normalized"], "@n8n/n8n-nodes-langchain.agent");
    assert_eq!(json["wasNormalized"], true);
    assert_eq!(json["isLangchain"], true);
    assert!(json.get("triggerDescription").is_none());
}

#[test]
fn empty_input_yields_sentinels() {
    let report = NodeTypeReport::new("");
    assert_eq!(report.normalization.package, NodePackage::Unknown);
    assert_eq!(report.node_name, "");
    assert_eq!(report.package_name, None);
    assert!(!report.valid_format);
    assert!(!report.is_trigger);
    assert!(report.variations.is_empty());
    assert!(report.to_text().contains("package:     unknown"));
}
