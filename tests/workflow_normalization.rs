use indexmap::IndexMap;
use n8n_node_types::{
    Workflow, WorkflowNode, normalize_workflow_node_types, normalize_workflow_value,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn node(node_type: Option<&str>, name: &str) -> WorkflowNode {
    let mut extra = IndexMap::new();
    extra.insert("name".to_string(), json!(name));
    extra.insert("parameters".to_string(), json!({ "keep": true }));
    WorkflowNode {
        node_type: node_type.map(|t| json!(t)),
        extra,
    }
}

#[test]
fn typed_workflow_nodes_are_normalized_in_order() {
    let mut extra = IndexMap::new();
    extra.insert("name".to_string(), json!("demo"));
    let workflow = Workflow {
        nodes: vec![
            node(Some("nodes-base.webhook"), "a"),
            node(Some("nodes-langchain.agent"), "b"),
            node(Some("n8n-nodes-acme.widget"), "c"),
            node(None, "d"),
        ],
        extra,
    };

    let normalized = normalize_workflow_node_types(&workflow);
    let types: Vec<Option<&str>> = normalized
        .nodes
        .iter()
        .map(|n| n.type_str())
        .collect();
    assert_eq!(
        types,
        vec![
            Some("n8n-nodes-base.webhook"),
            Some("@n8n/n8n-nodes-langchain.agent"),
            Some("n8n-nodes-acme.widget"),
            None,
        ]
    );
    let names: Vec<_> = normalized.nodes.iter().map(|n| n.name()).collect();
    assert_eq!(names, vec![Some("a"), Some("b"), Some("c"), Some("d")]);
    assert_eq!(normalized.nodes[0].extra["parameters"], json!({ "keep": true }));
    assert_eq!(normalized.extra, workflow.extra);
    // Input is untouched.
    assert_eq!(
        workflow.nodes[0].type_str(),
        Some("nodes-base.webhook")
    );
}

#[test]
fn typed_workflow_round_trips_unknown_fields() {
    let raw = json!({
        "name": "demo",
        "nodes": [{ "name": "Hook", "type": "nodes-base.webhook", "position": [1, 2] }],
        "active": false
    });
    let workflow: Workflow = serde_json::from_value(raw).unwrap();
    let out = serde_json::to_value(normalize_workflow_node_types(&workflow)).unwrap();
    assert_eq!(
        out,
        json!({
            "nodes": [{ "type": "n8n-nodes-base.webhook", "name": "Hook", "position": [1, 2] }],
            "name": "demo",
            "active": false
        })
    );
}

#[test]
fn loose_workflow_preserves_everything_but_types() {
    let raw = json!({
        "name": "demo",
        "nodes": [
            { "name": "Hook", "type": "nodes-base.webhook", "parameters": { "path": "x" } },
            { "name": "Weird", "type": 7 },
            { "name": "Untyped" },
            "not-a-node"
        ],
        "connections": { "Hook": {} }
    });
    let out = normalize_workflow_value(&raw);
    assert_eq!(
        out,
        json!({
            "name": "demo",
            "nodes": [
                { "name": "Hook", "type": "n8n-nodes-base.webhook", "parameters": { "path": "x" } },
                { "name": "Weird", "type": 7 },
                { "name": "Untyped" },
                "not-a-node"
            ],
            "connections": { "Hook": {} }
        })
    );
    assert_eq!(raw["nodes"][0]["type"], json!("nodes-base.webhook"));
}

#[test]
fn loose_workflow_without_node_array_is_identity() {
    for value in [
        Value::Null,
        json!("workflow"),
        json!({ "name": "no nodes" }),
        json!({ "nodes": { "type": "nodes-base.set" } }),
        json!([{ "type": "nodes-base.set" }]),
    ] {
        assert_eq!(normalize_workflow_value(&value), value);
    }
}

#[test]
fn normalizing_twice_changes_nothing() {
    let raw = std::fs::read_to_string("tests/data/mixed_forms.json").unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    let once = normalize_workflow_value(&value);
    assert_eq!(normalize_workflow_value(&once), once);
}

#[test]
fn typed_workflow_keeps_null_and_non_string_types() {
    let raw = json!({
        "nodes": [
            { "name": "A", "type": null },
            { "name": "B", "type": 7 },
            { "name": "C" },
            { "name": "D", "type": "nodes-base.set" }
        ]
    });
    let workflow: Workflow = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(workflow.nodes[0].node_type, Some(Value::Null));
    assert_eq!(workflow.nodes[2].node_type, None);

    let typed = serde_json::to_value(normalize_workflow_node_types(&workflow)).unwrap();
    let expected = json!({
        "nodes": [
            { "name": "A", "type": null },
            { "name": "B", "type": 7 },
            { "name": "C" },
            { "name": "D", "type": "n8n-nodes-base.set" }
        ]
    });
    assert_eq!(typed, expected);
    assert_eq!(normalize_workflow_value(&raw), expected);
}
