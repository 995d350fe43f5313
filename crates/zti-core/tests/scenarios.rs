//! End-to-end grouping scenarios: raw controller JSON in, inventory out.

use pretty_assertions::assert_eq;
use serde_json::json;
use zti_core::{Inventory, Member, TagSchema, build};

fn role_schema() -> TagSchema {
    TagSchema::normalize(&json!({
        "role": { "id": 1, "enums": { "web": 10, "db": 11 } }
    }))
    .expect("schema normalizes")
}

fn member(overrides: serde_json::Value) -> Member {
    let mut record = json!({
        "nodeId": "abc",
        "name": "n1",
        "description": "d1",
        "hidden": false,
        "config": {
            "authorized": true,
            "ipAssignments": ["10.0.0.5"],
            "tags": [[1, 10]]
        }
    });
    merge(&mut record, overrides);
    serde_json::from_value(record).expect("member parses")
}

fn merge(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(base), serde_json::Value::Object(patch)) => {
            for (key, value) in patch {
                merge(base.entry(key).or_insert(serde_json::Value::Null), value);
            }
        }
        (slot, value) => *slot = value,
    }
}

fn run(members: &[Member]) -> Inventory {
    let mut inventory = Inventory::new();
    build(&role_schema(), members, &mut inventory);
    inventory
}

#[test]
fn tagged_member_lands_under_tag_and_enum_groups() {
    let inventory = run(&[member(json!({}))]);

    assert_eq!(
        inventory.to_ansible_json(),
        json!({
            "_meta": {
                "hostvars": {
                    "abc": {
                        "ansible_host": "10.0.0.5",
                        "description": "d1",
                        "node_name": "n1"
                    }
                }
            },
            "all": { "children": ["role"] },
            "role": { "children": ["web"] },
            "web": { "hosts": ["abc"] }
        })
    );
}

#[test]
fn unknown_tag_id_leaves_member_out() {
    let inventory = run(&[member(json!({ "config": { "tags": [[2, 10]] } }))]);
    assert!(!inventory.has_host("abc"));
    assert_eq!(inventory.groups().count(), 0);
}

#[test]
fn unauthorized_member_is_excluded() {
    let inventory = run(&[member(json!({ "config": { "authorized": false } }))]);
    assert!(!inventory.has_host("abc"));
}

#[test]
fn first_ip_wins() {
    let inventory = run(&[member(json!({
        "config": { "ipAssignments": ["10.0.0.5", "10.0.0.6"] }
    }))]);
    let vars = inventory.host_vars("abc").expect("host present");
    assert_eq!(vars["ansible_host"], "10.0.0.5");
}

#[test]
fn members_share_child_groups() {
    let inventory = run(&[
        member(json!({})),
        member(json!({ "nodeId": "def", "config": { "tags": [[1, 10], [1, 11]] } })),
    ]);

    let web = inventory.group("web").expect("web group");
    assert_eq!(
        web.hosts.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["abc", "def"]
    );
    let db = inventory.group("db").expect("db group");
    assert_eq!(
        db.hosts.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["def"]
    );
    assert_eq!(inventory.top_level_groups(), vec!["role"]);
}
