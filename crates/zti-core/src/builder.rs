//! Inventory building from a tag schema and a member list.
//!
//! For every eligible member and every resolved `(primary, child)` pair:
//!
//! ```text
//! add_group(primary)  add_group(child)  add_child(primary, child)
//! add_host(id)        add_child(child, id)
//! set_variable(id, node_name | description | ansible_host)
//! ```
//!
//! Primary groups only ever hold child groups. Hosts live in child groups.

use serde::Serialize;

use crate::eligibility::is_eligible;
use crate::inventory::InventorySink;
use crate::member::Member;
use crate::resolve::resolve;
use crate::schema::TagSchema;

pub const VAR_NODE_NAME: &str = "node_name";
pub const VAR_DESCRIPTION: &str = "description";
pub const VAR_ANSIBLE_HOST: &str = "ansible_host";

/// Optional behavior on top of the default grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Catch-all group for eligible members that resolve no tags.
    ///
    /// `None` leaves such members out of the inventory entirely.
    pub ungrouped_group: Option<String>,
}

/// Counters describing one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub members_seen: usize,
    pub members_eligible: usize,
    pub members_placed: usize,
    pub pairs_resolved: usize,
    pub pairs_skipped: usize,
}

/// Populate `sink` from `members` using the default options.
pub fn build(schema: &TagSchema, members: &[Member], sink: &mut dyn InventorySink) -> BuildReport {
    build_with_options(schema, members, sink, &BuildOptions::default())
}

/// Populate `sink` from `members`.
///
/// Never fails: ineligible members and unresolvable tag pairs are skipped.
pub fn build_with_options(
    schema: &TagSchema,
    members: &[Member],
    sink: &mut dyn InventorySink,
    options: &BuildOptions,
) -> BuildReport {
    let mut report = BuildReport {
        members_seen: members.len(),
        ..BuildReport::default()
    };

    for member in members {
        if !is_eligible(member) {
            tracing::debug!(
                member = %member.id,
                hidden = member.hidden,
                authorized = member.authorized,
                addresses = member.ip_assignments.len(),
                "skipping ineligible member"
            );
            continue;
        }
        report.members_eligible += 1;

        let resolved = resolve(member, schema);
        report.pairs_resolved += resolved.len();
        report.pairs_skipped += member.tags.len() - resolved.len();

        for group in &resolved {
            sink.add_group(group.primary);
            sink.add_group(group.child);
            sink.add_child(group.primary, group.child);
            place_host(sink, member, group.child);
        }

        if !resolved.is_empty() {
            report.members_placed += 1;
            continue;
        }

        match options.ungrouped_group.as_deref() {
            Some(catch_all) => {
                sink.add_group(catch_all);
                place_host(sink, member, catch_all);
                report.members_placed += 1;
            }
            None => {
                tracing::debug!(member = %member.id, "eligible member resolved no tags");
            }
        }
    }

    tracing::info!(
        members = report.members_seen,
        eligible = report.members_eligible,
        placed = report.members_placed,
        resolved = report.pairs_resolved,
        skipped = report.pairs_skipped,
        "inventory built"
    );
    report
}

fn place_host(sink: &mut dyn InventorySink, member: &Member, group: &str) {
    sink.add_host(&member.id);
    sink.add_child(group, &member.id);
    sink.set_variable(&member.id, VAR_NODE_NAME, &member.name);
    sink.set_variable(&member.id, VAR_DESCRIPTION, &member.description);
    if let Some(address) = member.first_ip() {
        sink.set_variable(&member.id, VAR_ANSIBLE_HOST, address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Records every sink call verbatim.
    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<Vec<String>>,
    }

    impl RecordingSink {
        fn mentions(&self, needle: &str) -> bool {
            self.calls.iter().any(|call| call.iter().any(|arg| arg == needle))
        }
    }

    impl InventorySink for RecordingSink {
        fn add_group(&mut self, name: &str) {
            self.calls.push(vec!["add_group".into(), name.into()]);
        }

        fn add_child(&mut self, parent: &str, child: &str) {
            self.calls
                .push(vec!["add_child".into(), parent.into(), child.into()]);
        }

        fn add_host(&mut self, host: &str) {
            self.calls.push(vec!["add_host".into(), host.into()]);
        }

        fn set_variable(&mut self, host: &str, key: &str, value: &str) {
            self.calls.push(vec![
                "set_variable".into(),
                host.into(),
                key.into(),
                value.into(),
            ]);
        }
    }

    fn schema() -> TagSchema {
        TagSchema::normalize(&json!({
            "role": { "id": 1, "enums": { "web": 10, "db": 11 } },
            "site": { "id": 2, "enums": { "fra": 20 } }
        }))
        .unwrap()
    }

    fn member(id: &str, tags: Vec<(u32, u32)>) -> Member {
        Member {
            id: id.into(),
            name: format!("{id}-name"),
            description: format!("{id}-desc"),
            hidden: false,
            authorized: true,
            ip_assignments: vec!["10.0.0.5".into(), "10.0.0.6".into()],
            tags,
        }
    }

    #[test]
    fn emits_operations_in_order() {
        let mut sink = RecordingSink::default();
        build(&schema(), &[member("abc", vec![(1, 10)])], &mut sink);

        let expected: Vec<Vec<String>> = [
            vec!["add_group", "role"],
            vec!["add_group", "web"],
            vec!["add_child", "role", "web"],
            vec!["add_host", "abc"],
            vec!["add_child", "web", "abc"],
            vec!["set_variable", "abc", "node_name", "abc-name"],
            vec!["set_variable", "abc", "description", "abc-desc"],
            vec!["set_variable", "abc", "ansible_host", "10.0.0.5"],
        ]
        .into_iter()
        .map(|call| call.into_iter().map(String::from).collect())
        .collect();
        assert_eq!(sink.calls, expected);
    }

    #[test]
    fn untagged_eligible_member_leaves_no_trace() {
        let mut sink = RecordingSink::default();
        let report = build(&schema(), &[member("abc", Vec::new())], &mut sink);
        assert!(sink.calls.is_empty());
        assert_eq!(report.members_eligible, 1);
        assert_eq!(report.members_placed, 0);
    }

    #[test]
    fn unresolvable_tags_leave_no_trace() {
        let mut sink = RecordingSink::default();
        let report = build(&schema(), &[member("abc", vec![(2, 10), (9, 1)])], &mut sink);
        assert!(!sink.mentions("abc"));
        assert_eq!(report.pairs_skipped, 2);
    }

    #[test]
    fn ineligible_member_is_ignored_regardless_of_tags() {
        let mut hidden = member("hid", vec![(1, 10)]);
        hidden.hidden = true;
        let mut unauthorized = member("una", vec![(1, 10)]);
        unauthorized.authorized = false;
        let mut unaddressed = member("noip", vec![(1, 10)]);
        unaddressed.ip_assignments.clear();

        let mut sink = RecordingSink::default();
        let report = build(&schema(), &[hidden, unauthorized, unaddressed], &mut sink);
        assert!(sink.calls.is_empty());
        assert_eq!(report.members_seen, 3);
        assert_eq!(report.members_eligible, 0);
    }

    #[test]
    fn host_lands_in_every_child_group() {
        let mut inventory = Inventory::new();
        let report = build(
            &schema(),
            &[member("abc", vec![(1, 10), (1, 11), (2, 20)])],
            &mut inventory,
        );

        assert_eq!(inventory.groups_of_host("abc"), vec!["db", "fra", "web"]);
        let role = inventory.group("role").unwrap();
        assert_eq!(role.children.len(), 2);
        assert!(role.hosts.is_empty());
        assert_eq!(report.pairs_resolved, 3);
        assert_eq!(report.members_placed, 1);
    }

    #[test]
    fn first_address_becomes_ansible_host() {
        let mut inventory = Inventory::new();
        build(&schema(), &[member("abc", vec![(1, 10)])], &mut inventory);
        let vars = inventory.host_vars("abc").unwrap();
        assert_eq!(vars.get(VAR_ANSIBLE_HOST).map(String::as_str), Some("10.0.0.5"));
    }

    #[test]
    fn duplicate_tags_are_harmless() {
        let mut once = Inventory::new();
        build(&schema(), &[member("abc", vec![(1, 10)])], &mut once);

        let mut twice = Inventory::new();
        build(&schema(), &[member("abc", vec![(1, 10), (1, 10)])], &mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn catch_all_group_collects_untagged_members() {
        let options = BuildOptions {
            ungrouped_group: Some("zerotier_untagged".into()),
        };
        let mut inventory = Inventory::new();
        let report = build_with_options(
            &schema(),
            &[member("abc", Vec::new()), member("def", vec![(1, 10)])],
            &mut inventory,
            &options,
        );

        assert_eq!(inventory.groups_of_host("abc"), vec!["zerotier_untagged"]);
        assert_eq!(inventory.groups_of_host("def"), vec!["web"]);
        assert_eq!(
            inventory
                .host_vars("abc")
                .unwrap()
                .get(VAR_NODE_NAME)
                .map(String::as_str),
            Some("abc-name")
        );
        assert_eq!(report.members_placed, 2);
    }
}
