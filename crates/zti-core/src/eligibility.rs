//! Member eligibility for inventory inclusion.

use crate::member::Member;

/// Whether a member may appear in the inventory.
///
/// The member must be visible, authorized, and hold at least one managed
/// address. Tags are not considered here.
#[must_use]
pub fn is_eligible(member: &Member) -> bool {
    !member.hidden && !member.ip_assignments.is_empty() && member.authorized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eligible_member() -> Member {
        Member {
            id: "abcdef0123".into(),
            name: "n1".into(),
            description: "d1".into(),
            hidden: false,
            authorized: true,
            ip_assignments: vec!["10.0.0.5".into()],
            tags: vec![(1, 10)],
        }
    }

    #[test]
    fn visible_authorized_addressed_member_is_eligible() {
        assert!(is_eligible(&eligible_member()));
    }

    #[test]
    fn hidden_member_is_never_eligible() {
        let mut member = eligible_member();
        member.hidden = true;
        assert!(!is_eligible(&member));

        member.tags.clear();
        member.ip_assignments.push("10.0.0.6".into());
        assert!(!is_eligible(&member));
    }

    #[test]
    fn unauthorized_member_is_not_eligible() {
        let member = Member {
            authorized: false,
            ..eligible_member()
        };
        assert!(!is_eligible(&member));
    }

    #[test]
    fn member_without_addresses_is_not_eligible() {
        let member = Member {
            ip_assignments: Vec::new(),
            ..eligible_member()
        };
        assert!(!is_eligible(&member));
    }

    #[test]
    fn untagged_member_can_be_eligible() {
        let member = Member {
            tags: Vec::new(),
            ..eligible_member()
        };
        assert!(is_eligible(&member));
    }

    #[test]
    fn repeated_calls_agree() {
        let member = eligible_member();
        assert_eq!(is_eligible(&member), is_eligible(&member));
    }
}
