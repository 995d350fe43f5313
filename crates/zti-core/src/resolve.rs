//! Resolution of raw member tag pairs to group names.
//!
//! Pairs the schema does not know about are skipped. Schema drift on the
//! controller must not abort the run, so "no match" is an empty result, not
//! an error.

use serde::Serialize;

use crate::member::Member;
use crate::schema::TagSchema;

/// A `(primary group, child group)` pair resolved from one member tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedGroup<'a> {
    /// Tag display name.
    pub primary: &'a str,
    /// Enum display name.
    pub child: &'a str,
}

/// Resolve every tag pair on `member` against `schema`, in tag order.
///
/// Duplicate pairs produce duplicate entries. Pairs whose tag id or enum id
/// is missing from the schema are dropped.
#[must_use]
pub fn resolve<'a>(member: &Member, schema: &'a TagSchema) -> Vec<ResolvedGroup<'a>> {
    member
        .tags
        .iter()
        .filter_map(|&(tag_id, enum_id)| {
            let Some(entry) = schema.get(tag_id) else {
                tracing::debug!(member = %member.id, tag_id, enum_id, "skipping unknown tag id");
                return None;
            };
            let Some(child) = entry.enum_name(enum_id) else {
                tracing::debug!(
                    member = %member.id,
                    tag = %entry.name,
                    enum_id,
                    "skipping unknown enum id"
                );
                return None;
            };
            Some(ResolvedGroup {
                primary: entry.name.as_str(),
                child,
            })
        })
        .collect()
}
