use serde::Serialize;
use zti_config::ZtiConfig;
use zti_controller::ControllerClient;
use zti_core::TagSchema;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// One row of `zti schema --format table`.
#[derive(Debug, Serialize)]
struct TagRow<'a> {
    tag_id: u32,
    name: &'a str,
    values: Vec<String>,
}

/// Handle `zti schema`.
pub async fn handle(config: &ZtiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ControllerClient::from_config(&config.controller)?;
    let schema = client.fetch_tag_schema(&config.controller.network_id).await?;

    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => {
            output(&schema.iter().collect::<Vec<_>>(), flags.format)
        }
        OutputFormat::Table => output(&tag_rows(&schema), flags.format),
    }
}

fn tag_rows(schema: &TagSchema) -> Vec<TagRow<'_>> {
    schema
        .iter()
        .map(|entry| TagRow {
            tag_id: entry.tag_id,
            name: &entry.name,
            values: entry
                .enums_by_internal_id
                .iter()
                .map(|(id, name)| format!("{name}={id}"))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use zti_core::TagSchema;

    use super::tag_rows;

    #[test]
    fn rows_list_enum_values_by_id() {
        let schema = TagSchema::normalize(&json!({
            "role": { "id": 1, "enums": { "web": 10, "db": 11 } }
        }))
        .expect("valid schema");

        let rows = tag_rows(&schema);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tag_id, 1);
        assert_eq!(rows[0].name, "role");
        assert_eq!(rows[0].values, vec!["web=10", "db=11"]);
    }
}
