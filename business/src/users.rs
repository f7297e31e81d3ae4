//! The user-management table.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use log::info;
use serde_json::Value;
use userdesk_states::State;

use crate::{
    BusinessConfig, Cell, ColumnDef, RemoteTable, RowAction, RowActionKind, SortDirection,
    TableConfig, TableError, Tone,
};

pub const USERS_FILE_NAME: &str = "user-data";

fn role_tone(role: &str) -> Tone {
    match role {
        "admin" => Tone::Danger,
        "moderator" => Tone::Info,
        _ => Tone::Success,
    }
}

pub fn users_columns() -> Vec<ColumnDef> {
    let sortable = |key: &str, label: &str| ColumnDef::new(key, label).sortable(true);

    vec![
        ColumnDef::serial("srNo", "Sr. No."),
        sortable("firstName", "First Name"),
        sortable("lastName", "Last Name"),
        sortable("email", "Email"),
        sortable("age", "Age"),
        sortable("gender", "Gender"),
        sortable("company.name", "Company"),
        sortable("address.city", "City"),
        sortable("address.state", "State"),
        sortable("role", "Role").render(|value, _, _| Cell::Badge {
            tone: role_tone(value.as_str().unwrap_or_default()),
            text: value.to_display(),
        }),
        ColumnDef::new("actions", "Actions")
            .exportable(false)
            .render(|_, row, _| {
                let row_id = row.get("id").and_then(Value::as_i64);
                Cell::Actions(vec![
                    RowAction {
                        kind: RowActionKind::Edit,
                        row_id,
                    },
                    RowAction {
                        kind: RowActionKind::Delete,
                        row_id,
                    },
                ])
            }),
    ]
}

pub fn users_table_config(config: &BusinessConfig) -> TableConfig {
    TableConfig::builder()
        .columns(users_columns())
        .api_url(config.users_url())
        .default_sort_field("lastName")
        .default_sort_direction(SortDirection::Asc)
        .search_fields(vec![
            "firstName".to_owned(),
            "lastName".to_owned(),
            "email".to_owned(),
        ])
        .file_name(USERS_FILE_NAME)
        .on_data_fetched(Arc::new(|raw: &Value| {
            let rows = raw
                .get("users")
                .and_then(Value::as_array)
                .map_or(0, Vec::len);
            info!("Users fetched: {rows} rows");
        }))
        .build()
}

/// The users page's table, kept in the state context across page switches.
#[derive(Debug)]
pub struct UsersTable(RemoteTable);

impl UsersTable {
    pub fn new(config: &BusinessConfig) -> Result<Self, TableError> {
        RemoteTable::new(users_table_config(config)).map(Self)
    }

    /// Edit and delete only log for now.
    pub fn handle_action(&self, action: &RowAction) {
        let id = action
            .row_id
            .map_or_else(|| "unknown".to_owned(), |id| id.to_string());
        match action.kind {
            RowActionKind::Edit => info!("Edit user with id: {id}"),
            RowActionKind::Delete => info!("Delete user with id: {id}"),
        }
    }
}

impl Deref for UsersTable {
    type Target = RemoteTable;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for UsersTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl State for UsersTable {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Row;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn users_config_matches_page() {
        let config = users_table_config(&BusinessConfig::new("http://localhost:1"));
        assert_eq!(config.api_url(), "http://localhost:1/users");
        assert_eq!(config.default_sort_field(), Some("lastName"));
        assert_eq!(config.default_items_per_page(), 10);
        assert_eq!(config.file_name(), "user-data");
        assert_eq!(config.search_fields(), &["firstName", "lastName", "email"]);
    }

    #[test]
    fn serial_and_actions_columns() {
        let columns = users_columns();
        assert!(columns[0].is_serial_number());
        assert!(!columns[0].is_sortable());

        let actions = columns.last().unwrap();
        assert!(!actions.is_exportable());
        assert_eq!(
            columns.iter().filter(|c| c.is_exportable()).count(),
            columns.len() - 1
        );
    }

    #[test]
    fn role_badge_tones() {
        let columns = users_columns();
        let role = columns.iter().find(|c| c.key() == "role").unwrap();

        for (value, tone) in [
            ("admin", Tone::Danger),
            ("moderator", Tone::Info),
            ("user", Tone::Success),
        ] {
            let cell = role.cell(&row(json!({ "role": value })), 0, 1);
            assert_eq!(
                cell,
                Cell::Badge {
                    text: value.to_owned(),
                    tone
                }
            );
        }
    }

    #[test]
    fn actions_carry_row_id() {
        let columns = users_columns();
        let actions = columns.last().unwrap();
        let Cell::Actions(buttons) = actions.cell(&row(json!({"id": 42})), 0, 1) else {
            panic!("expected actions cell");
        };
        assert_eq!(buttons.len(), 2);
        assert!(buttons.iter().all(|b| b.row_id == Some(42)));
        assert_eq!(buttons[0].label(), "Edit");
        assert_eq!(buttons[1].label(), "Delete");
    }

    #[test]
    fn users_table_starts_idle() {
        let table = UsersTable::new(&BusinessConfig::default()).unwrap();
        assert_eq!(table.status(), crate::FetchStatus::Idle);
        assert_eq!(table.query().sort_field(), Some("lastName"));
    }
}
