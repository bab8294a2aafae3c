use crate::middleware::utils::db_utils::ViewFieldSelector;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Owner projection nested into view rows.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserView {
    pub id: Thing,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl ViewFieldSelector for UserView {
    fn get_select_query_fields() -> String {
        "id, username, email, full_name".to_string()
    }
}
