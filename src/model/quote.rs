use serde::{Deserialize, Serialize};

/// A quote request row as stored in the `quotes` table.
///
/// `id` is assigned by the backend on insert. `description` is always a
/// string, never null: submissions without one are stored with "".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_urls: Option<Vec<String>>,
    pub photo_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
