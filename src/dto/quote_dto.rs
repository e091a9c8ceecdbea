use serde::{Deserialize, Serialize};

/// One photo attached to a submission: base64 payload plus declared MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUpload {
    pub data: String,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

/// Inbound body of `POST /api/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQuoteRequest {
    pub name: String,
    pub phone: String,
    pub description: Option<String>,
    pub photos: Option<Vec<PhotoUpload>>,
}

/// Successful response body. `quote_id` is absent when the backend did not
/// return an identifier for the inserted row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQuoteResponse {
    pub success: bool,
    #[serde(rename = "quoteId", skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<i64>,
}
