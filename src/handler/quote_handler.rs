use crate::dto::quote_dto::{SubmitQuoteRequest, SubmitQuoteResponse};
use crate::service::quote_service::{QuoteIntakeService, QuoteIntakeServiceImpl};
use crate::util::error::HandlerError;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{error, info};

pub async fn submit_quote_handler(
    State(service): State<Arc<QuoteIntakeServiceImpl>>,
    Json(payload): Json<SubmitQuoteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[submit_quote_handler] Handler called");

    let quote_id = service.submit_quote(payload).await.map_err(|e| {
        error!("[submit_quote_handler] Submission failed: {}", e);
        HandlerError {
            message: format!("Failed to submit quote: {}", e),
        }
    })?;

    Ok(Json(SubmitQuoteResponse {
        success: true,
        quote_id,
    }))
}
