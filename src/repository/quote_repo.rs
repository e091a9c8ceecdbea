use crate::config::SupabaseConfig;
use crate::model::quote::Quote;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn insert(&self, quote: Quote) -> RepositoryResult<Quote>;
    async fn set_photo_urls(&self, id: i64, photo_urls: &[String]) -> RepositoryResult<()>;
}

/// Quote persistence over the Supabase PostgREST endpoint, authenticated with
/// the project API key (`apikey` header plus bearer token).
pub struct SupabaseQuoteRepository {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseQuoteRepository {
    pub fn new(client: Client, config: SupabaseConfig) -> Self {
        SupabaseQuoteRepository { client, config }
    }

    fn table_url(&self) -> String {
        format!("{}/{}", self.config.rest_url(), self.config.quotes_table)
    }
}

#[async_trait]
impl QuoteRepository for SupabaseQuoteRepository {
    #[tracing::instrument(skip(self, quote), fields(name = %quote.name))]
    async fn insert(&self, mut quote: Quote) -> RepositoryResult<Quote> {
        info!("Inserting new quote");
        quote.created_at = Some(chrono::Utc::now().to_rfc3339());

        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "return=representation")
            .json(&[&quote])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Quote insert rejected with status {}: {}", status, body);
            return Err(RepositoryError::database(format!(
                "Insert failed with status {}: {}",
                status, body
            )));
        }

        let mut rows: Vec<Quote> = response.json().await?;
        match rows.pop() {
            Some(inserted) => {
                info!(id = ?inserted.id, "Quote inserted successfully");
                Ok(inserted)
            }
            None => {
                // Backend accepted the write but returned no representation;
                // the caller decides how to proceed without an id.
                error!("Insert returned no rows");
                Ok(quote)
            }
        }
    }

    #[tracing::instrument(skip(self, photo_urls), fields(id = %id, urls = photo_urls.len()))]
    async fn set_photo_urls(&self, id: i64, photo_urls: &[String]) -> RepositoryResult<()> {
        info!("Attaching photo URLs to quote");

        let response = self
            .client
            .patch(format!("{}?id=eq.{}", self.table_url(), id))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .json(&serde_json::json!({ "photo_urls": photo_urls }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Photo URL patch rejected with status {}: {}", status, body);
            return Err(RepositoryError::database(format!(
                "Update failed with status {}: {}",
                status, body
            )));
        }

        info!("Photo URLs attached successfully");
        Ok(())
    }
}
