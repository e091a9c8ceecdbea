use crate::dto::quote_dto::{PhotoUpload, SubmitQuoteRequest};
use crate::model::quote::Quote;
use crate::repository::quote_repo::QuoteRepository;
use crate::util::error::ServiceError;
use crate::util::pushover::{Notification, QuoteNotifier};
use crate::util::storage::SupabaseStorageService;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use async_trait::async_trait;

pub const NOTIFICATION_TITLE: &str = "Rep-Tile Quote Request";

#[async_trait]
pub trait QuoteIntakeService: Send + Sync {
    /// Run the full intake sequence for one submission and return the
    /// identifier the backend assigned, if any.
    async fn submit_quote(&self, submission: SubmitQuoteRequest) -> Result<Option<i64>, ServiceError>;
}

pub struct QuoteIntakeServiceImpl {
    pub quote_repo: Arc<dyn QuoteRepository>,
    pub storage: Arc<SupabaseStorageService>,
    /// None when notification credentials are absent; submissions then
    /// complete without any call to the notification API.
    pub notifier: Option<Arc<dyn QuoteNotifier>>,
}

#[async_trait]
impl QuoteIntakeService for QuoteIntakeServiceImpl {
    #[instrument(skip(self, submission), fields(name = %submission.name))]
    async fn submit_quote(&self, submission: SubmitQuoteRequest) -> Result<Option<i64>, ServiceError> {
        info!("Processing new quote submission");

        let photos = submission.photos.unwrap_or_default();

        // 1. Persist the quote record. Description is coerced to an empty
        //    string so the stored row never carries a null.
        let quote = Quote {
            id: None,
            name: submission.name.clone(),
            phone: submission.phone.clone(),
            description: submission.description.unwrap_or_default(),
            photo_urls: None,
            photo_count: photos.len() as u32,
            created_at: None,
        };
        let inserted = self.quote_repo.insert(quote).await.map_err(ServiceError::from)?;

        // 2. Upload photos and collect their public URLs. Without an assigned
        //    id there is nothing to namespace the objects under, so uploads
        //    and the URL patch are skipped entirely.
        let mut photo_links: Vec<String> = Vec::new();
        if let Some(quote_id) = inserted.id {
            photo_links = self.upload_photos(quote_id, &photos).await;

            // 3. Attach the collected URLs to the stored record.
            if !photo_links.is_empty() {
                if let Err(e) = self.quote_repo.set_photo_urls(quote_id, &photo_links).await {
                    error!("Failed to attach photo URLs to quote {}: {}", quote_id, e);
                }
            }
        } else {
            warn!("Insert returned no id, skipping photo upload and URL patch");
        }

        // 4. Best-effort operator notification.
        self.send_notification(inserted.id, &inserted.name, &inserted.phone, &inserted.description, &photo_links)
            .await;

        info!(id = ?inserted.id, "Quote submission processed");
        Ok(inserted.id)
    }
}

impl QuoteIntakeServiceImpl {
    /// Upload each photo in order, skipping any that fail to decode or
    /// upload. Returns public URLs for the photos that made it, in order.
    async fn upload_photos(&self, quote_id: i64, photos: &[PhotoUpload]) -> Vec<String> {
        let mut links = Vec::new();
        for (index, photo) in photos.iter().enumerate() {
            let bytes = match BASE64.decode(&photo.data) {
                Ok(b) => b,
                Err(e) => {
                    error!("Photo {} has invalid base64 payload, skipping: {}", index + 1, e);
                    continue;
                }
            };

            let content_type = photo.content_type.as_deref().unwrap_or("image/jpeg");
            let object_path = photo_object_path(quote_id, index, content_type);

            match self.storage.upload_object(&object_path, bytes, content_type).await {
                Ok(()) => links.push(self.storage.public_url(&object_path)),
                Err(e) => {
                    error!("Upload of photo {} failed, skipping: {}", index + 1, e);
                }
            }
        }
        links
    }

    async fn send_notification(
        &self,
        quote_id: Option<i64>,
        name: &str,
        phone: &str,
        description: &str,
        photo_links: &[String],
    ) {
        let Some(notifier) = &self.notifier else {
            info!("No notifier configured, skipping notification");
            return;
        };

        let notification = Notification {
            title: NOTIFICATION_TITLE.to_string(),
            message: compose_message(quote_id, name, phone, description, photo_links),
            url: photo_links.first().cloned(),
            url_title: photo_links.first().map(|_| "Photo 1".to_string()),
        };

        // Fire-and-forget: the response never depends on delivery.
        if let Err(e) = notifier.notify(notification).await {
            warn!("Notification delivery failed: {}", e);
        }
    }
}

/// Extension for a stored photo, derived from the declared MIME type.
/// Anything that is not a PNG is treated as JPEG.
pub fn photo_extension(content_type: &str) -> &'static str {
    if content_type == "image/png" {
        "png"
    } else {
        "jpg"
    }
}

/// Storage path for photo `index` (zero-based) of a quote:
/// `quote-<id>/photo-<n>.<ext>` with `n` starting at 1.
pub fn photo_object_path(quote_id: i64, index: usize, content_type: &str) -> String {
    format!(
        "quote-{}/photo-{}.{}",
        quote_id,
        index + 1,
        photo_extension(content_type)
    )
}

/// Human-readable summary for the operator notification. The description line
/// renders exactly what was stored, including the empty-string placeholder.
pub fn compose_message(
    quote_id: Option<i64>,
    name: &str,
    phone: &str,
    description: &str,
    photo_links: &[String],
) -> String {
    let id = quote_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let mut message = format!(
        "New Quote #{}\nName: {}\nPhone: {}\nProject: {}",
        id, name, phone, description
    );

    if !photo_links.is_empty() {
        message.push_str(&format!("\n\nPhotos ({}):", photo_links.len()));
        for (i, link) in photo_links.iter().enumerate() {
            message.push_str(&format!("\nPhoto {}: {}", i + 1, link));
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_maps_to_png_extension() {
        assert_eq!(photo_extension("image/png"), "png");
    }

    #[test]
    fn test_everything_else_maps_to_jpg() {
        assert_eq!(photo_extension("image/jpeg"), "jpg");
        assert_eq!(photo_extension("image/webp"), "jpg");
        assert_eq!(photo_extension(""), "jpg");
    }

    #[test]
    fn test_object_path_is_one_based() {
        assert_eq!(photo_object_path(42, 0, "image/png"), "quote-42/photo-1.png");
        assert_eq!(photo_object_path(42, 2, "image/jpeg"), "quote-42/photo-3.jpg");
    }

    #[test]
    fn test_message_without_photos() {
        let message = compose_message(Some(7), "Jane", "+15550001111", "New roof", &[]);
        assert_eq!(
            message,
            "New Quote #7\nName: Jane\nPhone: +15550001111\nProject: New roof"
        );
    }

    #[test]
    fn test_message_enumerates_photo_links() {
        let links = vec![
            "http://example.com/a.jpg".to_string(),
            "http://example.com/b.png".to_string(),
        ];
        let message = compose_message(Some(7), "Jane", "+15550001111", "", &links);
        assert!(message.contains("Photos (2):"));
        assert!(message.contains("Photo 1: http://example.com/a.jpg"));
        assert!(message.contains("Photo 2: http://example.com/b.png"));
    }

    #[test]
    fn test_message_placeholder_id_and_empty_description() {
        let message = compose_message(None, "Jane", "+15550001111", "", &[]);
        assert!(message.starts_with("New Quote #unknown\n"));
        assert!(message.ends_with("Project: "));
    }
}
