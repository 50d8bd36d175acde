use async_trait::async_trait;
use reqwest::StatusCode;

use wayfare_core::error::{ServiceError, ServiceResult};
use wayfare_core::services::{FavoritesService, ListingService, ReservationService};
use wayfare_core::wire::{ListingPage, QueryDescriptor, RawListing, RawReservation, ReservationRequest};

use crate::app_config::Config;

/// HTTP adapter for the backend JSON API. Implements all three service
/// traits over one shared connection pool; callers hold it behind an
/// `Arc` and hand it to the feed, the booking flow, and the favorites
/// coordinator alike.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> ServiceResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map a non-success status onto the shared failure taxonomy.
fn status_error(status: StatusCode) -> ServiceError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceError::Unauthenticated,
        StatusCode::NOT_FOUND => ServiceError::NotFound(status.to_string()),
        other => ServiceError::Transport(format!("unexpected status {other}")),
    }
}

fn transport(err: reqwest::Error) -> ServiceError {
    ServiceError::Transport(err.to_string())
}

fn decode(err: reqwest::Error) -> ServiceError {
    ServiceError::InvalidResponse(err.to_string())
}

fn ensure_success(response: reqwest::Response) -> ServiceResult<reqwest::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(status_error(response.status()))
    }
}

#[async_trait]
impl ListingService for HttpBackend {
    async fn query(&self, descriptor: &QueryDescriptor) -> ServiceResult<ListingPage> {
        tracing::debug!(page = descriptor.page, per_page = descriptor.per_page, "listing query");
        let response = self
            .http
            .get(self.url("/listings"))
            .query(descriptor)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response)?.json().await.map_err(decode)
    }

    async fn lookup(&self, id: &str) -> ServiceResult<Option<RawListing>> {
        let response = self
            .http
            .get(self.url(&format!("/listings/{id}")))
            .send()
            .await
            .map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let listing = ensure_success(response)?.json().await.map_err(decode)?;
        Ok(Some(listing))
    }
}

#[async_trait]
impl ReservationService for HttpBackend {
    async fn create(&self, request: &ReservationRequest) -> ServiceResult<RawReservation> {
        tracing::info!(listing_id = %request.listing_id, "committing reservation");
        let response = self
            .http
            .post(self.url("/reservations"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response)?.json().await.map_err(decode)
    }
}

#[async_trait]
impl FavoritesService for HttpBackend {
    async fn list(&self) -> ServiceResult<Vec<String>> {
        let response = self
            .http
            .get(self.url("/favorites"))
            .send()
            .await
            .map_err(transport)?;
        // The backend stores numeric listing ids; canonical ids are their
        // string form.
        let ids: Vec<i64> = ensure_success(response)?.json().await.map_err(decode)?;
        Ok(ids.into_iter().map(|id| id.to_string()).collect())
    }

    async fn add(&self, listing_id: &str) -> ServiceResult<()> {
        let response = self
            .http
            .post(self.url(&format!("/favorites/{listing_id}")))
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response)?;
        Ok(())
    }

    async fn remove(&self, listing_id: &str) -> ServiceResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/favorites/{listing_id}")))
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_onto_the_failure_taxonomy() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED),
            ServiceError::Unauthenticated
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN),
            ServiceError::Unauthenticated
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR),
            ServiceError::Transport(_)
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let config = Config {
            api: crate::app_config::ApiConfig {
                base_url: "https://api.example.test/".to_string(),
                timeout_seconds: 5,
            },
            storefront: crate::app_config::StorefrontConfig {
                page_size: 12,
                payment_delay_ms: 0,
            },
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.url("/listings"), "https://api.example.test/listings");
    }
}
