use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::join_all;
use wayfare_core::auth::AuthGate;
use wayfare_core::error::ServiceError;
use wayfare_core::services::FavoritesService;

#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// Surfaced to the caller as an authentication/permission prompt.
    #[error("sign in to manage favorites")]
    AuthRequired,

    #[error("favorite update failed: {0}")]
    UpdateFailed(ServiceError),

    /// Some removes of a bulk clear failed. Local state is not
    /// reconciled against which ones succeeded.
    #[error("failed to remove {failed} favorite(s)")]
    PartialClear { failed: usize },
}

/// What a toggle did, as the caller should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The auth gate refused the action and has already redirected;
    /// nothing changed locally.
    Aborted,
}

/// Keeps a local favorites set optimistically in sync with the remote
/// store. Written only through `toggle`/`clear_all`, read by any surface;
/// all mutation happens on the single UI task, so interleaving occurs
/// only at await points.
pub struct FavoritesCoordinator {
    service: Arc<dyn FavoritesService>,
    gate: Arc<dyn AuthGate>,
    favorites: HashSet<String>,
}

impl FavoritesCoordinator {
    /// Seed the local set from the remote store. Favorites are a
    /// best-effort enhancement: a failed fetch (typically an
    /// unauthenticated session) yields an empty set, not an error.
    pub async fn initialize(service: Arc<dyn FavoritesService>, gate: Arc<dyn AuthGate>) -> Self {
        let favorites = match service.list().await {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                tracing::warn!(error = %err, "favorites fetch failed, starting empty");
                HashSet::new()
            }
        };
        Self { service, gate, favorites }
    }

    pub fn is_favorite(&self, listing_id: &str) -> bool {
        self.favorites.contains(listing_id)
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Optimistic-then-reconcile toggle.
    ///
    /// The local set changes before the remote mutation is issued, so the
    /// UI reflects the intent with zero latency. On failure the
    /// compensating action matches the cause: a remove refused as
    /// not-found stays removed (already gone remotely), a failed add is
    /// always reverted (the id must not linger locally when the server
    /// never recorded it), and any other failed remove is re-inserted.
    /// No retry; the user re-invokes the toggle.
    pub async fn toggle(&mut self, listing_id: &str) -> Result<ToggleOutcome, FavoritesError> {
        if !self.gate.require_auth("favorite") {
            return Ok(ToggleOutcome::Aborted);
        }

        if self.favorites.contains(listing_id) {
            self.favorites.remove(listing_id);
            match self.service.remove(listing_id).await {
                Ok(()) => Ok(ToggleOutcome::Removed),
                Err(ServiceError::NotFound(_)) => Ok(ToggleOutcome::Removed),
                Err(err) => {
                    self.favorites.insert(listing_id.to_string());
                    tracing::warn!(listing_id, error = %err, "favorite remove failed");
                    Err(map_failure(err))
                }
            }
        } else {
            self.favorites.insert(listing_id.to_string());
            match self.service.add(listing_id).await {
                Ok(()) => Ok(ToggleOutcome::Added),
                Err(err) => {
                    self.favorites.remove(listing_id);
                    tracing::warn!(listing_id, error = %err, "favorite add failed");
                    Err(map_failure(err))
                }
            }
        }
    }

    /// Remove every favorite: clear locally, then issue all removes
    /// awaited together. Partial failure surfaces as one aggregate error
    /// and the local set stays cleared; which removals actually landed
    /// is not reconciled.
    pub async fn clear_all(&mut self) -> Result<(), FavoritesError> {
        if !self.gate.require_auth("favorite") {
            return Ok(());
        }

        let ids: Vec<String> = self.favorites.drain().collect();
        let results = join_all(ids.iter().map(|id| self.service.remove(id))).await;

        let failed = results
            .into_iter()
            .filter(|r| !matches!(r, Ok(()) | Err(ServiceError::NotFound(_))))
            .count();
        if failed > 0 {
            tracing::warn!(failed, "bulk favorite clear partially failed");
            return Err(FavoritesError::PartialClear { failed });
        }
        Ok(())
    }
}

fn map_failure(err: ServiceError) -> FavoritesError {
    match err {
        ServiceError::Unauthenticated => FavoritesError::AuthRequired,
        other => FavoritesError::UpdateFailed(other),
    }
}
