// Collaborator traits: network source, page mount, failure sink

use async_trait::async_trait;

use super::errors::{PlaylistError, Result};
use super::models::{ParamValue, RawItem};
use super::widget::PlaylistWidget;

/// Network client capability: fetch the raw records of one playlist
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Name of the source (for logging)
    fn name(&self) -> &'static str;

    /// Fetch the playlist items, in API order
    async fn fetch(
        &self,
        playlist_id: &str,
        max_results: &ParamValue,
        api_key: &str,
    ) -> Result<Vec<RawItem>>;
}

/// Page-mounting capability: one place on the page a widget can live
pub trait MountPoint: Send + Sync {
    /// Playlist identifier carried by the mount (`data-playlist`)
    fn playlist_id(&self) -> Option<String>;

    /// Insert the finished widget; the mount owns it from now on
    fn attach(&self, widget: PlaylistWidget);
}

/// Observability sink for pipeline failures
pub trait FailureSink: Send + Sync {
    fn report(&self, playlist_id: &str, error: &PlaylistError);
}

/// Default sink: forwards failures to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl FailureSink for TracingSink {
    fn report(&self, playlist_id: &str, error: &PlaylistError) {
        tracing::error!(
            playlist_id,
            network = error.is_network_failure(),
            "[Playlist] pipeline failed: {}",
            error
        );
    }
}
