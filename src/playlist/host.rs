// Host binding: drive Fetch -> Build -> Select for each mount point

use futures::future::join_all;
use std::fmt;
use std::sync::Arc;

use super::errors::{PlaylistError, Result};
use super::models::{ParamValue, PlayerOptions};
use super::render;
use super::traits::{FailureSink, MountPoint, PlaylistSource, TracingSink};
use super::widget::PlaylistWidget;

pub const DEFAULT_MAX_RESULTS: &str = "5";

/// Caller-side configuration of a playlist module
#[derive(Clone)]
pub struct PlaylistConfig {
    pub api_key: String,
    /// Single playlist shown in `element`
    pub playlist_id: Option<String>,
    pub element: Option<Arc<dyn MountPoint>>,
    /// Mounts that each carry their own playlist id
    pub mount_targets: Vec<Arc<dyn MountPoint>>,
    pub max_results: ParamValue,
    pub player_options: PlayerOptions,
}

impl PlaylistConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            playlist_id: None,
            element: None,
            mount_targets: Vec::new(),
            max_results: ParamValue::from(DEFAULT_MAX_RESULTS),
            player_options: PlayerOptions::default(),
        }
    }

    pub fn with_playlist(mut self, playlist_id: impl Into<String>, element: Arc<dyn MountPoint>) -> Self {
        self.playlist_id = Some(playlist_id.into());
        self.element = Some(element);
        self
    }

    pub fn with_mount_targets(mut self, targets: Vec<Arc<dyn MountPoint>>) -> Self {
        self.mount_targets = targets;
        self
    }

    pub fn with_max_results(mut self, max_results: impl Into<ParamValue>) -> Self {
        self.max_results = max_results.into();
        self
    }

    pub fn with_player_options(mut self, options: PlayerOptions) -> Self {
        self.player_options = options;
        self
    }
}

impl fmt::Debug for PlaylistConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaylistConfig")
            .field("playlist_id", &self.playlist_id)
            .field("element", &self.element.is_some())
            .field("mount_targets", &self.mount_targets.len())
            .field("max_results", &self.max_results)
            .field("player_options", &self.player_options)
            .finish_non_exhaustive()
    }
}

/// What `init` did, for callers that want to know
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    pub attached: usize,
    pub failed: usize,
}

struct Job {
    playlist_id: String,
    mount: Arc<dyn MountPoint>,
}

pub struct PlaylistModule {
    config: PlaylistConfig,
    source: Arc<dyn PlaylistSource>,
    sink: Arc<dyn FailureSink>,
}

impl PlaylistModule {
    pub fn new(config: PlaylistConfig, source: Arc<dyn PlaylistSource>) -> Self {
        Self {
            config,
            source,
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn FailureSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &PlaylistConfig {
        &self.config
    }

    fn jobs(&self) -> Vec<Job> {
        if !self.config.mount_targets.is_empty() {
            return self
                .config
                .mount_targets
                .iter()
                .filter_map(|mount| match mount.playlist_id() {
                    Some(playlist_id) => Some(Job {
                        playlist_id,
                        mount: Arc::clone(mount),
                    }),
                    None => {
                        tracing::warn!("[Playlist] Mount target without a playlist id, skipped");
                        None
                    }
                })
                .collect();
        }

        match (&self.config.playlist_id, &self.config.element) {
            (Some(playlist_id), Some(element)) => vec![Job {
                playlist_id: playlist_id.clone(),
                mount: Arc::clone(element),
            }],
            (Some(playlist_id), None) => {
                tracing::warn!("[Playlist] No element to mount playlist {}", playlist_id);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Run one pipeline per mount; pipelines are independent and unordered.
    pub async fn init(&self) -> InitReport {
        let jobs = self.jobs();
        if jobs.is_empty() {
            tracing::debug!("[Playlist] Nothing to mount");
            return InitReport::default();
        }

        tracing::info!("[Playlist] Mounting {} playlist(s) via {}", jobs.len(), self.source.name());

        let outcomes = join_all(jobs.iter().map(|job| async move {
            match self.run(job).await {
                Ok(()) => true,
                Err(e) => {
                    self.sink.report(&job.playlist_id, &e);
                    false
                }
            }
        }))
        .await;

        let attached = outcomes.iter().filter(|ok| **ok).count();
        InitReport {
            attached,
            failed: outcomes.len() - attached,
        }
    }

    async fn run(&self, job: &Job) -> Result<()> {
        let records = self
            .source
            .fetch(&job.playlist_id, &self.config.max_results, &self.config.api_key)
            .await?;

        let view = render::build(&records);
        // each mount toggles autoplay on its own copy
        let widget = PlaylistWidget::new(job.playlist_id.clone(), view, self.config.player_options.clone());

        tracing::debug!(
            "[Playlist] ✓ {} attached with {} entries",
            job.playlist_id,
            widget.view().len()
        );
        job.mount.attach(widget);
        Ok(())
    }
}

/// Convenience for one-off callers
pub async fn mount_playlists(
    config: PlaylistConfig,
    source: Arc<dyn PlaylistSource>,
) -> Result<InitReport> {
    if config.api_key.trim().is_empty() {
        return Err(PlaylistError::InvalidConfig("api_key is empty".to_string()));
    }
    Ok(PlaylistModule::new(config, source).init().await)
}
