//! Embeddable YouTube playlist widget.
//!
//! Fetches a playlist through the YouTube Data API, builds a view model of
//! its items and keeps track of which one is playing in the embedded player.
//!
//! ```no_run
//! use std::sync::Arc;
//! use youtube_playlist::{MountPoint, PlaylistConfig, PlaylistModule, PlaylistWidget, PlayerOptions, YouTubeApiClient};
//!
//! struct Slot;
//!
//! impl MountPoint for Slot {
//!     fn playlist_id(&self) -> Option<String> {
//!         Some("PLxxxxxxxx".to_string())
//!     }
//!
//!     fn attach(&self, widget: PlaylistWidget) {
//!         println!("{}", youtube_playlist::playlist::html::render(&widget));
//!     }
//! }
//!
//! # async fn demo() -> youtube_playlist::Result<()> {
//! let config = PlaylistConfig::new("API_KEY")
//!     .with_mount_targets(vec![Arc::new(Slot) as Arc<dyn MountPoint>])
//!     .with_max_results(20)
//!     .with_player_options(PlayerOptions::new().with("showinfo", 0).with("autoplay", 1).with("rel", 0));
//!
//! let source = Arc::new(YouTubeApiClient::new()?);
//! PlaylistModule::new(config, source).init().await;
//! # Ok(())
//! # }
//! ```

pub mod playlist;

pub use playlist::*;
