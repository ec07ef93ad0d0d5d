// Playlist module - fetch, render and selection state for embedded playlists

pub mod controller;
pub mod errors;
pub mod fetcher;
pub mod host;
pub mod html;
pub mod models;
pub mod query;
pub mod render;
pub mod traits;
pub mod widget;

pub use controller::{embed_url, ControllerState, Selection, SelectionController};
pub use errors::{PlaylistError, Result};
pub use fetcher::{ClientConfig, YouTubeApiClient};
pub use host::{mount_playlists, InitReport, PlaylistConfig, PlaylistModule};
pub use models::{ParamValue, PlayerOptions, PlaylistItem, RawItem};
pub use render::{ListEntry, ViewModel};
pub use traits::{FailureSink, MountPoint, PlaylistSource, TracingSink};
pub use widget::PlaylistWidget;
