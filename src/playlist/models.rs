// Common data models for the playlist widget

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Scalar value of a player or query parameter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl ParamValue {
    /// Truthiness as the embed player interprets its flags
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Str(s) => !(s.is_empty() || s == "0" || s == "false"),
        }
    }

    /// Falsy value of the same kind (`false` for booleans, `0` otherwise)
    pub fn falsy_like(&self) -> Self {
        match self {
            Self::Bool(_) => Self::Bool(false),
            _ => Self::Int(0),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Int(n as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Int(n as i64)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Insertion-ordered player parameters (autoplay, showinfo, rel, ...)
///
/// Order matters: the embed URL serializes parameters in the order they
/// were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerOptions {
    entries: Vec<(String, ParamValue)>,
}

impl PlayerOptions {
    pub const AUTOPLAY: &'static str = "autoplay";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Set a parameter, keeping its original position if already present
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn autoplay(&self) -> Option<&ParamValue> {
        self.get(Self::AUTOPLAY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for PlayerOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (k, v) in iter {
            options.set(k, v);
        }
        options
    }
}

impl<'de> Deserialize<'de> for PlayerOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = PlayerOptions;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of player parameters")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut options = PlayerOptions::new();
                while let Some((key, value)) = access.next_entry::<String, ParamValue>()? {
                    options.set(key, value);
                }
                Ok(options)
            }
        }

        deserializer.deserialize_map(OptionsVisitor)
    }
}

/// One playable entry of a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistItem {
    pub video_id: String,
    pub thumbnail_url: String,
    pub title: String,
}

// ---------------------------------------------------------------------------
// YouTube Data API v3 `playlistItems` payload
//
// Every nested field is optional so one malformed record does not sink the
// whole response; the render builder decides what to keep. `items` itself is
// required: a body without it is not a playlist response.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<RawItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: Option<String>,
    pub resource_id: Option<ResourceId>,
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
}

/// Error envelope returned by the API on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

impl RawItem {
    /// Build a well-formed record, mostly for tests and fixtures
    pub fn new(video_id: &str, thumbnail_url: &str, title: &str) -> Self {
        Self {
            snippet: Some(Snippet {
                title: Some(title.to_string()),
                resource_id: Some(ResourceId {
                    video_id: Some(video_id.to_string()),
                }),
                thumbnails: Some(Thumbnails {
                    default: None,
                    medium: Some(Thumbnail {
                        url: Some(thumbnail_url.to_string()),
                    }),
                }),
            }),
        }
    }
}
