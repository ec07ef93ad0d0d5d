// Raw API records -> markup-agnostic view model

use super::models::{PlaylistItem, RawItem};

/// One selectable entry of the rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub item: PlaylistItem,
}

impl ListEntry {
    /// Stable lookup attribute (`data-id` in markup)
    pub fn lookup_id(&self) -> &str {
        &self.item.video_id
    }
}

/// Built once per fetch and never mutated; selection state lives in the
/// controller on top of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    entries: Vec<ListEntry>,
}

impl ViewModel {
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ListEntry> {
        self.entries.get(index)
    }

    pub fn position_of(&self, video_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.lookup_id() == video_id)
    }
}

/// Map API records to playlist items, skipping malformed ones
pub fn build(records: &[RawItem]) -> ViewModel {
    let entries = records
        .iter()
        .enumerate()
        .filter_map(|(position, record)| match to_item(record) {
            Some(item) => Some(ListEntry { item }),
            None => {
                tracing::warn!("[Render] Skipping malformed playlist record at position {}", position);
                None
            }
        })
        .collect();

    ViewModel { entries }
}

fn to_item(record: &RawItem) -> Option<PlaylistItem> {
    let snippet = record.snippet.as_ref()?;
    let video_id = snippet.resource_id.as_ref()?.video_id.clone()?;
    let title = snippet.title.clone()?;

    // medium, then default, then nothing
    let thumbnail_url = snippet
        .thumbnails
        .as_ref()
        .and_then(|t| {
            t.medium
                .as_ref()
                .and_then(|m| m.url.clone())
                .or_else(|| t.default.as_ref().and_then(|d| d.url.clone()))
        })
        .unwrap_or_default();

    Some(PlaylistItem {
        video_id,
        thumbnail_url,
        title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::models::PlaylistItemsResponse;

    #[test]
    fn test_build_preserves_order() {
        let records = vec![
            RawItem::new("v1", "https://i.ytimg.com/vi/v1/mqdefault.jpg", "One"),
            RawItem::new("v2", "https://i.ytimg.com/vi/v2/mqdefault.jpg", "Two"),
        ];
        let view = build(&records);

        assert_eq!(view.len(), 2);
        assert_eq!(view.entries()[0].lookup_id(), "v1");
        assert_eq!(view.entries()[1].item.title, "Two");
        assert_eq!(view.position_of("v2"), Some(1));
    }

    #[test]
    fn test_build_empty() {
        let view = build(&[]);
        assert!(view.is_empty());
        assert_eq!(view.position_of("v1"), None);
    }

    #[test]
    fn test_malformed_records_skipped() {
        let body = r#"{"items": [
            {"snippet": {"title": "no id"}},
            {"snippet": {"title": "ok", "resourceId": {"videoId": "v9"},
                         "thumbnails": {"default": {"url": "d.jpg"}}}},
            {}
        ]}"#;
        let response: PlaylistItemsResponse = serde_json::from_str(body).unwrap();
        let view = build(&response.items);

        assert_eq!(view.len(), 1);
        assert_eq!(view.entries()[0].item.video_id, "v9");
        assert_eq!(view.entries()[0].item.thumbnail_url, "d.jpg");
    }
}
