// Interactive playlist structure handed to a mount point

use super::controller::{Selection, SelectionController};
use super::errors::{PlaylistError, Result};
use super::models::PlayerOptions;
use super::render::{ListEntry, ViewModel};

/// View model plus the selection state that belongs to it.
///
/// UI layers forward clicks as `select(index)` (or `select_video(id)` when
/// they only know the entry's lookup attribute).
#[derive(Debug, Clone)]
pub struct PlaylistWidget {
    playlist_id: String,
    view: ViewModel,
    controller: SelectionController,
}

impl PlaylistWidget {
    /// Wrap a built view and run the initial transition
    pub fn new(playlist_id: impl Into<String>, view: ViewModel, options: PlayerOptions) -> Self {
        let mut controller = SelectionController::new(options);
        controller.initialize(&view);

        Self {
            playlist_id: playlist_id.into(),
            view,
            controller,
        }
    }

    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn player_src(&self) -> Option<&str> {
        self.controller.player_src()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.controller.active_index()
    }

    /// Entries with their active marker, in list order
    pub fn entries(&self) -> impl Iterator<Item = (&ListEntry, bool)> {
        self.view
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry, self.controller.is_active(i)))
    }

    pub fn select(&mut self, index: usize) -> Result<Selection> {
        self.controller.select(&self.view, index)
    }

    pub fn select_video(&mut self, video_id: &str) -> Result<Selection> {
        let index = self
            .view
            .position_of(video_id)
            .ok_or_else(|| PlaylistError::UnknownVideo(video_id.to_string()))?;
        self.select(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::models::RawItem;
    use crate::playlist::render::build;

    fn widget() -> PlaylistWidget {
        let records = vec![
            RawItem::new("v1", "t1.jpg", "First"),
            RawItem::new("v2", "t2.jpg", "Second"),
            RawItem::new("v3", "t3.jpg", "Third"),
        ];
        PlaylistWidget::new("PL1", build(&records), PlayerOptions::new().with("autoplay", 1))
    }

    #[test]
    fn test_new_widget_is_initialized() {
        let widget = widget();
        assert_eq!(widget.active_index(), Some(0));
        assert!(widget.player_src().unwrap().contains("/embed/v1?"));

        let flags: Vec<bool> = widget.entries().map(|(_, active)| active).collect();
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn test_select_third_entry() {
        let mut widget = widget();
        widget.select(2).unwrap();

        assert_eq!(widget.active_index(), Some(2));
        assert!(widget.player_src().unwrap().contains("v3"));
        let flags: Vec<bool> = widget.entries().map(|(_, active)| active).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_select_by_video_id() {
        let mut widget = widget();
        assert!(matches!(widget.select_video("v2"), Ok(Selection::Changed(_))));
        assert_eq!(widget.active_index(), Some(1));

        assert_eq!(
            widget.select_video("nope"),
            Err(PlaylistError::UnknownVideo("nope".into()))
        );
        assert_eq!(widget.active_index(), Some(1));
    }

    #[test]
    fn test_empty_widget() {
        let mut widget = PlaylistWidget::new("PL0", ViewModel::default(), PlayerOptions::new());

        assert_eq!(widget.player_src(), None);
        assert_eq!(widget.entries().count(), 0);
        assert_eq!(widget.select(0), Err(PlaylistError::NotInitialized));
    }
}
