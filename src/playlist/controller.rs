// Selection state machine for one rendered playlist
//
// Uninitialized -> Initialized { active_index }
//
// The controller owns its copy of the player options. On the first,
// programmatic render a truthy autoplay is swapped for a falsy one so that
// inserting the widget does not start playback; every user-driven selection
// puts the caller's original value back.

use super::errors::{PlaylistError, Result};
use super::models::{ParamValue, PlayerOptions};
use super::query::to_query_string;
use super::render::ViewModel;

/// Base of the embedded player URL
pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Player target for a video: embed base + id + encoded options
pub fn embed_url(video_id: &str, options: &PlayerOptions) -> String {
    if options.is_empty() {
        format!("{}{}", EMBED_BASE_URL, video_id)
    } else {
        format!("{}{}?{}", EMBED_BASE_URL, video_id, to_query_string(options.iter()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    Initialized { active_index: usize },
}

/// Outcome of a `select` message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Entry was already active; the player is left alone
    Unchanged,
    /// New player target
    Changed(String),
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    state: ControllerState,
    options: PlayerOptions,
    carried_autoplay: Option<ParamValue>,
    player_src: Option<String>,
}

impl SelectionController {
    /// Take ownership of a per-mount copy of the player options
    pub fn new(options: PlayerOptions) -> Self {
        Self {
            state: ControllerState::Uninitialized,
            options,
            carried_autoplay: None,
            player_src: None,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            ControllerState::Initialized { active_index } => Some(active_index),
            ControllerState::Uninitialized => None,
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    /// Current player target; `None` until initialized
    pub fn player_src(&self) -> Option<&str> {
        self.player_src.as_deref()
    }

    /// Autoplay value as the caller configured it
    pub fn carried_autoplay(&self) -> Option<&ParamValue> {
        self.carried_autoplay.as_ref()
    }

    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    /// Activate entry 0 with autoplay suppressed.
    ///
    /// An empty view takes no transition. Repeated calls return the current
    /// target without touching state.
    pub fn initialize(&mut self, view: &ViewModel) -> Option<&str> {
        if let ControllerState::Initialized { .. } = self.state {
            return self.player_src();
        }

        let first = view.get(0)?;

        self.carried_autoplay = self.options.autoplay().cloned();
        if let Some(autoplay) = self.carried_autoplay.as_ref().filter(|v| v.is_truthy()) {
            self.options.set(PlayerOptions::AUTOPLAY, autoplay.falsy_like());
        }

        self.player_src = Some(embed_url(first.lookup_id(), &self.options));
        self.state = ControllerState::Initialized { active_index: 0 };

        tracing::debug!(
            "[Selection] Initialized on {} ({} entries)",
            first.lookup_id(),
            view.len()
        );
        self.player_src()
    }

    /// Make entry `index` the only active one
    pub fn select(&mut self, view: &ViewModel, index: usize) -> Result<Selection> {
        let current = self.active_index().ok_or(PlaylistError::NotInitialized)?;
        let entry = view.get(index).ok_or(PlaylistError::IndexOutOfRange {
            index,
            len: view.len(),
        })?;

        if index == current {
            return Ok(Selection::Unchanged);
        }

        if let Some(original) = &self.carried_autoplay {
            self.options.set(PlayerOptions::AUTOPLAY, original.clone());
        }

        let src = embed_url(entry.lookup_id(), &self.options);
        self.player_src = Some(src.clone());
        self.state = ControllerState::Initialized { active_index: index };

        tracing::debug!("[Selection] {} -> {} ({})", current, index, entry.lookup_id());
        Ok(Selection::Changed(src))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::models::RawItem;
    use crate::playlist::render::build;

    fn view(ids: &[&str]) -> ViewModel {
        let records: Vec<RawItem> = ids
            .iter()
            .map(|id| RawItem::new(id, &format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", id), id))
            .collect();
        build(&records)
    }

    fn autoplay_options() -> PlayerOptions {
        PlayerOptions::new()
            .with("showinfo", 0)
            .with("autoplay", 1)
            .with("rel", 0)
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("abc", &autoplay_options()),
            "https://www.youtube.com/embed/abc?showinfo=0&autoplay=1&rel=0"
        );
        assert_eq!(embed_url("abc", &PlayerOptions::new()), "https://www.youtube.com/embed/abc");
    }

    #[test]
    fn test_initialize_activates_first() {
        let view = view(&["v1", "v2", "v3"]);
        let mut controller = SelectionController::new(PlayerOptions::new());

        assert_eq!(controller.state(), ControllerState::Uninitialized);
        controller.initialize(&view);

        assert_eq!(controller.active_index(), Some(0));
        let active: Vec<usize> = (0..view.len()).filter(|i| controller.is_active(*i)).collect();
        assert_eq!(active, vec![0]);
    }

    #[test]
    fn test_initialize_empty_is_noop() {
        let mut controller = SelectionController::new(autoplay_options());

        assert_eq!(controller.initialize(&ViewModel::default()), None);
        assert_eq!(controller.state(), ControllerState::Uninitialized);
        assert_eq!(controller.player_src(), None);
    }

    #[test]
    fn test_initial_autoplay_suppressed_then_restored() {
        let view = view(&["v1", "v2", "v3"]);
        let mut controller = SelectionController::new(autoplay_options());

        let first = controller.initialize(&view).map(str::to_string);
        assert_eq!(
            first.as_deref(),
            Some("https://www.youtube.com/embed/v1?showinfo=0&autoplay=0&rel=0")
        );
        assert_eq!(controller.carried_autoplay(), Some(&ParamValue::Int(1)));

        let second = controller.select(&view, 1).unwrap();
        assert_eq!(
            second,
            Selection::Changed("https://www.youtube.com/embed/v2?showinfo=0&autoplay=1&rel=0".into())
        );

        let back = controller.select(&view, 0).unwrap();
        assert_eq!(
            back,
            Selection::Changed("https://www.youtube.com/embed/v1?showinfo=0&autoplay=1&rel=0".into())
        );
    }

    #[test]
    fn test_bool_autoplay_suppressed_as_false() {
        let view = view(&["v1", "v2"]);
        let mut controller = SelectionController::new(PlayerOptions::new().with("autoplay", true));

        assert_eq!(
            controller.initialize(&view),
            Some("https://www.youtube.com/embed/v1?autoplay=false")
        );
        assert_eq!(
            controller.select(&view, 1).unwrap(),
            Selection::Changed("https://www.youtube.com/embed/v2?autoplay=true".into())
        );
    }

    #[test]
    fn test_falsy_autoplay_never_changes() {
        let view = view(&["v1", "v2"]);
        let mut controller = SelectionController::new(PlayerOptions::new().with("autoplay", 0).with("rel", 0));

        assert_eq!(
            controller.initialize(&view),
            Some("https://www.youtube.com/embed/v1?autoplay=0&rel=0")
        );
        assert_eq!(
            controller.select(&view, 1).unwrap(),
            Selection::Changed("https://www.youtube.com/embed/v2?autoplay=0&rel=0".into())
        );
    }

    #[test]
    fn test_absent_autoplay_stays_absent() {
        let view = view(&["v1", "v2"]);
        let mut controller = SelectionController::new(PlayerOptions::new().with("rel", 0));

        controller.initialize(&view);
        let Selection::Changed(src) = controller.select(&view, 1).unwrap() else {
            panic!("expected a new target");
        };
        assert!(!src.contains("autoplay"));
        assert!(!controller.player_src().unwrap().contains("autoplay"));
    }

    #[test]
    fn test_mutual_exclusivity() {
        let view = view(&["a", "b", "c", "d"]);
        let mut controller = SelectionController::new(autoplay_options());
        controller.initialize(&view);

        for (i, j) in [(1, 3), (3, 0), (0, 2), (2, 1)] {
            controller.select(&view, i).unwrap();
            controller.select(&view, j).unwrap();

            assert!(!controller.is_active(i));
            assert!(controller.is_active(j));
            assert_eq!((0..view.len()).filter(|k| controller.is_active(*k)).count(), 1);
        }
    }

    #[test]
    fn test_reselect_active_is_noop() {
        let view = view(&["v1", "v2"]);
        let mut controller = SelectionController::new(autoplay_options());
        controller.initialize(&view);
        let before = controller.player_src().map(str::to_string);

        assert_eq!(controller.select(&view, 0).unwrap(), Selection::Unchanged);
        assert_eq!(controller.player_src().map(str::to_string), before);
    }

    #[test]
    fn test_select_errors() {
        let view = view(&["v1", "v2"]);
        let mut controller = SelectionController::new(PlayerOptions::new());

        assert_eq!(controller.select(&view, 0), Err(PlaylistError::NotInitialized));

        controller.initialize(&view);
        assert_eq!(
            controller.select(&view, 2),
            Err(PlaylistError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(controller.active_index(), Some(0));
    }

    #[test]
    fn test_initialize_twice_keeps_selection() {
        let view = view(&["v1", "v2"]);
        let mut controller = SelectionController::new(autoplay_options());
        controller.initialize(&view);
        controller.select(&view, 1).unwrap();

        controller.initialize(&view);
        assert_eq!(controller.active_index(), Some(1));
    }
}
