//! Application state and the view/selection state machine.

use crate::config::TuiConfig;
use crate::nav::NavTarget;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::Theme;
use stackscope_core::{GenError, LayerId, NavError, ValueCard};
use stackscope_gen::GenerationClient;
use std::sync::Arc;

/// Interaction events fed to the view state machine, processed strictly in
/// arrival order, one at a time, to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Navigate(NavTarget),
    PointerEnter(LayerId),
    PointerLeave,
    Click(LayerId),
    DismissPopup,
}

/// The single source of truth for what is displayed: the active page, an
/// optionally hovered/pinned layer, and the quick-view popup flag.
///
/// Invariant: `popup_visible` implies `selected.is_some()`. The converse
/// does not hold - hover selects without opening the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub target: NavTarget,
    pub selected: Option<LayerId>,
    pub popup_visible: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            target: NavTarget::Home,
            selected: None,
            popup_visible: false,
        }
    }

    /// Apply one interaction event.
    ///
    /// Hover previews a layer (cheap, reversible). A first click pins it and
    /// opens the quick-view popup. A second click on the pinned layer is a
    /// full navigation to its breakout page. `PointerLeave` is deliberately
    /// ignored while the popup is open, so moving the pointer off the card
    /// and onto the popup never drops the selection, regardless of how the
    /// leave and click events are ordered.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Navigate(target) => {
                self.target = target;
                self.selected = None;
                self.popup_visible = false;
            }
            ViewEvent::PointerEnter(layer) => {
                if self.selected.is_none() {
                    self.selected = Some(layer);
                }
            }
            ViewEvent::PointerLeave => {
                if !self.popup_visible {
                    self.selected = None;
                }
            }
            ViewEvent::Click(layer) => {
                if self.selected == Some(layer) && self.popup_visible {
                    self.apply(ViewEvent::Navigate(NavTarget::Layer(layer)));
                } else {
                    self.selected = Some(layer);
                    self.popup_visible = true;
                }
            }
            ViewEvent::DismissPopup => {
                self.popup_visible = false;
                self.selected = None;
            }
        }
    }

    /// Navigate by slug. Unknown slugs are rejected and the state is left
    /// exactly as it was.
    pub fn navigate_slug(&mut self, slug: &str) -> Result<(), NavError> {
        let target = NavTarget::from_slug(slug)?;
        self.apply(ViewEvent::Navigate(target));
        Ok(())
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level application state.
pub struct App {
    pub config: TuiConfig,
    pub theme: Theme,
    pub client: Arc<GenerationClient>,
    pub view: ViewState,

    /// The business/industry subject being typed.
    pub subject_input: String,
    pub input_focused: bool,
    /// Currently displayed value cards. Defaults until a generation
    /// succeeds; a failed generation leaves them untouched.
    pub cards: Vec<ValueCard>,
    /// Whether `cards` came from a successful generation.
    pub cards_generated: bool,
    /// Mirror of the client's in-flight flag for rendering; the submit path
    /// checks the client itself.
    pub generating: bool,

    pub notifications: Vec<Notification>,
}

impl App {
    pub fn new(config: TuiConfig, client: Arc<GenerationClient>) -> Self {
        let theme = Theme::midnight();
        Self {
            config,
            theme,
            client,
            view: ViewState::new(),
            subject_input: String::new(),
            input_focused: false,
            cards: ValueCard::defaults(),
            cards_generated: false,
            generating: false,
            notifications: Vec::new(),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    /// Move the hover to the next layer on the home stack. While the popup
    /// is pinned open, both the leave and the enter are guarded no-ops, so
    /// the pinned layer stays put until the popup is dismissed.
    pub fn hover_next(&mut self) {
        let next = match self.view.selected {
            Some(layer) => layer.next(),
            None => LayerId::Ui,
        };
        self.view.apply(ViewEvent::PointerLeave);
        self.view.apply(ViewEvent::PointerEnter(next));
    }

    pub fn hover_previous(&mut self) {
        let previous = match self.view.selected {
            Some(layer) => layer.previous(),
            None => LayerId::Output,
        };
        self.view.apply(ViewEvent::PointerLeave);
        self.view.apply(ViewEvent::PointerEnter(previous));
    }

    /// Click the hovered/pinned layer, if any.
    pub fn click_selected(&mut self) {
        if let Some(layer) = self.view.selected {
            self.view.apply(ViewEvent::Click(layer));
        }
    }

    /// Called on every tick. The in-flight flag lives on the client; mirror
    /// it so the input box stops saying "generating" once a result lands.
    pub fn on_tick(&mut self) {
        self.generating = self.client.is_in_flight();
    }

    /// Record the outcome of a generation. On success the cards are
    /// replaced wholesale; on failure the displayed set (default or last
    /// successful) is left unchanged and the failure is surfaced as a
    /// notification.
    pub fn apply_generation(&mut self, result: Result<Vec<ValueCard>, GenError>) {
        self.generating = false;
        match result {
            Ok(cards) => {
                self.cards = cards;
                self.cards_generated = true;
                self.notify(NotificationLevel::Success, "Custom value cards generated.");
            }
            Err(err) => {
                self.notify(
                    NotificationLevel::Error,
                    format!("Generation failed: {}", err),
                );
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stackscope_core::TransientError;
    use stackscope_gen::TokioSleeper;
    use std::time::Duration;

    fn state() -> ViewState {
        ViewState::new()
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert_eq!(s.target, NavTarget::Home);
        assert_eq!(s.selected, None);
        assert!(!s.popup_visible);
    }

    #[test]
    fn test_navigate_clears_selection_and_popup() {
        let mut s = state();
        s.apply(ViewEvent::Click(LayerId::Rag));
        assert!(s.popup_visible);

        s.apply(ViewEvent::Navigate(NavTarget::BusinessValue));
        assert_eq!(s.target, NavTarget::BusinessValue);
        assert_eq!(s.selected, None);
        assert!(!s.popup_visible);
    }

    #[test]
    fn test_hover_selects_without_popup() {
        let mut s = state();
        s.apply(ViewEvent::PointerEnter(LayerId::Ui));
        assert_eq!(s.selected, Some(LayerId::Ui));
        assert!(!s.popup_visible);
    }

    #[test]
    fn test_hover_does_not_steal_existing_selection() {
        let mut s = state();
        s.apply(ViewEvent::PointerEnter(LayerId::Ui));
        s.apply(ViewEvent::PointerEnter(LayerId::Llm));
        assert_eq!(s.selected, Some(LayerId::Ui));
    }

    #[test]
    fn test_pointer_leave_clears_hover() {
        let mut s = state();
        s.apply(ViewEvent::PointerEnter(LayerId::Ui));
        s.apply(ViewEvent::PointerLeave);
        assert_eq!(s.selected, None);
    }

    #[test]
    fn test_pointer_leave_is_noop_while_popup_open() {
        let mut s = state();
        s.apply(ViewEvent::Click(LayerId::Dialogue));
        let pinned = s;
        s.apply(ViewEvent::PointerLeave);
        assert_eq!(s, pinned);
    }

    #[test]
    fn test_first_click_pins_second_click_navigates() {
        // Scenario: hover A, click A pins it, clicking A again drills in.
        let mut s = state();
        s.apply(ViewEvent::PointerEnter(LayerId::Ui));
        assert_eq!((s.target, s.selected, s.popup_visible), (NavTarget::Home, Some(LayerId::Ui), false));

        s.apply(ViewEvent::Click(LayerId::Ui));
        assert_eq!((s.target, s.selected, s.popup_visible), (NavTarget::Home, Some(LayerId::Ui), true));

        s.apply(ViewEvent::Click(LayerId::Ui));
        assert_eq!(
            (s.target, s.selected, s.popup_visible),
            (NavTarget::Layer(LayerId::Ui), None, false)
        );
    }

    #[test]
    fn test_click_different_layer_repins() {
        let mut s = state();
        s.apply(ViewEvent::Click(LayerId::Ui));
        s.apply(ViewEvent::Click(LayerId::Rag));
        assert_eq!(s.target, NavTarget::Home);
        assert_eq!(s.selected, Some(LayerId::Rag));
        assert!(s.popup_visible);
    }

    #[test]
    fn test_dismiss_popup_clears_both() {
        let mut s = state();
        s.apply(ViewEvent::Click(LayerId::Ui));
        s.apply(ViewEvent::DismissPopup);
        assert_eq!(s.selected, None);
        assert!(!s.popup_visible);
        assert_eq!(s.target, NavTarget::Home);
    }

    #[test]
    fn test_invalid_slug_leaves_state_unchanged() {
        let mut s = state();
        s.apply(ViewEvent::Click(LayerId::Llm));
        let before = s;

        let err = s.navigate_slug("warp-core").unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidTarget {
                slug: "warp-core".to_string()
            }
        );
        assert_eq!(s, before);
    }

    #[test]
    fn test_valid_slug_navigates() {
        let mut s = state();
        s.navigate_slug("rag-layer").unwrap();
        assert_eq!(s.target, NavTarget::Layer(LayerId::Rag));
    }

    #[test]
    fn test_popup_implies_selection_through_event_storm() {
        let mut s = state();
        let events = [
            ViewEvent::PointerEnter(LayerId::Ui),
            ViewEvent::Click(LayerId::Ui),
            ViewEvent::PointerLeave,
            ViewEvent::Click(LayerId::Rag),
            ViewEvent::DismissPopup,
            ViewEvent::PointerEnter(LayerId::Output),
            ViewEvent::Navigate(NavTarget::ExplodedDiagram),
        ];
        for event in events {
            s.apply(event);
            assert!(!s.popup_visible || s.selected.is_some());
        }
    }

    fn app() -> App {
        let client = Arc::new(GenerationClient::with_parts(
            None,
            Arc::new(TokioSleeper),
            5,
            Duration::from_millis(1000),
        ));
        App::new(TuiConfig::default(), client)
    }

    #[test]
    fn test_failed_generation_falls_back_to_default_cards() {
        let mut app = app();
        app.generating = true;

        app.apply_generation(Err(GenError::Exhausted {
            attempts: 5,
            cause: TransientError::Status { status: 500 },
        }));

        assert_eq!(app.cards, ValueCard::defaults());
        assert!(!app.cards_generated);
        assert!(!app.generating);
        let note = app.notifications.last().expect("error notification");
        assert!(matches!(note.level, NotificationLevel::Error));
    }

    #[test]
    fn test_successful_generation_replaces_cards() {
        let mut app = app();
        let generated = vec![ValueCard {
            title: "T".to_string(),
            desc: "D".to_string(),
            metric: "M".to_string(),
        }];

        app.apply_generation(Ok(generated.clone()));

        assert_eq!(app.cards, generated);
        assert!(app.cards_generated);
        assert!(!app.generating);
        let note = app.notifications.last().expect("success notification");
        assert!(matches!(note.level, NotificationLevel::Success));
    }

    #[test]
    fn test_tick_mirrors_idle_client() {
        let mut app = app();
        app.generating = true;

        app.on_tick();
        assert!(!app.generating);
    }
}
