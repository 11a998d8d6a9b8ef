//! Translation of Zellij key events into handler [`Event`]s.
//!
//! While the command overlay is open it is modal: every key goes to the overlay and
//! nothing else reacts. Otherwise `Alt` chords drive the swipe session and view
//! switches, and plain keys go to whichever region has focus.

use super::handler::Event;
use super::modes::{Direction, Focus};
use super::state::AppState;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an event, or `None` when the key does nothing.
#[must_use]
pub fn map_key(key: &KeyWithModifier, state: &AppState) -> Option<Event> {
    if state.overlay.is_open() {
        return map_overlay_key(key);
    }

    let opens_overlay = key.bare_key == BareKey::Char('k')
        && (key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Super]));
    if opens_overlay || (key.bare_key == BareKey::Char('/') && key.has_no_modifiers()) {
        return Some(Event::OpenOverlay);
    }

    if key.has_modifiers(&[KeyModifier::Alt]) {
        return match key.bare_key {
            BareKey::Char('l') => Some(Event::Accept),
            BareKey::Char('s') => Some(Event::Reject),
            BareKey::Char('v') => Some(Event::ToggleView),
            BareKey::Char('r') => Some(Event::RestartSwipe),
            BareKey::Char('n') => Some(Event::NextPage),
            BareKey::Char('p') => Some(Event::PreviousPage),
            BareKey::Char('w') => Some(Event::ToggleSavedDrawer),
            BareKey::Char('i') => Some(Event::ToggleDetails),
            BareKey::Char('x') => Some(Event::ResetFilters),
            _ => None,
        };
    }

    if key.bare_key == BareKey::Tab {
        return if key.has_modifiers(&[KeyModifier::Shift]) {
            Some(Event::FocusPrevious)
        } else {
            Some(Event::FocusNext)
        };
    }

    if !key.has_no_modifiers() && !key.has_modifiers(&[KeyModifier::Shift]) {
        return None;
    }

    let event = match key.bare_key {
        BareKey::Esc => Event::Escape,
        BareKey::Up => Event::Navigate(Direction::Up),
        BareKey::Down => Event::Navigate(Direction::Down),
        BareKey::Left => Event::Navigate(Direction::Left),
        BareKey::Right => Event::Navigate(Direction::Right),
        BareKey::Enter => Event::Activate,
        BareKey::Char(' ') if state.focus != Focus::Query => Event::Activate,
        BareKey::Backspace | BareKey::Delete => Event::Erase,
        BareKey::Char(c) => Event::Input(c),
        _ => return None,
    };
    Some(event)
}

fn map_overlay_key(key: &KeyWithModifier) -> Option<Event> {
    let event = match key.bare_key {
        BareKey::Esc => Event::Escape,
        BareKey::Enter => Event::OverlaySubmit,
        BareKey::Up => Event::OverlayUp,
        BareKey::Down => Event::OverlayDown,
        BareKey::Backspace => Event::OverlayBackspace,
        BareKey::Char(c) if key.has_no_modifiers() || key.has_modifiers(&[KeyModifier::Shift]) => {
            Event::OverlayChar(c)
        }
        _ => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Theme};
    use std::time::Instant;

    fn state() -> AppState {
        AppState::new(&Config::default(), Theme::default())
    }

    fn plain(bare_key: BareKey) -> KeyWithModifier {
        KeyWithModifier::new(bare_key)
    }

    #[test]
    fn palette_shortcuts_open_the_overlay() {
        let state = state();
        let ctrl_k = KeyWithModifier::new(BareKey::Char('k')).with_ctrl_modifier();
        let super_k = KeyWithModifier::new(BareKey::Char('k')).with_super_modifier();

        assert_eq!(map_key(&ctrl_k, &state), Some(Event::OpenOverlay));
        assert_eq!(map_key(&super_k, &state), Some(Event::OpenOverlay));
        assert_eq!(map_key(&plain(BareKey::Char('/')), &state), Some(Event::OpenOverlay));
    }

    #[test]
    fn overlay_is_modal() {
        let mut state = state();
        state.open_overlay(Instant::now());

        let alt_l = KeyWithModifier::new(BareKey::Char('l')).with_alt_modifier();
        assert_eq!(map_key(&alt_l, &state), None);
        assert_eq!(map_key(&plain(BareKey::Char('/')), &state), Some(Event::OverlayChar('/')));
        assert_eq!(map_key(&plain(BareKey::Tab), &state), None);
        assert_eq!(map_key(&plain(BareKey::Enter), &state), Some(Event::OverlaySubmit));
    }

    #[test]
    fn alt_chords_drive_the_swipe_session() {
        let state = state();
        let alt = |c| KeyWithModifier::new(BareKey::Char(c)).with_alt_modifier();

        assert_eq!(map_key(&alt('l'), &state), Some(Event::Accept));
        assert_eq!(map_key(&alt('s'), &state), Some(Event::Reject));
        assert_eq!(map_key(&alt('v'), &state), Some(Event::ToggleView));
        assert_eq!(map_key(&alt('q'), &state), None);
    }

    #[test]
    fn space_types_into_query_but_activates_elsewhere() {
        let mut state = state();
        assert_eq!(map_key(&plain(BareKey::Char(' ')), &state), Some(Event::Input(' ')));

        state.focus = Focus::Results;
        assert_eq!(map_key(&plain(BareKey::Char(' ')), &state), Some(Event::Activate));
    }

    #[test]
    fn shift_tab_moves_focus_backwards() {
        let state = state();
        let shift_tab = KeyWithModifier::new(BareKey::Tab).with_shift_modifier();

        assert_eq!(map_key(&shift_tab, &state), Some(Event::FocusPrevious));
        assert_eq!(map_key(&plain(BareKey::Tab), &state), Some(Event::FocusNext));
    }
}
