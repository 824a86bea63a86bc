//! Demo navigator: the hidden developer drawer.
//!
//! Jumps take a raw string id, not a typed screen, because this is the one
//! entry point that has to survive arbitrary input. A jump only moves the
//! current screen; it never records answers, switches roles, or replays the
//! forward path.

use crate::screen::Screen;
use crate::session::Session;

/// One row of the navigator listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// The full listing, in drawer order.
pub fn entries() -> Vec<NavEntry> {
    Screen::all()
        .iter()
        .map(|s| NavEntry {
            id: s.id(),
            label: s.nav_label(),
        })
        .collect()
}

/// Jump the session to a raw id. Returns the screen when the id was known;
/// an unknown id blanks the session and returns `None` (not an error).
pub fn jump(session: &mut Session, raw_id: &str, now_ms: u64) -> Option<Screen> {
    session.jump(raw_id, now_ms);
    session.screen()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_covers_every_screen_in_order() {
        let entries = entries();
        assert_eq!(entries.len(), Screen::all().len());
        assert_eq!(entries[0].label, "01: Splash");
        assert_eq!(entries.last().map(|e| e.label), Some("24: Memory Detail"));
    }

    #[test]
    fn jump_moves_without_recording_answers() {
        let mut session = Session::new();
        assert_eq!(jump(&mut session, "paywall", 0), Some(Screen::Paywall));
        assert_eq!(jump(&mut session, "home", 0), Some(Screen::Home));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn unknown_id_blanks() {
        let mut session = Session::new();
        assert_eq!(jump(&mut session, "quiz4", 0), None);
        assert_eq!(session.screen(), None);
    }
}
