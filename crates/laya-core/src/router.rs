//! The screen router: a linear state machine over the fixed screen set.
//!
//! The router is deliberately pure: it holds `current`, the answers record,
//! the actor role and the two display names, and applies transition
//! messages. Timers, per-screen local state and rendering live in
//! [`crate::session`]. All operations here are total; the only degenerate
//! outcome is the blank state produced by a raw jump to an unknown id.

use serde::{Deserialize, Serialize};

use crate::answers::{AnswerKey, AnswerValue, Answers};
use crate::screen::Screen;

/// Which side of the pairing the session currently simulates.
///
/// The invite "share" exit flips this to `Partner` so the rest of the demo
/// plays the invited partner's onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    Primary,
    Partner,
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorRole::Primary => f.write_str("primary"),
            ActorRole::Partner => f.write_str("partner"),
        }
    }
}

/// "Submit and advance" as one message: optionally merge an answer, then
/// move to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub key: Option<AnswerKey>,
    pub value: Option<AnswerValue>,
    pub target: Screen,
}

impl Transition {
    /// Plain navigation with no answer payload.
    pub fn go_to(target: Screen) -> Self {
        Self {
            key: None,
            value: None,
            target,
        }
    }

    pub fn advance(key: AnswerKey, value: AnswerValue, target: Screen) -> Self {
        Self {
            key: Some(key),
            value: Some(value),
            target,
        }
    }
}

/// Top-level navigation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Router {
    /// `None` is the defined blank terminal reached only through the debug
    /// navigator; every typed transition sets `Some`.
    current: Option<Screen>,
    answers: Answers,
    actor_role: ActorRole,
    user_name: String,
    partner_name: String,
}

impl Router {
    pub fn new(user_name: impl Into<String>, partner_name: impl Into<String>) -> Self {
        Self {
            current: Some(Screen::Splash),
            answers: Answers::new(),
            actor_role: ActorRole::Primary,
            user_name: user_name.into(),
            partner_name: partner_name.into(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn current(&self) -> Option<Screen> {
        self.current
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn actor_role(&self) -> ActorRole {
        self.actor_role
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn partner_name(&self) -> &str {
        &self.partner_name
    }

    /// Display name shown on the welcome screen, threaded by actor role.
    pub fn welcome_display_name(&self) -> &str {
        match self.actor_role {
            ActorRole::Partner => &self.partner_name,
            ActorRole::Primary => &self.user_name,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Merge one answer. Total, no failure mode. Returns whether the stored
    /// value changed (identical rewrites are no-ops).
    pub fn select_answer(&mut self, key: AnswerKey, value: AnswerValue) -> bool {
        let changed = self.answers.set(key, value);
        if changed {
            tracing::debug!(key = key.id(), "answer recorded");
        }
        changed
    }

    /// Unconditional typed navigation.
    pub fn go_to(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.current.map(|s| s.id()), to = screen.id(), "screen transition");
        self.current = Some(screen);
    }

    /// Apply a transition message.
    pub fn apply(&mut self, transition: Transition) {
        if let (Some(key), Some(value)) = (transition.key, transition.value) {
            self.select_answer(key, value);
        }
        self.go_to(transition.target);
    }

    /// Enter the blank terminal. Only the debug navigator does this, when
    /// handed an id outside the fixed set; the render step yields an empty
    /// view rather than an error.
    pub fn blank(&mut self) {
        tracing::debug!(from = ?self.current.map(|s| s.id()), "blank state entered");
        self.current = None;
    }

    /// Invite "share": switch to the partner's side of the demo and head to
    /// their welcome screen. The invite itself is simulated.
    pub fn share_invite(&mut self) {
        self.actor_role = ActorRole::Partner;
        tracing::debug!(role = %self.actor_role, "actor role switched");
        self.go_to(Screen::PartnerWelcome);
    }

    /// Invite "skip": straight home, role unchanged.
    pub fn skip_invite(&mut self) {
        self.go_to(Screen::Home);
    }

    /// Apply the minimal-setup completion data.
    ///
    /// Only the partner's setup overwrites the shared display name; the
    /// primary actor's identity is assumed already known, so their submission
    /// is accepted and discarded for naming purposes. Returns whether the
    /// name was updated.
    pub fn finish_partner_setup(&mut self, submitted_name: &str) -> bool {
        match self.actor_role {
            ActorRole::Partner => {
                self.user_name = submitted_name.to_string();
                tracing::debug!("display name updated from partner setup");
                true
            }
            ActorRole::Primary => false,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("Priya", "Arjun")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_splash_as_primary() {
        let router = Router::default();
        assert_eq!(router.current(), Some(Screen::Splash));
        assert_eq!(router.actor_role(), ActorRole::Primary);
        assert!(router.answers().is_empty());
    }

    #[test]
    fn apply_merges_answer_and_moves() {
        let mut router = Router::default();
        router.apply(Transition::advance(
            AnswerKey::Identity,
            AnswerValue::single("partner"),
            Screen::Relationship,
        ));
        assert_eq!(router.current(), Some(Screen::Relationship));
        assert_eq!(
            router.answers().get(AnswerKey::Identity),
            Some(&AnswerValue::single("partner"))
        );
    }

    #[test]
    fn share_switches_role_and_screen() {
        let mut router = Router::default();
        router.go_to(Screen::Invite);
        router.share_invite();
        assert_eq!(router.actor_role(), ActorRole::Partner);
        assert_eq!(router.current(), Some(Screen::PartnerWelcome));
    }

    #[test]
    fn skip_keeps_role() {
        let mut router = Router::default();
        router.go_to(Screen::Invite);
        router.skip_invite();
        assert_eq!(router.actor_role(), ActorRole::Primary);
        assert_eq!(router.current(), Some(Screen::Home));
    }

    #[test]
    fn setup_naming_is_asymmetric() {
        let mut router = Router::default();
        assert!(!router.finish_partner_setup("Rohan"));
        assert_eq!(router.user_name(), "Priya");

        router.share_invite();
        assert!(router.finish_partner_setup("Rohan"));
        assert_eq!(router.user_name(), "Rohan");
    }

    #[test]
    fn welcome_name_follows_role() {
        let mut router = Router::default();
        assert_eq!(router.welcome_display_name(), "Priya");
        router.share_invite();
        assert_eq!(router.welcome_display_name(), "Arjun");
    }

    #[test]
    fn blank_state_is_reachable_and_recoverable() {
        let mut router = Router::default();
        router.blank();
        assert_eq!(router.current(), None);
        router.go_to(Screen::Home);
        assert_eq!(router.current(), Some(Screen::Home));
    }
}
