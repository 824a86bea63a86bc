//! Home dashboard: a nested tab router over four sub-views.
//!
//! The whole dashboard is screen-local state of the `home` screen. Leaving
//! `home` at the top level drops it; coming back rebuilds the fixtures from
//! scratch. That remount-reset is deliberate.

pub mod gifting;
pub mod memories;
pub mod plan;
pub mod profile;

use serde::{Deserialize, Serialize};

use crate::error::HomeError;
use gifting::GiftingState;
use memories::MemoriesState;
use plan::PlanState;
use profile::ProfileState;

/// The four bottom tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeTab {
    Home,
    Plan,
    Memories,
    Gifting,
}

impl HomeTab {
    pub fn all() -> &'static [HomeTab] {
        &[HomeTab::Home, HomeTab::Plan, HomeTab::Memories, HomeTab::Gifting]
    }

    pub fn id(&self) -> &'static str {
        match self {
            HomeTab::Home => "home",
            HomeTab::Plan => "plan",
            HomeTab::Memories => "memories",
            HomeTab::Gifting => "gifting",
        }
    }

    pub fn parse(id: &str) -> Option<HomeTab> {
        HomeTab::all().iter().copied().find(|t| t.id() == id)
    }
}

/// One step of the 5-emoji mood scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodLevel {
    pub emoji: &'static str,
    pub label: &'static str,
    pub value: u8,
}

pub const MOOD_LEVELS: [MoodLevel; 5] = [
    MoodLevel { emoji: "😔", label: "Tired", value: 1 },
    MoodLevel { emoji: "😐", label: "Okay", value: 2 },
    MoodLevel { emoji: "🙂", label: "Good", value: 3 },
    MoodLevel { emoji: "😊", label: "Happy", value: 4 },
    MoodLevel { emoji: "🤩", label: "Energetic", value: 5 },
];

/// A one-tap nudge chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickNudge {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub static QUICK_NUDGES: [QuickNudge; 4] = [
    QuickNudge { icon: "🤗", label: "Send Hug", color: "#8E075F" },
    QuickNudge { icon: "💧", label: "Water Reminder", color: "#4ECDC4" },
    QuickNudge { icon: "💕", label: "Miss You", color: "#F7B731" },
    QuickNudge { icon: "⏰", label: "Late Alert", color: "#3D2E28" },
];

pub const DAY_STREAK: u32 = 12;

/// State of the home dashboard and its four tabs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeState {
    pub active_tab: HomeTab,
    /// Demo seed: the user has already logged a mood today.
    pub user_mood: Option<u8>,
    /// Demo seed: the partner has not.
    pub partner_mood: Option<u8>,
    pub daily_answer: String,
    /// Demo seed: the partner's answer sits behind the curiosity gap until
    /// the user shares their own.
    pub partner_has_answered: bool,
    pub show_profile: bool,
    pub plan: PlanState,
    pub memories: MemoriesState,
    pub gifting: GiftingState,
    pub profile: ProfileState,
}

impl HomeState {
    pub fn new(user_name: &str) -> Self {
        Self {
            active_tab: HomeTab::Home,
            user_mood: Some(3),
            partner_mood: None,
            daily_answer: String::new(),
            partner_has_answered: true,
            show_profile: false,
            plan: PlanState::new(),
            memories: MemoriesState::new(),
            gifting: GiftingState::new(),
            profile: ProfileState::new(user_name),
        }
    }

    pub fn select_tab(&mut self, tab: HomeTab) {
        self.active_tab = tab;
    }

    /// Log the user's mood on the 1-5 scale.
    pub fn log_mood(&mut self, value: u8) -> Result<(), HomeError> {
        if !(1..=5).contains(&value) {
            return Err(HomeError::InvalidMood(value));
        }
        self.user_mood = Some(value);
        Ok(())
    }

    /// Daily question copy, personalized with the partner's name.
    pub fn daily_question(&self, partner_name: &str) -> String {
        format!("What is one small thing {partner_name} did this week that made you smile?")
    }

    pub fn set_daily_answer(&mut self, text: impl Into<String>) {
        self.daily_answer = text.into();
    }

    /// Share the daily answer, revealing the partner's. Gated on non-empty
    /// text.
    pub fn share_daily_answer(&mut self) -> Result<&'static str, HomeError> {
        if self.daily_answer.trim().is_empty() {
            return Err(HomeError::EmptyDailyAnswer);
        }
        self.partner_has_answered = false;
        Ok("Answer shared! Your partner's answer is now revealed.")
    }

    /// Send a quick nudge. Simulated acknowledgement only.
    pub fn send_nudge(&self, index: usize) -> Result<&'static QuickNudge, HomeError> {
        QUICK_NUDGES.get(index).ok_or(HomeError::UnknownNudge(index))
    }

    /// Time-of-day greeting.
    pub fn greeting(hour: u32) -> &'static str {
        if hour < 12 {
            "Good Morning"
        } else if hour < 18 {
            "Good Afternoon"
        } else {
            "Good Evening"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_matches_demo_seed() {
        let home = HomeState::new("Priya");
        assert_eq!(home.active_tab, HomeTab::Home);
        assert_eq!(home.user_mood, Some(3));
        assert_eq!(home.partner_mood, None);
        assert!(home.partner_has_answered);
        assert!(home.daily_answer.is_empty());
    }

    #[test]
    fn mood_scale_is_bounded() {
        let mut home = HomeState::new("Priya");
        assert!(home.log_mood(5).is_ok());
        assert_eq!(home.user_mood, Some(5));
        assert_eq!(home.log_mood(0), Err(HomeError::InvalidMood(0)));
        assert_eq!(home.log_mood(6), Err(HomeError::InvalidMood(6)));
    }

    #[test]
    fn sharing_requires_an_answer() {
        let mut home = HomeState::new("Priya");
        assert_eq!(home.share_daily_answer(), Err(HomeError::EmptyDailyAnswer));
        home.set_daily_answer("   ");
        assert_eq!(home.share_daily_answer(), Err(HomeError::EmptyDailyAnswer));
        home.set_daily_answer("He made chai without being asked");
        assert!(home.share_daily_answer().is_ok());
        assert!(!home.partner_has_answered);
    }

    #[test]
    fn nudges_resolve_by_index() {
        let home = HomeState::new("Priya");
        assert_eq!(home.send_nudge(0).unwrap().label, "Send Hug");
        assert_eq!(home.send_nudge(9), Err(HomeError::UnknownNudge(9)));
    }

    #[test]
    fn greeting_follows_the_clock() {
        assert_eq!(HomeState::greeting(6), "Good Morning");
        assert_eq!(HomeState::greeting(13), "Good Afternoon");
        assert_eq!(HomeState::greeting(21), "Good Evening");
    }

    #[test]
    fn tab_ids_round_trip() {
        for tab in HomeTab::all() {
            assert_eq!(HomeTab::parse(tab.id()), Some(*tab));
        }
        assert_eq!(HomeTab::parse("settings"), None);
    }
}
