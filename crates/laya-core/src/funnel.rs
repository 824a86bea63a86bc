//! Static content for the onboarding funnel.
//!
//! Everything here is fixture copy: carousel slides, choice lists, quiz
//! steps, paywall plans, the minimal-setup form. Screen-local selection
//! state lives next to the content it selects over.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerKey;
use crate::screen::Screen;

// ── Carousel ─────────────────────────────────────────────────────────

/// One slide of the intro carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSlide {
    pub headline: &'static str,
    pub body: &'static str,
}

pub static CAROUSEL_SLIDES: [CarouselSlide; 3] = [
    CarouselSlide {
        headline: "From Dissonance to Harmony",
        body: "Sync your emotional worlds in just 5 minutes a day.",
    },
    CarouselSlide {
        headline: "The Ultimate Relationship Toolkit",
        body: "Memories, Nudges, Shared Calendars, and more.",
    },
    CarouselSlide {
        headline: "Join 50,000+ Couples",
        body: "Finding their rhythm in a chaotic world.",
    },
];

/// Local state of the carousel screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub slide: usize,
}

impl CarouselState {
    /// Advance one slide. Returns `true` when the carousel is done and the
    /// screen should complete.
    pub fn next(&mut self) -> bool {
        if self.slide + 1 < CAROUSEL_SLIDES.len() {
            self.slide += 1;
            false
        } else {
            true
        }
    }

    pub fn current(&self) -> &'static CarouselSlide {
        &CAROUSEL_SLIDES[self.slide.min(CAROUSEL_SLIDES.len() - 1)]
    }

    pub fn cta(&self) -> &'static str {
        if self.slide == CAROUSEL_SLIDES.len() - 1 {
            "Start Your Journey"
        } else {
            "Continue"
        }
    }
}

// ── Single-choice screens ────────────────────────────────────────────

/// A tappable choice card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub highlight: bool,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice {
        value,
        label,
        highlight: false,
    }
}

pub const IDENTITY_CHOICES: [Choice; 3] = [
    choice("partner", "My Partner"),
    choice("solo", "Just Me (For Now)"),
    choice("fiance", "My Fiancé/Fiancée"),
];

pub const RELATIONSHIP_CHOICES: [Choice; 5] = [
    choice("dating", "Dating / Situationship"),
    choice("living-together", "Living Together"),
    choice("married", "Married"),
    Choice {
        value: "married-joint",
        label: "Married (Joint Family)",
        highlight: true,
    },
    choice("long-distance", "Long Distance"),
];

pub const GOAL_CHOICES: [Choice; 5] = [
    choice("heal", "Heal a disconnect"),
    choice("spark", "Reignite the spark"),
    choice("communication", "Fix communication loops"),
    choice("peace", "Find peace amidst chaos"),
    choice("surprises", "Plan better surprises"),
];

/// Multi-select state for the goals screen. Submission is gated on at least
/// one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSelection {
    selected: Vec<String>,
}

impl GoalSelection {
    pub fn toggle(&mut self, value: &str) {
        if let Some(pos) = self.selected.iter().position(|v| v == value) {
            self.selected.remove(pos);
        } else {
            self.selected.push(value.to_string());
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    pub fn can_submit(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.selected
    }
}

// ── Quiz steps ───────────────────────────────────────────────────────

/// One question screen of the quiz block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizStep {
    pub key: AnswerKey,
    pub question: &'static str,
    pub options: &'static [&'static str],
    /// Progress bar percentage shown on the screen.
    pub progress: u8,
    /// The vulnerability step renders with a heavier visual tone.
    pub darker: bool,
    pub next: Screen,
}

pub static QUIZ_STEPS: [QuizStep; 4] = [
    QuizStep {
        key: AnswerKey::Quiz1,
        question: "How long have you felt out of sync?",
        options: &[
            "We are great, just want better",
            "A few weeks",
            "Since a major life event",
            "It feels like forever",
        ],
        progress: 50,
        darker: false,
        next: Screen::Quiz2,
    },
    QuizStep {
        key: AnswerKey::Quiz2,
        question: "What creates the most 'noise'?",
        options: &[
            "Communication Gap",
            "Family/In-Laws",
            "Financial Stress",
            "Digital Distraction",
            "Intimacy",
        ],
        progress: 65,
        darker: false,
        next: Screen::Quiz3,
    },
    QuizStep {
        key: AnswerKey::Quiz3,
        question: "Do you know your partner's current biggest stressor?",
        options: &[
            "Yes, absolutely",
            "I think so?",
            "No, we haven't talked deeply lately",
        ],
        progress: 80,
        darker: false,
        next: Screen::Vulnerability,
    },
    QuizStep {
        key: AnswerKey::Vulnerability,
        question: "When was the last time you felt truly 'seen' by your partner?",
        options: &["Today", "A week ago", "A month ago", "I can't remember"],
        progress: 95,
        darker: true,
        next: Screen::Processing,
    },
];

/// Quiz step shown on a given screen, if that screen is a quiz screen.
pub fn quiz_step(screen: Screen) -> Option<&'static QuizStep> {
    match screen {
        Screen::Quiz1 => Some(&QUIZ_STEPS[0]),
        Screen::Quiz2 => Some(&QUIZ_STEPS[1]),
        Screen::Quiz3 => Some(&QUIZ_STEPS[2]),
        Screen::Vulnerability => Some(&QUIZ_STEPS[3]),
        _ => None,
    }
}

// ── Processing ───────────────────────────────────────────────────────

pub const PROCESSING_STAGES: [&str; 2] = ["Analyzing your Laya...", "Identifying your Rhythm..."];

/// Local state of the processing screen; the stage flips on a timer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingState {
    pub stage: usize,
}

impl ProcessingState {
    pub fn message(&self) -> &'static str {
        PROCESSING_STAGES[self.stage.min(PROCESSING_STAGES.len() - 1)]
    }
}

// ── Paywall ──────────────────────────────────────────────────────────

pub const PAYWALL_FEATURES: [&str; 4] = [
    "Daily 'Us' Questions",
    "Occasions Calendar",
    "Memories Timeline",
    "Gamified Feelings Streak",
];

/// A subscription plan card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaywallPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub billed_annually: bool,
    pub badge: Option<&'static str>,
    pub highlight: bool,
}

pub const PAYWALL_PLANS: [PaywallPlan; 2] = [
    PaywallPlan {
        id: "monthly",
        name: "Monthly",
        price: "₹999",
        period: "/mo",
        billed_annually: false,
        badge: None,
        highlight: false,
    },
    PaywallPlan {
        id: "annual",
        name: "Annual",
        price: "₹299",
        period: "/mo",
        billed_annually: true,
        badge: Some("Save 70% | Most Popular"),
        highlight: true,
    },
];

/// Local state of the paywall screen; annual is pre-selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallState {
    pub selected_plan: String,
}

impl Default for PaywallState {
    fn default() -> Self {
        Self {
            selected_plan: "annual".to_string(),
        }
    }
}

impl PaywallState {
    pub fn select(&mut self, plan_id: &str) {
        if PAYWALL_PLANS.iter().any(|p| p.id == plan_id) {
            self.selected_plan = plan_id.to_string();
        }
    }
}

// ── Minimal setup ────────────────────────────────────────────────────

/// The three-field profile form shared by both actors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupForm {
    pub name: String,
    pub dob: String,
    pub gender: String,
}

impl SetupForm {
    /// Submission gate: every field non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.dob.is_empty() && !self.gender.is_empty()
    }
}

pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Local state of the partner-setup screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupState {
    pub form: SetupForm,
    /// True while the "Sync Complete" hold is on screen.
    pub success: bool,
}
