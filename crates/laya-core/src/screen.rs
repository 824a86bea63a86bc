//! Screen identifiers for the Laya flow.
//!
//! The flow is a closed set of 20 screens. Raw string ids only enter the
//! system through the debug navigator; everywhere else screens are typed.

use serde::{Deserialize, Serialize};

/// One screen in the flow.
///
/// The wire/debug ids are kebab-case (`partner-welcome`, `memories-timeline`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Splash,
    Onboarding,
    Identity,
    Relationship,
    Goals,
    Quiz1,
    Quiz2,
    Quiz3,
    Vulnerability,
    Processing,
    Diagnosis,
    Paywall,
    Invite,
    PartnerWelcome,
    PartnerSetup,
    Home,
    Success,
    MemoriesTimeline,
    MemoriesAddForm,
    MemoriesDetail,
}

impl Screen {
    /// All screens, in demo-navigator order.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Splash,
            Screen::Onboarding,
            Screen::Identity,
            Screen::Relationship,
            Screen::Goals,
            Screen::Quiz1,
            Screen::Quiz2,
            Screen::Quiz3,
            Screen::Vulnerability,
            Screen::Processing,
            Screen::Diagnosis,
            Screen::Paywall,
            Screen::Invite,
            Screen::PartnerWelcome,
            Screen::PartnerSetup,
            Screen::Home,
            Screen::Success,
            Screen::MemoriesTimeline,
            Screen::MemoriesAddForm,
            Screen::MemoriesDetail,
        ]
    }

    /// Stable string id.
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::Onboarding => "onboarding",
            Screen::Identity => "identity",
            Screen::Relationship => "relationship",
            Screen::Goals => "goals",
            Screen::Quiz1 => "quiz1",
            Screen::Quiz2 => "quiz2",
            Screen::Quiz3 => "quiz3",
            Screen::Vulnerability => "vulnerability",
            Screen::Processing => "processing",
            Screen::Diagnosis => "diagnosis",
            Screen::Paywall => "paywall",
            Screen::Invite => "invite",
            Screen::PartnerWelcome => "partner-welcome",
            Screen::PartnerSetup => "partner-setup",
            Screen::Home => "home",
            Screen::Success => "success",
            Screen::MemoriesTimeline => "memories-timeline",
            Screen::MemoriesAddForm => "memories-add-form",
            Screen::MemoriesDetail => "memories-detail",
        }
    }

    /// Parse a raw id. Unknown ids yield `None`; the caller decides what a
    /// miss means (the debug navigator renders a blank view).
    pub fn parse(id: &str) -> Option<Screen> {
        Screen::all().iter().copied().find(|s| s.id() == id)
    }

    /// Numbered label used by the demo navigator listing.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Screen::Splash => "01: Splash",
            Screen::Onboarding => "02: Onboarding",
            Screen::Identity => "03: Identity Setup",
            Screen::Relationship => "04: Relationship Context",
            Screen::Goals => "05: Goals",
            Screen::Quiz1 => "06: Quiz 1",
            Screen::Quiz2 => "07: Quiz 2",
            Screen::Quiz3 => "08: Quiz 3",
            Screen::Vulnerability => "09: Vulnerability",
            Screen::Processing => "10: Processing",
            Screen::Diagnosis => "11: Diagnosis",
            Screen::Paywall => "12: Paywall",
            Screen::Invite => "13: Invite Modal",
            Screen::PartnerWelcome => "14: Partner Welcome",
            Screen::PartnerSetup => "15: Partner Setup",
            Screen::Home => "16: Home Dashboard",
            Screen::Success => "17: Success",
            Screen::MemoriesTimeline => "22: Memories Timeline",
            Screen::MemoriesAddForm => "23: Add Memory Form",
            Screen::MemoriesDetail => "24: Memory Detail",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::parse(s).ok_or_else(|| format!("unknown screen id: {s}"))
    }
}
