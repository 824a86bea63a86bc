use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::answers::AnswerKey;
use crate::router::ActorRole;
use crate::screen::Screen;
use crate::timer::TimerId;

/// Every state change in the session produces an Event.
/// The CLI prints them; a GUI shell would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A screen became current (forward flow or debug jump).
    ScreenEntered {
        screen: Screen,
        at: DateTime<Utc>,
    },
    /// A debug jump used an id outside the fixed set; the session now
    /// renders the blank view.
    ScreenBlanked {
        raw_id: String,
        at: DateTime<Utc>,
    },
    /// Carousel moved to a later slide without leaving the screen.
    CarouselAdvanced {
        slide: usize,
        at: DateTime<Utc>,
    },
    AnswerRecorded {
        key: AnswerKey,
        at: DateTime<Utc>,
    },
    /// Invite "share": the simulated session switched sides.
    RoleSwitched {
        role: ActorRole,
        at: DateTime<Utc>,
    },
    /// Partner setup updated the shared display name.
    DisplayNameUpdated {
        name: String,
        at: DateTime<Utc>,
    },
    /// Simulated invite-link copy acknowledgement.
    InviteShared {
        at: DateTime<Utc>,
    },
    TimerScheduled {
        id: TimerId,
        owner: Screen,
        fire_at_ms: u64,
        at: DateTime<Utc>,
    },
    TimerFired {
        id: TimerId,
        owner: Screen,
        at: DateTime<Utc>,
    },
    /// All timers owned by a departing screen were cancelled.
    TimersCancelled {
        owner: Screen,
        count: usize,
        at: DateTime<Utc>,
    },
    MoodLogged {
        value: u8,
        at: DateTime<Utc>,
    },
    NudgeSent {
        label: String,
        at: DateTime<Utc>,
    },
    DailyAnswerShared {
        at: DateTime<Utc>,
    },
    CouponClaimed {
        offer_id: u8,
        remaining: u8,
        at: DateTime<Utc>,
    },
}
