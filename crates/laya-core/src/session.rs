//! A live demo session: router + timer pool + per-screen local state.
//!
//! The session enforces two resource rules: screen-local state is rebuilt
//! from fixtures on every entry (remount reset), and a departing screen's
//! timers are cancelled on every exit path, whether the exit was a normal
//! completion or a forced debug jump.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::answers::{AnswerKey, AnswerValue, Answers};
use crate::config::DemoConfig;
use crate::error::{GiftingError, HomeError};
use crate::events::Event;
use crate::funnel::{
    quiz_step, CarouselState, GoalSelection, PaywallState, ProcessingState, SetupState,
    GOAL_CHOICES, IDENTITY_CHOICES, PAYWALL_PLANS, RELATIONSHIP_CHOICES,
};
use crate::home::gifting::ClaimOutcome;
use crate::home::memories::MemoriesState;
use crate::home::HomeState;
use crate::router::{ActorRole, Router};
use crate::screen::Screen;
use crate::timer::TimerPool;

/// What a one-shot timer does when it fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerAction {
    /// Auto-advance (splash, processing).
    GoTo(Screen),
    /// Flip the processing status message.
    ProcessingStage(usize),
    /// End the "Sync Complete" hold: apply the naming rule, then go home.
    FinishSetup,
}

/// Per-screen local state. Exactly one variant is alive at a time; it is
/// dropped and rebuilt on every screen change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LocalState {
    None,
    Carousel(CarouselState),
    Goals(GoalSelection),
    Processing(ProcessingState),
    Paywall(PaywallState),
    Setup(SetupState),
    Home(Box<HomeState>),
    Memories(MemoriesState),
}

/// The live session. Serializable so a front end can park it between
/// invocations.
#[derive(Debug, Serialize, Deserialize)]
pub struct Session {
    router: Router,
    timers: TimerPool<TimerAction>,
    local: LocalState,
    config: DemoConfig,
    events: Vec<Event>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(DemoConfig::default())
    }

    pub fn with_config(config: DemoConfig) -> Self {
        Self::start_at(config, 0)
    }

    /// Start a session with the splash timer based at `now_ms`. Lets a
    /// front end running on the real clock mount the splash correctly.
    pub fn start_at(config: DemoConfig, now_ms: u64) -> Self {
        let router = Router::new(&config.user_name, &config.partner_name);
        let mut session = Self {
            router,
            timers: TimerPool::new(),
            local: LocalState::None,
            config,
            events: Vec::new(),
        };
        // Initial mount of the splash screen.
        session.local = session.fresh_local(Screen::Splash);
        session.schedule_screen_timers(Screen::Splash, now_ms);
        session.push(Event::ScreenEntered {
            screen: Screen::Splash,
            at: Utc::now(),
        });
        session
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn screen(&self) -> Option<Screen> {
        self.router.current()
    }

    pub fn answers(&self) -> &Answers {
        self.router.answers()
    }

    pub fn actor_role(&self) -> ActorRole {
        self.router.actor_role()
    }

    pub fn user_name(&self) -> &str {
        self.router.user_name()
    }

    pub fn partner_name(&self) -> &str {
        self.router.partner_name()
    }

    pub fn welcome_display_name(&self) -> &str {
        self.router.welcome_display_name()
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn local(&self) -> &LocalState {
        &self.local
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }

    /// Earliest pending timer deadline; lets a driver jump its clock.
    pub fn next_fire_at(&self) -> Option<u64> {
        self.timers.next_fire_at()
    }

    /// Accumulated events since the last drain.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drain accumulated events.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn home(&self) -> Option<&HomeState> {
        match &self.local {
            LocalState::Home(home) => Some(home.as_ref()),
            _ => None,
        }
    }

    pub fn home_mut(&mut self) -> Option<&mut HomeState> {
        match &mut self.local {
            LocalState::Home(home) => Some(home.as_mut()),
            _ => None,
        }
    }

    pub fn memories(&self) -> Option<&MemoriesState> {
        match &self.local {
            LocalState::Memories(memories) => Some(memories),
            _ => None,
        }
    }

    pub fn memories_mut(&mut self) -> Option<&mut MemoriesState> {
        match &mut self.local {
            LocalState::Memories(memories) => Some(memories),
            _ => None,
        }
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Typed navigation with the full exit discipline: cancel the departing
    /// screen's timers, drop its local state, mount the target fresh.
    /// Entering the screen that is already current is a no-op (no remount).
    pub fn go_to(&mut self, screen: Screen, now_ms: u64) {
        if self.router.current() == Some(screen) {
            return;
        }
        self.leave_current();
        self.router.go_to(screen);
        self.local = self.fresh_local(screen);
        self.schedule_screen_timers(screen, now_ms);
        self.push(Event::ScreenEntered {
            screen,
            at: Utc::now(),
        });
    }

    /// Debug-navigator jump from a raw id. Never touches answers, never
    /// replays the forward path. Unknown ids land in the blank state.
    pub fn jump(&mut self, raw_id: &str, now_ms: u64) {
        match Screen::parse(raw_id) {
            Some(screen) => self.go_to(screen, now_ms),
            None => {
                self.leave_current();
                self.router.blank();
                self.local = LocalState::None;
                self.push(Event::ScreenBlanked {
                    raw_id: raw_id.to_string(),
                    at: Utc::now(),
                });
            }
        }
    }

    fn leave_current(&mut self) {
        if let Some(prev) = self.router.current() {
            let cancelled = self.timers.cancel_owned_by(prev);
            if cancelled > 0 {
                self.push(Event::TimersCancelled {
                    owner: prev,
                    count: cancelled,
                    at: Utc::now(),
                });
            }
        }
    }

    fn fresh_local(&self, screen: Screen) -> LocalState {
        match screen {
            Screen::Onboarding => LocalState::Carousel(CarouselState::default()),
            Screen::Goals => LocalState::Goals(GoalSelection::default()),
            Screen::Processing => LocalState::Processing(ProcessingState::default()),
            Screen::Paywall => LocalState::Paywall(PaywallState::default()),
            Screen::PartnerSetup => LocalState::Setup(SetupState::default()),
            Screen::Home => LocalState::Home(Box::new(HomeState::new(self.router.user_name()))),
            Screen::MemoriesTimeline | Screen::MemoriesAddForm => {
                LocalState::Memories(MemoriesState::new())
            }
            Screen::MemoriesDetail => {
                let mut memories = MemoriesState::new();
                if let Some(first) = memories.memories.first().map(|m| m.id) {
                    let _ = memories.select(first);
                }
                LocalState::Memories(memories)
            }
            _ => LocalState::None,
        }
    }

    fn schedule_screen_timers(&mut self, screen: Screen, now_ms: u64) {
        match screen {
            Screen::Splash => {
                self.schedule(screen, now_ms, self.config.splash_ms, TimerAction::GoTo(Screen::Onboarding));
            }
            Screen::Processing => {
                self.schedule(
                    screen,
                    now_ms,
                    self.config.processing_stage_ms,
                    TimerAction::ProcessingStage(1),
                );
                self.schedule(
                    screen,
                    now_ms,
                    self.config.processing_done_ms,
                    TimerAction::GoTo(Screen::Diagnosis),
                );
            }
            _ => {}
        }
    }

    fn schedule(&mut self, owner: Screen, now_ms: u64, delay_ms: u64, action: TimerAction) {
        let id = self.timers.schedule(owner, now_ms, delay_ms, action);
        self.push(Event::TimerScheduled {
            id,
            owner,
            fire_at_ms: now_ms.saturating_add(delay_ms),
            at: Utc::now(),
        });
    }

    /// Drive time forward. Fires due timers in deadline order and applies
    /// their actions. Cancelled timers never show up here.
    pub fn tick(&mut self, now_ms: u64) {
        // Applying an action can schedule or cancel more timers, so drain
        // one batch at a time until quiescent for this instant.
        loop {
            let due = self.timers.tick(now_ms);
            if due.is_empty() {
                return;
            }
            for timer in due {
                self.push(Event::TimerFired {
                    id: timer.id,
                    owner: timer.owner,
                    at: Utc::now(),
                });
                self.apply_timer_action(timer.action, now_ms);
            }
        }
    }

    fn apply_timer_action(&mut self, action: TimerAction, now_ms: u64) {
        match action {
            TimerAction::GoTo(screen) => self.go_to(screen, now_ms),
            TimerAction::ProcessingStage(stage) => {
                if let LocalState::Processing(processing) = &mut self.local {
                    processing.stage = stage;
                }
            }
            TimerAction::FinishSetup => {
                let submitted_name = match &self.local {
                    LocalState::Setup(setup) => setup.form.name.clone(),
                    _ => String::new(),
                };
                if self.router.finish_partner_setup(&submitted_name) {
                    self.push(Event::DisplayNameUpdated {
                        name: submitted_name,
                        at: Utc::now(),
                    });
                }
                self.go_to(Screen::Home, now_ms);
            }
        }
    }

    // ── Leaf screen exits ────────────────────────────────────────────

    fn record(&mut self, key: AnswerKey, value: AnswerValue) {
        self.router.select_answer(key, value);
        self.push(Event::AnswerRecorded {
            key,
            at: Utc::now(),
        });
    }

    /// Carousel "Continue" press. Completes into identity setup on the last
    /// slide.
    pub fn carousel_next(&mut self, now_ms: u64) -> bool {
        if self.router.current() != Some(Screen::Onboarding) {
            return false;
        }
        let LocalState::Carousel(carousel) = &mut self.local else {
            return false;
        };
        let done = carousel.next();
        let slide = carousel.slide;
        if done {
            self.go_to(Screen::Identity, now_ms);
        } else {
            self.push(Event::CarouselAdvanced {
                slide,
                at: Utc::now(),
            });
        }
        true
    }

    pub fn choose_identity(&mut self, value: &str, now_ms: u64) -> bool {
        if self.router.current() != Some(Screen::Identity)
            || !IDENTITY_CHOICES.iter().any(|c| c.value == value)
        {
            return false;
        }
        self.record(AnswerKey::Identity, AnswerValue::single(value));
        self.go_to(Screen::Relationship, now_ms);
        true
    }

    pub fn choose_relationship(&mut self, value: &str, now_ms: u64) -> bool {
        if self.router.current() != Some(Screen::Relationship)
            || !RELATIONSHIP_CHOICES.iter().any(|c| c.value == value)
        {
            return false;
        }
        self.record(AnswerKey::Relationship, AnswerValue::single(value));
        self.go_to(Screen::Goals, now_ms);
        true
    }

    pub fn toggle_goal(&mut self, value: &str) -> bool {
        if self.router.current() != Some(Screen::Goals)
            || !GOAL_CHOICES.iter().any(|c| c.value == value)
        {
            return false;
        }
        match &mut self.local {
            LocalState::Goals(goals) => {
                goals.toggle(value);
                true
            }
            _ => false,
        }
    }

    /// Submit the multi-select. Gated on at least one selection.
    pub fn submit_goals(&mut self, now_ms: u64) -> bool {
        let values = match &self.local {
            LocalState::Goals(goals) if goals.can_submit() => goals.values().to_vec(),
            _ => return false,
        };
        if self.router.current() != Some(Screen::Goals) {
            return false;
        }
        self.record(AnswerKey::Goals, AnswerValue::Multi(values));
        self.go_to(Screen::Quiz1, now_ms);
        true
    }

    /// Answer the quiz question on the current screen.
    pub fn answer_quiz(&mut self, option: &str, now_ms: u64) -> bool {
        let Some(current) = self.router.current() else {
            return false;
        };
        let Some(step) = quiz_step(current) else {
            return false;
        };
        if !step.options.contains(&option) {
            return false;
        }
        self.record(step.key, AnswerValue::single(option));
        self.go_to(step.next, now_ms);
        true
    }

    pub fn continue_diagnosis(&mut self, now_ms: u64) -> bool {
        if self.router.current() != Some(Screen::Diagnosis) {
            return false;
        }
        self.go_to(Screen::Paywall, now_ms);
        true
    }

    pub fn select_plan(&mut self, plan_id: &str) -> bool {
        match &mut self.local {
            LocalState::Paywall(paywall) if PAYWALL_PLANS.iter().any(|p| p.id == plan_id) => {
                paywall.select(plan_id);
                true
            }
            _ => false,
        }
    }

    /// Subscribe with the currently selected plan.
    pub fn subscribe(&mut self, now_ms: u64) -> bool {
        if self.router.current() != Some(Screen::Paywall) {
            return false;
        }
        let plan = match &self.local {
            LocalState::Paywall(paywall) => paywall.selected_plan.clone(),
            _ => return false,
        };
        self.record(AnswerKey::Plan, AnswerValue::Single(plan));
        self.go_to(Screen::Invite, now_ms);
        true
    }

    /// Invite "share": simulated invite, role switch, partner onboarding.
    pub fn share_invite(&mut self, now_ms: u64) -> bool {
        if self.router.current() != Some(Screen::Invite) {
            return false;
        }
        self.push(Event::InviteShared { at: Utc::now() });
        self.leave_current();
        self.router.share_invite();
        self.push(Event::RoleSwitched {
            role: self.router.actor_role(),
            at: Utc::now(),
        });
        self.local = self.fresh_local(Screen::PartnerWelcome);
        self.schedule_screen_timers(Screen::PartnerWelcome, now_ms);
        self.push(Event::ScreenEntered {
            screen: Screen::PartnerWelcome,
            at: Utc::now(),
        });
        true
    }

    /// Invite "skip": straight home, role unchanged.
    pub fn skip_invite(&mut self, now_ms: u64) -> bool {
        if self.router.current() != Some(Screen::Invite) {
            return false;
        }
        self.go_to(Screen::Home, now_ms);
        true
    }

    pub fn join_partner(&mut self, now_ms: u64) -> bool {
        if self.router.current() != Some(Screen::PartnerWelcome) {
            return false;
        }
        self.go_to(Screen::PartnerSetup, now_ms);
        true
    }

    pub fn set_setup_field(&mut self, name: Option<&str>, dob: Option<&str>, gender: Option<&str>) -> bool {
        match &mut self.local {
            LocalState::Setup(setup) if !setup.success => {
                if let Some(name) = name {
                    setup.form.name = name.to_string();
                }
                if let Some(dob) = dob {
                    setup.form.dob = dob.to_string();
                }
                if let Some(gender) = gender {
                    setup.form.gender = gender.to_string();
                }
                true
            }
            _ => false,
        }
    }

    /// Submit the minimal-setup form. Gated on all three fields; enters the
    /// "Sync Complete" hold and schedules its completion timer.
    pub fn submit_setup(&mut self, now_ms: u64) -> bool {
        if self.router.current() != Some(Screen::PartnerSetup) {
            return false;
        }
        let ready = match &mut self.local {
            LocalState::Setup(setup) if !setup.success && setup.form.is_complete() => {
                setup.success = true;
                true
            }
            _ => false,
        };
        if ready {
            let hold = self.config.success_hold_ms;
            self.schedule(Screen::PartnerSetup, now_ms, hold, TimerAction::FinishSetup);
        }
        ready
    }

    // ── Home interactions (event-emitting wrappers) ──────────────────

    pub fn log_mood(&mut self, value: u8) -> Result<(), HomeError> {
        let home = self.home_mut().ok_or(HomeError::InvalidMood(value))?;
        home.log_mood(value)?;
        self.push(Event::MoodLogged {
            value,
            at: Utc::now(),
        });
        Ok(())
    }

    pub fn send_nudge(&mut self, index: usize) -> Result<String, HomeError> {
        let home = self.home().ok_or(HomeError::UnknownNudge(index))?;
        let nudge = home.send_nudge(index)?;
        let label = nudge.label.to_string();
        self.push(Event::NudgeSent {
            label: label.clone(),
            at: Utc::now(),
        });
        Ok(label)
    }

    pub fn share_daily_answer(&mut self) -> Result<&'static str, HomeError> {
        let home = self.home_mut().ok_or(HomeError::EmptyDailyAnswer)?;
        let ack = home.share_daily_answer()?;
        self.push(Event::DailyAnswerShared { at: Utc::now() });
        Ok(ack)
    }

    pub fn claim_coupon(&mut self, offer_id: u8) -> Result<ClaimOutcome, GiftingError> {
        let home = self
            .home_mut()
            .ok_or(GiftingError::UnknownOffer(offer_id))?;
        let outcome = home.gifting.claim(offer_id)?;
        if outcome == ClaimOutcome::Claimed {
            let remaining = self
                .home()
                .map(|h| h.gifting.remaining(offer_id))
                .unwrap_or(0);
            self.push(Event::CouponClaimed {
                offer_id,
                remaining,
                at: Utc::now(),
            });
        }
        Ok(outcome)
    }

    fn push(&mut self, event: Event) {
        self.events.push(event);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ── Forward walk ─────────────────────────────────────────────────────

/// Summary of a scripted walk down the canonical forward path.
#[derive(Debug, Clone)]
pub struct WalkReport {
    /// Screen arrivals (including the initial splash) plus carousel slide
    /// advances.
    pub steps: usize,
    pub visited: Vec<Screen>,
    pub carousel_advances: usize,
}

/// Drive a fresh session down the canonical forward path with first-option
/// choices, either sharing the invite (partner branch) or skipping it.
pub fn forward_walk(share: bool, config: DemoConfig) -> (WalkReport, Session) {
    let mut session = Session::with_config(config);
    let mut now = 0;

    // Splash auto-advance.
    now = session.next_fire_at().unwrap_or(now);
    session.tick(now);

    // Carousel: three presses, the last completes.
    session.carousel_next(now);
    session.carousel_next(now);
    session.carousel_next(now);

    session.choose_identity("partner", now);
    session.choose_relationship("married", now);
    session.toggle_goal("heal");
    session.submit_goals(now);

    while let Some(step) = session.screen().and_then(quiz_step) {
        session.answer_quiz(step.options[0], now);
    }

    // Processing: stage flip, then auto-advance.
    while session.screen() == Some(Screen::Processing) {
        let Some(at) = session.next_fire_at() else { break };
        now = at;
        session.tick(now);
    }

    session.continue_diagnosis(now);
    session.subscribe(now);

    if share {
        session.share_invite(now);
        session.join_partner(now);
        session.set_setup_field(Some("Arjun"), Some("1994-03-21"), Some("Male"));
        session.submit_setup(now);
        if let Some(at) = session.next_fire_at() {
            now = at;
        }
        session.tick(now);
    } else {
        session.skip_invite(now);
    }

    let visited: Vec<Screen> = session
        .events()
        .iter()
        .filter_map(|e| match e {
            Event::ScreenEntered { screen, .. } => Some(*screen),
            _ => None,
        })
        .collect();
    let carousel_advances = session
        .events()
        .iter()
        .filter(|e| matches!(e, Event::CarouselAdvanced { .. }))
        .count();
    let report = WalkReport {
        steps: visited.len() + carousel_advances,
        visited,
        carousel_advances,
    };
    (report, session)
}
