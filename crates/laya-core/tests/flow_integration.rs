//! End-to-end coverage of the demo flow: the full funnel in both invite
//! branches, debug-navigator jumps, timer cancellation on exit, and the
//! remount-reset of screen-local state.

use laya_core::{
    forward_walk, render, ActorRole, AnswerKey, AnswerValue, DemoConfig, Event, HomeTab, Screen,
    Session,
};

#[test]
fn full_funnel_skip_branch() {
    let (report, session) = forward_walk(false, DemoConfig::default());

    assert_eq!(report.steps, 16);
    assert_eq!(report.carousel_advances, 2);
    assert_eq!(session.screen(), Some(Screen::Home));
    assert_eq!(session.actor_role(), ActorRole::Primary);
    assert_eq!(session.user_name(), "Priya");

    // The funnel visits every screen of the main line exactly once.
    let expected = [
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
        Screen::Home,
    ];
    assert_eq!(report.visited, expected);
}

#[test]
fn full_funnel_share_branch() {
    let (report, session) = forward_walk(true, DemoConfig::default());

    assert_eq!(report.steps, 18);
    assert_eq!(session.screen(), Some(Screen::Home));
    assert_eq!(session.actor_role(), ActorRole::Partner);
    // The partner's setup renamed the session.
    assert_eq!(session.user_name(), "Arjun");
    assert_eq!(session.partner_name(), "Arjun");

    let tail: Vec<Screen> = report.visited[13..].to_vec();
    assert_eq!(
        tail,
        [Screen::PartnerWelcome, Screen::PartnerSetup, Screen::Home]
    );
}

#[test]
fn answers_accumulate_in_order() {
    let (_, session) = forward_walk(false, DemoConfig::default());
    let keys: Vec<AnswerKey> = session.answers().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        [
            AnswerKey::Identity,
            AnswerKey::Relationship,
            AnswerKey::Goals,
            AnswerKey::Quiz1,
            AnswerKey::Quiz2,
            AnswerKey::Quiz3,
            AnswerKey::Vulnerability,
            AnswerKey::Plan,
        ]
    );
    assert_eq!(
        session.answers().get(AnswerKey::Plan),
        Some(&AnswerValue::single("annual"))
    );
}

#[test]
fn every_screen_is_reachable_by_raw_jump() {
    for screen in Screen::all() {
        let mut session = Session::new();
        session.jump(screen.id(), 0);
        assert_eq!(session.screen(), Some(*screen));
        let view = render(&session);
        assert_eq!(view.screen_id, screen.id());
    }
}

#[test]
fn unknown_jump_is_blank_not_an_error() {
    let mut session = Session::new();
    for bogus in ["quiz4", "Home", "", "memory-detail", "17"] {
        session.jump(bogus, 0);
        assert_eq!(session.screen(), None, "{bogus:?} should blank");
        let view = render(&session);
        assert!(view.screen_id.is_empty());
        assert!(view.lines.is_empty());
    }
    // Still recoverable.
    session.jump("diagnosis", 0);
    assert_eq!(session.screen(), Some(Screen::Diagnosis));
}

#[test]
fn jumps_never_touch_answers_or_role() {
    let mut session = Session::new();
    for screen in Screen::all() {
        session.jump(screen.id(), 0);
    }
    assert!(session.answers().is_empty());
    assert_eq!(session.actor_role(), ActorRole::Primary);
}

#[test]
fn rewriting_an_identical_answer_is_a_no_op() {
    let mut session = Session::new();
    session.jump("identity", 0);
    assert!(session.choose_identity("partner", 0));
    session.jump("identity", 0);
    assert!(session.choose_identity("partner", 0));
    session.take_events();

    // Same value again: recorded count stays the same, value unchanged.
    session.jump("identity", 0);
    session.choose_identity("partner", 0);
    assert_eq!(
        session.answers().get(AnswerKey::Identity),
        Some(&AnswerValue::single("partner"))
    );
    assert_eq!(session.answers().len(), 1);

    // A different value wins.
    session.jump("identity", 0);
    session.choose_identity("fiance", 0);
    assert_eq!(
        session.answers().get(AnswerKey::Identity),
        Some(&AnswerValue::single("fiance"))
    );
    assert_eq!(session.answers().len(), 1);
}

#[test]
fn invalid_choices_are_rejected() {
    let mut session = Session::new();
    session.jump("identity", 0);
    assert!(!session.choose_identity("sibling", 0));
    assert_eq!(session.screen(), Some(Screen::Identity));

    session.jump("quiz1", 0);
    assert!(!session.answer_quiz("Some other option", 0));
    assert_eq!(session.screen(), Some(Screen::Quiz1));
    assert!(session.answers().is_empty());
}

#[test]
fn role_switch_is_one_way() {
    let mut session = Session::new();
    session.jump("invite", 0);
    assert!(session.share_invite(0));
    assert_eq!(session.actor_role(), ActorRole::Partner);

    // Wandering around afterwards never reverts the role.
    for screen in Screen::all() {
        session.jump(screen.id(), 0);
        assert_eq!(session.actor_role(), ActorRole::Partner);
    }
}

#[test]
fn splash_timer_cancelled_by_early_jump() {
    let mut session = Session::new();
    session.jump("paywall", 1_000);
    session.tick(60_000);
    // Without the cancel this would have landed on onboarding.
    assert_eq!(session.screen(), Some(Screen::Paywall));
}

#[test]
fn processing_timers_cancelled_by_early_jump() {
    let mut session = Session::new();
    session.jump("processing", 0);
    assert_eq!(session.pending_timers(), 2);
    session.jump("home", 100);
    assert_eq!(session.pending_timers(), 0);
    session.tick(60_000);
    assert_eq!(session.screen(), Some(Screen::Home));
}

#[test]
fn cancelled_timers_are_observable_in_events() {
    let mut session = Session::new();
    session.jump("home", 0);
    let events = session.take_events();
    let cancelled = events
        .iter()
        .find_map(|e| match e {
            Event::TimersCancelled { owner, count, .. } => Some((*owner, *count)),
            _ => None,
        })
        .expect("splash cancellation event");
    assert_eq!(cancelled, (Screen::Splash, 1));
    assert!(!events
        .iter()
        .any(|e| matches!(e, Event::TimerFired { .. })));
}

#[test]
fn home_tab_state_resets_on_remount() {
    let mut session = Session::new();
    session.jump("home", 0);
    session.home_mut().unwrap().select_tab(HomeTab::Plan);
    let task_id = session.home().unwrap().plan.tasks[0].id;
    session.home_mut().unwrap().plan.toggle_task(task_id).unwrap();
    assert!(session.home().unwrap().plan.tasks[0].completed);

    // Leave and come back: fixtures are rebuilt from scratch.
    session.jump("memories-timeline", 0);
    session.jump("home", 0);
    let home = session.home().unwrap();
    assert_eq!(home.active_tab, HomeTab::Home);
    assert!(!home.plan.tasks[0].completed);
}

#[test]
fn events_serialize_with_a_type_tag() {
    let (_, mut session) = forward_walk(true, DemoConfig::default());
    let events = session.take_events();
    assert!(!events.is_empty());
    for event in &events {
        let json = serde_json::to_value(event).unwrap();
        assert!(json.get("type").is_some(), "untagged event: {json}");
        assert!(json.get("at").is_some(), "missing timestamp: {json}");
    }
}

#[test]
fn config_shortens_the_cosmetic_delays() {
    let config = DemoConfig {
        splash_ms: 10,
        processing_stage_ms: 5,
        processing_done_ms: 20,
        success_hold_ms: 10,
        ..DemoConfig::default()
    };
    let (report, session) = forward_walk(true, config);
    assert_eq!(report.steps, 18);
    assert_eq!(session.screen(), Some(Screen::Home));
}
