//! Plain-text rendering of the current screen.
//!
//! A `View` is a flat, serializable snapshot: the screen id, a title, the
//! body lines, and the actions available from here. The front end prints it
//! (or serializes it); the session never depends on it.

use serde::{Deserialize, Serialize};

use crate::funnel::{
    quiz_step, GENDER_OPTIONS, GOAL_CHOICES, IDENTITY_CHOICES, PAYWALL_FEATURES, PAYWALL_PLANS,
    RELATIONSHIP_CHOICES,
};
use crate::home::{HomeState, HomeTab, DAY_STREAK, MOOD_LEVELS, QUICK_NUDGES};
use crate::screen::Screen;
use crate::session::{LocalState, Session};

/// A rendered screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// Raw screen id, or empty for the blank state.
    pub screen_id: String,
    pub title: String,
    pub lines: Vec<String>,
    /// Action hints, "command: description".
    pub actions: Vec<String>,
}

impl View {
    fn blank() -> View {
        View {
            screen_id: String::new(),
            title: String::new(),
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }
}

/// Render the session's current screen.
pub fn render(session: &Session) -> View {
    let Some(screen) = session.screen() else {
        return View::blank();
    };
    let mut view = View {
        screen_id: screen.id().to_string(),
        title: String::new(),
        lines: Vec::new(),
        actions: Vec::new(),
    };
    match screen {
        Screen::Splash => {
            view.title = "Laya".to_string();
            view.lines.push("Find Your Rhythm".to_string());
            view.actions.push("tick: wait for auto-advance".to_string());
        }
        Screen::Onboarding => {
            if let LocalState::Carousel(carousel) = session.local() {
                let slide = carousel.current();
                view.title = slide.headline.to_string();
                view.lines.push(slide.body.to_string());
                view.actions.push(format!("next: {}", carousel.cta()));
            }
        }
        Screen::Identity => {
            view.title = "Who are we syncing with today?".to_string();
            for choice in &IDENTITY_CHOICES {
                view.lines.push(format!("[{}] {}", choice.value, choice.label));
            }
            view.actions.push("identity <value>: choose".to_string());
        }
        Screen::Relationship => {
            view.title = "Define your current rhythm.".to_string();
            for choice in &RELATIONSHIP_CHOICES {
                let marker = if choice.highlight { " *" } else { "" };
                view.lines
                    .push(format!("[{}] {}{marker}", choice.value, choice.label));
            }
            view.actions.push("relationship <value>: choose".to_string());
        }
        Screen::Goals => {
            view.title = "What brings you to Laya?".to_string();
            view.lines.push("Select all that apply".to_string());
            if let LocalState::Goals(goals) = session.local() {
                for choice in &GOAL_CHOICES {
                    let mark = if goals.is_selected(choice.value) { "x" } else { " " };
                    view.lines
                        .push(format!("({mark}) [{}] {}", choice.value, choice.label));
                }
                view.actions.push("goal <value>: toggle".to_string());
                if goals.can_submit() {
                    view.actions.push("continue: submit goals".to_string());
                }
            }
        }
        Screen::Quiz1 | Screen::Quiz2 | Screen::Quiz3 | Screen::Vulnerability => {
            if let Some(step) = quiz_step(screen) {
                view.title = step.question.to_string();
                view.lines.push(format!("Progress: {}%", step.progress));
                if step.darker {
                    view.lines.push("(dimmed)".to_string());
                }
                for option in step.options {
                    view.lines.push(format!("- {option}"));
                }
                view.actions.push("answer <option>: choose".to_string());
            }
        }
        Screen::Processing => {
            if let LocalState::Processing(processing) = session.local() {
                view.title = processing.message().to_string();
                view.actions.push("tick: wait for auto-advance".to_string());
            }
        }
        Screen::Diagnosis => {
            view.title = "Your Laya Analysis".to_string();
            view.lines.push(
                "You have a strong foundation in Trust, but your Communication Rhythm is out of phase."
                    .to_string(),
            );
            view.lines
                .push("Your Laya can be synchronized in 28 days.".to_string());
            view.actions.push("continue: See My Harmony Plan".to_string());
        }
        Screen::Paywall => {
            view.title = "Unlock Your Harmony Plan".to_string();
            for feature in &PAYWALL_FEATURES {
                view.lines.push(format!("✓ {feature}"));
            }
            if let LocalState::Paywall(paywall) = session.local() {
                for plan in &PAYWALL_PLANS {
                    let mark = if paywall.selected_plan == plan.id { ">" } else { " " };
                    let badge = plan.badge.map(|b| format!(" — {b}")).unwrap_or_default();
                    view.lines.push(format!(
                        "{mark} [{}] {} {}{}{badge}",
                        plan.id, plan.name, plan.price, plan.period
                    ));
                }
            }
            view.lines.push("100% Risk-Free. Cancel anytime.".to_string());
            view.actions.push("plan <id>: select plan".to_string());
            view.actions
                .push("subscribe: Start My Transformation".to_string());
        }
        Screen::Invite => {
            view.title = "Laya is better together.".to_string();
            view.lines.push("Invite your partner for FREE.".to_string());
            view.lines
                .push("They skip the paywall. You've got them covered.".to_string());
            view.actions.push("share: Share Invite Link".to_string());
            view.actions.push("skip: I'll do this later".to_string());
        }
        Screen::PartnerWelcome => {
            let host = session.welcome_display_name();
            view.title = format!("Welcome to {host}'s Oasis");
            view.lines.push(format!(
                "{host} has invited you to sync your rhythm together. Your premium access is already covered."
            ));
            view.lines.push("Premium Unlocked".to_string());
            view.actions.push("join: Join the Rhythm".to_string());
        }
        Screen::PartnerSetup => {
            if let LocalState::Setup(setup) = session.local() {
                if setup.success {
                    view.title = "Sync Complete".to_string();
                    view.actions.push("tick: wait for auto-advance".to_string());
                } else {
                    view.title = "Let's get to know you".to_string();
                    view.lines
                        .push("Just 3 quick things to personalize your experience".to_string());
                    view.lines.push(format!("Your Name: {}", setup.form.name));
                    view.lines.push(format!("Date of Birth: {}", setup.form.dob));
                    view.lines.push(format!(
                        "Gender: {} (options: {})",
                        setup.form.gender,
                        GENDER_OPTIONS.join(", ")
                    ));
                    view.actions
                        .push("set <name|dob|gender> <value>: fill the form".to_string());
                    if setup.form.is_complete() {
                        view.actions.push("continue: submit".to_string());
                    }
                }
            }
        }
        Screen::Success => {
            view.title = "Welcome to Laya".to_string();
            view.lines.push("Your transformation begins now.".to_string());
        }
        Screen::Home => {
            if let LocalState::Home(home) = session.local() {
                render_home(&mut view, home, session);
            }
        }
        Screen::MemoriesTimeline | Screen::MemoriesDetail | Screen::MemoriesAddForm => {
            render_memories_screen(&mut view, screen, session);
        }
    }
    view
}

fn render_home(view: &mut View, home: &HomeState, session: &Session) {
    match home.active_tab {
        HomeTab::Home => {
            view.title = format!("{}, {}", HomeState::greeting(9), session.user_name());
            view.lines.push(format!("🔥 {DAY_STREAK} day streak"));
            let mood = home
                .user_mood
                .and_then(|v| MOOD_LEVELS.iter().find(|m| m.value == v))
                .map(|m| format!("{} {}", m.emoji, m.label))
                .unwrap_or_else(|| "not logged".to_string());
            view.lines.push(format!("Your mood: {mood}"));
            view.lines.push(match home.partner_mood {
                Some(_) => format!("{} has logged a mood", session.partner_name()),
                None => format!("{} hasn't logged a mood yet", session.partner_name()),
            });
            view.lines
                .push(home.daily_question(session.partner_name()));
            if home.partner_has_answered {
                view.lines
                    .push("Answer to reveal what your partner said.".to_string());
            }
            for (i, nudge) in QUICK_NUDGES.iter().enumerate() {
                view.lines.push(format!("[{i}] {} {}", nudge.icon, nudge.label));
            }
            view.actions.push("mood <1-5>: log mood".to_string());
            view.actions.push("nudge <index>: quick nudge".to_string());
            view.actions.push("daily <text> / daily-share".to_string());
        }
        HomeTab::Plan => {
            view.title = "Our Plan".to_string();
            for task in &home.plan.tasks {
                let mark = if task.completed { "x" } else { " " };
                let overdue = if task.overdue { " (overdue)" } else { "" };
                view.lines.push(format!("[{mark}] {}{overdue}", task.title));
            }
            for note in &home.plan.notes {
                let pin = if note.pinned { "📌 " } else { "" };
                view.lines.push(format!("{pin}{}: {}", note.title, note.content));
            }
            for event in &home.plan.events {
                let time = event.time.as_deref().unwrap_or("all day");
                view.lines
                    .push(format!("{}. {} ({time})", event.date, event.title));
            }
            view.actions.push("task-toggle <id> / note-pin <id>".to_string());
        }
        HomeTab::Memories => {
            view.title = "Our Memories".to_string();
            for memory in &home.memories.memories {
                view.lines.push(format!("{} — {}", memory.title, memory.date));
            }
            view.actions.push("memory-add: open the add form".to_string());
        }
        HomeTab::Gifting => {
            view.title = "Partner Perks".to_string();
            for offer in &crate::home::gifting::AFFILIATE_OFFERS {
                let claimed = if home.gifting.is_claimed(offer.id) {
                    " (claimed)"
                } else {
                    ""
                };
                view.lines.push(format!(
                    "[{}] {} {} — {} · {} left{claimed}",
                    offer.id,
                    offer.emoji,
                    offer.partner,
                    offer.discount,
                    home.gifting.remaining(offer.id),
                ));
            }
            view.actions.push("claim <id> / visit <id>".to_string());
        }
    }
    view.actions.push("tab <home|plan|memories|gifting>".to_string());
}

fn render_memories_screen(view: &mut View, screen: Screen, session: &Session) {
    let Some(memories) = session.memories() else {
        return;
    };
    match screen {
        Screen::MemoriesTimeline => {
            view.title = "Our Memories".to_string();
            for memory in &memories.memories {
                view.lines.push(format!("{} — {}", memory.title, memory.date));
            }
            view.actions.push("select <id>: open detail".to_string());
        }
        Screen::MemoriesDetail => {
            if let Some(memory) = memories.selected_memory() {
                view.title = memory.title.clone();
                view.lines.push(memory.date.clone());
                view.lines.push(memory.note.clone());
                if memory.is_special_occasion {
                    view.lines.push("Special occasion".to_string());
                }
            }
            view.actions.push("close: back to timeline".to_string());
        }
        Screen::MemoriesAddForm => {
            view.title = "Add a Memory".to_string();
            for suggestion in &crate::home::memories::MILESTONE_SUGGESTIONS {
                view.lines.push(format!("Suggestion: {suggestion}"));
            }
            view.actions.push("save: add the memory".to_string());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_renders() {
        for screen in Screen::all() {
            let mut session = Session::new();
            session.jump(screen.id(), 0);
            let view = render(&session);
            assert_eq!(view.screen_id, screen.id(), "wrong id for {screen}");
            assert!(!view.title.is_empty(), "empty title for {screen}");
        }
    }

    #[test]
    fn blank_state_renders_empty() {
        let mut session = Session::new();
        session.jump("nope", 0);
        let view = render(&session);
        assert!(view.screen_id.is_empty());
        assert!(view.title.is_empty());
        assert!(view.lines.is_empty());
        assert!(view.actions.is_empty());
    }

    #[test]
    fn goals_only_offers_submit_when_selected() {
        let mut session = Session::new();
        session.jump("goals", 0);
        assert!(!render(&session).actions.iter().any(|a| a.starts_with("continue")));
        session.toggle_goal("spark");
        assert!(render(&session).actions.iter().any(|a| a.starts_with("continue")));
    }

    #[test]
    fn partner_welcome_name_follows_role() {
        // Reached through the debug navigator the role is still primary.
        let mut session = Session::new();
        session.jump("partner-welcome", 0);
        assert_eq!(render(&session).title, "Welcome to Priya's Oasis");

        // Reached through the share exit the role has flipped.
        let mut session = Session::new();
        session.jump("invite", 0);
        session.share_invite(0);
        assert_eq!(render(&session).title, "Welcome to Arjun's Oasis");
    }

    #[test]
    fn processing_title_tracks_the_stage() {
        let mut session = Session::new();
        session.jump("processing", 0);
        assert_eq!(render(&session).title, "Analyzing your Laya...");
        session.tick(1_500);
        assert_eq!(render(&session).title, "Identifying your Rhythm...");
    }
}
