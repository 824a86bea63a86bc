use clap::Subcommand;
use laya_core::home::plan::{Assignee, EventKind, PlanView};
use uuid::Uuid;

use crate::commands::home::require_home;
use crate::state::{CliResult, Ctx};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Print the plan tab (tasks, notes, calendar) as JSON
    Show,
    /// Switch the plan sub-view (calendar, todos, notes)
    View { view: String },
    /// Toggle a task's completion by list position (1-based)
    Toggle { index: usize },
    /// Add a shared task
    AddTask {
        title: String,
        /// me, partner or both
        #[arg(long, default_value = "both")]
        assignee: String,
        #[arg(long)]
        category: Option<String>,
    },
    /// Send a gentle reminder for a task
    Nudge { index: usize },
    /// Add a shared note
    AddNote {
        title: String,
        content: String,
        #[arg(long)]
        pinned: bool,
    },
    /// Toggle a note's pin by list position (1-based)
    Pin { index: usize },
    /// Add a calendar event on a day of the displayed month
    AddEvent {
        date: u8,
        title: String,
        #[arg(long)]
        time: Option<String>,
        /// user, partner, us or milestone
        #[arg(long, default_value = "us")]
        kind: String,
    },
    /// Send a date-night invite
    DateInvite,
    /// Share your availability
    ShareAvailability,
}

fn parse_view(s: &str) -> Result<PlanView, String> {
    match s {
        "calendar" => Ok(PlanView::Calendar),
        "todos" => Ok(PlanView::Todos),
        "notes" => Ok(PlanView::Notes),
        other => Err(format!("unknown plan view: {other}")),
    }
}

fn parse_assignee(s: &str) -> Result<Assignee, String> {
    match s {
        "me" => Ok(Assignee::User),
        "partner" => Ok(Assignee::Partner),
        "both" => Ok(Assignee::Both),
        other => Err(format!("unknown assignee: {other}")),
    }
}

fn parse_kind(s: &str) -> Result<EventKind, String> {
    match s {
        "user" => Ok(EventKind::User),
        "partner" => Ok(EventKind::Partner),
        "us" => Ok(EventKind::Us),
        "milestone" => Ok(EventKind::Milestone),
        other => Err(format!("unknown event kind: {other}")),
    }
}

fn nth_id<T>(items: &[T], index: usize, what: &str, id_of: impl Fn(&T) -> Uuid) -> Result<Uuid, String> {
    index
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .map(id_of)
        .ok_or_else(|| format!("no {what} at position {index}"))
}

pub fn run(action: PlanAction, ctx: &Ctx) -> CliResult {
    let mut session = ctx.load()?;
    require_home(&session)?;
    let partner = session.partner_name().to_string();
    match action {
        PlanAction::Show => {
            if let Some(home) = session.home() {
                println!("{}", serde_json::to_string_pretty(&home.plan)?);
            }
        }
        PlanAction::View { view } => {
            let view = parse_view(&view)?;
            if let Some(home) = session.home_mut() {
                home.plan.select_view(view);
            }
        }
        PlanAction::Toggle { index } => {
            if let Some(home) = session.home_mut() {
                let id = nth_id(&home.plan.tasks, index, "task", |t| t.id)?;
                let task = home.plan.toggle_task(id)?;
                println!("{}: {}", task.title, if task.completed { "done" } else { "open" });
            }
        }
        PlanAction::AddTask { title, assignee, category } => {
            let assignee = parse_assignee(&assignee)?;
            if let Some(home) = session.home_mut() {
                let task = home.plan.add_task(title, assignee, category);
                println!("task added: {}", task.title);
            }
        }
        PlanAction::Nudge { index } => {
            if let Some(home) = session.home() {
                let id = nth_id(&home.plan.tasks, index, "task", |t| t.id)?;
                println!("{}", home.plan.nudge_task(id, &partner)?);
            }
        }
        PlanAction::AddNote { title, content, pinned } => {
            if let Some(home) = session.home_mut() {
                let note = home.plan.add_note(title, content, "rgba(247, 183, 49, 0.1)", pinned);
                println!("note added: {}", note.title);
            }
        }
        PlanAction::Pin { index } => {
            if let Some(home) = session.home_mut() {
                let id = nth_id(&home.plan.notes, index, "note", |n| n.id)?;
                let note = home.plan.toggle_pin(id)?;
                println!("{}: {}", note.title, if note.pinned { "pinned" } else { "unpinned" });
            }
        }
        PlanAction::AddEvent { date, title, time, kind } => {
            let kind = parse_kind(&kind)?;
            if let Some(home) = session.home_mut() {
                let event = home.plan.add_event(date, title, time, kind);
                println!("event added on day {}: {}", event.date, event.title);
            }
        }
        PlanAction::DateInvite => {
            if let Some(home) = session.home() {
                println!("{}", home.plan.send_date_invite(&partner));
            }
        }
        PlanAction::ShareAvailability => {
            if let Some(home) = session.home() {
                println!("{}", home.plan.share_availability(&partner));
            }
        }
    }
    ctx.save(&session)?;
    Ok(())
}
