//! Plan tab: shared calendar, to-dos and notes.
//!
//! All three stores are mock fixtures local to the tab. Mutations: toggle a
//! task, pin a note, add entries, and a handful of simulated
//! acknowledgements (nudge, date invite, availability share).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HomeError;

/// Which sub-view of the plan tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanView {
    Calendar,
    Todos,
    Notes,
}

/// Who a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assignee {
    User,
    Partner,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub assigned_to: Assignee,
    pub completed: bool,
    pub overdue: bool,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Pastel background as an rgba string.
    pub color: String,
    pub pinned: bool,
}

/// Calendar entry kinds, colour-coded in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    User,
    Partner,
    Us,
    Milestone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Uuid,
    /// Day of the displayed month.
    pub date: u8,
    pub title: String,
    pub time: Option<String>,
    pub kind: EventKind,
    pub icon: Option<String>,
}

/// State of the plan tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanState {
    pub view: PlanView,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub events: Vec<CalendarEvent>,
}

impl PlanState {
    pub fn new() -> Self {
        Self {
            view: PlanView::Calendar,
            tasks: seed_tasks(),
            notes: seed_notes(),
            events: seed_events(),
        }
    }

    pub fn select_view(&mut self, view: PlanView) {
        self.view = view;
    }

    /// Flip a task's completion state.
    pub fn toggle_task(&mut self, id: Uuid) -> Result<&Task, HomeError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(HomeError::UnknownTask(id))?;
        task.completed = !task.completed;
        Ok(task)
    }

    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        assigned_to: Assignee,
        category: Option<String>,
    ) -> &Task {
        self.tasks.push(Task {
            id: Uuid::new_v4(),
            title: title.into(),
            assigned_to,
            completed: false,
            overdue: false,
            category,
        });
        self.tasks.last().expect("just pushed")
    }

    /// Simulated reminder ping for a shared task.
    pub fn nudge_task(&self, id: Uuid, partner_name: &str) -> Result<String, HomeError> {
        if !self.tasks.iter().any(|t| t.id == id) {
            return Err(HomeError::UnknownTask(id));
        }
        Ok(format!("Gentle nudge sent to {partner_name} 🔔"))
    }

    pub fn add_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        color: impl Into<String>,
        pinned: bool,
    ) -> &Note {
        self.notes.push(Note {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            color: color.into(),
            pinned,
        });
        self.notes.last().expect("just pushed")
    }

    pub fn toggle_pin(&mut self, id: Uuid) -> Result<&Note, HomeError> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(HomeError::UnknownNote(id))?;
        note.pinned = !note.pinned;
        Ok(note)
    }

    pub fn add_event(
        &mut self,
        date: u8,
        title: impl Into<String>,
        time: Option<String>,
        kind: EventKind,
    ) -> &CalendarEvent {
        self.events.push(CalendarEvent {
            id: Uuid::new_v4(),
            date,
            title: title.into(),
            time,
            kind,
            icon: None,
        });
        self.events.last().expect("just pushed")
    }

    pub fn events_on(&self, date: u8) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(move |e| e.date == date)
    }

    /// Simulated acknowledgement strings for the add-modal flows.
    pub fn send_date_invite(&self, partner_name: &str) -> String {
        format!("Date invite sent to {partner_name}!")
    }

    pub fn share_availability(&self, partner_name: &str) -> String {
        format!("Availability shared with {partner_name}!")
    }
}

impl Default for PlanState {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_tasks() -> Vec<Task> {
    let seed = |title: &str, assigned_to, completed, overdue, category: &str| Task {
        id: Uuid::new_v4(),
        title: title.to_string(),
        assigned_to,
        completed,
        overdue,
        category: Some(category.to_string()),
    };
    vec![
        seed("Pay Electricity Bill", Assignee::User, false, true, "Finance"),
        seed("Book Flight Tickets for Goa", Assignee::Partner, false, false, "Travel"),
        seed("Call Plumber for Kitchen Sink", Assignee::Both, false, false, "Home"),
        seed("Buy Anniversary Gift", Assignee::User, true, false, "Social"),
    ]
}

fn seed_notes() -> Vec<Note> {
    let seed = |title: &str, content: &str, color: &str, pinned| Note {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: content.to_string(),
        color: color.to_string(),
        pinned,
    };
    vec![
        seed(
            "To Watch",
            "Panchayat Season 3, Laapataa Ladies, Heeramandi",
            "rgba(247, 183, 49, 0.1)",
            true,
        ),
        seed(
            "Grocery Run",
            "Oats, Almond Milk, Masala, Paneer, Tomatoes, Coriander",
            "rgba(78, 205, 196, 0.1)",
            false,
        ),
        seed(
            "Bali Trip Ideas",
            "Ubud rice terraces, Tanah Lot temple, Seminyak beach sunset",
            "rgba(142, 7, 95, 0.1)",
            false,
        ),
        seed(
            "Restaurant Wishlist",
            "Burma Burma, Masque, The Bombay Canteen",
            "rgba(247, 183, 49, 0.15)",
            false,
        ),
    ]
}

fn seed_events() -> Vec<CalendarEvent> {
    let seed = |date, title: &str, time: Option<&str>, kind, icon: Option<&str>| CalendarEvent {
        id: Uuid::new_v4(),
        date,
        title: title.to_string(),
        time: time.map(str::to_string),
        kind,
        icon: icon.map(str::to_string),
    };
    vec![
        seed(19, "First Diwali Together", None, EventKind::Milestone, Some("🪔")),
        seed(20, "Dinner at Burma Burma", Some("8:00 PM"), EventKind::Us, None),
        seed(22, "Client Meeting", Some("2:00 PM"), EventKind::User, None),
        seed(25, "Gym with Friends", Some("6:00 PM"), EventKind::Partner, None),
    ]
}
