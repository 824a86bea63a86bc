//! Memories tab: the polaroid timeline.
//!
//! Memory cards alternate sides down a centre line with a slight rotation,
//! like photos pinned to a thread. A memory flagged as a special occasion
//! with an annual reminder also lands on the shared calendar -- in this
//! demo that is just part of the acknowledgement string.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HomeError;

/// Which side of the timeline thread a card hangs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub id: Uuid,
    pub title: String,
    pub date: String,
    pub note: String,
    pub image_url: String,
    pub is_special_occasion: bool,
    pub remind_annually: bool,
    pub side: Side,
    /// Cosmetic tilt in degrees.
    pub rotation: f32,
}

pub const MILESTONE_SUGGESTIONS: [&str; 8] = [
    "First Date",
    "First Trip",
    "Roka Ceremony",
    "First Diwali",
    "The Proposal",
    "Wedding Day",
    "First Rain",
    "Anniversary",
];

/// A new memory before it gets an id and a slot on the thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryDraft {
    pub title: String,
    pub date: String,
    pub note: String,
    pub image_url: String,
    pub is_special_occasion: bool,
    pub remind_annually: bool,
}

/// State of the memories tab (also backs the standalone memories screens).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoriesState {
    pub memories: Vec<Memory>,
    pub selected: Option<Uuid>,
}

impl MemoriesState {
    pub fn new() -> Self {
        Self {
            memories: seed_memories(),
            selected: None,
        }
    }

    /// Add a memory from the form; returns the acknowledgement string to
    /// show.
    pub fn add(&mut self, draft: MemoryDraft) -> (Uuid, String) {
        let side = self
            .memories
            .last()
            .map(|m| m.side.flip())
            .unwrap_or(Side::Left);
        let rotation = if self.memories.len() % 2 == 0 { -2.0 } else { 1.5 };
        let id = Uuid::new_v4();
        let on_calendar = draft.is_special_occasion && draft.remind_annually;
        self.memories.push(Memory {
            id,
            title: draft.title,
            date: draft.date,
            note: draft.note,
            image_url: draft.image_url,
            is_special_occasion: draft.is_special_occasion,
            remind_annually: draft.remind_annually,
            side,
            rotation,
        });
        let ack = if on_calendar {
            "Memory saved! Added to calendar!".to_string()
        } else {
            "Memory saved!".to_string()
        };
        (id, ack)
    }

    /// Open the detail view for one card.
    pub fn select(&mut self, id: Uuid) -> Result<&Memory, HomeError> {
        let memory = self
            .memories
            .iter()
            .find(|m| m.id == id)
            .ok_or(HomeError::UnknownMemory(id))?;
        self.selected = Some(id);
        Ok(memory)
    }

    pub fn selected_memory(&self) -> Option<&Memory> {
        let id = self.selected?;
        self.memories.iter().find(|m| m.id == id)
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }
}

impl Default for MemoriesState {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_memories() -> Vec<Memory> {
    vec![
        Memory {
            id: Uuid::new_v4(),
            title: "Goa Escape".to_string(),
            date: "Dec 12, 2023".to_string(),
            note: "Our first beach sunset together. The waves, the warmth, the endless conversations."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800".to_string(),
            is_special_occasion: true,
            remind_annually: true,
            side: Side::Left,
            rotation: -2.0,
        },
        Memory {
            id: Uuid::new_v4(),
            title: "Brought Max Home".to_string(),
            date: "Jan 14, 2024".to_string(),
            note: "Our little furball joined the family. Best decision ever!".to_string(),
            image_url: "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=800"
                .to_string(),
            is_special_occasion: false,
            remind_annually: false,
            side: Side::Right,
            rotation: 1.5,
        },
        Memory {
            id: Uuid::new_v4(),
            title: "First Diwali Together".to_string(),
            date: "Nov 12, 2023".to_string(),
            note: "Lights, laughter, and endless mithai. You wore that stunning red saree."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1605274313962-2bf61a3c4df6?w=800"
                .to_string(),
            is_special_occasion: true,
            remind_annually: true,
            side: Side::Left,
            rotation: -1.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_hang_on_alternating_sides() {
        let memories = MemoriesState::new();
        assert_eq!(memories.memories.len(), 3);
        assert_eq!(memories.memories[0].side, Side::Left);
        assert_eq!(memories.memories[1].side, Side::Right);
        assert!(memories.selected.is_none());
    }

    #[test]
    fn add_continues_the_alternation() {
        let mut memories = MemoriesState::new();
        let last_side = memories.memories.last().unwrap().side;
        let (id, ack) = memories.add(MemoryDraft {
            title: "Monsoon Drive".to_string(),
            date: "Jul 2, 2024".to_string(),
            ..MemoryDraft::default()
        });
        assert_eq!(ack, "Memory saved!");
        let added = memories.select(id).unwrap();
        assert_eq!(added.side, last_side.flip());
    }

    #[test]
    fn annual_special_occasion_lands_on_calendar() {
        let mut memories = MemoriesState::new();
        let (_, ack) = memories.add(MemoryDraft {
            title: "Roka Ceremony".to_string(),
            is_special_occasion: true,
            remind_annually: true,
            ..MemoryDraft::default()
        });
        assert_eq!(ack, "Memory saved! Added to calendar!");
    }

    #[test]
    fn detail_selection_round_trips() {
        let mut memories = MemoriesState::new();
        let id = memories.memories[2].id;
        assert_eq!(memories.select(id).unwrap().title, "First Diwali Together");
        assert!(memories.selected_memory().is_some());
        memories.close_detail();
        assert!(memories.selected_memory().is_none());
        assert!(matches!(
            memories.select(Uuid::new_v4()),
            Err(HomeError::UnknownMemory(_))
        ));
    }
}
