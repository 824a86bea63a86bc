//! Profile overlay: avatar, editable contact fields, feedback, and the
//! destructive-action confirm flows. Everything terminates in a simulated
//! acknowledgement; nothing leaves the session.

use serde::{Deserialize, Serialize};

use crate::error::HomeError;

pub const AVATAR_CHOICES: [&str; 8] = ["😊", "😎", "🥰", "🤓", "😇", "🦄", "🐼", "🌟"];

/// State of the profile overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileState {
    pub avatar: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub feedback_draft: String,
}

impl ProfileState {
    pub fn new(user_name: &str) -> Self {
        Self {
            avatar: "😊".to_string(),
            name: user_name.to_string(),
            email: "priya.sharma@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            feedback_draft: String::new(),
        }
    }

    pub fn pick_avatar(&mut self, avatar: &str) {
        if AVATAR_CHOICES.contains(&avatar) {
            self.avatar = avatar.to_string();
        }
    }

    pub fn edit(&mut self, name: Option<String>, email: Option<String>, phone: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
    }

    /// Submit feedback. Gated on non-empty text.
    pub fn submit_feedback(&mut self) -> Result<&'static str, HomeError> {
        if self.feedback_draft.trim().is_empty() {
            return Err(HomeError::EmptyFeedback);
        }
        self.feedback_draft.clear();
        Ok("Thank you for your feedback! We'll get back to you soon.")
    }

    /// Simulated account deletion acknowledgement.
    pub fn delete_account(&self) -> &'static str {
        "Account deletion initiated. You will receive a confirmation email."
    }

    /// Simulated logout acknowledgement.
    pub fn logout(&self) -> &'static str {
        "Logged out successfully"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_seed_contact_details() {
        let profile = ProfileState::new("Priya");
        assert_eq!(profile.name, "Priya");
        assert_eq!(profile.avatar, "😊");
        assert_eq!(profile.email, "priya.sharma@example.com");
    }

    #[test]
    fn avatar_must_come_from_the_picker() {
        let mut profile = ProfileState::new("Priya");
        profile.pick_avatar("🦄");
        assert_eq!(profile.avatar, "🦄");
        profile.pick_avatar("🗿");
        assert_eq!(profile.avatar, "🦄");
    }

    #[test]
    fn edit_updates_only_provided_fields() {
        let mut profile = ProfileState::new("Priya");
        profile.edit(Some("Priya S".to_string()), None, None);
        assert_eq!(profile.name, "Priya S");
        assert_eq!(profile.email, "priya.sharma@example.com");
    }

    #[test]
    fn feedback_requires_text() {
        let mut profile = ProfileState::new("Priya");
        assert_eq!(profile.submit_feedback(), Err(HomeError::EmptyFeedback));
        profile.feedback_draft = "Love the memories wall".to_string();
        assert!(profile.submit_feedback().is_ok());
        assert!(profile.feedback_draft.is_empty());
    }
}
