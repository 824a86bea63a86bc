use clap::Subcommand;

use crate::commands::home::require_home;
use crate::state::{CliResult, Ctx};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the profile as JSON
    Show,
    /// Pick an avatar from the fixed choices
    Avatar { emoji: String },
    /// Edit contact fields
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Send feedback
    Feedback { text: String },
    /// Simulated account deletion
    Delete,
    /// Simulated logout
    Logout,
}

pub fn run(action: ProfileAction, ctx: &Ctx) -> CliResult {
    let mut session = ctx.load()?;
    require_home(&session)?;
    match action {
        ProfileAction::Show => {
            if let Some(home) = session.home() {
                println!("{}", serde_json::to_string_pretty(&home.profile)?);
            }
        }
        ProfileAction::Avatar { emoji } => {
            if let Some(home) = session.home_mut() {
                home.profile.pick_avatar(&emoji);
                println!("avatar: {}", home.profile.avatar);
            }
        }
        ProfileAction::Edit { name, email, phone } => {
            if let Some(home) = session.home_mut() {
                home.profile.edit(name, email, phone);
                println!("profile updated");
            }
        }
        ProfileAction::Feedback { text } => {
            if let Some(home) = session.home_mut() {
                home.profile.feedback_draft = text;
                let ack = home.profile.submit_feedback()?;
                println!("{ack}");
            }
        }
        ProfileAction::Delete => {
            if let Some(home) = session.home() {
                println!("{}", home.profile.delete_account());
            }
        }
        ProfileAction::Logout => {
            if let Some(home) = session.home() {
                println!("{}", home.profile.logout());
            }
        }
    }
    ctx.save(&session)?;
    Ok(())
}
