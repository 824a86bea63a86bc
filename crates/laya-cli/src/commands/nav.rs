use clap::Subcommand;
use laya_core::{navigator, render};

use crate::state::{CliResult, Ctx};

#[derive(Subcommand)]
pub enum NavAction {
    /// List every screen with its navigator label
    List,
    /// Jump straight to a screen by raw id (unknown ids blank the view)
    Jump { id: String },
    /// Render the current screen
    Show,
}

pub fn run(action: NavAction, ctx: &Ctx) -> CliResult {
    match action {
        NavAction::List => {
            for entry in navigator::entries() {
                println!("{:<24} {}", entry.label, entry.id);
            }
        }
        NavAction::Jump { id } => {
            let mut session = ctx.load()?;
            if navigator::jump(&mut session, &id, ctx.now_ms()).is_none() {
                tracing::debug!(raw_id = %id, "unknown screen id, blanked");
            }
            println!("{}", serde_json::to_string_pretty(&render(&session))?);
            ctx.save(&session)?;
        }
        NavAction::Show => {
            let session = ctx.load()?;
            println!("{}", serde_json::to_string_pretty(&render(&session))?);
            ctx.save(&session)?;
        }
    }
    Ok(())
}
