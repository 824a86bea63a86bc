use clap::Subcommand;
use laya_core::home::memories::{MemoriesState, MemoryDraft, MILESTONE_SUGGESTIONS};
use laya_core::Session;

use crate::state::{CliResult, Ctx};

#[derive(Subcommand)]
pub enum MemoryAction {
    /// Print the timeline as JSON
    List,
    /// Open one memory's detail by list position (1-based)
    Show { index: usize },
    /// Pin a new memory to the timeline
    Add {
        title: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        note: String,
        #[arg(long, default_value = "")]
        image: String,
        /// Mark as a special occasion
        #[arg(long)]
        special: bool,
        /// Remind annually (with --special, also lands on the calendar)
        #[arg(long)]
        annual: bool,
    },
    /// Print the milestone title suggestions
    Suggestions,
}

/// Memories are reachable both as a home tab and as standalone screens.
fn view(session: &Session) -> Result<&MemoriesState, Box<dyn std::error::Error>> {
    session
        .memories()
        .or_else(|| session.home().map(|h| &h.memories))
        .ok_or_else(|| "no memories view here (try: laya-cli nav jump memories-timeline)".into())
}

fn view_mut(session: &mut Session) -> Result<&mut MemoriesState, Box<dyn std::error::Error>> {
    if session.memories().is_some() {
        return session
            .memories_mut()
            .ok_or_else(|| "no memories view here".into());
    }
    session
        .home_mut()
        .map(|h| &mut h.memories)
        .ok_or_else(|| "no memories view here (try: laya-cli nav jump memories-timeline)".into())
}

pub fn run(action: MemoryAction, ctx: &Ctx) -> CliResult {
    if let MemoryAction::Suggestions = action {
        for suggestion in &MILESTONE_SUGGESTIONS {
            println!("{suggestion}");
        }
        return Ok(());
    }

    let mut session = ctx.load()?;
    match action {
        MemoryAction::List => {
            let memories = view(&session)?;
            println!("{}", serde_json::to_string_pretty(&memories.memories)?);
        }
        MemoryAction::Show { index } => {
            let id = {
                let memories = view(&session)?;
                index
                    .checked_sub(1)
                    .and_then(|i| memories.memories.get(i))
                    .map(|m| m.id)
                    .ok_or_else(|| format!("no memory at position {index}"))?
            };
            let memory = view_mut(&mut session)?.select(id)?;
            println!("{}", serde_json::to_string_pretty(memory)?);
        }
        MemoryAction::Add { title, date, note, image, special, annual } => {
            let draft = MemoryDraft {
                title,
                date,
                note,
                image_url: image,
                is_special_occasion: special,
                remind_annually: annual,
            };
            let (_, ack) = view_mut(&mut session)?.add(draft);
            println!("{ack}");
        }
        MemoryAction::Suggestions => unreachable!("handled above"),
    }
    ctx.save(&session)?;
    Ok(())
}
