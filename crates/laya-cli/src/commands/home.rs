use clap::Subcommand;
use laya_core::{HomeTab, Session};

use crate::state::{CliResult, Ctx};

#[derive(Subcommand)]
pub enum HomeAction {
    /// Switch the bottom tab (home, plan, memories, gifting)
    Tab { id: String },
    /// Log today's mood on the 1-5 scale
    Mood { value: u8 },
    /// Send a quick nudge by index (0-3)
    Nudge { index: usize },
    /// Print today's shared question
    Question,
    /// Draft an answer to the daily question
    Daily { text: String },
    /// Share the drafted answer, revealing the partner's
    Share,
}

/// Home commands only make sense on the home screen; anywhere else the
/// dashboard state does not exist.
pub fn require_home(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    if session.home().is_none() {
        return Err("not on the home screen (try: laya-cli nav jump home)".into());
    }
    Ok(())
}

pub fn run(action: HomeAction, ctx: &Ctx) -> CliResult {
    let mut session = ctx.load()?;
    require_home(&session)?;
    match action {
        HomeAction::Tab { id } => {
            let tab = HomeTab::parse(&id).ok_or_else(|| format!("unknown tab: {id}"))?;
            if let Some(home) = session.home_mut() {
                home.select_tab(tab);
            }
            println!("tab: {}", tab.id());
        }
        HomeAction::Mood { value } => {
            session.log_mood(value)?;
            println!("mood logged: {value}");
        }
        HomeAction::Nudge { index } => {
            let label = session.send_nudge(index)?;
            println!("{label} sent!");
        }
        HomeAction::Question => {
            if let Some(home) = session.home() {
                println!("{}", home.daily_question(session.partner_name()));
            }
        }
        HomeAction::Daily { text } => {
            if let Some(home) = session.home_mut() {
                home.set_daily_answer(text);
            }
            println!("answer drafted");
        }
        HomeAction::Share => {
            let ack = session.share_daily_answer()?;
            println!("{ack}");
        }
    }
    ctx.save(&session)?;
    Ok(())
}
