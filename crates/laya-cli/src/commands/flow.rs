use clap::Subcommand;
use laya_core::{forward_walk, render, DemoConfig, Session};
use serde::Serialize;

use crate::state::{CliResult, Ctx};

#[derive(Subcommand)]
pub enum FlowAction {
    /// Print the current screen and session summary as JSON
    Status,
    /// Discard the parked session and start over
    Reset,
    /// Apply due timers (splash / processing auto-advance)
    Tick,
    /// Advance the intro carousel
    Next,
    /// Choose who to sync with (partner, solo, fiance)
    Identity { value: String },
    /// Choose the relationship context (dating, married, ...)
    Relationship { value: String },
    /// Toggle one goal in the multi-select
    Goal { value: String },
    /// Submit the selected goals
    Goals,
    /// Answer the quiz question on the current screen
    Answer { option: String },
    /// Continue past the diagnosis reveal
    Continue,
    /// Select a paywall plan (monthly, annual)
    Plan { id: String },
    /// Subscribe with the selected plan
    Subscribe,
    /// Share the invite link (switches to the partner's side)
    Share,
    /// Skip the invite and go straight home
    Skip,
    /// Join from the partner welcome screen
    Join,
    /// Fill the minimal-setup form
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        dob: Option<String>,
        #[arg(long)]
        gender: Option<String>,
    },
    /// Submit the minimal-setup form
    Submit,
    /// Drain and print the accumulated session events
    Events,
    /// Drive a fresh session down the whole funnel with first choices
    Walk {
        /// Take the share-invite branch instead of skipping
        #[arg(long)]
        share: bool,
    },
}

#[derive(Serialize)]
struct Status<'a> {
    screen: Option<&'a str>,
    role: String,
    user_name: &'a str,
    partner_name: &'a str,
    answers: &'a laya_core::Answers,
    pending_timers: usize,
}

fn print_status(session: &Session) -> CliResult {
    let status = Status {
        screen: session.screen().map(|s| s.id()),
        role: session.actor_role().to_string(),
        user_name: session.user_name(),
        partner_name: session.partner_name(),
        answers: session.answers(),
        pending_timers: session.pending_timers(),
    };
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

fn print_view(session: &Session) -> CliResult {
    println!("{}", serde_json::to_string_pretty(&render(session))?);
    Ok(())
}

pub fn run(action: FlowAction, ctx: &Ctx) -> CliResult {
    match action {
        FlowAction::Status => {
            let session = ctx.load()?;
            print_status(&session)?;
            ctx.save(&session)?;
        }
        FlowAction::Reset => {
            ctx.reset()?;
            let session = ctx.fresh()?;
            print_view(&session)?;
            ctx.save(&session)?;
        }
        FlowAction::Tick => {
            let session = ctx.load()?;
            print_view(&session)?;
            ctx.save(&session)?;
        }
        FlowAction::Next => {
            let mut session = ctx.load()?;
            if !session.carousel_next(ctx.now_ms()) {
                return Err("not on the carousel".into());
            }
            print_view(&session)?;
            ctx.save(&session)?;
        }
        FlowAction::Identity { value } => {
            apply(ctx, |s, now| s.choose_identity(&value, now), "not a valid identity choice here")?;
        }
        FlowAction::Relationship { value } => {
            apply(ctx, |s, now| s.choose_relationship(&value, now), "not a valid relationship choice here")?;
        }
        FlowAction::Goal { value } => {
            apply(ctx, |s, _| s.toggle_goal(&value), "not a valid goal here")?;
        }
        FlowAction::Goals => {
            apply(ctx, |s, now| s.submit_goals(now), "select at least one goal first")?;
        }
        FlowAction::Answer { option } => {
            apply(ctx, |s, now| s.answer_quiz(&option, now), "not a valid answer here")?;
        }
        FlowAction::Continue => {
            apply(ctx, |s, now| s.continue_diagnosis(now), "not on the diagnosis screen")?;
        }
        FlowAction::Plan { id } => {
            apply(ctx, |s, _| s.select_plan(&id), "not a valid plan here")?;
        }
        FlowAction::Subscribe => {
            apply(ctx, |s, now| s.subscribe(now), "not on the paywall")?;
        }
        FlowAction::Share => {
            apply(ctx, |s, now| s.share_invite(now), "not on the invite screen")?;
        }
        FlowAction::Skip => {
            apply(ctx, |s, now| s.skip_invite(now), "not on the invite screen")?;
        }
        FlowAction::Join => {
            apply(ctx, |s, now| s.join_partner(now), "not on the partner welcome screen")?;
        }
        FlowAction::Set { name, dob, gender } => {
            apply(
                ctx,
                |s, _| s.set_setup_field(name.as_deref(), dob.as_deref(), gender.as_deref()),
                "not on the setup form",
            )?;
        }
        FlowAction::Submit => {
            apply(ctx, |s, now| s.submit_setup(now), "fill all three fields first")?;
        }
        FlowAction::Events => {
            let mut session = ctx.load()?;
            let events = session.take_events();
            println!("{}", serde_json::to_string_pretty(&events)?);
            ctx.save(&session)?;
        }
        FlowAction::Walk { share } => {
            let (report, session) = forward_walk(share, DemoConfig::default());
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                "steps": report.steps,
                "carousel_advances": report.carousel_advances,
                "visited": report.visited,
                "role": session.actor_role().to_string(),
                "user_name": session.user_name(),
            }))?);
        }
    }
    Ok(())
}

fn apply<F>(ctx: &Ctx, op: F, reject: &str) -> CliResult
where
    F: FnOnce(&mut Session, u64) -> bool,
{
    let mut session = ctx.load()?;
    if !op(&mut session, ctx.now_ms()) {
        ctx.save(&session)?;
        return Err(reject.into());
    }
    print_view(&session)?;
    ctx.save(&session)?;
    Ok(())
}
