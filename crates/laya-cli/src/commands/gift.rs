use clap::Subcommand;
use laya_core::home::gifting::{ClaimOutcome, AFFILIATE_OFFERS};

use crate::clipboard;
use crate::commands::home::require_home;
use crate::state::{CliResult, Ctx};

#[derive(Subcommand)]
pub enum GiftAction {
    /// List the affiliate offers with claim counts
    List,
    /// Claim an offer's coupon
    Claim { id: u8 },
    /// Copy the coupon code and open the partner site
    Visit { id: u8 },
}

pub fn run(action: GiftAction, ctx: &Ctx) -> CliResult {
    let mut session = ctx.load()?;
    require_home(&session)?;
    match action {
        GiftAction::List => {
            if let Some(home) = session.home() {
                for offer in &AFFILIATE_OFFERS {
                    let claimed = if home.gifting.is_claimed(offer.id) { " [claimed]" } else { "" };
                    println!(
                        "{}: {} {} — {} ({}, min {}) · {} left{claimed}",
                        offer.id,
                        offer.emoji,
                        offer.partner,
                        offer.discount,
                        offer.category,
                        offer.min_order,
                        home.gifting.remaining(offer.id),
                    );
                }
            }
        }
        GiftAction::Claim { id } => {
            let outcome = session.claim_coupon(id)?;
            match outcome {
                ClaimOutcome::Claimed => println!("Coupon claimed!"),
                ClaimOutcome::AlreadyClaimed => println!("Already claimed."),
                ClaimOutcome::Exhausted => println!("All coupons for this offer are gone."),
            }
        }
        GiftAction::Visit { id } => {
            if let Some(home) = session.home() {
                let (code, link) = home.gifting.visit(id)?;
                // Both effects are best-effort; the code is printed either way.
                if clipboard::copy_best_effort(code) {
                    println!("Code {code} copied to clipboard");
                } else {
                    println!("Code: {code}");
                }
                if open::that(link).is_err() {
                    println!("Open this link: {link}");
                }
            }
        }
    }
    ctx.save(&session)?;
    Ok(())
}
