//! Gifting tab: the "Partner Perks" affiliate coupon hub.
//!
//! Claiming marks the offer claimed for this session and decrements its
//! shared claims-remaining counter exactly once; a repeat claim is a silent
//! no-op. "Visit" hands the caller the coupon code and affiliate URL -- the
//! clipboard write and browser open are boundary effects that belong to the
//! front end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GiftingError;

/// One affiliate offer card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    pub id: u8,
    pub partner: &'static str,
    pub discount: &'static str,
    pub code: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub category: &'static str,
    pub min_order: &'static str,
    pub link: &'static str,
    pub total_claims: u8,
}

pub static AFFILIATE_OFFERS: [Offer; 6] = [
    Offer {
        id: 1,
        partner: "Ferns N Petals",
        discount: "25% OFF",
        code: "LAYA25",
        description: "Fresh flowers & gift hampers",
        emoji: "💐",
        category: "Gifts",
        min_order: "₹999",
        link: "https://www.fnp.com",
        total_claims: 10,
    },
    Offer {
        id: 2,
        partner: "Zomato Gold",
        discount: "₹500 OFF",
        code: "LAYADATE",
        description: "Date night dinners",
        emoji: "🍽️",
        category: "Dining",
        min_order: "₹1,500",
        link: "https://www.zomato.com",
        total_claims: 8,
    },
    Offer {
        id: 3,
        partner: "BookMyShow",
        discount: "30% OFF",
        code: "LAYABMS",
        description: "Movie tickets & events",
        emoji: "🎬",
        category: "Entertainment",
        min_order: "₹500",
        link: "https://www.bookmyshow.com",
        total_claims: 15,
    },
    Offer {
        id: 4,
        partner: "O2 Spa",
        discount: "40% OFF",
        code: "LAYASPA",
        description: "Couple spa packages",
        emoji: "🧖‍♀️",
        category: "Wellness",
        min_order: "₹2,000",
        link: "https://www.o2spa.in",
        total_claims: 5,
    },
    Offer {
        id: 5,
        partner: "MakeMyTrip",
        discount: "₹3,000 OFF",
        code: "LAYATRIP",
        description: "Weekend getaways",
        emoji: "✈️",
        category: "Travel",
        min_order: "₹10,000",
        link: "https://www.makemytrip.com",
        total_claims: 12,
    },
    Offer {
        id: 6,
        partner: "Smytten",
        discount: "50% OFF",
        code: "LAYABEAUTY",
        description: "Premium beauty & grooming",
        emoji: "💄",
        category: "Beauty",
        min_order: "₹799",
        link: "https://www.smytten.com",
        total_claims: 20,
    },
];

/// Outcome of a claim attempt. None of these are failures; the card just
/// renders differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimOutcome {
    /// First claim; the counter went down.
    Claimed,
    /// Already claimed in this session; nothing changed.
    AlreadyClaimed,
    /// The shared pool ran dry before this session claimed.
    Exhausted,
}

/// State of the gifting tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftingState {
    claimed: Vec<u8>,
    remaining: BTreeMap<u8, u8>,
}

impl GiftingState {
    pub fn new() -> Self {
        Self {
            claimed: Vec::new(),
            remaining: AFFILIATE_OFFERS
                .iter()
                .map(|o| (o.id, o.total_claims))
                .collect(),
        }
    }

    pub fn offer(&self, id: u8) -> Result<&'static Offer, GiftingError> {
        AFFILIATE_OFFERS
            .iter()
            .find(|o| o.id == id)
            .ok_or(GiftingError::UnknownOffer(id))
    }

    pub fn is_claimed(&self, id: u8) -> bool {
        self.claimed.contains(&id)
    }

    pub fn remaining(&self, id: u8) -> u8 {
        self.remaining.get(&id).copied().unwrap_or(0)
    }

    /// Claim an offer. Decrements the counter exactly once per offer per
    /// session.
    pub fn claim(&mut self, id: u8) -> Result<ClaimOutcome, GiftingError> {
        self.offer(id)?;
        if self.is_claimed(id) {
            return Ok(ClaimOutcome::AlreadyClaimed);
        }
        let remaining = self.remaining.entry(id).or_insert(0);
        if *remaining == 0 {
            return Ok(ClaimOutcome::Exhausted);
        }
        *remaining -= 1;
        self.claimed.push(id);
        Ok(ClaimOutcome::Claimed)
    }

    /// Code and affiliate URL for the "visit site" action. The front end
    /// copies the code (best effort) and opens the link.
    pub fn visit(&self, id: u8) -> Result<(&'static str, &'static str), GiftingError> {
        let offer = self.offer(id)?;
        Ok((offer.code, offer.link))
    }
}

impl Default for GiftingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_decrements_once() {
        let mut gifting = GiftingState::new();
        assert_eq!(gifting.remaining(1), 10);
        assert_eq!(gifting.claim(1).unwrap(), ClaimOutcome::Claimed);
        assert_eq!(gifting.remaining(1), 9);
        assert!(gifting.is_claimed(1));

        // Repeat claim changes nothing.
        assert_eq!(gifting.claim(1).unwrap(), ClaimOutcome::AlreadyClaimed);
        assert_eq!(gifting.remaining(1), 9);
    }

    #[test]
    fn unknown_offer_is_an_error() {
        let mut gifting = GiftingState::new();
        assert_eq!(gifting.claim(42), Err(GiftingError::UnknownOffer(42)));
        assert!(gifting.visit(0).is_err());
    }

    #[test]
    fn exhausted_pool_stops_claiming() {
        let mut gifting = GiftingState::new();
        gifting.remaining.insert(4, 0);
        assert_eq!(gifting.claim(4).unwrap(), ClaimOutcome::Exhausted);
        assert!(!gifting.is_claimed(4));
    }

    #[test]
    fn visit_exposes_code_and_link() {
        let gifting = GiftingState::new();
        let (code, link) = gifting.visit(2).unwrap();
        assert_eq!(code, "LAYADATE");
        assert_eq!(link, "https://www.zomato.com");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<u8> = AFFILIATE_OFFERS.iter().map(|o| o.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), AFFILIATE_OFFERS.len());
    }
}
