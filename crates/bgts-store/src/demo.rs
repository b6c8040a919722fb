//! # Demo Fixtures
//!
//! Seed data for demonstration deployments, mirroring the fixtures the
//! original register shipped with. Used by `bgts serve --demo` and the
//! `bgts seed` command.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use uuid::Uuid;

use bgts_core::{GiftDeclaration, GiftDeclarationInput, Giver, Reference};

use crate::directory::{Agency, User, UserRole};
use crate::penalties::{PenaltyRecord, PenaltyStatus};

/// Demo public servants and one administrator.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "tashi.sherpa".into(),
            name: "Tashi Sherpa".into(),
            designation: Some("Public Servant".into()),
            agency: Some("ministry-of-finance".into()),
            role: UserRole::PublicServant,
        },
        User {
            id: "karma.wangdi".into(),
            name: "Karma Wangdi".into(),
            designation: Some("Senior Officer".into()),
            agency: Some("ministry-of-finance".into()),
            role: UserRole::PublicServant,
        },
        User {
            id: "sonam.choden".into(),
            name: "Sonam Choden".into(),
            designation: Some("Gift Disclosure Administrator".into()),
            agency: Some("anti-corruption-commission".into()),
            role: UserRole::Administrator,
        },
    ]
}

/// Demo agencies.
pub fn demo_agencies() -> Vec<Agency> {
    vec![
        Agency {
            id: "ministry-of-finance".into(),
            name: "Ministry of Finance".into(),
        },
        Agency {
            id: "anti-corruption-commission".into(),
            name: "Anti-Corruption Commission".into(),
        },
    ]
}

/// Demo penalty register contents. Fines follow the first-occurrence
/// multiplier of the rule table.
pub fn demo_penalties() -> Vec<PenaltyRecord> {
    vec![PenaltyRecord {
        id: Uuid::from_u128(0x1ee9_6c2d_0000_0000_0000_0000_0000_0001),
        date: NaiveDate::from_ymd_opt(2023, 9, 15).unwrap_or_default(),
        public_servant: "Karma Wangdi".into(),
        breach_type: "Late Declaration (24h rule)".into(),
        gift_value: 7000.0,
        fine_amount: 14000.0,
        status: PenaltyStatus::Unpaid,
    }]
}

/// Demo gift declarations, submitted as of `now`.
pub fn demo_declarations(now: DateTime<Utc>) -> Vec<GiftDeclaration> {
    let inputs = [
        GiftDeclarationInput {
            description: "Traditional Thanka painting".into(),
            value: Some(5000.0),
            receipt_date: NaiveDate::from_ymd_opt(2023, 10, 15),
            gift_type: Some("artwork".into()),
            giver: Some(Giver {
                name: "Local Artist".into(),
                designation: None,
                agency: None,
                address: None,
            }),
            relationship: "personal-friend".into(),
            circumstances: Some("Offered during an official site visit".into()),
            disposition: Some("retain".into()),
            is_prohibited_source: false,
        },
        GiftDeclarationInput {
            description: "Gift basket from a bidding contractor".into(),
            value: Some(2500.0),
            receipt_date: NaiveDate::from_ymd_opt(2023, 11, 2),
            gift_type: Some("hamper".into()),
            giver: Some(Giver {
                name: "Druk Construction Pvt Ltd".into(),
                designation: None,
                agency: None,
                address: Some("Thimphu".into()),
            }),
            relationship: "does-business".into(),
            circumstances: Some("Delivered to the office unprompted".into()),
            disposition: Some("return".into()),
            is_prohibited_source: true,
        },
    ];

    let owners = [("tashi.sherpa", "ministry-of-finance"), ("karma.wangdi", "ministry-of-finance")];

    inputs
        .into_iter()
        .zip(owners)
        .enumerate()
        .filter_map(|(i, (input, (user, agency)))| {
            let suffix = 1000 + i as u16;
            let reference = Reference::compose(now.year(), suffix).ok()?;
            Some(GiftDeclaration::from_input(
                input,
                reference,
                user.to_string(),
                Some(agency.to_string()),
                now,
            ))
        })
        .collect()
}
