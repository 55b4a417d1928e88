//! User profiles and social credit scores.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::{
    directory::{self, DirectoryUser},
    format::mask_number,
    models::{CreditCategories, SocialCredit, User},
    rng::char_code_seed,
};

/// Lowest score a category can take
pub const MIN_SCORE: u32 = 300;
/// Highest score a category can take
pub const MAX_SCORE: u32 = 900;

/// Compute a social credit score for `user_id`.
///
/// The baseline comes from the user id so a user keeps roughly the same score
/// between requests; each category then drifts by up to 40 points.
pub fn social_credit(user_id: &str, now: DateTime<Utc>, rng: &mut impl Rng) -> SocialCredit {
    let base = 600 + (char_code_seed(user_id) % 200) as i64;
    let mut category = |offset: i64| {
        let drift = rng.gen_range(-40..=40);
        (base + offset + drift).clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as u32
    };

    let categories = CreditCategories {
        financial: category(25),
        civic: category(10),
        environmental: category(-15),
        community: category(0),
    };

    SocialCredit {
        score: categories.average(),
        categories,
        last_updated: now,
    }
}

/// Build the public user record for a directory entry.
pub fn from_directory(user: &DirectoryUser, now: DateTime<Utc>, rng: &mut impl Rng) -> User {
    User {
        id: user.id.to_string(),
        name: user.name.to_string(),
        email: user.email.to_string(),
        phone: user.phone.to_string(),
        aadhaar_number: mask_number(user.aadhaar_number),
        social_credit: social_credit(user.id, now, rng),
        joined_at: user.joined_at(),
    }
}

/// Profile for any user id.
///
/// Directory users get their real identity; unknown ids get a synthesized one.
pub fn user_profile(user_id: &str, now: DateTime<Utc>, rng: &mut impl Rng) -> User {
    if let Some(user) = directory::find_by_id(user_id) {
        return from_directory(user, now, rng);
    }

    let seed = char_code_seed(user_id);
    User {
        id: user_id.to_string(),
        name: "Demo User".to_string(),
        email: format!("{}@civicpulse.in", user_id.to_lowercase()),
        phone: format!("98{:08}", seed * 7919 % 100_000_000),
        aadhaar_number: mask_number(&format!("{:012}", seed * 104_729 % 1_000_000_000_000)),
        social_credit: social_credit(user_id, now, rng),
        joined_at: now,
    }
}

/// Build the record returned for a freshly registered user.
pub fn new_user(
    name: &str,
    email: &str,
    phone: &str,
    aadhaar_number: &str,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> User {
    let id = format!("u{}", rng.gen_range(1000..100_000));
    let categories = CreditCategories {
        financial: 500,
        civic: 500,
        environmental: 500,
        community: 500,
    };

    User {
        name: name.trim().to_string(),
        email: email.trim().to_lowercase(),
        phone: phone.trim().to_string(),
        aadhaar_number: mask_number(aadhaar_number),
        social_credit: SocialCredit {
            score: categories.average(),
            categories,
            last_updated: now,
        },
        joined_at: now,
        id,
    }
}
