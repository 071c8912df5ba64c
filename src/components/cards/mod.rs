//! Profile card components.

mod social_card;

pub use social_card::SocialCard;
