//! This crate contains the shared Dioxus components of the portfolio page.

mod action_link;
mod hero;
mod rotating_words;

pub use action_link::ActionLink;
pub use hero::Hero;
pub use rotating_words::RotatingWords;
