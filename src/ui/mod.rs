//! Terminal UI: the gallows canvas, letter keyboard, revealed word, and the
//! end-of-round replay prompt.

mod app;
pub mod gallows_widget;
mod game_view;

pub use app::{map_key, App};
