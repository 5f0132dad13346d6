//! Core Hangman logic: word list, round state machine, session scoring, and
//! the static drawing table for the gallows.

mod session;
pub mod stage;
mod state;
mod words;

pub use session::{GameEvent, Session, SessionUpdate, Stats};
pub use stage::{BodyPart, Shape, Stage};
pub use state::{GameState, Guess, RoundOutcome, RoundStatus, RoundView, MAX_WRONG_GUESSES};
pub use words::WordSource;
