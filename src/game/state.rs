use std::collections::BTreeSet;

use rand::Rng;

use super::stage::Stage;
use super::words::{normalize, WordSource};
use crate::error::{GuessError, WordSourceError};

/// Number of wrong guesses that hangs the figure.
pub const MAX_WRONG_GUESSES: usize = 6;

const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// How a finished round ended, with the word to reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { word: String },
    Lost { word: String },
}

impl RoundOutcome {
    pub fn word(&self) -> &str {
        match self {
            RoundOutcome::Won { word } | RoundOutcome::Lost { word } => word,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Won { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Hit,
    Miss,
}

/// Everything the presentation layer needs to redraw a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub pattern: String,
    pub stage: Stage,
    pub unavailable: BTreeSet<char>,
    /// Guessed letters that are not in the word.
    pub missed: BTreeSet<char>,
    pub outcome: Option<RoundOutcome>,
}

/// A single round: one target word and the guesses made against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target_word: String,
    guessed_letters: BTreeSet<char>,
    wrong_guesses: usize,
}

impl GameState {
    /// Start a round with a random word from `source`.
    pub fn new<R: Rng>(source: &WordSource, rng: &mut R) -> Result<Self, WordSourceError> {
        let word = source.pick_random(rng)?;
        Self::with_word(&word)
    }

    /// Start a round with a fixed word.
    pub fn with_word(word: &str) -> Result<Self, WordSourceError> {
        let target_word =
            normalize(word).ok_or_else(|| WordSourceError::InvalidWord(word.to_string()))?;
        Ok(GameState {
            target_word,
            guessed_letters: BTreeSet::new(),
            wrong_guesses: 0,
        })
    }

    /// Replace the word with a fresh random pick and reset the guesses.
    ///
    /// On error the current round is left untouched.
    pub fn new_game<R: Rng>(
        &mut self,
        source: &WordSource,
        rng: &mut R,
    ) -> Result<(), WordSourceError> {
        *self = Self::new(source, rng)?;
        tracing::debug!("New round, word has {} letters", self.target_word.len());
        Ok(())
    }

    /// Reset the guesses, keeping the same word.
    pub fn restart(&mut self) {
        self.guessed_letters.clear();
        self.wrong_guesses = 0;
    }

    /// Apply a guess. Rejected guesses leave the round unchanged.
    pub fn guess(&mut self, letter: char) -> Result<Guess, GuessError> {
        if self.is_over() {
            return Err(GuessError::RoundOver);
        }
        if !letter.is_ascii_uppercase() {
            return Err(GuessError::NotALetter(letter));
        }
        if self.guessed_letters.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        let result = if self.target_word.contains(letter) {
            Guess::Hit
        } else {
            self.wrong_guesses += 1;
            Guess::Miss
        };
        self.guessed_letters.insert(letter);
        tracing::debug!("Guessed {}: {:?} ({} wrong)", letter, result, self.wrong_guesses);
        Ok(result)
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    /// Guesses left before the figure is complete.
    pub fn remaining_guesses(&self) -> usize {
        MAX_WRONG_GUESSES - self.wrong_guesses
    }

    fn all_letters_guessed(&self) -> bool {
        self.target_word
            .chars()
            .all(|c| self.guessed_letters.contains(&c))
    }

    pub fn is_over(&self) -> bool {
        self.wrong_guesses == MAX_WRONG_GUESSES || self.all_letters_guessed()
    }

    pub fn is_won(&self) -> bool {
        self.is_over() && self.wrong_guesses < MAX_WRONG_GUESSES
    }

    pub fn status(&self) -> RoundStatus {
        if !self.is_over() {
            RoundStatus::InProgress
        } else if self.is_won() {
            RoundStatus::Won
        } else {
            RoundStatus::Lost
        }
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        let word = self.target_word.clone();
        match self.status() {
            RoundStatus::InProgress => None,
            RoundStatus::Won => Some(RoundOutcome::Won { word }),
            RoundStatus::Lost => Some(RoundOutcome::Lost { word }),
        }
    }

    pub fn stage(&self) -> Stage {
        Stage::from_wrong_guesses(self.wrong_guesses)
    }

    /// The word with unguessed letters masked, e.g. `"P _ T _ O N"`.
    pub fn reveal_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.target_word.len() * 2);
        for (i, c) in self.target_word.chars().enumerate() {
            if i > 0 {
                pattern.push(' ');
            }
            if self.guessed_letters.contains(&c) {
                pattern.push(c);
            } else {
                pattern.push(PLACEHOLDER);
            }
        }
        pattern
    }

    pub fn view(&self) -> RoundView {
        RoundView {
            pattern: self.reveal_pattern(),
            stage: self.stage(),
            unavailable: self.guessed_letters.clone(),
            missed: self
                .guessed_letters
                .iter()
                .copied()
                .filter(|c| !self.target_word.contains(*c))
                .collect(),
            outcome: self.outcome(),
        }
    }
}
