use crate::config::UiConfig;
use crate::error::GameError;
use crate::game::{BodyPart, GameEvent, Guess, RoundOutcome, Session, SessionUpdate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    session: Session,
    ui: UiConfig,
    should_quit: bool,
    message: Option<String>,
    /// Outcome of the round just finished, shown until the player answers.
    prompt: Option<RoundOutcome>,
}

impl App {
    pub fn new(session: Session, ui: UiConfig) -> Self {
        App {
            session,
            ui,
            should_quit: false,
            message: None,
            prompt: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn prompt(&self) -> Option<&RoundOutcome> {
        self.prompt.as_ref()
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.ui.tick_rate_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(event) = map_key(key, self.prompt.is_some()) {
            self.dispatch(event);
        }
    }

    /// Apply an event to the session and turn the result into UI state.
    pub fn dispatch(&mut self, event: GameEvent) {
        self.message = None;

        match self.session.apply(event) {
            Ok(SessionUpdate::Guessed(Guess::Hit)) => {
                if let GameEvent::GuessLetter(letter) = event {
                    self.message = Some(format!("'{}' is in the word!", letter));
                }
            }
            Ok(SessionUpdate::Guessed(Guess::Miss)) => {
                if let GameEvent::GuessLetter(letter) = event {
                    let round = self.session.round();
                    let left = round.remaining_guesses();
                    let drawn = round.stage().newest_part().map_or("", BodyPart::name);
                    self.message = Some(format!(
                        "No '{}'. Drew the {}. {} wrong guess{} left.",
                        letter,
                        drawn,
                        left,
                        if left == 1 { "" } else { "es" }
                    ));
                }
            }
            Ok(SessionUpdate::RoundOver(outcome)) => {
                self.prompt = Some(outcome);
            }
            Ok(SessionUpdate::Restarted) => {
                self.prompt = None;
                self.message = Some("Round restarted with the same word.".to_string());
            }
            Ok(SessionUpdate::NewRound) => {
                self.prompt = None;
                self.message = Some("New word! Good luck.".to_string());
            }
            Ok(SessionUpdate::Quit) => {
                self.should_quit = true;
            }
            Err(GameError::Guess(err)) => {
                self.message = Some(format!("{}.", capitalize(&err.to_string())));
            }
            Err(err @ GameError::WordSource(_)) => {
                tracing::error!("Could not start a new round: {}", err);
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session.round().view(),
            self.session.stats(),
            self.message.as_deref(),
            self.prompt.as_ref(),
            self.ui.letters_per_row,
        );
    }
}

/// Map a key press to a game event.
///
/// While the replay prompt is open only the prompt answers are accepted.
pub fn map_key(key: KeyEvent, prompt_open: bool) -> Option<GameEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if prompt_open {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(GameEvent::NewRound),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(GameEvent::Quit),
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(GameEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(GameEvent::Quit),
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(GameEvent::Quit),
        KeyCode::Char('n') if ctrl => Some(GameEvent::NewRound),
        KeyCode::Char('r') if ctrl => Some(GameEvent::RestartRound),
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
            Some(GameEvent::GuessLetter(c.to_ascii_uppercase()))
        }
        _ => None,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Stats, WordSource};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app(word: &str) -> App {
        let words = WordSource::from_words([word]).unwrap();
        let session = Session::with_rng(words, StdRng::seed_from_u64(5)).unwrap();
        App::new(session, UiConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_render_draws_current_round() {
        use ratatui::backend::TestBackend;

        let mut app = app("dog");
        press(&mut app, KeyCode::Char('o'));
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("_ O _"));
        assert!(screen.contains("'O' is in the word!"));
    }

    #[test]
    fn test_map_letters_to_uppercase_guesses() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(key, false), Some(GameEvent::GuessLetter('Q')));
        let key = KeyEvent::new(KeyCode::Char('Z'), KeyModifiers::SHIFT);
        assert_eq!(map_key(key, false), Some(GameEvent::GuessLetter('Z')));
    }

    #[test]
    fn test_map_control_keys() {
        let ctrl_key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_key('n'), false), Some(GameEvent::NewRound));
        assert_eq!(map_key(ctrl_key('r'), false), Some(GameEvent::RestartRound));
        assert_eq!(map_key(ctrl_key('q'), false), Some(GameEvent::Quit));
        assert_eq!(map_key(ctrl_key('x'), false), None);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(esc, false), Some(GameEvent::Quit));
    }

    #[test]
    fn test_map_ignores_digits_and_symbols() {
        for code in [KeyCode::Char('1'), KeyCode::Char('?'), KeyCode::Left, KeyCode::Enter] {
            assert_eq!(map_key(KeyEvent::new(code, KeyModifiers::NONE), false), None);
        }
    }

    #[test]
    fn test_map_prompt_answers() {
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(map_key(key('y'), true), Some(GameEvent::NewRound));
        assert_eq!(map_key(key('n'), true), Some(GameEvent::Quit));
        assert_eq!(map_key(key('a'), true), None);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(enter, true), Some(GameEvent::NewRound));
    }

    #[test]
    fn test_hit_and_miss_messages() {
        let mut app = app("dog");
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.message(), Some("'O' is in the word!"));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.message(), Some("No 'X'. Drew the head. 5 wrong guesses left."));
    }

    #[test]
    fn test_duplicate_guess_shows_error() {
        let mut app = app("dog");
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.message(), Some("'D' was already guessed."));
        assert_eq!(app.session().round().wrong_guesses(), 0);
    }

    #[test]
    fn test_win_opens_prompt_and_yes_starts_new_round() {
        let mut app = app("ox");
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(
            app.prompt(),
            Some(&RoundOutcome::Won {
                word: "OX".to_string()
            })
        );
        // Letters are ignored while the prompt is open.
        press(&mut app, KeyCode::Char('a'));
        assert!(app.prompt().is_some());

        press(&mut app, KeyCode::Char('y'));
        assert!(app.prompt().is_none());
        assert!(app.session().round().guessed_letters().is_empty());
        assert_eq!(app.session().stats(), Stats { played: 1, won: 1 });
        assert!(!app.should_quit());
    }

    #[test]
    fn test_loss_prompt_no_quits() {
        let mut app = app("ox");
        for c in "abcdef".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(matches!(app.prompt(), Some(RoundOutcome::Lost { .. })));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_restart_and_new_round_keys() {
        let mut app = app("dog");
        press(&mut app, KeyCode::Char('x'));
        ctrl(&mut app, 'r');
        assert_eq!(app.session().round().wrong_guesses(), 0);
        assert_eq!(app.message(), Some("Round restarted with the same word."));
        press(&mut app, KeyCode::Char('x'));
        ctrl(&mut app, 'n');
        assert_eq!(app.session().round().wrong_guesses(), 0);
        assert_eq!(app.message(), Some("New word! Good luck."));
    }
}
