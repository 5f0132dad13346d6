use crate::game::{RoundOutcome, RoundView, Stats, MAX_WRONG_GUESSES};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::gallows_widget::render_gallows;

const ALPHABET: std::ops::RangeInclusive<char> = 'A'..='Z';

pub fn render(
    frame: &mut Frame,
    view: &RoundView,
    stats: Stats,
    message: Option<&str>,
    prompt: Option<&RoundOutcome>,
    letters_per_row: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Gallows + letters
            Constraint::Length(3), // Word
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_header(frame, view, stats, chunks[0]);
    render_gallows(frame, view.stage, middle[0]);
    render_letters(frame, view, letters_per_row, middle[1]);
    render_word(frame, view, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);

    if let Some(outcome) = prompt {
        render_prompt(frame, outcome, stats);
    }
}

fn render_header(frame: &mut Frame, view: &RoundView, stats: Stats, area: Rect) {
    let wrong = view.stage.index();
    let status = format!(
        "Wrong guesses: {}/{}  |  Won {} of {}",
        wrong,
        MAX_WRONG_GUESSES,
        stats.won,
        stats.played
    );
    let color = if MAX_WRONG_GUESSES - wrong <= 1 {
        Color::Red
    } else {
        Color::Cyan
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Hangman"));

    frame.render_widget(header, area);
}

/// Letter keyboard; guessed letters are struck out and colored by result.
fn render_letters(frame: &mut Frame, view: &RoundView, letters_per_row: usize, area: Rect) {
    let letters: Vec<char> = ALPHABET.collect();
    let mut lines = vec![Line::from("")];

    for row in letters.chunks(letters_per_row.max(1)) {
        let spans: Vec<Span> = row
            .iter()
            .map(|&letter| {
                let style = if !view.unavailable.contains(&letter) {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else if !view.missed.contains(&letter) {
                    Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
                } else {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                };
                Span::styled(format!(" {} ", letter), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Letters"));

    frame.render_widget(keyboard, area);
}

fn render_word(frame: &mut Frame, view: &RoundView, area: Rect) {
    let word = Paragraph::new(view.pattern.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(word, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("A-Z: Guess  |  Ctrl+N: New  |  Ctrl+R: Restart  |  Esc: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

/// Lines shown in the end-of-round popup.
pub fn prompt_lines(outcome: &RoundOutcome, stats: Stats) -> Vec<String> {
    let headline = match outcome {
        RoundOutcome::Won { .. } => "You've won! Congratulations!".to_string(),
        RoundOutcome::Lost { word } => format!("You've lost! The word was '{}'.", word),
    };
    vec![
        headline,
        format!("That's {} out of {}!", stats.won, stats.played),
        "Another round? (y/n)".to_string(),
    ]
}

fn render_prompt(frame: &mut Frame, outcome: &RoundOutcome, stats: Stats) {
    let (title, color) = if outcome.is_win() {
        ("Winner!", Color::Green)
    } else {
        ("Sorry!", Color::Red)
    };

    let lines: Vec<Line> = prompt_lines(outcome, stats)
        .into_iter()
        .map(Line::from)
        .collect();
    let width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16 + 4;
    let area = centered_rect(width, lines.len() as u16 + 2, frame.area());

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
