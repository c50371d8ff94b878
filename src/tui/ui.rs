//! Stateless UI rendering for the word game.

use std::str::FromStr;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use strictly_hangman::{ALPHABET, Category, GameSnapshot, LetterStatus, Slot};
use unicode_width::UnicodeWidthStr;

use super::announce;

const TITLE: &str = "Programmers: Endgame";
const KEY_HELP: &str = "a-z guess · 1/? hint · Enter new game · Esc quit";
const SKULL_COUNT: usize = 12;

/// Renders the whole game screen.
pub fn draw(frame: &mut Frame, snapshot: &GameSnapshot, categories: &[Category], status: &str) {
    let area = frame.area();
    let last_category = categories.last().map(|c| c.name().as_str()).unwrap_or("Assembly");
    let chips = chip_lines(categories, *snapshot.wrong_guess_count(), area.width.saturating_sub(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                  // Header
            Constraint::Length(4),                  // Game status
            Constraint::Length(chips.len() as u16), // Category chips
            Constraint::Length(3),                  // Word
            Constraint::Length(1),                  // Hint bar
            Constraint::Length(2),                  // Keyboard
            Constraint::Length(3),                  // Announcements
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], snapshot, last_category);
    draw_status(frame, chunks[1], snapshot, last_category);
    frame.render_widget(Paragraph::new(chips).alignment(Alignment::Center), chunks[2]);
    draw_word(frame, chunks[3], snapshot);
    draw_hint_bar(frame, chunks[4], snapshot);
    draw_keyboard(frame, chunks[5], snapshot);
    draw_announcements(frame, chunks[6], snapshot);

    let footer = if status.is_empty() { KEY_HELP } else { status };
    frame.render_widget(
        Paragraph::new(footer)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        chunks[8],
    );

    if *snapshot.is_lost() {
        draw_skulls(frame, area);
    } else if *snapshot.is_won() {
        draw_win_banner(frame, chunks[5]);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, last_category: &str) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Guess the word within {} attempts to keep the programming world safe from {}!",
            snapshot.max_wrong_guesses(),
            last_category
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_status(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, last_category: &str) {
    let (lines, colour) = if *snapshot.is_won() {
        (
            vec![bold("You win!"), Line::from("Well done! 🎉")],
            Color::Green,
        )
    } else if *snapshot.is_lost() {
        (
            vec![
                bold("Game over!"),
                Line::from(format!("You lose! Better start learning {} 😭", last_category)),
            ],
            Color::Red,
        )
    } else if let Some(text) = snapshot.active_forfeit_text() {
        (vec![Line::from(text.clone())], Color::Magenta)
    } else {
        (Vec::new(), Color::Reset)
    };

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(colour))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn bold(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Lays out category chips, wrapping at `width` columns.
///
/// The first `eliminated` chips are crossed out.
pub fn chip_lines(categories: &[Category], eliminated: usize, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for (index, category) in categories.iter().enumerate() {
        let label = format!(" {} ", category.name());
        let label_width = label.width();
        let gap = usize::from(!current.is_empty());
        if !current.is_empty() && used + gap + label_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" "));
            used += 1;
        }

        let mut style = Style::default()
            .fg(parse_colour(category.foreground()))
            .bg(parse_colour(category.background()));
        if index < eliminated {
            style = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
        }
        current.push(Span::styled(label, style));
        used += label_width;
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Parses a `#rrggbb` colour, falling back to the terminal default.
fn parse_colour(hex: &str) -> Color {
    Color::from_str(hex).unwrap_or(Color::Reset)
}

fn draw_word(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let mut spans = Vec::new();
    for slot in snapshot.slots() {
        let span = match slot {
            Slot::Hidden => Span::styled(" _ ", Style::default().fg(Color::Gray)),
            Slot::Guessed(letter) => Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Slot::Missed(letter) => Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        spans.push(span);
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(paragraph, area);
}

fn draw_hint_bar(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let hint = if *snapshot.hints_remaining() == 0 {
        Span::styled("No hints left", Style::default().fg(Color::DarkGray))
    } else if *snapshot.is_over() {
        Span::styled("Use a hint [1]", Style::default().add_modifier(Modifier::DIM))
    } else {
        Span::styled(
            format!("Use a hint [1] ({} left)", snapshot.hints_remaining()),
            Style::default().fg(Color::Cyan),
        )
    };

    let line = Line::from(vec![
        Span::raw("Remaining attempts: "),
        Span::styled(
            snapshot.remaining_guesses().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        hint,
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_keyboard(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let over = *snapshot.is_over();
    let rows: Vec<Line> = ALPHABET
        .chunks(13)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&letter| key_span(letter, snapshot.letter_status(letter), over))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(rows).alignment(Alignment::Center), area);
}

fn key_span(letter: char, status: LetterStatus, over: bool) -> Span<'static> {
    let mut style = match status {
        LetterStatus::Unguessed => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::Wrong => Style::default().fg(Color::White).bg(Color::Red),
    };
    if over {
        style = style.add_modifier(Modifier::DIM);
    }
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn draw_announcements(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let lines: Vec<Line> = announce::lines(snapshot)
        .into_iter()
        .map(|text| Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))))
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_skulls(frame: &mut Frame, area: Rect) {
    let overlay = center_rect(area, 30, 6);
    let skulls = "💀".repeat(SKULL_COUNT / 2);
    let lines = vec![
        Line::from(skulls.clone()),
        Line::from(skulls),
        Line::from(""),
        Line::from("Press Enter for a new game"),
    ];

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        overlay,
    );
}

fn draw_win_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("🎉 The programming world is safe 🎉"),
        Line::from("Press Enter for a new game"),
    ];
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        area,
    );
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_hangman::{
        Engine, FarewellPhrases, GameConfig, GameRng, WordSourceError, programming_languages,
    };

    fn engine(word: &'static str) -> Engine {
        Engine::new(
            GameConfig::default(),
            move || Ok::<_, WordSourceError>(word.to_string()),
            GameRng::new(0),
            FarewellPhrases::default(),
        )
        .unwrap()
    }

    fn render(engine: &Engine, status: &str) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let snapshot = engine.snapshot();
        terminal
            .draw(|frame| draw(frame, &snapshot, engine.config().categories(), status))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
                    .collect()
            })
            .collect()
    }

    fn contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_fresh_game_screen() {
        let rows = render(&engine("react"), "");
        assert!(contains(&rows, TITLE));
        assert!(contains(&rows, "within 8 attempts"));
        assert!(contains(&rows, "Remaining attempts: 8"));
        assert!(contains(&rows, "Use a hint [1] (2 left)"));
        assert!(contains(&rows, "Current word: blank. blank. blank. blank. blank."));
        assert!(contains(&rows, "Assembly"));
        assert!(contains(&rows, KEY_HELP));
    }

    #[test]
    fn test_wrong_guess_shows_forfeit() {
        let mut engine = engine("react");
        engine.guess_letter('z');
        let forfeit = engine.active_forfeit_text().unwrap();
        let rows = render(&engine, "");
        assert!(contains(&rows, &forfeit));
        assert!(contains(&rows, "Remaining attempts: 7"));
    }

    #[test]
    fn test_loss_screen() {
        let mut engine = engine("go");
        for letter in "abcdefhijk".chars() {
            engine.guess_letter(letter);
        }
        let rows = render(&engine, "");
        assert!(*engine.snapshot().is_lost());
        assert!(contains(&rows, "Game over!"));
        assert!(contains(&rows, "Press Enter for a new game"));
    }

    #[test]
    fn test_win_screen_and_status() {
        let mut engine = engine("go");
        engine.guess_letter('g');
        engine.guess_letter('o');
        let rows = render(&engine, "Game is already over");
        assert!(contains(&rows, "You win!"));
        assert!(contains(&rows, "Game is already over"));
    }

    #[test]
    fn test_chips_wrap_and_cross_out() {
        let categories = programming_languages();
        assert_eq!(chip_lines(&categories, 0, 200).len(), 1);
        assert!(chip_lines(&categories, 0, 20).len() > 1);

        let lines = chip_lines(&categories, 2, 200);
        let crossed: Vec<_> = lines[0]
            .spans
            .iter()
            .filter(|span| span.style.add_modifier.contains(Modifier::CROSSED_OUT))
            .collect();
        assert_eq!(crossed.len(), 2);
    }

    #[test]
    fn test_colour_parsing() {
        assert_eq!(parse_colour("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_colour("not a colour"), Color::Reset);
    }
}
