//! Main application state and rendering

use crate::game::{Command, Game, Verdict};
use crate::tui::widgets::{CorroborationMeter, VerdictBox};
use crate::tui::{centered, styled_block, tone_color, Theme, HELP_TEXT, LOGO, SMALL_LOGO};
use crate::tui::{create_content_layout, create_main_area_layout, create_main_layout};
use crate::VERSION;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;
use tracing::warn;

/// Application state
pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub input_buffer: String,
    tick_rate: Duration,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Title,
    Exploring,
    Accusing,
    Verdict,
}

impl App {
    pub fn new(game: Game, tick_rate: Duration) -> Self {
        Self {
            game,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::Title,
            input_buffer: String::new(),
            tick_rate,
        }
    }

    /// Wait up to one tick for a key and apply it
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(self.running)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        match self.current_screen {
            Screen::Title => match code {
                KeyCode::Enter => self.current_screen = Screen::Exploring,
                KeyCode::Char('q') => self.running = false,
                KeyCode::Char('?') => self.show_help = true,
                _ => {}
            },
            Screen::Exploring => match code {
                KeyCode::Char('?') => self.show_help = true,
                KeyCode::Char(key) => {
                    let outcome = self.game.command(Command::from_key(key));
                    if outcome.finished {
                        self.input_buffer.clear();
                        self.current_screen = Screen::Accusing;
                    }
                }
                _ => {}
            },
            Screen::Accusing => match code {
                KeyCode::Enter => self.submit_accusation(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Esc => self.input_buffer.clear(),
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
            Screen::Verdict => match code {
                KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc => self.running = false,
                KeyCode::Char('?') => self.show_help = true,
                _ => {}
            },
        }
    }

    fn submit_accusation(&mut self) {
        let accused = self.input_buffer.clone();
        match self.game.accuse(&accused) {
            Ok(_) => self.current_screen = Screen::Verdict,
            Err(e) => warn!("accusation refused: {e:#}"),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::Title => self.render_title(frame),
            Screen::Exploring | Screen::Accusing => self.render_game(frame),
            Screen::Verdict => self.render_verdict(frame),
        }

        // Overlay help if showing
        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_title(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(self.theme.bg)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(16),
                Constraint::Min(4),
                Constraint::Length(2),
            ])
            .split(area);

        let logo = Paragraph::new(LOGO)
            .style(Style::default().fg(self.theme.accent))
            .alignment(Alignment::Center);
        frame.render_widget(logo, chunks[0]);

        let intro = Paragraph::new(vec![
            Line::from(Span::styled(
                self.game.title.as_str(),
                Style::default().fg(self.theme.warning).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(self.game.synopsis.as_str()),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(intro, chunks[1]);

        let prompt = Paragraph::new(format!("v{VERSION} · Enter to begin · ? for help · q to quit"))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(prompt, chunks[2]);
    }

    fn render_game(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = create_main_layout(area);

        self.render_header(frame, layout[0]);

        let content_layout = create_content_layout(layout[1]);
        self.render_side_panel(frame, content_layout[0]);

        let main_layout = create_main_area_layout(content_layout[1]);
        self.render_messages(frame, main_layout[0]);
        self.render_clue_panel(frame, main_layout[1]);

        self.render_status_bar(frame, layout[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(19),
                Constraint::Min(20),
                Constraint::Length(24),
            ])
            .split(area);

        let logo = Paragraph::new(SMALL_LOGO)
            .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(logo, header_layout[0]);

        let room = Paragraph::new(self.game.current_room())
            .style(Style::default().fg(self.theme.warning))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(room, header_layout[1]);

        let turn_text = format!(" Turn {} | Depth {} ", self.game.stats.turns_taken, self.game.depth());
        let turn = Paragraph::new(turn_text)
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(turn, header_layout[2]);
    }

    fn render_side_panel(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),      // Paths
                Constraint::Length(7),   // Suspects
            ])
            .split(area);

        let mut paths: Vec<ListItem> = self
            .game
            .paths()
            .into_iter()
            .map(|(direction, room)| ListItem::new(format!("  [{}] {} -> {}", direction.key().to_ascii_uppercase(), direction, room)))
            .collect();
        if paths.is_empty() {
            paths.push(ListItem::new("  Dead end").style(Style::default().fg(Color::DarkGray)));
        }
        if self.game.depth() > 0 {
            paths.push(ListItem::new("  [V] Go back"));
        }
        paths.push(ListItem::new("  ───────────────"));
        paths.push(ListItem::new("  [S] Stop & accuse"));
        paths.push(ListItem::new("  [?] Help"));

        let path_list = List::new(paths).block(styled_block("Paths", &self.theme));
        frame.render_widget(path_list, chunks[0]);

        let suspects: Vec<ListItem> = self
            .game
            .suspects()
            .into_iter()
            .map(|s| ListItem::new(format!("  {s}")))
            .collect();
        let suspect_list = List::new(suspects).block(styled_block("Suspects", &self.theme));
        frame.render_widget(suspect_list, chunks[1]);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        // Split area for the log and the accusation line
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),      // Log
                Constraint::Length(3),   // Input line
            ])
            .split(area);

        let visible = chunks[0].height.saturating_sub(2) as usize;
        let skip = self.game.message_log.len().saturating_sub(visible);
        let lines: Vec<Line> = self
            .game
            .message_log
            .iter()
            .skip(skip)
            .map(|m| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", m.tone.symbol()),
                        Style::default().fg(tone_color(&m.tone)),
                    ),
                    Span::styled(
                        m.message.as_str(),
                        Style::default().fg(tone_color(&m.tone)),
                    ),
                ])
            })
            .collect();
        let log = Paragraph::new(lines)
            .block(styled_block("Investigation", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(log, chunks[0]);

        let accusing = self.current_screen == Screen::Accusing;
        let prompt = if accusing {
            format!("Who is the culprit? {}_", self.input_buffer)
        } else {
            "Press S when you are ready to accuse".to_string()
        };
        let input = Paragraph::new(prompt)
            .style(Style::default().fg(if accusing { self.theme.warning } else { Color::DarkGray }))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if accusing {
                        self.theme.accent
                    } else {
                        self.theme.border
                    }))
                    .title(" Accusation "),
            );
        frame.render_widget(input, chunks[1]);
    }

    fn render_clue_panel(&self, frame: &mut Frame, area: Rect) {
        let clues: Vec<ListItem> = self
            .game
            .clues()
            .iter()
            .map(|clue| ListItem::new(format!("• {clue}")).style(Style::default().fg(Color::Yellow)))
            .collect();

        let title = format!("Collected Clues ({})", self.game.clues().len());
        if clues.is_empty() {
            let empty = Paragraph::new("No clues yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(styled_block(&title, &self.theme));
            frame.render_widget(empty, area);
        } else {
            frame.render_widget(List::new(clues).block(styled_block(&title, &self.theme)), area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new(format!(" {} | Press ? for help ", self.game.check_status()))
            .style(Style::default().fg(self.theme.fg).bg(Color::DarkGray));
        frame.render_widget(status, area);
    }

    fn render_verdict(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);

        let Some(verdict) = self.game.verdict() else {
            return;
        };

        let (title, color) = match verdict {
            Verdict::Guilty { .. } => ("CASE CLOSED", self.theme.success),
            Verdict::NotProven { .. } => ("NOT PROVEN", self.theme.alert),
            Verdict::NoEvidence => ("NO EVIDENCE", self.theme.warning),
        };

        let mut lines = vec![
            format!("Accused: {}", self.input_buffer),
            String::new(),
            verdict.to_string(),
            String::new(),
            "Collected clues:".to_string(),
        ];
        lines.extend(self.game.clues().iter().map(|clue| format!("  - {clue}")));
        lines.push(String::new());
        lines.push("Press Enter or q to leave".to_string());

        let box_height = lines.len() as u16 + 2;
        let box_area = centered(area, 70, box_height + 3);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(box_area);

        frame.render_widget(
            VerdictBox::new(title).content(lines).border_color(color),
            chunks[0],
        );

        if let Some(corroboration) = verdict.corroboration() {
            let meter = CorroborationMeter::new(
                "Corroborating clues",
                corroboration,
                self.game.clues().len(),
            )
            .threshold(self.game.threshold())
            .met_color(self.theme.success)
            .short_color(self.theme.alert);
            let meter_area = Rect::new(
                chunks[1].x + 1,
                chunks[1].y,
                chunks[1].width.saturating_sub(2),
                chunks[1].height.min(2),
            );
            frame.render_widget(meter, meter_area);
        }
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let popup_area = centered(frame.area(), 51, 19);
        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.accent)));
        frame.render_widget(help, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{GamePhase, Scenario};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let game = Game::new(Scenario::mansion().unwrap(), &GameConfig::default()).unwrap();
        App::new(game, Duration::from_millis(10))
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn screen_text(app: &mut App) -> String {
        screen_text_sized(app, 100, 36)
    }

    fn screen_text_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn full_session_through_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.current_screen, Screen::Exploring);

        press(&mut app, "ees");
        assert_eq!(app.current_screen, Screen::Accusing);

        press(&mut app, "Mordomx");
        app.handle_key(KeyCode::Backspace);
        press(&mut app, "o");
        assert_eq!(app.input_buffer, "Mordomo");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.current_screen, Screen::Verdict);
        assert!(matches!(
            app.game.phase,
            GamePhase::Closed { verdict: Verdict::Guilty { corroboration: 2 }, .. }
        ));

        app.handle_key(KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, "e");
        assert_eq!(app.game.current_room(), "Hall de entrada");
        app.handle_key(KeyCode::Esc);
        press(&mut app, "e");
        assert_eq!(app.game.current_room(), "Sala de estar");
    }

    #[test]
    fn exploring_screen_shows_room_and_clues() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        press(&mut app, "d");
        let text = screen_text(&mut app);
        assert!(text.contains("Cozinha"));
        assert!(text.contains("Collected Clues (2)"));
        assert!(text.contains("Jardim"));
    }

    #[test]
    fn verdict_screen_renders() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        press(&mut app, "s");
        press(&mut app, "Jardineiro");
        app.handle_key(KeyCode::Enter);
        let text = screen_text(&mut app);
        assert!(text.contains("NOT PROVEN"));
        assert!(text.contains("Corroborating clues: 1/1"));
    }

    #[test]
    fn verdict_screen_fits_short_terminals() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        press(&mut app, "s");
        press(&mut app, "Jardineiro");
        app.handle_key(KeyCode::Enter);
        for height in 1..=12 {
            screen_text_sized(&mut app, 80, height);
        }
        assert!(screen_text_sized(&mut app, 80, 20).contains("NOT PROVEN"));
    }
}
