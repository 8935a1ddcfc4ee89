//! Terminal User Interface
//!
//! Full-screen front end for the mansion using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use crate::data::Tone;

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            border: Color::DarkGray,
        }
    }
}

/// Get color for a message tone
pub fn tone_color(tone: &Tone) -> Color {
    match tone {
        Tone::Info => Color::Gray,
        Tone::Discovery => Color::Yellow,
        Tone::Warning => Color::Red,
        Tone::Verdict => Color::Magenta,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// Center a `width` x `height` box inside `area`, clamped to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔════════════════════════════════════════════════════════╗
║                                                        ║
║   ██████╗ ███████╗████████╗███████╗ ██████╗████████╗   ║
║   ██╔══██╗██╔════╝╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝   ║
║   ██║  ██║█████╗     ██║   █████╗  ██║        ██║      ║
║   ██║  ██║██╔══╝     ██║   ██╔══╝  ██║        ██║      ║
║   ██████╔╝███████╗   ██║   ███████╗╚██████╗   ██║      ║
║   ╚═════╝ ╚══════╝   ╚═╝   ╚══════╝ ╚═════╝   ╚═╝      ║
║                                                        ║
║                  D E T E C T I V E                     ║
║                     Q  U  E  S  T                      ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " DETECTIVE QUEST ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════╗
║                   CONTROLS                    ║
╠═══════════════════════════════════════════════╣
║  e     Take the left path                     ║
║  d     Take the right path                    ║
║  v     Go back the way you came               ║
║  s     Stop exploring and make an accusation  ║
║  ?     Toggle this help                       ║
╠═══════════════════════════════════════════════╣
║                  ACCUSATION                   ║
╠═══════════════════════════════════════════════╣
║  Type the suspect's exact name, then Enter.   ║
║  At least two clues must point at them.       ║
╠═══════════════════════════════════════════════╣
║  q     Quit (title and verdict screens)       ║
╚═══════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(1),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (left panel + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),  // Side panel
            Constraint::Percentage(70),  // Main area
        ])
        .split(area)
        .to_vec()
}

/// Create the main area layout (message log + clues)
pub fn create_main_area_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),  // Narrative/messages
            Constraint::Percentage(40),  // Collected clues
        ])
        .split(area)
        .to_vec()
}
