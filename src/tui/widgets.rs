//! Custom widgets for the game UI

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// How many clues back the accusation, against the count needed
pub struct CorroborationMeter {
    value: usize,
    max: usize,
    threshold: usize,
    label: String,
    met_color: Color,
    short_color: Color,
}

impl CorroborationMeter {
    pub fn new(label: &str, value: usize, max: usize) -> Self {
        Self {
            value,
            max: max.max(1),
            threshold: 1,
            label: label.to_string(),
            met_color: Color::Green,
            short_color: Color::Red,
        }
    }

    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn met_color(mut self, color: Color) -> Self {
        self.met_color = color;
        self
    }

    pub fn short_color(mut self, color: Color) -> Self {
        self.short_color = color;
        self
    }
}

impl Widget for CorroborationMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let color = if self.value >= self.threshold {
            self.met_color
        } else {
            self.short_color
        };

        let label = format!("{}: {}/{} (need {})", self.label, self.value, self.max, self.threshold);
        buf.set_string(area.x, area.y, &label, Style::default().fg(color));

        if area.height > 1 {
            let inner = area.width - 2;
            let filled = (self.value.min(self.max) * inner as usize / self.max) as u16;
            let mark = (self.threshold.min(self.max) * inner as usize / self.max) as u16;
            let bar_y = area.y + 1;
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());

            for x in 0..inner {
                let (symbol, style) = if x < filled {
                    ("█", Style::default().fg(color))
                } else if x == mark {
                    ("│", Style::default().fg(Color::White))
                } else {
                    ("░", Style::default().fg(Color::DarkGray))
                };
                buf.set_string(area.x + 1 + x, bar_y, symbol, style);
            }
        }
    }
}

/// Framed box for the verdict
pub struct VerdictBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl VerdictBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Magenta,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for VerdictBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 2 {
            return;
        }
        let style = Style::default().fg(self.border_color);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(area.x, bottom, "╚", style);
        for x in area.x + 1..right {
            buf.set_string(x, area.y, "═", style);
            buf.set_string(x, bottom, "═", style);
        }
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(right, bottom, "╝", style);

        let title = format!(" {} ", self.title);
        let title_width = title.chars().count() as u16;
        if title_width + 2 <= area.width {
            buf.set_string(area.x + (area.width - title_width) / 2, area.y, &title, style);
        }

        for y in area.y + 1..bottom {
            buf.set_string(area.x, y, "║", style);
            buf.set_string(right, y, "║", style);
        }

        for (i, line) in self.content.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_stringn(area.x + 2, y, line, (area.width - 4) as usize, Style::default().fg(Color::White));
        }
    }
}
