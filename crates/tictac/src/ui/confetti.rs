//! Widget drawing a [`Confetti`] burst over whatever is already rendered.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::confetti::Confetti;

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Draws live particles; cells without a particle are left untouched.
#[derive(Debug, Clone, Copy)]
pub struct ConfettiWidget<'a> {
    confetti: &'a Confetti,
}

impl<'a> ConfettiWidget<'a> {
    /// Wraps a burst for rendering.
    pub fn new(confetti: &'a Confetti) -> Self {
        Self { confetti }
    }
}

impl Widget for ConfettiWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for p in self.confetti.particles() {
            if p.x < 0.0 || p.y < 0.0 {
                continue;
            }
            let (x, y) = (area.x + p.x as u16, area.y + p.y as u16);
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(p.glyph)
                    .set_fg(PALETTE[usize::from(p.hue) % PALETTE.len()]);
            }
        }
    }
}
