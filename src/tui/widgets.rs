use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::palette::Palette;

/// A widget that renders the 16-color palette as an 8x2 grid of colored
/// swatches, each labeled with its hex value.
pub struct PaletteWidget<'a> {
    palette: &'a Palette,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

fn to_color(c: &AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: &AppColor) -> Color {
    if c.relative_luminance() > 0.4 {
        Color::Black
    } else {
        Color::White
    }
}

/// Build a row of colored swatches. Each swatch is 9 chars wide with the hex
/// value printed on the colored background.
fn build_swatch_row(colors: &[AppColor; 16], start: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for c in &colors[start..start + 8] {
        let label = format!(" {} ", c.to_hex());
        spans.push(Span::styled(
            label,
            Style::default().bg(to_color(c)).fg(contrast_fg(c)),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Build a row of palette index labels below the swatches.
fn build_index_row(start: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for i in start..start + 8 {
        spans.push(Span::styled(
            format!("{:^9}", i),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Palette");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from("  Colors 0-7"),
            build_swatch_row(self.palette.colors(), 0),
            build_index_row(0),
            Line::from(""),
            Line::from("  Colors 8-15"),
            build_swatch_row(self.palette.colors(), 8),
            build_index_row(8),
            Line::from(""),
            Line::from("  press any key to exit"),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
