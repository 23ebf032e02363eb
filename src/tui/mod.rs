pub mod widgets;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::palette::Palette;
use self::widgets::PaletteWidget;

/// Show the palette as colored swatches in the alternate screen.
/// Blocks until any key is pressed, then restores the terminal.
pub fn run(palette: &Palette) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = show(&mut terminal, palette);
    ratatui::restore();
    result
}

fn show(terminal: &mut ratatui::DefaultTerminal, palette: &Palette) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            frame.render_widget(PaletteWidget::new(palette), frame.area());
        })?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
