//! Terminal setup, teardown and drawing.

use std::io::{self, Stdout, Write};
use std::panic;
use std::time::Duration;

use casebook_table::render::SpanStyle;
use casebook_table::text::{display_width, truncate_to_width};
use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::app::ScreenLine;

/// Raw-mode alternate screen, restored on drop and on panic.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for input, then drain whatever else is pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    pub fn draw(&mut self, lines: &[ScreenLine], width: u16) -> io::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;

        for (y, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            let background = if line.highlight {
                Some(Color::DarkBlue)
            } else if line.alternate {
                Some(Color::Rgb { r: 30, g: 30, b: 36 })
            } else {
                None
            };

            let mut room = width as usize;
            for span in &line.spans {
                if room == 0 {
                    break;
                }
                let text = truncate_to_width(&span.text, room);
                room = room.saturating_sub(display_width(&text));

                if let Some(bg) = background {
                    queue!(self.stdout, SetBackgroundColor(bg))?;
                }
                apply_style(&mut self.stdout, span.style)?;
                queue!(self.stdout, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
            }

            if let Some(bg) = background
                && room > 0
            {
                queue!(self.stdout, SetBackgroundColor(bg), Print(" ".repeat(room)), ResetColor)?;
            }
        }

        self.stdout.flush()
    }
}

fn apply_style(out: &mut Stdout, style: SpanStyle) -> io::Result<()> {
    match style {
        SpanStyle::Normal => Ok(()),
        SpanStyle::Header => queue!(out, SetAttribute(Attribute::Bold), SetForegroundColor(Color::White)),
        SpanStyle::Link => queue!(out, SetForegroundColor(Color::Cyan), SetAttribute(Attribute::Underlined)),
        SpanStyle::Status => queue!(out, SetForegroundColor(Color::Yellow)),
        SpanStyle::Muted => queue!(out, SetForegroundColor(Color::DarkGrey)),
        SpanStyle::Active => queue!(
            out,
            SetAttribute(Attribute::Bold),
            SetAttribute(Attribute::Reverse)
        ),
        SpanStyle::Badge => queue!(out, SetForegroundColor(Color::Magenta)),
        SpanStyle::Accent => queue!(out, SetForegroundColor(Color::Green)),
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}
