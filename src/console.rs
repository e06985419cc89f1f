//! Line-oriented terminal front end.
//!
//! Nothing in here knows about pools or histories; the session hands it
//! strings to show and asks it for lines of input.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Stylize},
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthStr;

use crate::{config::Settings, draw::events::pad_cells};

const TITLE: &str = "Draw System";
const BOX_WIDTH: usize = 70;
const STATUS_WIDTH: usize = 60;

/// Timing of the spinning "reel" shown before a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reel {
    pub frames: usize,
    pub base_delay: Duration,
    /// Every this many frames the delay grows by 10 ms.
    pub slow_every: usize,
}

impl Reel {
    pub const NAMES: Reel = Reel {
        frames: 26,
        base_delay: Duration::from_millis(45),
        slow_every: 10,
    };

    pub const NUMBERS: Reel = Reel {
        frames: 32,
        base_delay: Duration::from_millis(35),
        slow_every: 12,
    };

    pub fn delay(&self, frame: usize) -> Duration {
        let steps = (frame / self.slow_every.max(1)) as u64;
        self.base_delay + Duration::from_millis(10 * steps)
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
    animation: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, settings: &Settings) -> Self {
        Self {
            input,
            output,
            color: settings.color,
            animation: settings.animation,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// One line without its terminator, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        let label = self.paint(label, Color::Cyan);
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Clears the screen (when styled) and draws the boxed title block.
    pub fn header(&mut self, title: &str, subtitle: Option<&str>) -> io::Result<()> {
        if self.color {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            writeln!(self.output)?;
        }

        let border = self.paint(&format!("+{}+", "-".repeat(BOX_WIDTH - 2)), Color::Cyan);
        writeln!(self.output, "{border}")?;
        self.boxed_line(TITLE, Color::Yellow)?;
        self.boxed_line("", Color::Grey)?;
        self.boxed_line(title, Color::Green)?;
        if let Some(subtitle) = subtitle {
            self.boxed_line("", Color::Grey)?;
            self.boxed_line(subtitle, Color::Grey)?;
        }
        writeln!(self.output, "{border}")?;
        writeln!(self.output)
    }

    fn boxed_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        let inner = BOX_WIDTH - 2;
        let left = inner.saturating_sub(text.width()) / 2;
        let centered = pad_cells(&format!("{}{text}", " ".repeat(left)), inner);
        let edge = self.paint("|", Color::Cyan);
        let centered = self.paint(&centered, color);
        writeln!(self.output, "{edge}{centered}{edge}")
    }

    pub fn status_bar(&mut self, left: &str, right: &str) -> io::Result<()> {
        let rule = self.paint(&"-".repeat(STATUS_WIDTH), Color::DarkGrey);
        writeln!(self.output, "{rule}")?;
        let spaces = STATUS_WIDTH.saturating_sub(left.width()).max(1);
        writeln!(self.output, "{left}{}{right}", " ".repeat(spaces))?;
        writeln!(self.output)
    }

    pub fn menu<S: AsRef<str>>(&mut self, items: &[S]) -> io::Result<()> {
        for item in items {
            let item = self.paint(item.as_ref(), Color::Cyan);
            writeln!(self.output, "{item}")?;
        }
        writeln!(self.output)
    }

    /// Shows a menu and reads the choice.
    pub fn choose<S: AsRef<str>>(&mut self, items: &[S]) -> io::Result<Option<String>> {
        self.menu(items)?;
        self.prompt("Option: ")
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let message = self.paint(message, Color::Green);
        writeln!(self.output, "{message}")
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let message = self.paint(message, Color::Red);
        writeln!(self.output, "{message}")
    }

    pub fn note(&mut self, message: &str) -> io::Result<()> {
        let message = self.paint(message, Color::DarkGrey);
        writeln!(self.output, "{message}")
    }

    pub fn plain(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// `🎉 label: value`, with the value highlighted.
    pub fn result(&mut self, label: &str, value: impl Display) -> io::Result<()> {
        let label = self.paint(&format!("🎉 {label}: "), Color::Green);
        let value = self.paint(&value.to_string(), Color::Yellow);
        writeln!(self.output, "\n{label}{value}")
    }

    /// `1. first`, `2. second`, ... or the placeholder for an empty list.
    pub fn numbered_list<T: Display>(&mut self, items: &[T], empty: &str) -> io::Result<()> {
        writeln!(self.output)?;
        if items.is_empty() {
            return self.note(empty);
        }
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "{}. {item}", i + 1)?;
        }
        Ok(())
    }

    pub fn pause(&mut self) -> io::Result<()> {
        let message = self.paint("Press Enter to continue...", Color::Green);
        write!(self.output, "\n{message}")?;
        self.output.flush()?;
        self.read_line()?;
        writeln!(self.output)
    }

    /// Spins through `frames` candidates produced by `next`.
    /// Does nothing when animation is off.
    pub fn reel(&mut self, reel: Reel, mut next: impl FnMut() -> String) -> io::Result<()> {
        if !self.animation {
            return Ok(());
        }

        let start = self.paint("Press Enter to start the draw...", Color::Magenta);
        write!(self.output, "{start}")?;
        self.output.flush()?;
        self.read_line()?;

        let arrow = self.paint(">>>", Color::Cyan);
        for frame in 0..reel.frames {
            let candidate = pad_cells(&next(), 30);
            write!(self.output, "\r{arrow} {candidate}")?;
            self.output.flush()?;
            thread::sleep(reel.delay(frame));
        }
        writeln!(self.output)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            &Settings::scripted(0),
        )
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut console = console("one\r\ntwo\nthree");
        assert_eq!(console.read_line().unwrap().as_deref(), Some("one"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("two"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("three"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_header_is_boxed_and_centered() {
        let mut console = console("");
        console.header("Main menu", Some("王小明")).unwrap();
        let out = output(console);
        let boxed: Vec<&str> = out.lines().filter(|l| l.starts_with('|')).collect();
        assert!(!boxed.is_empty());
        for line in &boxed {
            assert_eq!(line.width(), BOX_WIDTH, "{line:?}");
        }
        assert!(out.contains("Main menu"));
        assert!(out.contains("王小明"));
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let mut console = console("");
        console.header("Title", None).unwrap();
        console.error("bad").unwrap();
        let out = output(console);
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_numbered_list() {
        let mut console = console("");
        console.numbered_list(&["a", "b"], "(empty)").unwrap();
        console.numbered_list::<&str>(&[], "(empty)").unwrap();
        let out = output(console);
        assert!(out.contains("1. a\n2. b\n"));
        assert!(out.contains("(empty)"));
    }

    #[test]
    fn test_reel_disabled_reads_nothing() {
        let mut console = console("keep\n");
        console.reel(Reel::NAMES, || "x".to_string()).unwrap();
        assert_eq!(console.read_line().unwrap().as_deref(), Some("keep"));
    }

    #[test]
    fn test_reel_delay_grows() {
        assert_eq!(Reel::NAMES.delay(0), Duration::from_millis(45));
        assert_eq!(Reel::NAMES.delay(10), Duration::from_millis(55));
        assert_eq!(Reel::NUMBERS.delay(31), Duration::from_millis(55));
    }
}
