//! Output capability the renderer draws through.
//!
//! Everything the menu shows goes through an [`OutputSink`]; the menu never
//! touches stdout directly, so frames can be captured in memory.

mod terminal;
mod virtual_terminal;

pub use terminal::TerminalSink;
pub use virtual_terminal::VirtualTerminal;

use std::io;

/// Which part of the current line to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearDirection {
    /// From the start of the line up to and including the cursor.
    Left,
    /// From the cursor to the end of the line.
    Right,
    Whole,
}

/// Minimal terminal surface: text, relative cursor moves and clears.
pub trait OutputSink {
    /// Write text at the cursor. `\r` returns to column 0, `\n` moves one row down.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Move the cursor by a relative offset; negative values go left/up.
    fn move_cursor(&mut self, dx: i32, dy: i32) -> io::Result<()>;

    fn clear_line(&mut self, direction: ClearDirection) -> io::Result<()>;

    /// Clear from the cursor to the end of the screen.
    fn clear_screen_down(&mut self) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Clear the current line, write `text`, and move to the start of the next line.
    fn writeln(&mut self, text: &str) -> io::Result<()> {
        self.clear_line(ClearDirection::Whole)?;
        self.write(text)?;
        self.write("\r\n")
    }

    /// Write `text` in place, leaving the cursor where it was.
    fn inscribe(&mut self, text: &str) -> io::Result<()> {
        let mut rows = 0i32;
        for (idx, line) in text.split('\n').enumerate() {
            if idx > 0 {
                self.move_cursor(0, 1)?;
                rows += 1;
            }
            self.write(line)?;
            self.move_cursor(-(line.chars().count() as i32), 0)?;
        }
        self.move_cursor(0, -rows)
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) -> io::Result<()> {
        (**self).move_cursor(dx, dy)
    }

    fn clear_line(&mut self, direction: ClearDirection) -> io::Result<()> {
        (**self).clear_line(direction)
    }

    fn clear_screen_down(&mut self) -> io::Result<()> {
        (**self).clear_screen_down()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writeln_replaces_line_and_moves_down() {
        let mut screen = VirtualTerminal::new();
        screen.write("stale text here").expect("write");
        screen.move_cursor(-100, 0).expect("home");
        screen.writeln("fresh").expect("writeln");
        assert_eq!(screen.lines(), vec!["fresh".to_string()]);
        assert_eq!(screen.cursor(), (0, 1));
    }

    #[test]
    fn inscribe_keeps_cursor_in_place() {
        let mut screen = VirtualTerminal::new();
        screen.write("> ").expect("write");
        screen.inscribe("note\nsecond").expect("inscribe");
        assert_eq!(screen.cursor(), (2, 0));
        assert_eq!(screen.line(0), "> note");
        assert_eq!(screen.line(1), "  second");
    }

    #[test]
    fn mutable_references_are_sinks() {
        let mut screen = VirtualTerminal::new();
        {
            let mut sink: &mut VirtualTerminal = &mut screen;
            OutputSink::writeln(&mut sink, "via reference").expect("writeln");
        }
        assert_eq!(screen.line(0), "via reference");
    }
}
