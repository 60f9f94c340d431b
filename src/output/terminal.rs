use crossterm::{
    cursor::{MoveDown, MoveLeft, MoveRight, MoveUp},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write};

use super::{ClearDirection, OutputSink};

/// Erase from the start of the line to the cursor (crossterm has no command for it).
const CLEAR_LINE_LEFT: &str = "\x1b[1K";

/// Sink that queues crossterm commands on any writer.
///
/// Commands are buffered until [`OutputSink::flush`]; the menu flushes once
/// per frame so a redraw reaches the terminal in one write.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn clamp_u16(value: i32) -> u16 {
    value.unsigned_abs().min(u32::from(u16::MAX)) as u16
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) -> io::Result<()> {
        // A zero count would still move one cell, so skip it entirely.
        if dx < 0 {
            queue!(self.out, MoveLeft(clamp_u16(dx)))?;
        } else if dx > 0 {
            queue!(self.out, MoveRight(clamp_u16(dx)))?;
        }
        if dy < 0 {
            queue!(self.out, MoveUp(clamp_u16(dy)))?;
        } else if dy > 0 {
            queue!(self.out, MoveDown(clamp_u16(dy)))?;
        }
        Ok(())
    }

    fn clear_line(&mut self, direction: ClearDirection) -> io::Result<()> {
        match direction {
            ClearDirection::Left => queue!(self.out, Print(CLEAR_LINE_LEFT)),
            ClearDirection::Right => queue!(self.out, Clear(ClearType::UntilNewLine)),
            ClearDirection::Whole => queue!(self.out, Clear(ClearType::CurrentLine)),
        }
    }

    fn clear_screen_down(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::FromCursorDown))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(sink: TerminalSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).expect("utf8 output")
    }

    #[test]
    fn moves_emit_csi_sequences() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.move_cursor(-3, 2).expect("move");
        assert_eq!(rendered(sink), "\x1b[3D\x1b[2B");
    }

    #[test]
    fn zero_moves_emit_nothing() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.move_cursor(0, 0).expect("move");
        assert!(rendered(sink).is_empty());
    }

    #[test]
    fn writeln_clears_then_writes_crlf() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.writeln("row").expect("writeln");
        assert_eq!(rendered(sink), "\x1b[2Krow\r\n");
    }

    #[test]
    fn clears_map_to_erase_sequences() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.clear_line(ClearDirection::Left).expect("left");
        sink.clear_line(ClearDirection::Right).expect("right");
        sink.clear_screen_down().expect("down");
        assert_eq!(rendered(sink), "\x1b[1K\x1b[K\x1b[J");
    }
}
