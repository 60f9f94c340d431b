use std::io;

use super::{ClearDirection, OutputSink};

/// In-memory terminal that tracks the cursor and a grid of characters.
///
/// Rows grow on demand and lines never wrap, matching how the menu lays out
/// frames. Cursor moves clamp at the top-left corner like a real terminal.
#[derive(Debug, Default, Clone)]
pub struct VirtualTerminal {
    rows: Vec<Vec<char>>,
    col: usize,
    row: usize,
    writes: usize,
}

impl VirtualTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position as `(column, row)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    /// Text of one row with trailing blanks removed.
    pub fn line(&self, row: usize) -> String {
        self.rows
            .get(row)
            .map(|cells| cells.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// All rows, trailing blank rows dropped.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = (0..self.rows.len()).map(|row| self.line(row)).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines
    }

    /// Number of `write` calls seen, so tests can tell whether a redraw happened.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn current_row(&mut self) -> &mut Vec<char> {
        if self.rows.len() <= self.row {
            self.rows.resize_with(self.row + 1, Vec::new);
        }
        &mut self.rows[self.row]
    }

    fn put(&mut self, ch: char) {
        let col = self.col;
        let row = self.current_row();
        if row.len() <= col {
            row.resize(col + 1, ' ');
        }
        row[col] = ch;
        self.col += 1;
    }
}

fn offset(position: usize, delta: i32) -> usize {
    if delta < 0 {
        position.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        position.saturating_add(delta as usize)
    }
}

impl OutputSink for VirtualTerminal {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writes += 1;
        for ch in text.chars() {
            match ch {
                '\r' => self.col = 0,
                '\n' => self.row += 1,
                _ => self.put(ch),
            }
        }
        Ok(())
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) -> io::Result<()> {
        self.col = offset(self.col, dx);
        self.row = offset(self.row, dy);
        Ok(())
    }

    fn clear_line(&mut self, direction: ClearDirection) -> io::Result<()> {
        let col = self.col;
        let row = self.current_row();
        match direction {
            ClearDirection::Left => {
                for cell in row.iter_mut().take(col + 1) {
                    *cell = ' ';
                }
            }
            ClearDirection::Right => row.truncate(col),
            ClearDirection::Whole => row.clear(),
        }
        Ok(())
    }

    fn clear_screen_down(&mut self) -> io::Result<()> {
        let col = self.col;
        self.current_row().truncate(col);
        self.rows.truncate(self.row + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carriage_return_and_newline_are_independent() {
        let mut screen = VirtualTerminal::new();
        screen.write("ab\ncd").expect("write");
        assert_eq!(screen.line(0), "ab");
        assert_eq!(screen.line(1), "  cd");
        screen.write("\r\nef").expect("write");
        assert_eq!(screen.line(2), "ef");
        assert_eq!(screen.cursor(), (2, 2));
    }

    #[test]
    fn cursor_moves_clamp_at_origin() {
        let mut screen = VirtualTerminal::new();
        screen.move_cursor(-5, -5).expect("move");
        assert_eq!(screen.cursor(), (0, 0));
        screen.move_cursor(3, 2).expect("move");
        assert_eq!(screen.cursor(), (3, 2));
    }

    #[test]
    fn clear_line_directions() {
        let mut screen = VirtualTerminal::new();
        screen.write("abcdef").expect("write");
        screen.move_cursor(-3, 0).expect("move");
        screen.clear_line(ClearDirection::Right).expect("clear right");
        assert_eq!(screen.line(0), "abc");
        screen.move_cursor(-2, 0).expect("move");
        screen.clear_line(ClearDirection::Left).expect("clear left");
        assert_eq!(screen.line(0), "  c");
        screen.clear_line(ClearDirection::Whole).expect("clear whole");
        assert_eq!(screen.line(0), "");
    }

    #[test]
    fn clear_screen_down_drops_rows_below() {
        let mut screen = VirtualTerminal::new();
        screen.write("one\r\ntwo\r\nthree").expect("write");
        screen.move_cursor(-100, -1).expect("move");
        screen.clear_screen_down().expect("clear");
        assert_eq!(screen.lines(), vec!["one".to_string()]);
    }
}
