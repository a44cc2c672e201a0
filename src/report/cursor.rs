//! Explicit cursor over report lines.
//!
//! The parser pulls lines one at a time; bin and tuple declarations pull
//! one extra line for their hit count. Whatever that extra line holds, it
//! has been consumed and the main loop never sees it.

/// Forward-only cursor over trimmed lines.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    /// Split on `\n` and trim each line.
    ///
    /// A trailing newline yields a final empty line.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').map(str::trim).collect(),
            position: 0,
        }
    }

    /// Take the next line, advancing the cursor.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.position).copied()?;
        self.position += 1;
        Some(line)
    }

    /// Number of lines consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_trimmed() {
        let mut cursor = LineCursor::new("  Design: x  \n\tbin a\t");
        assert_eq!(cursor.next_line(), Some("Design: x"));
        assert_eq!(cursor.next_line(), Some("bin a"));
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_trailing_newline_yields_empty_line() {
        let mut cursor = LineCursor::new("bin a\n");
        assert_eq!(cursor.next_line(), Some("bin a"));
        assert_eq!(cursor.next_line(), Some(""));
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_position_counts_consumed_lines() {
        let mut cursor = LineCursor::new("a\nb");
        assert_eq!(cursor.position(), 0);
        cursor.next_line();
        assert_eq!(cursor.position(), 1);
        cursor.next_line();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_exhausted_cursor_stays_exhausted() {
        let mut cursor = LineCursor::new("only");
        cursor.next_line();
        assert_eq!(cursor.next_line(), None);
        assert_eq!(cursor.next_line(), None);
        assert_eq!(cursor.position(), 1);
    }
}
