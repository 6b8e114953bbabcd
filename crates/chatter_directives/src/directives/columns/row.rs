use chatter_constant::style::{NORMAL, UNDERLINE};
use chatter_core::style;

use super::args::ColumnSpec;

/// Accumulates cells until a row is complete.
#[derive(Debug)]
pub struct RowBuilder<'a> {
    spec: &'a ColumnSpec,
    buffer: String,
    next_column: usize,
}

impl<'a> RowBuilder<'a> {
    pub fn new(spec: &'a ColumnSpec) -> Self {
        Self {
            spec,
            buffer: Self::row_start(spec),
            next_column: 0,
        }
    }

    fn row_start(spec: &ColumnSpec) -> String {
        if spec.emphasis {
            UNDERLINE.to_string()
        } else {
            String::new()
        }
    }

    pub fn next_column(&self) -> usize {
        self.next_column
    }

    /// Adds one raw line as the next cell. Returns the finished row when the
    /// cell completes it.
    pub fn push(&mut self, line: &str) -> Option<String> {
        let width = self.spec.widths[self.next_column];
        let mut cell = String::with_capacity(line.len() + 2);
        cell.push_str(chatter_core::text::limited_trim(line));
        cell.push_str(NORMAL);
        if self.spec.emphasis {
            cell.push_str(UNDERLINE);
        }

        self.buffer.push_str(&self.spec.separator);
        self.buffer
            .push_str(&style::fit(&cell, width, self.spec.padding));
        self.next_column += 1;

        if self.next_column == self.spec.widths.len() {
            Some(self.flush())
        } else {
            None
        }
    }

    /// Closes the current row and starts a new one.
    pub fn flush(&mut self) -> String {
        let mut row = std::mem::replace(&mut self.buffer, Self::row_start(self.spec));
        row.push_str(&self.spec.separator);
        row.push('\n');
        self.next_column = 0;
        row
    }
}
