//! Boxed text table for `--table` output.
//!
//! Column widths are measured in terminal cells, so wide glyphs (CJK, emoji,
//! the small-caps letters common in Free Fire nicknames) stay aligned.

use std::fmt::{self, Write};

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<String>,
    header_colors: Vec<Color>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Color header cells by column; columns past the end stay unstyled.
    #[must_use]
    pub fn header_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.header_colors = colors.into_iter().collect();
        self
    }

    pub fn add_row<I, S>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        for row in std::iter::once(&self.header).chain(&self.rows) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(w + 2));
    }
    line.push(right);
    line
}

fn pad(cell: &str, width: usize) -> String {
    let mut padded = String::with_capacity(cell.len() + width);
    padded.push_str(cell);
    padded.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    padded
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        if widths.is_empty() {
            return Ok(());
        }

        let write_row = |f: &mut fmt::Formatter<'_>, row: &[String], colors: &[Color]| {
            f.write_char('│')?;
            for (i, width) in widths.iter().enumerate() {
                let cell = pad(row.get(i).map_or("", String::as_str), *width);
                match colors.get(i) {
                    Some(color) => write!(f, " {} │", cell.with(*color))?,
                    None => write!(f, " {cell} │")?,
                }
            }
            f.write_char('\n')
        };

        writeln!(f, "{}", border(&widths, '┌', '┬', '┐'))?;
        if !self.header.is_empty() {
            write_row(f, &self.header, &self.header_colors)?;
        }
        for row in &self.rows {
            writeln!(f, "{}", border(&widths, '├', '┼', '┤'))?;
            write_row(f, row, &[])?;
        }
        write!(f, "{}", border(&widths, '└', '┴', '┘'))
    }
}
