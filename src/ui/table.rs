//! Box-drawn tables for hourly and daily forecasts, search results and
//! cache listings.

use console::measure_text_width;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

#[derive(Debug)]
struct Column {
    title: String,
    width: usize,
    align: Align,
}

/// Widths are terminal columns, so `°C`, weather glyphs and ANSI
/// styling don't break alignment.
#[derive(Debug)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(titles: Vec<&str>) -> Self {
        let columns = titles
            .into_iter()
            .map(|t| Column {
                title: t.to_string(),
                width: measure_text_width(t),
                align: Align::Left,
            })
            .collect();
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Right-align column `index`, for numbers.
    pub fn align_right(mut self, index: usize) -> Self {
        if let Some(column) = self.columns.get_mut(index) {
            column.align = Align::Right;
        }
        self
    }

    /// Missing trailing cells render empty; extra cells are dropped.
    pub fn add_row<S: AsRef<str>>(&mut self, cells: &[S]) {
        let row: Vec<String> = cells
            .iter()
            .take(self.columns.len())
            .map(|c| c.as_ref().to_string())
            .collect();
        for (column, cell) in self.columns.iter_mut().zip(&row) {
            column.width = column.width.max(measure_text_width(cell));
        }
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    fn rule(&self, f: &mut fmt::Formatter<'_>, [left, mid, right]: [char; 3]) -> fmt::Result {
        let segments: Vec<String> = self
            .columns
            .iter()
            .map(|c| "─".repeat(c.width + 2))
            .collect();
        write!(f, "{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn line<'a>(
        &self,
        f: &mut fmt::Formatter<'_>,
        mut cells: impl Iterator<Item = &'a str>,
    ) -> fmt::Result {
        write!(f, "│")?;
        for column in &self.columns {
            let cell = cells.next().unwrap_or("");
            let pad = " ".repeat(column.width.saturating_sub(measure_text_width(cell)));
            match column.align {
                Align::Left => write!(f, " {}{} │", cell, pad)?,
                Align::Right => write!(f, " {}{} │", pad, cell)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rule(f, ['┌', '┬', '┐'])?;
        writeln!(f)?;
        self.line(f, self.columns.iter().map(|c| c.title.as_str()))?;
        writeln!(f)?;
        self.rule(f, ['├', '┼', '┤'])?;
        for row in &self.rows {
            writeln!(f)?;
            self.line(f, row.iter().map(String::as_str))?;
        }
        writeln!(f)?;
        self.rule(f, ['└', '┴', '┘'])
    }
}
