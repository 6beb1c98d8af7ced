/// Box-drawn table with one width per column.
///
/// Column widths grow to fit the widest cell, between the header width and
/// the column's maximum. Longer cells are truncated.
pub struct TableFormatter {
    headers: Vec<&'static str>,
    widths: Vec<usize>,
}

impl TableFormatter {
    /// `columns` pairs each header with the widest the column may get.
    pub fn new(columns: &[(&'static str, usize)], rows: &[Vec<String>]) -> Self {
        let headers = columns.iter().map(|(header, _)| *header).collect();
        let widths = columns
            .iter()
            .enumerate()
            .map(|(index, (header, max_width))| {
                let header_width = header.chars().count();
                rows.iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    .clamp(header_width, (*max_width).max(header_width))
            })
            .collect();

        Self { headers, widths }
    }

    pub fn print_table(&self, rows: &[Vec<String>]) {
        for line in self.render(rows) {
            println!("{}", line);
        }
    }

    pub fn render(&self, rows: &[Vec<String>]) -> Vec<String> {
        let mut lines = vec![
            self.border('┌', '┬', '┐'),
            self.row(self.headers.iter().copied()),
            self.border('├', '┼', '┤'),
        ];
        for row in rows {
            lines.push(self.row(row.iter().map(String::as_str)));
        }
        lines.push(self.border('└', '┴', '┘'));
        lines
    }

    fn row<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let mut cells = cells;
        let rendered: Vec<String> = self
            .widths
            .iter()
            .map(|width| truncate(cells.next().unwrap_or(""), *width))
            .collect();
        format!("│ {} │", rendered.join(" │ "))
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self
            .widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&middle.to_string()), right)
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_pads_and_cuts() {
        assert_eq!(truncate("dev", 6), "dev   ");
        assert_eq!(truncate("development", 6), "dev...");
        assert_eq!(truncate("日本語のプリセット", 5), "日本...");
    }

    #[test]
    fn test_widths_fit_content_within_bounds() {
        let rows = vec![
            vec!["termdeck.preset.dev".to_string(), "Dev".to_string()],
            vec!["termdeck.run".to_string(), String::new()],
        ];
        let table = TableFormatter::new(&[("Command", 40), ("Preset", 3)], &rows);
        assert_eq!(table.widths, vec![19, 6]);
    }

    #[test]
    fn test_render_draws_box() {
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        let table = TableFormatter::new(&[("X", 5), ("Y", 5)], &rows);
        assert_eq!(
            table.render(&rows),
            vec![
                "┌───┬───┐",
                "│ X │ Y │",
                "├───┼───┤",
                "│ a │ b │",
                "└───┴───┘",
            ]
        );
    }

    #[test]
    fn test_short_rows_are_padded() {
        let rows = vec![vec!["only".to_string()]];
        let table = TableFormatter::new(&[("A", 10), ("B", 10)], &rows);
        assert_eq!(table.render(&rows)[3], "│ only │   │");
    }
}
