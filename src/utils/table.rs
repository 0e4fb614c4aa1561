//! Grid-style text table rendering.
//!
//! Produces tables of the form:
//!
//! ```text
//! +------------+-----------------+
//! | Endpoint   |  Request Count  |
//! +============+=================+
//! | /api       |        2        |
//! +------------+-----------------+
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Renders headers and rows as a grid table. `aligns` gives the per-column
/// cell alignment and must have one entry per header; rows shorter than the
/// header count are padded with empty cells.
pub fn render_grid(headers: &[&str], rows: &[Vec<String>], aligns: &[Align]) -> String {
    let columns = headers.len();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            let len = cell.chars().count();
            if len > widths[i] {
                widths[i] = len;
            }
        }
    }

    let rule = |fill: char| {
        let mut line = String::from("+");
        for w in &widths {
            line.extend(std::iter::repeat(fill).take(w + 2));
            line.push('+');
        }
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("|");
        for i in 0..columns {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            line.push(' ');
            line.push_str(&pad(cell, widths[i], aligns[i]));
            line.push_str(" |");
        }
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut out = String::new();
    out.push_str(&rule('-'));
    out.push('\n');
    out.push_str(&format_row(&header_cells));
    out.push('\n');
    out.push_str(&rule('='));
    for row in rows {
        out.push('\n');
        out.push_str(&format_row(row));
        out.push('\n');
        out.push_str(&rule('-'));
    }
    out
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let len = cell.chars().count();
    let fill = width.saturating_sub(len);
    match align {
        Align::Left => format!("{}{}", cell, " ".repeat(fill)),
        Align::Center => {
            let left = fill / 2;
            let right = fill - left;
            format!("{}{}{}", " ".repeat(left), cell, " ".repeat(right))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_headers_and_values() {
        let table = render_grid(
            &["Endpoint", "Request Count"],
            &[vec!["/api".to_string(), "2".to_string()]],
            &[Align::Left, Align::Center],
        );

        assert!(table.contains("Endpoint"));
        assert!(table.contains("Request Count"));
        assert!(table.contains("/api"));
        // "2" is centered in the 13-wide "Request Count" column.
        assert!(table.contains("      2      "));
    }

    #[test]
    fn test_header_rule_uses_equals() {
        let table = render_grid(
            &["A"],
            &[vec!["x".to_string()]],
            &[Align::Left],
        );
        assert!(table.contains("+==="));
        assert!(table.starts_with("+---"));
        assert!(table.ends_with("+---+"));
    }

    #[test]
    fn test_centered_alignment() {
        // Column width is set by the 5-char header, so "2" gets 2 spaces on
        // each side within the cell.
        let table = render_grid(
            &["Count"],
            &[vec!["2".to_string()]],
            &[Align::Center],
        );
        assert!(table.contains("|   2   |"));
    }

    #[test]
    fn test_short_row_padded() {
        let table = render_grid(
            &["A", "B"],
            &[vec!["x".to_string()]],
            &[Align::Left, Align::Left],
        );
        let lines: Vec<&str> = table.lines().collect();
        // Every line has the same width.
        let first = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == first));
    }

    #[test]
    fn test_wide_cell_expands_column() {
        let table = render_grid(
            &["A"],
            &[vec!["longer-than-header".to_string()]],
            &[Align::Left],
        );
        assert!(table.contains("longer-than-header"));
    }
}
