use crate::domain::model::Report;

pub const HEADERS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];
pub const UNKNOWN_SALARY: &str = "n/a";
const PROCESSED_COLUMN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left,
    Right,
}

/// Box-drawing table with double lines, a rule under the heading row and
/// an optional title centered in the top border.
#[derive(Debug, Clone, Default)]
pub struct DoubleTable {
    rows: Vec<Vec<String>>,
    title: Option<String>,
    justify: Vec<Justify>,
}

impl DoubleTable {
    /// The first row is the heading.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            title: None,
            justify: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn justify(mut self, column: usize, justify: Justify) -> Self {
        if self.justify.len() <= column {
            self.justify.resize(column + 1, Justify::Left);
        }
        self.justify[column] = justify;
        self
    }

    fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        for row in &self.rows {
            for (column, cell) in row.iter().enumerate() {
                widths[column] = widths[column].max(cell.chars().count());
            }
        }
        widths
    }

    fn border(widths: &[usize], left: char, separator: char, right: char) -> String {
        let segments: Vec<String> = widths.iter().map(|w| "═".repeat(w + 2)).collect();
        let separator = separator.to_string();
        format!("{left}{}{right}", segments.join(separator.as_str()))
    }

    fn top_border(&self, widths: &[usize]) -> String {
        let border = Self::border(widths, '╔', '╦', '╗');
        let Some(title) = self.title.as_deref() else {
            return border;
        };

        let mut chars: Vec<char> = border.chars().collect();
        let inner = chars.len().saturating_sub(2);
        let title_len = title.chars().count();
        if title_len == 0 || title_len > inner {
            return border;
        }

        let start = 1 + (inner - title_len) / 2;
        for (offset, ch) in title.chars().enumerate() {
            chars[start + offset] = ch;
        }
        chars.into_iter().collect()
    }

    fn row_line(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let text = row.get(column).map(String::as_str).unwrap_or("");
                let fill = " ".repeat(width - text.chars().count());
                match self.justify.get(column).copied().unwrap_or_default() {
                    Justify::Left => format!(" {text}{fill} "),
                    Justify::Right => format!(" {fill}{text} "),
                }
            })
            .collect();
        format!("║{}║", cells.join("║"))
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut lines = vec![self.top_border(&widths)];

        for (index, row) in self.rows.iter().enumerate() {
            lines.push(self.row_line(row, &widths));
            if index == 0 && self.rows.len() > 1 {
                lines.push(Self::border(&widths, '╠', '╬', '╣'));
            }
        }

        lines.push(Self::border(&widths, '╚', '╩', '╝'));
        lines.join("\n")
    }
}

/// Renders a platform report with the fixed heading and a right-justified processed column.
pub fn render_table(report: &Report) -> String {
    let mut rows = vec![HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>()];
    for row in &report.rows {
        let result = &row.result;
        rows.push(vec![
            row.language.clone(),
            result.vacancies_found.to_string(),
            result.vacancies_processed.to_string(),
            result
                .average_salary
                .map(|salary| salary.to_string())
                .unwrap_or_else(|| UNKNOWN_SALARY.to_string()),
        ]);
    }

    DoubleTable::new(rows)
        .with_title(report.title.as_str())
        .justify(PROCESSED_COLUMN, Justify::Right)
        .render()
}
