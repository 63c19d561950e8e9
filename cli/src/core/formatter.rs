use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// A list item that can be laid out as one row of a table.
pub trait TableRow {
    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    fn markdown_headers() -> &'static [&'static str] {
        Self::headers()
    }

    /// Alignment row cells, e.g. `:----:` for a centered column.
    fn markdown_alignment() -> &'static [&'static str];

    fn markdown_cells(&self) -> Vec<String> {
        self.cells()
    }
}

fn render_table<T: TableRow>(list: &[T]) -> String {
    let headers: Vec<String> = T::headers().iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = list.iter().map(TableRow::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = render_table_line(&headers, &widths);
    for row in &rows {
        out.push_str(&render_table_line(row, &widths));
    }
    out
}

fn render_table_line(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}

fn render_markdown<T: TableRow>(list: &[T], title: &str) -> String {
    let mut out = String::new();
    if !title.is_empty() {
        out.push_str(&format!("## {title}\n\n"));
    }
    out.push_str(&markdown_line(T::markdown_headers().iter().copied()));
    out.push_str(&format!("|{}|\n", T::markdown_alignment().join("|")));
    for item in list {
        let cells = item.markdown_cells();
        out.push_str(&markdown_line(cells.iter().map(String::as_str)));
    }
    out
}

fn markdown_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<String> = cells.map(|cell| cell.replace('|', "\\|")).collect();
    format!("| {} |\n", cells.join(" | "))
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format_list<T: Serialize + TableRow>(
        &self,
        list: &[T],
        title: &str,
        empty_msg: &str,
    ) -> String {
        if list.is_empty() && self.engine != OutputFormat::Json {
            return format!("{empty_msg}\n");
        }

        match self.engine {
            OutputFormat::Text => {
                let table = render_table(list);
                if title.is_empty() {
                    table
                } else {
                    format!("{title}\n\n{table}")
                }
            }
            OutputFormat::Markdown => render_markdown(list, title),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(list).unwrap_or_else(|_| "[]".to_string());
                format!("{json}\n")
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
