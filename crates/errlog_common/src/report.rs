//! Markdown report rendering
//!
//! One fixed layout: a title, a blank line, then a three-column table of
//! message, file path and line number. The table is valid with zero rows.

use crate::record::MatchRecord;
use std::io::{self, BufWriter, Write};

/// Default level-1 title
pub const DEFAULT_TITLE: &str = "相关错误信息汇总";

const TABLE_HEADER: &str = "| 报错日志 | 文件路径 | 行号 |";
const TABLE_SEPARATOR: &str = "| -------- | -------- | ---- |";

/// Escape pipes so a message cannot open extra table columns.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Title line, blank line, table header and separator
pub fn render_header(title: &str) -> String {
    format!("# {}\n\n{}\n{}\n", title, TABLE_HEADER, TABLE_SEPARATOR)
}

pub fn render_row(record: &MatchRecord) -> String {
    format!(
        "| {} | {} | {} |\n",
        escape_cell(&record.message),
        record.source_path,
        record.line_number
    )
}

/// Render the whole document in memory.
pub fn render(title: &str, records: &[MatchRecord]) -> String {
    let mut doc = render_header(title);
    for record in records {
        doc.push_str(&render_row(record));
    }
    doc
}

/// Stream the document into `sink`.
///
/// Any failed write or the final flush fails the whole call. Nothing already
/// written is rolled back.
pub fn write_report<W: Write>(sink: W, title: &str, records: &[MatchRecord]) -> io::Result<()> {
    let mut writer = BufWriter::new(sink);
    writer.write_all(render_header(title).as_bytes())?;
    for record in records {
        writer.write_all(render_row(record).as_bytes())?;
    }
    writer.flush()
}
