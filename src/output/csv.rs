use crate::results::Record;
use chrono::SecondsFormat;

pub const HEADERS: [&str; 6] = ["text", "author", "tags", "page", "source_url", "scraped_at"];

/// Separator used to flatten a record's tags into one cell
pub const TAG_SEPARATOR: &str = ", ";

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn push_row<S: AsRef<str>>(out: &mut String, row: &[S]) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

/// Flat table with a header line and one row per record
pub fn to_csv_string(records: &[Record]) -> String {
    let mut out = String::new();
    push_row(&mut out, &HEADERS);

    for record in records {
        let row = [
            record.text.clone(),
            record.author.clone(),
            record.tags.join(TAG_SEPARATOR),
            record.page.to_string(),
            record.source_url.clone(),
            record.scraped_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        ];
        push_row(&mut out, &row);
    }

    out
}
