//! CSV export
//!
//! Columns are kind, name and affiliation. A field is wrapped in quotes when
//! it contains a comma, a quote or a line break; embedded quotes are doubled.

use std::borrow::Cow;

use crate::nova::classify::Resolution;
use crate::nova::labels::Lang;

/// Render folders then apps as CSV, one `\n`-terminated line per row
pub fn to_csv(resolution: &Resolution, lang: Lang) -> String {
    let mut out = String::new();
    push_record(&mut out, &lang.csv_header());

    for (kind, entry) in resolution.combined() {
        push_record(
            &mut out,
            &[kind.label(lang), entry.name.as_str(), entry.affiliation.as_str()],
        );
    }

    out
}

fn push_record(out: &mut String, fields: &[&str]) {
    let line = fields
        .iter()
        .map(|f| quote_field(f))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push('\n');
}

pub fn quote_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Parse CSV text into records
///
/// Accepts what [`to_csv`] writes: quoted fields with doubled quotes and
/// line breaks inside quotes. A trailing newline does not produce an empty
/// record.
pub fn parse_csv(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                c => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            c => field.push(c),
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}
