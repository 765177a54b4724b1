use crate::results::Record;
use std::collections::HashMap;
use std::fmt::{self, Write};

const TOP_AUTHORS: usize = 5;
const TOP_TAGS: usize = 10;
const SAMPLES: usize = 5;
const LONGEST_PREVIEW_CHARS: usize = 100;

/// Aggregate figures over a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStats {
    pub total: usize,
    /// Authors with their record counts, most frequent first
    pub authors: Vec<(String, usize)>,
    /// Tags with their occurrence counts, most frequent first
    pub tags: Vec<(String, usize)>,
    /// Index of the record with the shortest text
    pub shortest: Option<usize>,
    /// Index of the record with the longest text
    pub longest: Option<usize>,
}

/// Count occurrences, most frequent first; ties keep first-seen order
fn ranked<'a>(items: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        match index.get(item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item, counts.len());
                counts.push((item.to_string(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

impl CollectionStats {
    pub fn from_records(records: &[Record]) -> Self {
        let authors = ranked(
            records
                .iter()
                .map(|r| r.author.as_str())
                .filter(|a| !a.is_empty()),
        );
        let tags = ranked(records.iter().flat_map(|r| r.tags.iter().map(String::as_str)));

        let length = |i: &usize| records[*i].text.chars().count();
        // min_by_key keeps the first minimum, max_by_key the last maximum
        let shortest = (0..records.len()).min_by_key(length);
        let longest = (0..records.len()).max_by_key(length);

        Self {
            total: records.len(),
            authors,
            tags,
            shortest,
            longest,
        }
    }

    pub fn unique_authors(&self) -> usize {
        self.authors.len()
    }

    pub fn unique_tags(&self) -> usize {
        self.tags.len()
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > LONGEST_PREVIEW_CHARS {
        let cut: String = text.chars().take(LONGEST_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Human-readable report over the whole collection
pub fn to_summary_string(records: &[Record]) -> String {
    let mut out = String::new();
    // Formatting into a String cannot fail
    write_summary(&mut out, records).expect("writing to a String");
    out
}

/// Write the report for `records` into `out`
pub fn write_summary(out: &mut impl Write, records: &[Record]) -> fmt::Result {
    let stats = CollectionStats::from_records(records);

    writeln!(out, "QUOTES COLLECTION SUMMARY")?;
    writeln!(out, "{}", "=".repeat(30))?;
    writeln!(out)?;
    writeln!(out, "Total quotes: {}", stats.total)?;
    writeln!(out, "Unique authors: {}", stats.unique_authors())?;
    writeln!(out, "Unique tags: {}", stats.unique_tags())?;

    if !stats.authors.is_empty() {
        writeln!(out)?;
        writeln!(out, "Top authors by number of quotes:")?;
        for (author, count) in stats.authors.iter().take(TOP_AUTHORS) {
            writeln!(out, "  {}: {}", author, count)?;
        }
    }

    if !stats.tags.is_empty() {
        writeln!(out)?;
        writeln!(out, "Most common tags:")?;
        for (tag, count) in stats.tags.iter().take(TOP_TAGS) {
            writeln!(out, "  {}: {}", tag, count)?;
        }
    }

    if let (Some(s), Some(l)) = (stats.shortest, stats.longest) {
        let shortest = &records[s];
        let longest = &records[l];
        writeln!(out)?;
        writeln!(
            out,
            "Shortest quote ({} chars) by {}:",
            shortest.text.chars().count(),
            shortest.author
        )?;
        writeln!(out, "  \"{}\"", shortest.text)?;
        writeln!(out)?;
        writeln!(
            out,
            "Longest quote ({} chars) by {}:",
            longest.text.chars().count(),
            longest.author
        )?;
        writeln!(out, "  \"{}\"", preview(&longest.text))?;
    }

    if !records.is_empty() {
        writeln!(out)?;
        writeln!(out, "Sample quotes:")?;
        for (i, record) in records.iter().take(SAMPLES).enumerate() {
            writeln!(out, "{}. \"{}\" - {}", i + 1, record.text, record.author)?;
        }
    }

    Ok(())
}
