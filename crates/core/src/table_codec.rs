//! Frequency table persistence.
//!
//! # Record Format
//!
//! ```text
//! NL:1
//! a:2
//! b:2
//! c:1
//! ```
//!
//! - One `SYMBOL:COUNT` line per entry, no header
//! - The newline character is written as the token `NL`
//! - Every other character, including `':'` itself, is written literally
//! - Lines are emitted in ascending symbol order
//!
//! Parsing is best-effort: malformed lines are skipped and reported, and only
//! a record with no usable entry at all is an error.

use crate::error::{Result, TableError};
use crate::frequency::FrequencyTable;
use thiserror::Error;

/// Token standing in for `'\n'`, which cannot appear inside a line.
pub const NEWLINE_TOKEN: &str = "NL";

/// Why a record line was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("no ':' separator")]
    MissingSeparator,

    #[error("empty symbol")]
    EmptySymbol,

    #[error("symbol {0:?} is not a single character")]
    BadSymbol(String),

    #[error("count {0:?} is not a non-negative integer")]
    InvalidCount(String),
}

/// A skipped line, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub reason: SkipReason,
}

/// Result of a best-effort parse.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub table: FrequencyTable,
    pub skipped: Vec<SkippedLine>,
}

/// Render `table` as a record.
pub fn serialize(table: &FrequencyTable) -> String {
    let mut out = String::new();
    for (symbol, count) in table.sorted_entries() {
        if symbol == '\n' {
            out.push_str(&format!("{NEWLINE_TOKEN}:{count}\n"));
        } else {
            out.push_str(&format!("{symbol}:{count}\n"));
        }
    }
    out
}

/// Parse a record produced by [`serialize`].
///
/// # Errors
/// `TableError::NoValidEntries` if nothing usable was recovered.
pub fn parse(record: &str) -> Result<ParsedTable> {
    parse_lines(record.lines())
}

/// Parse a record that has already been split into lines.
pub fn parse_lines<I, S>(lines: I) -> Result<ParsedTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = FrequencyTable::new();
    let mut skipped = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok((symbol, count)) => {
                if count == 0 {
                    log::debug!("line {line_number}: {symbol:?} has zero count, no leaf");
                }
                if let Some(previous) = table.insert(symbol, count) {
                    log::warn!(
                        "line {line_number}: duplicate entry for {symbol:?} ({previous} replaced by {count})"
                    );
                }
            }
            Err(reason) => {
                log::warn!("line {line_number}: skipping malformed entry {line:?}: {reason}");
                skipped.push(SkippedLine {
                    line_number,
                    reason,
                });
            }
        }
    }

    if table.is_empty() {
        return Err(TableError::NoValidEntries {
            skipped: skipped.len(),
        }
        .into());
    }

    Ok(ParsedTable { table, skipped })
}

fn parse_line(line: &str) -> std::result::Result<(char, u64), SkipReason> {
    let (token, count) = match line.strip_prefix("::") {
        Some(count) => (":", count),
        None => line.split_once(':').ok_or(SkipReason::MissingSeparator)?,
    };

    let symbol = if token == NEWLINE_TOKEN {
        '\n'
    } else {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => return Err(SkipReason::EmptySymbol),
            (Some(ch), None) => ch,
            (Some(_), Some(_)) => return Err(SkipReason::BadSymbol(token.to_string())),
        }
    };

    let count = count
        .trim()
        .parse::<u64>()
        .map_err(|_| SkipReason::InvalidCount(count.to_string()))?;

    Ok((symbol, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_serialize_scenario() {
        let table = FrequencyTable::from_text("ab\ncab");
        assert_eq!(serialize(&table), "NL:1\na:2\nb:2\nc:1\n");
    }

    #[test]
    fn test_parse_restores_newline() {
        let parsed = parse("NL:1\na:2\nb:2\nc:1\n").unwrap();
        assert_eq!(parsed.table.get('\n'), Some(1));
        assert_eq!(parsed.table, FrequencyTable::from_text("ab\ncab"));
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_round_trip_special_symbols() {
        let table = FrequencyTable::from_text("a: b:\n\n\t N L NL x");
        let parsed = parse(&serialize(&table)).unwrap();
        assert_eq!(parsed.table, table);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_colon_symbol_line() {
        let parsed = parse("::7\n").unwrap();
        assert_eq!(parsed.table.get(':'), Some(7));
    }

    #[test]
    fn test_skips_malformed_lines() {
        let record = "a:2\nnoseparator\nbb:3\n:4\nc:many\n\n   \nd: 5 \n";
        let parsed = parse(record).unwrap();

        assert_eq!(parsed.table.len(), 2);
        assert_eq!(parsed.table.get('a'), Some(2));
        assert_eq!(parsed.table.get('d'), Some(5));

        let reasons: Vec<(usize, SkipReason)> = parsed
            .skipped
            .into_iter()
            .map(|s| (s.line_number, s.reason))
            .collect();
        assert_eq!(
            reasons,
            vec![
                (2, SkipReason::MissingSeparator),
                (3, SkipReason::BadSymbol("bb".to_string())),
                (4, SkipReason::EmptySymbol),
                (5, SkipReason::InvalidCount("many".to_string())),
            ]
        );
    }

    #[test]
    fn test_negative_count_skipped() {
        let parsed = parse("a:-1\nb:1\n").unwrap();
        assert_eq!(parsed.table.get('a'), None);
        assert_eq!(parsed.skipped.len(), 1);
    }

    #[test]
    fn test_duplicate_last_wins() {
        let parsed = parse("a:1\na:9\n").unwrap();
        assert_eq!(parsed.table.get('a'), Some(9));
    }

    #[test]
    fn test_zero_count_not_a_leaf() {
        let parsed = parse("a:0\nb:3\n").unwrap();
        assert_eq!(parsed.table.get('a'), None);
        assert_eq!(parsed.table.len(), 1);
    }

    #[test]
    fn test_empty_record() {
        assert!(matches!(
            parse(""),
            Err(Error::Table(TableError::NoValidEntries { skipped: 0 }))
        ));
    }

    #[test]
    fn test_all_lines_bad() {
        assert!(matches!(
            parse("garbage\nx:y\n"),
            Err(Error::Table(TableError::NoValidEntries { skipped: 2 }))
        ));
    }

    #[test]
    fn test_parse_lines_from_vec() {
        let lines = vec!["NL:2".to_string(), "z:1".to_string()];
        let parsed = parse_lines(lines).unwrap();
        assert_eq!(parsed.table.get('\n'), Some(2));
        assert_eq!(parsed.table.get('z'), Some(1));
    }
}
