//! Flat persistence record encoding
//!
//! The durable state lives in line-oriented text records, so any field that
//! may contain a newline (commit messages, blob content) is escaped before it
//! is written. Backslashes are escaped as well, otherwise a message that
//! already contains a literal `\n` could not be told apart from an escaped
//! newline on reload. Pipes are escaped too (`|` becomes `\p`): the records
//! are pipe-delimited and fields are split before they are unescaped, so an
//! escaped field must carry no raw pipe at all.
//!
//! Snapshot fields are `;`-separated `filename=contentHash` pairs. Pairs are
//! split on the last `=` since hashes never contain one.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeMap;

/// Placeholder for an absent parent hash in the commits record
pub const NULL_FIELD: &str = "null";

/// Escape a field for a single-line, pipe-delimited record
pub fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('|', "\\p")
}

/// Reverse [`escape`]
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('p') => out.push('|'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                // not something escape() produces; keep it verbatim
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Encode a filename -> hash snapshot as a `;`-separated field
pub fn encode_snapshot(entries: &BTreeMap<String, ObjectId>) -> String {
    entries
        .iter()
        .map(|(name, oid)| format!("{}={}", name, oid.as_ref()))
        .collect::<Vec<_>>()
        .join(";")
}

/// Decode a snapshot field produced by [`encode_snapshot`]
pub fn decode_snapshot(field: &str) -> anyhow::Result<BTreeMap<String, ObjectId>> {
    let mut entries = BTreeMap::new();

    if field.is_empty() {
        return Ok(entries);
    }

    for pair in field.split(';') {
        let (name, hash) = pair
            .rsplit_once('=')
            .with_context(|| format!("Malformed snapshot entry: {}", pair))?;
        entries.insert(name.to_string(), ObjectId::try_parse(hash.to_string())?);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain text")]
    #[case("two\nlines")]
    #[case("a literal \\n sequence")]
    #[case("trailing backslash \\")]
    #[case("field|with|pipes")]
    #[case("mixed | soup \\p\n")]
    #[case("")]
    fn test_escape_round_trips(#[case] text: &str) {
        assert_eq!(unescape(&escape(text)), text);
    }

    #[test]
    fn test_escaped_field_is_single_line() {
        assert!(!escape("two\nlines").contains('\n'));
    }

    #[test]
    fn test_escaped_field_has_no_raw_pipes() {
        assert!(!escape("a|b").contains('|'));
    }

    #[test]
    fn test_snapshot_round_trips() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "a.txt".to_string(),
            ObjectId::try_parse("1".repeat(40)).unwrap(),
        );
        entries.insert(
            "name=with=equals".to_string(),
            ObjectId::try_parse("2".repeat(40)).unwrap(),
        );

        let field = encode_snapshot(&entries);
        assert_eq!(decode_snapshot(&field).unwrap(), entries);
    }

    #[test]
    fn test_empty_snapshot_round_trips() {
        let entries = BTreeMap::new();
        assert_eq!(decode_snapshot(&encode_snapshot(&entries)).unwrap(), entries);
    }

    #[test]
    fn test_malformed_snapshot_entry_is_rejected() {
        assert!(decode_snapshot("no-separator-here").is_err());
    }
}
