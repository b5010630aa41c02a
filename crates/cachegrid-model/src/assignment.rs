//! Candidate solutions — which videos each cache stores.
//!
//! An [`Assignment`] is either parsed from solution text for scoring or
//! built by a placement heuristic. It deliberately preserves the raw shape
//! of the input (declared header count, entry order, duplicate cache ids)
//! so the validator can reject malformed solutions instead of the parser
//! silently normalizing them.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::error::{ParseError, ParseResult};

/// The stored contents of a single cache server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheEntry {
    pub cache: usize,
    pub videos: Vec<usize>,
}

/// A candidate solution: per-cache content lists.
///
/// Caches not mentioned in `entries` are empty. `declared` is the header
/// count exactly as written in the solution text; it stays signed so a
/// negative header reaches validation rather than failing the parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    pub declared: i64,
    pub entries: Vec<CacheEntry>,
}

impl Assignment {
    /// Build an assignment from entries, deriving the header count.
    pub fn new(entries: Vec<CacheEntry>) -> Assignment {
        Assignment {
            declared: entries.len() as i64,
            entries,
        }
    }

    /// Parse the solution format: a header line with the cache count,
    /// then one line per cache (`cache_id video_id...`).
    pub fn parse(input: &str) -> ParseResult<Assignment> {
        let mut lines = input.lines();

        let header = lines.next().ok_or(ParseError::UnexpectedEof("cache count"))?;
        let header = header.trim();
        let declared: i64 = header.parse().map_err(|_| ParseError::InvalidInteger {
            field: "cache count",
            token: header.to_string(),
        })?;

        let mut entries = Vec::new();
        for _ in 0..declared.max(0) {
            let line = lines.next().ok_or(ParseError::UnexpectedEof("cache line"))?;
            let mut fields = line.split_whitespace();
            let cache_token = fields.next().ok_or(ParseError::UnexpectedEof("cache id"))?;
            let cache: usize = cache_token.parse().map_err(|_| ParseError::InvalidInteger {
                field: "cache id",
                token: cache_token.to_string(),
            })?;
            let mut videos = Vec::new();
            for token in fields {
                videos.push(token.parse().map_err(|_| ParseError::InvalidInteger {
                    field: "video id",
                    token: token.to_string(),
                })?);
            }
            entries.push(CacheEntry { cache, videos });
        }

        Ok(Assignment { declared, entries })
    }

    /// Render back to solution text. The header is the entry count; an
    /// entry with no videos renders as a bare cache id line.
    pub fn to_solution_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.entries.len());
        for entry in &self.entries {
            let _ = write!(out, "{}", entry.cache);
            for video in &entry.videos {
                let _ = write!(out, " {video}");
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_solution_with_empty_cache_line() {
        let sol = Assignment::parse("2\n0 3 1\n1\n").unwrap();
        assert_eq!(sol.declared, 2);
        assert_eq!(sol.entries[0], CacheEntry { cache: 0, videos: vec![3, 1] });
        assert_eq!(sol.entries[1], CacheEntry { cache: 1, videos: vec![] });
    }

    #[test]
    fn negative_header_parses_with_no_entries() {
        let sol = Assignment::parse("-3\n").unwrap();
        assert_eq!(sol.declared, -3);
        assert!(sol.entries.is_empty());
    }

    #[test]
    fn duplicate_cache_ids_survive_parsing() {
        // Rejecting duplicates is the validator's job.
        let sol = Assignment::parse("2\n0 1\n0 2\n").unwrap();
        assert_eq!(sol.entries[0].cache, 0);
        assert_eq!(sol.entries[1].cache, 0);
    }

    #[test]
    fn missing_cache_line_is_eof() {
        let err = Assignment::parse("2\n0 1\n").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEof("cache line"));
    }

    #[test]
    fn render_round_trips() {
        let assignment = Assignment::new(vec![
            CacheEntry { cache: 0, videos: vec![2] },
            CacheEntry { cache: 1, videos: vec![] },
            CacheEntry { cache: 2, videos: vec![0, 1] },
        ]);
        let text = assignment.to_solution_text();
        assert_eq!(text, "3\n0 2\n1\n2 0 1\n");
        assert_eq!(Assignment::parse(&text).unwrap(), assignment);
    }
}
