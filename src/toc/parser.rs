//! Table-of-contents parser
//!
//! Collects work titles from the listing that follows a `Contents` line.
//! The listing is taken to end at the first title seen a second time, which
//! is where the body of the text restates its first heading.

use super::WorksMap;
use crate::error::{LoadError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Line that opens the title listing
pub const CONTENTS_MARKER: &str = "Contents";

/// Parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocState {
    /// Before the marker, or after the listing has ended
    OutsideToc,
    /// Collecting titles
    InToc,
}

/// Line-at-a-time table-of-contents state machine
#[derive(Debug)]
pub struct TocParser {
    state: TocState,
    works: WorksMap,
}

impl Default for TocParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TocParser {
    pub fn new() -> Self {
        Self {
            state: TocState::OutsideToc,
            works: WorksMap::default(),
        }
    }

    pub fn state(&self) -> TocState {
        self.state
    }

    /// Process one raw line
    pub fn feed(&mut self, line: &str) {
        let line = line.trim();

        match self.state {
            TocState::OutsideToc => {
                if line == CONTENTS_MARKER {
                    self.state = TocState::InToc;
                }
            }
            TocState::InToc => {
                if line.is_empty() {
                    return;
                }
                if self.works.contains(line) {
                    // A known title again: the listing is over
                    self.state = TocState::OutsideToc;
                } else if line != CONTENTS_MARKER {
                    self.works.insert_title(line);
                }
            }
        }
    }

    /// Finish parsing; the final state is discarded
    pub fn finish(self) -> WorksMap {
        self.works
    }
}

/// Parse a table of contents from a line stream
///
/// Lines are split on `\n` and decoded lossily, so bytes that are not valid
/// UTF-8 never stop the parse. Only errors from the stream itself are fatal.
pub fn parse_toc<R: BufRead>(mut reader: R) -> Result<WorksMap> {
    let mut parser = TocParser::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LoadError::TocParse {
                line: line_no + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        line_no += 1;
        parser.feed(&String::from_utf8_lossy(&buf));
    }

    let works = parser.finish();
    tracing::info!(titles = works.len(), lines = line_no, "table of contents parsed");
    Ok(works)
}

/// Parse a table of contents from a file
pub fn parse_toc_file(path: &Path) -> Result<WorksMap> {
    let file = File::open(path).map_err(|source| LoadError::TocParse { line: 0, source })?;
    parse_toc(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn parse_lines(lines: &[&str]) -> WorksMap {
        parse_toc(Cursor::new(lines.join("\n"))).unwrap()
    }

    #[test]
    fn test_sonnets_listing() {
        let works = parse_lines(&[
            "Preface",
            "Contents",
            "Sonnet 1",
            "Sonnet 2",
            "",
            "Sonnet 1",
            "text...",
        ]);

        let mut titles = works.titles();
        titles.sort();
        assert_eq!(titles, vec!["Sonnet 1", "Sonnet 2"]);
        assert!(works.entries("Sonnet 1").unwrap().is_empty());
        assert!(works.entries("Sonnet 2").unwrap().is_empty());
    }

    #[test]
    fn test_state_transitions() {
        let mut parser = TocParser::new();
        assert_eq!(parser.state(), TocState::OutsideToc);

        parser.feed("Some preface");
        assert_eq!(parser.state(), TocState::OutsideToc);

        parser.feed("  Contents  ");
        assert_eq!(parser.state(), TocState::InToc);

        parser.feed("THE TEMPEST");
        parser.feed("   ");
        assert_eq!(parser.state(), TocState::InToc);

        parser.feed("THE TEMPEST");
        assert_eq!(parser.state(), TocState::OutsideToc);
    }

    #[test]
    fn test_titles_are_trimmed() {
        let works = parse_lines(&["Contents", "   HAMLET   ", "\tMACBETH\t", "HAMLET"]);
        assert!(works.contains("HAMLET"));
        assert!(works.contains("MACBETH"));
        assert_eq!(works.len(), 2);
    }

    #[test]
    fn test_no_marker_yields_empty_mapping() {
        let works = parse_lines(&["HAMLET", "MACBETH"]);
        assert!(works.is_empty());
    }

    #[test]
    fn test_lines_after_listing_are_ignored() {
        let works = parse_lines(&["Contents", "A", "B", "A", "C", "D"]);
        let mut titles = works.titles();
        titles.sort();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_second_contents_block_resumes_collection() {
        let works = parse_lines(&["Contents", "A", "A", "Contents", "B", "A"]);
        let mut titles = works.titles();
        titles.sort();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_unterminated_listing() {
        let works = parse_lines(&["Contents", "A", "B"]);
        assert_eq!(works.len(), 2);
    }

    #[test]
    fn test_crlf_lines() {
        let works = parse_toc(Cursor::new("Contents\r\nA\r\nB\r\nA\r\n")).unwrap();
        assert_eq!(works.len(), 2);
        assert!(works.contains("A"));
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }
            self.served = true;
            let data = b"Contents\nA\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_read_error_is_fatal() {
        let reader = BufReader::new(FailingReader { served: false });
        let err = parse_toc(reader).unwrap_err();
        match err {
            LoadError::TocParse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_utf8_title_is_kept() {
        let toc = b"Contents\nROM\xc9O\nHAMLET\nHAMLET\n".to_vec();
        let works = parse_toc(Cursor::new(toc)).unwrap();

        assert_eq!(works.len(), 2);
        assert!(works.contains("ROM\u{FFFD}O"));
        assert!(works.contains("HAMLET"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_toc_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, LoadError::TocParse { line: 0, .. }));
    }
}
