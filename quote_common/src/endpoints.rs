//! Reading endpoint lists from text files.

use std::io::BufRead;

use crate::error::QuoteError;

/// Trait providing file parsing for endpoint lists.
pub trait EndpointParser {
    /// Parses endpoints from a buffered reader.
    ///
    /// Each non-empty line is one endpoint; lines starting with `#` are skipped.
    /// Order and duplicates are preserved.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<String>, QuoteError>;
}

/// Marker type implementing [`EndpointParser`] for plain-text lists.
pub struct Endpoints;

impl EndpointParser for Endpoints {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<String>, QuoteError> {
        let mut endpoints = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(QuoteError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }
            endpoints.push(trimmed_line.to_string());
        }
        Ok(endpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Cursor, Read};

    #[test]
    fn parses_lines_in_order_and_keeps_duplicates() {
        let input = "\
# arnie quotes
http://www.smokeballdev.com/arnie0

  http://www.smokeballdev.com/arnie1
http://www.smokeballdev.com/arnie0
";
        let endpoints = Endpoints::parse_from_file(Cursor::new(input)).unwrap();
        assert_eq!(
            endpoints,
            vec![
                "http://www.smokeballdev.com/arnie0",
                "http://www.smokeballdev.com/arnie1",
                "http://www.smokeballdev.com/arnie0",
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_endpoints() {
        let endpoints = Endpoints::parse_from_file(Cursor::new("\n\n# nothing\n")).unwrap();
        assert!(endpoints.is_empty());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk gone"))
        }
    }

    #[test]
    fn read_errors_propagate() {
        let err = Endpoints::parse_from_file(BufReader::new(FailingReader)).unwrap_err();
        assert!(matches!(err, QuoteError::Io(_)));
    }
}
