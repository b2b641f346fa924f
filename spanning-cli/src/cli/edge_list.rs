//! Parser for the whitespace-separated edge-list format.
//!
//! The first non-blank line is the header `<vertices> <edges>`; each following
//! non-blank line is one edge `<u> <v> <w>`. Line numbers in errors are
//! 1-based and count blank lines.

use std::io::{self, BufRead};
use std::num::ParseIntError;
use std::str::FromStr;

use spanning_core::{Edge, GraphInfo};
use thiserror::Error;

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input held no header line.
    #[error("input is empty; expected a `<vertices> <edges>` header")]
    EmptyInput,
    /// The header did not hold exactly two fields.
    #[error("line {line}: expected header `<vertices> <edges>`, found `{content}`")]
    MalformedHeader {
        /// Line holding the header.
        line: usize,
        /// Header text as read.
        content: String,
    },
    /// An edge line did not hold exactly three fields.
    #[error("line {line}: expected edge `<u> <v> <w>`, found `{content}`")]
    MalformedEdge {
        /// Line holding the edge.
        line: usize,
        /// Edge text as read.
        content: String,
    },
    /// A field was not a valid integer for its position.
    #[error("line {line}: `{token}` is not a valid integer: {source}")]
    InvalidInteger {
        /// Line holding the field.
        line: usize,
        /// The rejected field.
        token: String,
        /// Integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// Reading from the underlying source failed.
    #[error("failed to read line {line}: {source}")]
    Io {
        /// Line being read when the failure occurred.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Reads a graph header and its edges from `reader`.
///
/// Edge counts and vertex ranges are not checked here; `Graph::new` reports
/// those.
///
/// # Errors
/// Returns [`ParseError`] when the input is empty, a line has the wrong
/// number of fields, a field is not an integer, or reading fails.
///
/// # Examples
/// ```
/// use spanning_cli::cli::parse_edge_list;
///
/// let (info, edges) = parse_edge_list("3 2\n1 2 4\n2 3 1\n".as_bytes())?;
/// assert_eq!(info.number_of_vertices, 3);
/// assert_eq!(edges.len(), 2);
/// # Ok::<(), spanning_cli::cli::ParseError>(())
/// ```
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<(GraphInfo, Vec<Edge>), ParseError> {
    let mut info = None;
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| ParseError::Io {
            line: number,
            source,
        })?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        if info.is_none() {
            let [vertices, declared] = fields[..] else {
                return Err(ParseError::MalformedHeader {
                    line: number,
                    content: line.trim().to_owned(),
                });
            };
            info = Some(GraphInfo {
                number_of_vertices: field(vertices, number)?,
                number_of_edges: field(declared, number)?,
            });
            continue;
        }

        let [first, second, weight] = fields[..] else {
            return Err(ParseError::MalformedEdge {
                line: number,
                content: line.trim().to_owned(),
            });
        };
        edges.push(Edge::new(
            field(first, number)?,
            field(second, number)?,
            field(weight, number)?,
        ));
    }

    let info = info.ok_or(ParseError::EmptyInput)?;
    Ok((info, edges))
}

fn field<T>(token: &str, line: usize) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|source| ParseError::InvalidInteger {
        line,
        token: token.to_owned(),
        source,
    })
}
