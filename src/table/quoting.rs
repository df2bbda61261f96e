//! Strict quote validation for CSV input.
//!
//! The `csv` reader accepts unterminated and stray quotes without complaint.
//! This pass rejects them before records are built so a malformed file never
//! produces rows.

use thiserror::Error;

/// A quoting violation with its 1-based position (column counts bytes).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error on line {line}, column {column}: {kind}")]
pub struct QuoteError {
    pub line: u64,
    pub column: u64,
    pub kind: QuoteErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteErrorKind {
    #[error("bare \" in non-quoted field")]
    BareQuote,

    #[error("extraneous \" after closing quote")]
    ExtraneousQuote,

    #[error("quoted field not terminated before end of input")]
    Unterminated,
}

#[derive(Clone, Copy)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    // Just saw a `"` inside a quoted field: either an escape or the close.
    QuoteInQuoted,
}

/// Check that every quoted field in `input` is well formed.
pub fn validate_quoting(input: &[u8], delimiter: u8) -> Result<(), QuoteError> {
    let mut state = State::FieldStart;
    let mut line = 1u64;
    let mut column = 0u64;
    let mut open_at = (1u64, 1u64);

    for &byte in input {
        column += 1;
        let at = |kind| QuoteError { line, column, kind };

        state = match state {
            State::FieldStart if byte == b'"' => {
                open_at = (line, column);
                State::Quoted
            }
            State::FieldStart if byte == delimiter || byte == b'\n' || byte == b'\r' => {
                State::FieldStart
            }
            State::FieldStart => State::Unquoted,
            State::Unquoted if byte == b'"' => return Err(at(QuoteErrorKind::BareQuote)),
            State::Unquoted if byte == delimiter || byte == b'\n' || byte == b'\r' => {
                State::FieldStart
            }
            State::Unquoted => State::Unquoted,
            State::Quoted if byte == b'"' => State::QuoteInQuoted,
            State::Quoted => State::Quoted,
            State::QuoteInQuoted if byte == b'"' => State::Quoted,
            State::QuoteInQuoted if byte == delimiter || byte == b'\n' || byte == b'\r' => {
                State::FieldStart
            }
            State::QuoteInQuoted => return Err(at(QuoteErrorKind::ExtraneousQuote)),
        };

        if byte == b'\n' {
            line += 1;
            column = 0;
        }
    }

    if let State::Quoted = state {
        let (line, column) = open_at;
        return Err(QuoteError { line, column, kind: QuoteErrorKind::Unterminated });
    }
    Ok(())
}
