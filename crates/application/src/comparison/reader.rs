//! Paired line reader over the candidate and reference streams.

use check_estimation_domain::{AppResult, InputError, Side};
use std::io::{self, BufRead, Read};

/// Lines read from both streams at the same line number.
///
/// A side is `None` once its stream is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePair {
    /// 1-based line number
    pub number: usize,
    /// Raw candidate line including its terminator
    pub candidate: Option<Vec<u8>>,
    /// Raw reference line including its terminator
    pub reference: Option<Vec<u8>>,
}

impl LinePair {
    /// Whether both streams are exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.candidate.is_none() && self.reference.is_none()
    }
}

/// Reads matching lines from two buffered streams.
///
/// Lines longer than `max_line_length` bytes (terminator excluded) are
/// rejected with [`InputError::LineTooLong`].
pub struct LineReader<C, R> {
    candidate: C,
    reference: R,
    max_line_length: usize,
    line_number: usize,
}

impl<C: BufRead, R: BufRead> LineReader<C, R> {
    /// Create a reader over both streams.
    pub fn new(candidate: C, reference: R, max_line_length: usize) -> Self {
        Self {
            candidate,
            reference,
            max_line_length,
            line_number: 0,
        }
    }

    /// Pull the next line from each stream independently.
    pub fn next_pair(&mut self) -> AppResult<LinePair> {
        self.line_number += 1;
        let number = self.line_number;
        let limit = self.max_line_length;

        let candidate = read_bounded_line(&mut self.candidate, limit)
            .map_err(|e| e.into_input_error(Side::Candidate, number, limit))?;
        let reference = read_bounded_line(&mut self.reference, limit)
            .map_err(|e| e.into_input_error(Side::Reference, number, limit))?;

        Ok(LinePair {
            number,
            candidate,
            reference,
        })
    }

    /// Number of the most recently read line pair.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

enum LineError {
    Io(io::Error),
    TooLong,
}

impl LineError {
    fn into_input_error(self, side: Side, line: usize, limit: usize) -> InputError {
        match self {
            Self::Io(source) => InputError::Read { side, source },
            Self::TooLong => InputError::LineTooLong { side, line, limit },
        }
    }
}

fn read_bounded_line<B: BufRead>(reader: &mut B, limit: usize) -> Result<Option<Vec<u8>>, LineError> {
    let mut line = Vec::new();
    let read = reader
        .by_ref()
        .take((limit as u64).saturating_add(1))
        .read_until(b'\n', &mut line)
        .map_err(LineError::Io)?;

    if read == 0 {
        return Ok(None);
    }

    let content = match line.last() {
        Some(b'\n') => line.len() - 1,
        _ => line.len(),
    };
    if content > limit {
        return Err(LineError::TooLong);
    }

    Ok(Some(line))
}
