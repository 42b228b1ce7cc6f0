//! Whitespace-delimited numeric table parsing.

use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Dense row-major table of `f32` values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f32>,
}

impl Matrix {
    /// Iterate rows in file order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.cols.max(1))
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

/// Parse a whitespace-delimited table. Blank lines and `#` comments are skipped.
pub fn parse_matrix(content: &str) -> CoreResult<Matrix> {
    let mut matrix = Matrix::default();

    for (idx, raw) in content.lines().enumerate() {
        let line = match raw.split_once('#') {
            Some((data, _comment)) => data,
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }

        let start = matrix.data.len();
        for token in line.split_whitespace() {
            let value: f32 = token.parse().map_err(|_| CoreError::Parse {
                line: idx + 1,
                token: token.to_string(),
            })?;
            matrix.data.push(value);
        }
        let width = matrix.data.len() - start;

        if matrix.rows == 0 {
            matrix.cols = width;
        } else if width != matrix.cols {
            return Err(CoreError::Ragged {
                line: idx + 1,
                expected: matrix.cols,
                got: width,
            });
        }
        matrix.rows += 1;
    }

    Ok(matrix)
}

/// Read and parse a table from disk.
pub fn load_matrix(path: &Path) -> CoreResult<Matrix> {
    let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_matrix(&content)
}
