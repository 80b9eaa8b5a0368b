//! Genotype matrix reader.
//!
//! The matrix is a tab-separated table with a header line. The first header field labels the
//! marker column and is ignored; the remaining header fields name the samples. Each following
//! line holds a marker identifier and one genotype per sample.

use std::{io, path::Path};

use crate::{
    input::{self, split_fields, Error},
    Call, Matrix,
};

/// The default missing-value token.
pub const DEFAULT_MISSING: &str = "NA";

/// A builder to read a genotype matrix.
#[derive(Debug)]
pub struct Builder {
    missing: String,
}

impl Builder {
    /// Read matrix from reader.
    ///
    /// # Errors
    ///
    /// Fails if the input is empty, a marker is repeated, a line holds more fields than the
    /// header, or on I/O errors. Cells that do not hold valid genotypes never cause errors.
    pub fn read<R>(self, reader: R) -> Result<Matrix, Error>
    where
        R: io::BufRead,
    {
        let mut lines = reader.lines();

        let header = lines.next().ok_or(Error::Empty)??;
        let samples = split_fields(&header)
            .skip(1)
            .map(String::from)
            .collect::<Vec<_>>();
        let expected = samples.len() + 1;

        let mut matrix = Matrix::new(samples);

        for (i, line) in lines.enumerate() {
            let line = line?;
            let line_number = i + 2;

            if line.trim().is_empty() {
                continue;
            }

            let mut fields = split_fields(&line);
            let id = fields.next().unwrap_or_default().trim().to_string();
            let calls = fields
                .map(|raw| Call::parse(raw, &self.missing))
                .collect::<Vec<_>>();

            if calls.len() + 1 > expected {
                return Err(Error::TooManyFields {
                    line: line_number,
                    expected,
                    found: calls.len() + 1,
                });
            }

            if matrix.insert(id.clone(), calls).is_err() {
                return Err(Error::DuplicateMarker {
                    id,
                    line: line_number,
                });
            }
        }

        Ok(matrix)
    }

    /// Read matrix from path.
    ///
    /// # Errors
    ///
    /// In addition to the errors from [`Builder::read`], fails with
    /// [`Error::PathDoesNotExist`] if there is no file at the path.
    pub fn read_from_path<P>(self, path: P) -> Result<Matrix, Error>
    where
        P: AsRef<Path>,
    {
        self.read(input::open(path)?)
    }

    /// Set the token denoting a missing genotype.
    ///
    /// If unset, [`DEFAULT_MISSING`] will be used. Empty cells are always missing.
    pub fn set_missing<S>(mut self, missing: S) -> Self
    where
        S: Into<String>,
    {
        self.missing = missing.into();
        self
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            missing: String::from(DEFAULT_MISSING),
        }
    }
}
