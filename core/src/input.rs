//! Input for reading tables.

use std::{
    fmt,
    fs::File,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use flate2::bufread::MultiGzDecoder;

/// A boxed, buffered reader over a possibly decompressed input.
pub type Reader = Box<dyn BufRead>;

/// Opens the file at the provided path for reading.
///
/// Gzip compressed input is detected and decompressed transparently.
///
/// # Errors
///
/// Returns [`Error::PathDoesNotExist`] if nothing exists at the path, and [`Error::Io`] if the
/// file cannot be opened.
pub fn open<P>(path: P) -> Result<Reader, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::PathDoesNotExist {
            path: path.to_path_buf(),
        });
    }

    let reader = io::BufReader::new(File::open(path)?);

    Ok(decompress(reader)?)
}

/// Wraps the reader in a decoder if its content is compressed.
pub fn decompress<R>(mut reader: R) -> io::Result<Reader>
where
    R: 'static + BufRead,
{
    Ok(match CompressionMethod::detect(&mut reader)? {
        Some(CompressionMethod::Gzip) => Box::new(io::BufReader::new(MultiGzDecoder::new(reader))),
        None => Box::new(reader),
    })
}

/// A supported compression method.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompressionMethod {
    /// Gzip, including BGZF.
    Gzip,
}

impl CompressionMethod {
    /// Detects the compression method from the start of the reader, without consuming input.
    pub fn detect<R>(reader: &mut R) -> io::Result<Option<Self>>
    where
        R: BufRead,
    {
        const GZIP_MAGIC_NUMBER: [u8; 2] = [0x1f, 0x8b];

        let src = reader.fill_buf()?;

        if let Some(buf) = src.get(..GZIP_MAGIC_NUMBER.len()) {
            if buf == GZIP_MAGIC_NUMBER {
                return Ok(Some(CompressionMethod::Gzip));
            }
        }

        Ok(None)
    }
}

/// An error associated with reading an input table.
#[derive(Debug)]
pub enum Error {
    /// Input contained a record with the same identifier as an earlier record.
    DuplicateMarker {
        /// The repeated identifier.
        id: String,
        /// One-based line number of the repeat.
        line: usize,
    },
    /// Input contained no header line.
    Empty,
    /// I/O error.
    Io(io::Error),
    /// Input header lacks a required column.
    MissingColumn {
        /// Name of the required column.
        name: &'static str,
    },
    /// A provided path does not exist.
    PathDoesNotExist {
        /// The provided path.
        path: PathBuf,
    },
    /// A record has more fields than the header.
    TooManyFields {
        /// One-based line number of the record.
        line: usize,
        /// Number of fields in the header.
        expected: usize,
        /// Number of fields in the record.
        found: usize,
    },
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateMarker { id, line } => {
                write!(f, "duplicate identifier '{id}' on line {line}")
            }
            Error::Empty => f.write_str("input is empty"),
            Error::Io(e) => write!(f, "{e}"),
            Error::MissingColumn { name } => write!(f, "header lacks required column '{name}'"),
            Error::PathDoesNotExist { path } => {
                write!(f, "file '{}' not found", path.display())
            }
            Error::TooManyFields {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line} has {found} fields, but header has only {expected}"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Splits a line of a tab-separated table into fields, ignoring any line ending.
pub(crate) fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.trim_end_matches(['\n', '\r']).split('\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{Read as _, Write as _};

    use flate2::{write::GzEncoder, Compression};

    #[test]
    fn test_open_missing_path() {
        let path = "/nonexistent/afreq/genotypes.tsv";

        assert!(matches!(
            open(path),
            Err(Error::PathDoesNotExist { path: p }) if p == Path::new(path)
        ));
    }

    #[test]
    fn test_detect_gzip() -> io::Result<()> {
        assert_eq!(
            CompressionMethod::detect(&mut &[0x1f, 0x8b, 0x08][..])?,
            Some(CompressionMethod::Gzip)
        );
        assert_eq!(CompressionMethod::detect(&mut &b"id\ts1\n"[..])?, None);
        assert_eq!(CompressionMethod::detect(&mut &b""[..])?, None);

        Ok(())
    }

    #[test]
    fn test_decompress_gzip() -> io::Result<()> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"id\ts1\nrs1\t0\n")?;
        let compressed = encoder.finish()?;

        let mut buf = String::new();
        decompress(io::Cursor::new(compressed))?.read_to_string(&mut buf)?;

        assert_eq!(buf, "id\ts1\nrs1\t0\n");

        Ok(())
    }

    #[test]
    fn test_decompress_plain() -> io::Result<()> {
        let mut buf = String::new();
        decompress(io::Cursor::new(b"id\ts1\n".to_vec()))?.read_to_string(&mut buf)?;

        assert_eq!(buf, "id\ts1\n");

        Ok(())
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(
            split_fields("rs1\t0\t\tNA\r\n").collect::<Vec<_>>(),
            ["rs1", "0", "", "NA"]
        );
    }
}
