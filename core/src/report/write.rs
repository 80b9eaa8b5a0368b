//! Writing reports as tab-separated tables.

use std::{
    fmt::Write as _,
    fs,
    io::{self, Write as _},
    path::Path,
};

use super::{Field, Report};

/// A builder to write a report.
#[derive(Debug, Default)]
pub struct Builder {
    precision: Option<usize>,
}

impl Builder {
    /// Set precision of frequencies.
    ///
    /// If unset, frequencies are written with the shortest representation that round-trips.
    pub fn set_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Write report to writer.
    pub fn write<W>(&self, writer: &mut W, report: &Report<'_>) -> io::Result<()>
    where
        W: io::Write,
    {
        let mut line = String::new();

        for (i, column) in report.schema().iter().enumerate() {
            if i > 0 {
                line.push('\t');
            }
            line.push_str(column.header_name());
        }
        writeln!(writer, "{line}")?;

        for row in report.rows() {
            line.clear();

            for (i, &column) in report.schema().iter().enumerate() {
                if i > 0 {
                    line.push('\t');
                }
                self.format_field(&mut line, row.field(column));
            }
            writeln!(writer, "{line}")?;
        }

        Ok(())
    }

    /// Write report to path.
    ///
    /// Missing parent directories are created. If path already exists, it will be overwritten.
    pub fn write_to_path<P>(&self, path: P, report: &Report<'_>) -> io::Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = io::BufWriter::new(fs::File::create(path)?);
        self.write(&mut writer, report)?;
        writer.flush()
    }

    fn format_field(&self, buf: &mut String, field: Field<'_>) {
        // Writing to a string cannot fail
        let _ = match (field, self.precision) {
            (Field::Count(count), _) => write!(buf, "{count}"),
            (Field::Frequency(frequency), Some(precision)) => {
                write!(buf, "{frequency:.precision$}")
            }
            (Field::Frequency(frequency), None) => write!(buf, "{frequency:?}"),
            (Field::Null, _) => Ok(()),
            (Field::Text(text), _) => write!(buf, "{text}"),
        };
    }
}
