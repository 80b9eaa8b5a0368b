//! Marker annotation.
//!
//! The annotation is a tab-separated table with a header line, which must contain an `snp_id`
//! column. The optional `chrom` and `pos` columns are kept; any other columns are ignored.

use std::{io, path::Path};

use indexmap::IndexMap;

use crate::input::{self, split_fields, Error};

/// Name of the marker identifier column.
pub const ID_COLUMN: &str = "snp_id";

/// Name of the chromosome column.
pub const CHROM_COLUMN: &str = "chrom";

/// Name of the position column.
pub const POS_COLUMN: &str = "pos";

/// Annotation of a single marker.
///
/// Empty fields, and fields for columns absent from the table, are `None`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Record {
    chrom: Option<String>,
    pos: Option<String>,
}

impl Record {
    /// Returns the chromosome.
    pub fn chrom(&self) -> Option<&str> {
        self.chrom.as_deref()
    }

    /// Returns the position.
    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }
}

/// Marker annotation table, keyed by marker identifier.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Annotation {
    has_chrom: bool,
    has_pos: bool,
    records: IndexMap<String, Record>,
    duplicates: usize,
}

impl Annotation {
    /// Returns the number of records ignored since their identifier was already annotated.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Returns the record for a marker, if annotated.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    /// Returns `true` if the table has a chromosome column.
    pub fn has_chrom(&self) -> bool {
        self.has_chrom
    }

    /// Returns `true` if the table has a position column.
    pub fn has_pos(&self) -> bool {
        self.has_pos
    }

    /// Returns `true` if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of annotated markers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Read annotation from reader.
    ///
    /// If an identifier occurs more than once, the first record is kept.
    ///
    /// # Errors
    ///
    /// Fails if the input is empty, the header lacks an [`ID_COLUMN`], or on I/O errors.
    pub fn read<R>(reader: R) -> Result<Self, Error>
    where
        R: io::BufRead,
    {
        let mut lines = reader.lines();

        let header = lines.next().ok_or(Error::Empty)??;
        let position = |name: &str| split_fields(&header).position(|field| field.trim() == name);

        let id_index = position(ID_COLUMN).ok_or(Error::MissingColumn { name: ID_COLUMN })?;
        let chrom_index = position(CHROM_COLUMN);
        let pos_index = position(POS_COLUMN);

        let mut annotation = Self {
            has_chrom: chrom_index.is_some(),
            has_pos: pos_index.is_some(),
            ..Default::default()
        };

        for line in lines {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            let fields = split_fields(&line).collect::<Vec<_>>();
            let field = |index: Option<usize>| {
                index
                    .and_then(|i| fields.get(i))
                    .map(|field| field.trim())
                    .filter(|field| !field.is_empty())
                    .map(String::from)
            };

            let Some(id) = field(Some(id_index)) else {
                continue;
            };

            if annotation.records.contains_key(&id) {
                annotation.duplicates += 1;
                continue;
            }

            let record = Record {
                chrom: field(chrom_index),
                pos: field(pos_index),
            };
            annotation.records.insert(id, record);
        }

        Ok(annotation)
    }

    /// Read annotation from path.
    ///
    /// # Errors
    ///
    /// In addition to the errors from [`Annotation::read`], fails with
    /// [`Error::PathDoesNotExist`] if there is no file at the path.
    pub fn read_from_path<P>(path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        Self::read(input::open(path)?)
    }
}
