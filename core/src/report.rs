//! Frequency report.
//!
//! A report left-joins marker frequencies with an optional annotation, and selects the columns of
//! the canonical schema that are available, see [`Column`].

use crate::{annotation::Record, Annotation, Frequency, Genotype};

pub mod column;
pub use column::Column;

pub mod write;

/// A report of marker frequencies.
#[derive(Clone, Debug)]
pub struct Report<'a> {
    schema: Vec<Column>,
    rows: Vec<Row<'a>>,
}

impl<'a> Report<'a> {
    /// Creates a new report, with one row for each frequency in the given order.
    ///
    /// Rows for markers missing from the annotation are kept with empty annotation fields.
    pub fn new(frequencies: &'a [Frequency], annotation: Option<&'a Annotation>) -> Self {
        let schema = Column::CANONICAL
            .into_iter()
            .filter(|column| column.is_available(annotation))
            .collect();

        let rows = frequencies
            .iter()
            .map(|frequency| Row {
                frequency,
                record: annotation.and_then(|annotation| annotation.get(frequency.id())),
            })
            .collect();

        Self { schema, rows }
    }

    /// Returns the rows of the report.
    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    /// Returns the columns of the report.
    pub fn schema(&self) -> &[Column] {
        &self.schema
    }

    /// Returns the number of rows without annotation.
    pub fn unannotated(&self) -> usize {
        self.rows.iter().filter(|row| row.record.is_none()).count()
    }
}

/// A single row of a report.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    frequency: &'a Frequency,
    record: Option<&'a Record>,
}

impl<'a> Row<'a> {
    /// Returns the value of the row in the given column.
    pub fn field(&self, column: Column) -> Field<'a> {
        let counts = self.frequency.counts();

        match column {
            Column::SnpId => Field::Text(self.frequency.id()),
            Column::Chrom => self.record.and_then(Record::chrom).into(),
            Column::Pos => self.record.and_then(Record::pos).into(),
            Column::Count0 => Field::Count(counts[Genotype::Zero]),
            Column::Count1 => Field::Count(counts[Genotype::One]),
            Column::Count2 => Field::Count(counts[Genotype::Two]),
            Column::NNonMissing => Field::Count(self.frequency.n_non_missing()),
            Column::Maf => self.frequency.maf().map_or(Field::Null, Field::Frequency),
        }
    }
}

/// The value of a single report field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field<'a> {
    /// Count.
    Count(usize),
    /// Frequency.
    Frequency(f64),
    /// Undefined or missing value.
    Null,
    /// Text passed through from input.
    Text(&'a str),
}

impl<'a> From<Option<&'a str>> for Field<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(Field::Null, Field::Text)
    }
}
