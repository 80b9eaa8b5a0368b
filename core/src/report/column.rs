//! Report columns.

use std::fmt;

use crate::Annotation;

/// A column of the report schema.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Column {
    /// Marker identifier.
    SnpId,
    /// Chromosome, from annotation.
    Chrom,
    /// Position, from annotation.
    Pos,
    /// Number of homozygous reference genotypes.
    Count0,
    /// Number of heterozygous genotypes.
    Count1,
    /// Number of homozygous alternative genotypes.
    Count2,
    /// Number of valid genotypes.
    NNonMissing,
    /// Minor allele frequency.
    Maf,
}

impl Column {
    /// All columns, in canonical order.
    pub const CANONICAL: [Self; 8] = [
        Self::SnpId,
        Self::Chrom,
        Self::Pos,
        Self::Count0,
        Self::Count1,
        Self::Count2,
        Self::NNonMissing,
        Self::Maf,
    ];

    /// Returns the name of the column in the report header.
    pub fn header_name(&self) -> &'static str {
        match self {
            Column::SnpId => "snp_id",
            Column::Chrom => "chrom",
            Column::Pos => "pos",
            Column::Count0 => "count_0",
            Column::Count1 => "count_1",
            Column::Count2 => "count_2",
            Column::NNonMissing => "n_non_missing",
            Column::Maf => "maf",
        }
    }

    /// Returns `true` if the column can be filled given the annotation, if any.
    pub fn is_available(&self, annotation: Option<&Annotation>) -> bool {
        match self {
            Column::Chrom => annotation.map_or(false, Annotation::has_chrom),
            Column::Pos => annotation.map_or(false, Annotation::has_pos),
            _ => true,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_name())
    }
}
