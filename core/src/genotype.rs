//! Diploid, diallelic genotype calls.

use std::str::FromStr;

/// A diploid, diallelic genotype, coded as the number of alternative alleles.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Genotype {
    /// Homozygous reference.
    Zero = 0,
    /// Heterozygous.
    One = 1,
    /// Homozygous alternative.
    Two = 2,
}

impl Genotype {
    /// All genotypes in order of their coding.
    pub const VARIANTS: [Self; 3] = [Self::Zero, Self::One, Self::Two];

    /// Returns the number of alternative alleles carried by the genotype.
    pub fn alternative_alleles(self) -> usize {
        self as u8 as usize
    }

    /// Returns a genotype from a numeric value if it is exactly 0, 1, or 2, otherwise `None`.
    pub fn try_from_value(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(Self::Zero)
        } else if value == 1.0 {
            Some(Self::One)
        } else if value == 2.0 {
            Some(Self::Two)
        } else {
            None
        }
    }
}

/// The result of parsing a single genotype matrix cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Call {
    /// A valid genotype.
    Genotype(Genotype),
    /// A cell that does not hold a valid genotype.
    Skipped(Skipped),
}

impl Call {
    /// Parses a raw cell, treating the `missing` token as missing data.
    ///
    /// This never fails: anything that is not a valid genotype is turned into a skipped call with
    /// the appropriate reason.
    pub fn parse(raw: &str, missing: &str) -> Self {
        let raw = raw.trim();

        if raw.is_empty() || raw == missing.trim() {
            return Self::Skipped(Skipped::Missing);
        }

        match f64::from_str(raw) {
            Ok(value) if value.is_nan() => Self::Skipped(Skipped::Missing),
            Ok(value) => Genotype::try_from_value(value)
                .map(Self::Genotype)
                .unwrap_or(Self::Skipped(Skipped::Unexpected)),
            Err(_) => Self::Skipped(Skipped::NonNumeric),
        }
    }

    /// Returns the genotype if the call is valid, otherwise `None`.
    pub fn genotype(&self) -> Option<Genotype> {
        match self {
            Self::Genotype(genotype) => Some(*genotype),
            Self::Skipped(_) => None,
        }
    }
}

impl From<Genotype> for Call {
    fn from(genotype: Genotype) -> Self {
        Self::Genotype(genotype)
    }
}

/// A reason for skipping a cell.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Skipped {
    /// Cell was empty or equal to the missing token.
    Missing = 0,
    /// Cell could not be parsed as a number.
    NonNumeric = 1,
    /// Cell was numeric, but not a genotype code.
    Unexpected = 2,
}

impl Skipped {
    /// Number of reasons.
    pub const N: usize = 3;

    /// All reasons.
    pub const VARIANTS: [Skipped; Skipped::N] =
        [Self::Missing, Self::NonNumeric, Self::Unexpected];

    /// Returns a string representation for having skipped the cell.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Missing => "missing genotype",
            Self::NonNumeric => "non-numeric value",
            Self::Unexpected => "genotype code other than 0, 1, or 2",
        }
    }
}
