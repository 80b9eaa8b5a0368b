//! Per-marker genotype counts and minor allele frequency.

use std::ops::{Index, IndexMut};

use crate::{genotype::Skipped, Call, Genotype, Matrix};

/// The minimum number of non-missing genotypes required to define a minor allele frequency.
pub const MIN_NON_MISSING: usize = 10;

/// Genotype counts for a single marker.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Counts([usize; 3]);

impl Counts {
    /// Adds a genotype to the counts.
    pub fn add(&mut self, genotype: Genotype) {
        self[genotype] += 1;
    }

    /// Returns the number of alternative alleles across all counted genotypes.
    pub fn alternative_alleles(&self) -> usize {
        Genotype::VARIANTS
            .iter()
            .map(|&genotype| genotype.alternative_alleles() * self[genotype])
            .sum()
    }

    /// Returns the frequency of the alternative allele, or `None` if nothing has been counted.
    pub fn alternative_frequency(&self) -> Option<f64> {
        match self.total_alleles() {
            0 => None,
            total => Some(self.alternative_alleles() as f64 / total as f64),
        }
    }

    /// Returns the folded frequency of the less frequent allele.
    ///
    /// This is `None` if fewer than [`MIN_NON_MISSING`] genotypes have been counted.
    pub fn minor_allele_frequency(&self) -> Option<f64> {
        if self.non_missing() < MIN_NON_MISSING {
            return None;
        }

        self.alternative_frequency().map(|p| p.min(1.0 - p))
    }

    /// Returns the number of counted genotypes.
    pub fn non_missing(&self) -> usize {
        self.0.iter().sum()
    }

    /// Returns the number of alleles across all counted genotypes.
    pub fn total_alleles(&self) -> usize {
        2 * self.non_missing()
    }
}

impl Index<Genotype> for Counts {
    type Output = usize;

    fn index(&self, genotype: Genotype) -> &Self::Output {
        &self.0[genotype as u8 as usize]
    }
}

impl IndexMut<Genotype> for Counts {
    fn index_mut(&mut self, genotype: Genotype) -> &mut Self::Output {
        &mut self.0[genotype as u8 as usize]
    }
}

/// Counts of skipped cells for a single marker, by reason.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Skips([usize; Skipped::N]);

impl Skips {
    /// Adds a skipped cell.
    pub fn add(&mut self, skipped: Skipped) {
        self[skipped] += 1;
    }

    /// Returns the total number of skipped cells.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl Index<Skipped> for Skips {
    type Output = usize;

    fn index(&self, skipped: Skipped) -> &Self::Output {
        &self.0[skipped as u8 as usize]
    }
}

impl IndexMut<Skipped> for Skips {
    fn index_mut(&mut self, skipped: Skipped) -> &mut Self::Output {
        &mut self.0[skipped as u8 as usize]
    }
}

/// Frequency summary of a single marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Frequency {
    id: String,
    counts: Counts,
    skips: Skips,
}

impl Frequency {
    /// Returns the genotype counts.
    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    /// Summarises the calls of a marker.
    pub fn from_calls<'a, I>(id: impl Into<String>, calls: I) -> Self
    where
        I: IntoIterator<Item = &'a Call>,
    {
        let mut counts = Counts::default();
        let mut skips = Skips::default();

        for call in calls {
            match call {
                Call::Genotype(genotype) => counts.add(*genotype),
                Call::Skipped(skipped) => skips.add(*skipped),
            }
        }

        Self {
            id: id.into(),
            counts,
            skips,
        }
    }

    /// Returns the marker identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the minor allele frequency, see [`Counts::minor_allele_frequency`].
    pub fn maf(&self) -> Option<f64> {
        self.counts.minor_allele_frequency()
    }

    /// Returns the number of samples with a valid genotype.
    pub fn n_non_missing(&self) -> usize {
        self.counts.non_missing()
    }

    /// Returns the counts of skipped cells.
    pub fn skips(&self) -> &Skips {
        &self.skips
    }
}

/// Summarises every marker in the matrix, in input order.
pub fn compute(matrix: &Matrix) -> Vec<Frequency> {
    matrix
        .markers()
        .map(|(id, calls)| Frequency::from_calls(id, calls))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::matrix::reader::Builder;

    fn calls(zero: usize, one: usize, two: usize, skipped: &[Skipped]) -> Vec<Call> {
        let genotypes = [(Genotype::Zero, zero), (Genotype::One, one), (Genotype::Two, two)]
            .into_iter()
            .flat_map(|(genotype, n)| std::iter::repeat(Call::Genotype(genotype)).take(n));

        genotypes
            .chain(skipped.iter().map(|&skipped| Call::Skipped(skipped)))
            .collect()
    }

    fn frequency(zero: usize, one: usize, two: usize, skipped: &[Skipped]) -> Frequency {
        Frequency::from_calls("rs1", &calls(zero, one, two, skipped))
    }

    #[test]
    fn test_counts_and_maf() {
        let frequency = frequency(6, 4, 2, &[]);

        assert_eq!(frequency.counts()[Genotype::Zero], 6);
        assert_eq!(frequency.counts()[Genotype::One], 4);
        assert_eq!(frequency.counts()[Genotype::Two], 2);
        assert_eq!(frequency.n_non_missing(), 12);
        assert_eq!(frequency.counts().alternative_alleles(), 8);
        assert_eq!(frequency.counts().total_alleles(), 24);
        assert_approx_eq!(frequency.maf().unwrap(), 1. / 3., epsilon = 1e-12);
    }

    #[test]
    fn test_maf_folded() {
        let frequency = frequency(1, 2, 9, &[]);

        assert_approx_eq!(
            frequency.counts().alternative_frequency().unwrap(),
            20. / 24.,
            epsilon = 1e-12
        );
        assert_approx_eq!(frequency.maf().unwrap(), 4. / 24., epsilon = 1e-12);
    }

    #[test]
    fn test_maf_undefined_below_threshold() {
        for (zero, one, two) in [(8, 0, 0), (0, 8, 0), (2, 3, 3), (0, 0, 9)] {
            assert_eq!(frequency(zero, one, two, &[]).maf(), None);
        }
    }

    #[test]
    fn test_maf_defined_at_threshold() {
        assert_eq!(frequency(5, 0, 5, &[]).maf(), Some(0.5));
    }

    #[test]
    fn test_missing_excluded() {
        let frequency = frequency(9, 5, 1, &[Skipped::Missing; 5]);

        assert_eq!(frequency.n_non_missing(), 15);
        assert_eq!(frequency.skips()[Skipped::Missing], 5);
        assert_eq!(frequency.skips().total(), 5);
        assert_approx_eq!(frequency.maf().unwrap(), 7. / 30., epsilon = 1e-12);
    }

    #[test]
    fn test_missing_below_threshold() {
        let frequency = frequency(4, 4, 0, &[Skipped::Missing; 4]);

        assert_eq!(frequency.n_non_missing(), 8);
        assert_eq!(frequency.maf(), None);
    }

    #[test]
    fn test_unexpected_and_non_numeric_excluded() {
        let frequency = frequency(8, 2, 0, &[Skipped::NonNumeric, Skipped::Unexpected]);

        assert_eq!(frequency.n_non_missing(), 10);
        assert_eq!(frequency.skips()[Skipped::NonNumeric], 1);
        assert_eq!(frequency.skips()[Skipped::Unexpected], 1);
        assert_approx_eq!(frequency.maf().unwrap(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_all_missing() {
        let frequency = frequency(0, 0, 0, &[Skipped::Missing; 12]);

        assert_eq!(frequency.counts(), &Counts::default());
        assert_eq!(frequency.n_non_missing(), 0);
        assert_eq!(frequency.counts().alternative_frequency(), None);
        assert_eq!(frequency.maf(), None);
    }

    #[test]
    fn test_monomorphic() {
        assert_eq!(frequency(12, 0, 0, &[]).maf(), Some(0.0));
        assert_eq!(frequency(0, 0, 12, &[]).maf(), Some(0.0));
    }

    #[test]
    fn test_compute_scenario_with_missing_token() {
        let header = (1..=20).fold(String::from("snp"), |s, i| format!("{s}\ts{i}"));
        let values = ["NA"; 5]
            .into_iter()
            .chain(["0"; 10])
            .chain(["1"; 5])
            .collect::<Vec<_>>()
            .join("\t");
        let src = format!("{header}\nrs1\t{values}\n");

        let matrix = Builder::default().read(src.as_bytes()).unwrap();
        let frequencies = compute(&matrix);

        assert_eq!(frequencies.len(), 1);
        assert_eq!(frequencies[0].id(), "rs1");
        assert_eq!(frequencies[0].n_non_missing(), 15);
        assert_eq!(frequencies[0].skips()[Skipped::Missing], 5);
    }

    #[test]
    fn test_compute_properties() {
        let src = b"snp\ta\tb\tc\td\te\tf\tg\th\ti\tj\tk\tl\n\
            rs1\t0\t0\t0\t0\t0\t0\t1\t1\t1\t1\t2\t2\n\
            rs2\tNA\tNA\tNA\tNA\t2\t2\t2\t2\t2\t2\t1\t1\n\
            rs3\tNA\tNA\tNA\tNA\tNA\tNA\tNA\tNA\tNA\tNA\tNA\tNA\n\
            rs4\t2\t2\t2\t2\t2\t2\t2\t2\t2\t2\t2\t2\n\
            rs5\t0\t0\t0\t0\t0\t0\t0\t0\t1\t1\tfoo\t3\n\
            rs6\t2\t2\t2\t2\t2\t2\t2\t2\t2\t1\t1\t0\n";

        let matrix = Builder::default().read(&src[..]).unwrap();
        let frequencies = compute(&matrix);

        assert_eq!(frequencies.len(), matrix.number_of_markers());
        assert_eq!(
            frequencies.iter().map(Frequency::id).collect::<Vec<_>>(),
            ["rs1", "rs2", "rs3", "rs4", "rs5", "rs6"]
        );
        assert_approx_eq!(
            frequencies.iter().map(Frequency::maf).collect::<Vec<_>>(),
            vec![Some(1. / 3.), None, None, Some(0.), Some(0.1), Some(1. / 6.)],
            epsilon = 1e-12
        );

        for frequency in frequencies.iter() {
            let counts = frequency.counts();
            assert_eq!(
                Genotype::VARIANTS.iter().map(|&g| counts[g]).sum::<usize>(),
                frequency.n_non_missing()
            );

            match frequency.maf() {
                Some(maf) => {
                    assert!(frequency.n_non_missing() >= MIN_NON_MISSING);
                    assert!((0.0..=0.5).contains(&maf));
                }
                None => assert!(frequency.n_non_missing() < MIN_NON_MISSING),
            }
        }
    }
}
