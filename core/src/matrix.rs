//! Genotype matrix.

use indexmap::IndexMap;

use crate::{genotype::Skipped, Call};

pub mod reader;

/// A genotype matrix, mapping marker identifiers to per-sample calls.
///
/// Markers are kept in insertion order, and every marker holds exactly one call per sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matrix {
    samples: Vec<String>,
    markers: IndexMap<String, Vec<Call>>,
}

impl Matrix {
    /// Returns the calls for a marker, if it exists.
    pub fn get(&self, id: &str) -> Option<&[Call]> {
        self.markers.get(id).map(Vec::as_slice)
    }

    /// Inserts a marker, padding or truncating its calls to the number of samples.
    ///
    /// Returns the calls back if a marker with the same identifier already exists.
    pub fn insert(&mut self, id: String, mut calls: Vec<Call>) -> Result<(), Vec<Call>> {
        if self.markers.contains_key(&id) {
            return Err(calls);
        }

        calls.resize(self.samples.len(), Call::Skipped(Skipped::Missing));
        self.markers.insert(id, calls);

        Ok(())
    }

    /// Returns `true` if the matrix contains no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns an iterator over markers and their calls, in input order.
    pub fn markers(&self) -> impl ExactSizeIterator<Item = (&str, &[Call])> {
        self.markers
            .iter()
            .map(|(id, calls)| (id.as_str(), calls.as_slice()))
    }

    /// Creates a new matrix without markers.
    pub fn new(samples: Vec<String>) -> Self {
        Self {
            samples,
            markers: IndexMap::new(),
        }
    }

    /// Returns the number of markers.
    pub fn number_of_markers(&self) -> usize {
        self.markers.len()
    }

    /// Returns the number of samples.
    pub fn number_of_samples(&self) -> usize {
        self.samples.len()
    }

    /// Returns the sample names.
    pub fn samples(&self) -> &[String] {
        &self.samples
    }
}
