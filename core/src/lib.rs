#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Per-marker allele frequency statistics.
//!
//! This serves as the core library implementation for the `afreq` CLI, but can also be used as a
//! free-standing library for summarising genotype matrices.
//!
//! # Overview
//!
//! A [`Matrix`] maps marker identifiers to per-sample genotype [`Call`]s. Each marker is
//! summarised independently into a [`Frequency`], holding the genotype counts and the minor
//! allele frequency. Frequencies may be joined with an optional [`Annotation`] table into a
//! [`Report`] for writing.
//!
//! # Example
//!
//! ```
//! use afreq_core::matrix;
//!
//! let src = b"id\ts1\ts2\ts3\ts4\ts5\ts6\ts7\ts8\ts9\ts10\ts11\ts12\n\
//!             rs1\t0\t0\t0\t0\t0\t0\t1\t1\t1\t1\t2\t2\n";
//!
//! let matrix = matrix::reader::Builder::default().read(&src[..]).unwrap();
//!
//! let frequencies = afreq_core::frequency::compute(&matrix);
//!
//! let maf = frequencies[0].maf().expect("enough samples for maf");
//! assert!((maf - 1. / 3.).abs() < 1e-12);
//! ```

#[cfg(test)]
#[macro_use]
pub(crate) mod approx;

pub mod annotation;
pub use annotation::Annotation;

pub mod frequency;
pub use frequency::Frequency;

pub mod genotype;
pub use genotype::{Call, Genotype};

pub mod input;

pub mod matrix;
pub use matrix::Matrix;

pub mod report;
pub use report::Report;
