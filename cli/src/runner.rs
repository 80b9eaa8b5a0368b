use std::path::PathBuf;

use anyhow::{Context, Error};

use afreq_core::{
    frequency::{self, MIN_NON_MISSING},
    genotype::Skipped,
    matrix, report, Annotation, Frequency, Matrix, Report,
};

use crate::Cli;

pub struct Runner {
    matrix: Matrix,
    annotation: Option<Annotation>,
    output: PathBuf,
    precision: Option<usize>,
}

impl Runner {
    pub fn run(&self) -> Result<(), Error> {
        let frequencies = frequency::compute(&self.matrix);

        let mut warnings = Warnings::default();
        let mut undefined = 0;
        for frequency in frequencies.iter() {
            warnings.warn_once(frequency);

            if frequency.maf().is_none() {
                undefined += 1;

                let id = frequency.id();
                let n = frequency.n_non_missing();
                log::debug!(
                    "Marker '{id}' has {n} non-missing genotypes, \
                    minor allele frequency requires at least {MIN_NON_MISSING}."
                );
            }
        }
        warnings.summarize();

        if undefined > 0 {
            log::info!(
                "Minor allele frequency undefined for {undefined} markers with fewer than \
                {MIN_NON_MISSING} non-missing genotypes."
            );
        }

        let report = Report::new(&frequencies, self.annotation.as_ref());

        if self.annotation.is_some() {
            let unannotated = report.unannotated();

            if unannotated > 0 {
                log::warn!("No annotation found for {unannotated} markers.");
            }
        }

        report::write::Builder::default()
            .set_precision(self.precision)
            .write_to_path(&self.output, &report)
            .with_context(|| {
                format!("failed to write output to '{}'", self.output.display())
            })?;

        log::info!(
            "Wrote {} markers to '{}'.",
            report.rows().len(),
            self.output.display()
        );

        Ok(())
    }
}

impl TryFrom<&Cli> for Runner {
    type Error = Error;

    fn try_from(args: &Cli) -> Result<Self, Self::Error> {
        let matrix = matrix::reader::Builder::default()
            .set_missing(&args.missing)
            .read_from_path(&args.genotypes)
            .with_context(|| {
                format!(
                    "failed to read genotypes from '{}'",
                    args.genotypes.display()
                )
            })?;

        log::info!(
            "Read {} markers across {} samples from '{}'.",
            matrix.number_of_markers(),
            matrix.number_of_samples(),
            args.genotypes.display()
        );

        let annotation = if let Some(path) = &args.annotation {
            let annotation = Annotation::read_from_path(path).with_context(|| {
                format!("failed to read annotation from '{}'", path.display())
            })?;

            log::info!(
                "Read {} annotated markers from '{}'.",
                annotation.len(),
                path.display()
            );

            let duplicates = annotation.duplicates();
            if duplicates > 0 {
                log::warn!(
                    "Ignored {duplicates} annotation records with an already annotated marker \
                    identifier, keeping the first record."
                );
            }

            Some(annotation)
        } else {
            None
        };

        Ok(Self {
            matrix,
            annotation,
            output: args.output.clone(),
            precision: args.precision,
        })
    }
}

#[derive(Clone, Debug, Default)]
struct Warnings {
    markers: [usize; Skipped::N],
    cells: [usize; Skipped::N],
}

impl Warnings {
    pub fn markers(&self, skipped: Skipped) -> usize {
        self.markers[skipped as u8 as usize]
    }

    pub fn cells(&self, skipped: Skipped) -> usize {
        self.cells[skipped as u8 as usize]
    }

    pub fn warn_once(&mut self, frequency: &Frequency) {
        for skipped in Skipped::VARIANTS {
            let count = frequency.skips()[skipped];

            if count == 0 {
                continue;
            }

            if skipped != Skipped::Missing && self.markers(skipped) == 0 {
                let id = frequency.id();
                let reason = skipped.reason();

                log::warn!(
                    "Excluding {count} genotypes for marker '{id}' due to {reason}. \
                    This warning will be shown only once, with a summary at the end."
                );
            }

            self.markers[skipped as u8 as usize] += 1;
            self.cells[skipped as u8 as usize] += count;
        }
    }

    pub fn summarize(&self) {
        for skipped in Skipped::VARIANTS {
            let cells = self.cells(skipped);
            let markers = self.markers(skipped);

            if cells == 0 {
                continue;
            }

            let reason = skipped.reason();
            if skipped == Skipped::Missing {
                log::info!("Excluded {cells} genotypes across {markers} markers due to {reason}.");
            } else {
                log::warn!("Excluded {cells} genotypes across {markers} markers due to {reason}.");
            }
        }
    }
}
