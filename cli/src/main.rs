use std::{io::Write, path::PathBuf};

use anyhow::Error;

use clap::{ArgAction, Parser};

use afreq_core::matrix::reader::DEFAULT_MISSING;

mod runner;
use runner::Runner;

const NAME: &str = env!("CARGO_BIN_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compute per-marker genotype counts and minor allele frequencies.
#[derive(Debug, Parser)]
#[clap(name = NAME, version = VERSION, about)]
pub struct Cli {
    /// Input genotype matrix.
    ///
    /// Tab-separated, with a header of sample names and one line per marker. The first column
    /// holds marker identifiers, the remaining columns hold genotypes coded as 0, 1, or 2.
    /// Gzip compressed input is supported.
    #[arg(short = 'g', long, value_name = "PATH")]
    genotypes: PathBuf,

    /// Input marker annotation.
    ///
    /// Tab-separated, with a header containing an 'snp_id' column. If present, 'chrom' and 'pos'
    /// columns are added to the output. Markers without annotation are kept with empty fields.
    #[arg(short = 'a', long, value_name = "PATH")]
    annotation: Option<PathBuf>,

    /// Output path.
    ///
    /// Missing parent directories will be created. If the path already exists, it will be
    /// overwritten.
    #[arg(short = 'o', long, value_name = "PATH")]
    output: PathBuf,

    /// Token denoting missing genotypes.
    ///
    /// Empty cells are always treated as missing, and any other value that is not a number is
    /// treated as missing with a warning.
    #[arg(
        short = 'm',
        long,
        default_value = DEFAULT_MISSING,
        allow_hyphen_values = true,
        value_name = "TOKEN"
    )]
    missing: String,

    /// Precision to use when printing minor allele frequencies.
    ///
    /// By default, the shortest representation that uniquely identifies the frequency is used.
    #[arg(short = 'p', long, value_name = "INT")]
    precision: Option<usize>,

    /// Suppress warnings.
    ///
    /// By default, only warnings are printed. By setting this flag, warnings will be disabled.
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbosity.
    ///
    /// Flag can be set multiply times to increase verbosity, or left unset for quiet mode.
    #[clap(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Print CLI arguments for debugging.
    #[clap(long, hide = true)]
    debug: bool,
}

impl Cli {
    pub fn run(self) -> Result<(), Error> {
        if self.debug {
            eprintln!("{self:#?}");
        }

        let level = if self.quiet {
            log::LevelFilter::Off
        } else {
            match self.verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            }
        };

        match env_logger::Builder::new()
            .filter_level(level)
            .target(env_logger::Target::Stderr)
            .format(|buf, record| {
                let level = record.level().as_str().to_lowercase();
                let args = record.args();
                writeln!(buf, "[{NAME} {level:>5}] {args}")
            })
            .try_init()
        {
            Ok(()) => (),
            Err(e) => eprintln!("failed to setup logger: {e}"),
        }

        Runner::try_from(&self)?.run()?;

        println!("Allele frequency results saved to {}", self.output.display());

        Ok(())
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => (),
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}
