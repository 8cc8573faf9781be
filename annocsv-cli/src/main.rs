use anyhow::{Context, Result};
use annocsv::{discover, write_report_file, DocumentOutcome, Discovered, ProcessOptions, Report};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "annocsv",
    about = "Generate a CSV file from brat annotations: \
             [filename, line number, annotation type(s), difficulty, text]",
    version,
    author
)]
struct Cli {
    /// Directory read recursively to process *.ann and *.txt files.
    /// Pairs of .ann and .txt files are expected in the same directory.
    #[arg(default_value = ".")]
    dir_base: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = "annotations.csv")]
    out: PathBuf,

    /// Display the (full) name of the files read
    #[arg(short, long)]
    verbose: bool,

    /// Trailing lines of each text file holding metadata, not content
    #[arg(long, default_value_t = annocsv::config::DEFAULT_TRAILER_LINES)]
    trailer_lines: usize,

    /// Label given to lines without annotation
    #[arg(long, default_value = annocsv::config::DEFAULT_NO_TYPE)]
    no_type: String,
}

impl Cli {
    fn options(&self) -> ProcessOptions {
        ProcessOptions::default()
            .with_trailer_lines(self.trailer_lines)
            .with_no_type(self.no_type.clone())
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "annocsv=info" } else { "annocsv=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.options();
    let dir_base = cli
        .dir_base
        .canonicalize()
        .with_context(|| format!("Cannot open directory \"{}\"", cli.dir_base.display()))?;

    println!("Processing: \"{}\"", dir_base.display());

    let found = discover(&dir_base, &options)
        .with_context(|| format!("Cannot read directory \"{}\"", dir_base.display()))?;

    let mut report = Report::new();
    for item in &found {
        if cli.verbose {
            println!("{}", item.annotation().display());
        }

        report = match item {
            Discovered::Empty(annotation) => {
                if cli.verbose {
                    println!("✘ File is empty, skipped.");
                }
                report.skip_empty(annotation)
            }
            Discovered::Pair(pair) => {
                let (report, outcome) = report.process(pair, &options);
                match outcome {
                    DocumentOutcome::Processed => {
                        if cli.verbose {
                            println!("✓");
                        }
                    }
                    // already logged by the pipeline
                    DocumentOutcome::Failed(_) => {
                        if cli.verbose {
                            println!("✘");
                        }
                    }
                }
                report
            }
        };
    }

    println!("{}", report.summary());

    match write_report_file(&cli.out, &report) {
        Ok(_) => {
            println!("Result in \"{}\"", cli.out.display());
        }
        Err(e) => {
            eprintln!("✘ Error while writing {}:\n{}", cli.out.display(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["annocsv"]);
        assert_eq!(cli.dir_base, PathBuf::from("."));
        assert_eq!(cli.out, PathBuf::from("annotations.csv"));
        assert!(!cli.verbose);
        assert_eq!(cli.options(), ProcessOptions::default());
    }

    #[test]
    fn test_flags_map_onto_options() {
        let cli = Cli::parse_from([
            "annocsv",
            "data",
            "-o",
            "out.csv",
            "-v",
            "--trailer-lines",
            "3",
            "--no-type",
            "none",
        ]);

        assert_eq!(cli.dir_base, PathBuf::from("data"));
        assert_eq!(cli.out, PathBuf::from("out.csv"));
        assert!(cli.verbose);

        let options = cli.options();
        assert_eq!(options.trailer_lines, 3);
        assert_eq!(options.no_type, "none");
    }
}
