use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use cutadapt_stats::{summarize_log_file, StatsError};

/// Summarize per-sample adapter trimming from a cutadapt log as CSV
#[derive(Parser, Debug)]
#[command(name = "cutadapt-stats", version, about)]
struct Cli {
    /// Cutadapt log file (plain text or .gz)
    log_file: Option<PathBuf>,

    /// Write the CSV here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn spinner(color: &str, msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{color}}} {{msg}}"))
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg);
    pb
}

fn run(log_file: PathBuf, output: Option<PathBuf>) -> Result<(), StatsError> {
    // 1. Parse the log
    let pb = spinner("blue", "Parsing cutadapt log...");
    let report = summarize_log_file(&log_file)?;
    pb.finish_and_clear();
    log::info!(
        "{} row(s) for {} sample(s) from {}",
        report.rows.len(),
        report.sample_names().len(),
        log_file.display()
    );

    // 2. Write the table
    match output {
        Some(path) => {
            let f = File::create(&path).map_err(|e| StatsError::io(path.display().to_string(), e))?;
            report.write_csv(BufWriter::new(f))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            report.write_csv(&mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let Some(log_file) = cli.log_file else {
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::from(1);
    };

    match run(log_file, cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
