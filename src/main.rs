use clap::Parser;
use std::io;
use std::process::ExitCode;

use wordfinder::config::{self, FinderConfig};
use wordfinder::console::Console;
use wordfinder::display;
use wordfinder::errors::{ConfigError, MatrixError};
use wordfinder::finder::{FindStatus, WordFinder};
use wordfinder::input::split_words;
use wordfinder::matrix::Matrix;

/// Find words hidden in the rows and columns of a square letter matrix
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// Smallest accepted matrix size (rows)
    #[arg(long, default_value_t = config::DEFAULT_MATRIX_SIZE_MIN)]
    min_size: usize,

    /// Largest accepted matrix size (rows)
    #[arg(long, default_value_t = config::DEFAULT_MATRIX_SIZE_MAX)]
    max_size: usize,

    /// Maximum number of found words to report
    #[arg(short = 'n', long, default_value_t = config::DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Matrix row; repeat once per row to search without prompting
    #[arg(short, long = "row")]
    rows: Vec<String>,

    /// Words to search for (separated by space, comma, or semicolon)
    #[arg(short, long, requires = "rows")]
    words: Option<String>,
}

/// Entry point of the wordfinder CLI.
///
/// Delegates to [`try_main`], printing any error with its code and help
/// text before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var(wordfinder::log::DEBUG_ENV_VAR).is_ok();
    wordfinder::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(matrix_err) = e.downcast_ref::<MatrixError>() {
            eprintln!("Error: {}", matrix_err.display_detailed());
        } else if let Some(config_err) = e.downcast_ref::<ConfigError>() {
            eprintln!("Error: {}", config_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// With `--row`, search once and print; otherwise run the interactive loop
/// on stdin/stdout.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = FinderConfig::new(cli.min_size, cli.max_size, cli.max_results)?;
    log::debug!("Using {config:?}");

    if cli.rows.is_empty() {
        let stdin = io::stdin();
        let mut console = Console::new(stdin.lock(), io::stdout(), config);
        console.run()?;
        return Ok(());
    }

    let matrix = Matrix::with_config(cli.rows.iter().map(|r| r.to_lowercase()), &config)?;
    let words = cli.words.as_deref().map(split_words).unwrap_or_default();

    let finder = WordFinder::new(&matrix, config.max_results);
    let result = finder.find(&words);

    print!("{}", display::framed_matrix(&matrix));
    print!("{}", display::results_to_string(&result));

    if result.status == FindStatus::FoundEnough {
        eprintln!("Stopped after {} words (--max-results)", result.len());
    }

    Ok(())
}
