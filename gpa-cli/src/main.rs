//! # GPA CLI - Interactive Semester GPA Calculator
//!
//! A terminal front end for the `gpa` engine.
//!
//! ## Usage
//! ```bash
//! # Run the interactive wizard
//! gpa-cli
//!
//! # List semesters and courses of the built-in curriculum
//! gpa-cli semesters
//! gpa-cli courses 1
//!
//! # Non-interactive computation
//! gpa-cli compute 1 -g "GSC 110=A" -g "GSL 113=B" ...
//!
//! # Use a custom curriculum and print JSON
//! gpa-cli --catalog my_program.json --json compute fall -g ACC101=B+
//! ```

use clap::{Parser, Subcommand};
use gpa::prelude::*;
use std::path::PathBuf;

mod config_loader;
mod report;
mod wizard;

use config_loader::CliConfig;

/// Interactive GPA Calculator CLI
#[derive(Parser, Debug)]
#[command(name = "gpa-cli")]
#[command(author = "gpa contributors")]
#[command(version)]
#[command(about = "Semester GPA calculator with per-course breakdown", long_about = None)]
struct Args {
    /// Enable file logging to logs/ directory
    #[arg(long, default_value = "false")]
    log: bool,

    /// Curriculum JSON file to use instead of the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Decimal places of the reported GPA
    #[arg(long)]
    precision: Option<u32>,

    /// Rounding mode: half-up, half-even or down
    #[arg(long)]
    rounding: Option<RoundingMode>,

    /// Output results as JSON (non-interactive commands)
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the semesters in the catalog
    Semesters,
    /// List the courses of one semester
    Courses {
        /// Semester key, e.g. "1"
        semester: String,
    },
    /// Print the grade scale
    Scale,
    /// Compute a GPA from grades given on the command line
    Compute {
        /// Semester key, e.g. "1"
        semester: String,
        /// Course grade as CODE=LETTER, e.g. "GSC 110=A". Repeatable.
        #[arg(short, long = "grade")]
        grades: Vec<String>,
    },
    /// Write a sample config file to the platform config directory
    InitConfig,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        if is_prompt_cancel(e.as_ref()) {
            println!("Goodbye.");
            return;
        }
        report::print_error(e.as_ref());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let (file_config, mut warnings) = CliConfig::load();
    let is_wizard_mode = args.command.is_none();
    let _file_guard = init_tracing(args.log || file_config.enable_logging.unwrap_or(false), is_wizard_mode)?;

    let (config, resolve_warnings) = file_config.resolve(args.precision, args.rounding)?;
    warnings.extend(resolve_warnings);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let loaded;
    let catalog: &Catalog = match args.catalog.as_ref().or(file_config.catalog.as_ref()) {
        Some(path) => {
            loaded = Catalog::try_from_json(&path.to_string_lossy())?;
            &loaded
        }
        None => Catalog::builtin(),
    };

    match args.command {
        None => {
            let mut session = GpaSession::new(catalog).with_config(config);
            wizard::run_wizard_mode(&mut session)
        }
        Some(Commands::Semesters) => report::print_semesters(catalog, args.json),
        Some(Commands::Courses { semester }) => {
            let semester = catalog
                .semester(&semester)
                .ok_or(GpaError::UnknownSemester(semester))?;
            report::print_courses(semester, args.json)
        }
        Some(Commands::Scale) => report::print_scale(args.json),
        Some(Commands::Compute { semester, grades }) => {
            let mut session = GpaSession::new(catalog).with_config(config);
            session.select_semester(&semester)?;
            for entry in &grades {
                let (code, letter) = parse_grade_arg(entry)?;
                let index = session.find_course(code).ok_or_else(|| {
                    GpaError::InvalidInput(format!("No course '{}' in {}", code, semester))
                })?;
                session.set_grade(index, letter)?;
            }
            let result = session.compute()?;
            report::print_result(&result, args.json)
        }
        Some(Commands::InitConfig) => {
            let path = CliConfig::create_sample()?;
            println!("Wrote sample config to {}", path.display());
            Ok(())
        }
    }
}

/// Splits "GSC 110=A" into ("GSC 110", "A").
fn parse_grade_arg(entry: &str) -> Result<(&str, &str), GpaError> {
    entry
        .rsplit_once('=')
        .map(|(code, letter)| (code.trim(), letter.trim()))
        .filter(|(code, letter)| !code.is_empty() && !letter.is_empty())
        .ok_or_else(|| GpaError::InvalidInput(format!("Expected CODE=LETTER, got '{}'", entry)))
}

fn is_prompt_cancel(err: &(dyn std::error::Error + 'static)) -> bool {
    matches!(
        err.downcast_ref::<inquire::InquireError>(),
        Some(inquire::InquireError::OperationCanceled | inquire::InquireError::OperationInterrupted)
    )
}

/// Initializes tracing. In wizard mode we only log to file so log lines do
/// not corrupt the prompts.
fn init_tracing(
    log_to_file: bool,
    is_wizard_mode: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, Box<dyn std::error::Error>> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    if log_to_file {
        std::fs::create_dir_all("logs")?;

        let file_appender = tracing_appender::rolling::daily("logs", "gpa.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("gpa=debug".parse()?);

        if is_wizard_mode {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
        }

        tracing::info!("--- GPA Session Started [{}] ---", chrono::Utc::now());
        return Ok(Some(guard));
    }

    if !is_wizard_mode {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive("gpa=warn".parse()?),
            )
            .init();
    }
    Ok(None)
}
