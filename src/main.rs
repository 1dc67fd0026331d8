use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use minus::Pager;
use repo_survey::areas::command::{DEFAULT_GIT_PROGRAM, GitCommand};
use repo_survey::areas::survey::Survey;
use repo_survey::artifacts::core::{PagerWriter, should_page};
use repo_survey::artifacts::survey::options::SurveyOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "repo-survey",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Report the state of every git repository below a directory",
    long_about = "This command walks a directory tree in name order and prints one line per entry. \
    Git repositories are reported as clean, dirty or auto-commit and are not descended into. \
    Directories with no repository anywhere beneath them are marked and not descended into either.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, default_value = ".", help = "The directory to start from")]
    path: PathBuf,
    #[arg(
        long = "git",
        env = "REPO_SURVEY_GIT",
        default_value = DEFAULT_GIT_PROGRAM,
        help = "The git executable to run"
    )]
    git_program: String,
    #[arg(long, help = "Print repository counts after the report")]
    summary: bool,
    #[arg(long, help = "Disable colored output")]
    no_color: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Log diagnostics to stderr (-v for debug, -vv for trace)"
    )]
    verbose: u8,
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default_directive = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to initialize logging")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let opts = SurveyOptions::new(cli.path, cli.git_program.into(), cli.summary);
    let runner = Box::new(GitCommand::new(opts.git_program.clone()));

    tracing::debug!(root = %opts.root.display(), git = ?opts.git_program, "starting survey");

    if should_page() {
        let pager = Pager::new();
        let survey = Survey::new(opts, runner, Box::new(PagerWriter::new(pager.clone())));
        survey.scan()?;
        minus::page_all(pager).context("failed to page output")?;
    } else {
        let survey = Survey::new(opts, runner, Box::new(std::io::stdout()));
        survey.scan()?;
    }

    Ok(())
}
