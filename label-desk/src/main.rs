//! label-desk - drive the garment label form from the command line

use anyhow::{Context, bail};
use clap::Parser;
use label_desk::logger::init_logger;
use label_desk::{Cli, Command, Config, DeskHost, FormDraft};
use label_form::{FormController, HostBridge, Outcome};
use shared::ValidationReport;
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logger(&cli.config.log_level, cli.config.log_dir.as_deref());

    tracing::info!(spool = %cli.config.spool_dir.display(), "Starting label-desk");

    match cli.command {
        Command::Preview { draft, out } => preview(&cli.config, &draft, out),
        Command::Print { draft } => print(&cli.config, &draft),
        Command::Suggest { category, query } => {
            let host = DeskHost::open(&cli.config)?;
            let json = host.filtered_suggestions(category, &query)?;
            let suggestions: Vec<String> = serde_json::from_str(&json)?;
            for suggestion in suggestions {
                println!("{suggestion}");
            }
            Ok(())
        }
    }
}

fn replay<'a>(host: &'a DeskHost, draft: &Path) -> anyhow::Result<FormController<&'a DeskHost>> {
    let draft = FormDraft::load(draft).with_context(|| format!("loading draft {}", draft.display()))?;
    let mut form = FormController::new(host);
    draft.apply(&mut form)?;
    Ok(form)
}

fn report_errors(report: &ValidationReport) -> anyhow::Error {
    for error in report.errors() {
        tracing::warn!(code = %error.code(), category = ?error.category(), field = error.field().dom_id(), "{error}");
        eprintln!("- {error}");
    }
    anyhow::anyhow!("form is invalid ({} errors)", report.errors().len())
}

fn preview(config: &Config, draft: &Path, out: Option<PathBuf>) -> anyhow::Result<()> {
    let host = DeskHost::open(config)?;
    let mut form = replay(&host, draft)?;

    match form.preview() {
        Outcome::Previewed { labels, html } => {
            match out {
                Some(path) => {
                    std::fs::write(&path, &html).with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("{labels} labels written to {}", path.display());
                }
                None => println!("{html}"),
            }
            Ok(())
        }
        Outcome::Rejected(report) => Err(report_errors(&report)),
        other => bail!("unexpected preview outcome: {other:?}"),
    }
}

fn print(config: &Config, draft: &Path) -> anyhow::Result<()> {
    let host = DeskHost::open(config)?;
    let mut form = replay(&host, draft)?;

    match form.print() {
        Outcome::Printed { labels } => {
            form.record_printed();
            eprintln!("{labels} labels sent to {}", host.printer().dir().display());
            Ok(())
        }
        Outcome::Previewed { labels, html } => {
            host.print_preview(&html)?;
            eprintln!("printing unavailable, {labels} label preview spooled");
            Ok(())
        }
        Outcome::Rejected(report) => Err(report_errors(&report)),
        Outcome::PrintFailed(reason) => bail!("print failed: {reason}"),
    }
}
