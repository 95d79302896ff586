//! Automated Statement-of-Work reviewer CLI.

mod reporter;

use clap::Parser;
use review_engine::ReviewEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sow-review")]
#[command(
    version,
    about = "Flags missing sections, ambiguous language and contradictions in SOW documents"
)]
struct Args {
    /// Path to the SOW PDF or text file
    #[arg(short, long)]
    input: String,

    /// Output report path (.json)
    #[arg(short, long)]
    output: String,

    /// Print the weighted risk score
    #[arg(long)]
    risk: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !args.output.to_lowercase().ends_with(".json") {
        anyhow::bail!(
            "unsupported output format {:?}, expected a .json path",
            args.output
        );
    }

    let document = sow_extract::load_document(&args.input)?;
    tracing::info!(file = %document.filename, "analyzing SOW");

    let engine = ReviewEngine::new();
    let report = engine.analyze(&document);

    reporter::save_json_report(&report, &args.output)?;
    tracing::info!(path = %args.output, issues = report.issues.len(), "report written");

    if args.risk {
        println!("Risk score: {}", report.risk_score);
    }
    println!("{}", reporter::render_text_report(&report));

    Ok(())
}
