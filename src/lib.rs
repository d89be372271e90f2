pub mod cli;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use log::info;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    // 1. ── Parse ──────────────────────────────────────────────────────
    let doc = parser::load(&args.input).with_context(|| "Parsing screenplay")?;

    // 2. ── Write outputs ──────────────────────────────────────────────
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Creating {}", args.output.display()))?;

    if !args.no_dataset {
        let written = writer::dataset::emit(&doc, &args.output)
            .with_context(|| "Writing dialogue dataset")?;
        info!("Wrote {} dialogue records", written);
    }
    writer::vocabulary::emit(&doc, &args.output)
        .with_context(|| "Writing vocabulary and stats")?;

    for (name, count) in doc.stats.iter() {
        info!("{name}: {count}");
    }
    if args.print_stats {
        let json = serde_json::to_string_pretty(&doc.stats).with_context(|| "Encoding stats")?;
        println!("{json}");
    }

    Ok(())
}
