use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use docs_lang_switch::config::load_table;
use docs_lang_switch::switcher::Switcher;

#[derive(Parser)]
#[command(name = "docs-lang-switch")]
#[command(version, about = "Find translations of a documentation page")]
struct Cli {
    /// JSON file overriding the built-in locale table
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when DOCS_LANG_SWITCH_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the translations compatible with URL
    Resolve {
        url: String,
        /// Print a JSON array instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Print the switcher markup for URL
    Render { url: String },
    /// List the configured locales
    Locales,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = docs_lang_switch::logging::init(&cli.log_level)?;

    let table = Arc::new(load_table(cli.config.as_deref())?);
    let switcher = Switcher::new(table);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Resolve { url, json } => {
            let targets = switcher.targets(&url);
            if json {
                serde_json::to_writer_pretty(&mut out, &targets)?;
                writeln!(out)?;
            } else {
                for target in &targets {
                    writeln!(out, "{}\t{}", target.title(), target.target_url)?;
                }
            }
        }
        Command::Render { url } => {
            if let Some(mount) = switcher.mount(url.as_str()) {
                for injection in &mount.injections {
                    writeln!(out, "{}\n{}", injection.selector, injection.html)?;
                    if let Some(restyle) = &injection.parent_restyle {
                        writeln!(out, "{} {{ {} }}", restyle.selector, restyle.style)?;
                    }
                    writeln!(out)?;
                }
            }
        }
        Command::Locales => {
            let locales = switcher.locales();
            writeln!(out, "latest\t{}", locales.latest_version())?;
            for locale in locales.iter() {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}..{}",
                    locale.code, locale.title, locale.url_prefix, locale.min_version, locale.latest
                )?;
            }
        }
    }

    Ok(())
}
