use std::path::PathBuf;
use std::process;

use clap::Parser;

use props_i18n::config::{Config, Mode};
use props_i18n::merge::{self, ImportOutcome};
use props_i18n::model::load_model;
use props_i18n::task::build_tasks;

/// Extract translatable properties files from a documentation-model
/// snapshot, or merge edited translations back into the source tree
#[derive(Parser, Debug)]
#[command(name = "props-i18n", version, about, long_about = None)]
struct Cli {
    /// Path to the documentation-model snapshot (JSON)
    #[arg(long, value_name = "FILE")]
    model: PathBuf,

    /// Target locale code, e.g. 'de' for German
    #[arg(long = "target-locale", value_name = "LOCALE")]
    target_locale: String,

    /// Source root paths to search for existing translations, joined with ';'
    #[arg(long, value_name = "PATHS")]
    sourcepath: String,

    /// 'export' writes translation files, 'import' reads them back
    #[arg(long, value_name = "MODE")]
    mode: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> props_i18n::Result<()> {
    // Parameter validation happens before any file I/O
    let config = Config::new(&cli.target_locale, &cli.sourcepath, &cli.mode)?;

    let classes = load_model(&cli.model)?;
    let tasks = build_tasks(&classes, &config.locale, &config.source_roots)?;

    match config.mode {
        Mode::Export => {
            let stats = merge::export(&tasks, &config)?;
            println!(
                "Found {} constants to translate and {} messages with {} plural variants.",
                stats.constants, stats.messages, stats.variations
            );
            println!("Written files to {}", stats.directory.display());
        }
        Mode::Import => match merge::import(&tasks, &config)? {
            ImportOutcome::MissingDirectory(directory) => {
                println!(
                    "Can't import translations, directory {} doesn't exist.",
                    directory.display()
                );
            }
            ImportOutcome::Imported { files } => {
                println!(
                    "Imported {} translation files back into source tree.",
                    files
                );
            }
        },
    }
    Ok(())
}
