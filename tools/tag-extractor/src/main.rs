mod config;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tag_common::Session;

use config::Config;

#[derive(Parser)]
#[command(name = "tag-extractor")]
#[command(about = "Extract word-frequency tags from a text file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the words of a text file, excluding stop words, and print the table
    Extract {
        /// Text file to process
        #[arg(long, short)]
        text: PathBuf,
        /// Whitespace-separated stop words file (default: from config)
        #[arg(long, short)]
        stop_words: Option<PathBuf>,
        /// Save the tags to this file, overwriting it (default: config output_dir)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Config file (default: ~/.config/tag-extractor/config.toml)
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
    /// Write a starter config file
    Init {
        /// Output file (default: ~/.config/tag-extractor/config.toml)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn extract(
    text: PathBuf,
    stop_words: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = Config::load(config.as_deref())?.resolve(stop_words, output, &text)?;
    let (stop_words, output) = (resolved.stop_words, resolved.output);

    let mut session = Session::new();
    println!("Selected Text File: {}", file_name(&text));
    session.select_text_file(text);
    println!("Selected Stop Words File: {}", file_name(&stop_words));
    session.select_stop_words_file(stop_words);

    session.process()?;
    print!("{}", session.display());

    if let Some(path) = output {
        session.save(&path)?;
        println!("Tags saved to {}", file_name(&path));
    }
    Ok(())
}

fn init(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = output
        .or_else(config::default_config_path)
        .ok_or("Could not find config directory")?;

    config::write_starter(&path)?;
    println!("Config written to: {}", path.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tag_common=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Extract {
            text,
            stop_words,
            output,
            config,
        } => extract(text, stop_words, output, config),
        Commands::Init { output } => init(output),
    };

    // Display, not Debug.
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
