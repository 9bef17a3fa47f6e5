use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use navindex::fs::RealFileSystem;
use navindex::{IndexBuilder, NavConfig};

/// Generate `navigation.json` from the `posts` content tree.
#[derive(Parser, Debug)]
#[command(name = "navindex", version, about)]
struct Cli {
    /// Directory holding the content root and the generated index.
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Content root to scan, overriding `<base-dir>/posts`.
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Output file, overriding `<base-dir>/navigation.json`.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Leading segment of every entry path. Pass an empty string for bare
    /// relative paths.
    #[arg(long)]
    path_prefix: Option<String>,
}

impl Cli {
    fn into_config(self) -> NavConfig {
        let mut config = NavConfig::for_base_dir(&self.base_dir);
        if let Some(content_dir) = self.content_dir {
            config.content_root = content_dir;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(path_prefix) = self.path_prefix {
            config.path_prefix = path_prefix;
        }

        config
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let config = Cli::parse().into_config();

    match IndexBuilder::new(&config, &RealFileSystem).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
