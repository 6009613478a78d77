use clap::Parser;
use llm_context::command::SystemCommandRunner;
use llm_context::copy::SystemClipboard;
use llm_context::logger::initialize_logger;
use llm_context::{run, AppConfig};
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Directory to list and read files from
    #[arg(short = 'C', long, default_value = ".")]
    directory: PathBuf,
    /// Height of the fzf window
    #[arg(long, default_value = "80%")]
    height: String,
    /// Number of lines shown in the preview pane
    #[arg(long, default_value_t = 20)]
    preview_lines: usize,
    /// Sentence placed before the first file
    #[arg(long)]
    intro: Option<String>,
    /// Seconds to keep serving the clipboard on X11/Wayland when no clipboard manager is running
    #[arg(long, default_value_t = 0)]
    clipboard_linger: u64,
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();
    initialize_logger();

    let mut config = AppConfig::default();
    config.root = cli_args.directory;
    config.selector.height = cli_args.height;
    config.selector.preview_lines = cli_args.preview_lines;
    if let Some(intro) = cli_args.intro {
        config.intro = intro;
    }

    let runner = SystemCommandRunner;
    let mut clipboard =
        SystemClipboard::new().with_linger(Duration::from_secs(cli_args.clipboard_linger));
    let mut stdout = io::stdout();

    match run(&config, &runner, &mut clipboard, &mut stdout).await {
        Ok(outcome) => debug!("Finished: {:?}", outcome),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
