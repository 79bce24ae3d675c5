use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use storify::{cli, config, error, story::DEFAULT_TRACK_LIMIT};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Forget the stored session token
    Logout,

    /// List playlists of the current user
    Playlists,

    /// List tracks of a playlist
    Tracks(TracksOptions),

    #[clap(about = "Render a story card for a playlist")]
    Story(StoryOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Playlist id or name
    #[clap(long)]
    pub playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct StoryOptions {
    /// Playlist id or name
    #[clap(long)]
    pub playlist: String,

    /// Output file path (defaults to story-<date>.<ext>)
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Number of tracks on the card
    #[clap(long, default_value_t = DEFAULT_TRACK_LIMIT)]
    pub limit: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let auth_result: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&auth_result)).await;
        }
        Command::Logout => cli::logout().await,
        Command::Playlists => cli::playlists().await,
        Command::Tracks(opt) => cli::tracks(opt.playlist).await,
        Command::Story(opt) => cli::story(opt.playlist, opt.output, opt.limit).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
