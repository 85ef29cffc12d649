use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use ctsync::{
    churchtools::songs::DEFAULT_PAGE_LIMIT,
    cli,
    config::{self, ChurchToolsConfig, SpotifyConfig},
    error,
    spotify::{CallbackServer, ProvidedCode, StdinPrompt},
};

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
    /// Authorize with Spotify and cache the token
    Auth(AuthOptions),

    /// List ChurchTools songs with their Spotify tracks
    Songs(SongsOptions),

    /// Replace a Spotify playlist with the ChurchTools songs
    Sync(SyncOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Capture the redirect with a local callback server instead of a prompt
    #[clap(long, conflicts_with = "code")]
    callback: bool,

    /// Redirect URL or authorization code obtained beforehand
    #[clap(long)]
    code: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SongsOptions {
    /// Only keep songs of this category
    #[clap(long)]
    category: Option<String>,

    /// Page size used when listing songs
    #[clap(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct SyncOptions {
    /// Name of the Spotify playlist to replace
    #[clap(long)]
    playlist: String,

    /// Only keep songs of this category
    #[clap(long)]
    category: Option<String>,

    /// Page size used when listing songs
    #[clap(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    limit: u32,

    #[clap(flatten)]
    auth: AuthOptions,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn churchtools_config() -> ChurchToolsConfig {
    match ChurchToolsConfig::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    }
}

fn spotify_config() -> SpotifyConfig {
    match SpotifyConfig::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    }
}

async fn auth(spotify: &SpotifyConfig, opt: &AuthOptions) {
    if let Some(code) = &opt.code {
        cli::auth(spotify, &ProvidedCode(code.clone())).await
    } else if opt.callback {
        cli::auth(spotify, &CallbackServer::new(spotify.server_addr.clone())).await
    } else {
        cli::auth(spotify, &StdinPrompt).await
    }
}

async fn sync(churchtools: &ChurchToolsConfig, spotify: &SpotifyConfig, opt: SyncOptions) {
    let SyncOptions {
        playlist,
        category,
        limit,
        auth,
    } = opt;

    if let Some(code) = auth.code {
        let source = ProvidedCode(code);
        cli::sync(churchtools, spotify, &source, &playlist, limit, category).await
    } else if auth.callback {
        let source = CallbackServer::new(spotify.server_addr.clone());
        cli::sync(churchtools, spotify, &source, &playlist, limit, category).await
    } else {
        cli::sync(churchtools, spotify, &StdinPrompt, &playlist, limit, category).await
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => auth(&spotify_config(), &opt).await,
        Command::Songs(opt) => cli::songs(&churchtools_config(), opt.limit, opt.category).await,
        Command::Sync(opt) => sync(&churchtools_config(), &spotify_config(), opt).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
