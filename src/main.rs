use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotify_auth_helper::{cli, config, info, warning};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the callback server (default)
    Serve(ServeOptions),

    /// Print the Spotify consent URL
    AuthorizeUrl(AuthorizeUrlOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct ServeOptions {
    /// Address to bind, e.g. 127.0.0.1:3000 (defaults to SERVER_ADDRESS or PORT)
    #[clap(long)]
    pub address: Option<String>,

    /// Open the consent page in the default browser
    #[clap(long)]
    pub open: bool,

    /// Scope to request; can be repeated
    #[clap(long = "scope", num_args = 1)]
    pub scopes: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AuthorizeUrlOptions {
    /// Scope to request; can be repeated
    #[clap(long = "scope", num_args = 1)]
    pub scopes: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    match config::load_env() {
        Ok(true) => info!("Loaded {}", config::env_file_path().display()),
        Ok(false) => {}
        Err(e) => warning!("Cannot load environment file. Err: {}", e),
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve(ServeOptions::default())) {
        Command::Serve(opt) => cli::serve(opt.address, opt.open, opt.scopes).await,
        Command::AuthorizeUrl(opt) => cli::authorize_url(opt.scopes),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
