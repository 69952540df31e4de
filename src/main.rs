use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use mooddrop::{
    access::Feature,
    cli, config, error,
    spotify::{LinkResolver, ResourceType},
    utils::{self, Moods},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightMagenta.on_default())
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
    /// Shortest resource id accepted as valid (overrides MOODDROP_MIN_ID_LENGTH)
    #[clap(long, global = true)]
    min_id_length: Option<usize>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate a Spotify link
    Resolve(LinkOptions),

    /// Print the embedded player for a Spotify link
    Embed(LinkOptions),

    /// Open the embedded player in the browser
    Open(LinkOptions),

    /// Handle drops
    Drops(DropsOptions),

    /// Check whether the current session may use a feature
    Access(AccessOptions),

    /// Run the HTTP API
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct LinkOptions {
    /// Link as pasted, e.g. https://open.spotify.com/track/...
    pub url: String,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle drops",
    args_conflicts_with_subcommands = true // disallow mixing --mood filter with subcommands
)]
pub struct DropsOptions {
    /// Only show drops tagged with this mood
    #[clap(long)]
    pub mood: Option<String>,

    #[command(subcommand)]
    pub command: Option<DropsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum DropsSubcommand {
    /// Drop a link with one or more moods
    Add(DropsAddOpts),

    /// Refresh the local cache from the backend
    Sync(DropsSyncOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct DropsAddOpts {
    /// Spotify link to drop
    #[clap(long)]
    pub url: String,

    /// Comma-separated moods, e.g. "chill, late night"
    #[clap(long = "mood", value_parser = utils::parse_moods)]
    pub moods: Moods,

    /// Drop type (track, album, playlist); inferred from the link when omitted
    #[clap(long = "type")]
    pub drop_type: Option<ResourceType>,
}

#[derive(Parser, Debug, Clone)]
pub struct DropsSyncOpts {
    /// Number of most recent drops to fetch
    #[clap(long, default_value_t = 100)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct AccessOptions {
    /// Feature to check, e.g. ai-playlist or admin-panel
    #[clap(long)]
    pub feature: Feature,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Bind address (overrides SERVER_ADDRESS)
    #[clap(long)]
    pub addr: Option<String>,
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
    let resolver = LinkResolver::new(
        cli.min_id_length
            .filter(|len| *len > 0)
            .unwrap_or_else(config::min_id_length),
    );

    match cli.command {
        Command::Resolve(opt) => cli::resolve(&resolver, &opt.url),
        Command::Embed(opt) => cli::embed(&resolver, &opt.url),
        Command::Open(opt) => cli::open(&resolver, &opt.url),

        Command::Drops(opt) => match opt.command {
            Some(DropsSubcommand::Add(a)) => {
                cli::add_drop(&resolver, &a.url, &a.moods, a.drop_type).await
            }
            Some(DropsSubcommand::Sync(s)) => cli::sync_drops(s.limit).await,
            None => cli::list_drops(opt.mood).await,
        },

        Command::Access(opt) => cli::access(opt.feature).await,
        Command::Serve(opt) => cli::serve(resolver, opt.addr).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
