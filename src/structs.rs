use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Read commands from stdin instead of running a single query.
    #[arg(long)]
    pub console: bool,
    /// Share the result after the query completes and print the code.
    #[arg(long)]
    pub share: bool,
    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Statistic name, e.g. `mine_block`.
    #[arg(long)]
    pub stat: Option<String>,
    /// Sub-statistic (block, entity or item) for typed statistics.
    #[arg(long)]
    pub sub: Option<String>,
    /// Look up a single player.
    #[arg(long, conflicts_with_all = ["server", "top"])]
    pub player: Option<String>,
    /// Sum over every known player.
    #[arg(long, conflicts_with = "top")]
    pub server: bool,
    /// Rank the top players.
    #[arg(long)]
    pub top: bool,
    /// Number of top entries, capped by `top_list_max_size`.
    #[arg(long)]
    pub limit: Option<usize>,
    /// Deliver the result to everyone.
    #[arg(long)]
    pub broadcast: bool,
    /// Identity the query runs as.
    #[arg(long, default_value = "console")]
    pub requester: String,
}

/// One line typed into `--console` mode.
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
pub struct ConsoleLine {
    #[command(subcommand)]
    pub command: ConsoleCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConsoleCommand {
    /// Submit a query; the result is printed when the worker finishes.
    Query(QueryArgs),
    /// Share the requester's last result.
    Share {
        #[arg(long, default_value = "console")]
        requester: String,
    },
    /// Show a shared result.
    Redeem {
        code: String,
        #[arg(long, default_value = "console")]
        requester: String,
    },
    /// Remove a player from server totals and top lists.
    Exclude { player: String },
    /// Undo `exclude`.
    Include { player: String },
    /// List excluded players.
    Excluded,
    /// Reload the configuration file.
    Reload,
    /// Print engine statistics.
    Stats,
    Quit,
}
