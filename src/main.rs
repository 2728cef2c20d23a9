use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use playerstats::common::common::setup_logging;
use playerstats::common::structs::clock::Clock;
use playerstats::config::structs::configuration::Configuration;
use playerstats::output::structs::console_output::ConsoleOutput;
use playerstats::player::structs::memory_directory::MemoryDirectory;
use playerstats::query::enums::query_state::QueryState;
use playerstats::query::structs::query_dispatcher::QueryDispatcher;
use playerstats::query::structs::raw_query::RawQuery;
use playerstats::statistic::structs::static_vocabulary::StaticVocabulary;
use playerstats::stats::enums::stats_event::StatsEvent;
use playerstats::structs::{Cli, ConsoleCommand, ConsoleLine, QueryArgs};

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let vocabulary = match StaticVocabulary::load_file(&config.data.vocabulary) {
        Ok(vocabulary) => Arc::new(vocabulary),
        Err(e) => {
            error!("[BOOT] {e}");
            exit(102);
        }
    };
    let directory = match MemoryDirectory::load_file(&config.data.directory) {
        Ok(directory) => Arc::new(directory),
        Err(e) => {
            error!("[BOOT] {e}");
            exit(102);
        }
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let dispatcher = Arc::new(QueryDispatcher::new(
                config.clone(),
                vocabulary,
                directory,
                Arc::new(ConsoleOutput::new()),
                Arc::new(|_: &str, _: &str| true),
                Arc::new(Clock::default()),
            ).await);

            let tokio_shutdown = Shutdown::new().map_err(|e| std::io::Error::other(format!("{e:?}")))?;

            let cleanup_handler = tokio_shutdown.clone();
            let dispatcher_cleanup = dispatcher.clone();
            let cleanup_interval = config.share.cleanup_interval;
            if cleanup_interval > 0 {
                info!("[BOOT] Starting thread for share cleanup with {cleanup_interval} seconds delay...");
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(cleanup_interval));
                    interval.tick().await;
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                dispatcher_cleanup.clean_shares();
                            }
                            _ = cleanup_handler.handle() => {
                                info!("[BOOT] Shutting down thread for share cleanup...");
                                return;
                            }
                        }
                    }
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let dispatcher_stats = dispatcher.clone();
            let console_interval = config.log_console_interval;
            if console_interval > 0 {
                info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                    interval.tick().await;
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                let stats = dispatcher_stats.update_stats(StatsEvent::TimestampConsole, chrono::Utc::now().timestamp());
                                info!(
                                    "[STATS] Queries: {} submitted, {} completed, {} failed ({} timed out), {} in flight - Rejected: {} reload, {} running, {} invalid",
                                    stats.queries_submitted, stats.queries_completed, stats.queries_failed, stats.queries_timed_out,
                                    stats.queries_in_flight, stats.rejected_reload, stats.rejected_running, stats.rejected_invalid
                                );
                                info!(
                                    "[STATS] Shares: {} created, {} rejected, {} redeemed, {} expired, {} stored - Reloads: {}",
                                    stats.shares_created, stats.shares_rejected, stats.shares_redeemed, stats.shares_expired,
                                    dispatcher_stats.share_cache.len(), stats.reloads
                                );
                            }
                            _ = stats_handler.handle() => {
                                info!("[BOOT] Shutting down thread for console updates...");
                                return;
                            }
                        }
                    }
                });
            }

            if args.console {
                run_console(dispatcher.clone(), &args.config, tokio_shutdown.clone()).await;
            } else {
                match raw_query(&args.query) {
                    None => {
                        error!("[BOOT] Nothing to do, pass --stat with --player, --server or --top, or start with --console");
                        exit(1);
                    }
                    Some(raw) => {
                        if !run_once(&dispatcher, &raw, args.share).await {
                            exit(1);
                        }
                    }
                }
            }

            info!("Server shutting down completed");
            Ok(())
        })
}

fn raw_query(args: &QueryArgs) -> Option<RawQuery>
{
    let stat = args.stat.as_deref()?;
    let mut raw = if let Some(player) = &args.player {
        RawQuery::player(&args.requester, stat, player)
    } else if args.server {
        RawQuery::server(&args.requester, stat)
    } else if args.top {
        RawQuery::top(&args.requester, stat)
    } else {
        return None;
    };
    if let Some(sub) = &args.sub {
        raw = raw.with_qualifier(sub);
    }
    if let Some(limit) = args.limit {
        raw = raw.with_limit(limit);
    }
    if args.broadcast {
        raw = raw.broadcast();
    }
    Some(raw)
}

async fn run_once(dispatcher: &QueryDispatcher, raw: &RawQuery, share: bool) -> bool
{
    let ticket = match dispatcher.query(raw) {
        Ok(ticket) => ticket,
        Err(e) => {
            error!("[QUERY] {e}");
            return false;
        }
    };
    if ticket.wait().await != QueryState::Completed {
        return false;
    }
    if share {
        match dispatcher.share_last_result(&raw.requester) {
            Ok(code) => println!("Share code: {code}"),
            Err(e) => warn!("[SHARE] {e}"),
        }
    }
    true
}

async fn run_console(dispatcher: Arc<QueryDispatcher>, config_path: &str, shutdown: Shutdown)
{
    info!("[CONSOLE] Reading commands from stdin, type 'help' for a list");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if !handle_console_line(&dispatcher, config_path, &line) {
                            return;
                        }
                    }
                    Ok(None) => return,
                    Err(e) => {
                        error!("[CONSOLE] Unable to read stdin: {e}");
                        return;
                    }
                }
            }
            _ = shutdown.handle() => {
                info!("[BOOT] Shutting down console...");
                return;
            }
        }
    }
}

/// Returns false when the console should stop.
fn handle_console_line(dispatcher: &QueryDispatcher, config_path: &str, line: &str) -> bool
{
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return true;
    }
    let command = match ConsoleLine::try_parse_from(words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            println!("{e}");
            return true;
        }
    };

    match command {
        ConsoleCommand::Query(query) => match raw_query(&query) {
            None => println!("Pass --stat with one of --player, --server or --top"),
            Some(raw) => match dispatcher.query(&raw) {
                Ok(ticket) => info!("[CONSOLE] Request #{} accepted", ticket.request_id()),
                Err(e) => println!("{e}"),
            },
        },
        ConsoleCommand::Share { requester } => match dispatcher.share_last_result(&requester) {
            Ok(code) => println!("Share code: {code}"),
            Err(e) => println!("{e}"),
        },
        ConsoleCommand::Redeem { code, requester } => {
            if let Err(e) = dispatcher.redeem_code(&code, &requester) {
                println!("{e}");
            }
        }
        ConsoleCommand::Exclude { player } => {
            if dispatcher.exclude_player(&player) {
                println!("{player} is now excluded");
            } else {
                println!("{player} was already excluded");
            }
        }
        ConsoleCommand::Include { player } => {
            if dispatcher.include_player(&player) {
                println!("{player} is included again");
            } else {
                println!("{player} was not excluded");
            }
        }
        ConsoleCommand::Excluded => println!("Excluded: {}", dispatcher.excluded_players().join(", ")),
        ConsoleCommand::Reload => match dispatcher.reload_config(config_path) {
            Ok(()) => println!("Configuration reloaded"),
            Err(e) => println!("{e}"),
        },
        ConsoleCommand::Stats => match serde_json::to_string_pretty(&dispatcher.get_stats()) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("[CONSOLE] {e}"),
        },
        ConsoleCommand::Quit => return false,
    }
    true
}
