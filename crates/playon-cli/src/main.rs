mod cli;
mod console;

use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use futures::future::join_all;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

use playon_api::KodiClient;
use playon_core::classify::classify_url;
use playon_core::config::AppConfig;
use playon_core::dispatch::Dispatcher;
use playon_core::menu::{ClickData, ServerMenu};
use playon_core::models::{PlayableItem, ServerRecord};
use playon_core::notify::Filtered;
use playon_core::request::file_url;

use cli::{Cli, Commands, ServerAction};
use console::ConsoleNotifier;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("playon=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    match cli.command {
        Commands::Play { server, urls } => play(&config, server.as_deref(), &urls).await,
        Commands::Classify { urls } => {
            for raw in &urls {
                println!("{raw}: {}", describe(raw));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Servers { action } => {
            match action {
                ServerAction::List => list_servers(&config),
                ServerAction::Add {
                    label,
                    host,
                    port,
                    username,
                    password,
                } => {
                    if config.servers.iter().any(|s| s.label == label) {
                        bail!("a server labelled {label:?} already exists");
                    }
                    let mut record = ServerRecord::new(label, host, port);
                    record.username = username;
                    record.password = password;
                    println!("Added {} ({})", record.label, record.endpoint());
                    config.servers.push(record);
                    config.save_to(&config_path)?;
                }
                ServerAction::Remove { server } => {
                    let Some(removed) = config.remove_server(&server) else {
                        bail!("no server matches {server:?}");
                    };
                    println!("Removed {}", removed.label);
                    config.save_to(&config_path)?;
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Dispatch every URL concurrently as a link click on the chosen server's menu entry.
async fn play(config: &AppConfig, server: Option<&str>, urls: &[String]) -> anyhow::Result<ExitCode> {
    let menu = ServerMenu::rebuild(&config.servers);
    if menu.is_empty() {
        bail!("no servers configured; add one with `playon servers add <label> <host>`");
    }

    let menu_item_id = match server {
        Some(key) => {
            let wanted = config
                .find_server(key)
                .with_context(|| format!("no server matches {key:?}"))?;
            menu.entries()
                .find(|(_, s)| *s == wanted)
                .map(|(id, _)| id.to_string())
                .with_context(|| format!("no menu entry for {key:?}"))?
        }
        None => menu
            .entries()
            .next()
            .map(|(id, _)| id.to_string())
            .context("empty menu")?,
    };

    let client = KodiClient::new()?;
    let notifier = Filtered::new(ConsoleNotifier, config.general.show_notifications);
    let dispatcher = Dispatcher::new(client, notifier);

    let clicks: Vec<ClickData> = urls
        .iter()
        .map(|url| ClickData {
            menu_item_id: menu_item_id.clone(),
            media_type: None,
            link_url: Some(url.clone()),
            src_url: None,
        })
        .collect();
    debug!(count = clicks.len(), menu_item_id = %menu_item_id, "Dispatching clicks");

    let reports = join_all(clicks.iter().map(|click| dispatcher.handle_click(click, &menu))).await;

    let mut failed = 0;
    for (url, report) in urls.iter().zip(reports) {
        match report {
            Ok(report) if report.is_success() => {}
            Ok(_) => failed += 1,
            Err(e) => {
                eprintln!("{url}: {e}");
                failed += 1;
            }
        }
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn describe(raw: &str) -> String {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => return format!("invalid url ({e})"),
    };
    match classify_url(&url) {
        Ok(item @ PlayableItem::Youtube { .. }) => format!("youtube -> {}", file_url(&item)),
        Ok(item @ PlayableItem::Direct { .. }) => format!("direct -> {}", file_url(&item)),
        Err(_) => "not supported".to_string(),
    }
}

fn list_servers(config: &AppConfig) {
    if config.servers.is_empty() {
        println!("No servers configured.");
        return;
    }
    for (i, server) in config.servers.iter().enumerate() {
        let auth = match server.username.as_deref() {
            Some(user) if !user.is_empty() => format!(" (as {user})"),
            _ => String::new(),
        };
        println!("{i}: {} {}{auth}", server.label, server.endpoint());
    }
}
