// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clipfind::view::{group_by_video, HitView};
use clipfind::{dataset, EngineConfig, SearchClient, SearchEngine, SearchMode};

mod cli;
use cli::display::{self, themed, BOLD, CYAN, DIM, GRAY};
use cli::{Cli, Commands, SearchArgs};

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn,clipfind=info",
            1 => "info,clipfind=debug",
            _ => "debug,clipfind=trace",
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            EngineConfig::from_json(&raw)
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => Ok(EngineConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search(args) => {
            if let Some(limit) = args.limit {
                config.playlist_limit = limit;
            }
            if args.render_up {
                config.render_down = false;
            }
            run_search(args, config).await
        }
        Commands::Stats { file } => run_stats(&file, config),
    }
}

async fn run_search(args: SearchArgs, config: EngineConfig) -> Result<()> {
    let transcripts = dataset::load_transcripts(&args.file)?;
    let render_down = config.render_down;
    let client = SearchClient::new(config);

    let (hits, selected) = if args.playlist {
        client
            .init_playlist(Some(transcripts.clone()))
            .await
            .context("Failed to build playlist index")?;
        (client.search_playlist(&args.query).await?, None)
    } else {
        let selected = dataset::select_transcript(&transcripts, args.video.as_deref())?;
        client
            .init_single(Some(selected.content.clone()))
            .await
            .context("Failed to build transcript index")?;
        (client.search_single(&args.query).await?, Some(selected))
    };

    let views = HitView::from_hits(&hits, selected, render_down);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    print_results(&args.query, &views, args.playlist, render_down);
    Ok(())
}

fn print_results(query: &str, views: &[HitView], playlist: bool, render_down: bool) {
    if views.is_empty() {
        println!("No results for {}", themed(CYAN, &[BOLD], query));
        return;
    }

    let groups = if playlist {
        group_by_video(views)
    } else {
        vec![("", views.iter().collect())]
    };

    for (_, members) in groups {
        let label = members
            .first()
            .map_or("", |v| v.source_video_title.as_str());
        display::section_top(if label.is_empty() { "Results" } else { label });
        for view in members {
            display::row(&format!(
                " {} {} {}",
                display::tier_badge(view.tier, render_down),
                display::timestamp(&view.timestamp),
                display::highlight(&view.text, &view.match_indices),
            ));
            display::row(&format!(
                "        {} {}",
                display::score_value(view.score),
                themed(GRAY, &[DIM], &view.url),
            ));
        }
        display::section_bot();
    }

    println!(
        "{} result{} for {}",
        views.len(),
        if views.len() == 1 { "" } else { "s" },
        themed(CYAN, &[BOLD], query)
    );
}

fn run_stats(file: &Path, config: EngineConfig) -> Result<()> {
    let transcripts = dataset::load_transcripts(file)?;

    display::section_top("Transcripts");
    for t in &transcripts {
        display::row(&format!(
            " {:<24} {:>6} segments  {}",
            t.id,
            t.content.len(),
            themed(GRAY, &[DIM], &t.title)
        ));
    }
    display::section_bot();

    let engine = SearchEngine::new(config);
    engine.build_playlist_index(Some(&transcripts));
    if let Some(first) = transcripts.first() {
        engine.build_single_index(Some(&first.content));
    }

    let segments: usize = transcripts.iter().map(|t| t.content.len()).sum();
    let single = engine.index_len(SearchMode::Single);
    let playlist = engine.index_len(SearchMode::Playlist);

    display::section_top("Indexes");
    display::row(&format!(" videos:         {}", transcripts.len()));
    display::row(&format!(" segments:       {}", segments));
    display::row(&format!(" single index:   {}", single));
    display::row(&format!(" playlist index: {}", playlist));
    display::section_bot();

    Ok(())
}
