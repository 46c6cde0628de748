/// Encore Browser - terminal front-end for the Encore release catalog
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use encore_client::{CatalogClient, CatalogConfig, CatalogError};
use encore_core::{color_hex, format_release_date, FilterPeriod, Release};
use encore_view::{ArtistDetailState, ReleaseFilterState, ReleaseListState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "encore-browser")]
#[command(about = "Browse the Encore release catalog", long_about = None)]
struct Cli {
    /// Base URL of the static catalog
    #[arg(long, env = "ENCORE_BASE_URL")]
    base_url: String,

    /// Years probed in each direction around the reference year
    #[arg(long, env = "ENCORE_PROBE_WINDOW", default_value_t = 10)]
    probe_window: u16,

    /// Extra years probed beyond the min/max discovered years
    #[arg(long, env = "ENCORE_EXPANSION_MARGIN", default_value_t = 5)]
    expansion_margin: u16,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the years with catalog data, newest first
    Years {
        /// Reference year to probe around (defaults to the current year)
        #[arg(long)]
        around: Option<i32>,
    },
    /// Show releases, filtered by year
    Releases {
        /// Restrict to one calendar year
        #[arg(long, conflicts_with = "all")]
        year: Option<i32>,
        /// Show every discovered year instead of defaulting to the newest
        #[arg(long)]
        all: bool,
    },
    /// Show an artist's detail page
    Artist {
        /// Artist name as it appears in the catalog
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore_browser=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = CatalogConfig {
        base_url: cli.base_url,
        probe_window_years: cli.probe_window,
        expansion_margin_years: cli.expansion_margin,
    };
    let client = CatalogClient::new(config)?;

    match cli.command {
        Commands::Years { around } => {
            let reference = around.unwrap_or_else(current_year);
            let years = client.discovery().available_years(reference).await?;

            if years.is_empty() {
                println!("No years with catalog data found around {reference}.");
            } else {
                for year in years {
                    println!("{year}");
                }
            }
        }
        Commands::Releases { year, all } => {
            show_releases(&client, year, all).await?;
        }
        Commands::Artist { name } => {
            show_artist(&client, &name).await?;
        }
    }

    Ok(())
}

async fn show_releases(client: &CatalogClient, year: Option<i32>, all: bool) -> anyhow::Result<()> {
    // An explicit year needs no discovery; otherwise probe for years and
    // let the one-time default pick the newest unless --all was given.
    let (selection, years_to_fetch) = match year {
        Some(y) => (FilterPeriod::Year(y), vec![y]),
        None => {
            let mut filter_state = ReleaseFilterState::new();
            filter_state.refresh(client, current_year()).await;

            let mut selection = FilterPeriod::AllTime;
            if !all {
                if let Some(default) = filter_state.default_selection(selection) {
                    selection = default;
                }
            }

            let years = match selection {
                FilterPeriod::Year(y) => vec![y],
                FilterPeriod::AllTime => filter_state.available_years().to_vec(),
            };
            (selection, years)
        }
    };

    let mut releases = Vec::new();
    for y in years_to_fetch {
        match client.fetch_releases(y).await {
            Ok(mut batch) => releases.append(&mut batch),
            // A year can disappear between discovery and fetch; treat it
            // like an absent year.
            Err(CatalogError::NotFound { .. }) => {}
            Err(error) => return Err(error.into()),
        }
    }

    let list = ReleaseListState::new(releases);
    let visible = list.visible(selection);

    println!("Releases ({selection})");
    print_releases(&visible);
    Ok(())
}

async fn show_artist(client: &CatalogClient, name: &str) -> anyhow::Result<()> {
    let artist = client.fetch_artist(name).await?;
    let state = ArtistDetailState::new(artist);

    println!("{}", state.artist().name);
    if let Some(color) = state.artist().color {
        println!("  accent:   {}", color_hex(color));
    }
    println!("  backdrop: {}", state.backdrop().current());
    println!("  cover:    {}", state.cover().current());
    println!();

    print_releases(state.releases());
    Ok(())
}

fn print_releases(releases: &[Release]) {
    if releases.is_empty() {
        println!("No releases found");
        return;
    }

    for release in releases {
        println!(
            "{:<18} {} - {}",
            format_release_date(release.release_date),
            release.title,
            release.artist
        );
    }
}

fn current_year() -> i32 {
    Utc::now().year()
}
