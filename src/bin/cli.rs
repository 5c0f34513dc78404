//! CRM Studio CLI
//!
//! Terminal front end for the CRM Studio dashboard:
//! - List integrations (with sidebar search)
//! - Show the dashboard for one integration
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crm_studio::config::{generate_default_config, write_default_config, Config, OutputFormat};
use crm_studio::kpi::{catalog, KpiStore};
use crm_studio::logging::init_logging;
use crm_studio::render::{render_json, render_sidebar, render_view};
use crm_studio::state::SelectionState;

#[derive(Parser)]
#[command(name = "crm-studio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "KPI dashboard for CRM integrations")]
#[command(long_about = "CRM Studio shows usage, funnel and reliability KPIs for each CRM integration.\nIntegrations without wired data show an empty state.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/crm-studio/config.toml, then ./crm-studio.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List integrations, optionally filtered by name
    List {
        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show the dashboard for an integration
    Show {
        /// Integration id (default: config, then first integration)
        id: Option<String>,
        /// Sidebar search shown alongside the dashboard
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    let format = cli.format.unwrap_or(config.output.format);
    let store = KpiStore::seeded();

    tracing::info!("CRM Studio v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::List { query } => {
            let state = SelectionState::initial(catalog())?.set_query(query);
            let visible = state.visible(catalog());

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&visible)?),
                OutputFormat::Table => print!("{}", render_sidebar(&visible, state.active_id())),
            }
        }

        Commands::Show { id, query } => {
            let id = id.or(config.dashboard.default_integration);
            let mut state = SelectionState::initial(catalog())?.set_query(query);
            if let Some(id) = id {
                state = state
                    .select_integration(catalog(), &id)
                    .with_context(|| format!("cannot show '{}'", id))?;
            }

            let integration = state
                .active(catalog())
                .context("active integration missing from catalog")?;
            let view = state.view(&store);
            tracing::info!(
                integration = integration.id,
                wired = !view.is_empty(),
                "Rendering dashboard"
            );

            match format {
                OutputFormat::Json => println!("{}", render_json(&integration, &view)?),
                OutputFormat::Table => {
                    if !state.query().is_empty() {
                        println!("{}", render_sidebar(&state.visible(catalog()), state.active_id()));
                    }
                    print!("{}", render_view(&integration, &view));
                }
            }
        }

        Commands::Config { output } => match output {
            Some(path) => {
                write_default_config(&path)?;
                println!("Wrote default config to {}", path.display());
            }
            None => print!("{}", generate_default_config()),
        },
    }

    Ok(())
}
