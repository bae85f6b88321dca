use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use comanda_app::{
    api::PosConfig,
    context::AppContext,
    notify::ConsoleNotifier,
};

mod menu;
mod order;
mod table;

#[derive(Debug, Parser)]
#[command(name = "comanda-app", about = "Comanda ordering CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Menu(menu::MenuCommand),
    Table(table::TableCommand),
    Order(order::OrderCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Menu(command) => menu::run(command).await,
            Commands::Table(command) => table::run(command).await,
            Commands::Order(command) => order::run(command).await,
        }
    }
}

/// Backend connection arguments shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct BackendArgs {
    /// POS backend base URL
    #[arg(long, env = "POS_BASE_URL")]
    base_url: String,

    /// Bearer token, if the backend requires one
    #[arg(long, env = "POS_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl BackendArgs {
    pub(crate) fn context(&self) -> AppContext {
        AppContext::from_config(
            PosConfig {
                base_url: self.base_url.clone(),
                token: self.token.clone(),
            },
            Arc::new(ConsoleNotifier),
        )
    }
}
