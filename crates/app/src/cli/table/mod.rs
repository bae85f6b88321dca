use clap::{Args, Subcommand};

mod list;

#[derive(Debug, Args)]
pub(crate) struct TableCommand {
    #[command(subcommand)]
    command: TableSubcommand,
}

#[derive(Debug, Subcommand)]
enum TableSubcommand {
    /// List the dining tables
    List(list::ListTablesArgs),
}

pub(crate) async fn run(command: TableCommand) -> Result<(), String> {
    match command.command {
        TableSubcommand::List(args) => list::run(args).await,
    }
}
