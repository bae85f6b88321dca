use clap::{Args, Subcommand};

mod items;
mod list;

#[derive(Debug, Args)]
pub(crate) struct MenuCommand {
    #[command(subcommand)]
    command: MenuSubcommand,
}

#[derive(Debug, Subcommand)]
enum MenuSubcommand {
    /// List the backend's menus
    List(list::ListMenusArgs),

    /// List the items of one menu
    Items(items::MenuItemsArgs),
}

pub(crate) async fn run(command: MenuCommand) -> Result<(), String> {
    match command.command {
        MenuSubcommand::List(args) => list::run(args).await,
        MenuSubcommand::Items(args) => items::run(args).await,
    }
}
