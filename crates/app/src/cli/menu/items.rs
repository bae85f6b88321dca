use clap::Args;
use comanda_app::{api::models::MenuId, domain::catalog::CatalogService};
use tabled::{builder::Builder, settings::Style};

use crate::cli::BackendArgs;

#[derive(Debug, Args)]
pub(crate) struct MenuItemsArgs {
    #[command(flatten)]
    backend: BackendArgs,

    /// Menu to list items for
    #[arg(long)]
    menu: MenuId,
}

pub(crate) async fn run(args: MenuItemsArgs) -> Result<(), String> {
    let ctx = args.backend.context();

    let items = ctx
        .catalog
        .menu_items(args.menu)
        .await
        .map_err(|error| format!("failed to fetch menu items: {error}"))?;

    let mut builder = Builder::default();
    builder.push_record(["id", "name", "category", "unit price"]);

    for item in &items {
        builder.push_record([
            item.id.to_string(),
            item.name.clone(),
            item.category_name.clone().unwrap_or_else(|| "-".to_string()),
            item.unit_price.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());

    println!("{table}");

    Ok(())
}
