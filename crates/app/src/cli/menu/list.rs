use clap::Args;
use comanda_app::domain::catalog::CatalogService;
use tabled::{builder::Builder, settings::Style};

use crate::cli::BackendArgs;

#[derive(Debug, Args)]
pub(crate) struct ListMenusArgs {
    #[command(flatten)]
    backend: BackendArgs,
}

pub(crate) async fn run(args: ListMenusArgs) -> Result<(), String> {
    let ctx = args.backend.context();

    let menus = ctx
        .catalog
        .list_menus()
        .await
        .map_err(|error| format!("failed to fetch menus: {error}"))?;

    let mut builder = Builder::default();
    builder.push_record(["id", "name", "active from", "active until"]);

    for menu in &menus {
        builder.push_record([
            menu.id.to_string(),
            menu.name.clone(),
            menu.active_from.map_or_else(|| "-".to_string(), |t| t.to_string()),
            menu.active_until.map_or_else(|| "-".to_string(), |t| t.to_string()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());

    println!("{table}");

    Ok(())
}
