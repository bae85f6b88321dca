use clap::Args;
use comanda_app::domain::catalog::CatalogService;
use tabled::{builder::Builder, settings::Style};

use crate::cli::BackendArgs;

#[derive(Debug, Args)]
pub(crate) struct ListTablesArgs {
    #[command(flatten)]
    backend: BackendArgs,
}

pub(crate) async fn run(args: ListTablesArgs) -> Result<(), String> {
    let ctx = args.backend.context();

    let tables = ctx
        .catalog
        .list_tables()
        .await
        .map_err(|error| format!("failed to fetch tables: {error}"))?;

    let mut builder = Builder::default();
    builder.push_record(["id", "name", "capacity", "active"]);

    for table in &tables {
        builder.push_record([
            table.id.to_string(),
            table.name.clone(),
            table.capacity.to_string(),
            table.is_active.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());

    println!("{table}");

    Ok(())
}
