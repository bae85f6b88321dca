use std::str::FromStr;

use clap::Args;
use comanda::{cart::Cart, catalog::MenuItemId};
use comanda_app::{
    api::models::{MenuId, ReservationId, TableId},
    domain::{
        catalog::CatalogService,
        ordering::{OrderAssociation, OrderingService},
    },
};
use tabled::{builder::Builder, settings::Style};

use crate::cli::BackendArgs;

#[derive(Debug, Args)]
pub(crate) struct SubmitOrderArgs {
    #[command(flatten)]
    backend: BackendArgs,

    /// Menu the items are ordered from
    #[arg(long)]
    menu: MenuId,

    /// Order line as `<menuItemId>` or `<menuItemId>:<quantity>`; repeat for more lines
    #[arg(long = "item", value_name = "ID[:QTY]", required = true)]
    items: Vec<ItemSpec>,

    /// Table the order is taken at
    #[arg(long)]
    table: Option<TableId>,

    /// Reservation the order belongs to
    #[arg(long)]
    reservation: Option<ReservationId>,

    /// Free-text note for the kitchen
    #[arg(long)]
    note: Option<String>,
}

/// A `--item` flag value: menu item id with an optional quantity.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ItemSpec {
    menu_item_id: MenuItemId,
    quantity: u32,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once(':') {
            Some((id, quantity)) => {
                let quantity = quantity
                    .parse::<u32>()
                    .map_err(|error| format!("invalid quantity in {s:?}: {error}"))?;

                (id, quantity)
            }
            None => (s, 1),
        };

        if quantity == 0 {
            return Err(format!("quantity must be at least 1 in {s:?}"));
        }

        let menu_item_id = id
            .parse::<MenuItemId>()
            .map_err(|error| format!("invalid menu item id in {s:?}: {error}"))?;

        Ok(Self {
            menu_item_id,
            quantity,
        })
    }
}

pub(crate) async fn run(args: SubmitOrderArgs) -> Result<(), String> {
    let ctx = args.backend.context();

    let items = ctx
        .catalog
        .menu_items(args.menu)
        .await
        .map_err(|error| format!("failed to fetch menu items: {error}"))?;

    let mut cart = Cart::new();

    for spec in &args.items {
        let item = items
            .iter()
            .find(|item| item.id == spec.menu_item_id)
            .ok_or_else(|| {
                format!("menu item {} is not on menu {}", spec.menu_item_id, args.menu)
            })?;

        for _ in 0..spec.quantity {
            cart.add_item(item);
        }
    }

    print_draft(&cart);

    let association = OrderAssociation {
        table: args.table,
        reservation: args.reservation,
        note: args.note,
    };

    let order = ctx
        .ordering
        .submit(&mut cart, association)
        .await
        .map_err(|error| format!("failed to submit order: {error}"))?;

    println!("order_id: {}", order.id);
    println!("total: {}", order.total);

    Ok(())
}

fn print_draft(cart: &Cart) {
    let mut builder = Builder::default();
    builder.push_record(["item", "qty", "unit price", "line total"]);

    for line in cart.lines() {
        builder.push_record([
            line.name().to_string(),
            line.quantity().to_string(),
            line.unit_price().to_string(),
            line.line_total().to_string(),
        ]);
    }

    builder.push_record([
        "total".to_string(),
        String::new(),
        String::new(),
        cart.total().to_string(),
    ]);

    let mut table = builder.build();
    table.with(Style::sharp());

    println!("{table}");
}
