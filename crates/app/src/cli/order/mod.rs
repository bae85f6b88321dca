use clap::{Args, Subcommand};

mod submit;

#[derive(Debug, Args)]
pub(crate) struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    /// Assemble a draft from menu items and submit it as a new order
    Submit(submit::SubmitOrderArgs),
}

pub(crate) async fn run(command: OrderCommand) -> Result<(), String> {
    match command.command {
        OrderSubcommand::Submit(args) => submit::run(args).await,
    }
}
