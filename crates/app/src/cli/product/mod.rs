use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Create a product, enforcing title uniqueness
    Create(create::CreateProductArgs),
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Create(args) => create::run(args).await,
    }
}
