use clap::Args;
use catalog_app::{
    database,
    products::{CatalogProductsService, ProductsService, models::NewProduct},
};

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product title; must be unique ignoring case
    #[arg(long)]
    title: String,

    /// Product description
    #[arg(long)]
    description: String,

    /// Product rating
    #[arg(long, default_value_t = 0.0)]
    rating: f64,

    /// Product image URL or path
    #[arg(long, default_value = "")]
    image: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    if args.title.trim().is_empty() {
        return Err("title cannot be empty".to_string());
    }

    if args.description.trim().is_empty() {
        return Err("description cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let product = CatalogProductsService::new(pool)
        .create_product(NewProduct {
            title: args.title,
            description: args.description,
            rating: args.rating,
            image: args.image,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_title: {}", product.title);

    Ok(())
}
