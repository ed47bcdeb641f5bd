//! Storefront entry point.
//!
//! Runs a customer through registration, activation and checkout against
//! in-memory repositories and logs the outcome.

use app::{AppError, CartLine, Config, LogFormat};
use domain::{Address, Money};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    init_tracing(&config);
    tracing::info!(?config, "starting storefront");

    // 2. Wire services
    let storefront = app::create_default_storefront(&config);

    // 3. Register and activate a customer
    let customer = storefront
        .customers
        .register("123".into(), "Customer 1".to_string())
        .await?;
    storefront
        .customers
        .change_address(
            customer.id(),
            Address::new("Street 1", 1, "Zipcode 1", "City 1")?,
        )
        .await?;
    let customer = storefront.customers.activate(customer.id()).await?;
    tracing::info!(customer_id = %customer.id(), active = customer.is_active(), "customer ready");

    // 4. Stock the catalog
    let product = storefront
        .products
        .create("123".into(), "Product 1".to_string(), Money::from_dollars(10))
        .await?;

    // 5. Check out
    let order = storefront
        .checkout
        .checkout(customer.id(), &[CartLine::new(product.id(), 2)])
        .await?;

    let customer = storefront.customers.get(customer.id()).await?;
    tracing::info!(
        order_id = %order.id(),
        total = %order.total(),
        reward_points = customer.reward_points(),
        "checkout complete"
    );

    Ok(())
}
