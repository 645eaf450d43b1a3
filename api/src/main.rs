use std::sync::Arc;

use clap::Parser;
use mealmint_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger(args: &LogArgs) -> Result<(), anyhow::Error> {
    let env_filter = EnvFilter::try_new(&args.log_filter)?;

    if args.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let app_state = state(args.clone());
    let app = router(app_state)?;

    let listener = TcpListener::bind(&addr).await?;
    info!("MealMint API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
