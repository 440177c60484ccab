//! playlist2yt command line entry point

mod cli;
mod converter;
use log::error;

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = cli::run().await {
        error!("{e}");
        std::process::exit(1);
    }
}
