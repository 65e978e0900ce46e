use tarifa::config::Config;
use tarifa::engine::Engine;
use tarifa::entities::RateTable;
use tarifa::error::Error;
use tarifa::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let rates = RateTable::from_path(&config.rates_path)?;
    let engine = Engine::new(rates)?;

    serve(engine, config.bind_address).await
}
