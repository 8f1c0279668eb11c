use anyhow::Context;
use clap::{Parser, Subcommand};
use data::config::Credentials;
use data::order::{Algorithm, Location, OrderId, Price};
use data::request::OrderCreate;
use market_core::{ENDPOINT_REST, HttpTransport, QueryClient};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const IDLE_TIMEOUT: Duration = Duration::from_secs(30);
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Parser)]
#[command(name = "nicehash", about = "Query the hashing-power marketplace API")]
struct Args {
    /// TOML credentials store
    #[arg(long, default_value = "./auth.toml")]
    auth: PathBuf,

    /// Table of the credentials store to use
    #[arg(long, default_value = "nicehash")]
    service: String,

    #[arg(long, default_value = ENDPOINT_REST)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = HTTP_REQUEST_TIMEOUT_SECS)]
    timeout: u64,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Account balance
    Balance,
    /// Public order book
    Orders {
        #[arg(long)]
        algo: Algorithm,
        #[arg(long)]
        location: Location,
    },
    /// Orders owned by this account
    MyOrders {
        #[arg(long)]
        algo: Algorithm,
        #[arg(long)]
        location: Location,
    },
    CreateOrder {
        #[arg(long)]
        algo: Algorithm,
        #[arg(long)]
        location: Location,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        price: Price,
        #[arg(long, default_value_t = Decimal::ZERO)]
        limit: Decimal,
        #[arg(long)]
        pool_host: String,
        #[arg(long)]
        pool_port: u16,
        #[arg(long)]
        pool_user: String,
        #[arg(long, default_value = "x")]
        pool_pass: String,
        /// Two-factor code
        #[arg(long)]
        code: Option<String>,
    },
    /// Raise the price of an order
    PriceUp {
        #[arg(long)]
        algo: Algorithm,
        #[arg(long)]
        location: Location,
        #[arg(long)]
        order: OrderId,
        #[arg(long)]
        price: Price,
    },
    /// Step the price of an order down
    PriceDown {
        #[arg(long)]
        algo: Algorithm,
        #[arg(long)]
        location: Location,
        #[arg(long)]
        order: OrderId,
    },
}

fn init_tracing(log_dir: Option<&PathBuf>) -> Option<WorkerGuard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "nicehash.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
                );
            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(stderr_layer).init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.log_dir.as_ref());

    let credentials = Credentials::from_toml(&args.service, &args.auth)
        .with_context(|| format!("loading credentials from {}", args.auth.display()))?;

    // build shared http client
    let http = reqwest::Client::builder()
        .tcp_nodelay(true)
        .timeout(Duration::from_secs(args.timeout))
        .pool_idle_timeout(IDLE_TIMEOUT)
        .build()?;
    let client = QueryClient::with_transport(credentials, &args.endpoint, HttpTransport::new(http))?;
    info!(endpoint = %client.endpoint(), service = %args.service, "client ready");

    let response = match args.command {
        Command::Balance => client.balance().await?,
        Command::Orders { algo, location } => client.orders(algo, location).await?,
        Command::MyOrders { algo, location } => client.my_orders(algo, location).await?,
        Command::CreateOrder {
            algo,
            location,
            amount,
            price,
            limit,
            pool_host,
            pool_port,
            pool_user,
            pool_pass,
            code,
        } => {
            let order = OrderCreate {
                location,
                algo,
                amount,
                price,
                limit,
                pool_host,
                pool_port,
                pool_user,
                pool_pass,
                code,
            };
            client.create_order(order).await?
        }
        Command::PriceUp {
            algo,
            location,
            order,
            price,
        } => client.order_price_increase(algo, location, order, price).await?,
        Command::PriceDown {
            algo,
            location,
            order,
        } => client.order_price_decrease(algo, location, order).await?,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
