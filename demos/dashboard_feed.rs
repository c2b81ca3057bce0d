//! Terminal version of the dashboard: loads every resource once, then prints
//! price updates as the 30 s poller delivers them.
//!
//! ```bash
//! DORAQUANTS_API_URL=http://localhost:4000 cargo run --example dashboard_feed -- ETHUSDT
//! ```

use doraquants_sdk::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_SYMBOL: &str = "BTCUSDT";

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let symbol = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());

    let client = DoraClient::from_env()?;
    let config = client.api_config();
    println!("API: {} (key: {:?})", config.base_url, config.api_key);

    let health = client.health().watch();
    health.activate().await;
    println!("Status: {}", ApiStatus::from_state(&health.state()));

    let portfolio = client.portfolio().watch();
    portfolio.activate().await;
    print_portfolio(&portfolio.state());

    let klines = client
        .market_data()
        .watch(&symbol, Some(KlineInterval::Hour1), Some(24));
    klines.activate().await;
    print_chart(&symbol, &klines.state());

    let trades = client.trades().watch(&symbol, Some(10));
    trades.activate().await;
    print_trades(&trades.state());

    let mut prices = client.prices().watch(Some(&[symbol.as_str()][..]));
    let mut updates = prices.subscribe();
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                print_prices(&state);
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    prices.stop();
    Ok(())
}

fn print_portfolio(state: &FetchState<Option<Portfolio>>) {
    if let Some(error) = &state.error {
        println!("Portfolio unavailable: {}", error);
    }
    let Some(portfolio) = &state.data else {
        return;
    };
    println!("Portfolio: {}", format_usd(portfolio.total_usdt));
    for p in portfolio.by_value() {
        println!(
            "  {:<6} {:>16} {:>8}",
            p.asset,
            format_usd(p.value_usdt),
            format_pct(p.pct)
        );
    }
}

fn print_chart(symbol: &str, state: &FetchState<Vec<Kline>>) {
    if let Some(error) = &state.error {
        println!("Chart unavailable: {}", error);
        return;
    }
    let series = close_series(&state.data);
    println!("{} close, last {} bars:", symbol, series.len());
    for point in series.iter().rev().take(5) {
        println!("  {}  {}", point.label(false), format_usd(point.value));
    }
}

fn print_trades(state: &FetchState<Vec<Trade>>) {
    if let Some(error) = &state.error {
        println!("Trades unavailable: {}", error);
        return;
    }
    for t in &state.data {
        println!(
            "  {} {:<4} {} @ {}",
            format_timestamp(t.time),
            t.side,
            t.qty,
            format_usd(t.price)
        );
    }
}

fn print_prices(state: &FetchState<PriceMap>) {
    if state.loading {
        return;
    }
    if let Some(error) = &state.error {
        println!("Prices stale: {}", error);
    }
    for (symbol, price) in &state.data {
        println!("{} {}", symbol, format_usd(*price));
    }
}
