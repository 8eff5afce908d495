//! Interactive terminal for the futures testnet client.
//!
//! Presentation only: prompts, input validation, and result rendering.
//! All trading goes through `binance_futures::BinanceFuturesClient`.

use anyhow::Result;
use auth::ApiCredentials;
use binance_futures::{
    validate_price, validate_quantity, validate_symbol, BinanceFuturesClient, OrderSide,
};
use common::BinanceEnvironment;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};
use rust_decimal::Decimal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    common::init_logging();

    let environment = BinanceEnvironment::from_env();
    println!(
        "{} ({})",
        style("Binance Futures Order Terminal").bold().cyan(),
        environment
    );

    let theme = ColorfulTheme::default();
    let credentials = load_credentials(&theme)?;
    let client = BinanceFuturesClient::with_environment(credentials, environment)?;

    info!(base_url = client.base_url(), "client ready");

    loop {
        let actions = ["Market order", "Limit order", "Exit"];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => market_order_flow(&client, &theme).await?,
            1 => limit_order_flow(&client, &theme).await?,
            _ => {
                info!("exiting");
                break;
            }
        }
    }

    Ok(())
}

/// Credentials from the environment when set, otherwise prompted.
fn load_credentials(theme: &ColorfulTheme) -> Result<ApiCredentials> {
    if let Ok(credentials) = ApiCredentials::from_env() {
        return Ok(credentials);
    }

    let api_key: String = Input::with_theme(theme)
        .with_prompt("API key")
        .interact_text()?;
    let api_secret = Password::with_theme(theme)
        .with_prompt("API secret")
        .interact()?;

    Ok(ApiCredentials::new(api_key.trim().to_string(), api_secret))
}

async fn market_order_flow(client: &BinanceFuturesClient, theme: &ColorfulTheme) -> Result<()> {
    let Some(symbol) = prompt_symbol(theme)? else {
        return Ok(());
    };
    let side = prompt_side(theme)?;
    let Some(quantity) = prompt_decimal(theme, "Quantity", validate_quantity)? else {
        return Ok(());
    };

    render_result(client.place_market_order(&symbol, side, quantity).await);
    Ok(())
}

async fn limit_order_flow(client: &BinanceFuturesClient, theme: &ColorfulTheme) -> Result<()> {
    let Some(symbol) = prompt_symbol(theme)? else {
        return Ok(());
    };
    let side = prompt_side(theme)?;
    let Some(quantity) = prompt_decimal(theme, "Quantity", validate_quantity)? else {
        return Ok(());
    };
    let Some(price) = prompt_decimal(theme, "Limit price", validate_price)? else {
        return Ok(());
    };

    render_result(
        client
            .place_limit_order(&symbol, side, quantity, price)
            .await,
    );
    Ok(())
}

/// Prompt for a symbol, uppercase it, validate. `None` returns the user
/// to the menu.
fn prompt_symbol(theme: &ColorfulTheme) -> Result<Option<String>> {
    let input: String = Input::with_theme(theme)
        .with_prompt("Symbol (e.g. BTCUSDT)")
        .interact_text()?;
    let symbol = input.trim().to_uppercase();

    match validate_symbol(&symbol) {
        Ok(()) => Ok(Some(symbol)),
        Err(reason) => {
            error!(%reason, "invalid symbol");
            Ok(None)
        }
    }
}

fn prompt_side(theme: &ColorfulTheme) -> Result<OrderSide> {
    let selection = Select::with_theme(theme)
        .with_prompt("Side")
        .items(&["BUY", "SELL"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        OrderSide::Buy
    } else {
        OrderSide::Sell
    })
}

fn prompt_decimal(
    theme: &ColorfulTheme,
    prompt: &str,
    validate: fn(&str) -> Result<Decimal, binance_futures::ValidationError>,
) -> Result<Option<Decimal>> {
    let input: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()?;

    match validate(&input) {
        Ok(value) => Ok(Some(value)),
        Err(reason) => {
            error!(%reason, "invalid input");
            Ok(None)
        }
    }
}

/// Print whatever came back: the raw exchange payload on success
/// (including exchange-level error payloads), the typed failure
/// otherwise.
fn render_result(result: Result<serde_json::Value, binance_futures::FuturesApiError>) {
    match result {
        Ok(payload) => {
            info!("order response received");
            match serde_json::to_string_pretty(&payload) {
                Ok(pretty) => println!("{pretty}"),
                Err(_) => println!("{payload}"),
            }
        }
        Err(err) => {
            error!(error = %err, "order failed");
        }
    }
}
