// src/main.rs
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result as AnyhowResult;
use axum::{Router, extract::State, response::Json, routing::get};
use dotenvy::dotenv;
use ethers::providers::{Http, Provider};
use ethers::types::Address;
use oz_bindings::{ERC20, config, query, utils};
use serde::Serialize;
use tokio::net::TcpListener;

#[derive(Clone)]
struct AppState {
    token: Arc<ERC20<Provider<Http>>>,
    excluded_addresses: Vec<Address>,
    decimals: u8,
}

#[derive(Serialize)]
struct TokenInfo {
    name: String,
    symbol: String,
    decimals: u8,
    total_supply: String,
}

#[tokio::main]
async fn main() -> AnyhowResult<()> {
    dotenv().ok();

    let rpc_url = env::var("RPC_URL")?;
    let provider = Arc::new(Provider::<Http>::try_from(rpc_url)?);

    let token_address = env::var("TOKEN_ADDRESS")?.parse::<Address>()?;
    let token = Arc::new(ERC20::new(token_address, provider));

    let decimals = token.decimals().call().await?;

    let deployments = config::read_deployments()?;
    let excluded_addresses = config::read_excluded_addresses()?;
    config::validate_address_lists(&deployments, &excluded_addresses)?;

    let state = Arc::new(AppState {
        token,
        excluded_addresses,
        decimals,
    });

    let app = Router::new()
        .route("/token-info", get(token_info))
        .route("/total-supply", get(total_supply))
        .route("/circulating-supply", get(circulating_supply))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn token_info(State(state): State<Arc<AppState>>) -> Json<Option<TokenInfo>> {
    match query::token_summary(&state.token).await {
        Ok(summary) => Json(Some(TokenInfo {
            name: summary.name,
            symbol: summary.symbol,
            decimals: summary.decimals,
            total_supply: utils::u256_to_human(summary.total_supply, summary.decimals),
        })),
        Err(_) => Json(None),
    }
}

async fn total_supply(State(state): State<Arc<AppState>>) -> Json<String> {
    match query::total_supply(&state.token).await {
        Ok(value) => Json(utils::u256_to_human(value, state.decimals)),
        Err(_) => Json("Error calculating total supply".to_string()),
    }
}

async fn circulating_supply(State(state): State<Arc<AppState>>) -> Json<String> {
    match query::circulating_supply(&state.token, &state.excluded_addresses).await {
        Ok(value) => Json(utils::u256_to_human(value, state.decimals)),
        Err(_) => Json("Error calculating circulating supply".to_string()),
    }
}
