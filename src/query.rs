// src/query.rs
//! Batched read helpers over the generated bindings. Every helper packs its
//! reads into a single Multicall3 aggregate so a summary costs one RPC round
//! trip regardless of how many holders or fields it covers.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use ethers::contract::Multicall;
use ethers::providers::Middleware;
use ethers::types::{Address, U256};

use crate::token::erc20::ERC20;

/// Multicall3, deployed at the same address on every mainstream chain.
const MULTICALL3_ADDRESS: &str = "0xcA11bde05977b3631167028862bE2a173976CA11";

#[derive(Debug, Clone)]
pub struct TokenSummary {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
}

#[derive(Debug, Clone)]
struct SupplySnapshot {
    total_supply: U256,
    burned: U256,
    excluded_balances: Vec<U256>,
}

pub(crate) async fn new_multicall<M: Middleware + 'static>(client: Arc<M>) -> Result<Multicall<M>> {
    let address: Address = MULTICALL3_ADDRESS
        .parse()
        .context("invalid multicall address")?;
    let multicall = Multicall::new(client, Some(address))
        .await
        .context("failed to set up multicall")?;
    Ok(multicall)
}

/// Metadata and supply of an ERC20 in one round trip.
pub async fn token_summary<M: Middleware + 'static>(token: &ERC20<M>) -> Result<TokenSummary> {
    let mut multicall = new_multicall(token.client()).await?;
    multicall
        .add_call(token.name(), false)
        .add_call(token.symbol(), false)
        .add_call(token.decimals(), false)
        .add_call(token.total_supply(), false);
    let (name, symbol, decimals, total_supply): (String, String, u8, U256) =
        multicall.call().await?;
    Ok(TokenSummary {
        name,
        symbol,
        decimals,
        total_supply,
    })
}

/// Balances for a list of holders, in input order.
pub async fn balances_of<M: Middleware + 'static>(
    token: &ERC20<M>,
    holders: &[Address],
) -> Result<Vec<U256>> {
    if holders.is_empty() {
        return Ok(Vec::new());
    }
    let mut multicall = new_multicall(token.client()).await?;
    for holder in holders {
        multicall.add_call(token.balance_of(*holder), false);
    }
    let balances: Vec<U256> = multicall.call_array().await?;
    Ok(balances)
}

/// Total supply net of tokens parked at the zero address.
pub async fn total_supply<M: Middleware + 'static>(token: &ERC20<M>) -> Result<U256> {
    let snapshot = fetch_supply_snapshot(token, &[]).await?;
    Ok(sub_or_zero(snapshot.total_supply, snapshot.burned))
}

/// Total supply minus burned tokens and the balances of the excluded
/// addresses (treasuries, locked allocations).
pub async fn circulating_supply<M: Middleware + 'static>(
    token: &ERC20<M>,
    excluded: &[Address],
) -> Result<U256> {
    let excluded = normalize_excluded(excluded);
    let snapshot = fetch_supply_snapshot(token, &excluded).await?;
    let excluded_total = snapshot
        .excluded_balances
        .iter()
        .fold(U256::zero(), |acc, b| acc.saturating_add(*b));
    let value = sub_or_zero(snapshot.total_supply, snapshot.burned);
    Ok(sub_or_zero(value, excluded_total))
}

async fn fetch_supply_snapshot<M: Middleware + 'static>(
    token: &ERC20<M>,
    excluded: &[Address],
) -> Result<SupplySnapshot> {
    let mut multicall = new_multicall(token.client()).await?;
    multicall
        .add_call(token.total_supply(), false)
        .add_call(token.balance_of(Address::zero()), false);
    for address in excluded {
        multicall.add_call(token.balance_of(*address), false);
    }
    let results: Vec<U256> = multicall.call_array().await?;
    parse_supply_results(results, excluded.len())
}

fn parse_supply_results(results: Vec<U256>, excluded_len: usize) -> Result<SupplySnapshot> {
    if results.len() != excluded_len + 2 {
        bail!(
            "multicall returned {} results, expected {}",
            results.len(),
            excluded_len + 2
        );
    }
    let mut iter = results.into_iter();
    let total_supply = iter.next().context("missing total supply result")?;
    let burned = iter.next().context("missing burn balance result")?;
    Ok(SupplySnapshot {
        total_supply,
        burned,
        excluded_balances: iter.collect(),
    })
}

/// The zero address is already counted as the burn balance, and a repeated
/// entry would subtract the same balance twice; both are dropped here.
fn normalize_excluded(excluded: &[Address]) -> Vec<Address> {
    let mut kept: Vec<Address> = Vec::with_capacity(excluded.len());
    for address in excluded {
        if address.is_zero() || kept.contains(address) {
            continue;
        }
        kept.push(*address);
    }
    kept
}

// U256 subtraction panics on underflow; a misconfigured excluded list can
// push the subtrahend past the supply, so clamp to zero.
fn sub_or_zero(value: U256, sub: U256) -> U256 {
    if sub < value { value - sub } else { U256::zero() }
}
