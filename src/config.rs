// src/config.rs
use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// One deployed contract in the bundled registry: the binding it pairs with,
/// where it lives, and on which chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub name: String,
    pub address: Address,
    pub chain: String,
}

/// Parses a deployment registry from its JSON text.
pub fn parse_deployments(content: &str) -> Result<Vec<Deployment>> {
    serde_json::from_str(content).context("failed to parse deployment registry")
}

/// The registry bundled with the crate.
pub fn read_deployments() -> Result<Vec<Deployment>> {
    parse_deployments(include_str!("../config/deployments.json"))
}

/// Looks up a deployment by binding name.
pub fn deployment_address(deployments: &[Deployment], name: &str) -> Option<Address> {
    deployments
        .iter()
        .find(|d| d.name == name)
        .map(|d| d.address)
}

/// Addresses excluded from circulating-supply arithmetic (treasuries,
/// locked team allocations, bridge custody).
pub fn read_excluded_addresses() -> Result<Vec<Address>> {
    serde_json::from_str(include_str!("../config/excluded_addresses.json"))
        .context("failed to parse excluded address list")
}

/// A registry address that also appears in the excluded list would be
/// subtracted twice from the circulating supply. Refuse to start in that case.
pub fn validate_address_lists(
    deployments: &[Deployment],
    excluded: &[Address],
) -> Result<()> {
    let mut seen = HashSet::new();
    for addr in excluded {
        if addr.is_zero() {
            bail!("the zero address is always counted as the burn balance and must not be excluded");
        }
        if !seen.insert(*addr) {
            bail!("duplicate excluded address: {:#x}", addr);
        }
    }
    let overlapping: Vec<String> = deployments
        .iter()
        .filter(|d| excluded.contains(&d.address))
        .map(|d| format!("{} ({:#x})", d.name, d.address))
        .collect();
    if !overlapping.is_empty() {
        bail!(
            "registry contracts present in the excluded address list: {}",
            overlapping.join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "ERC20", "address": "0x5FbDB2315678afecb367f032d93F642f64180aa3", "chain": "sepolia"},
        {"name": "Crowdsale", "address": "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512", "chain": "sepolia"}
    ]"#;

    #[test]
    fn parses_registry_and_resolves_names() {
        let deployments = parse_deployments(SAMPLE).unwrap();
        assert_eq!(deployments.len(), 2);
        let token = deployment_address(&deployments, "ERC20").unwrap();
        assert_eq!(
            token,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
                .parse()
                .unwrap()
        );
        assert!(deployment_address(&deployments, "Escrow").is_none());
    }

    #[test]
    fn rejects_registry_addresses_in_excluded_list() {
        let deployments = parse_deployments(SAMPLE).unwrap();
        let excluded = vec![deployments[1].address];
        assert!(validate_address_lists(&deployments, &excluded).is_err());
    }

    #[test]
    fn rejects_duplicate_excluded_addresses() {
        let addr: Address = "0x000000000000000000000000000000000000dEaD"
            .parse()
            .unwrap();
        assert!(validate_address_lists(&[], &[addr, addr]).is_err());
    }

    #[test]
    fn rejects_zero_address_in_excluded_list() {
        assert!(validate_address_lists(&[], &[Address::zero()]).is_err());
    }

    #[test]
    fn bundled_config_is_consistent() {
        let deployments = read_deployments().unwrap();
        let excluded = read_excluded_addresses().unwrap();
        validate_address_lists(&deployments, &excluded).unwrap();
    }
}
