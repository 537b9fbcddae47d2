// src/lib.rs
//! Typed client bindings for the OpenZeppelin 2.x contract family.
//!
//! Every contract surface is generated with `abigen!`: one method per contract
//! function returning an ethers `ContractCall`, one typed struct per function
//! call and per event. ABI encoding, transport and transaction signing are all
//! delegated to `ethers`; nothing in this crate touches the wire format
//! directly.

#![allow(clippy::module_inception)]

pub mod access;
pub mod config;
pub mod crowdsale;
pub mod introspection;
pub mod payment;
pub mod query;
pub mod schedule;
pub mod token;
pub mod utils;

pub use token::erc20::ERC20;
pub use token::ierc20::IERC20;
pub use token::simple_token::SimpleToken;
