// src/token/simple_token.rs
//! Fixed-supply demo token. Generated from the compiler-emitted JSON ABI
//! artifact rather than a human-readable description, so the constant getters
//! (`DECIMALS`, `INITIAL_SUPPLY`) keep their original casing.

use ethers::contract::abigen;

abigen!(SimpleToken, "abi/simple_token.json");
