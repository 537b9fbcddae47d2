// src/crowdsale/mod.rs
//! Bindings for the crowdsale contract family. Every variant repeats the base
//! surface (`token`/`wallet`/`rate`/`weiRaised`/`buyTokens`) because the
//! generated class exposes the flattened inheritance chain, exactly like the
//! deployed ABI does.

pub mod capped;
pub mod crowdsale;
pub mod finalizable;
pub mod increasing_price;
pub mod individually_capped;
pub mod minted;
pub mod pausable;
pub mod post_delivery;
pub mod refundable;
pub mod timed;
pub mod whitelist;
