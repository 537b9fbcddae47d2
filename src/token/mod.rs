// src/token/mod.rs
//! Bindings for the ERC20, ERC721 and ERC777 token standards.
//!
//! Each contract lives in its own module because the standards share event
//! names (`Transfer`, `Approval`) and the generated filter types would
//! otherwise collide.

pub mod erc20;
pub mod erc20_burnable;
pub mod erc20_capped;
pub mod erc20_metadata;
pub mod erc20_mintable;
pub mod erc20_pausable;
pub mod erc721_full;
pub mod erc721_mintable;
pub mod erc721_pausable;
pub mod erc777;
pub mod ierc20;
pub mod ierc721;
pub mod ierc721_receiver;
pub mod ierc777;
pub mod ierc777_recipient;
pub mod ierc777_sender;
pub mod simple_token;
