// src/token/ierc721_receiver.rs
//! Hook interface a contract must implement to accept `safeTransferFrom`.

use ethers::contract::abigen;

abigen!(IERC721Receiver, r#"[
    function onERC721Received(address operator, address from, uint256 tokenId, bytes data) external returns (bytes4)
]"#);
