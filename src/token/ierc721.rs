// src/token/ierc721.rs
//! ERC721 non-fungible token interface, as specified by EIP-721.

use ethers::contract::abigen;

abigen!(IERC721, r#"[
    function balanceOf(address owner) external view returns (uint256)
    function ownerOf(uint256 tokenId) external view returns (address)
    function safeTransferFrom(address from, address to, uint256 tokenId) external
    function safeTransferFrom(address from, address to, uint256 tokenId, bytes data) external
    function transferFrom(address from, address to, uint256 tokenId) external
    function approve(address to, uint256 tokenId) external
    function getApproved(uint256 tokenId) external view returns (address)
    function setApprovalForAll(address operator, bool approved) external
    function isApprovedForAll(address owner, address operator) external view returns (bool)
    function supportsInterface(bytes4 interfaceId) external view returns (bool)
    event Transfer(address indexed from, address indexed to, uint256 indexed tokenId)
    event Approval(address indexed owner, address indexed approved, uint256 indexed tokenId)
    event ApprovalForAll(address indexed owner, address indexed operator, bool approved)
]"#);
