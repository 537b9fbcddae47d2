// src/token/erc721_full.rs
//! ERC721 with both the enumerable and metadata extensions.

use ethers::contract::abigen;

abigen!(ERC721Full, r#"[
    function name() external view returns (string)
    function symbol() external view returns (string)
    function tokenURI(uint256 tokenId) external view returns (string)
    function totalSupply() external view returns (uint256)
    function tokenByIndex(uint256 index) external view returns (uint256)
    function tokenOfOwnerByIndex(address owner, uint256 index) external view returns (uint256)
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
