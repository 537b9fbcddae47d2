// src/token/erc721_mintable.rs
//! Full ERC721 with minter-gated `mint`/`mintWithTokenURI` and holder `burn`.

use ethers::contract::abigen;

abigen!(ERC721Mintable, r#"[
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
    function mint(address to, uint256 tokenId) external returns (bool)
    function mintWithTokenURI(address to, uint256 tokenId, string tokenURI) external returns (bool)
    function burn(uint256 tokenId) external
    function isMinter(address account) external view returns (bool)
    function addMinter(address account) external
    function renounceMinter() external
    event Transfer(address indexed from, address indexed to, uint256 indexed tokenId)
    event Approval(address indexed owner, address indexed approved, uint256 indexed tokenId)
    event ApprovalForAll(address indexed owner, address indexed operator, bool approved)
    event MinterAdded(address indexed account)
    event MinterRemoved(address indexed account)
]"#);
