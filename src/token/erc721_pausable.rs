// src/token/erc721_pausable.rs
//! Base ERC721 (no enumerable or metadata extensions) whose transfers and
//! approvals can be halted by a `PauserRole` account.

use ethers::contract::abigen;

abigen!(ERC721Pausable, r#"[
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
    function paused() external view returns (bool)
    function pause() external
    function unpause() external
    function isPauser(address account) external view returns (bool)
    function addPauser(address account) external
    function renouncePauser() external
    event Transfer(address indexed from, address indexed to, uint256 indexed tokenId)
    event Approval(address indexed owner, address indexed approved, uint256 indexed tokenId)
    event ApprovalForAll(address indexed owner, address indexed operator, bool approved)
    event Paused(address account)
    event Unpaused(address account)
    event PauserAdded(address indexed account)
    event PauserRemoved(address indexed account)
]"#);
