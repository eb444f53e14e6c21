use super::*;

/// The record kept for a token while it is live. Burning deletes the whole
/// record, making the id indistinguishable from one that was never minted.
#[derive(Serialize, SchemaType, Clone)]
pub struct TokenState {
    /// Current holder of the token.
    pub owner: AccountAddress,
    /// The single account approved to buy the token, if any. Cleared on
    /// every ownership change.
    pub approved: Option<AccountAddress>,
    /// Amount required to buy the token. Zero until the owner lists one.
    pub price: Amount,
    /// Metadata reference for the token.
    pub uri: String,
}

/// The contract state.
#[contract_state(contract = "CappedNFT")]
#[derive(Serialize, SchemaType)]
pub struct State {
    /// The account allowed to mint, burn, rewrite metadata, reassign tokens
    /// and withdraw. Fixed at instantiation.
    pub administrator: AccountAddress,
    /// Live tokens keyed by id.
    pub tokens: Map<ContractTokenId, TokenState>,
    /// The next id to assign. Increments once per successful mint and is
    /// never rewound, so burned ids leave gaps.
    pub next_id: u32,
    /// Payments accumulated since the last withdrawal.
    pub held_balance: Amount,
}

/// The parameter for the contract function `mint`.
#[derive(Serialize, SchemaType)]
pub struct MintParams {
    /// Owner of the newly minted token.
    pub to: AccountAddress,
    /// Metadata reference of the newly minted token.
    pub uri: String,
}

/// The parameter for the contract function `setPrice`.
#[derive(Serialize, SchemaType)]
pub struct UpdatePriceParams {
    /// Token to reprice.
    pub token_id: ContractTokenId,
    /// New price required to buy the token.
    pub price: Amount,
}

/// The parameter for the contract function `setURI`.
#[derive(Serialize, SchemaType)]
pub struct UpdateUriParams {
    /// Token to update.
    pub token_id: ContractTokenId,
    /// New metadata reference.
    pub uri: String,
}

/// The parameter for the contract function `approve`.
#[derive(Serialize, SchemaType)]
pub struct ApproveParams {
    /// Token the approval applies to.
    pub token_id: ContractTokenId,
    /// The account allowed to buy the token. Overwrites any previous
    /// approval for this token.
    pub spender: AccountAddress,
}

/// The parameter for the contract function `directTransfer`.
#[derive(Serialize, SchemaType)]
pub struct DirectTransferParams {
    /// New owner of the token.
    pub to: AccountAddress,
    /// Token to reassign.
    pub token_id: ContractTokenId,
}

/// The parameter for the per-token view functions `ownerOf`, `getPrice` and
/// `getApproved`.
#[derive(Serialize, SchemaType)]
pub struct TokenQueryParams {
    /// Token to look up.
    pub token_id: ContractTokenId,
    /// The contract to trigger with the result of the query.
    pub result_contract: ContractAddress,
    /// The contract function to trigger with the result of the query.
    pub result_function: OwnedReceiveName,
}

/// The parameter for the contract function `tokensOwnedBy`.
#[derive(Serialize, SchemaType)]
pub struct OwnedTokensQueryParams {
    /// The address whose live tokens are listed.
    pub owner: AccountAddress,
    /// The contract to trigger with the result of the query.
    pub result_contract: ContractAddress,
    /// The contract function to trigger with the result of the query.
    pub result_function: OwnedReceiveName,
}
