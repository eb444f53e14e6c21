use super::*;

/// Initialize the registry with no tokens and an empty treasury. The
/// instantiating account becomes the administrator and cannot be changed
/// afterwards.
#[init(contract = "CappedNFT")]
pub fn contract_init(ctx: &impl HasInitContext) -> InitResult<State> {
    let administrator = ctx.init_origin();

    Ok(State::init(administrator))
}

/// Mint a new token with a given address as the owner.
/// The id is assigned sequentially and logged in the `Mint` event.
/// The attached fee is kept as treasury revenue even though minting is not
/// a sale.
/// Logs a `Mint` and a `TokenMetadata` event.
///
/// It rejects if:
/// - The sender is not the administrator.
/// - The attached amount is below the minimum mint fee.
/// - The supply cap has been reached.
/// - Fails to parse parameter.
/// - Fails to log Mint event.
/// - Fails to log TokenMetadata event.
#[receive(
    contract = "CappedNFT",
    name = "mint",
    parameter = "MintParams",
    enable_logger,
    payable
)]
pub fn contract_mint<A: HasActions>(
    ctx: &impl HasReceiveContext,
    amount: Amount,
    logger: &mut impl HasLogger,
    state: &mut State,
) -> ContractResult<A> {
    // Parse the parameter.
    let params: MintParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    state.require_administrator(&sender)?;
    ensure!(
        amount >= MIN_MINT_FEE,
        CustomContractError::InsufficientFee.into()
    );

    let uri = params.uri;

    // Mint the token in the state.
    let token_id = state.mint(params.to, uri.clone())?;

    // The fee is credited only after the token exists.
    state.credit(amount);

    // Event for the minted NFT.
    logger.log(&Cis1Event::Mint(MintEvent {
        token_id: token_id.clone(),
        amount: 1,
        owner: Address::Account(params.to),
    }))?;

    // Metadata URL for the NFT.
    logger.log(&token_metadata_event(token_id, uri))?;

    Ok(A::accept())
}

/// Destroy a token entirely. The record is deleted, so every later lookup
/// of the id fails the same way as for an id that was never minted. The id
/// itself is never handed out again.
/// Logs a `Burn` event.
///
/// It rejects if:
/// - The token does not exist.
/// - The sender is not the administrator.
/// - Fails to parse parameter.
/// - Fails to log Burn event.
#[receive(
    contract = "CappedNFT",
    name = "burn",
    parameter = "ContractTokenId",
    enable_logger
)]
pub fn contract_burn<A: HasActions>(
    ctx: &impl HasReceiveContext,
    logger: &mut impl HasLogger,
    state: &mut State,
) -> ContractResult<A> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    // Burning NFT.
    let event = state.burn(&ctx.sender(), token_id)?;

    // Event for burning NFT.
    logger.log(&Cis1Event::Burn(event))?;

    Ok(A::accept())
}

/// Update the listed price of a token.
/// Can only be called by the token owner.
/// Logs an `UpdatePrice` event.
///
/// It rejects if:
/// - The token does not exist.
/// - The sender is not the token owner.
/// - Fails to parse parameter.
/// - Fails to log UpdatePrice event.
#[receive(
    contract = "CappedNFT",
    name = "setPrice",
    parameter = "UpdatePriceParams",
    enable_logger
)]
pub fn contract_set_price<A: HasActions>(
    ctx: &impl HasReceiveContext,
    logger: &mut impl HasLogger,
    state: &mut State,
) -> ContractResult<A> {
    // Parse the parameter.
    let params: UpdatePriceParams = ctx.parameter_cursor().get()?;

    // Updating price.
    let event = state.set_price(&ctx.sender(), params)?;

    // Event for updating price of NFT.
    logger.log(&CustomEvent::UpdatePrice(event))?;

    Ok(A::accept())
}

/// Overwrite the metadata reference of a token.
/// Can only be called by the administrator.
/// Logs a `TokenMetadata` event with the new reference.
///
/// It rejects if:
/// - The token does not exist.
/// - The sender is not the administrator.
/// - Fails to parse parameter.
/// - Fails to log TokenMetadata event.
#[receive(
    contract = "CappedNFT",
    name = "setURI",
    parameter = "UpdateUriParams",
    enable_logger
)]
pub fn contract_set_uri<A: HasActions>(
    ctx: &impl HasReceiveContext,
    logger: &mut impl HasLogger,
    state: &mut State,
) -> ContractResult<A> {
    // Parse the parameter.
    let params: UpdateUriParams = ctx.parameter_cursor().get()?;

    let token_id = params.token_id.clone();
    let uri = params.uri.clone();

    state.set_uri(&ctx.sender(), params)?;

    // Metadata URL for the NFT.
    logger.log(&token_metadata_event(token_id, uri))?;

    Ok(A::accept())
}

/// Approve a single account to buy a token, overwriting any previous
/// approval for it.
/// Can only be called by the token owner.
/// Logs an `Approve` event.
///
/// It rejects if:
/// - The token does not exist.
/// - The sender is not the token owner.
/// - The spender is the null account.
/// - Fails to parse parameter.
/// - Fails to log Approve event.
#[receive(
    contract = "CappedNFT",
    name = "approve",
    parameter = "ApproveParams",
    enable_logger
)]
pub fn contract_approve<A: HasActions>(
    ctx: &impl HasReceiveContext,
    logger: &mut impl HasLogger,
    state: &mut State,
) -> ContractResult<A> {
    // Parse the parameter.
    let params: ApproveParams = ctx.parameter_cursor().get()?;

    let event = state.approve(&ctx.sender(), params)?;

    // Event for approving a buyer.
    logger.log(&CustomEvent::Approve(event))?;

    Ok(A::accept())
}

/// Buy a token by attaching at least its listed price. The sender must be
/// the approved spender for the token. On success the sender becomes the
/// owner, the approval slot is cleared and the payment is credited to the
/// treasury. The listed price stays in place across the sale.
/// Logs a `Transfer` and a `TransferStatus` event.
///
/// It rejects if:
/// - The token does not exist.
/// - The sender is a contract address.
/// - The sender is not the approved spender.
/// - The attached amount is below the listed price.
/// - Fails to parse parameter.
/// - Fails to log event.
#[receive(
    contract = "CappedNFT",
    name = "purchaseTransfer",
    parameter = "ContractTokenId",
    enable_logger,
    payable
)]
pub fn contract_purchase_transfer<A: HasActions>(
    ctx: &impl HasReceiveContext,
    amount: Amount,
    logger: &mut impl HasLogger,
    state: &mut State,
) -> ContractResult<A> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    // The token must exist before the sender is classified.
    state.owner_of(&token_id)?;

    let buyer = match ctx.sender() {
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
        Address::Account(account_address) => account_address,
    };

    // Ownership and approval change first, the payment is credited after.
    let event = state.purchase(buyer, token_id, amount)?;
    state.credit(amount);

    // Event for the ownership transfer.
    logger.log(&Cis1Event::Transfer(event))?;

    // Event for the outcome of the transfer request.
    logger.log(&CustomEvent::TransferStatus(TransferStatusEvent {
        success: true,
        message: String::from("Transfer request completed"),
    }))?;

    Ok(A::accept())
}

/// Reassign a token to a new owner without any payment.
/// Can only be called by the administrator.
/// Logs a `Transfer` and a `TransferStatus` event.
///
/// It rejects if:
/// - The token does not exist.
/// - The sender is not the administrator.
/// - The target is the null account.
/// - Fails to parse parameter.
/// - Fails to log event.
#[receive(
    contract = "CappedNFT",
    name = "directTransfer",
    parameter = "DirectTransferParams",
    enable_logger
)]
pub fn contract_direct_transfer<A: HasActions>(
    ctx: &impl HasReceiveContext,
    logger: &mut impl HasLogger,
    state: &mut State,
) -> ContractResult<A> {
    // Parse the parameter.
    let params: DirectTransferParams = ctx.parameter_cursor().get()?;

    let event = state.direct_transfer(&ctx.sender(), params)?;

    // Event for the ownership transfer.
    logger.log(&Cis1Event::Transfer(event))?;

    // Event for the outcome of the transfer request.
    logger.log(&CustomEvent::TransferStatus(TransferStatusEvent {
        success: true,
        message: String::from("Transfer request completed"),
    }))?;

    Ok(A::accept())
}

/// Withdraw the full held balance to the administrator.
/// The balance is zeroed before the outbound transfer is issued, so a
/// re-entering call observes an empty treasury.
/// Logs a `WithdrawalStatus` event.
///
/// It rejects if:
/// - The sender is not the administrator.
/// - The held balance is zero.
/// - Fails to log WithdrawalStatus event.
#[receive(contract = "CappedNFT", name = "withdraw", enable_logger)]
pub fn contract_withdraw<A: HasActions>(
    ctx: &impl HasReceiveContext,
    logger: &mut impl HasLogger,
    state: &mut State,
) -> ContractResult<A> {
    let sender = ctx.sender();

    state.require_administrator(&sender)?;

    // Zero the balance first, only then produce the outbound transfer.
    let amount = state.take_balance()?;

    // Event for the outcome of the withdrawal request.
    logger.log(&CustomEvent::WithdrawalStatus(WithdrawalStatusEvent {
        success: true,
        message: String::from("Withdrawal request completed"),
    }))?;

    Ok(A::simple_transfer(&state.administrator, amount))
}

/// Catch-all payment acceptor for calls that match no token operation.
/// The attached amount is credited to the treasury unconditionally; the
/// parameter bytes are never inspected and no other state changes.
/// Logs a `Deposit` event.
///
/// It rejects if:
/// - Fails to log Deposit event.
#[receive(contract = "CappedNFT", name = "deposit", enable_logger, payable)]
pub fn contract_deposit<A: HasActions>(
    ctx: &impl HasReceiveContext,
    amount: Amount,
    logger: &mut impl HasLogger,
    state: &mut State,
) -> ContractResult<A> {
    state.credit(amount);

    // Event for the accepted payment.
    logger.log(&CustomEvent::Deposit(DepositEvent {
        sender: ctx.sender(),
        amount,
    }))?;

    Ok(A::accept())
}

/// Look up the owner of a token. It takes a contract address plus contract
/// function to invoke with the result.
///
/// It rejects if:
/// - The token does not exist.
/// - It fails to parse the parameter.
/// - Message sent back with the result rejects.
#[receive(contract = "CappedNFT", name = "ownerOf", parameter = "TokenQueryParams")]
pub fn contract_owner_of<A: HasActions>(
    ctx: &impl HasReceiveContext,
    state: &mut State,
) -> ContractResult<A> {
    // Parse the parameter.
    let params: TokenQueryParams = ctx.parameter_cursor().get()?;

    let owner = state.owner_of(&params.token_id)?;

    // Send back the response.
    Ok(send(
        &params.result_contract,
        params.result_function.as_ref(),
        Amount::zero(),
        &owner,
    ))
}

/// Look up the listed price of a token. It takes a contract address plus
/// contract function to invoke with the result.
///
/// It rejects if:
/// - The token does not exist.
/// - It fails to parse the parameter.
/// - Message sent back with the result rejects.
#[receive(contract = "CappedNFT", name = "getPrice", parameter = "TokenQueryParams")]
pub fn contract_get_price<A: HasActions>(
    ctx: &impl HasReceiveContext,
    state: &mut State,
) -> ContractResult<A> {
    // Parse the parameter.
    let params: TokenQueryParams = ctx.parameter_cursor().get()?;

    let price = state.price_of(&params.token_id)?;

    // Send back the response.
    Ok(send(
        &params.result_contract,
        params.result_function.as_ref(),
        Amount::zero(),
        &price,
    ))
}

/// Look up the approved spender of a token, if any. It takes a contract
/// address plus contract function to invoke with the result.
///
/// It rejects if:
/// - The token does not exist.
/// - It fails to parse the parameter.
/// - Message sent back with the result rejects.
#[receive(
    contract = "CappedNFT",
    name = "getApproved",
    parameter = "TokenQueryParams"
)]
pub fn contract_get_approved<A: HasActions>(
    ctx: &impl HasReceiveContext,
    state: &mut State,
) -> ContractResult<A> {
    // Parse the parameter.
    let params: TokenQueryParams = ctx.parameter_cursor().get()?;

    let approved = state.approved_of(&params.token_id)?;

    // Send back the response.
    Ok(send(
        &params.result_contract,
        params.result_function.as_ref(),
        Amount::zero(),
        &approved,
    ))
}

/// List the live tokens owned by an address, in ascending id order. It
/// takes a contract address plus contract function to invoke with the
/// result. The scan covers every id ever assigned, so the cost grows with
/// the total minted count rather than the live count.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Message sent back with the result rejects.
#[receive(
    contract = "CappedNFT",
    name = "tokensOwnedBy",
    parameter = "OwnedTokensQueryParams"
)]
pub fn contract_tokens_owned_by<A: HasActions>(
    ctx: &impl HasReceiveContext,
    state: &mut State,
) -> ContractResult<A> {
    // Parse the parameter.
    let params: OwnedTokensQueryParams = ctx.parameter_cursor().get()?;

    let owned = state.tokens_owned_by(&params.owner);

    // Send back the response.
    Ok(send(
        &params.result_contract,
        params.result_function.as_ref(),
        Amount::zero(),
        &owned,
    ))
}

fn token_metadata_event(token_id: ContractTokenId, url: String) -> Cis1Event<ContractTokenId> {
    Cis1Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl { url, hash: None },
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([7u8; 32]);
    const ADMIN_ADDR: Address = Address::Account(ADMIN);
    const ALICE: AccountAddress = AccountAddress([1u8; 32]);
    const ALICE_ADDR: Address = Address::Account(ALICE);
    const BOB: AccountAddress = AccountAddress([2u8; 32]);
    const BOB_ADDR: Address = Address::Account(BOB);
    const CAROL: AccountAddress = AccountAddress([3u8; 32]);

    fn token_0() -> ContractTokenId {
        TokenIdU32(0)
    }

    /// Test helper function which creates a state administered by `ADMIN`
    /// holding one token with id 0 owned by `ALICE`.
    fn state_with_token() -> State {
        let mut state = State::init(ADMIN);

        state
            .mint(ALICE, String::from("ipfs://token/0"))
            .expect_report("Failed to mint token 0");

        state
    }

    /// Test initialization succeeds and the instantiating account becomes
    /// the administrator.
    #[concordium_test]
    fn test_init() {
        // Setup the context
        let mut ctx = InitContextTest::empty();
        ctx.set_init_origin(ADMIN);

        // Call the contract function.
        let result = contract_init(&ctx);

        // Check the result
        let state = result.expect_report("Contract initialization failed");

        // Check the state
        claim_eq!(state.administrator, ADMIN, "Administrator not as expected");
        claim_eq!(state.tokens.len(), 0, "No tokens should be initialized");
        claim_eq!(state.next_id, 0, "Ids should start at zero");
        claim_eq!(
            state.held_balance,
            Amount::zero(),
            "Treasury should start empty"
        );
    }

    /// Test minting assigns sequential ids, credits the fee and logs the
    /// appropriate events.
    #[concordium_test]
    fn test_mint() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let params = MintParams {
            to: ALICE,
            uri: String::from("ipfs://token/0"),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = State::init(ADMIN);

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_mint(&ctx, MIN_MINT_FEE, &mut logger, &mut state);

        // Check the result
        let actions = result.expect_report("Results in rejection");
        claim_eq!(
            actions,
            ActionsTree::accept(),
            "No action should be produced."
        );

        // Check the state
        claim_eq!(
            state.owner_of(&token_0()).expect_report("Token should exist"),
            ALICE,
            "Token 0 should be owned by ALICE"
        );
        claim_eq!(state.next_id, 1, "Next id should have moved to 1");
        claim_eq!(
            state.held_balance,
            MIN_MINT_FEE,
            "Mint fee should be credited to the treasury"
        );

        // Check the logs
        claim!(
            logger.logs.contains(&to_bytes(&Cis1Event::Mint(MintEvent {
                token_id: token_0(),
                amount: 1,
                owner: ALICE_ADDR,
            }))),
            "Expected an event for minting token 0"
        );

        // A second mint gets the next id.
        let result: ContractResult<ActionsTree> =
            contract_mint(&ctx, MIN_MINT_FEE, &mut logger, &mut state);
        let _ = result.expect_report("Results in rejection");

        claim_eq!(
            state.owner_of(&TokenIdU32(1)).expect_report("Token should exist"),
            ALICE,
            "Token 1 should be owned by ALICE"
        );
        claim_eq!(state.next_id, 2, "Next id should have moved to 2");
    }

    /// Test minting fails when the sender is not the administrator and no
    /// token is created.
    #[concordium_test]
    fn test_mint_unauthorized() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ALICE_ADDR);
        ctx.set_owner(ADMIN);

        let params = MintParams {
            to: ALICE,
            uri: String::from("ipfs://token/0"),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = State::init(ADMIN);

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_mint(&ctx, MIN_MINT_FEE, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim_eq!(state.live_count(), 0, "No token should be created");
        claim_eq!(state.next_id, 0, "Id counter should be untouched");
        claim_eq!(
            state.held_balance,
            Amount::zero(),
            "No fee should be credited"
        );
    }

    /// Test minting fails when the attached fee is below the minimum.
    #[concordium_test]
    fn test_mint_insufficient_fee() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let params = MintParams {
            to: ALICE,
            uri: String::from("ipfs://token/0"),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = State::init(ADMIN);

        // Call the contract function with one microCCD too little.
        let result: ContractResult<ActionsTree> = contract_mint(
            &ctx,
            Amount::from_micro_ccd(MIN_MINT_FEE.micro_ccd - 1),
            &mut logger,
            &mut state,
        );

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InsufficientFee.into(),
            "Error is expected to be InsufficientFee"
        );
        claim_eq!(state.live_count(), 0, "No token should be created");
        claim_eq!(
            state.held_balance,
            Amount::zero(),
            "No fee should be credited"
        );
    }

    /// Test minting to the null account is rejected, so a live token can
    /// never carry an empty owner.
    #[concordium_test]
    fn test_mint_null_owner() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let params = MintParams {
            to: NULL_ACCOUNT,
            uri: String::from("ipfs://token/0"),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = State::init(ADMIN);

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_mint(&ctx, MIN_MINT_FEE, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InvalidTarget.into(),
            "Error is expected to be InvalidTarget"
        );
        claim_eq!(state.live_count(), 0, "No token should be created");
        claim_eq!(state.next_id, 0, "Id counter should be untouched");
        claim_eq!(
            state.held_balance,
            Amount::zero(),
            "No fee should be credited"
        );
    }

    /// Test the mint attempt after the cap is reached fails.
    #[concordium_test]
    fn test_mint_supply_exhausted() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let params = MintParams {
            to: ALICE,
            uri: String::from("ipfs://token"),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = State::init(ADMIN);

        // Fill the whole collection.
        for _ in 0..MAX_SUPPLY {
            let result: ContractResult<ActionsTree> =
                contract_mint(&ctx, MIN_MINT_FEE, &mut logger, &mut state);
            let _ = result.expect_report("Results in rejection");
        }
        claim_eq!(state.live_count(), MAX_SUPPLY, "Collection should be full");

        // One more must fail.
        let result: ContractResult<ActionsTree> =
            contract_mint(&ctx, MIN_MINT_FEE, &mut logger, &mut state);

        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::SupplyExhausted.into(),
            "Error is expected to be SupplyExhausted"
        );
        claim_eq!(state.live_count(), MAX_SUPPLY, "Cap must not be exceeded");
    }

    /// Test burning deletes the record so every later lookup fails, while
    /// the id counter keeps its value.
    #[concordium_test]
    fn test_burn() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let parameter_bytes = to_bytes(&token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_burn(&ctx, &mut logger, &mut state);

        // Check the result
        let actions = result.expect_report("Results in rejection");
        claim_eq!(
            actions,
            ActionsTree::accept(),
            "No action should be produced."
        );

        // Check the state: the id must now behave like one never minted.
        claim_eq!(
            state.owner_of(&token_0()).expect_err_report("Expected to fail"),
            ContractError::InvalidTokenId,
            "ownerOf should report a missing token"
        );
        claim_eq!(
            state.price_of(&token_0()).expect_err_report("Expected to fail"),
            ContractError::InvalidTokenId,
            "getPrice should report a missing token"
        );
        claim_eq!(
            state
                .approved_of(&token_0())
                .expect_err_report("Expected to fail"),
            ContractError::InvalidTokenId,
            "getApproved should report a missing token"
        );
        claim_eq!(
            state.uri_of(&token_0()).expect_err_report("Expected to fail"),
            ContractError::InvalidTokenId,
            "uriOf should report a missing token"
        );
        claim_eq!(state.next_id, 1, "Id counter must not be rewound");

        // Check the logs
        claim!(
            logger.logs.contains(&to_bytes(&Cis1Event::Burn(BurnEvent {
                token_id: token_0(),
                amount: 1,
                owner: ALICE_ADDR,
            }))),
            "Expected an event for burning token 0"
        );
    }

    /// Test burning is gated by the administrator, not the token owner.
    #[concordium_test]
    fn test_burn_requires_administrator() {
        // Setup the context: ALICE owns the token but is not the
        // administrator.
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ALICE_ADDR);
        ctx.set_owner(ADMIN);

        let parameter_bytes = to_bytes(&token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_burn(&ctx, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim_eq!(state.live_count(), 1, "Token should still exist");
    }

    /// Test burning a token that does not exist fails.
    #[concordium_test]
    fn test_burn_missing_token() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let parameter_bytes = to_bytes(&TokenIdU32(7));
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_burn(&ctx, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test setting the price round-trips through the state and logs the
    /// change.
    #[concordium_test]
    fn test_set_price() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ALICE_ADDR);
        ctx.set_owner(ADMIN);

        let params = UpdatePriceParams {
            token_id: token_0(),
            price: Amount::from_ccd(1),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_set_price(&ctx, &mut logger, &mut state);

        // Check the result
        let actions = result.expect_report("Results in rejection");
        claim_eq!(
            actions,
            ActionsTree::accept(),
            "No action should be produced."
        );

        // Check the state
        claim_eq!(
            state.price_of(&token_0()).expect_report("Token should exist"),
            Amount::from_ccd(1),
            "Listed price should round-trip"
        );

        // Check the logs
        claim!(
            logger
                .logs
                .contains(&to_bytes(&CustomEvent::UpdatePrice(UpdatePriceEvent {
                    token_id: token_0(),
                    owner: ALICE,
                    from: Amount::zero(),
                    to: Amount::from_ccd(1),
                }))),
            "Expected an event for the price change"
        );
    }

    /// Test only the token owner can set the price, the administrator
    /// included.
    #[concordium_test]
    fn test_set_price_not_owner() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let params = UpdatePriceParams {
            token_id: token_0(),
            price: Amount::from_ccd(1),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_set_price(&ctx, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim_eq!(
            state.price_of(&token_0()).expect_report("Token should exist"),
            Amount::zero(),
            "Price should be unchanged"
        );
    }

    /// Test the administrator can rewrite the metadata reference.
    #[concordium_test]
    fn test_set_uri() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let params = UpdateUriParams {
            token_id: token_0(),
            uri: String::from("ipfs://token/0-v2"),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_set_uri(&ctx, &mut logger, &mut state);

        // Check the result
        let _ = result.expect_report("Results in rejection");

        // Check the state
        claim_eq!(
            state.uri_of(&token_0()).expect_report("Token should exist"),
            String::from("ipfs://token/0-v2"),
            "Metadata reference should be overwritten"
        );

        // Check the logs
        claim!(
            logger.logs.contains(&to_bytes(&token_metadata_event(
                token_0(),
                String::from("ipfs://token/0-v2")
            ))),
            "Expected a TokenMetadata event with the new reference"
        );
    }

    /// Test the token owner cannot rewrite the metadata reference.
    #[concordium_test]
    fn test_set_uri_requires_administrator() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ALICE_ADDR);
        ctx.set_owner(ADMIN);

        let params = UpdateUriParams {
            token_id: token_0(),
            uri: String::from("ipfs://token/0-v2"),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_set_uri(&ctx, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
    }

    /// Test approving stores the spender, logs the event and a repeated
    /// approval overwrites the slot.
    #[concordium_test]
    fn test_approve() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ALICE_ADDR);
        ctx.set_owner(ADMIN);

        let params = ApproveParams {
            token_id: token_0(),
            spender: BOB,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_approve(&ctx, &mut logger, &mut state);

        // Check the result
        let _ = result.expect_report("Results in rejection");

        // Check the state
        claim_eq!(
            state
                .approved_of(&token_0())
                .expect_report("Token should exist"),
            Some(BOB),
            "BOB should hold the approval slot"
        );

        // Check the logs
        claim!(
            logger
                .logs
                .contains(&to_bytes(&CustomEvent::Approve(ApproveEvent {
                    token_id: token_0(),
                    owner: ALICE,
                    spender: BOB,
                }))),
            "Expected an event for the approval"
        );

        // A later approval replaces the previous spender.
        let params = ApproveParams {
            token_id: token_0(),
            spender: CAROL,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let result: ContractResult<ActionsTree> = contract_approve(&ctx, &mut logger, &mut state);
        let _ = result.expect_report("Results in rejection");

        claim_eq!(
            state
                .approved_of(&token_0())
                .expect_report("Token should exist"),
            Some(CAROL),
            "CAROL should have replaced BOB in the approval slot"
        );
    }

    /// Test approving the null account is rejected.
    #[concordium_test]
    fn test_approve_null_spender() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ALICE_ADDR);
        ctx.set_owner(ADMIN);

        let params = ApproveParams {
            token_id: token_0(),
            spender: NULL_ACCOUNT,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_approve(&ctx, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InvalidTarget.into(),
            "Error is expected to be InvalidTarget"
        );
        claim_eq!(
            state
                .approved_of(&token_0())
                .expect_report("Token should exist"),
            None,
            "Approval slot should stay empty"
        );
    }

    /// Test only the token owner can approve a spender.
    #[concordium_test]
    fn test_approve_not_owner() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(BOB_ADDR);
        ctx.set_owner(ADMIN);

        let params = ApproveParams {
            token_id: token_0(),
            spender: BOB,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_approve(&ctx, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
    }

    /// Test the approved spender buying at the listed price: ownership
    /// moves, the approval slot clears, the payment lands in the treasury
    /// and the price stays listed.
    #[concordium_test]
    fn test_purchase_transfer() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(BOB_ADDR);
        ctx.set_owner(ADMIN);

        let parameter_bytes = to_bytes(&token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();
        state
            .set_price(
                &ALICE_ADDR,
                UpdatePriceParams {
                    token_id: token_0(),
                    price: Amount::from_ccd(1),
                },
            )
            .expect_report("Failed to set price");
        state
            .approve(
                &ALICE_ADDR,
                ApproveParams {
                    token_id: token_0(),
                    spender: BOB,
                },
            )
            .expect_report("Failed to approve");

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_purchase_transfer(&ctx, Amount::from_ccd(1), &mut logger, &mut state);

        // Check the result
        let actions = result.expect_report("Results in rejection");
        claim_eq!(
            actions,
            ActionsTree::accept(),
            "No action should be produced."
        );

        // Check the state
        claim_eq!(
            state.owner_of(&token_0()).expect_report("Token should exist"),
            BOB,
            "BOB should own the token after the purchase"
        );
        claim_eq!(
            state
                .approved_of(&token_0())
                .expect_report("Token should exist"),
            None,
            "Approval slot should be cleared by the sale"
        );
        claim_eq!(
            state.held_balance,
            Amount::from_ccd(1),
            "Treasury should be credited with exactly the payment"
        );
        claim_eq!(
            state.price_of(&token_0()).expect_report("Token should exist"),
            Amount::from_ccd(1),
            "Price stays listed across the sale"
        );

        // Check the logs
        claim!(
            logger
                .logs
                .contains(&to_bytes(&Cis1Event::Transfer(TransferEvent {
                    token_id: token_0(),
                    amount: 1,
                    from: ALICE_ADDR,
                    to: BOB_ADDR,
                }))),
            "Expected an event for the ownership transfer"
        );
        claim!(
            logger.logs.contains(&to_bytes(&CustomEvent::TransferStatus(
                TransferStatusEvent {
                    success: true,
                    message: String::from("Transfer request completed"),
                }
            ))),
            "Expected a successful transfer status event"
        );
    }

    /// Test a purchase below the listed price changes nothing.
    #[concordium_test]
    fn test_purchase_transfer_underpaid() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(BOB_ADDR);
        ctx.set_owner(ADMIN);

        let parameter_bytes = to_bytes(&token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();
        state
            .set_price(
                &ALICE_ADDR,
                UpdatePriceParams {
                    token_id: token_0(),
                    price: Amount::from_ccd(1),
                },
            )
            .expect_report("Failed to set price");
        state
            .approve(
                &ALICE_ADDR,
                ApproveParams {
                    token_id: token_0(),
                    spender: BOB,
                },
            )
            .expect_report("Failed to approve");

        // Call the contract function with half the listed price.
        let result: ContractResult<ActionsTree> = contract_purchase_transfer(
            &ctx,
            Amount::from_micro_ccd(500_000),
            &mut logger,
            &mut state,
        );

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InsufficientPayment.into(),
            "Error is expected to be InsufficientPayment"
        );

        // Check the state is untouched.
        claim_eq!(
            state.owner_of(&token_0()).expect_report("Token should exist"),
            ALICE,
            "ALICE should still own the token"
        );
        claim_eq!(
            state
                .approved_of(&token_0())
                .expect_report("Token should exist"),
            Some(BOB),
            "Approval slot should be unchanged"
        );
        claim_eq!(
            state.held_balance,
            Amount::zero(),
            "No payment should be credited"
        );
    }

    /// Test a purchase by anyone but the approved spender is rejected.
    #[concordium_test]
    fn test_purchase_transfer_not_approved() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(Address::Account(CAROL));
        ctx.set_owner(ADMIN);

        let parameter_bytes = to_bytes(&token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();
        state
            .approve(
                &ALICE_ADDR,
                ApproveParams {
                    token_id: token_0(),
                    spender: BOB,
                },
            )
            .expect_report("Failed to approve");

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_purchase_transfer(&ctx, Amount::from_ccd(1), &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim_eq!(
            state.owner_of(&token_0()).expect_report("Token should exist"),
            ALICE,
            "ALICE should still own the token"
        );
    }

    /// Test buying a token that does not exist fails.
    #[concordium_test]
    fn test_purchase_transfer_missing_token() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(BOB_ADDR);
        ctx.set_owner(ADMIN);

        let parameter_bytes = to_bytes(&TokenIdU32(5));
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_purchase_transfer(&ctx, Amount::from_ccd(1), &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test contract addresses cannot buy tokens.
    #[concordium_test]
    fn test_purchase_transfer_contract_sender() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(Address::Contract(ContractAddress {
            index: 5,
            subindex: 0,
        }));
        ctx.set_owner(ADMIN);

        let parameter_bytes = to_bytes(&token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_purchase_transfer(&ctx, Amount::from_ccd(1), &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::OnlyAccountAddress.into(),
            "Error is expected to be OnlyAccountAddress"
        );
    }

    /// Test a contract sender naming a missing token is told the token is
    /// missing, not that its address kind is wrong.
    #[concordium_test]
    fn test_purchase_transfer_contract_sender_missing_token() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(Address::Contract(ContractAddress {
            index: 5,
            subindex: 0,
        }));
        ctx.set_owner(ADMIN);

        let parameter_bytes = to_bytes(&TokenIdU32(5));
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_purchase_transfer(&ctx, Amount::from_ccd(1), &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test the administrator reassigning a token without payment clears
    /// the approval slot.
    #[concordium_test]
    fn test_direct_transfer() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let params = DirectTransferParams {
            to: BOB,
            token_id: token_0(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();
        state
            .approve(
                &ALICE_ADDR,
                ApproveParams {
                    token_id: token_0(),
                    spender: CAROL,
                },
            )
            .expect_report("Failed to approve");

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_direct_transfer(&ctx, &mut logger, &mut state);

        // Check the result
        let actions = result.expect_report("Results in rejection");
        claim_eq!(
            actions,
            ActionsTree::accept(),
            "No action should be produced."
        );

        // Check the state
        claim_eq!(
            state.owner_of(&token_0()).expect_report("Token should exist"),
            BOB,
            "BOB should own the token after the reassignment"
        );
        claim_eq!(
            state
                .approved_of(&token_0())
                .expect_report("Token should exist"),
            None,
            "Approval slot should be cleared by the ownership change"
        );
        claim_eq!(
            state.held_balance,
            Amount::zero(),
            "No payment moves on a direct transfer"
        );

        // Check the logs
        claim!(
            logger
                .logs
                .contains(&to_bytes(&Cis1Event::Transfer(TransferEvent {
                    token_id: token_0(),
                    amount: 1,
                    from: ALICE_ADDR,
                    to: BOB_ADDR,
                }))),
            "Expected an event for the ownership transfer"
        );
    }

    /// Test the administrator can reassign a token to their own account,
    /// which must not be mistaken for the null target.
    #[concordium_test]
    fn test_direct_transfer_to_administrator() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let params = DirectTransferParams {
            to: ADMIN,
            token_id: token_0(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_direct_transfer(&ctx, &mut logger, &mut state);

        // Check the result
        let _ = result.expect_report("Results in rejection");

        // Check the state
        claim_eq!(
            state.owner_of(&token_0()).expect_report("Token should exist"),
            ADMIN,
            "The administrator should own the token"
        );
    }

    /// Test the token owner cannot use the administrative transfer.
    #[concordium_test]
    fn test_direct_transfer_unauthorized() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ALICE_ADDR);
        ctx.set_owner(ADMIN);

        let params = DirectTransferParams {
            to: BOB,
            token_id: token_0(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_direct_transfer(&ctx, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
    }

    /// Test reassigning a token to the null account is rejected.
    #[concordium_test]
    fn test_direct_transfer_null_target() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let params = DirectTransferParams {
            to: NULL_ACCOUNT,
            token_id: token_0(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_direct_transfer(&ctx, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InvalidTarget.into(),
            "Error is expected to be InvalidTarget"
        );
        claim_eq!(
            state.owner_of(&token_0()).expect_report("Token should exist"),
            ALICE,
            "ALICE should still own the token"
        );
    }

    /// Test withdrawing an empty treasury fails.
    #[concordium_test]
    fn test_withdraw_empty() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let mut logger = LogRecorder::init();
        let mut state = State::init(ADMIN);

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_withdraw(&ctx, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::NothingToWithdraw.into(),
            "Error is expected to be NothingToWithdraw"
        );
    }

    /// Test withdrawing moves the full balance to the administrator and
    /// zeroes the treasury before the transfer is issued.
    #[concordium_test]
    fn test_withdraw() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ADMIN_ADDR);
        ctx.set_owner(ADMIN);

        let mut logger = LogRecorder::init();
        let mut state = State::init(ADMIN);
        state.credit(Amount::from_ccd(1));
        state.credit(Amount::from_micro_ccd(500_000));

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_withdraw(&ctx, &mut logger, &mut state);

        // Check the result
        let actions = result.expect_report("Results in rejection");
        claim_eq!(
            actions,
            ActionsTree::simple_transfer(&ADMIN, Amount::from_micro_ccd(1_500_000)),
            "The full balance should be sent to the administrator"
        );

        // Check the state
        claim_eq!(
            state.held_balance,
            Amount::zero(),
            "Balance should be exactly zero after withdrawal"
        );

        // Check the logs
        claim!(
            logger
                .logs
                .contains(&to_bytes(&CustomEvent::WithdrawalStatus(
                    WithdrawalStatusEvent {
                        success: true,
                        message: String::from("Withdrawal request completed"),
                    }
                ))),
            "Expected a successful withdrawal status event"
        );
    }

    /// Test only the administrator can withdraw.
    #[concordium_test]
    fn test_withdraw_unauthorized() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ALICE_ADDR);
        ctx.set_owner(ADMIN);

        let mut logger = LogRecorder::init();
        let mut state = State::init(ADMIN);
        state.credit(Amount::from_ccd(1));

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_withdraw(&ctx, &mut logger, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim_eq!(
            state.held_balance,
            Amount::from_ccd(1),
            "Balance should be untouched"
        );
    }

    /// Test the catch-all acceptor credits any payment without touching the
    /// token table, whatever bytes arrive as the parameter.
    #[concordium_test]
    fn test_deposit() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(ALICE_ADDR);
        ctx.set_owner(ADMIN);

        // Arbitrary payload that matches no recognized parameter shape.
        ctx.set_parameter(&[0x12, 0x34, 0x56, 0x78]);

        let mut logger = LogRecorder::init();
        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> =
            contract_deposit(&ctx, Amount::from_micro_ccd(500_000), &mut logger, &mut state);

        // Check the result
        let actions = result.expect_report("Results in rejection");
        claim_eq!(
            actions,
            ActionsTree::accept(),
            "No action should be produced."
        );

        // Check the state
        claim_eq!(
            state.held_balance,
            Amount::from_micro_ccd(500_000),
            "Payment should be credited to the treasury"
        );
        claim_eq!(state.live_count(), 1, "Token table should be untouched");

        // Check the logs
        claim!(
            logger
                .logs
                .contains(&to_bytes(&CustomEvent::Deposit(DepositEvent {
                    sender: ALICE_ADDR,
                    amount: Amount::from_micro_ccd(500_000),
                }))),
            "Expected an event for the accepted payment"
        );
    }

    /// Test the owner query sends the result to the requested callback.
    #[concordium_test]
    fn test_owner_of_query() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(BOB_ADDR);
        ctx.set_owner(ADMIN);

        let result_contract = ContractAddress {
            index: 9,
            subindex: 0,
        };
        let params = TokenQueryParams {
            token_id: token_0(),
            result_contract,
            result_function: OwnedReceiveName::new_unchecked(String::from("Viewer.receiveOwner")),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_owner_of(&ctx, &mut state);

        // Check the result: the owner is sent back to the caller contract.
        let actions = result.expect_report("Results in rejection");
        claim_eq!(
            actions,
            send(
                &result_contract,
                ReceiveName::new_unchecked("Viewer.receiveOwner"),
                Amount::zero(),
                &ALICE,
            ),
            "Expected the owner to be sent to the result function"
        );
    }

    /// Test the approval query fails for a missing token.
    #[concordium_test]
    fn test_get_approved_missing_token() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(BOB_ADDR);
        ctx.set_owner(ADMIN);

        let params = TokenQueryParams {
            token_id: TokenIdU32(3),
            result_contract: ContractAddress {
                index: 9,
                subindex: 0,
            },
            result_function: OwnedReceiveName::new_unchecked(String::from(
                "Viewer.receiveApproved",
            )),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut state = state_with_token();

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_get_approved(&ctx, &mut state);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test the owned-tokens query lists ids in ascending order.
    #[concordium_test]
    fn test_tokens_owned_by_query() {
        // Setup the context
        let mut ctx = ReceiveContextTest::empty();
        ctx.set_sender(BOB_ADDR);
        ctx.set_owner(ADMIN);

        let result_contract = ContractAddress {
            index: 9,
            subindex: 0,
        };
        let params = OwnedTokensQueryParams {
            owner: ALICE,
            result_contract,
            result_function: OwnedReceiveName::new_unchecked(String::from("Viewer.receiveTokens")),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut state = state_with_token();
        state
            .mint(BOB, String::from("ipfs://token/1"))
            .expect_report("Failed to mint token 1");
        state
            .mint(ALICE, String::from("ipfs://token/2"))
            .expect_report("Failed to mint token 2");

        // Call the contract function.
        let result: ContractResult<ActionsTree> = contract_tokens_owned_by(&ctx, &mut state);

        // Check the result.
        let actions = result.expect_report("Results in rejection");
        claim_eq!(
            actions,
            send(
                &result_contract,
                ReceiveName::new_unchecked("Viewer.receiveTokens"),
                Amount::zero(),
                &vec![TokenIdU32(0), TokenIdU32(2)],
            ),
            "Expected ALICE's ids in ascending order"
        );
    }
}
