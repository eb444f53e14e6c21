use super::*;

// Functions for creating, updating and querying the contract state.
impl State {
    /// Creates an empty registry administered by the given account.
    pub fn init(administrator: AccountAddress) -> Self {
        State {
            administrator,
            tokens: Map::default(),
            next_id: 0,
            held_balance: Amount::zero(),
        }
    }

    /// Ensure the sender is the administrator account fixed at
    /// instantiation.
    pub fn require_administrator(&self, sender: &Address) -> ContractResult<()> {
        ensure!(
            sender.matches_account(&self.administrator),
            ContractError::Unauthorized
        );
        Ok(())
    }

    /// Number of currently live tokens.
    pub fn live_count(&self) -> u32 {
        self.tokens.len() as u32
    }

    /// Allocate the next id and create a token owned by `to` with no
    /// approval and a zero price.
    /// Results in an error if the owner is the null account or the supply
    /// cap is reached.
    pub fn mint(&mut self, to: AccountAddress, uri: String) -> ContractResult<ContractTokenId> {
        // A live token always has a non-empty owner.
        ensure!(
            to != NULL_ACCOUNT,
            CustomContractError::InvalidTarget.into()
        );
        ensure!(
            self.live_count() < MAX_SUPPLY,
            CustomContractError::SupplyExhausted.into()
        );

        let token_id = TokenIdU32(self.next_id);
        self.tokens.insert(
            token_id.clone(),
            TokenState {
                owner: to,
                approved: None,
                price: Amount::zero(),
                uri,
            },
        );

        // Ids are never reused, the counter only moves forward.
        self.next_id += 1;

        Ok(token_id)
    }

    /// Delete a token record entirely.
    /// Results in an error if the token does not exist or the sender is not
    /// the administrator.
    pub fn burn(
        &mut self,
        sender: &Address,
        token_id: ContractTokenId,
    ) -> ContractResult<BurnEvent<ContractTokenId>> {
        let owner = self
            .tokens
            .get(&token_id)
            .ok_or(ContractError::InvalidTokenId)?
            .owner;

        self.require_administrator(sender)?;

        self.tokens.remove(&token_id);

        Ok(BurnEvent {
            token_id,
            amount: 1,
            owner: Address::Account(owner),
        })
    }

    /// Get the current owner of a token.
    /// Results in an error if the token does not exist.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<AccountAddress> {
        Ok(self.token(token_id)?.owner)
    }

    /// Get the listed price of a token.
    /// Results in an error if the token does not exist.
    pub fn price_of(&self, token_id: &ContractTokenId) -> ContractResult<Amount> {
        Ok(self.token(token_id)?.price)
    }

    /// Get the approved spender of a token, if any.
    /// Results in an error if the token does not exist.
    pub fn approved_of(&self, token_id: &ContractTokenId) -> ContractResult<Option<AccountAddress>> {
        Ok(self.token(token_id)?.approved)
    }

    /// Get the metadata reference of a token.
    /// Results in an error if the token does not exist.
    pub fn uri_of(&self, token_id: &ContractTokenId) -> ContractResult<String> {
        Ok(self.token(token_id)?.uri.clone())
    }

    /// Update the listed price of a token.
    /// Results in an error if the token does not exist or the sender is not
    /// the token owner.
    pub fn set_price(
        &mut self,
        sender: &Address,
        params: UpdatePriceParams,
    ) -> ContractResult<UpdatePriceEvent> {
        let token = self
            .tokens
            .get_mut(&params.token_id)
            .ok_or(ContractError::InvalidTokenId)?;

        // Pricing is controlled by the current token owner, not the
        // administrator.
        ensure!(
            sender.matches_account(&token.owner),
            ContractError::Unauthorized
        );

        let from = token.price;
        token.price = params.price;

        Ok(UpdatePriceEvent {
            token_id: params.token_id,
            owner: token.owner,
            from,
            to: token.price,
        })
    }

    /// Overwrite the metadata reference of a token.
    /// Results in an error if the token does not exist or the sender is not
    /// the administrator.
    pub fn set_uri(&mut self, sender: &Address, params: UpdateUriParams) -> ContractResult<()> {
        let token = self
            .tokens
            .get_mut(&params.token_id)
            .ok_or(ContractError::InvalidTokenId)?;

        ensure!(
            sender.matches_account(&self.administrator),
            ContractError::Unauthorized
        );

        token.uri = params.uri;

        Ok(())
    }

    /// Set the single approved spender of a token, overwriting any previous
    /// approval.
    /// Results in an error if the token does not exist, the sender is not
    /// the token owner or the spender is the null account.
    pub fn approve(
        &mut self,
        sender: &Address,
        params: ApproveParams,
    ) -> ContractResult<ApproveEvent> {
        let token = self
            .tokens
            .get_mut(&params.token_id)
            .ok_or(ContractError::InvalidTokenId)?;

        ensure!(
            sender.matches_account(&token.owner),
            ContractError::Unauthorized
        );
        ensure!(
            params.spender != NULL_ACCOUNT,
            CustomContractError::InvalidTarget.into()
        );

        token.approved = Some(params.spender);

        Ok(ApproveEvent {
            token_id: params.token_id,
            owner: token.owner,
            spender: params.spender,
        })
    }

    /// Move a token to the approved buyer against the attached payment.
    /// The approval slot is cleared on success. The price stays listed
    /// across the sale.
    /// Results in an error if the token does not exist, the buyer is not
    /// the approved spender or the payment is below the listed price.
    pub fn purchase(
        &mut self,
        buyer: AccountAddress,
        token_id: ContractTokenId,
        amount: Amount,
    ) -> ContractResult<TransferEvent<ContractTokenId>> {
        let token = self
            .tokens
            .get_mut(&token_id)
            .ok_or(ContractError::InvalidTokenId)?;

        ensure!(token.approved == Some(buyer), ContractError::Unauthorized);
        ensure!(
            amount >= token.price,
            CustomContractError::InsufficientPayment.into()
        );

        let from = token.owner;
        token.owner = buyer;
        token.approved = None;

        Ok(TransferEvent {
            token_id,
            amount: 1,
            from: Address::Account(from),
            to: Address::Account(buyer),
        })
    }

    /// Reassign a token to a new owner without moving any payment. The
    /// approval slot is cleared.
    /// Results in an error if the token does not exist, the sender is not
    /// the administrator or the target is the null account.
    pub fn direct_transfer(
        &mut self,
        sender: &Address,
        params: DirectTransferParams,
    ) -> ContractResult<TransferEvent<ContractTokenId>> {
        let token = self
            .tokens
            .get_mut(&params.token_id)
            .ok_or(ContractError::InvalidTokenId)?;

        ensure!(
            sender.matches_account(&self.administrator),
            ContractError::Unauthorized
        );
        ensure!(
            params.to != NULL_ACCOUNT,
            CustomContractError::InvalidTarget.into()
        );

        let from = token.owner;
        token.owner = params.to;
        token.approved = None;

        Ok(TransferEvent {
            token_id: params.token_id,
            amount: 1,
            from: Address::Account(from),
            to: Address::Account(params.to),
        })
    }

    /// All live tokens owned by the given account, in ascending id order.
    /// Scans every id ever assigned, not only the live ones.
    pub fn tokens_owned_by(&self, owner: &AccountAddress) -> Vec<ContractTokenId> {
        (0..self.next_id)
            .map(TokenIdU32)
            .filter(|token_id| {
                self.tokens
                    .get(token_id)
                    .map(|token| &token.owner == owner)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Credit an accepted payment to the held balance.
    pub fn credit(&mut self, amount: Amount) {
        self.held_balance += amount;
    }

    /// Take the full held balance, leaving zero behind.
    /// Results in an error if nothing has accumulated. The balance is
    /// zeroed before any outbound transfer is issued with the returned
    /// amount.
    pub fn take_balance(&mut self) -> ContractResult<Amount> {
        ensure!(
            self.held_balance != Amount::zero(),
            CustomContractError::NothingToWithdraw.into()
        );

        let amount = self.held_balance;
        self.held_balance = Amount::zero();

        Ok(amount)
    }

    fn token(&self, token_id: &ContractTokenId) -> ContractResult<&TokenState> {
        self.tokens.get(token_id).ok_or(ContractError::InvalidTokenId)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([7u8; 32]);
    const ADMIN_ADDR: Address = Address::Account(ADMIN);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);

    /// Burned ids are never handed out again.
    #[concordium_test]
    fn test_ids_not_reused_after_burn() {
        let mut state = State::init(ADMIN);

        let first = state
            .mint(ACCOUNT_1, String::from("ipfs://a"))
            .expect_report("Failed to mint");
        state
            .burn(&ADMIN_ADDR, first)
            .expect_report("Failed to burn");

        let second = state
            .mint(ACCOUNT_1, String::from("ipfs://b"))
            .expect_report("Failed to mint");

        claim_eq!(second, TokenIdU32(1), "Burned id must not be reused");
        claim_eq!(state.live_count(), 1, "Only one token should be live");
    }

    /// Owned tokens are listed in ascending id order with burn gaps skipped.
    #[concordium_test]
    fn test_tokens_owned_by_order() {
        let mut state = State::init(ADMIN);

        for uri in ["ipfs://0", "ipfs://1", "ipfs://2"].iter() {
            state
                .mint(ACCOUNT_1, String::from(*uri))
                .expect_report("Failed to mint");
        }
        state
            .burn(&ADMIN_ADDR, TokenIdU32(1))
            .expect_report("Failed to burn");

        let owned = state.tokens_owned_by(&ACCOUNT_1);
        claim_eq!(
            owned,
            vec![TokenIdU32(0), TokenIdU32(2)],
            "Owned ids should be ascending with the burned id missing"
        );
    }

    /// Taking the balance zeroes it and returns the full amount.
    #[concordium_test]
    fn test_take_balance() {
        let mut state = State::init(ADMIN);

        let err = state.take_balance().expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::NothingToWithdraw.into(),
            "Empty treasury should reject withdrawal"
        );

        state.credit(Amount::from_micro_ccd(250));
        state.credit(Amount::from_micro_ccd(750));

        let taken = state.take_balance().expect_report("Failed to take balance");
        claim_eq!(taken, Amount::from_micro_ccd(1_000), "Full amount expected");
        claim_eq!(
            state.held_balance,
            Amount::zero(),
            "Balance should be zero after withdrawal"
        );
    }
}
