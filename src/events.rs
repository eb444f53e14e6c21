use super::*;

/// An untagged event of an account being approved to buy a token.
#[derive(Debug, Serialize, SchemaType)]
pub struct ApproveEvent {
    /// The token the approval applies to.
    pub token_id: ContractTokenId,
    /// The owner granting the approval.
    pub owner: AccountAddress,
    /// The account now allowed to buy the token.
    pub spender: AccountAddress,
}

/// An untagged event describing the outcome of a transfer request.
#[derive(Debug, Serialize, SchemaType)]
pub struct TransferStatusEvent {
    /// Whether the transfer went through.
    pub success: bool,
    /// Human readable description of the outcome.
    pub message: String,
}

/// An untagged event describing the outcome of a withdrawal request.
#[derive(Debug, Serialize, SchemaType)]
pub struct WithdrawalStatusEvent {
    /// Whether the withdrawal went through.
    pub success: bool,
    /// Human readable description of the outcome.
    pub message: String,
}

/// An untagged event of a payment accepted outside any token operation.
#[derive(Debug, Serialize, SchemaType)]
pub struct DepositEvent {
    /// The address the payment came from.
    pub sender: Address,
    /// The credited amount.
    pub amount: Amount,
}

/// An untagged event of a token price change.
#[derive(Debug, Serialize, SchemaType)]
pub struct UpdatePriceEvent {
    /// The repriced token.
    pub token_id: ContractTokenId,
    /// The owner changing the price.
    pub owner: AccountAddress,
    /// Price before the change.
    pub from: Amount,
    /// Price after the change.
    pub to: Amount,
}

/// Tagged custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    /// Approving an account to buy a token.
    Approve(ApproveEvent),
    /// Outcome of a purchase or direct transfer.
    TransferStatus(TransferStatusEvent),
    /// Outcome of a withdrawal.
    WithdrawalStatus(WithdrawalStatusEvent),
    /// Payment accepted by the catch-all endpoint.
    Deposit(DepositEvent),
    /// Changing the price of a token.
    UpdatePrice(UpdatePriceEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::Approve(event) => {
                out.write_u8(APPROVE_EVENT_TAG)?;
                event.serial(out)
            }
            CustomEvent::TransferStatus(event) => {
                out.write_u8(TRANSFER_STATUS_EVENT_TAG)?;
                event.serial(out)
            }
            CustomEvent::WithdrawalStatus(event) => {
                out.write_u8(WITHDRAWAL_STATUS_EVENT_TAG)?;
                event.serial(out)
            }
            CustomEvent::Deposit(event) => {
                out.write_u8(DEPOSIT_EVENT_TAG)?;
                event.serial(out)
            }
            CustomEvent::UpdatePrice(event) => {
                out.write_u8(UPDATE_PRICE_EVENT_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            APPROVE_EVENT_TAG => ApproveEvent::deserial(source).map(CustomEvent::Approve),
            TRANSFER_STATUS_EVENT_TAG => {
                TransferStatusEvent::deserial(source).map(CustomEvent::TransferStatus)
            }
            WITHDRAWAL_STATUS_EVENT_TAG => {
                WithdrawalStatusEvent::deserial(source).map(CustomEvent::WithdrawalStatus)
            }
            DEPOSIT_EVENT_TAG => DepositEvent::deserial(source).map(CustomEvent::Deposit),
            UPDATE_PRICE_EVENT_TAG => {
                UpdatePriceEvent::deserial(source).map(CustomEvent::UpdatePrice)
            }
            _ => Err(ParseError::default()),
        }
    }
}
