use super::*;

/// Hard cap on the number of simultaneously live tokens.
pub const MAX_SUPPLY: u32 = 10;

/// Minimum fee that must accompany a mint (0.01 CCD). The fee is
/// non-refundable revenue and is kept even though minting is not a sale.
pub const MIN_MINT_FEE: Amount = Amount::from_micro_ccd(10_000);

/// The all-zero account, treated as "no address" when validating transfer
/// targets and approval spenders.
pub const NULL_ACCOUNT: AccountAddress = AccountAddress([0u8; 32]);

/// Tag for the custom Approve event.
pub const APPROVE_EVENT_TAG: u8 = u8::MAX - 5;

/// Tag for the custom TransferStatus event.
pub const TRANSFER_STATUS_EVENT_TAG: u8 = u8::MAX - 6;

/// Tag for the custom WithdrawalStatus event.
pub const WITHDRAWAL_STATUS_EVENT_TAG: u8 = u8::MAX - 7;

/// Tag for the custom Deposit event.
pub const DEPOSIT_EVENT_TAG: u8 = u8::MAX - 8;

/// Tag for the custom Update Price event.
pub const UPDATE_PRICE_EVENT_TAG: u8 = u8::MAX - 9;
