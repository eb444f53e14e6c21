use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// The mint fee is below the required minimum (Error code: -4).
    InsufficientFee,
    /// The supply cap has been reached, no further tokens can be minted
    /// (Error code: -5).
    SupplyExhausted,
    /// The attached amount is below the listed token price (Error code: -6).
    InsufficientPayment,
    /// The destination or spender is the null account (Error code: -7).
    InvalidTarget,
    /// The contract holds no balance to withdraw (Error code: -8).
    NothingToWithdraw,
    /// Only account addresses can buy tokens (Error code: -9).
    OnlyAccountAddress,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping CustomContractError to ContractError.
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis1Error::Custom(c)
    }
}
