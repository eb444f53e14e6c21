use super::*;

/// Contract token ID type.
/// Ids are assigned sequentially from zero, so a `u32` covers every token
/// this contract can ever mint.
pub type ContractTokenId = TokenIdU32;

/// Wrapping the custom errors in a type with CIS1 errors.
pub type ContractError = Cis1Error<CustomContractError>;

pub type ContractResult<A> = Result<A, ContractError>;
