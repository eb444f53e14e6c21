//! A capped, payable NFT registry smart contract.
//!
//! # Description
//! An instance of this contract keeps a fixed-cap collection of uniquely
//! numbered tokens. The account that instantiated the contract is its
//! administrator: only the administrator can mint (against a minimum fee),
//! burn, reassign tokens directly, rewrite metadata references and withdraw
//! the collected balance.
//!
//! Each token carries an owner, an optional sale price, a metadata reference
//! and a single approval slot. The token owner lists a price and approves one
//! spender; the approved spender buys the token by attaching at least the
//! listed price to `purchaseTransfer`. All payments (mint fees, purchase
//! payments and anything sent to the catch-all `deposit` endpoint) accumulate
//! in the contract balance until the administrator withdraws it.
//!
//! Token ids are assigned sequentially starting from zero and are never
//! reused, not even after a burn.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, errors::*, events::*, structs::*, types::*};
use concordium_cis1::*;
use concordium_std::{collections::HashMap as Map, *};

mod constants;
mod contract;
mod errors;
mod events;
mod impls;
mod structs;
mod types;
