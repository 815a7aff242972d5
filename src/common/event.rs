use crate::common::money::Money;
use crate::domain::account::Tier;

/// An operation requested of the ATM, either by the interactive menu or by a
/// row of a batch script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmRequest {
    Register { number: u64, pin: u32, opening: Money },
    Login { number: u64, pin: u32 },
    Logout,
    Balance,
    Deposit { amount: Money },
    Withdraw { amount: Money },
}

/// Outcome of a single [`AtmRequest`]. Every failure mode is a variant here;
/// nothing in the ATM core aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmReply {
    Registered { number: u64, tier: Tier },
    AccountNumberInUse { number: u64 },
    LoggedIn { number: u64 },
    AlreadyLoggedIn,
    InvalidCredentials,
    LoggedOut,
    Balance { balance: Money },
    Deposited { new_balance: Money },
    /// `applied` is false when the withdrawal guard rejected the request;
    /// `new_balance` is the post-operation balance either way.
    Withdrawal { new_balance: Money, applied: bool },
    NotLoggedIn,
}
