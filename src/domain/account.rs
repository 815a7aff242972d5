use std::fmt;

use crate::common::money::Money;

/// Premium withdrawal fee: 2%, in basis points.
const WITHDRAWAL_FEE_BPS: i64 = 200;

/// Opening balances above this register as premium accounts.
const PREMIUM_THRESHOLD: Money = Money::from_major(10_000);

/// Account tier. Premium accounts pay a 2% fee on every withdrawal;
/// everything else behaves identically across tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Standard,
    Premium,
}

impl Tier {
    /// Tier assigned at registration from the opening balance.
    pub fn for_opening(opening: Money) -> Tier {
        if opening > PREMIUM_THRESHOLD {
            Tier::Premium
        } else {
            Tier::Standard
        }
    }

    /// Fee charged on top of a withdrawal of `amount`.
    pub fn withdrawal_fee(&self, amount: Money) -> Money {
        match self {
            Tier::Standard => Money::zero(),
            Tier::Premium => amount.bps(WITHDRAWAL_FEE_BPS),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Standard => f.write_str("standard"),
            Tier::Premium => f.write_str("premium"),
        }
    }
}

/// Which amount the withdrawal guard compares against the balance.
///
/// `RequestOnly` (the default) approves a premium withdrawal whenever the
/// requested amount alone fits the balance, then debits amount plus fee,
/// so a withdrawal close to the balance can overdraw the account.
/// `RequestPlusFee` requires the debit including the fee to fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeeGuard {
    #[default]
    RequestOnly,
    RequestPlusFee,
}

/// Result of [`Account::withdraw`]. The insufficient-funds case is an
/// explicit outcome, not a silent no-op, but the balance is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawOutcome {
    Applied { debited: Money, new_balance: Money },
    InsufficientFunds { balance: Money },
}

/// A single bank account: immutable number and PIN, mutable balance.
#[derive(Debug, Clone)]
pub struct Account {
    number: u64,
    pin: u32,
    balance: Money,
    tier: Tier,
}

impl Account {
    /// Opens an account, deriving the tier from the opening balance.
    pub fn open(number: u64, pin: u32, opening: Money) -> Self {
        Self {
            number,
            pin,
            balance: opening,
            tier: Tier::for_opening(opening),
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn check_pin(&self, entered: u32) -> bool {
        self.pin == entered
    }

    /// Unconditional credit. Amounts are not validated, so a negative
    /// deposit decreases the balance.
    pub fn deposit(&mut self, amount: Money) {
        self.balance += amount;
    }

    /// Debits `amount` plus the tier's withdrawal fee if the guard admits
    /// the request, otherwise leaves the balance untouched.
    pub fn withdraw(&mut self, amount: Money, guard: FeeGuard) -> WithdrawOutcome {
        let fee = self.tier.withdrawal_fee(amount);
        let guarded = match guard {
            FeeGuard::RequestOnly => amount,
            FeeGuard::RequestPlusFee => amount + fee,
        };
        if guarded > self.balance {
            return WithdrawOutcome::InsufficientFunds {
                balance: self.balance,
            };
        }

        let debited = amount + fee;
        self.balance -= debited;
        WithdrawOutcome::Applied {
            debited,
            new_balance: self.balance,
        }
    }
}
