use crate::{
    common::{event::AtmReply, money::Money},
    domain::{
        account::{FeeGuard, WithdrawOutcome},
        bank::Bank,
        session::Session,
    },
};

pub fn handle(bank: &mut Bank, session: &Session, amount: Money, guard: FeeGuard) -> AtmReply {
    let acc = match session.current().and_then(|number| bank.get_mut(number)) {
        Some(acc) => acc,
        None => return AtmReply::NotLoggedIn,
    };

    match acc.withdraw(amount, guard) {
        WithdrawOutcome::Applied { new_balance, .. } => AtmReply::Withdrawal {
            new_balance,
            applied: true,
        },
        WithdrawOutcome::InsufficientFunds { balance } => AtmReply::Withdrawal {
            new_balance: balance,
            applied: false,
        },
    }
}
