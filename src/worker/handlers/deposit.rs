use crate::{
    common::{event::AtmReply, money::Money},
    domain::{bank::Bank, session::Session},
};

pub fn handle(bank: &mut Bank, session: &Session, amount: Money) -> AtmReply {
    let acc = match session.current().and_then(|number| bank.get_mut(number)) {
        Some(acc) => acc,
        None => return AtmReply::NotLoggedIn,
    };

    acc.deposit(amount);
    AtmReply::Deposited {
        new_balance: acc.balance(),
    }
}
