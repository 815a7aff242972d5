use crate::{
    common::event::AtmReply,
    domain::{bank::Bank, session::Session},
};

pub fn handle(bank: &Bank, session: &Session) -> AtmReply {
    // accounts are never removed, so an active session number always resolves
    match session.current().and_then(|number| bank.get(number)) {
        Some(acc) => AtmReply::Balance {
            balance: acc.balance(),
        },
        None => AtmReply::NotLoggedIn,
    }
}
