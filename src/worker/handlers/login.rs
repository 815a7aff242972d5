use crate::{
    common::event::AtmReply,
    domain::{bank::Bank, session::Session},
};

pub fn handle(bank: &Bank, session: &mut Session, number: u64, pin: u32) -> AtmReply {
    if session.is_active() {
        return AtmReply::AlreadyLoggedIn;
    }

    // both the number and the PIN must match; no attempt limit, no lockout
    match bank.get(number) {
        Some(acc) if acc.check_pin(pin) => {
            session.activate(number);
            AtmReply::LoggedIn { number }
        }
        _ => AtmReply::InvalidCredentials,
    }
}
