use crate::{
    common::event::{AtmReply, AtmRequest},
    domain::{account::FeeGuard, bank::Bank, session::Session},
    worker::handlers::{balance, deposit, login, logout, register, withdraw},
};

/// The ATM: owns the bank of accounts and the single login session, and
/// dispatches each request to its handler. Every request produces a reply;
/// nothing here can fail fatally.
#[derive(Debug, Default)]
pub struct Atm {
    bank: Bank,
    session: Session,
    fee_guard: FeeGuard,
}

impl Atm {
    /// An ATM over an empty bank, using the literal withdrawal guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// An ATM seeded with the two demonstration accounts.
    pub fn with_demo_accounts() -> Self {
        Self {
            bank: Bank::with_demo_accounts(),
            ..Self::default()
        }
    }

    /// Switches the premium withdrawal guard mode.
    pub fn with_fee_guard(mut self, guard: FeeGuard) -> Self {
        self.fee_guard = guard;
        self
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn process(&mut self, request: AtmRequest) -> AtmReply {
        match request {
            AtmRequest::Register {
                number,
                pin,
                opening,
            } => register::handle(&mut self.bank, number, pin, opening),
            AtmRequest::Login { number, pin } => {
                login::handle(&self.bank, &mut self.session, number, pin)
            }
            AtmRequest::Logout => logout::handle(&mut self.session),
            AtmRequest::Balance => balance::handle(&self.bank, &self.session),
            AtmRequest::Deposit { amount } => {
                deposit::handle(&mut self.bank, &self.session, amount)
            }
            AtmRequest::Withdraw { amount } => {
                withdraw::handle(&mut self.bank, &self.session, amount, self.fee_guard)
            }
        }
    }
}
