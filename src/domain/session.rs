/// Login state: at most one account is active at a time. Stores the account
/// number, not a reference, so the session can never dangle into the bank.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Number of the logged-in account, if any.
    pub fn current(&self) -> Option<u64> {
        self.current
    }

    pub fn activate(&mut self, number: u64) {
        self.current = Some(number);
    }

    /// Logout. Harmless when no session is active.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
