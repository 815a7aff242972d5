use std::io::Write;

use crate::common::{error::AppError, event::AtmReply};

/// Renders a reply as the console line the ATM prints for it. A rejected
/// withdrawal is reported as insufficient funds rather than success.
pub fn render(reply: &AtmReply) -> String {
    match reply {
        AtmReply::Registered { tier, .. } => {
            format!("Account registration successful! ({tier})")
        }
        AtmReply::AccountNumberInUse { .. } => {
            "Account number already in use. Please choose another.".to_string()
        }
        AtmReply::LoggedIn { .. } => "Login successful!".to_string(),
        AtmReply::AlreadyLoggedIn => {
            "You are already logged in. Please log out to use another account.".to_string()
        }
        AtmReply::InvalidCredentials => "Login failed. Please try again.".to_string(),
        AtmReply::LoggedOut => "Logged out.".to_string(),
        AtmReply::Balance { balance } => format!("Balance: ${balance}"),
        AtmReply::Deposited { new_balance } => {
            format!("Deposit successful. New balance: ${new_balance}")
        }
        AtmReply::Withdrawal {
            new_balance,
            applied: true,
        } => format!("Withdrawal successful. New balance: ${new_balance}"),
        AtmReply::Withdrawal {
            new_balance,
            applied: false,
        } => format!("Insufficient funds. Balance: ${new_balance}"),
        AtmReply::NotLoggedIn => "Please log in first.".to_string(),
    }
}

/// Writes one rendered line per reply.
pub fn write_replies<W: Write>(mut w: W, replies: &[AtmReply]) -> Result<(), AppError> {
    for reply in replies {
        writeln!(w, "{}", render(reply))?;
    }
    w.flush()?;
    Ok(())
}
