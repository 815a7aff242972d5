use crate::common::{event::AtmRequest, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row matching the script headers. The account/pin/amount
/// fields stay empty for the operations that do not need them.
struct ScriptRow {
    op: String,
    account: Option<u64>,
    pin: Option<u32>,
    amount: Option<String>,
}

/// Reads ATM operations from a CSV script.
///
/// Supported headers: `op,account,pin,amount`. The `op` field is
/// case-insensitive; missing required fields produce an error carrying the
/// offending operation name.
///
/// # Examples
///
/// ```
/// use atm_simulator::io::reader::read_requests;
/// use atm_simulator::common::event::AtmRequest;
/// use csv::ReaderBuilder;
///
/// let data = "op,account,pin,amount\n\
/// login,12345,1234,\n\
/// deposit,,,500\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let requests: Vec<_> = read_requests(&mut rdr).collect();
///
/// assert!(matches!(requests[0], Ok(AtmRequest::Login { number: 12345, pin: 1234 })));
/// assert!(matches!(requests[1], Ok(AtmRequest::Deposit { .. })));
/// ```
pub fn read_requests<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<AtmRequest, String>> + '_ {
    rdr.deserialize::<ScriptRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let op = row.op.trim().to_ascii_lowercase();

        let number = |row: &ScriptRow| {
            row.account
                .ok_or_else(|| format!("{op} is missing the account number"))
        };
        let pin = |row: &ScriptRow| row.pin.ok_or_else(|| format!("{op} is missing the pin"));
        let amount = |row: &ScriptRow| {
            let raw = row
                .amount
                .as_deref()
                .ok_or_else(|| format!("{op} is missing the amount"))?;
            Money::from_str(raw).map_err(|e| format!("{op}: bad amount: {e}"))
        };

        match op.as_str() {
            "register" => Ok(AtmRequest::Register {
                number: number(&row)?,
                pin: pin(&row)?,
                opening: amount(&row)?,
            }),
            "login" => Ok(AtmRequest::Login {
                number: number(&row)?,
                pin: pin(&row)?,
            }),
            "logout" => Ok(AtmRequest::Logout),
            "balance" => Ok(AtmRequest::Balance),
            "deposit" => Ok(AtmRequest::Deposit {
                amount: amount(&row)?,
            }),
            "withdraw" => Ok(AtmRequest::Withdraw {
                amount: amount(&row)?,
            }),
            other => Err(format!("unknown operation: {other}")),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_requests(input: &str) -> Vec<Result<AtmRequest, String>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input.as_bytes());
        read_requests(&mut reader).collect()
    }

    #[test]
    fn parses_all_supported_operations() {
        let data = "op,account,pin,amount\n\
register,99999,1111,5000\n\
login,99999,1111,\n\
balance,,,\n\
deposit,,,500\n\
withdraw,,,6000\n\
logout,,,\n";
        let requests = collect_requests(data);

        assert_eq!(requests.len(), 6);
        assert_eq!(
            requests[0],
            Ok(AtmRequest::Register {
                number: 99999,
                pin: 1111,
                opening: Money::from_major(5000),
            })
        );
        assert_eq!(
            requests[1],
            Ok(AtmRequest::Login {
                number: 99999,
                pin: 1111
            })
        );
        assert_eq!(requests[2], Ok(AtmRequest::Balance));
        assert_eq!(
            requests[3],
            Ok(AtmRequest::Deposit {
                amount: Money::from_major(500)
            })
        );
        assert_eq!(
            requests[4],
            Ok(AtmRequest::Withdraw {
                amount: Money::from_major(6000)
            })
        );
        assert_eq!(requests[5], Ok(AtmRequest::Logout));
    }

    #[test]
    fn op_names_are_case_insensitive() {
        let requests = collect_requests("op,account,pin,amount\nLOGOUT,,,\n");
        assert_eq!(requests[0], Ok(AtmRequest::Logout));
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let requests = collect_requests(
            "op,account,pin,amount\n\
login,12345,,\n\
deposit,,,\n\
register,,1111,50\n",
        );

        assert!(requests[0].as_ref().unwrap_err().contains("pin"));
        assert!(requests[1].as_ref().unwrap_err().contains("amount"));
        assert!(requests[2].as_ref().unwrap_err().contains("account number"));
    }

    #[test]
    fn unknown_operation_is_an_error() {
        let requests = collect_requests("op,account,pin,amount\ntransfer,1,2,3\n");
        assert!(
            requests[0]
                .as_ref()
                .unwrap_err()
                .contains("unknown operation: transfer")
        );
    }

    #[test]
    fn bad_amount_is_an_error() {
        let requests = collect_requests("op,account,pin,amount\ndeposit,,,abc\n");
        assert!(requests[0].as_ref().unwrap_err().contains("bad amount"));
    }
}
