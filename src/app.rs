use std::io::{BufRead, BufWriter, Write, stdout};
use std::str::FromStr;

use crate::{
    common::{error::AppError, event::AtmRequest, money::Money},
    io::{reader, writer},
    worker::processor::Atm,
};

/// Entry point shared by `main` and the tests. With a path argument the file
/// is run as a CSV operation script; without one the interactive menu runs
/// on stdin.
pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    match args.get(1) {
        Some(path) => run_script(path),
        None => {
            let stdin = std::io::stdin();
            run_menu(&mut stdin.lock())
        }
    }
}

/// Batch mode: run every operation in the script against a freshly seeded
/// ATM and print one reply line per operation.
fn run_script(path: &str) -> Result<(), AppError> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut atm = Atm::with_demo_accounts();
    let mut replies = Vec::new();
    for request in reader::read_requests(&mut rdr) {
        let request = request.map_err(AppError::Parse)?;
        replies.push(atm.process(request));
    }

    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    writer::write_replies(out, &replies)?;

    Ok(())
}

/// Interactive mode: the numbered menu loop on stdin.
fn run_menu<R: BufRead>(input: &mut R) -> Result<(), AppError> {
    let mut atm = Atm::with_demo_accounts();

    loop {
        println!("ATM Menu:");
        println!("1. Register");
        println!("2. Login");
        println!("3. Logout");
        println!("4. Check Balance");
        println!("5. Deposit");
        println!("6. Withdraw");
        println!("7. Exit");

        let Some(choice) = prompt_line(input, "Enter your choice: ")? else {
            break;
        };

        let request = match choice.as_str() {
            "1" => {
                let Some(number) = prompt_value::<_, u64>(input, "Enter account number: ")? else {
                    break;
                };
                let Some(pin) = prompt_value::<_, u32>(input, "Enter PIN: ")? else {
                    break;
                };
                let Some(opening) = prompt_value::<_, Money>(input, "Enter initial balance: $")?
                else {
                    break;
                };
                AtmRequest::Register {
                    number,
                    pin,
                    opening,
                }
            }
            "2" => {
                let Some(number) = prompt_value::<_, u64>(input, "Enter account number: ")? else {
                    break;
                };
                let Some(pin) = prompt_value::<_, u32>(input, "Enter PIN: ")? else {
                    break;
                };
                AtmRequest::Login { number, pin }
            }
            "3" => AtmRequest::Logout,
            "4" => AtmRequest::Balance,
            "5" => {
                let Some(amount) = prompt_value::<_, Money>(input, "Enter amount to deposit: $")?
                else {
                    break;
                };
                AtmRequest::Deposit { amount }
            }
            "6" => {
                let Some(amount) = prompt_value::<_, Money>(input, "Enter amount to withdraw: $")?
                else {
                    break;
                };
                AtmRequest::Withdraw { amount }
            }
            "7" => break,
            _ => {
                println!("Invalid choice. Try again.");
                continue;
            }
        };

        println!("{}", writer::render(&atm.process(request)));
    }

    Ok(())
}

/// Prints a prompt and reads one trimmed line. `None` means end of input.
fn prompt_line<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>, AppError> {
    print!("{label}");
    stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Re-prompts until the line parses as a `T`. `None` means end of input.
fn prompt_value<R: BufRead, T: FromStr>(input: &mut R, label: &str) -> Result<Option<T>, AppError> {
    loop {
        let Some(line) = prompt_line(input, label)? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid input. Try again."),
        }
    }
}
