use crate::{
    common::{event::AtmReply, money::Money},
    domain::{account::Account, bank::Bank},
};

pub fn handle(bank: &mut Bank, number: u64, pin: u32, opening: Money) -> AtmReply {
    if bank.contains(number) {
        return AtmReply::AccountNumberInUse { number };
    }

    let account = Account::open(number, pin, opening);
    let tier = account.tier();
    bank.add(account);

    AtmReply::Registered { number, tier }
}
