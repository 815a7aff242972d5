pub mod balance;
pub mod deposit;
pub mod login;
pub mod logout;
pub mod register;
pub mod withdraw;
