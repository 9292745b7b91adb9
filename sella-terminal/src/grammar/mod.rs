pub mod agency;
pub mod availability;
pub mod contact;
pub mod name;
pub mod pricing;
pub mod printer;
pub mod retrieve;
pub mod seat_sell;
