pub mod alphabet;
pub mod calculator;
pub mod error;
pub mod password;
pub mod person;
pub mod random;
