pub mod answers;
pub mod health;
pub mod questions;
pub mod session;
pub mod transcript;
