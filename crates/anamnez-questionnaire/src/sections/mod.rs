pub mod beck_anxiety;
pub mod demographics;
pub mod history;
pub mod scl14;
