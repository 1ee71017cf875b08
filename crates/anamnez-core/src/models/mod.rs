pub mod answer;
pub mod score;
pub mod session;
pub mod transcript;
