//! anamnez-storage
//!
//! Session-scoped answer persistence. The [`store::AnswerStore`] trait is
//! the seam; backends are an in-process map and S3 (a thin wrapper around
//! the AWS S3 SDK).

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod state;
pub mod store;
