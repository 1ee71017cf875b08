//! anamnez-export
//!
//! Session transcript rendering: Tera template to a small markdown subset,
//! then PDF or DOCX.

pub mod blocks;
pub mod docx;
pub mod error;
pub mod pdf;
pub mod render;
pub mod styles;
