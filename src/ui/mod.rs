//! Interactive prompt building blocks.

pub mod readline;

pub use readline::Readline;
