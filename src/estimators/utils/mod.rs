pub mod series_slicing;
pub mod state_encoding;

pub use state_encoding::{BaseEncoder, StateEncoder};
