pub mod active_information;
pub mod entropy;
pub mod log_base;
pub mod measure;
pub mod mutual_information;
pub mod transfer_entropy;
pub mod traits;
pub mod approaches;
pub mod utils;

pub use log_base::LogBase;
pub use measure::{Measure, Undefined};
pub use traits::{GlobalValue, LocalValues, OptionalLocalValues};
