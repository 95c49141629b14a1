pub mod discrete;

// Re-exports so users can import crate::estimators::approaches::* ergonomically.
pub use discrete::DiscreteMutualInformation;
pub use discrete::distribution::Distribution;
pub use discrete::mle::DiscreteEntropy;
