/// Shared domain building blocks (identity, aggregate contract).
pub mod aggregate_root;
pub mod identifier;

pub use aggregate_root::AggregateRoot;
pub use identifier::Identifier;
