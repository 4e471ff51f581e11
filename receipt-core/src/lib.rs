pub mod amount;
pub mod collaborators;
pub mod error;
pub mod models;
pub mod store;

pub use collaborators::{ReceiptNumberSource, Validator, assign_receipt_number, validate_and_commit};
pub use error::FormError;
pub use models::*;
pub use store::ReceiptStore;
