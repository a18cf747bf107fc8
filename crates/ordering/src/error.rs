//! Order flow errors.

use stockroom_core::DomainError;
use thiserror::Error;

pub type OrderResult<T> = Result<T, OrderError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The requested quantity exceeds what is in stock. User-correctable.
    #[error("Input Quantity was greater than quantity in stock (requested {requested}, in stock {in_stock})")]
    InvalidOrderQuantity { requested: i32, in_stock: i32 },

    /// The view-model refused the stock reduction.
    #[error(transparent)]
    Inventory(#[from] DomainError),
}
