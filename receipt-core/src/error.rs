use thiserror::Error;

/// Errors raised when form input arrives as untyped text.
///
/// Typed callers go through [`FieldUpdate`](crate::models::FieldUpdate) and
/// never see these; they only come out of the string parsing entry points.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("invalid rent amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("unknown payment mode '{0}'")]
    InvalidPaymentMode(String),
}
