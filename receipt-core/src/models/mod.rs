mod field;
mod form_data;
mod payment_mode;
mod validation;

pub use field::{FieldUpdate, FormField};
pub use form_data::{FormData, FormPatch};
pub use payment_mode::PaymentMode;
pub use validation::{FieldErrors, ValidationResult};
