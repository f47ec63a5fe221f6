pub mod request;
pub mod response;

pub use request::{decode_request, CalculationRequest};
pub use response::ErrorBody;
