// Re-export all models organized by domain
pub mod approval;
pub mod errors;
pub mod records;
pub mod request;
pub mod response;
pub mod session;
pub mod shift_swap;
pub mod time_adjustment;

pub use approval::*;
pub use errors::*;
pub use records::*;
pub use request::*;
pub use response::*;
pub use session::*;
pub use shift_swap::*;
pub use time_adjustment::*;
