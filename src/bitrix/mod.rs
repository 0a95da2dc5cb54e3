// Bitrix24 webhook access for the Applicants pipeline

pub mod error;
pub mod transport;
pub mod response;
pub mod adder;

pub use error::*;
pub use transport::*;
pub use response::*;
pub use adder::*;
