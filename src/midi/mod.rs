mod error;
pub use error::Error;

pub mod cc;
pub use cc::{CCName, ControllerNumber};
