pub mod errors;
pub mod stamp;

pub use errors::*;
pub use stamp::*;
