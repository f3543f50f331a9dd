pub mod error;
pub mod message;
pub mod part;
pub mod session;
mod util;

pub use error::{Error, RecordKind, Result};
pub use message::*;
pub use part::*;
pub use session::*;
pub use util::*;
