mod error;
mod range;
mod report;

pub use self::error::*;
pub use self::range::*;
pub use self::report::*;
