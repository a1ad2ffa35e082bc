
pub use self::output::*;
pub use self::text::*;
