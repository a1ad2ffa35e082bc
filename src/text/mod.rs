mod char_repr;
mod decoded;
mod line;

pub use self::char_repr::*;
pub use self::decoded::*;
pub use self::line::*;
