//! Unit values and the spacing types built from them.

pub mod parsers;
pub mod spacing;
pub mod unit;

pub use parsers::StyleParseError;
pub use spacing::{Gap, Insets};
pub use unit::{Unit, UnitKind, UnitValue};
