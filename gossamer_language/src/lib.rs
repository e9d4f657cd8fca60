pub mod tag;
pub mod range;

pub use tag::{Language, LanguageTag, Region, Script, Variant};
pub use range::LanguageRange;
