pub mod builtin;
pub mod catalog;
pub mod conversion;
pub mod definition;
pub mod raw;
pub mod validate;
pub mod working;

pub use catalog::*;
pub use conversion::*;
pub use definition::*;
pub use raw::*;
pub use working::*;
