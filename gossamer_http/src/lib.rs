pub mod grammar;
pub mod method;
pub mod media_type;
pub mod date_time;
pub mod headers;

pub use grammar::Weight;
pub use method::Method;
pub use media_type::{MediaType, Parameter, Parameters};
pub use date_time::HttpDate;
pub use headers::*;
