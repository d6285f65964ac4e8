pub mod registry;
pub mod schema;
pub mod value;

pub use registry::*;
pub use schema::*;
pub use value::*;
