pub mod edge;
pub mod event;
pub mod ids;
pub mod node;
pub mod store;

pub use edge::*;
pub use event::*;
pub use ids::*;
pub use node::*;
pub use store::*;
