//! Generic red-black tree types.
//!
//! Types defined in this modules are independant of the actual storage type.
//! Nodes are stored in any container implementing the `cc_traits` slab traits.
pub mod key;

pub mod node;
pub use node::Node;

pub mod tree;
pub use tree::*;

pub mod set;
pub use set::*;

pub mod map;
pub use map::*;
