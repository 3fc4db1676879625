mod cursor;
mod iter;
mod linked_list;
mod node;
mod tests;

pub use cursor::*;
pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;
