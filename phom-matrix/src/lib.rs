mod base;
mod boundary;
mod dual;

pub use base::ColumnStore;
pub use boundary::BoundaryMatrix;
pub use dual::dualize;

pub mod sparse;
pub mod io;
