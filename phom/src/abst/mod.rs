mod index;
mod value;

pub use index::Index;
pub use value::FiltrationValue;
