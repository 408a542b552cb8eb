mod pairing;
mod diagram;
mod complex;
mod filtration;
mod batch;

pub use pairing::*;
pub use diagram::*;
pub use complex::*;
pub use filtration::*;
pub use batch::*;

pub mod reduction;
pub mod config;
