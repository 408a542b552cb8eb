mod abst;
mod err;

pub use abst::*;
pub use err::{Error, Result};

pub mod util;
