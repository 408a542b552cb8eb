mod sp_col;
mod vec_store;

pub use sp_col::SpCol;
pub use vec_store::VecStore;
