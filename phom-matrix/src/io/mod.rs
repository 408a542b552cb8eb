mod text;

pub use text::{parse_matrix, load_matrix, save_matrix};
