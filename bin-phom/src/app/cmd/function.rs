use phom_matrix::io::save_matrix;
use phom_homology::{compute_persistence_pairs, load_function, make_persistence_diagrams};
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let (mut m, filt): (Matrix, _) = load_function::<_, Value, _>(&args.input)?;

    if let Some(path) = &args.save_matrix { 
        save_matrix(&m, path)?;
    }

    let pairing = dispatch_reduction!(args.algorithm, |r| 
        compute_persistence_pairs(r, &mut m)
    )?;

    let mut diagrams = make_persistence_diagrams(&pairing, &filt)?;

    if args.remove_diagonal { 
        diagrams.iter_mut().for_each(|d| d.remove_diagonal());
    }

    fmt_diagrams(&diagrams, args.format)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    /// File with the function values at consecutive sample points.
    pub input: String,

    #[arg(short, long, default_value = "standard")]
    pub algorithm: Algorithm,

    #[arg(short, long)]
    pub remove_diagonal: bool,

    /// Also writes the boundary matrix of the sublevel filtration.
    #[arg(long)]
    pub save_matrix: Option<String>,

    #[arg(short, long, default_value = "text")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
