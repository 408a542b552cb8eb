use log::info;
use phom_matrix::dualize;
use phom_matrix::io::load_matrix;
use phom_homology::compute_persistence_pairs;
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let m: Matrix = load_matrix(&args.input)?;
    let mut m = if args.dualize { dualize(&m) } else { m };

    info!("reduce: {} columns, {} entries.", m.num_columns(), m.num_entries());

    let pairing = dispatch_reduction!(args.algorithm, |r| 
        compute_persistence_pairs(r, &mut m)
    )?;

    fmt_pairing(&pairing, args.format)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub input: String,

    #[arg(short, long, default_value = "standard")]
    pub algorithm: Algorithm,

    #[arg(short, long)]
    pub dualize: bool,

    #[arg(short, long, default_value = "text")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
