use log::info;
use phom_matrix::dualize;
use phom_matrix::io::load_matrix;
use phom_homology::{compute_persistence_pairs, make_persistence_diagrams, Filtration};
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let m: Matrix = load_matrix(&args.input)?;
    let n = m.num_columns();

    let values = match &args.values { 
        Some(path) => load_values(path)?,
        None => (0..n).map(|j| j as Value).collect()
    };

    // dimensions are read before the matrix is dualized.
    let filt = Filtration::from_matrix(&m, values)?;
    let mut m = if args.dualize { dualize(&m) } else { m };

    let pairing = dispatch_reduction!(args.algorithm, |r| 
        compute_persistence_pairs(r, &mut m)
    )?;

    let mut diagrams = make_persistence_diagrams(&pairing, &filt)?;

    if args.remove_diagonal { 
        diagrams.iter_mut().for_each(|d| d.remove_diagonal());
        info!("removed points on the diagonal.");
    }

    fmt_diagrams(&diagrams, args.format)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub input: String,

    /// File with one filtration value per column. Defaults to the column index.
    #[arg(long)]
    pub values: Option<String>,

    #[arg(short, long, default_value = "standard")]
    pub algorithm: Algorithm,

    #[arg(short, long)]
    pub dualize: bool,

    #[arg(short, long)]
    pub remove_diagonal: bool,

    #[arg(short, long, default_value = "text")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

#[cfg(test)]
mod tests { 
    use super::*;
    use crate::app::cmd::temp_file;

    const TRIANGLE: &str = "-\n-\n-\n0 1\n0 2\n1 2\n3 4 5\n";

    #[test]
    fn index_values() { 
        let args = Args { 
            input: temp_file("dgm-index", TRIANGLE),
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert_eq!(res, "dim 0:\n0\tinf\n1\t3\n2\t4\n\ndim 1:\n5\t6\n\ndim 2:");
    }

    #[test]
    fn given_values() { 
        let args = Args { 
            input: temp_file("dgm-values-m", TRIANGLE),
            values: Some(temp_file("dgm-values-v", "0 0 0 1 1 1 2")),
            algorithm: Algorithm::Twist,
            dualize: true,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert_eq!(res, "dim 0:\n0\tinf\n0\t1\n0\t1\n\ndim 1:\n1\t2\n\ndim 2:");
    }

    #[test]
    fn diagonal_removed() { 
        let args = Args { 
            input: temp_file("dgm-diag-m", TRIANGLE),
            values: Some(temp_file("dgm-diag-v", "0 0 0 0 1 1 1")),
            remove_diagonal: true,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert_eq!(res, "dim 0:\n0\tinf\n0\t1\n\ndim 1:\n\ndim 2:");
    }

    #[test]
    fn wrong_number_of_values() { 
        let args = Args { 
            input: temp_file("dgm-len-m", TRIANGLE),
            values: Some(temp_file("dgm-len-v", "0 1 2")),
            ..Default::default()
        };
        assert!(dispatch(&args).is_err());
    }

    #[test]
    fn decreasing_values() { 
        let args = Args { 
            input: temp_file("dgm-dec-m", TRIANGLE),
            values: Some(temp_file("dgm-dec-v", "0 0 5 1 1 1 2")),
            ..Default::default()
        };
        assert!(dispatch(&args).is_err());
    }
}
