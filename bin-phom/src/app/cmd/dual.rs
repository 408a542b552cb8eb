use log::info;
use phom_matrix::dualize;
use phom_matrix::io::{load_matrix, save_matrix};
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let m: Matrix = load_matrix(&args.input)?;
    let d = dualize(&m);

    match &args.output { 
        Some(path) => { 
            ensure!(path != &args.input, "output {path} would overwrite the input.");
            save_matrix(&d, path)?;
            info!("saved {path}.");
            Ok(String::new())
        },
        None => Ok(d.to_string().trim_end().to_string())
    }
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub input: String,

    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
