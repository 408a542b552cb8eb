use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{diagrams, dual, function, pairs};
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// Persistence pairs of a boundary matrix.
    Pairs(pairs::Args),
    /// Persistence diagrams of a boundary matrix.
    Diagrams(diagrams::Args),
    /// Anti-transpose of a boundary matrix.
    Dual(dual::Args),
    /// Sublevel set persistence of sampled function values.
    Function(function::Args),
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        use log::LevelFilter::*;
        let level = match &self.command { 
            Cmd::Pairs(args)    => args.log,
            Cmd::Diagrams(args) => args.log,
            Cmd::Dual(args)     => args.log,
            Cmd::Function(args) => args.log,
        };
        match level {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> { 
        self.init_logger()?;

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) -> Result<(), Box<dyn std::error::Error>> {
        let l = self.args.log_level();
        phom::util::log::init_simple_logger(l)?;
        Ok(())
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> { 
        guard_panic(||
            match &self.args.command { 
                Cmd::Pairs(args)    => pairs::dispatch(args),
                Cmd::Diagrams(args) => diagrams::dispatch(args),
                Cmd::Dual(args)     => dual::dispatch(args),
                Cmd::Function(args) => function::dispatch(args),
            }
        )
    }
}
