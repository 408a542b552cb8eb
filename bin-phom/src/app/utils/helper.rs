use std::path::Path;
use itertools::Itertools;
use phom_homology::{parse_values, PersistenceDiagram, PersistencePairing};
use crate::app::err::*;
use super::{Format, Idx, Value};

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration) 
where F: FnOnce() -> Res { 
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(f).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "unknown source of panic".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

pub fn load_values<P>(path: P) -> Result<Vec<Value>, Box<dyn std::error::Error>>
where P: AsRef<Path> { 
    let input = std::fs::read_to_string(path)?;
    let values = parse_values(&input)?;
    Ok(values)
}

pub fn fmt_pairing(pairing: &PersistencePairing<Idx>, format: Format) -> Result<String, Box<dyn std::error::Error>> { 
    match format { 
        Format::Text => Ok(pairing.to_string().trim_end().to_string()),
        Format::Json => Ok(serde_json::to_string_pretty(pairing)?)
    }
}

pub fn fmt_diagrams(diagrams: &[PersistenceDiagram<Value>], format: Format) -> Result<String, Box<dyn std::error::Error>> { 
    match format { 
        Format::Text => { 
            let s = diagrams.iter().map(|d| 
                format!("dim {}:\n{d}", d.dimension())
            ).join("\n");
            Ok(s.trim_end().to_string())
        },
        Format::Json => Ok(serde_json::to_string_pretty(diagrams)?)
    }
}
