pub mod pairs;
pub mod diagrams;
pub mod dual;
pub mod function;

#[cfg(test)]
pub(crate) fn temp_file(name: &str, content: &str) -> String { 
    let path = std::env::temp_dir().join(format!("phom-{}-{name}", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}
