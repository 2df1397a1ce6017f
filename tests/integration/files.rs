//! Running source files

use std::io::Write;
use std::path::Path;

use chroma::run_file;

fn demo(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn test_factorial_demo() {
    assert_eq!(run_file(&demo("factorial.chroma")).unwrap(), "2432902008176640000");
}

#[test]
fn test_harmonic_demo() {
    assert_eq!(run_file(&demo("harmonic.chroma")).unwrap(), "49/20");
}

#[test]
fn test_vectors_demo() {
    assert_eq!(run_file(&demo("vectors.chroma")).unwrap(), "3\n4");
}

#[test]
fn test_file_error_has_context() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1 0 /").unwrap();
    let err = run_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to evaluate"));
    assert_eq!(err.root_cause().to_string(), "Division by zero");
}

#[test]
fn test_missing_file() {
    let err = run_file(Path::new("definitely/not/here.chroma")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read file"));
}
