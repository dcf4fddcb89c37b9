use std::process::Command;

fn randseq() -> String {
    let out = Command::new(env!("CARGO_BIN_EXE_nc-randseq"))
        .args(["--length", "64", "--num", "4"])
        .output()
        .expect("failed to run nc-randseq");
    assert!(out.status.success());
    String::from_utf8(out.stdout).unwrap()
}

#[test]
fn test_randseq_output_shape() {
    let out = randseq();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    for l in lines {
        assert_eq!(l.len(), 64);
        assert!(l.chars().all(|c| "ACGT".contains(c)));
    }
}

#[cfg(feature = "deterministic")]
#[test]
fn test_fresh_processes_agree() {
    assert_eq!(randseq(), randseq());
}

#[cfg(feature = "random-device")]
#[test]
fn test_fresh_processes_differ() {
    assert_ne!(randseq(), randseq());
}

#[test]
fn test_reference_prefix_bounds() {
    let bin = env!("CARGO_BIN_EXE_nc-reference");
    let ok = Command::new(bin).args(["--length", "3000"]).output().unwrap();
    assert!(ok.status.success());
    let too_long = Command::new(bin).args(["--length", "3001"]).output().unwrap();
    assert!(!too_long.status.success());
}

#[test]
fn test_salt_rejects_out_of_range() {
    let bin = env!("CARGO_BIN_EXE_nc-salt");
    let ok = Command::new(bin).args(["--sodium", "0.5", "--json"]).output().unwrap();
    assert!(ok.status.success());
    let json: serde_json::Value = serde_json::from_slice(&ok.stdout).unwrap();
    assert_eq!(json["conditions"]["sodium"], 0.5);

    let bad = Command::new(bin).args(["--magnesium", "0.5"]).output().unwrap();
    assert!(!bad.status.success());
}
