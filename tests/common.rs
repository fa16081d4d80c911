use assert_cmd::{cargo::cargo_bin_cmd, Command};

pub fn kata() -> Command {
    cargo_bin_cmd!("kata")
}

/// The six-vertex undirected example graph as directed edge flags
#[allow(dead_code)]
pub fn hexagon_edges(cmd: &mut Command) {
    for edge in [
        "A:B", "A:C", "B:A", "B:D", "B:E", "C:A", "C:F", "D:B", "E:B", "E:F", "F:C", "F:E",
    ] {
        cmd.arg("--edge").arg(edge);
    }
}

/// The five-vertex weighted example graph as weighted edge flags
#[allow(dead_code)]
pub fn weighted_edges(cmd: &mut Command) {
    for edge in ["A:B:4", "A:C:2", "B:C:1", "B:D:5", "C:D:8", "C:E:10", "D:E:2"] {
        cmd.arg("--edge").arg(edge);
    }
    cmd.arg("--undirected");
}
