//! Cartesian snapshots of two-body trajectories and their CSV export.

use std::fmt::Write;

/// Positions of both bodies at one output sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub t: f64,
    pub p1: [f64; 2],
    pub p2: [f64; 2],
}

pub const CSV_HEADER: &str = "t,x1,y1,x2,y2";

/// Render frames as `t,x1,y1,x2,y2` rows with a header line.
pub fn frames_csv(frames: &[Frame]) -> String {
    let mut csv = String::with_capacity(32 * (frames.len() + 1));
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for f in frames {
        // Writing into a String cannot fail.
        let _ = writeln!(
            csv,
            "{},{},{},{},{}",
            f.t, f.p1[0], f.p1[1], f.p2[0], f.p2[1]
        );
    }
    csv
}
