#![no_main]

use curvature_creator::{analyze_spline, BezierSpline};
use glam::DVec3;
use libfuzzer_sys::fuzz_target;

// Beliebige Punktfolgen (auch NaN/Inf, doppelte Punkte) dürfen nie paniken.
fuzz_target!(|data: &[u8]| {
    let Some((&steps, rest)) = data.split_first() else {
        return;
    };

    let positions: Vec<DVec3> = rest
        .chunks_exact(16)
        .take(32)
        .map(|chunk| {
            let mut x = [0u8; 8];
            let mut z = [0u8; 8];
            x.copy_from_slice(&chunk[..8]);
            z.copy_from_slice(&chunk[8..]);
            DVec3::new(f64::from_le_bytes(x), 0.0, f64::from_le_bytes(z))
        })
        .collect();

    let spline = BezierSpline::with_auto_handles(&positions);
    match analyze_spline(&spline, 0.00005, steps as usize) {
        Ok(comb) => assert_eq!(
            comb.sample_count(),
            (positions.len() - 1) * (steps as usize + 1)
        ),
        Err(_) => assert!(positions.len() < 2 || steps == 0),
    }
});
