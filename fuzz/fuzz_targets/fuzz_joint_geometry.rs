#![no_main]

use curvature_creator::{build_joint_geometry, JointInput, JointParams};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|values: [f64; 6]| {
    let [height, angle_b, distance_b, angle_c, distance_c, pruett] = values;
    let params = JointParams {
        anchor_height: height,
        joint_b: JointInput::new(angle_b, distance_b),
        joint_c: JointInput::new(angle_c, distance_c),
        pruett_distance: pruett,
        arc_radius: 0.01,
    };

    let geometry = build_joint_geometry(&params);
    let _ = geometry.angle_arc.points(8);
    if geometry.pruett.active {
        assert!(angle_c.to_degrees().abs() > 1.0);
    }
});
