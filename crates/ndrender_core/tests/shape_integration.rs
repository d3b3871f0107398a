//! End-to-end tests of the shape kernel

use ndrender_core::{
    face_sort::face_depths, AxisPair, MathError, Preset, RotationEntry, RotationSchedule,
    ShapeError, ShapeTemplate, FACE_STRIDE,
};

const EPSILON: f32 = 0.0001;

#[test]
fn test_tesseract_buffers() {
    let mut shape = ShapeTemplate::hypercube(4).create_shape(3.0).unwrap();
    let buffers = shape.update().unwrap();

    // 24 square faces, 4 corners each
    assert_eq!(buffers.vertex_count(), 96);
    assert_eq!(buffers.positions.len(), 96 * 3);
    assert_eq!(buffers.secondary.len(), 96 * 3);
    assert_eq!(buffers.indices.len(), 144);
    assert!(buffers.indices.iter().all(|&i| i < 96));
}

#[test]
fn test_complex_graph_buffers() {
    let mut shape = ShapeTemplate::complex_graph(50, 1.5).create_shape(3.0).unwrap();
    let buffers = shape.update().unwrap();

    assert_eq!(buffers.vertex_count(), 2500);
    assert_eq!(buffers.triangle_count(), 4802);
    assert!(buffers.secondary.iter().all(|&c| (0.0..=1.0).contains(&c)));
}

#[test]
fn test_rotation_preserves_norms_through_session() {
    let mut session = Preset::new("torus", ShapeTemplate::hypertorus(5, 6))
        .create_session()
        .unwrap();
    let norms = |s: &ndrender_core::Session| -> Vec<f32> {
        (0..s.shape().vertex_count())
            .map(|v| s.shape().vertex(v).iter().map(|x| x * x).sum::<f32>().sqrt())
            .collect()
    };

    let before = norms(&session);
    for _ in 0..60 {
        session.advance(1.0 / 60.0).unwrap();
    }
    let after = norms(&session);

    for (a, b) in before.iter().zip(&after) {
        assert!((a - b).abs() < 0.001);
    }
}

#[test]
fn test_rotated_tesseract_projects_by_perspective_divide() {
    let k = 3.0;
    let mut shape = ShapeTemplate::hypercube(4).create_shape(k).unwrap();
    shape.rotate(0.3, AxisPair::new(0, 3)).unwrap();
    shape.update().unwrap();
    let buffers = shape.buffers();

    for v in 0..buffers.vertex_count() {
        let native = shape.vertex(v);
        let factor = k / (k + native[3]);
        for axis in 0..3 {
            let expected = native[axis] * factor;
            assert!((buffers.positions[v * 3 + axis] - expected).abs() < EPSILON);
        }
    }
}

#[test]
fn test_rotation_plane_errors() {
    let mut shape = ShapeTemplate::hypercube(3).create_shape(3.0).unwrap();
    assert!(matches!(
        shape.rotate(0.1, AxisPair::new(0, 3)),
        Err(ShapeError::Math(MathError::InvalidAxisPair { .. }))
    ));
    assert!(matches!(
        shape.rotate(0.1, AxisPair::new(1, 1)),
        Err(ShapeError::Math(MathError::InvalidAxisPair { .. }))
    ));
}

#[test]
fn test_depth_sorted_frames_are_back_to_front() {
    let mut session = Preset::new("cube", ShapeTemplate::hypercube(4))
        .with_depth_sort(10.0)
        .create_session()
        .unwrap();

    for _ in 0..3 {
        let buffers = session.advance(0.2).unwrap();
        let depths = face_depths(buffers.positions, buffers.indices, 10.0);
        assert_eq!(depths.len(), buffers.indices.len() / FACE_STRIDE);
        for pair in depths.windows(2) {
            assert!(pair[0] + EPSILON >= pair[1]);
        }
    }
}

#[test]
fn test_schedule_skips_higher_planes_in_3d() {
    let schedule = RotationSchedule::empty()
        .with_entry(RotationEntry::new(0, 2, 1.0))
        .with_entry(RotationEntry::new(2, 3, 1.0));
    let mut session = Preset::new("cube", ShapeTemplate::hypercube(3))
        .with_schedule(schedule)
        .create_session()
        .unwrap();

    // The (2, 3) plane does not exist in 3D and is skipped, not an error
    assert!(session.advance(0.5).is_ok());
}
