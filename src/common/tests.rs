use super::vec3d::Vec3D;

#[test]
fn test_vec3d_abs() {
    let v = Vec3D::new(2.0_f64, 3.0, 6.0);
    assert!((v.abs() - 7.0).abs() < f64::EPSILON);
}

#[test]
fn test_vec3d_ops() {
    let a = Vec3D::new(1.0_f64, 2.0, 3.0);
    let b = Vec3D::new(0.5_f64, 0.5, 0.5);
    assert_eq!(a + b, Vec3D::new(1.5, 2.5, 3.5));
    assert_eq!(a - b, Vec3D::new(0.5, 1.5, 2.5));
    assert_eq!(a * 2.0, Vec3D::new(2.0, 4.0, 6.0));
}

#[test]
fn test_vec3d_euclid_distance() {
    let a = Vec3D::new(0.0_f64, 0.0, 0.0);
    let b = Vec3D::new(1.0_f64, 2.0, 2.0);
    assert!((a.euclid_distance(&b) - 3.0).abs() < f64::EPSILON);
}
