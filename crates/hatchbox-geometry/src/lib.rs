pub use cgmath::Deg;

pub type Point3 = cgmath::Point3<f64>;
pub type Vector3 = cgmath::Vector3<f64>;
pub type Matrix3 = cgmath::Matrix3<f64>;

pub mod bounds;

pub use bounds::Aabb;

/// Rotation matrix for Euler angles in degrees, applied about X, then Y, then Z.
pub fn euler_rotation(angles: Vector3) -> Matrix3 {
    Matrix3::from_angle_z(Deg(angles.z))
        * Matrix3::from_angle_y(Deg(angles.y))
        * Matrix3::from_angle_x(Deg(angles.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn quarter_turn_about_y_maps_z_onto_x() {
        let v = euler_rotation(Vector3::new(0.0, 90.0, 0.0)) * Vector3::new(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(v.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn x_then_y_turn_maps_z_onto_y() {
        let v = euler_rotation(Vector3::new(-90.0, 90.0, 0.0)) * Vector3::new(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-12);
    }
}
