use glam::Vec3;

/// Rotate `p` about an arbitrary unit-length `axis` by `angle` radians.
///
/// Written out as the explicit Rodrigues expansion instead of going through a
/// rotation-matrix constructor; the link-split layout depends on this exact
/// arithmetic.
#[inline]
pub fn rotate_about_axis(p: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    Vec3::new(
        p.x * (axis.x * axis.x * t + c)
            + p.y * (axis.x * axis.y * t - axis.z * s)
            + p.z * (axis.x * axis.z * t + axis.y * s),
        p.x * (axis.y * axis.x * t + axis.z * s)
            + p.y * (axis.y * axis.y * t + c)
            + p.z * (axis.y * axis.z * t - axis.x * s),
        p.x * (axis.z * axis.x * t - axis.y * s)
            + p.y * (axis.z * axis.y * t + axis.x * s)
            + p.z * (axis.z * axis.z * t + c),
    )
}

/// Planar rotation of `p` about the world Y axis.
#[inline]
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x * c - p.z * s, p.y, p.x * s + p.z * c)
}
