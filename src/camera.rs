use glam::{Mat4, Vec3, Vec4};
use web_sys as web;

use crate::constants::{CAMERA_FOVY, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::pose::PoseState;

/// View-projection matrix for the current device pose and canvas aspect.
pub fn view_proj(canvas: &web::HtmlCanvasElement, pose: &PoseState) -> Mat4 {
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let proj = Mat4::perspective_rh(CAMERA_FOVY, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
    let view = Mat4::from_rotation_translation(pose.orientation, pose.position).inverse();
    proj * view
}

/// Compute a world-space ray from canvas pixel coordinates under the current
/// pose. Returns `(ray_origin, ray_direction)`.
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    sx: f32,
    sy: f32,
    pose: &PoseState,
) -> (Vec3, Vec3) {
    let width = canvas.width() as f32;
    let height = canvas.height().max(1) as f32;
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);

    let inv = view_proj(canvas, pose).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p_far: Vec3 = p_far.truncate() / p_far.w;

    let ro = pose.position;
    let rd = (p_far - ro).normalize();
    (ro, rd)
}
