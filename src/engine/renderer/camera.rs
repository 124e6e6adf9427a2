// Screen-space camera for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Fixed orthographic projection over the world rectangle.
///
/// The origin is the top-left corner and y grows downward, matching the
/// coordinate space the input resolver moves the player in.
#[derive(Debug, Clone)]
pub struct Camera {
    /// View-projection matrix
    view_proj: Mat4,
}

impl Camera {
    /// Create a camera covering a width x height world
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            view_proj: Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0),
        }
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    #[test]
    fn test_world_corners_map_to_ndc() {
        let camera = Camera::new(400.0, 300.0);
        let vp = camera.view_proj_matrix();

        let top_left = vp.project_point3(Vec3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(top_left.x, -1.0);
        assert_relative_eq!(top_left.y, 1.0);

        let bottom_right = vp.project_point3(Vec3::new(400.0, 300.0, 0.0));
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, -1.0);
    }

    #[test]
    fn test_world_centre_maps_to_origin() {
        let camera = Camera::new(400.0, 300.0);
        let centre = camera.view_proj_matrix().project_point3(Vec3::new(200.0, 150.0, 0.0));

        assert_relative_eq!(centre.x, 0.0);
        assert_relative_eq!(centre.y, 0.0);
    }

    #[test]
    fn test_uniform_matches_camera() {
        let camera = Camera::new(400.0, 300.0);
        let uniform = CameraUniform::new(&camera);

        assert_eq!(uniform.view_proj, camera.view_proj_matrix().to_cols_array_2d());
    }
}
