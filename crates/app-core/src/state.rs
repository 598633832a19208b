//! Camera and transform types shared with both frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. The hosts consume them to
//! build view/projection matrices and to place behavior-owned geometry.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::constants::{CAMERA_EYE, CAMERA_FOV_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed landing-scene camera: straight-on at z=5 with a wide FOV.
    pub fn landing(aspect: f32) -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Camera-space right axis in world coordinates, for billboarding.
    pub fn right(&self) -> Vec3 {
        let v = self.view_matrix();
        Vec3::new(v.x_axis.x, v.y_axis.x, v.z_axis.x)
    }

    /// Camera-space up axis in world coordinates.
    pub fn up_world(&self) -> Vec3 {
        let v = self.view_matrix();
        Vec3::new(v.x_axis.y, v.y_axis.y, v.z_axis.y)
    }
}

/// Affine transform a behavior asks the host to apply to its visual object.
///
/// Rotation is Euler XYZ in radians, matching the transform order of the
/// scene graph this scene was designed against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.translation)
    }
}
