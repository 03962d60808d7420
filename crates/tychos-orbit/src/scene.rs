//! Name-keyed lookup of evaluated body state.

use glam::{DQuat, DVec3};

/// Read access to the current pose of named bodies.
///
/// Consumers ask by name and get `None` when the body is not part of the
/// current model state.
pub trait SceneLookup {
    /// World-space position of the body.
    fn position_of(&self, name: &str) -> Option<DVec3>;

    /// World orientation of the body's rotation-axis frame. Its local +y is
    /// the body's north pole.
    fn axis_frame_of(&self, name: &str) -> Option<DQuat>;

    /// Factor by which the body's geometry is scaled up for display; distances
    /// to it are divided by this to recover model units.
    fn distance_scale_of(&self, _name: &str) -> f64 {
        1.0
    }
}
