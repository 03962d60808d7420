//! Evaluation of the orbit hierarchy at a given simulation time.

use std::collections::HashMap;

use glam::{DAffine3, DQuat, DVec3, EulerRot};

use crate::error::OrbitError;
use crate::scene::SceneLookup;
use crate::settings::OrbitalBodySetting;
use crate::table::BodyTable;

/// Orbit-frame rotation of a body at `pos`, in radians (not wrapped).
pub fn orbit_angle(setting: &OrbitalBodySetting, pos: f64) -> f64 {
    setting.speed * pos - setting.start_pos.to_radians()
}

/// Evaluated state of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    /// World transform of the body's pivot; its translation is the body's
    /// world position.
    pub pivot: DAffine3,
    /// Orbit-frame rotation applied at the evaluated `pos`.
    pub angle: f64,
    /// Scale applied to this body's orbit geometry.
    pub scale: f64,
}

impl BodyPose {
    pub fn position(&self) -> DVec3 {
        self.pivot.translation
    }
}

/// The body hierarchy evaluated at one simulation time.
///
/// This is the shared "current pose" of the model: whoever calls
/// [`OrbitModel::evaluate`] moves every body.
#[derive(Debug, Clone)]
pub struct OrbitModel {
    table: BodyTable,
    index: HashMap<String, usize>,
    /// Concrete bodies ordered parents first.
    order: Vec<usize>,
    poses: Vec<Option<BodyPose>>,
    pos: f64,
    actual_size: bool,
}

impl OrbitModel {
    /// Validate `table` and evaluate it at `pos = 0`.
    pub fn new(table: BodyTable, actual_size: bool) -> Result<Self, OrbitError> {
        table.validate()?;
        let mut model = Self {
            index: HashMap::new(),
            order: Vec::new(),
            poses: Vec::new(),
            table,
            pos: 0.0,
            actual_size,
        };
        model.rebuild_index();
        model.evaluate(0.0);
        Ok(model)
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .table
            .bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (b.name.clone(), i))
            .collect();

        let depth_of = |body: &OrbitalBodySetting| {
            let mut body = body;
            let mut depth = 0usize;
            while let Some(parent) = body.parent.as_deref().and_then(|p| self.table.get(p)) {
                depth += 1;
                body = parent;
            }
            depth
        };
        let mut order: Vec<(usize, usize)> = self
            .table
            .bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_alias())
            .map(|(i, b)| (depth_of(b), i))
            .collect();
        order.sort();
        self.order = order.into_iter().map(|(_, i)| i).collect();
        self.poses = vec![None; self.table.bodies.len()];
    }

    /// Recompute every body's pose at `pos`.
    pub fn evaluate(&mut self, pos: f64) {
        self.pos = pos;
        for &i in &self.order {
            let body = &self.table.bodies[i];
            let parent_pivot = body
                .parent
                .as_deref()
                .and_then(|p| self.index.get(p))
                .and_then(|&p| self.poses[p])
                .map_or(DAffine3::IDENTITY, |pose| pose.pivot);

            let scale = body.display_scale(self.actual_size);
            let container = DAffine3::from_rotation_translation(
                DQuat::from_euler(
                    EulerRot::XYZ,
                    body.orbit_tilt_a.to_radians(),
                    0.0,
                    body.orbit_tilt_b.to_radians(),
                ),
                DVec3::new(body.orbit_center_a, body.orbit_center_c, body.orbit_center_b) * scale,
            );
            let angle = orbit_angle(body, pos);
            let orbit = DAffine3::from_rotation_y(angle);
            let pivot = DAffine3::from_translation(DVec3::new(body.orbit_radius * scale, 0.0, 0.0));

            self.poses[i] = Some(BodyPose {
                pivot: parent_pivot * container * orbit * pivot,
                angle,
                scale,
            });
        }
    }

    /// Simulation time of the current evaluation.
    pub fn pos(&self) -> f64 {
        self.pos
    }

    pub fn actual_size(&self) -> bool {
        self.actual_size
    }

    /// Switch between display-scaled and actual-size geometry and re-evaluate.
    pub fn set_actual_size(&mut self, actual_size: bool) {
        self.actual_size = actual_size;
        self.evaluate(self.pos);
    }

    pub fn table(&self) -> &BodyTable {
        &self.table
    }

    /// Edit one body's settings. The table is revalidated and the model
    /// re-evaluated at the current `pos`; on error the edit is rolled back.
    pub fn update_setting(
        &mut self,
        name: &str,
        edit: impl FnOnce(&mut OrbitalBodySetting),
    ) -> Result<(), OrbitError> {
        let &i = self
            .index
            .get(name)
            .ok_or_else(|| OrbitError::UnknownBody(name.to_string()))?;
        let previous = self.table.bodies[i].clone();
        edit(&mut self.table.bodies[i]);
        if let Err(e) = self.table.validate() {
            self.table.bodies[i] = previous;
            return Err(e);
        }
        log::debug!("Updated settings of '{}'", self.table.bodies[i].name);
        self.rebuild_index();
        self.evaluate(self.pos);
        Ok(())
    }

    /// Resolve a display alias to the concrete body it stands for.
    pub fn resolve<'a>(&'a self, name: &'a str) -> Result<&'a str, OrbitError> {
        let &i = self
            .index
            .get(name)
            .ok_or_else(|| OrbitError::UnknownBody(name.to_string()))?;
        Ok(self.table.bodies[i].alias_of.as_deref().unwrap_or(name))
    }

    /// Evaluated pose of `name` (aliases resolved).
    pub fn pose(&self, name: &str) -> Result<BodyPose, OrbitError> {
        let concrete = self.resolve(name)?;
        self.index
            .get(concrete)
            .and_then(|&i| self.poses[i])
            .ok_or_else(|| OrbitError::UnknownBody(name.to_string()))
    }

    pub fn world_position(&self, name: &str) -> Result<DVec3, OrbitError> {
        self.pose(name).map(|p| p.position())
    }

    /// World orientation of the body's tilted rotation axis frame.
    pub fn axis_frame(&self, name: &str) -> Result<DQuat, OrbitError> {
        let pose = self.pose(name)?;
        let body = &self.table.bodies[self.index[self.resolve(name)?]];
        let pivot_rotation = DQuat::from_mat3(&pose.pivot.matrix3);
        let tilt = DQuat::from_euler(
            EulerRot::XYZ,
            body.tilt_b.to_radians(),
            0.0,
            body.tilt.to_radians(),
        );
        Ok((pivot_rotation * tilt).normalize())
    }
}

impl SceneLookup for OrbitModel {
    fn position_of(&self, name: &str) -> Option<DVec3> {
        self.world_position(name).ok()
    }

    fn axis_frame_of(&self, name: &str) -> Option<DQuat> {
        self.axis_frame(name).ok()
    }

    fn distance_scale_of(&self, name: &str) -> f64 {
        self.pose(name).map_or(1.0, |p| p.scale)
    }
}
