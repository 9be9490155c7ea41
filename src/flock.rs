/*
 * Flock Controller Module
 *
 * This module orchestrates one simulation tick: rule evaluation for every
 * agent against the pre-tick snapshot, velocity/position integration with
 * the speed clamp, and boundary enforcement. It owns the configuration
 * (bounds, repulsor/attractor, rule parameters) and the agent store, and
 * re-exports the store's buffers for zero-copy host access.
 */

use glam::Vec2;
use tracing::debug;

use crate::boundary::wrap;
use crate::error::{FlockError, FlockResult};
use crate::params::RuleParams;
use crate::rules;
use crate::store::AgentStore;

pub struct Flock {
    store: AgentStore,
    params: RuleParams,
    width: f32,
    height: f32,
    repulsor: Option<Vec2>,
    attractor: Option<Vec2>,
}

impl Flock {
    // Construct a flock with default rule parameters. Buffers are zeroed;
    // the host seeds initial positions/velocities through the mutable
    // accessors before the first update.
    pub fn new(count: usize) -> FlockResult<Flock> {
        Self::with_params(count, RuleParams::default())
    }

    pub fn with_params(count: usize, params: RuleParams) -> FlockResult<Flock> {
        let store = AgentStore::allocate(count)?;
        debug!(count, "flock allocated");

        Ok(Flock {
            store,
            params,
            width: 0.0,
            height: 0.0,
            repulsor: None,
            attractor: None,
        })
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn params(&self) -> &RuleParams {
        &self.params
    }

    // Zero-copy buffer access. The slices alias the live storage used by
    // update(): host writes are seen by the next tick and engine writes by
    // the next host read. Addresses are valid only until the next mutating
    // call, so external readers must re-fetch every frame.
    pub fn positions(&self) -> &[f32] {
        self.store.positions()
    }

    pub fn positions_mut(&mut self) -> &mut [f32] {
        self.store.positions_mut()
    }

    pub fn velocities(&self) -> &[f32] {
        self.store.velocities()
    }

    pub fn velocities_mut(&mut self) -> &mut [f32] {
        self.store.velocities_mut()
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.store.positions_ptr()
    }

    pub fn velocities_ptr(&self) -> *const f32 {
        self.store.velocities_ptr()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    // Bounds take effect on the next update. Invalid values are rejected
    // and the prior bounds retained.
    pub fn set_width(&mut self, width: f32) -> FlockResult<()> {
        self.width = validate_bound(width)?;
        Ok(())
    }

    pub fn set_height(&mut self, height: f32) -> FlockResult<()> {
        self.height = validate_bound(height)?;
        Ok(())
    }

    pub fn repulsor(&self) -> Option<Vec2> {
        self.repulsor
    }

    pub fn set_repulsor(&mut self, x: f32, y: f32) {
        debug!(x, y, "repulsor set");
        self.repulsor = Some(Vec2::new(x, y));
    }

    pub fn unset_repulsor(&mut self) {
        debug!("repulsor cleared");
        self.repulsor = None;
    }

    pub fn attractor(&self) -> Option<Vec2> {
        self.attractor
    }

    pub fn set_attractor(&mut self, x: f32, y: f32) {
        debug!(x, y, "attractor set");
        self.attractor = Some(Vec2::new(x, y));
    }

    pub fn unset_attractor(&mut self) {
        debug!("attractor cleared");
        self.attractor = None;
    }

    // Advance the simulation by one fixed time step. Phase 1 evaluates the
    // rules for every agent against the pre-tick snapshot and parks the
    // weighted sums in the acceleration scratch buffer, so no agent ever
    // sees a same-tick update of another. Phase 2 integrates and wraps.
    pub fn update(&mut self) {
        for idx in 0..self.store.count() {
            let accel = self.accumulate_forces(idx);
            self.store.set_acceleration(idx, accel);
        }
        for idx in 0..self.store.count() {
            self.integrate(idx);
        }
    }

    // Weighted sum of every rule contribution for one agent.
    fn accumulate_forces(&self, idx: usize) -> Vec2 {
        let p = &self.params;
        let pos = self.store.position(idx);

        let mut accel = rules::separation(&self.store, idx, p) * p.separation_weight;
        accel += rules::alignment(&self.store, idx, p) * p.alignment_weight;
        accel += rules::cohesion(&self.store, idx, p) * p.cohesion_weight;
        if let Some(repulsor) = self.repulsor {
            accel += rules::repulsion(pos, repulsor, p) * p.repulsion_weight;
        }
        if let Some(attractor) = self.attractor {
            accel += rules::attraction(pos, attractor) * p.attraction_weight;
        }

        accel
    }

    fn integrate(&mut self, idx: usize) {
        let velocity = clamp_speed(
            self.store.velocity(idx) + self.store.acceleration(idx),
            self.params.min_speed,
            self.params.max_speed,
        );
        let position = self.store.position(idx) + velocity;

        self.store.set_velocity(idx, velocity);
        self.store.set_position(
            idx,
            Vec2::new(wrap(position.x, self.width), wrap(position.y, self.height)),
        );
    }
}

fn validate_bound(value: f32) -> FlockResult<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FlockError::InvalidBounds(value))
    }
}

// Clamp a velocity's magnitude into [min_speed, max_speed]. An exactly
// zero velocity has no heading to renormalize and passes through
// unchanged, so an unseeded agent stays parked instead of drifting in an
// arbitrary direction.
fn clamp_speed(velocity: Vec2, min_speed: f32, max_speed: f32) -> Vec2 {
    let speed = velocity.length();
    if speed == 0.0 {
        return velocity;
    }
    if speed < min_speed {
        velocity * (min_speed / speed)
    } else if speed > max_speed {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn clamp_speed_enforces_both_limits() {
        let slow = clamp_speed(Vec2::new(0.1, 0.0), 0.5, 6.0);
        assert_approx_eq!(slow.length(), 0.5, 1e-6);
        assert!(slow.x > 0.0, "heading must be preserved");

        let fast = clamp_speed(Vec2::new(30.0, 40.0), 0.5, 6.0);
        assert_approx_eq!(fast.length(), 6.0, 1e-5);
        assert_approx_eq!(fast.y / fast.x, 40.0 / 30.0, 1e-5);

        let cruising = Vec2::new(3.0, 0.0);
        assert_eq!(clamp_speed(cruising, 0.5, 6.0), cruising);
    }

    #[test]
    fn clamp_speed_leaves_exact_zero_alone() {
        assert_eq!(clamp_speed(Vec2::ZERO, 0.5, 6.0), Vec2::ZERO);
    }

    #[test]
    fn invalid_bounds_are_rejected_and_prior_retained() {
        let mut flock = Flock::new(1).unwrap();
        flock.set_width(640.0).unwrap();
        flock.set_height(480.0).unwrap();

        assert_eq!(flock.set_width(-1.0), Err(FlockError::InvalidBounds(-1.0)));
        assert!(flock.set_height(f32::NAN).is_err());
        assert!(flock.set_width(f32::INFINITY).is_err());

        assert_eq!(flock.width(), 640.0);
        assert_eq!(flock.height(), 480.0);
    }

    #[test]
    fn repulsor_and_attractor_toggle_and_overwrite() {
        let mut flock = Flock::new(0).unwrap();
        assert_eq!(flock.repulsor(), None);

        flock.set_repulsor(10.0, 20.0);
        flock.set_repulsor(30.0, 40.0);
        assert_eq!(flock.repulsor(), Some(Vec2::new(30.0, 40.0)));

        flock.unset_repulsor();
        assert_eq!(flock.repulsor(), None);

        flock.set_attractor(1.0, 2.0);
        assert_eq!(flock.attractor(), Some(Vec2::new(1.0, 2.0)));
        flock.unset_attractor();
        assert_eq!(flock.attractor(), None);
    }

    #[test]
    fn zero_agent_flock_updates_as_a_no_op() {
        let mut flock = Flock::new(0).unwrap();
        flock.set_width(100.0).unwrap();
        flock.set_height(100.0).unwrap();
        flock.update();
        assert!(flock.positions().is_empty());
    }

    #[test]
    fn construction_rejects_excessive_counts() {
        let over = crate::MAX_AGENT_COUNT + 1;
        assert_eq!(Flock::new(over).err(), Some(FlockError::InvalidCount(over)));
    }
}
