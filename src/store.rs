/*
 * Agent Store Module
 *
 * This module owns the contiguous numeric state for every agent. Positions
 * and velocities live in parallel interleaved arrays [x0, y0, x1, y1, ...]
 * so a host can read them as one packed f32 sequence without copying.
 * The store owns layout and lifetime only; all mutation of meaning happens
 * in the flock controller.
 */

use glam::Vec2;

use crate::error::{FlockError, FlockResult};
use crate::MAX_AGENT_COUNT;

pub struct AgentStore {
    count: usize,
    positions: Vec<f32>,
    velocities: Vec<f32>,
    // Scratch buffer for the tick's force accumulation; never exported.
    accelerations: Vec<f32>,
}

impl AgentStore {
    // Reserve buffers for a fixed agent count. Content is zeroed, not
    // random: seeding initial state is the host's responsibility.
    pub fn allocate(count: usize) -> FlockResult<AgentStore> {
        if count > MAX_AGENT_COUNT {
            return Err(FlockError::InvalidCount(count));
        }

        Ok(AgentStore {
            count,
            positions: vec![0.0; 2 * count],
            velocities: vec![0.0; 2 * count],
            accelerations: vec![0.0; 2 * count],
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [f32] {
        &mut self.positions
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    pub fn velocities_mut(&mut self) -> &mut [f32] {
        &mut self.velocities
    }

    // Raw base addresses for external zero-copy readers. Valid only until
    // the next mutating call on the owning flock.
    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    pub fn velocities_ptr(&self) -> *const f32 {
        self.velocities.as_ptr()
    }

    // Typed per-agent views used by the rules and the integrator.
    pub fn position(&self, idx: usize) -> Vec2 {
        Vec2::new(self.positions[2 * idx], self.positions[2 * idx + 1])
    }

    pub fn velocity(&self, idx: usize) -> Vec2 {
        Vec2::new(self.velocities[2 * idx], self.velocities[2 * idx + 1])
    }

    pub(crate) fn acceleration(&self, idx: usize) -> Vec2 {
        Vec2::new(self.accelerations[2 * idx], self.accelerations[2 * idx + 1])
    }

    pub(crate) fn set_position(&mut self, idx: usize, value: Vec2) {
        self.positions[2 * idx] = value.x;
        self.positions[2 * idx + 1] = value.y;
    }

    pub(crate) fn set_velocity(&mut self, idx: usize, value: Vec2) {
        self.velocities[2 * idx] = value.x;
        self.velocities[2 * idx + 1] = value.y;
    }

    pub(crate) fn set_acceleration(&mut self, idx: usize, value: Vec2) {
        self.accelerations[2 * idx] = value.x;
        self.accelerations[2 * idx + 1] = value.y;
    }
}
