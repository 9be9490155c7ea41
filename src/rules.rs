/*
 * Neighbor Rules Module
 *
 * Stateless force functions for one agent given read-only access to the
 * full store. Each rule scans every other agent (O(count) per agent,
 * O(count^2) per tick), which is the accepted cost for the small flocks
 * this engine targets. Weights are applied by the controller when the
 * contributions are summed.
 */

use glam::Vec2;

use crate::params::RuleParams;
use crate::store::AgentStore;

/// Steer away from neighbours that encroach within the separation radius,
/// weighted inversely by distance so the closest push hardest.
pub fn separation(store: &AgentStore, idx: usize, params: &RuleParams) -> Vec2 {
    let pos = store.position(idx);
    let mut steer = Vec2::ZERO;

    for other in 0..store.count() {
        if other == idx {
            continue;
        }
        let offset = pos - store.position(other);
        let d = offset.length();
        if d > 0.0 && d < params.separation_radius {
            steer += (offset / d) / d;
        }
    }

    steer
}

/// Steer towards the average heading of neighbours within the alignment
/// radius, capped at the steering limit.
pub fn alignment(store: &AgentStore, idx: usize, params: &RuleParams) -> Vec2 {
    let pos = store.position(idx);
    let mut sum = Vec2::ZERO;
    let mut neighbours = 0;

    for other in 0..store.count() {
        if other == idx {
            continue;
        }
        if pos.distance(store.position(other)) < params.alignment_radius {
            sum += store.velocity(other);
            neighbours += 1;
        }
    }

    if neighbours == 0 {
        return Vec2::ZERO;
    }
    (sum / neighbours as f32).clamp_length_max(params.max_steer)
}

/// Steer towards the centre of the neighbourhood within the cohesion
/// radius, capped at the steering limit.
pub fn cohesion(store: &AgentStore, idx: usize, params: &RuleParams) -> Vec2 {
    let pos = store.position(idx);
    let mut sum = Vec2::ZERO;
    let mut neighbours = 0;

    for other in 0..store.count() {
        if other == idx {
            continue;
        }
        if pos.distance(store.position(other)) < params.cohesion_radius {
            sum += store.position(other);
            neighbours += 1;
        }
    }

    if neighbours == 0 {
        return Vec2::ZERO;
    }
    let centroid = sum / neighbours as f32;
    (centroid - pos).clamp_length_max(params.max_steer)
}

/// Push away from the repulsor point, magnitude inversely proportional to
/// distance, with a floor on the distance so the force stays bounded.
/// Zero outside the repulsor radius or exactly on the repulsor (no
/// defined "away" direction there).
pub fn repulsion(pos: Vec2, repulsor: Vec2, params: &RuleParams) -> Vec2 {
    let offset = pos - repulsor;
    let d = offset.length();
    if d == 0.0 || d >= params.repulsor_radius {
        return Vec2::ZERO;
    }
    (offset / d) / d.max(params.repulsor_min_distance)
}

/// Unit pull towards the attractor point, independent of distance; zero
/// when the agent already sits on it.
pub fn attraction(pos: Vec2, attractor: Vec2) -> Vec2 {
    let offset = attractor - pos;
    let d = offset.length();
    if d == 0.0 {
        return Vec2::ZERO;
    }
    offset / d
}
