/*
 * Rule Parameters Module
 *
 * This module defines the RuleParams struct holding the radii, weights and
 * speed limits used by the neighbor rules and the integrator. Parameters
 * are fixed for a flock's lifetime; hosts that want different tuning pass
 * their own RuleParams to Flock::with_params at construction.
 */

// Parameters driving the flocking rules and the velocity clamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleParams {
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub repulsion_weight: f32,
    pub attraction_weight: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub repulsor_radius: f32,
    // Distance floor applied inside the repulsion falloff so the force
    // stays bounded as an agent reaches the repulsor itself.
    pub repulsor_min_distance: f32,
    // Cap on any single steering contribution before weighting.
    pub max_steer: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            separation_weight: 2.0,
            alignment_weight: 0.2,
            cohesion_weight: 0.05,
            repulsion_weight: 8.0,
            attraction_weight: 0.05,
            separation_radius: 15.0,
            alignment_radius: 50.0,
            cohesion_radius: 50.0,
            repulsor_radius: 100.0,
            repulsor_min_distance: 1.0,
            max_steer: 0.35,
            min_speed: 0.5,
            max_speed: 6.0,
        }
    }
}

impl RuleParams {
    // Largest radius any rule scans; useful for hosts sizing test fields
    // so that "far apart" really means out of every rule's reach.
    pub fn max_perception_radius(&self) -> f32 {
        self.separation_radius
            .max(self.alignment_radius)
            .max(self.cohesion_radius)
            .max(self.repulsor_radius)
    }
}
