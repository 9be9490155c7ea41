/*
 * Boundary Module
 *
 * Wrap-around policy keeping agents inside [0, width] x [0, height].
 * Wrapping preserves velocity, so the field behaves like a torus and
 * steering forces can never push an agent permanently off-screen.
 */

/// Wrap a single coordinate into `[0, bound]` by shifting it one full
/// bound. A coordinate more than one bound out of range needs another
/// tick to come back, but the speed clamp keeps per-tick travel well
/// under any realistic bound.
pub fn wrap(coord: f32, bound: f32) -> f32 {
    if coord > bound {
        coord - bound
    } else if coord < 0.0 {
        coord + bound
    } else {
        coord
    }
}
