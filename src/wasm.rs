/*
 * Wasm Bindings Module
 *
 * Browser-host bindings for the engine. The JS side constructs a flock,
 * seeds the Float32Array views over linear memory, then calls update()
 * once per animation frame and redraws from the same views. Views must be
 * re-created after any call that may grow linear memory.
 */

use wasm_bindgen::prelude::*;

use crate::error::FlockError;
use crate::flock::Flock;

#[wasm_bindgen]
pub struct BoidFlock {
    inner: Flock,
}

#[wasm_bindgen]
impl BoidFlock {
    #[wasm_bindgen(constructor)]
    pub fn new(count: usize) -> Result<BoidFlock, JsError> {
        let inner = Flock::new(count).map_err(to_js_error)?;
        Ok(BoidFlock { inner })
    }

    pub fn count(&self) -> usize {
        self.inner.count()
    }

    pub fn positions(&self) -> js_sys::Float32Array {
        // UNSAFETY: views into WebAssembly memory are only valid so long
        // as the backing buffer is not resized. The host re-creates its
        // views every frame and may mutate them for seeding.
        unsafe { js_sys::Float32Array::view(self.inner.positions()) }
    }

    pub fn velocities(&self) -> js_sys::Float32Array {
        // UNSAFETY: see positions().
        unsafe { js_sys::Float32Array::view(self.inner.velocities()) }
    }

    pub fn set_width(&mut self, width: f32) -> Result<(), JsError> {
        self.inner.set_width(width).map_err(to_js_error)
    }

    pub fn set_height(&mut self, height: f32) -> Result<(), JsError> {
        self.inner.set_height(height).map_err(to_js_error)
    }

    pub fn set_repulsor(&mut self, x: f32, y: f32) {
        self.inner.set_repulsor(x, y);
    }

    pub fn unset_repulsor(&mut self) {
        self.inner.unset_repulsor();
    }

    pub fn set_attractor(&mut self, x: f32, y: f32) {
        self.inner.set_attractor(x, y);
    }

    pub fn unset_attractor(&mut self) {
        self.inner.unset_attractor();
    }

    pub fn update(&mut self) {
        self.inner.update();
    }
}

fn to_js_error(err: FlockError) -> JsError {
    JsError::new(&err.to_string())
}
