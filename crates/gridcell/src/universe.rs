//! `wasm-bindgen` surface for the browser front end.
//!
//! Indices crossing this boundary are the persisted ones: `type_index` into
//! [`Variant::ALL`], `dir_index` into [`Direction::ALL`].

use wasm_bindgen::prelude::*;

use crate::cell::{Coord, Direction, Variant};
use crate::config::{Bounds, SimulationConfig};
use crate::sim::Simulation;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("gridcell module initialized");
}

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
}

#[wasm_bindgen]
impl Universe {
    /// A square world spanning `min..=max` on both axes.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(min: i32, max: i32) -> Self {
        let config = SimulationConfig {
            bounds: Bounds::square(min, max),
            ..SimulationConfig::default()
        };
        Self {
            sim: Simulation::new(config),
        }
    }

    /// Returns false if the edit was refused.
    pub fn place(&mut self, type_index: u8, x: i32, y: i32, dir_index: u8) -> bool {
        let (Some(variant), Some(facing)) =
            (Variant::from_index(type_index), Direction::from_index(dir_index))
        else {
            return false;
        };
        self.sim.place(variant, Coord::new(x, y), facing).is_some()
    }

    pub fn remove(&mut self, x: i32, y: i32) -> bool {
        self.sim.remove(Coord::new(x, y)).is_some()
    }

    pub fn play(&mut self) {
        self.sim.play();
    }

    pub fn pause(&mut self) {
        self.sim.pause();
    }

    pub fn step(&mut self) {
        self.sim.step();
    }

    pub fn stop(&mut self) {
        self.sim.stop();
    }

    pub fn clear(&mut self) {
        self.sim.clear_all();
    }

    /// Feed elapsed seconds; returns the ticks run.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.sim.advance(dt)
    }

    #[wasm_bindgen(js_name = isRunning)]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    #[wasm_bindgen(js_name = isInBounds)]
    #[must_use]
    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        self.sim.grid().is_in_bounds(Coord::new(x, y))
    }

    #[wasm_bindgen(js_name = placementDir)]
    #[must_use]
    pub fn placement_dir(&self) -> u8 {
        self.sim.placement_facing().index()
    }

    #[wasm_bindgen(js_name = rotatePlacementCw)]
    pub fn rotate_placement_cw(&mut self) {
        self.sim.rotate_placement_cw();
    }

    #[wasm_bindgen(js_name = rotatePlacementCcw)]
    pub fn rotate_placement_ccw(&mut self) {
        self.sim.rotate_placement_ccw();
    }

    /// Flat `[type, x, y, dir]` quadruples, one per live cell.
    #[must_use]
    pub fn cells(&self) -> Vec<i32> {
        self.sim
            .cells()
            .flat_map(|cell| {
                [
                    i32::from(cell.variant.index()),
                    cell.position.x,
                    cell.position.y,
                    i32::from(cell.facing.index()),
                ]
            })
            .collect()
    }

    /// Flat `[x, y, t, rotation, target_rotation]` per live cell, in
    /// [`Universe::cells`] order.
    #[wasm_bindgen(js_name = renderState)]
    #[must_use]
    pub fn render_state(&self) -> Vec<f32> {
        self.sim
            .cells()
            .flat_map(|cell| {
                let (x, y) = cell.render.point();
                [x, y, cell.render.t, cell.render.rotation, cell.render.target_rotation]
            })
            .collect()
    }

    /// # Errors
    /// Forwards a serialization failure to JS.
    pub fn save(&self) -> Result<String, JsError> {
        Ok(self.sim.save()?)
    }

    /// Returns false while running.
    ///
    /// # Errors
    /// Forwards a rejected file to JS; the grid is left untouched.
    pub fn load(&mut self, json: &str) -> Result<bool, JsError> {
        Ok(self.sim.load(json)?)
    }

    #[wasm_bindgen(js_name = variantCount)]
    #[must_use]
    pub fn variant_count() -> u8 {
        Variant::ALL.len() as u8
    }

    #[wasm_bindgen(js_name = variantLabel)]
    #[must_use]
    pub fn variant_label(type_index: u8) -> Option<String> {
        Variant::from_index(type_index).map(|v| v.label().to_owned())
    }

    #[wasm_bindgen(js_name = variantDescription)]
    #[must_use]
    pub fn variant_description(type_index: u8) -> Option<String> {
        Variant::from_index(type_index).map(|v| v.description().to_owned())
    }

    #[wasm_bindgen(js_name = variantImageKey)]
    #[must_use]
    pub fn variant_image_key(type_index: u8) -> Option<String> {
        Variant::from_index(type_index).map(|v| v.image_key().to_owned())
    }
}
