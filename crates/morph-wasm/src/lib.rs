use std::sync::Arc;

use morph_core::transform::GpuVertex;
use morph_core::{Gesture, HandMailbox, HandState, MorphConfig, MorphSystem};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct MorphWorld {
    system: MorphSystem,
    mailbox: Arc<HandMailbox>,
}

#[wasm_bindgen]
impl MorphWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: usize) -> Result<MorphWorld, JsValue> {
        let config = MorphConfig {
            particle_count,
            ..MorphConfig::default()
        };
        let system = MorphSystem::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mailbox = system.mailbox();

        web_sys::console::log_1(
            &format!("WASM MorphWorld created: {} particles", particle_count).into()
        );

        let mut world = MorphWorld { system, mailbox };
        world.step(0.0);
        Ok(world)
    }

    /// Advance one frame and refresh the vertex buffer. Returns the time
    /// spent in milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> f32 {
        let start = js_sys::Date::now();
        self.system.frame(dt);
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    /// Latest hand reading. `gesture`: 0 = none, 1 = open, 2 = fist, 3 = pinch.
    #[wasm_bindgen]
    pub fn set_hand(&mut self, present: bool, gesture: u8, x: f32, y: f32) {
        let gesture = match gesture {
            1 => Gesture::Open,
            2 => Gesture::Fist,
            3 => Gesture::Pinch,
            _ => Gesture::None,
        };
        self.mailbox.publish(HandState {
            is_present: present,
            gesture,
            position: glam::Vec2::new(x, y),
        });
    }

    #[wasm_bindgen]
    pub fn press_advance_key(&mut self) -> bool {
        self.system.press_advance_key()
    }

    #[wasm_bindgen]
    pub fn set_aspect(&mut self, aspect: f32) {
        self.system.camera_mut().set_aspect(aspect);
    }

    #[wasm_bindgen]
    pub fn vertex_buffer_ptr(&self) -> *const f32 {
        self.system.vertices().as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn vertex_buffer_byte_length(&self) -> usize {
        bytemuck::cast_slice::<GpuVertex, u8>(self.system.vertices()).len()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.system.vertices().len()
    }

    /// Index of the shape at rest (0 = sphere ... 5 = dna).
    #[wasm_bindgen]
    pub fn current_shape(&self) -> u32 {
        self.system.morph().current().index() as u32
    }

    #[wasm_bindgen]
    pub fn is_morphing(&self) -> bool {
        self.system.morph().is_morphing()
    }

    /// Changes whenever rest or target positions were rewritten.
    #[wasm_bindgen]
    pub fn buffer_generation(&self) -> u64 {
        self.system.morph().buffer().generation()
    }
}
