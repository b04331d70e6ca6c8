use instant::Instant;
use site_core::Scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub ctx: web::CanvasRenderingContext2d,
    pub running: Rc<Cell<bool>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut scene = self.scene.borrow_mut();
        scene.tick(dt);
        let plan = scene.frame();
        let dpr = scene.viewport().dpr;
        drop(scene);

        render::draw(&self.ctx, &plan, dpr);
    }
}

/// Drive the frame loop from requestAnimationFrame. The closure reschedules
/// itself only while `running` holds true, so flipping the flag is enough to
/// tear the loop down at page hide.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let running = frame_ctx.borrow().running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Stop the loop when the page is being torn down.
pub fn wire_stop_on_pagehide(running: Rc<Cell<bool>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || {
            running.set(false);
            log::info!("frame loop stopped");
        }) as Box<dyn FnMut()>);
        let _ = window
            .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
