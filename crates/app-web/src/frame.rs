use crate::dom;
use crate::input;
use crate::overlay;
use crate::render;
use app_core::{Camera, FrameContext, Scene, SelectionView};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback touches. Owned by the RAF loop; torn
/// down with the page, which also cancels any pending selection transition
/// (the deadline is plain data inside `SelectionView`).
pub struct FrameLoop<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub selection: Rc<RefCell<SelectionView>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Rc<Instant>,
}

impl<'a> FrameLoop<'a> {
    pub fn frame(&mut self) {
        let elapsed_sec = self.started.elapsed().as_secs_f64();
        let pointer = {
            let ms = self.mouse.borrow();
            input::pointer_ndc(&self.canvas, &ms)
        };
        let ctx = FrameContext::new(elapsed_sec as f32, pointer);
        self.scene.borrow_mut().update(&ctx);

        // Drive the delayed screen flip; on the single firing frame, swap
        // the DOM overlay to the welcome panel.
        let flipped = self.selection.borrow_mut().advance(elapsed_sec);
        if flipped {
            if let (Some(doc), Some(role)) = (
                dom::window_document(),
                self.selection.borrow().selected_role(),
            ) {
                overlay::show_welcome(&doc, role);
            }
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let camera = Camera::landing(g.aspect());
            let composed = self.scene.borrow().compose();
            if let Err(e) = g.render(&camera, &composed) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_loop: Rc<RefCell<FrameLoop<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let loop_tick = frame_loop.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        loop_tick.borrow_mut().frame();
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
