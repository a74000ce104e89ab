//! Particle Scatter entry point
//!
//! Handles platform-specific initialization and drives the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::MouseEvent;

    use particle_scatter::platform::{PointerTracker, surface_local_position};
    use particle_scatter::renderer::CanvasSurface;
    use particle_scatter::{FrameDriver, Settings, Surface, SurfaceError};

    /// Everything the frame callback and the input observer share
    struct App {
        driver: FrameDriver,
        surface: CanvasSurface,
        pointer: PointerTracker,
    }

    impl App {
        /// Snapshot the pointer once, then run a single frame with it
        fn frame(&mut self) {
            let input = self.pointer.snapshot();
            self.driver.run_once(&mut self.surface, &input);
        }
    }

    pub fn run() -> Result<(), SurfaceError> {
        let surface = CanvasSurface::from_element_id("canvas")?;
        let size = surface.size();
        log::info!("Canvas sized to {}x{}", size.x, size.y);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let driver = FrameDriver::new(settings, seed);
        log::info!(
            "Field initialized: {}x{} particles, seed {}",
            driver.field().rows(),
            driver.field().columns(),
            seed
        );

        let app = Rc::new(RefCell::new(App {
            driver,
            surface,
            pointer: PointerTracker::new(),
        }));

        setup_pointer_observer(app.clone());

        app.borrow_mut().driver.start();
        request_animation_frame(app);

        log::info!("Particle Scatter running!");
        Ok(())
    }

    fn setup_pointer_observer(app: Rc<RefCell<App>>) {
        let canvas = app.borrow().surface.canvas().clone();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let scroll = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .map(|root| Vec2::new(root.scroll_left() as f32, root.scroll_top() as f32))
                .unwrap_or(Vec2::ZERO);

            let pos = surface_local_position(
                Vec2::new(event.client_x() as f32, event.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                scroll,
            );
            app.borrow_mut().pointer.record(pos);
        });
        let _ = canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        // Next frame is requested before this one does any work
        request_animation_frame(app.clone());
        app.borrow_mut().frame();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Particle Scatter starting...");

    if let Err(e) = wasm_app::run() {
        log::error!("Startup failed: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use particle_scatter::sim::FrameInput;
    use particle_scatter::{FrameDriver, RecordingSurface, Settings};

    env_logger::init();
    log::info!("Particle Scatter (native) starting...");
    log::info!("Native mode renders headless - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let extent = settings.field.extent();
    let mut surface = RecordingSurface::new(extent.x, extent.y);
    let mut driver = FrameDriver::new(settings, 0x5eed);
    driver.start();

    // Sweep the pointer along the middle row, then release it
    let frames = 240;
    for frame in 0..frames {
        let input = if frame < frames / 2 {
            let t = frame as f32 / (frames / 2) as f32;
            FrameInput {
                pointer: Some(Vec2::new(t * extent.x, extent.y / 2.0)),
            }
        } else {
            FrameInput::default()
        };
        driver.run_once(&mut surface, &input);
    }

    let field = driver.field();
    let displaced = field
        .particles()
        .iter()
        .filter(|p| p.pos != p.origin())
        .count();
    log::info!(
        "{} frames, {} draw commands per frame",
        driver.frame_count(),
        surface.commands().len()
    );
    println!(
        "{} particles: {} displaced, {} diverged",
        field.len(),
        displaced,
        field.diverged_count()
    );
}
