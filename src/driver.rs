//! Frame driver
//!
//! One call to `run_once` is one frame. Scheduling the next frame belongs to
//! the host (an animation-frame callback on web, a plain loop natively).

use glam::Vec2;

use crate::Settings;
use crate::consts::LABEL_FONT;
use crate::renderer::Surface;
use crate::sim::{FrameInput, ParticleField};

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPhase {
    /// Field built, loop not started yet
    Idle,
    /// Producing a frame on every `run_once`
    Running,
}

/// Owns the particle field and paints it once per frame
pub struct FrameDriver {
    field: ParticleField,
    settings: Settings,
    phase: DriverPhase,
    frame_count: u64,
}

impl FrameDriver {
    pub fn new(settings: Settings, seed: u64) -> Self {
        let field = ParticleField::new(&settings.field, seed);
        Self::with_field(field, settings)
    }

    /// Drive an already-built field
    pub fn with_field(field: ParticleField, settings: Settings) -> Self {
        Self {
            field,
            settings,
            phase: DriverPhase::Idle,
            frame_count: 0,
        }
    }

    /// Idle -> Running; call once the pointer observer is installed
    pub fn start(&mut self) {
        if self.phase == DriverPhase::Running {
            return;
        }
        self.phase = DriverPhase::Running;
        log::info!(
            "Frame driver running ({} particles, seed {})",
            self.field.len(),
            self.field.seed()
        );
    }

    /// Produce one frame. Returns false (and draws nothing) while idle.
    pub fn run_once<S: Surface + ?Sized>(&mut self, surface: &mut S, input: &FrameInput) -> bool {
        if self.phase != DriverPhase::Running {
            return false;
        }

        surface.clear();
        let size = surface.size();
        surface.fill_rect(Vec2::ZERO, size, self.settings.background);

        self.field.update(input.pointer);
        self.field.draw(surface, self.settings.particle_color);

        if self.settings.show_pointer_label {
            if let Some(pointer) = input.pointer {
                let label = format!("{}, {}", pointer.x, pointer.y);
                surface.draw_text(&label, pointer, LABEL_FONT, self.settings.label_color);
            }
        }

        self.frame_count += 1;
        true
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Color, DrawCommand, RecordingSurface};
    use crate::sim::FieldConfig;

    fn small_driver() -> FrameDriver {
        let settings = Settings {
            field: FieldConfig {
                rows: 2,
                columns: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        FrameDriver::new(settings, 5)
    }

    #[test]
    fn test_idle_driver_draws_nothing() {
        let mut driver = small_driver();
        let mut surface = RecordingSurface::new(100.0, 50.0);

        assert_eq!(driver.phase(), DriverPhase::Idle);
        assert!(!driver.run_once(&mut surface, &FrameInput::default()));
        assert!(surface.commands().is_empty());
        assert_eq!(driver.frame_count(), 0);
    }

    #[test]
    fn test_frame_order() {
        let mut driver = small_driver();
        driver.start();
        assert_eq!(driver.phase(), DriverPhase::Running);

        let mut surface = RecordingSurface::new(100.0, 50.0);
        assert!(driver.run_once(&mut surface, &FrameInput::at(200.0, 100.0)));

        let commands = surface.commands();
        assert_eq!(commands.len(), 1 + 1 + 6 + 1);
        assert_eq!(commands[0], DrawCommand::Clear);
        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                origin: Vec2::ZERO,
                size: Vec2::new(100.0, 50.0),
                color: Color::BLACK,
            }
        );
        for (cmd, p) in commands[2..8].iter().zip(driver.field().particles()) {
            assert_eq!(
                *cmd,
                DrawCommand::FillCircle {
                    center: p.pos,
                    radius: 1.0,
                    color: Color::WHITE,
                }
            );
        }
        assert_eq!(
            commands[8],
            DrawCommand::Text {
                text: "200, 100".to_string(),
                pos: Vec2::new(200.0, 100.0),
                font: "18px Arial".to_string(),
                color: Color::BLACK,
            }
        );
        assert_eq!(driver.frame_count(), 1);
    }

    #[test]
    fn test_no_label_without_pointer() {
        let mut driver = small_driver();
        driver.start();

        let mut surface = RecordingSurface::new(100.0, 50.0);
        driver.run_once(&mut surface, &FrameInput::default());
        assert_eq!(surface.circle_count(), 6);
        assert_eq!(surface.last_text(), None);
    }

    #[test]
    fn test_label_can_be_disabled() {
        let mut settings = small_driver().settings().clone();
        settings.show_pointer_label = false;
        let mut driver = FrameDriver::new(settings, 5);
        driver.start();

        let mut surface = RecordingSurface::new(100.0, 50.0);
        driver.run_once(&mut surface, &FrameInput::at(1.5, 2.0));
        assert_eq!(surface.last_text(), None);
    }

    #[test]
    fn test_pointer_feeds_the_field() {
        let mut driver = small_driver();
        driver.start();
        let mut surface = RecordingSurface::new(100.0, 50.0);

        // Within reach of the first particle only; its neighbours sit 10 away
        driver.run_once(&mut surface, &FrameInput::at(-6.0, -6.0));
        let particles = driver.field().particles();
        assert_ne!(particles[0].vel, Vec2::ZERO);
        for p in &particles[1..] {
            assert_eq!(p.vel, Vec2::ZERO);
        }

        // Next frame moves the scattered particle by its impulse
        let kicked = particles[0].vel;
        driver.run_once(&mut surface, &FrameInput::default());
        assert_eq!(driver.field().particles()[0].pos, kicked);
        assert_eq!(driver.frame_count(), 2);
    }

    #[test]
    fn test_fractional_label() {
        let mut driver = small_driver();
        driver.start();
        let mut surface = RecordingSurface::new(100.0, 50.0);
        driver.run_once(&mut surface, &FrameInput::at(12.5, 40.0));
        assert_eq!(surface.last_text(), Some("12.5, 40"));
    }
}
