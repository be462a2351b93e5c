use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;

use super::config::{select_config, ViewportState};
use super::field::ParticleField;
use super::surface::Surface;

/// Handle for one pending frame callback, as issued by the host scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleHandle(pub i32);

/// Scheduling port over the host's "run once before the next repaint"
/// primitive. Implementations use interior mutability so a shared scheduler
/// can be driven from inside its own callbacks.
pub trait FrameScheduler {
    fn schedule(&self, callback: Box<dyn FnOnce()>) -> ScheduleHandle;
    /// Cancel a pending callback. Handles that already fired are ignored.
    fn cancel(&self, handle: ScheduleHandle);
}

/// Render driver: owns the field and the last known pointer position, and
/// composes one frame out of the field's update, connection, and draw passes.
pub struct Animator {
    pub field: ParticleField,
    /// `None` until the first pointermove; no pointer links are drawn before
    /// the pointer position is known.
    pub pointer: Option<Vec2>,
}

impl Animator {
    /// Build a field sized for `viewport`, selecting the preset by width.
    pub fn new(viewport: ViewportState, seed: u64) -> Self {
        Self {
            field: ParticleField::new(select_config(viewport.width), viewport, seed),
            pointer: None,
        }
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = Some(position);
    }

    /// Re-initialization policy: any dimension change rebuilds the particle
    /// set with the preset for the new width, so stale positions never
    /// survive a shrink. Unchanged dimensions are a no-op.
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        let next = ViewportState::new(width, height);
        if next == self.field.viewport() {
            return;
        }
        let prev_class = self.field.viewport().device_class();
        self.field.reconfigure(select_config(next.width), next);
        if next.device_class() != prev_class {
            log::info!("[animator] device class now {:?}", next.device_class());
        }
    }

    /// Run one frame: clear, reset counters, integrate, connect, draw.
    /// Degenerate viewports and empty fields skip the frame entirely.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        let viewport = self.field.viewport();
        if viewport.is_degenerate() || self.field.particles.is_empty() {
            return;
        }
        surface.clear(viewport.width, viewport.height);
        self.field.begin_frame();
        self.field.integrate();
        self.field.draw_connections(self.pointer, surface);
        self.field.draw_particles(self.pointer, surface);
    }
}

/// Running animation loop. Dropping the handle does not stop the loop; call
/// [`LoopHandle::stop`] to cancel the pending frame.
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<ScheduleHandle>>>,
    cancel: Rc<dyn Fn(ScheduleHandle)>,
}

impl LoopHandle {
    /// Tear the loop down: the pending callback is cancelled synchronously
    /// and nothing is rescheduled after this returns.
    pub fn stop(&self) {
        self.stopped.set(true);
        if let Some(handle) = self.pending.take() {
            (self.cancel)(handle);
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Start the self-rescheduling frame loop: each callback runs one frame and
/// queues the next, holding no cross-frame state beyond the animator itself.
pub fn start_loop<S, D>(
    animator: Rc<RefCell<Animator>>,
    scheduler: Rc<S>,
    surface: Rc<RefCell<D>>,
) -> LoopHandle
where
    S: FrameScheduler + 'static,
    D: Surface + 'static,
{
    let stopped = Rc::new(Cell::new(false));
    let pending = Rc::new(Cell::new(None));
    schedule_frame(&animator, &scheduler, &surface, &stopped, &pending);
    LoopHandle {
        stopped,
        pending,
        cancel: {
            let scheduler = scheduler.clone();
            Rc::new(move |handle| scheduler.cancel(handle))
        },
    }
}

fn schedule_frame<S, D>(
    animator: &Rc<RefCell<Animator>>,
    scheduler: &Rc<S>,
    surface: &Rc<RefCell<D>>,
    stopped: &Rc<Cell<bool>>,
    pending: &Rc<Cell<Option<ScheduleHandle>>>,
) where
    S: FrameScheduler + 'static,
    D: Surface + 'static,
{
    let callback = {
        let animator = animator.clone();
        let scheduler = scheduler.clone();
        let surface = surface.clone();
        let stopped = stopped.clone();
        let pending = pending.clone();
        Box::new(move || {
            pending.set(None);
            if stopped.get() {
                return;
            }
            animator.borrow_mut().frame(&mut *surface.borrow_mut());
            if !stopped.get() {
                schedule_frame(&animator, &scheduler, &surface, &stopped, &pending);
            }
        })
    };
    let handle = scheduler.schedule(callback);
    pending.set(Some(handle));
}
