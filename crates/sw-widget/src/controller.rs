//! Reactive controller: one per widget instance.

use crate::debounce::Debouncer;
use crate::host::{InputSource, Renderer};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use sw_calc::{ControllerMemory, Engine};
use sw_core::{DisplayState, InputField, SaltConfig, SALT_CONFIG};
use uuid::Uuid;

/// Shown in place of the widget when it cannot start.
pub const UNAVAILABLE_MESSAGE: &str = "Calculator temporarily unavailable. Please refresh the page.";

/// Lifecycle of a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetStatus {
    /// Missing display handles or failed start; every event is ignored.
    Uninitialized,
    Ready,
}

struct WidgetCore<S, R> {
    source: S,
    renderer: R,
    engine: Engine,
    memory: ControllerMemory,
    rng: Box<dyn RngCore + Send>,
    last_state: Option<DisplayState>,
}

impl<S: InputSource, R: Renderer> WidgetCore<S, R> {
    fn run(&mut self) -> DisplayState {
        let source = &self.source;
        let state = self.engine.recompute(|f| source.read(f), &mut self.memory, &mut *self.rng);
        self.renderer.render(&state);
        self.last_state = Some(state.clone());
        state
    }
}

enum WidgetState<S, R> {
    Uninitialized,
    Ready {
        core: Arc<Mutex<WidgetCore<S, R>>>,
        debouncer: Debouncer,
    },
}

/// A salinity calculator bound to one set of sliders and one display.
pub struct SalinityWidget<S, R> {
    id: Uuid,
    state: WidgetState<S, R>,
}

fn lock<T>(m: &Arc<Mutex<T>>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S, R> SalinityWidget<S, R>
where
    S: InputSource + 'static,
    R: Renderer + 'static,
{
    /// Bind to the host's handles and render the initial state.
    ///
    /// A missing handle leaves the widget inert. A start failure is reported
    /// through the renderer's fallback notice. Must be called inside a tokio
    /// runtime for the drag debounce.
    pub fn attach(
        source: Option<S>,
        renderer: Option<R>,
        config: Arc<SaltConfig>,
        rng: Box<dyn RngCore + Send>,
    ) -> Self {
        let id = Uuid::new_v4();
        let (Some(source), Some(renderer)) = (source, renderer) else {
            tracing::warn!(widget = %id, "salinity widget display handles not found");
            return Self { id, state: WidgetState::Uninitialized };
        };

        let started = Engine::new(config).and_then(|engine| {
            let delay = Duration::from_millis(engine.config().widget.debounce_ms);
            Ok((engine, Debouncer::new(delay)?))
        });
        let (engine, debouncer) = match started {
            Ok(parts) => parts,
            Err(e) => {
                tracing::error!(widget = %id, error = %e, "salinity widget initialization failed");
                renderer.show_unavailable(UNAVAILABLE_MESSAGE);
                return Self { id, state: WidgetState::Uninitialized };
            }
        };

        let mut core = WidgetCore {
            source,
            renderer,
            engine,
            memory: ControllerMemory::new(),
            rng,
            last_state: None,
        };
        let initial = core.run();
        tracing::info!(widget = %id, tier = %initial.tier, "salinity widget ready");

        Self {
            id,
            state: WidgetState::Ready { core: Arc::new(Mutex::new(core)), debouncer },
        }
    }

    /// [`attach`](Self::attach) with the shared default tables and an
    /// entropy-seeded random source.
    pub fn attach_default(source: Option<S>, renderer: Option<R>) -> Self {
        Self::attach(
            source,
            renderer,
            Arc::new(SALT_CONFIG.clone()),
            Box::new(StdRng::from_entropy()),
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> WidgetStatus {
        match self.state {
            WidgetState::Uninitialized => WidgetStatus::Uninitialized,
            WidgetState::Ready { .. } => WidgetStatus::Ready,
        }
    }

    /// Most recently rendered state.
    pub fn last_state(&self) -> Option<DisplayState> {
        match &self.state {
            WidgetState::Uninitialized => None,
            WidgetState::Ready { core, .. } => lock(core).last_state.clone(),
        }
    }

    /// Whether a drag recompute is waiting on the debounce timer.
    pub fn has_pending(&self) -> bool {
        match &self.state {
            WidgetState::Uninitialized => false,
            WidgetState::Ready { debouncer, .. } => debouncer.is_pending(),
        }
    }

    /// Continuous drag on a slider: recompute once the burst settles,
    /// reading whatever the sliders hold at that moment.
    pub fn on_input(&mut self, field: InputField) {
        let WidgetState::Ready { core, debouncer } = &mut self.state else {
            return;
        };
        tracing::trace!(widget = %self.id, %field, "drag input");
        let core = Arc::clone(core);
        debouncer.schedule(move || {
            lock(&core).run();
        });
    }

    /// Discrete commit (release, arrow key): recompute now and drop any
    /// pending drag recompute.
    pub fn on_commit(&mut self, field: InputField) -> Option<DisplayState> {
        let WidgetState::Ready { core, debouncer } = &mut self.state else {
            return None;
        };
        if debouncer.cancel() {
            tracing::trace!(widget = %self.id, %field, "commit superseded pending drag recompute");
        }
        Some(lock(core).run())
    }
}
