//! Dispatch runtime.

use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex, RwLock};

use super::action::Action;
use super::reducer::reduce;
use super::state::AppState;

/// What effects need from the surrounding runtime: a way to submit actions
/// and a way to read the current state.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);

    /// Snapshot of the current state.
    fn state(&self) -> AppState;
}

type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

/// Thread-safe state container.
///
/// A dispatch reduces and then notifies every subscriber before the next
/// dispatch from another thread may start, so subscribers see states in
/// the order they were produced. The state lock is released before
/// notifying; subscribers may read the state or dispatch again. A nested
/// dispatch finishes its own notifications before the outer one resumes.
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
    serial: Arc<ReentrantMutex<()>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            listeners: Arc::default(),
            serial: Arc::new(ReentrantMutex::new(())),
        }
    }

    /// Call `listener` with the new state after every dispatch.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        self.listeners.lock().push(Arc::new(listener));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::with_state(AppState::default())
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        tracing::trace!(action = action.kind(), "dispatch");
        let _serial = self.serial.lock();

        let next = {
            let mut guard = self.state.write();
            let current = std::mem::take(&mut *guard);
            *guard = reduce(current, action);
            guard.clone()
        };

        let listeners: Vec<Listener> = self.listeners.lock().clone();
        for listener in listeners {
            listener(&next);
        }
    }

    fn state(&self) -> AppState {
        self.state.read().clone()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.state.read())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}
