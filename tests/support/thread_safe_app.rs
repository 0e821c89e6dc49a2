//! Mutex-guarded Bevy `App` shared between rspec examples.

use bevy::prelude::App;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// An `App` that may cross into rspec closures.
#[derive(Debug)]
pub struct ThreadSafeApp(pub App);

impl Deref for ThreadSafeApp {
    type Target = App;

    fn deref(&self) -> &App {
        &self.0
    }
}

impl DerefMut for ThreadSafeApp {
    fn deref_mut(&mut self) -> &mut App {
        &mut self.0
    }
}

// SAFETY: rspec requires `Send + Sync` suite state but runs these suites
// serially, and every access to the inner `App` goes through the mutex in
// `SharedApp`.
unsafe impl Send for ThreadSafeApp {}
unsafe impl Sync for ThreadSafeApp {}

/// Shared handle to a wrapped app.
pub type SharedApp = Arc<Mutex<ThreadSafeApp>>;

/// Wraps `app` for sharing.
pub fn share(app: App) -> SharedApp {
    Arc::new(Mutex::new(ThreadSafeApp(app)))
}

/// Locks the shared app, recovering from a poisoned mutex so one failed
/// example does not hide the rest.
pub fn lock_app(app: &SharedApp) -> MutexGuard<'_, ThreadSafeApp> {
    app.lock().unwrap_or_else(PoisonError::into_inner)
}
