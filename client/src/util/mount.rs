//! Mount tracking for async work started by a component.
//!
//! A submission finishing after its page has unmounted must not touch the
//! page's disposed signals or navigate. Tasks check the guard before applying
//! their result.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    /// A guard that is not tied to any component.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// A guard cleared when the current reactive owner is cleaned up.
    pub fn install() -> Self {
        let guard = Self::new();
        let on_unmount = guard.clone();
        on_cleanup(move || on_unmount.unmount());
        guard
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
