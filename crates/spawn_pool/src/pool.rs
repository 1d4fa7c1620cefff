//! Core pool implementation
//!
//! The pool owns every instance it creates and partitions them at all
//! times into an available stack (ready to hand out, LIFO so the most
//! recently returned, still-warm instance is reused first) and an active
//! set (currently checked out). Checked-out instances are addressed
//! through [`PoolHandle`]s backed by a slot map, so no instance is ever
//! aliased outside the pool's bookkeeping.

use crate::config::PoolConfig;
use crate::factory::Factory;
use crate::handle::PoolHandle;
use crate::poolable::Poolable;
use slotmap::SlotMap;
use std::collections::HashSet;
use thiserror::Error;

/// Pool operation errors
#[derive(Error, Debug)]
pub enum PoolError {
    /// The factory failed to construct an instance
    ///
    /// The pool itself stays valid; a later spawn may retry and succeed.
    #[error("failed to create pooled instance: {0}")]
    CreationFailed(String),

    /// The handle is not currently checked out from this pool
    ///
    /// Returned for double check-ins and handles issued by another pool.
    #[error("handle is not active in this pool")]
    NotActive,
}

/// Observer for pool lifecycle events.
///
/// Both hooks are fire-and-forget observability seams: they must not
/// panic and they have no effect on the pool's control flow.
pub trait PoolEvents {
    /// Called after the pool grows, with the new total capacity.
    fn on_grown(&mut self, new_capacity: usize) {
        let _ = new_capacity;
    }

    /// Called when a spawn finds the pool empty and growth disabled.
    fn on_depleted(&mut self, capacity: usize) {
        let _ = capacity;
    }
}

/// Default observer that reports through the `log` crate.
#[derive(Debug, Default)]
pub struct LogEvents;

impl PoolEvents for LogEvents {
    fn on_grown(&mut self, new_capacity: usize) {
        log::warn!("Refilled pool. New size = {}", new_capacity);
    }

    fn on_depleted(&mut self, capacity: usize) {
        log::error!("Pool capacity [{}] reached", capacity);
    }
}

/// A pool of reusable instances created by a factory.
///
/// Single-threaded by construction: all operations take `&mut self`,
/// complete synchronously, and never block. Wrap the whole pool in a lock
/// if it must cross threads.
pub struct Pool<T: Poolable, F: Factory<T>> {
    /// Backing storage for every instance the pool ever allocated
    objects: SlotMap<PoolHandle, T>,

    /// Handles ready to hand out, most recently returned on top
    available: Vec<PoolHandle>,

    /// Handles currently checked out
    active: HashSet<PoolHandle>,

    /// Total instances ever allocated (available + active), never shrinks
    capacity: usize,

    /// Is the pool allowed to grow when a spawn finds it empty?
    can_grow: bool,

    /// Creation dependency, fixed for the pool's lifetime
    factory: F,

    /// Growth/depletion observer
    events: Box<dyn PoolEvents>,
}

impl<T: Poolable, F: Factory<T>> Pool<T, F> {
    /// Create a pool and synchronously fill it with `size` instances.
    ///
    /// Size 0 is legal: the pool starts empty and grows on first spawn.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CreationFailed`] if the factory fails during
    /// the initial fill.
    pub fn new(size: usize, factory: F) -> Result<Self, PoolError> {
        let mut pool = Self {
            objects: SlotMap::with_capacity_and_key(size),
            available: Vec::with_capacity(size),
            active: HashSet::with_capacity(size),
            capacity: 0,
            can_grow: true,
            factory,
            events: Box::new(LogEvents),
        };

        pool.fill(size)?;
        Ok(pool)
    }

    /// Create a pool from a [`PoolConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CreationFailed`] if the factory fails during
    /// the initial fill.
    pub fn from_config(config: &PoolConfig, factory: F) -> Result<Self, PoolError> {
        let mut pool = Self::new(config.initial_size, factory)?;
        pool.can_grow = config.can_grow;
        Ok(pool)
    }

    /// Replace the growth/depletion observer.
    pub fn set_events(&mut self, events: Box<dyn PoolEvents>) {
        self.events = events;
    }

    /// Create `count` instances and push them onto the available stack.
    ///
    /// Capacity is counted per instance, so a mid-batch factory failure
    /// keeps whatever was created before it and propagates the error.
    fn fill(&mut self, count: usize) -> Result<(), PoolError> {
        for _ in 0..count {
            let instance = self.factory.create()?;
            let handle = self.objects.insert(instance);
            self.available.push(handle);
            self.capacity += 1;
        }

        log::debug!("Filled pool with {} instances, capacity {}", count, self.capacity);
        Ok(())
    }

    /// Check out an instance from the pool.
    ///
    /// Pops the most recently returned instance, marks it active, invokes
    /// its [`Poolable::on_spawn`] hook, and returns its handle. If the
    /// available stack is empty the pool grows first (when permitted) or
    /// reports depletion and returns `Ok(None)` — depletion is an
    /// expected outcome callers must check for, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CreationFailed`] if growth was needed and the
    /// factory failed.
    pub fn spawn(&mut self) -> Result<Option<PoolHandle>, PoolError> {
        if self.available.is_empty() {
            if !self.can_grow {
                self.events.on_depleted(self.capacity);
                return Ok(None);
            }
            self.grow()?;
        }

        // Growth batches are never empty, so this pop cannot miss.
        let Some(handle) = self.available.pop() else {
            return Ok(None);
        };

        self.active.insert(handle);
        self.objects[handle].on_spawn();
        Ok(Some(handle))
    }

    /// Check an instance back into the pool.
    ///
    /// Invokes its [`Poolable::on_despawn`] hook and pushes it onto the
    /// available stack for the next spawn.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::NotActive`] if the handle is not currently
    /// checked out from this pool (double check-in or a foreign handle);
    /// the pool's bookkeeping is left untouched in that case.
    pub fn despawn(&mut self, handle: PoolHandle) -> Result<(), PoolError> {
        if !self.active.remove(&handle) {
            return Err(PoolError::NotActive);
        }

        self.objects[handle].on_despawn();
        self.available.push(handle);
        Ok(())
    }

    /// Check every active instance back in at once.
    ///
    /// Bulk bookkeeping reset for scene or level teardown. Deliberately
    /// asymmetric with [`despawn`](Self::despawn): per-instance
    /// [`Poolable::on_despawn`] hooks are NOT invoked.
    pub fn despawn_all(&mut self) {
        self.available.extend(self.active.drain());
    }

    /// Get a checked-out instance by handle.
    ///
    /// Returns `None` while the handle is not active; available instances
    /// belong exclusively to the pool.
    pub fn get(&self, handle: PoolHandle) -> Option<&T> {
        if self.active.contains(&handle) {
            self.objects.get(handle)
        } else {
            None
        }
    }

    /// Get mutable access to a checked-out instance by handle.
    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut T> {
        if self.active.contains(&handle) {
            self.objects.get_mut(handle)
        } else {
            None
        }
    }

    /// Total instances this pool can hand out without growing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Instances ready to be spawned without re-allocating.
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Instances currently checked out.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Is the pool allowed to grow when a spawn finds it empty?
    pub fn can_grow(&self) -> bool {
        self.can_grow
    }

    /// Allow or forbid growth on depletion.
    pub fn set_can_grow(&mut self, can_grow: bool) {
        self.can_grow = can_grow;
    }

    /// Grow the pool by roughly half its current capacity.
    ///
    /// Batch size is `(max(1, capacity) + 1) / 2` — at least one instance
    /// as a hard invariant, so the spawn that triggered growth always
    /// finds something to pop afterwards.
    ///
    /// The growth event fires whenever capacity rose, including for the
    /// partial batch kept when the factory fails mid-fill.
    fn grow(&mut self) -> Result<(), PoolError> {
        let batch = (self.capacity.max(1) + 1) / 2;
        let before = self.capacity;
        let result = self.fill(batch);

        if self.capacity > before {
            self.events.on_grown(self.capacity);
        }
        result
    }
}
