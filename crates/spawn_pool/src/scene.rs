//! Scene placement decorator
//!
//! Host-specific placement and labelling layered on top of the generic
//! [`Pool`] by composition: the decorator positions and enables instances
//! around the pool's own check-out/check-in bookkeeping, never inside it.

use crate::factory::Factory;
use crate::handle::PoolHandle;
use crate::pool::{Pool, PoolError, PoolEvents};
use crate::poolable::Poolable;
use nalgebra::{UnitQuaternion, Vector3};

/// Capability for instances that occupy a place in a scene.
pub trait Placeable {
    /// Move the instance to a position and orientation.
    fn set_placement(&mut self, position: Vector3<f32>, rotation: UnitQuaternion<f32>);

    /// Enable or disable the instance in the scene.
    ///
    /// Disabled instances are parked: not simulated, not rendered.
    fn set_enabled(&mut self, enabled: bool);
}

/// Factory decorator that parks newly created instances.
///
/// Every instance enters the pool disabled and at the origin, so nothing
/// shows up in the scene before its first spawn.
struct ParkedFactory<F> {
    inner: F,
}

impl<T: Placeable, F: Factory<T>> Factory<T> for ParkedFactory<F> {
    fn create(&mut self) -> Result<T, PoolError> {
        let mut instance = self.inner.create()?;
        instance.set_placement(Vector3::zeros(), UnitQuaternion::identity());
        instance.set_enabled(false);
        Ok(instance)
    }
}

/// Observer that labels growth/depletion reports with the pool's name.
struct LabelledEvents {
    label: String,
}

impl PoolEvents for LabelledEvents {
    fn on_grown(&mut self, new_capacity: usize) {
        log::warn!("Refilled {} pool. New size = {}", self.label, new_capacity);
    }

    fn on_depleted(&mut self, capacity: usize) {
        log::error!("Pool {} capacity [{}] reached", self.label, capacity);
    }
}

/// A [`Pool`] wrapped with scene placement.
///
/// Spawned instances are positioned and enabled before the caller sees
/// them; despawned instances are disabled before re-entering the pool.
/// The label is an explicit constructor argument used only in log lines,
/// never ambient state.
pub struct ScenePool<T: Poolable + Placeable, F: Factory<T>> {
    pool: Pool<T, ParkedFactory<F>>,
}

impl<T: Poolable + Placeable, F: Factory<T>> ScenePool<T, F> {
    /// Create a scene pool and fill it with `size` parked instances.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CreationFailed`] if the factory fails during
    /// the initial fill.
    pub fn new(label: impl Into<String>, size: usize, factory: F) -> Result<Self, PoolError> {
        let mut pool = Pool::new(size, ParkedFactory { inner: factory })?;
        pool.set_events(Box::new(LabelledEvents {
            label: label.into(),
        }));
        Ok(Self { pool })
    }

    /// Spawn an instance at the scene origin.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CreationFailed`] if growth was needed and the
    /// factory failed.
    pub fn spawn(&mut self) -> Result<Option<PoolHandle>, PoolError> {
        self.spawn_at(Vector3::zeros(), UnitQuaternion::identity())
    }

    /// Spawn an instance, place it, and enable it.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CreationFailed`] if growth was needed and the
    /// factory failed.
    pub fn spawn_at(
        &mut self,
        position: Vector3<f32>,
        rotation: UnitQuaternion<f32>,
    ) -> Result<Option<PoolHandle>, PoolError> {
        let Some(handle) = self.pool.spawn()? else {
            return Ok(None);
        };

        if let Some(instance) = self.pool.get_mut(handle) {
            instance.set_placement(position, rotation);
            instance.set_enabled(true);
        }

        Ok(Some(handle))
    }

    /// Disable an instance and check it back into the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::NotActive`] if the handle is not currently
    /// checked out from this pool.
    pub fn despawn(&mut self, handle: PoolHandle) -> Result<(), PoolError> {
        if let Some(instance) = self.pool.get_mut(handle) {
            instance.set_enabled(false);
        }
        self.pool.despawn(handle)
    }

    /// Check every active instance back in without per-instance hooks.
    ///
    /// Instances are NOT disabled; like the underlying
    /// [`Pool::despawn_all`], this resets bookkeeping only.
    pub fn despawn_all(&mut self) {
        self.pool.despawn_all();
    }

    /// Get a checked-out instance by handle.
    pub fn get(&self, handle: PoolHandle) -> Option<&T> {
        self.pool.get(handle)
    }

    /// Get mutable access to a checked-out instance by handle.
    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut T> {
        self.pool.get_mut(handle)
    }

    /// Total instances this pool can hand out without growing.
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Instances ready to be spawned without re-allocating.
    pub fn available_count(&self) -> usize {
        self.pool.available_count()
    }

    /// Instances currently checked out.
    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    /// Is the pool allowed to grow when a spawn finds it empty?
    pub fn can_grow(&self) -> bool {
        self.pool.can_grow()
    }

    /// Allow or forbid growth on depletion.
    pub fn set_can_grow(&mut self, can_grow: bool) {
        self.pool.set_can_grow(can_grow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::FnFactory;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    struct TestSprite {
        position: Vector3<f32>,
        rotation: UnitQuaternion<f32>,
        enabled: Rc<Cell<bool>>,
    }

    impl Poolable for TestSprite {}

    impl Placeable for TestSprite {
        fn set_placement(&mut self, position: Vector3<f32>, rotation: UnitQuaternion<f32>) {
            self.position = position;
            self.rotation = rotation;
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled.set(enabled);
        }
    }

    fn sprite_pool(
        size: usize,
    ) -> (
        ScenePool<TestSprite, FnFactory<impl FnMut() -> TestSprite>>,
        Rc<Cell<Vec<Rc<Cell<bool>>>>>,
    ) {
        let created: Rc<Cell<Vec<Rc<Cell<bool>>>>> = Rc::new(Cell::new(Vec::new()));
        let sink = Rc::clone(&created);
        let pool = ScenePool::new(
            "sprites",
            size,
            FnFactory::new(move || {
                let enabled = Rc::new(Cell::new(true));
                let mut list = sink.take();
                list.push(Rc::clone(&enabled));
                sink.set(list);
                TestSprite {
                    position: Vector3::new(9.0, 9.0, 9.0),
                    rotation: UnitQuaternion::identity(),
                    enabled,
                }
            }),
        )
        .unwrap();
        (pool, created)
    }

    #[test]
    fn test_new_instances_start_parked() {
        let (_pool, created) = sprite_pool(3);

        let flags = created.take();
        assert_eq!(flags.len(), 3);
        assert!(flags.iter().all(|enabled| !enabled.get()));
    }

    #[test]
    fn test_spawn_at_places_and_enables() {
        let (mut pool, _) = sprite_pool(1);

        let position = Vector3::new(1.0, 2.0, 3.0);
        let rotation = UnitQuaternion::from_euler_angles(0.0, 0.5, 0.0);
        let handle = pool.spawn_at(position, rotation).unwrap().unwrap();

        let sprite = pool.get(handle).unwrap();
        assert_relative_eq!(sprite.position.x, 1.0);
        assert_relative_eq!(sprite.position.y, 2.0);
        assert_relative_eq!(sprite.position.z, 3.0);
        assert_relative_eq!(sprite.rotation.euler_angles().1, 0.5, epsilon = 1e-6);
        assert!(sprite.enabled.get());
    }

    #[test]
    fn test_despawn_disables_instance() {
        let (mut pool, _) = sprite_pool(1);

        let handle = pool.spawn().unwrap().unwrap();
        let enabled = Rc::clone(&pool.get(handle).unwrap().enabled);
        assert!(enabled.get());

        pool.despawn(handle).unwrap();
        assert!(!enabled.get());
        assert_eq!(pool.available_count(), 1);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_delegated_growth() {
        let (mut pool, created) = sprite_pool(1);

        pool.spawn().unwrap().unwrap();
        pool.spawn().unwrap().unwrap();

        assert_eq!(pool.capacity(), 2);
        assert_eq!(created.take().len(), 2);
    }
}
