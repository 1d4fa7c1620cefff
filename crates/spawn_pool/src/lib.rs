//! # Spawn Pool
//!
//! A generic object pool for expensive-to-construct instances, built for
//! game runtimes that spawn and despawn the same kinds of objects every
//! frame (particles, audio voices, projectiles).
//!
//! The pool pre-allocates a fixed set of instances, hands them out through
//! stable handles, and reclaims them for reuse instead of dropping and
//! recreating them. When it runs dry it can grow geometrically through the
//! factory it was built with, or report depletion if growth is disabled.
//!
//! ## Quick Start
//!
//! ```rust
//! use spawn_pool::prelude::*;
//!
//! #[derive(Default)]
//! struct Projectile {
//!     velocity: f32,
//! }
//!
//! impl Poolable for Projectile {
//!     fn on_spawn(&mut self) {
//!         self.velocity = 0.0;
//!     }
//! }
//!
//! fn main() -> Result<(), PoolError> {
//!     let mut pool = Pool::new(16, FnFactory::new(Projectile::default))?;
//!
//!     if let Some(handle) = pool.spawn()? {
//!         // ... fly the projectile ...
//!         pool.despawn(handle)?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod factory;
pub mod handle;
pub mod poolable;
pub mod scene;

mod pool;

pub use config::{ConfigError, PoolConfig};
pub use factory::{CloneFactory, Factory, FnFactory};
pub use handle::PoolHandle;
pub use pool::{LogEvents, Pool, PoolError, PoolEvents};
pub use poolable::Poolable;
pub use scene::{Placeable, ScenePool};

/// Common imports for pool users
pub mod prelude {
    pub use crate::{
        config::PoolConfig,
        factory::{CloneFactory, Factory, FnFactory},
        handle::PoolHandle,
        pool::{Pool, PoolError, PoolEvents},
        poolable::Poolable,
        scene::{Placeable, ScenePool},
    };
}
