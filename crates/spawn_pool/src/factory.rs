//! Factories that create pooled instances on demand
//!
//! A factory is a pure leaf dependency of the pool: it constructs exactly
//! one instance per call and keeps no record of what it has produced. It
//! may carry its own configuration, such as a prototype to clone from.

use crate::pool::PoolError;

/// Creation dependency consumed by [`Pool`](crate::Pool).
pub trait Factory<T> {
    /// Construct exactly one new instance.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CreationFailed`] when the underlying
    /// construction fails; the error propagates unmodified through the
    /// pool operation that triggered it.
    fn create(&mut self) -> Result<T, PoolError>;
}

/// Factory backed by a closure.
pub struct FnFactory<F> {
    make: F,
}

impl<F> FnFactory<F> {
    /// Create a factory from an infallible constructor closure.
    pub fn new(make: F) -> Self {
        Self { make }
    }
}

impl<T, F: FnMut() -> T> Factory<T> for FnFactory<F> {
    fn create(&mut self) -> Result<T, PoolError> {
        Ok((self.make)())
    }
}

/// Factory that clones a prototype instance.
///
/// The pool equivalent of instantiating copies of a template object: the
/// prototype is configured once and every created instance starts as an
/// exact copy of it.
pub struct CloneFactory<T: Clone> {
    prototype: T,
}

impl<T: Clone> CloneFactory<T> {
    /// Create a factory that clones `prototype`.
    pub fn new(prototype: T) -> Self {
        Self { prototype }
    }

    /// Get the prototype instances are cloned from.
    pub fn prototype(&self) -> &T {
        &self.prototype
    }
}

impl<T: Clone> Factory<T> for CloneFactory<T> {
    fn create(&mut self) -> Result<T, PoolError> {
        Ok(self.prototype.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_factory_creates_fresh_instances() {
        let mut counter = 0u32;
        let mut factory = FnFactory::new(move || {
            counter += 1;
            counter
        });

        assert_eq!(factory.create().unwrap(), 1);
        assert_eq!(factory.create().unwrap(), 2);
    }

    #[test]
    fn test_clone_factory_copies_prototype() {
        let mut factory = CloneFactory::new(vec![1, 2, 3]);

        let a = factory.create().unwrap();
        let b = factory.create().unwrap();

        assert_eq!(a, vec![1, 2, 3]);
        assert_eq!(b, vec![1, 2, 3]);
        assert_eq!(factory.prototype(), &vec![1, 2, 3]);
    }
}
