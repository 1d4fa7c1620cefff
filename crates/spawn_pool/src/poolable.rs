//! Capability trait implemented by types that can live in a pool

/// Lifecycle hooks for pooled instances.
///
/// The pool invokes [`on_spawn`](Poolable::on_spawn) after an instance
/// leaves the available stack and before the caller receives its handle,
/// and [`on_despawn`](Poolable::on_despawn) after an instance is accepted
/// back and before it re-enters the available stack. Both default to
/// no-ops so simple value types can opt in with an empty impl.
pub trait Poolable {
    /// Restore the instance to a canonical fresh state.
    ///
    /// Clear transient fields, rewind playback, reset physics state —
    /// whatever the caller must not observe from the previous lease.
    fn on_spawn(&mut self) {}

    /// Return the instance to a dormant, minimal-footprint configuration.
    ///
    /// Release references the instance held during its lease so they do
    /// not outlive it inside the pool.
    fn on_despawn(&mut self) {}
}
