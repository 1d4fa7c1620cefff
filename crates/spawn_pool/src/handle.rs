//! Handle type for stable references to pooled instances

slotmap::new_key_type! {
    /// Identity of one pooled instance.
    ///
    /// Handles are issued by [`Pool::spawn`](crate::Pool::spawn) and stay
    /// stable for the lifetime of the pool. A handle from an ended lease
    /// is kept from touching the instance by the pool's active-set gate:
    /// [`get`](crate::Pool::get) and [`get_mut`](crate::Pool::get_mut)
    /// resolve only handles that are currently checked out.
    pub struct PoolHandle;
}
