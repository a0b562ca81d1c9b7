//! Structural equality for types that hold trait-object handles.
//!
//! `#[derive(PartialEq, Eq, Hash)]` cannot see through `Arc<dyn Trait>`
//! fields, so such types expose a private `eq_key(&self)` returning a tuple of
//! comparable parts (handles contribute their name) and delegate to it with
//! [`impl_eq_by_key!`](crate::impl_eq_by_key).

/// Implement `PartialEq`, `Eq` and `Hash` for `$ty` through its `eq_key`
/// method.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// trait Named: std::fmt::Debug { fn name(&self) -> &str; }
/// #[derive(Debug)]
/// struct A;
/// impl Named for A { fn name(&self) -> &str { "A" } }
///
/// #[derive(Debug)]
/// struct Holder { id: u32, handle: Arc<dyn Named> }
/// impl Holder {
///     fn eq_key(&self) -> (u32, &str) { (self.id, self.handle.name()) }
/// }
/// ig_core::impl_eq_by_key!(Holder);
///
/// assert_eq!(Holder { id: 1, handle: Arc::new(A) }, Holder { id: 1, handle: Arc::new(A) });
/// assert_ne!(Holder { id: 1, handle: Arc::new(A) }, Holder { id: 2, handle: Arc::new(A) });
/// ```
#[macro_export]
macro_rules! impl_eq_by_key {
    ($($ty:ty),+ $(,)?) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.eq_key() == other.eq_key()
            }
        }

        impl Eq for $ty {}

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                self.eq_key().hash(state);
            }
        }
    )+};
}
