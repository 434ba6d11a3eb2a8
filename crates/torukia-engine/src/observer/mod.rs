//! Notification core.
//!
//! A [`Subject`] keeps an ordered list of non-owning handles to [`Observer`]s
//! and calls `update` on each of them when it is notified. Observers live in
//! `Rc<RefCell<_>>` storage owned by the caller; the subject only holds `Weak`
//! handles, so it never extends an observer's lifetime.
//!
//! Identity is the observer's allocation, not its value: two observers that
//! compare equal are still distinct subscribers.

mod subject;

pub use subject::Subject;

/// Capability implemented by anything that wants to hear from a [`Subject`].
pub trait Observer<V: ?Sized> {
    /// Called once per registration entry, synchronously, in registration order.
    fn update(&mut self, value: &V);
}
