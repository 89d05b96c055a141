//! Copy-on-write handle to a property group.
//!
//! Reading never copies. The first write through a handle whose group is
//! also referenced elsewhere clones the group and rebinds the handle, so a
//! group that is visible through more than one handle never changes value.

use core::fmt;
use core::mem;
use core::ops::Deref;
use std::sync::Arc;

/// A shared, copy-on-write reference to one property group.
pub struct DataRef<T> {
    data: Arc<T>,
}

impl<T> DataRef<T> {
    /// Wrap a freshly built group. The handle is its only owner.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            data: Arc::new(value),
        }
    }

    #[inline]
    pub fn get(&self) -> &T {
        &self.data
    }

    /// Identity comparison: both handles reference the same group instance.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Whether another handle currently references the same group.
    #[inline]
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.data) > 1
    }

    /// Rebind this handle to `other`'s group and return the handle to the
    /// group it referenced before. No group is copied.
    #[inline]
    #[must_use = "the returned handle keeps the previous group alive"]
    pub fn replace(&mut self, other: Self) -> Self {
        mem::replace(self, other)
    }
}

impl<T: Clone> DataRef<T> {
    /// Mutable view of the group, cloning it first if it is shared.
    #[inline]
    pub fn access(&mut self) -> &mut T {
        Arc::make_mut(&mut self.data)
    }
}

impl<T> Clone for DataRef<T> {
    /// Another handle to the same group; no allocation.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> Deref for DataRef<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T: PartialEq> PartialEq for DataRef<T> {
    /// Shared instances are equal without looking at their fields.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.data == *other.data
    }
}

impl<T: Default> Default for DataRef<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for DataRef<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(formatter)
    }
}

/// Write `value` into a field of the group behind `handle`.
///
/// The field is first read through `read`; when it already holds `value`
/// nothing happens and the group is not copied. Otherwise `access()` is
/// called and the value is stored through `write`. Nested groups are written
/// by calling `access()` on the inner handle inside `write`.
///
/// # Returns
/// `true` when the stored value changed.
#[inline]
pub fn set_field<T, V>(
    handle: &mut DataRef<T>,
    read: impl FnOnce(&T) -> &V,
    write: impl FnOnce(&mut T) -> &mut V,
    value: V,
) -> bool
where
    T: Clone,
    V: PartialEq,
{
    if *read(handle.get()) == value {
        return false;
    }
    *write(handle.access()) = value;
    true
}
