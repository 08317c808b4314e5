use std::fmt;
use std::ops::{Deref, DerefMut};

/// Largest field order supported, and thus the largest table index.
pub const BCH_MAX_N: usize = 63;
/// Slots per table (indices `0..=BCH_MAX_N`).
pub const TABLE_CAPACITY: usize = BCH_MAX_N + 1;

#[cfg(not(feature = "static-alloc"))]
#[derive(Clone, PartialEq, Eq)]
pub struct Table<T> {
    buf: Vec<T>,
}

#[cfg(not(feature = "static-alloc"))]
impl<T: Copy> Table<T> {
    /// Table of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self { buf: vec![value; len] }
    }
}

#[cfg(not(feature = "static-alloc"))]
impl<T> Deref for Table<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.buf
    }
}

#[cfg(not(feature = "static-alloc"))]
impl<T> DerefMut for Table<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}

#[cfg(feature = "static-alloc")]
#[derive(Clone, PartialEq, Eq)]
pub struct Table<T> {
    buf: [T; TABLE_CAPACITY],
    len: usize,
}

#[cfg(feature = "static-alloc")]
impl<T: Copy> Table<T> {
    /// Table of `len` copies of `value`; `len` is capped at [`TABLE_CAPACITY`].
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            buf: [value; TABLE_CAPACITY],
            len: len.min(TABLE_CAPACITY),
        }
    }
}

#[cfg(feature = "static-alloc")]
impl<T> Deref for Table<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.buf[..self.len]
    }
}

#[cfg(feature = "static-alloc")]
impl<T> DerefMut for Table<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }
}

impl<T: fmt::Debug> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
