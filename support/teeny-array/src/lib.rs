#![allow(unsafe_code)]

//! TeenyArray: a fixed-capacity array that lives entirely inline.
//!
//! TeenyArray provides a compact container that:
//! - Stores up to `N` values inline, never touching the heap
//! - Tracks its length at runtime in a single byte
//! - Rejects pushes beyond capacity instead of growing
//!
//! It is the storage behind the mini collections: a set of three strings is
//! three inline slots plus a length byte, with no allocation and no hashing.

#![no_std]

use core::{
    fmt,
    mem::MaybeUninit,
    ops::Deref,
    ptr, slice,
};

// Layout:
//
// struct TeenyArray<T, N> { len: u8, slots: [MaybeUninit<T>; N] }
//
// * slots[..len] are initialized, slots[len..] are not
// * len fits in a byte, so N is capped at 255

#[repr(C)]
pub struct TeenyArray<T, const N: usize> {
    len: u8,
    slots: [MaybeUninit<T>; N],
}

static_assertions::assert_eq_size!(TeenyArray<u8, 15>, [u8; 16]);
static_assertions::assert_eq_size!(TeenyArray<u64, 2>, [u64; 3]);

impl<T, const N: usize> TeenyArray<T, N> {
    const CAPACITY_FITS_IN_LEN: () =
        assert!(N <= u8::MAX as usize, "TeenyArray capacity must fit in a u8");

    pub const fn new() -> Self {
        let () = Self::CAPACITY_FITS_IN_LEN;
        Self {
            len: 0,
            slots: [const { MaybeUninit::uninit() }; N],
        }
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len() == N
    }

    /// Append a value, handing it back if the array is already full.
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let index = self.len();
        self.slots[index].write(value);
        self.len += 1;
        Ok(())
    }

    /// Fill a new array from an iterator, failing if it yields more than `N` values.
    ///
    /// On failure the values collected so far are dropped and the first value
    /// that did not fit is returned.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, T> {
        let mut array = Self::new();
        for value in iter {
            array.try_push(value)?;
        }
        Ok(array)
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len()) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len()) }
    }
}

impl<T, const N: usize> Default for TeenyArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Deref for TeenyArray<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone, const N: usize> Clone for TeenyArray<T, N> {
    fn clone(&self) -> Self {
        let mut cloned = Self::new();
        for value in self.as_slice() {
            // Same capacity as the source, so this cannot overflow.
            let _ = cloned.try_push(value.clone());
        }
        cloned
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for TeenyArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for TeenyArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for TeenyArray<T, N> {}

impl<T, const N: usize> Drop for TeenyArray<T, N> {
    fn drop(&mut self) {
        // SAFETY: exactly the initialized prefix is dropped, once.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}
