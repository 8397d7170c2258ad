//! Indexed element access and accessor resolution.
//!
//! A buffer is either *indexable* (it can lend out a contiguous slice of its
//! logical elements, so kernels may index it directly) or an *accessor array*
//! (every element must go through [`Gettable::get`] / [`Settable::set`], e.g.
//! interleaved complex storage where one logical element spans two slots).
//!
//! The distinction is made by the capability probes [`Gettable::as_slice`]
//! and [`Settable::as_mut_slice`]. Accessor functions are resolved once per
//! call into plain `fn` pointers ([`resolve_getter`], [`resolve_setter`]),
//! i.e. a compile-time dispatch table keyed by buffer type.

use std::fmt;
use std::marker::PhantomData;

use crate::dtype::DType;
use crate::element::Element;

/// Read access to the logical elements of a buffer.
pub trait Gettable {
    type Elem: Copy;

    /// Number of logical elements.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the logical element at `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= self.len()`.
    fn get(&self, idx: usize) -> Self::Elem;

    /// Element representation tag.
    #[inline]
    fn dtype(&self) -> DType {
        DType::Generic
    }

    /// Contiguous view of the logical elements, if the buffer supports
    /// direct indexing. Accessor arrays return `None`.
    #[inline]
    fn as_slice(&self) -> Option<&[Self::Elem]> {
        None
    }
}

/// Write access to the logical elements of a buffer.
pub trait Settable: Gettable {
    /// Write the logical element at `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= self.len()`.
    fn set(&mut self, idx: usize, value: Self::Elem);

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [Self::Elem]> {
        None
    }
}

// ---------------------------------------------------------------------------
// Plain buffers
// ---------------------------------------------------------------------------

impl<T: Element> Gettable for [T] {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn get(&self, idx: usize) -> T {
        self[idx]
    }

    #[inline]
    fn dtype(&self) -> DType {
        T::DTYPE
    }

    #[inline]
    fn as_slice(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T: Element> Settable for [T] {
    #[inline(always)]
    fn set(&mut self, idx: usize, value: T) {
        self[idx] = value;
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

impl<T: Element> Gettable for Vec<T> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn get(&self, idx: usize) -> T {
        self[idx]
    }

    #[inline]
    fn dtype(&self) -> DType {
        T::DTYPE
    }

    #[inline]
    fn as_slice(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T: Element> Settable for Vec<T> {
    #[inline(always)]
    fn set(&mut self, idx: usize, value: T) {
        self[idx] = value;
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        Some(self.as_mut_slice())
    }
}

// References forward to the referent, so `&[f64]` / `&mut [f64]` can be
// stored inside wrappers such as `FnAccessor`.

impl<B: Gettable + ?Sized> Gettable for &B {
    type Elem = B::Elem;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline(always)]
    fn get(&self, idx: usize) -> B::Elem {
        (**self).get(idx)
    }

    #[inline]
    fn dtype(&self) -> DType {
        (**self).dtype()
    }

    #[inline]
    fn as_slice(&self) -> Option<&[B::Elem]> {
        (**self).as_slice()
    }
}

impl<B: Gettable + ?Sized> Gettable for &mut B {
    type Elem = B::Elem;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline(always)]
    fn get(&self, idx: usize) -> B::Elem {
        (**self).get(idx)
    }

    #[inline]
    fn dtype(&self) -> DType {
        (**self).dtype()
    }

    #[inline]
    fn as_slice(&self) -> Option<&[B::Elem]> {
        (**self).as_slice()
    }
}

impl<B: Settable + ?Sized> Settable for &mut B {
    #[inline(always)]
    fn set(&mut self, idx: usize, value: B::Elem) {
        (**self).set(idx, value)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [B::Elem]> {
        (**self).as_mut_slice()
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Element getter bound to a buffer type.
pub type GetFn<B> = fn(&B, usize) -> <B as Gettable>::Elem;

/// Element setter bound to a buffer type.
pub type SetFn<B> = fn(&mut B, usize, <B as Gettable>::Elem);

/// Whether `buf` must be accessed through its accessor functions.
#[inline]
pub fn is_accessor_array<B: Gettable + ?Sized>(buf: &B) -> bool {
    buf.as_slice().is_none()
}

/// Resolve the getter for `buf`'s type.
#[inline]
pub fn resolve_getter<B: Gettable + ?Sized>(_buf: &B) -> GetFn<B> {
    <B as Gettable>::get
}

/// Resolve the setter for `buf`'s type.
#[inline]
pub fn resolve_setter<B: Settable + ?Sized>(_buf: &B) -> SetFn<B> {
    <B as Settable>::set
}

/// Accessor protocol summary for a buffer.
pub struct AccessorInfo<B: Settable + ?Sized> {
    /// `true` if the buffer cannot be indexed directly.
    pub accessor_protocol: bool,
    pub dtype: DType,
    pub get: GetFn<B>,
    pub set: SetFn<B>,
}

impl<B: Settable + ?Sized> Clone for AccessorInfo<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Settable + ?Sized> Copy for AccessorInfo<B> {}

impl<B: Settable + ?Sized> fmt::Debug for AccessorInfo<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorInfo")
            .field("accessor_protocol", &self.accessor_protocol)
            .field("dtype", &self.dtype)
            .finish()
    }
}

/// Resolve the accessor protocol and get/set pair for `buf`.
pub fn accessors<B: Settable + ?Sized>(buf: &B) -> AccessorInfo<B> {
    AccessorInfo {
        accessor_protocol: is_accessor_array(buf),
        dtype: buf.dtype(),
        get: resolve_getter(buf),
        set: resolve_setter(buf),
    }
}

// ---------------------------------------------------------------------------
// User-supplied accessors
// ---------------------------------------------------------------------------

/// Accessor array backed by an arbitrary store and user-supplied get/set
/// functions.
///
/// Always takes the accessor path, even when the backing store is a plain
/// buffer.
pub struct FnAccessor<B, T, G, S> {
    buf: B,
    get: G,
    set: S,
    _elem: PhantomData<fn() -> T>,
}

impl<B, T, G, S> FnAccessor<B, T, G, S>
where
    B: Gettable,
    T: Copy,
    G: Fn(&B, usize) -> T,
    S: Fn(&mut B, usize, T),
{
    pub fn new(buf: B, get: G, set: S) -> Self {
        Self {
            buf,
            get,
            set,
            _elem: PhantomData,
        }
    }
}

impl<B, T, G, S> FnAccessor<B, T, G, S> {
    #[inline]
    pub fn inner(&self) -> &B {
        &self.buf
    }

    #[inline]
    pub fn into_inner(self) -> B {
        self.buf
    }
}

impl<B, T, G, S> Gettable for FnAccessor<B, T, G, S>
where
    B: Gettable,
    T: Copy,
    G: Fn(&B, usize) -> T,
{
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn get(&self, idx: usize) -> T {
        (self.get)(&self.buf, idx)
    }
}

impl<B, T, G, S> Settable for FnAccessor<B, T, G, S>
where
    B: Gettable,
    T: Copy,
    G: Fn(&B, usize) -> T,
    S: Fn(&mut B, usize, T),
{
    #[inline]
    fn set(&mut self, idx: usize, value: T) {
        (self.set)(&mut self.buf, idx, value)
    }
}
