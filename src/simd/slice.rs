//! Slice algorithms written only against [`SimdVector`].
//!
//! Each algorithm walks its inputs in `V::COUNT`-element chunks and finishes
//! the remaining tail with scalar lane operations. The `par_` variants split
//! the inputs into blocks of [`PARALLEL_BLOCK`] elements on the rayon pool and
//! run the vector version on every block.

use rayon::prelude::*;

use crate::error::{length_mismatch, Result};
use crate::simd::element::SimdElement;
use crate::simd::traits::{SimdAdd, SimdCmp, SimdSearch, SimdSum, SimdVector};
use crate::simd::Vector128;

/// Elements handed to one rayon task. A multiple of every vector `COUNT`.
pub const PARALLEL_BLOCK: usize = 4096;

#[inline(always)]
fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(length_mismatch(left, right));
    }
    Ok(())
}

pub fn scalar_add<T: SimdElement>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    check_lengths(a.len(), b.len())?;

    Ok(a.iter().zip(b).map(|(&x, &y)| x.lane_add(y)).collect())
}

/// `c = a + b` for equally sized blocks.
#[inline(always)]
fn add_block<T: SimdElement, V: SimdVector<T>>(a: &[T], b: &[T], c: &mut [T]) {
    let a_chunks = a.chunks_exact(V::COUNT);
    let b_chunks = b.chunks_exact(V::COUNT);
    let (a_tail, b_tail) = (a_chunks.remainder(), b_chunks.remainder());
    let mut c_chunks = c.chunks_exact_mut(V::COUNT);

    for ((c_chunk, a_chunk), b_chunk) in (&mut c_chunks).zip(a_chunks).zip(b_chunks) {
        // SAFETY: every chunk holds exactly COUNT elements.
        unsafe {
            let sum = V::load(a_chunk.as_ptr()) + V::load(b_chunk.as_ptr());
            sum.store(c_chunk.as_mut_ptr());
        }
    }

    for ((out, &x), &y) in c_chunks.into_remainder().iter_mut().zip(a_tail).zip(b_tail) {
        *out = x.lane_add(y);
    }
}

pub fn simd_add<T: SimdElement, V: SimdVector<T>>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    check_lengths(a.len(), b.len())?;

    let mut c = vec![T::ZERO; a.len()];
    add_block::<T, V>(a, b, &mut c);
    Ok(c)
}

pub fn par_simd_add<T: SimdElement, V: SimdVector<T>>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    check_lengths(a.len(), b.len())?;

    let mut c = vec![T::ZERO; a.len()];
    c.par_chunks_mut(PARALLEL_BLOCK)
        .zip(a.par_chunks(PARALLEL_BLOCK))
        .zip(b.par_chunks(PARALLEL_BLOCK))
        .for_each(|((c_block, a_block), b_block)| add_block::<T, V>(a_block, b_block, c_block));
    Ok(c)
}

pub fn scalar_sum<T: SimdElement>(a: &[T]) -> T {
    a.iter().fold(T::ZERO, |acc, &x| acc.lane_add(x))
}

pub fn simd_sum<T: SimdElement, V: SimdVector<T>>(a: &[T]) -> T {
    let chunks = a.chunks_exact(V::COUNT);
    let tail = chunks.remainder();

    let mut acc = V::zero();
    for chunk in chunks {
        // SAFETY: every chunk holds exactly COUNT elements.
        acc += unsafe { V::load(chunk.as_ptr()) };
    }

    tail.iter().fold(acc.sum(), |acc, &x| acc.lane_add(x))
}

pub fn par_simd_sum<T: SimdElement, V: SimdVector<T>>(a: &[T]) -> T {
    a.par_chunks(PARALLEL_BLOCK)
        .map(simd_sum::<T, V>)
        .reduce(|| T::ZERO, T::lane_add)
}

pub fn scalar_eq<T: SimdElement>(a: &[T], b: &[T]) -> Result<bool> {
    check_lengths(a.len(), b.len())?;

    Ok(a.iter().zip(b).all(|(x, y)| x == y))
}

#[inline(always)]
fn eq_block<T: SimdElement, V: SimdVector<T>>(a: &[T], b: &[T]) -> bool {
    let a_chunks = a.chunks_exact(V::COUNT);
    let b_chunks = b.chunks_exact(V::COUNT);
    let (a_tail, b_tail) = (a_chunks.remainder(), b_chunks.remainder());

    a_chunks.zip(b_chunks).all(|(x, y)| {
        // SAFETY: every chunk holds exactly COUNT elements.
        unsafe { V::load(x.as_ptr()) == V::load(y.as_ptr()) }
    }) && a_tail.iter().zip(b_tail).all(|(x, y)| x == y)
}

pub fn simd_eq<T: SimdElement, V: SimdVector<T>>(a: &[T], b: &[T]) -> Result<bool> {
    check_lengths(a.len(), b.len())?;

    Ok(eq_block::<T, V>(a, b))
}

pub fn par_simd_eq<T: SimdElement, V: SimdVector<T>>(a: &[T], b: &[T]) -> Result<bool> {
    check_lengths(a.len(), b.len())?;

    Ok(a.par_chunks(PARALLEL_BLOCK)
        .zip(b.par_chunks(PARALLEL_BLOCK))
        .all(|(x, y)| eq_block::<T, V>(x, y)))
}

pub fn scalar_index_of<T: SimdElement>(a: &[T], value: T) -> Option<usize> {
    a.iter().position(|&x| x == value)
}

pub fn simd_index_of<T: SimdElement, V: SimdVector<T>>(a: &[T], value: T) -> Option<usize> {
    let chunks = a.chunks_exact(V::COUNT);
    let tail = chunks.remainder();
    let tail_start = a.len() - tail.len();
    let needle = V::splat(value);

    for (index, chunk) in chunks.enumerate() {
        // SAFETY: every chunk holds exactly COUNT elements.
        let lanes = unsafe { V::load(chunk.as_ptr()) };
        if let Some(lane) = lanes.equals(needle).index_of_where_all_bits_set() {
            return Some(index * V::COUNT + lane);
        }
    }

    scalar_index_of(tail, value).map(|lane| tail_start + lane)
}

pub fn par_simd_index_of<T: SimdElement, V: SimdVector<T>>(a: &[T], value: T) -> Option<usize> {
    a.par_chunks(PARALLEL_BLOCK)
        .enumerate()
        .find_map_first(|(block, chunk)| {
            simd_index_of::<T, V>(chunk, value).map(|lane| block * PARALLEL_BLOCK + lane)
        })
}

impl<'b, T: SimdElement> SimdAdd<&'b [T]> for &[T] {
    type Output = Result<Vec<T>>;

    #[inline(always)]
    fn simd_add(self, rhs: &'b [T]) -> Self::Output {
        simd_add::<T, Vector128<T>>(self, rhs)
    }

    #[inline(always)]
    fn par_simd_add(self, rhs: &'b [T]) -> Self::Output {
        par_simd_add::<T, Vector128<T>>(self, rhs)
    }

    #[inline(always)]
    fn scalar_add(self, rhs: &'b [T]) -> Self::Output {
        scalar_add(self, rhs)
    }
}

impl<T: SimdElement> SimdSum for &[T] {
    type Output = T;

    #[inline(always)]
    fn simd_sum(self) -> Self::Output {
        simd_sum::<T, Vector128<T>>(self)
    }

    #[inline(always)]
    fn par_simd_sum(self) -> Self::Output {
        par_simd_sum::<T, Vector128<T>>(self)
    }

    #[inline(always)]
    fn scalar_sum(self) -> Self::Output {
        scalar_sum(self)
    }
}

impl<'b, T: SimdElement> SimdCmp<&'b [T]> for &[T] {
    type Output = Result<bool>;

    #[inline(always)]
    fn simd_eq(self, rhs: &'b [T]) -> Self::Output {
        simd_eq::<T, Vector128<T>>(self, rhs)
    }

    #[inline(always)]
    fn par_simd_eq(self, rhs: &'b [T]) -> Self::Output {
        par_simd_eq::<T, Vector128<T>>(self, rhs)
    }

    #[inline(always)]
    fn scalar_eq(self, rhs: &'b [T]) -> Self::Output {
        scalar_eq(self, rhs)
    }
}

impl<T: SimdElement> SimdSearch<T> for &[T] {
    type Output = Option<usize>;

    #[inline(always)]
    fn simd_index_of(self, value: T) -> Self::Output {
        simd_index_of::<T, Vector128<T>>(self, value)
    }

    #[inline(always)]
    fn par_simd_index_of(self, value: T) -> Self::Output {
        par_simd_index_of::<T, Vector128<T>>(self, value)
    }

    #[inline(always)]
    fn scalar_index_of(self, value: T) -> Self::Output {
        scalar_index_of(self, value)
    }
}
