//! Load, store and copy operations shared by every vector width.
//!
//! A vector is byte-for-byte a `[T; COUNT]`, so data movement is a plain
//! unaligned (or aligned) read or write of the whole value. The safe entry
//! points check bounds and alignment before touching memory; the raw-pointer
//! variants leave that to the caller.

use crate::simd::{Vector128, Vector64};

macro_rules! impl_memory_ops {
    ($vector:ident) => {
        impl<T: crate::simd::SimdElement> $vector<T> {
            /// Creates a vector from the first `COUNT` elements of `values`.
            ///
            /// # Errors
            ///
            /// `InsufficientLength` when `values` holds fewer than `COUNT`
            /// elements. Nothing is read in that case.
            #[inline]
            pub fn from_slice(values: &[T]) -> crate::error::Result<Self> {
                Self::from_slice_at(values, 0)
            }

            /// Creates a vector from `values[index..index + COUNT]`.
            ///
            /// # Errors
            ///
            /// `InsufficientLength` when fewer than `COUNT` elements follow
            /// `index`.
            #[inline]
            pub fn from_slice_at(values: &[T], index: usize) -> crate::error::Result<Self> {
                let source = values
                    .get(index..)
                    .filter(|tail| tail.len() >= Self::COUNT)
                    .ok_or_else(|| {
                        crate::error::insufficient_length(
                            index.saturating_add(Self::COUNT),
                            values.len(),
                        )
                    })?;

                // SAFETY: `source` holds at least COUNT readable elements.
                Ok(unsafe { Self::load(source.as_ptr()) })
            }

            /// Creates a vector from an aligned slice.
            ///
            /// # Errors
            ///
            /// `InsufficientLength` when `values` is too short, `Misaligned`
            /// when its first element does not meet [`Self::alignment`].
            #[inline]
            pub fn try_load_aligned(values: &[T]) -> crate::error::Result<Self> {
                if values.len() < Self::COUNT {
                    return Err(crate::error::insufficient_length(Self::COUNT, values.len()));
                }

                let address = values.as_ptr() as usize;
                if address % Self::alignment() != 0 {
                    return Err(crate::error::misaligned(address, Self::alignment()));
                }

                // SAFETY: length and alignment were checked above.
                Ok(unsafe { Self::load_aligned(values.as_ptr()) })
            }

            /// Loads `COUNT` elements starting at `source`.
            ///
            /// # Safety
            ///
            /// `source` must be valid for reads of `COUNT` elements of `T`.
            #[inline(always)]
            pub unsafe fn load(source: *const T) -> Self {
                std::ptr::read_unaligned(source as *const Self)
            }

            /// Loads `COUNT` elements from an address aligned to
            /// [`Self::alignment`].
            ///
            /// # Panics
            ///
            /// Panics if `source` is not aligned.
            ///
            /// # Safety
            ///
            /// `source` must be valid for reads of `COUNT` elements of `T`.
            #[inline(always)]
            pub unsafe fn load_aligned(source: *const T) -> Self {
                assert!(
                    (source as usize) % Self::alignment() == 0,
                    "Pointer must be {}-byte aligned",
                    Self::alignment()
                );

                std::ptr::read(source as *const Self)
            }

            /// Same as [`Self::load_aligned`]; the non-temporal hint has no
            /// effect on the result.
            ///
            /// # Safety
            ///
            /// See [`Self::load_aligned`].
            #[inline(always)]
            pub unsafe fn load_aligned_non_temporal(source: *const T) -> Self {
                Self::load_aligned(source)
            }

            /// Stores the `COUNT` elements at `destination`.
            ///
            /// # Safety
            ///
            /// `destination` must be valid for writes of `COUNT` elements of `T`.
            #[inline(always)]
            pub unsafe fn store(self, destination: *mut T) {
                std::ptr::write_unaligned(destination as *mut Self, self)
            }

            /// Stores the elements at an address aligned to [`Self::alignment`].
            ///
            /// # Panics
            ///
            /// Panics if `destination` is not aligned.
            ///
            /// # Safety
            ///
            /// `destination` must be valid for writes of `COUNT` elements of `T`.
            #[inline(always)]
            pub unsafe fn store_aligned(self, destination: *mut T) {
                assert!(
                    (destination as usize) % Self::alignment() == 0,
                    "Pointer must be {}-byte aligned",
                    Self::alignment()
                );

                std::ptr::write(destination as *mut Self, self)
            }

            /// Same as [`Self::store_aligned`].
            ///
            /// # Safety
            ///
            /// See [`Self::store_aligned`].
            #[inline(always)]
            pub unsafe fn store_aligned_non_temporal(self, destination: *mut T) {
                self.store_aligned(destination)
            }

            /// Copies the elements into the start of `destination`.
            ///
            /// # Errors
            ///
            /// `InsufficientLength` when `destination` is shorter than `COUNT`;
            /// nothing is written in that case.
            #[inline]
            pub fn copy_to(self, destination: &mut [T]) -> crate::error::Result<()> {
                self.copy_to_at(destination, 0)
            }

            /// Copies the elements into `destination[start..start + COUNT]`.
            ///
            /// # Errors
            ///
            /// `InsufficientLength` when fewer than `COUNT` elements follow
            /// `start`; nothing is written in that case.
            #[inline]
            pub fn copy_to_at(self, destination: &mut [T], start: usize) -> crate::error::Result<()> {
                let actual = destination.len();
                let target = destination
                    .get_mut(start..)
                    .filter(|tail| tail.len() >= Self::COUNT)
                    .ok_or_else(|| {
                        crate::error::insufficient_length(start.saturating_add(Self::COUNT), actual)
                    })?;

                // SAFETY: `target` holds at least COUNT writable elements.
                unsafe { self.store(target.as_mut_ptr()) };
                Ok(())
            }

            /// Copies the elements into `destination` if it is long enough.
            #[inline]
            pub fn try_copy_to(self, destination: &mut [T]) -> bool {
                self.copy_to(destination).is_ok()
            }

            /// Elements in index order.
            #[inline]
            pub fn to_vec(self) -> Vec<T> {
                self.iter().collect()
            }
        }
    };
}

impl_memory_ops!(Vector64);
impl_memory_ops!(Vector128);

/// `From<[T; COUNT]>` and `From<vector> for [T; COUNT]` for each element type.
macro_rules! impl_array_conversions {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<[$t; 8 / std::mem::size_of::<$t>()]> for Vector64<$t> {
                #[inline]
                fn from(lanes: [$t; 8 / std::mem::size_of::<$t>()]) -> Self {
                    Vector64::from_lanes(lanes)
                }
            }

            impl From<Vector64<$t>> for [$t; 8 / std::mem::size_of::<$t>()] {
                #[inline]
                fn from(vector: Vector64<$t>) -> Self {
                    let mut lanes = Self::default();
                    lanes.copy_from_slice(vector.as_slice());
                    lanes
                }
            }

            impl From<[$t; 16 / std::mem::size_of::<$t>()]> for Vector128<$t> {
                #[inline]
                fn from(values: [$t; 16 / std::mem::size_of::<$t>()]) -> Self {
                    // SAFETY: the array holds exactly COUNT elements.
                    unsafe { Vector128::load(values.as_ptr()) }
                }
            }

            impl From<Vector128<$t>> for [$t; 16 / std::mem::size_of::<$t>()] {
                #[inline]
                fn from(vector: Vector128<$t>) -> Self {
                    let mut values = Self::default();
                    // SAFETY: the array holds exactly COUNT elements.
                    unsafe { vector.store(values.as_mut_ptr()) };
                    values
                }
            }
        )*
    };
}

impl_array_conversions!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize, f32, f64);
