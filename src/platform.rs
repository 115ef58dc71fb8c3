//! Hardware capability probe.
//!
//! The build script inspects the host CPU and selects one backend through a
//! `cfg` flag (`sse2`, `neon` or `fallback`). Setting `SIMDVEC_FORCE_FALLBACK=1`
//! at build time selects the software definition on any host. The probe only
//! decides which code path executes; every path produces the same bits.

/// Native alignment of a 128-bit vector, in bytes.
pub const ALIGNMENT: usize = 16;

/// Returns `true` when some vector operations run on native instructions.
#[inline(always)]
pub const fn is_hardware_accelerated() -> bool {
    cfg!(any(
        all(target_arch = "x86_64", sse2),
        all(target_arch = "aarch64", neon, target_endian = "little")
    ))
}

/// Name of the backend selected at build time.
pub const fn backend_name() -> &'static str {
    if cfg!(all(target_arch = "x86_64", sse2)) {
        "sse2"
    } else if cfg!(all(target_arch = "aarch64", neon, target_endian = "little")) {
        "neon"
    } else {
        "fallback"
    }
}

/// Returns `true` when `ptr` satisfies [`ALIGNMENT`].
#[inline(always)]
pub fn is_aligned<T>(ptr: *const T) -> bool {
    (ptr as usize) % ALIGNMENT == 0
}
