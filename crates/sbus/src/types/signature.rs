// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! NUL-terminated wire signature constants.

use std::fmt;

/// A wire-format type signature: one code per argument, in argument order,
/// followed by exactly one NUL terminator.
///
/// Signatures are `'static` constants with no runtime cost beyond the bytes
/// themselves. Build them with the [`signature!`](crate::signature) macro for
/// registered types, or with [`Signature::from_static`] for hand-written
/// strings (e.g. container codes a consuming runtime understands but the
/// registry does not emit).
///
/// ```
/// const SIG: sbus::Signature = sbus::signature!(bool, u32, String);
///
/// assert_eq!(SIG.as_bytes_with_nul(), b"bus\0");
/// assert_eq!(SIG.as_str(), "bus");
/// assert_eq!(SIG.code_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Code bytes plus the trailing NUL. Validated at construction.
    bytes: &'static [u8],
}

impl Signature {
    /// The empty signature: no arguments, terminator only.
    pub const EMPTY: Signature = Signature { bytes: &[0] };

    /// Wraps a NUL-terminated code string.
    ///
    /// Panics when `bytes` is empty, is not NUL-terminated, or carries a
    /// non-printable code byte. In const context the panic is a build
    /// failure, so a malformed hand-written signature never reaches the bus.
    ///
    /// ```
    /// // "as" — array-of-string, a container shape the registry never emits.
    /// const SIG: sbus::Signature = sbus::Signature::from_static(b"as\0");
    /// assert_eq!(SIG.as_str(), "as");
    /// ```
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        assert!(
            !bytes.is_empty(),
            "signature must carry a NUL terminator"
        );
        assert!(
            bytes[bytes.len() - 1] == 0,
            "signature must end with exactly one NUL terminator"
        );
        let mut i = 0;
        while i < bytes.len() - 1 {
            assert!(
                bytes[i] > 0x20 && bytes[i] < 0x7f,
                "signature code is not a printable ASCII character"
            );
            i += 1;
        }
        Signature { bytes }
    }

    /// Number of type codes (terminator excluded).
    pub const fn code_count(&self) -> usize {
        self.bytes.len() - 1
    }

    /// True when the signature describes an empty argument list.
    pub const fn is_empty(&self) -> bool {
        self.bytes.len() == 1
    }

    /// Code bytes including the trailing NUL; length is `code_count() + 1`.
    pub const fn as_bytes_with_nul(&self) -> &'static [u8] {
        self.bytes
    }

    /// Code bytes without the terminator.
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.bytes.split_at(self.bytes.len() - 1).0
    }

    /// The signature as a string slice, terminator excluded.
    pub const fn as_str(&self) -> &'static str {
        // Codes are validated printable ASCII at construction.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

impl Default for Signature {
    fn default() -> Self {
        Signature::EMPTY
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composes the wire signature for an ordered list of native types.
///
/// Expands to a [`Signature`] constant: one code per type, in the order
/// written, plus the trailing NUL. Order is preserved exactly; swapping two
/// types swaps the corresponding codes. A type without a [`BusType`]
/// registration fails the build at the expansion site.
///
/// [`Signature`]: crate::Signature
/// [`BusType`]: crate::BusType
///
/// ```
/// const NOTIFY: sbus::Signature = sbus::signature!(u32, &str, f64);
/// assert_eq!(NOTIFY.as_str(), "usd");
///
/// const NO_ARGS: sbus::Signature = sbus::signature!();
/// assert_eq!(NO_ARGS.as_bytes_with_nul(), b"\0");
/// ```
#[macro_export]
macro_rules! signature {
    ($($ty:ty),* $(,)?) => {
        $crate::types::Signature::from_static(
            &[$(<$ty as $crate::types::BusType>::CODE as u8,)* 0u8],
        )
    };
}

/// Builds the nil-delimited argument-name list carried by `method_n` and
/// `signal_n` entries.
///
/// Each name is followed by one NUL, so `arg_names!("a", "b")` is `"a\0b\0"`.
///
/// ```
/// const NAMES: &str = sbus::arg_names!("path", "value");
/// assert_eq!(NAMES, "path\0value\0");
/// ```
#[macro_export]
macro_rules! arg_names {
    ($($name:literal),+ $(,)?) => {
        concat!($($name, "\0"),+)
    };
}
