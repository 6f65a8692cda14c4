// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire type-code registry for native value types.
//!
//! Every value crossing the bus is described by a single ASCII type code.
//! This module maps native Rust types onto that alphabet at compile time:
//! [`BusType`] associates one code with one (decayed) type, [`type_code`]
//! looks it up, and the [`signature!`](crate::signature) macro concatenates
//! codes for an ordered argument list into a NUL-terminated [`Signature`]
//! constant.
//!
//! # Type code alphabet
//!
//! | Native type | Code |
//! |-------------|------|
//! | `bool` | `b` |
//! | `u8` | `y` |
//! | `u16` | `q` |
//! | `i16` | `n` |
//! | `u32` | `u` |
//! | `i32` | `i` |
//! | `u64` | `t` |
//! | `i64` | `x` |
//! | `f64` | `d` |
//! | string-like (`String`, `str`, `CStr`, ...) | `s` |
//!
//! `i8` and `f32` have no wire representation on the bus and are deliberately
//! absent; asking for their code is a compile error, never a silent
//! truncation. New mappings are added as new impls only. Changing an existing
//! code would silently alter the wire encoding of every signature already
//! derived from it.
//!
//! # Decay
//!
//! Lookup goes through a canonical representative: shared and exclusive
//! references decay to their referent, and all string-like forms (owned,
//! borrowed, boxed, copy-on-write, C-string) share the `s` code. Decay is
//! idempotent, so `&&u32` and `u32` answer identically.

mod signature;

pub use signature::Signature;

use std::borrow::Cow;
use std::ffi::{CStr, CString};

/// Associates a native type with its single-character wire type code.
///
/// The mapping is total for every type that may appear in a descriptor:
/// a type without an impl fails the build at the call site requesting its
/// code. Implement this for newtype wrappers that marshal as one of the
/// existing codes; never re-map an already-covered type.
///
/// ```
/// use sbus::BusType;
///
/// struct SensorId(u32);
///
/// impl BusType for SensorId {
///     const CODE: char = <u32 as BusType>::CODE;
/// }
///
/// assert_eq!(sbus::type_code::<SensorId>(), 'u');
/// ```
///
/// Types outside the registry do not compile:
///
/// ```compile_fail
/// // 8-bit signed integers have no wire representation on the bus.
/// let _ = sbus::type_code::<i8>();
/// ```
#[diagnostic::on_unimplemented(
    message = "no wire type code is defined for `{Self}`",
    label = "this type cannot appear in a bus signature",
    note = "the bus alphabet covers bool, u8, u16, i16, u32, i32, u64, i64, f64 and string-like types",
    note = "`i8` and `f32` are intentionally unsupported by the wire format"
)]
pub trait BusType {
    /// The wire type code for this type.
    const CODE: char;
}

/// Wire type code for `T`, resolved at compile time.
///
/// ```
/// assert_eq!(sbus::type_code::<bool>(), 'b');
/// assert_eq!(sbus::type_code::<&str>(), 's');
/// ```
pub const fn type_code<T: BusType + ?Sized>() -> char {
    T::CODE
}

impl BusType for bool {
    const CODE: char = 'b';
}

impl BusType for u8 {
    const CODE: char = 'y';
}

// i8 has no bus representation; y is unsigned-only.

impl BusType for u16 {
    const CODE: char = 'q';
}

impl BusType for i16 {
    const CODE: char = 'n';
}

impl BusType for u32 {
    const CODE: char = 'u';
}

impl BusType for i32 {
    const CODE: char = 'i';
}

impl BusType for u64 {
    const CODE: char = 't';
}

impl BusType for i64 {
    const CODE: char = 'x';
}

// f32 has no bus representation; d is the only floating-point code.

impl BusType for f64 {
    const CODE: char = 'd';
}

impl BusType for str {
    const CODE: char = 's';
}

impl BusType for String {
    const CODE: char = 's';
}

impl BusType for Box<str> {
    const CODE: char = 's';
}

impl BusType for Cow<'_, str> {
    const CODE: char = 's';
}

impl BusType for CStr {
    const CODE: char = 's';
}

impl BusType for CString {
    const CODE: char = 's';
}

// Decay: references answer for their referent, recursively.

impl<T: BusType + ?Sized> BusType for &T {
    const CODE: char = T::CODE;
}

impl<T: BusType + ?Sized> BusType for &mut T {
    const CODE: char = T::CODE;
}
