// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # sbus - compile-time bus descriptor layer
//!
//! The descriptor half of a bus object binding: derive wire-format type
//! signatures from native Rust types and assemble the descriptor tables
//! (vtables) a bus runtime uses to dispatch method calls and advertise an
//! object's methods, signals, and properties. Everything here is resolved
//! before `main` runs, with no allocation and no runtime registration.
//!
//! The bus connection, payload marshalling, event loop, and object-path
//! registration are deliberately not part of this crate; a runtime consumes
//! the [`Vtable`] and [`Signature`] constants this crate produces.
//!
//! ## Quick Start
//!
//! ```rust
//! use sbus::vtable::{self, flags};
//! use sbus::{signature, CallContext, HandlerStatus, Signature, Vtable};
//!
//! fn set_level(call: &mut CallContext<'_>) -> HandlerStatus {
//!     // Unmarshalling the payload is the runtime's job; handlers see bytes.
//!     let _input = call.payload();
//!     HandlerStatus::Handled
//! }
//!
//! const SET_LEVEL_IN: Signature = signature!(u32, &str);
//!
//! static TABLE: Vtable = Vtable::new(&[
//!     vtable::start(0),
//!     vtable::method("SetLevel", SET_LEVEL_IN.as_str(), "", set_level, 0),
//!     vtable::signal("LevelChanged", signature!(u32).as_str(), 0),
//!     vtable::end(),
//! ]);
//!
//! assert_eq!(SET_LEVEL_IN.as_bytes_with_nul(), b"us\0");
//! assert_eq!(TABLE.len(), 4);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +------------------------------------------------------------------+
//! |                       Application Types                          |
//! |        bool, u32, String, ... (+ user BusType impls)             |
//! +------------------------------------------------------------------+
//! |                      Signature Layer                             |
//! |   BusType registry -> decay -> signature! -> Signature constant  |
//! +------------------------------------------------------------------+
//! |                       Vtable Layer                               |
//! |   start/method/signal/property builders -> Entry rows -> Vtable  |
//! +------------------------------------------------------------------+
//! |                  External Bus Runtime (not here)                 |
//! |   registration | dispatch | marshalling | introspection          |
//! +------------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`BusType`] | Maps one native type to one wire type code |
//! | [`Signature`] | NUL-terminated, order-significant code string constant |
//! | [`Entry`] | One descriptor table row (method, signal, property, delimiter) |
//! | [`Vtable`] | Framed, validated table ready for runtime registration |
//! | [`HandlerStatus`] | Handler outcome: handled, call error, or fatal |
//!
//! ## Failure Model
//!
//! Both failure classes are compile-time: a type without a [`BusType`] impl
//! fails the build at the site requesting its code, and a mis-framed const
//! table fails constant evaluation in [`Vtable::new`]. Runtime-assembled
//! tables go through [`Vtable::try_new`] instead, which is the only fallible
//! path in the crate.

pub mod dispatch;
pub mod types;
pub mod vtable;

pub use dispatch::{
    CallContext, HandlerStatus, MethodHandler, PropertyContext, PropertyGet, PropertySet,
};
pub use types::{type_code, BusType, Signature};
pub use vtable::{Entry, EntryKind, Vtable, VtableError};
