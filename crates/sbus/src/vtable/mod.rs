// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Descriptor table construction.
//!
//! An object advertises its interface to the bus runtime as an ordered table
//! of [`Entry`] rows: one start marker, the methods/signals/properties in
//! enumeration order, one end marker. Every builder here is a pure `const
//! fn`, so complete tables live in `static`s and cost nothing at runtime:
//!
//! ```
//! use sbus::vtable::{self, flags};
//! use sbus::{CallContext, HandlerStatus, Vtable};
//!
//! fn ping(_call: &mut CallContext<'_>) -> HandlerStatus {
//!     HandlerStatus::Handled
//! }
//!
//! static TABLE: Vtable = Vtable::new(&[
//!     vtable::start(0),
//!     vtable::method("Ping", "", "", ping, flags::method::NO_REPLY),
//!     vtable::end(),
//! ]);
//! ```
//!
//! Signature strings are supplied by the caller, typically via
//! [`signature!`](crate::signature); the builders do not cross-check them
//! against the handler's actual unmarshalling. That mismatch is a logic error
//! this layer cannot detect.
//!
//! Framing (starts with start, ends with end, no interior delimiters) is
//! enforced by [`Vtable::new`] at compile time for const tables, and by
//! [`Vtable::try_new`] for tables assembled at runtime. Entry order is
//! preserved exactly; it defines the enumeration order remote peers observe.

pub mod flags;

use crate::dispatch::{MethodHandler, PropertyGet, PropertySet};
use std::fmt;

/// Discriminates the role of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Table delimiter carrying table-wide flags.
    Start,
    /// Callable member dispatched to a [`MethodHandler`].
    Method,
    /// Broadcast member; shape only, no handler.
    Signal,
    /// Readable (and optionally writable) member.
    Property,
    /// Table terminator.
    End,
}

/// One row of a descriptor table.
///
/// Fields follow the consuming runtime's native row layout: kind, member
/// name, signatures, argument names, handler/accessor references, offset,
/// flags. Only the subset matching `kind` is populated; the rest stay at
/// their neutral values. Build rows with the free functions in this module
/// rather than literally.
#[derive(Clone, Copy)]
pub struct Entry {
    /// Row discriminator.
    pub kind: EntryKind,
    /// Member name, empty for delimiters.
    pub member: &'static str,
    /// Input (or signal) signature string, NUL-free form.
    pub signature: &'static str,
    /// Result signature string, methods only.
    pub result: &'static str,
    /// Nil-delimited argument names (see [`arg_names!`](crate::arg_names)),
    /// empty when not introspected.
    pub names: &'static str,
    /// Method handler, method entries only.
    pub handler: Option<MethodHandler>,
    /// Property getter; `None` on offset-based read.
    pub get: Option<PropertyGet>,
    /// Property setter; present only on writable properties.
    pub set: Option<PropertySet>,
    /// Byte offset into the owning object for offset-based entries.
    pub offset: usize,
    /// Flag bitmask, see [`flags`].
    pub flags: u64,
}

impl Entry {
    const fn base(kind: EntryKind, member: &'static str, flags: u64) -> Self {
        Self {
            kind,
            member,
            signature: "",
            result: "",
            names: "",
            handler: None,
            get: None,
            set: None,
            offset: 0,
            flags,
        }
    }

    /// True for property entries carrying a setter.
    pub const fn is_writable_property(&self) -> bool {
        matches!(self.kind, EntryKind::Property) && self.set.is_some()
    }

    /// True for the start/end delimiters.
    pub const fn is_delimiter(&self) -> bool {
        matches!(self.kind, EntryKind::Start | EntryKind::End)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("kind", &self.kind)
            .field("member", &self.member)
            .field("signature", &self.signature)
            .field("result", &self.result)
            .field("names", &self.names)
            .field("handler", &self.handler.is_some())
            .field("get", &self.get.is_some())
            .field("set", &self.set.is_some())
            .field("offset", &self.offset)
            .field("flags", &format_args!("{:#x}", self.flags))
            .finish()
    }
}

/// Start marker opening a table; `flags` apply table-wide.
pub const fn start(flags: u64) -> Entry {
    Entry::base(EntryKind::Start, "", flags)
}

/// End marker closing a table.
pub const fn end() -> Entry {
    Entry::base(EntryKind::End, "", 0)
}

/// Directly dispatched method.
///
/// `signature` describes the input arguments, `result` the reply; `handler`
/// is invoked with the incoming call context. `flags` combines
/// [`flags::common`] and [`flags::method`] values, `0` for none.
pub const fn method(
    member: &'static str,
    signature: &'static str,
    result: &'static str,
    handler: MethodHandler,
    flags: u64,
) -> Entry {
    let mut e = Entry::base(EntryKind::Method, member, flags);
    e.signature = signature;
    e.result = result;
    e.handler = Some(handler);
    e
}

/// Method whose per-instance state the runtime locates `offset` bytes past
/// the owning object's base.
pub const fn method_o(
    member: &'static str,
    signature: &'static str,
    result: &'static str,
    handler: MethodHandler,
    offset: usize,
    flags: u64,
) -> Entry {
    let mut e = method(member, signature, result, handler, flags);
    e.offset = offset;
    e
}

/// Method with human-readable argument names for introspection.
///
/// `names` is the nil-delimited list for the input arguments, kept exactly as
/// given. The row has a single names field, as the native layout does;
/// nothing is appended for result-argument names. Callers wanting result
/// names introspectable concatenate them into the same list.
pub const fn method_n(
    member: &'static str,
    signature: &'static str,
    result: &'static str,
    names: &'static str,
    handler: MethodHandler,
    flags: u64,
) -> Entry {
    let mut e = method(member, signature, result, handler, flags);
    e.names = names;
    e
}

/// Signal member; carries a shape, never a handler.
pub const fn signal(member: &'static str, signature: &'static str, flags: u64) -> Entry {
    let mut e = Entry::base(EntryKind::Signal, member, flags);
    e.signature = signature;
    e
}

/// Signal with nil-delimited argument names for introspection.
pub const fn signal_n(
    member: &'static str,
    signature: &'static str,
    names: &'static str,
    flags: u64,
) -> Entry {
    let mut e = signal(member, signature, flags);
    e.names = names;
    e
}

/// Read-only property resolved through `get`.
///
/// `flags` combines [`flags::common`] and [`flags::property`] values.
pub const fn property(
    member: &'static str,
    signature: &'static str,
    get: PropertyGet,
    flags: u64,
) -> Entry {
    let mut e = Entry::base(EntryKind::Property, member, flags);
    e.signature = signature;
    e.get = Some(get);
    e
}

/// Writable property resolved through `get` and `set`.
pub const fn property_rw(
    member: &'static str,
    signature: &'static str,
    get: PropertyGet,
    set: PropertySet,
    flags: u64,
) -> Entry {
    let mut e = property(member, signature, get, flags);
    e.set = Some(set);
    e
}

/// Read-only property backed by a plain field `offset` bytes into the owning
/// object; the runtime marshals it directly, no accessor involved.
pub const fn property_o(
    member: &'static str,
    signature: &'static str,
    offset: usize,
    flags: u64,
) -> Entry {
    let mut e = Entry::base(EntryKind::Property, member, flags);
    e.signature = signature;
    e.offset = offset;
    e
}

/// Writable property read via `offset` and written through `set`.
pub const fn property_rwo(
    member: &'static str,
    signature: &'static str,
    set: PropertySet,
    offset: usize,
    flags: u64,
) -> Entry {
    let mut e = property_o(member, signature, offset, flags);
    e.set = Some(set);
    e
}

/// Reasons a candidate entry slice is not a well-formed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VtableError {
    /// The slice has no entries at all.
    Empty,
    /// The first entry is not a start marker.
    MissingStart,
    /// The last entry is not an end marker.
    MissingEnd,
    /// A start/end marker appears inside the body.
    InteriorDelimiter {
        /// Index of the offending entry.
        index: usize,
    },
}

impl fmt::Display for VtableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "vtable has no entries"),
            Self::MissingStart => write!(f, "vtable does not begin with a start entry"),
            Self::MissingEnd => write!(f, "vtable does not finish with an end entry"),
            Self::InteriorDelimiter { index } => {
                write!(f, "vtable has a delimiter entry inside the body at index {}", index)
            }
        }
    }
}

impl std::error::Error for VtableError {}

/// A validated, ordered descriptor table ready for registration with the bus
/// runtime.
#[derive(Debug, Clone, Copy)]
pub struct Vtable {
    entries: &'static [Entry],
}

impl Vtable {
    /// Wraps a framed entry slice; panics on malformed framing.
    ///
    /// In const context the panic is a build failure, which makes `static`
    /// tables self-checking:
    ///
    /// ```compile_fail
    /// use sbus::{vtable, Vtable};
    /// // No end marker: rejected during constant evaluation.
    /// static TABLE: Vtable = Vtable::new(&[vtable::start(0)]);
    /// ```
    pub const fn new(entries: &'static [Entry]) -> Self {
        match Self::check(entries) {
            Ok(()) => Self { entries },
            Err(VtableError::Empty) => panic!("vtable has no entries"),
            Err(VtableError::MissingStart) => {
                panic!("vtable does not begin with a start entry")
            }
            Err(VtableError::MissingEnd) => {
                panic!("vtable does not finish with an end entry")
            }
            Err(VtableError::InteriorDelimiter { .. }) => {
                panic!("vtable has a delimiter entry inside the body")
            }
        }
    }

    /// Fallible form of [`Vtable::new`] for tables assembled by generated or
    /// foreign code, where a panic would be the wrong failure mode.
    pub fn try_new(entries: &'static [Entry]) -> Result<Self, VtableError> {
        match Self::check(entries) {
            Ok(()) => {
                log::debug!("vtable accepted: {} entries", entries.len());
                Ok(Self { entries })
            }
            Err(err) => {
                log::warn!("rejecting vtable: {}", err);
                Err(err)
            }
        }
    }

    const fn check(entries: &[Entry]) -> Result<(), VtableError> {
        if entries.is_empty() {
            return Err(VtableError::Empty);
        }
        if !matches!(entries[0].kind, EntryKind::Start) {
            return Err(VtableError::MissingStart);
        }
        if !matches!(entries[entries.len() - 1].kind, EntryKind::End) {
            return Err(VtableError::MissingEnd);
        }
        let mut i = 1;
        while i < entries.len() - 1 {
            if entries[i].is_delimiter() {
                return Err(VtableError::InteriorDelimiter { index: i });
            }
            i += 1;
        }
        Ok(())
    }

    /// All entries, delimiters included, in registration order.
    pub const fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    /// Total entry count, delimiters included.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a validated table; present for completeness.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Table-wide flags carried by the start marker.
    pub const fn flags(&self) -> u64 {
        self.entries[0].flags
    }

    /// The member entries between the delimiters, in enumeration order.
    pub fn members(&self) -> impl Iterator<Item = &'static Entry> {
        let entries = self.entries;
        entries[1..entries.len() - 1].iter()
    }
}
