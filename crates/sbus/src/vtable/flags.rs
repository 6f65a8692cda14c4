// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Entry flag constants, combined with bitwise-or.
//!
//! Three disjoint namespaces share one `u64` field: [`common`] flags apply to
//! any member, [`method`] flags only to method entries, [`property`] flags
//! only to property entries. Bit positions follow the consuming runtime's
//! native table layout, so a table built here registers unchanged. Applying a
//! flag outside its namespace (e.g. `method::NO_REPLY` on a property) is a
//! caller error this layer does not check.

/// Flags valid on any table entry.
pub mod common {
    /// Member is deprecated; introspection marks it as such.
    pub const DEPRECATED: u64 = 1 << 0;

    /// Member is hidden from introspection.
    pub const HIDDEN: u64 = 1 << 1;

    /// Member may be invoked without privilege checks.
    pub const UNPRIVILEGED: u64 = 1 << 2;
}

/// Flags valid on method entries only.
pub mod method {
    /// Caller does not expect a reply message.
    pub const NO_REPLY: u64 = 1 << 3;
}

/// Flags valid on property entries only.
pub mod property {
    /// Value never changes for the lifetime of the object.
    pub const CONST: u64 = 1 << 4;

    /// Changes are announced with the new value attached.
    pub const EMITS_CHANGE: u64 = 1 << 5;

    /// Changes are announced without the new value (invalidation only).
    pub const EMITS_INVALIDATION: u64 = 1 << 6;

    /// Changes are only announced when explicitly requested.
    pub const EXPLICIT: u64 = 1 << 7;

    /// No property flags.
    pub const NONE: u64 = 0;
}
