// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Handler contract between descriptor entries and the bus runtime.
//!
//! Dispatch itself lives in the runtime that registers a [`Vtable`]; this
//! module only fixes the shapes the runtime invokes. Handlers are plain `fn`
//! pointers so vtable entries stay const-constructible, and every payload is
//! opaque bytes: marshalling is the runtime's concern, not this crate's.
//!
//! [`Vtable`]: crate::Vtable

use std::any::Any;
use std::fmt;

/// Method handler invoked with the incoming call and an output channel for
/// the reply.
pub type MethodHandler = fn(&mut CallContext<'_>) -> HandlerStatus;

/// Property getter invoked on read.
pub type PropertyGet = fn(&mut PropertyContext<'_>) -> HandlerStatus;

/// Property setter invoked on write.
pub type PropertySet = fn(&mut PropertyContext<'_>) -> HandlerStatus;

/// Outcome of a handler invocation, as reported back to the dispatching
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerStatus {
    /// The call was handled; any reply bytes are in the context.
    Handled,
    /// Recoverable call-level failure, reported to the remote caller as a
    /// named bus error. Dispatch continues normally afterwards.
    CallError {
        /// Bus error name, e.g. `org.example.Error.OutOfRange`.
        name: String,
        /// Optional human-readable detail.
        message: Option<String>,
    },
    /// Unrecoverable dispatch failure; the runtime should abort dispatch for
    /// this connection.
    Fatal,
}

impl HandlerStatus {
    /// Recoverable call error without detail text.
    pub fn error(name: impl Into<String>) -> Self {
        Self::CallError {
            name: name.into(),
            message: None,
        }
    }

    /// Recoverable call error with detail text.
    pub fn error_with_message(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CallError {
            name: name.into(),
            message: Some(message.into()),
        }
    }

    /// True for [`HandlerStatus::Handled`].
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }

    /// True for [`HandlerStatus::Fatal`].
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Borrowed view of one incoming method call, constructed by the runtime for
/// the duration of the dispatch.
pub struct CallContext<'a> {
    member: &'a str,
    payload: &'a [u8],
    reply: &'a mut Vec<u8>,
    user_data: &'a mut dyn Any,
}

impl<'a> CallContext<'a> {
    /// Assembles a call context. `payload` holds the marshalled input
    /// arguments, `reply` receives the marshalled result, `user_data` is the
    /// opaque per-call state the runtime associated with the object.
    pub fn new(
        member: &'a str,
        payload: &'a [u8],
        reply: &'a mut Vec<u8>,
        user_data: &'a mut dyn Any,
    ) -> Self {
        Self {
            member,
            payload,
            reply,
            user_data,
        }
    }

    /// Name of the invoked member.
    pub fn member(&self) -> &str {
        self.member
    }

    /// Marshalled input arguments, opaque to this layer.
    pub fn payload(&self) -> &[u8] {
        self.payload
    }

    /// Output channel for the marshalled reply.
    pub fn reply(&mut self) -> &mut Vec<u8> {
        self.reply
    }

    /// Per-call user data, downcast to the concrete type the runtime stored.
    pub fn user_data<T: 'static>(&mut self) -> Option<&mut T> {
        self.user_data.downcast_mut()
    }
}

impl fmt::Debug for CallContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallContext")
            .field("member", &self.member)
            .field("payload_len", &self.payload.len())
            .finish_non_exhaustive()
    }
}

/// Borrowed view of one property access, constructed by the runtime for the
/// duration of the get or set.
pub struct PropertyContext<'a> {
    member: &'a str,
    value: &'a mut Vec<u8>,
    user_data: &'a mut dyn Any,
}

impl<'a> PropertyContext<'a> {
    /// Assembles a property context. On get the accessor fills `value`; on
    /// set the runtime pre-fills it with the marshalled incoming value.
    pub fn new(member: &'a str, value: &'a mut Vec<u8>, user_data: &'a mut dyn Any) -> Self {
        Self {
            member,
            value,
            user_data,
        }
    }

    /// Name of the accessed property.
    pub fn member(&self) -> &str {
        self.member
    }

    /// Marshalled property value buffer.
    pub fn value(&mut self) -> &mut Vec<u8> {
        self.value
    }

    /// Per-call user data, downcast to the concrete type the runtime stored.
    pub fn user_data<T: 'static>(&mut self) -> Option<&mut T> {
        self.user_data.downcast_mut()
    }
}

impl fmt::Debug for PropertyContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyContext")
            .field("member", &self.member)
            .field("value_len", &self.value.len())
            .finish_non_exhaustive()
    }
}
