// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Descriptor table integration tests.
//!
//! Builds the full interface table for a small "lamp" object the way a bus
//! runtime binding would, then walks it exactly as a registering runtime
//! does: framing check, enumeration order, flag domains, and handler
//! invocation through the stored fn pointers.

use sbus::vtable::{self, flags};
use sbus::{
    arg_names, signature, CallContext, EntryKind, HandlerStatus, PropertyContext, Signature,
    Vtable,
};
use std::mem::offset_of;

/// The native object the table describes. Offset-based properties point
/// straight into this layout.
#[repr(C)]
struct Lamp {
    serial: u64,
    level: u32,
    switch_count: u32,
}

const SET_LEVEL_IN: Signature = signature!(u32);
const SET_LEVEL_OUT: Signature = signature!(bool);
const LEVEL_CHANGED: Signature = signature!(u32, &str);

fn set_level(call: &mut CallContext<'_>) -> HandlerStatus {
    // Marshalling is the runtime's job; the test payload is the raw level.
    let Ok(raw) = <[u8; 4]>::try_from(call.payload()) else {
        return HandlerStatus::error_with_message(
            "org.naskel.sbus.Error.InvalidArgs",
            "expected a single u32 level",
        );
    };
    let level = u32::from_le_bytes(raw);
    if level > 100 {
        return HandlerStatus::error("org.naskel.sbus.Error.OutOfRange");
    }
    let Some(lamp) = call.user_data::<Lamp>() else {
        return HandlerStatus::Fatal;
    };
    lamp.level = level;
    lamp.switch_count += 1;
    call.reply().push(1);
    HandlerStatus::Handled
}

fn get_level(prop: &mut PropertyContext<'_>) -> HandlerStatus {
    let Some(lamp) = prop.user_data::<Lamp>() else {
        return HandlerStatus::Fatal;
    };
    let level = lamp.level;
    prop.value().extend_from_slice(&level.to_le_bytes());
    HandlerStatus::Handled
}

fn set_level_prop(prop: &mut PropertyContext<'_>) -> HandlerStatus {
    let Ok(raw) = <[u8; 4]>::try_from(prop.value().as_slice()) else {
        return HandlerStatus::error("org.naskel.sbus.Error.InvalidArgs");
    };
    let level = u32::from_le_bytes(raw);
    let Some(lamp) = prop.user_data::<Lamp>() else {
        return HandlerStatus::Fatal;
    };
    lamp.level = level;
    HandlerStatus::Handled
}

static LAMP_TABLE: Vtable = Vtable::new(&[
    vtable::start(flags::common::UNPRIVILEGED),
    vtable::method_n(
        "SetLevel",
        SET_LEVEL_IN.as_str(),
        SET_LEVEL_OUT.as_str(),
        arg_names!("level", "accepted"),
        set_level,
        0,
    ),
    vtable::signal_n(
        "LevelChanged",
        LEVEL_CHANGED.as_str(),
        arg_names!("level", "origin"),
        0,
    ),
    vtable::property_rw(
        "Level",
        signature!(u32).as_str(),
        get_level,
        set_level_prop,
        flags::property::EMITS_CHANGE,
    ),
    vtable::property_o(
        "Serial",
        signature!(u64).as_str(),
        offset_of!(Lamp, serial),
        flags::property::CONST,
    ),
    vtable::property_o(
        "SwitchCount",
        signature!(u32).as_str(),
        offset_of!(Lamp, switch_count),
        flags::property::EMITS_INVALIDATION | flags::common::HIDDEN,
    ),
    vtable::end(),
]);

#[test]
fn table_is_framed_and_ordered() {
    assert_eq!(LAMP_TABLE.len(), 7);
    assert_eq!(LAMP_TABLE.flags(), flags::common::UNPRIVILEGED);
    assert_eq!(LAMP_TABLE.entries()[0].kind, EntryKind::Start);
    assert_eq!(LAMP_TABLE.entries()[6].kind, EntryKind::End);

    let members: Vec<_> = LAMP_TABLE.members().map(|e| e.member).collect();
    assert_eq!(
        members,
        ["SetLevel", "LevelChanged", "Level", "Serial", "SwitchCount"]
    );
}

#[test]
fn signatures_embed_the_derived_codes() {
    let set_level = LAMP_TABLE
        .members()
        .find(|e| e.member == "SetLevel")
        .expect("SetLevel entry");
    assert_eq!(set_level.signature, "u");
    assert_eq!(set_level.result, "b");
    assert_eq!(set_level.names, "level\0accepted\0");

    let signal = LAMP_TABLE
        .members()
        .find(|e| e.member == "LevelChanged")
        .expect("LevelChanged entry");
    assert_eq!(signal.kind, EntryKind::Signal);
    assert_eq!(signal.signature, "us");
    assert!(signal.handler.is_none());
}

#[test]
fn offset_properties_point_into_the_native_layout() {
    let serial = LAMP_TABLE
        .members()
        .find(|e| e.member == "Serial")
        .expect("Serial entry");
    assert_eq!(serial.kind, EntryKind::Property);
    assert_eq!(serial.offset, 0);
    assert!(serial.get.is_none());
    assert!(!serial.is_writable_property());

    let count = LAMP_TABLE
        .members()
        .find(|e| e.member == "SwitchCount")
        .expect("SwitchCount entry");
    assert_eq!(count.offset, offset_of!(Lamp, switch_count));
}

#[test]
fn method_dispatch_through_the_stored_handler() {
    let mut lamp = Lamp {
        serial: 77,
        level: 0,
        switch_count: 0,
    };
    let entry = LAMP_TABLE
        .members()
        .find(|e| e.member == "SetLevel")
        .expect("SetLevel entry");
    let handler = entry.handler.expect("method carries a handler");

    let payload = 42u32.to_le_bytes();
    let mut reply = Vec::new();
    let mut call = CallContext::new(entry.member, &payload, &mut reply, &mut lamp);
    assert_eq!(handler(&mut call), HandlerStatus::Handled);
    assert_eq!(reply, [1]);
    assert_eq!(lamp.level, 42);
    assert_eq!(lamp.switch_count, 1);
}

#[test]
fn method_dispatch_reports_call_errors() {
    let mut lamp = Lamp {
        serial: 77,
        level: 7,
        switch_count: 0,
    };
    let entry = LAMP_TABLE
        .members()
        .find(|e| e.member == "SetLevel")
        .expect("SetLevel entry");
    let handler = entry.handler.expect("method carries a handler");

    let payload = 400u32.to_le_bytes();
    let mut reply = Vec::new();
    let mut call = CallContext::new(entry.member, &payload, &mut reply, &mut lamp);
    let status = handler(&mut call);
    assert_eq!(
        status,
        HandlerStatus::error("org.naskel.sbus.Error.OutOfRange")
    );
    assert!(!status.is_handled());
    assert!(!status.is_fatal());
    // The object stays untouched on a rejected call.
    assert_eq!(lamp.level, 7);
}

#[test]
fn property_accessors_round_trip_the_level() {
    let mut lamp = Lamp {
        serial: 77,
        level: 13,
        switch_count: 0,
    };
    let entry = LAMP_TABLE
        .members()
        .find(|e| e.member == "Level")
        .expect("Level entry");
    assert!(entry.is_writable_property());

    let mut value = Vec::new();
    let mut read = PropertyContext::new(entry.member, &mut value, &mut lamp);
    assert_eq!(entry.get.expect("getter")(&mut read), HandlerStatus::Handled);
    assert_eq!(value, 13u32.to_le_bytes());

    let mut value = 99u32.to_le_bytes().to_vec();
    let mut write = PropertyContext::new(entry.member, &mut value, &mut lamp);
    assert_eq!(entry.set.expect("setter")(&mut write), HandlerStatus::Handled);
    assert_eq!(lamp.level, 99);
}
