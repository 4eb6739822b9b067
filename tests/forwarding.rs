//! Host forwarding behavior of `trace_values!`, observed through the
//! native capture sink.

#![cfg(all(feature = "local-native", debug_assertions))]

use nether_log::{TraceValue, ValueKind, capture_traces, trace_values};

#[test]
fn test_forwards_every_value_in_call_order() {
    let expected_line = line!() + 2;
    let records = capture_traces(|| {
        trace_values!("spawn ^0 facing ^1 speed ^2", 7i32, true, 2.5f32);
    });

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.message, "spawn ^0 facing ^1 speed ^2");
    assert!(record.file.ends_with("forwarding.rs"), "file was {}", record.file);
    assert_eq!(record.line, expected_line);

    assert_eq!(record.values.len(), 3);
    assert_eq!(record.values[0], TraceValue::from(7i32));
    assert_eq!(record.values[1], TraceValue::from(true));
    assert_eq!(record.values[2], TraceValue::from(2.5f32));
}

#[test]
fn test_forwards_zero_values() {
    let records = capture_traces(|| {
        trace_values!("nothing to see");
    });
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "nothing to see");
    assert!(records[0].values.is_empty());
}

#[test]
fn test_values_cross_untransformed() {
    let records = capture_traces(|| {
        trace_values!("mixed ^0 ^1 ^2 ^3", -1i32, 0xFFFF_FFFFu32, f64::MAX, ());
    });
    let values = &records[0].values;
    assert_eq!(values[0].kind(), ValueKind::I32);
    assert_eq!(values[0].as_i32(), -1);
    assert_eq!(values[1].as_u32(), 0xFFFF_FFFF);
    assert_eq!(values[2].as_f64(), f64::MAX);
    assert_eq!(values[3].kind(), ValueKind::Nothing);
}

#[test]
fn test_multiple_traces_stay_ordered() {
    let records = capture_traces(|| {
        for tick in 0..4i32 {
            trace_values!("tick ^0", tick);
        }
    });
    assert_eq!(records.len(), 4);
    for (tick, record) in records.iter().enumerate() {
        assert_eq!(record.values[0].as_i32(), tick as i32);
    }
}

#[test]
fn test_capture_is_scoped_to_closure() {
    trace_values!("before the sink", 1i32);
    let records = capture_traces(|| {
        trace_values!("inside the sink", 2i32);
    });
    trace_values!("after the sink", 3i32);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "inside the sink");
}

#[test]
fn test_trailing_comma_accepted() {
    let records = capture_traces(|| {
        trace_values!("trailing ^0", 9u32,);
    });
    assert_eq!(records[0].values.len(), 1);
}
