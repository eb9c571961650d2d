use super::*;
use debugging::session::debug_session::{Backtrace, DebugSession, LogLevel};
use std::{collections::HashSet, sync::Once, time::Duration};
use strum::IntoEnumIterator;
use testing::stuff::max_test_duration::TestDuration;
//
//
static INIT: Once = Once::new();
///
/// Once called initialisation.
fn init_once() {
    //
    // Implement your initialisation code to be called only once for current test file.
    INIT.call_once(|| {})
}
///
/// Returns:
///  - ...
#[allow(clippy::unused_unit)]
fn init_each() -> () {}
///
/// Every verdict has its own text.
#[test]
fn message() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = "zone_message";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let mut messages = HashSet::new();
    for zone in Zone::iter() {
        let message = zone.message();
        assert!(!message.is_empty(), "zone={:?}", zone);
        assert_eq!(zone.to_string(), message, "zone={:?}", zone);
        assert!(messages.insert(message), "zone={:?} duplicated message='{}'", zone, message);
    }
    assert_eq!(messages.len(), 12);
    assert_eq!(Zone::SternPort.message(), "Person Overboard at Port side stern");
    assert_eq!(Zone::ForwardStarboard.message(), "Person Overboard at Starboard side forward");
    test_duration.exit();
}
///
/// Alert is raised for every verdict but the inside one and the no-alert one.
#[test]
fn is_alert() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = "zone_is_alert";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    for zone in Zone::iter() {
        let target = !matches!(zone, Zone::Inside | Zone::NoAlert);
        assert_eq!(zone.is_alert(), target, "zone={:?}", zone);
    }
    test_duration.exit();
}
