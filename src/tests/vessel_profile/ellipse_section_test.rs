use super::*;
use debugging::session::debug_session::{Backtrace, DebugSession, LogLevel};
use std::{sync::Once, time::Duration};
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
/// Section of the band (20, 150], half beam 25.
/// The ellipse center is at y=85, semi-axes are 65 and 25.
fn section() -> EllipseSection {
    EllipseSection::new(20.0, 150.0, 25.0)
}
///
/// Skin of the ellipse is inside.
#[test]
fn contains() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = "ellipse_section_contains";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let section = section();
    #[rustfmt::skip]
    let test_data = [
        // 0
        ((0.0, 85.0), true),
        ((25.0, 85.0), true),
        ((-25.0, 85.0), true),
        ((25.1, 85.0), false),
        ((-25.1, 85.0), false),
        // 5
        ((0.0, 150.0), true),
        ((0.0, 20.0), true),
        ((1.0, 150.0), false),
        ((19.0, 124.0), true),
        ((21.0, 124.0), false),
        // 10
        ((-19.0, 124.0), true),
        ((-21.0, 124.0), false),
    ];
    for (step, ((x, y), target)) in test_data.into_iter().enumerate() {
        let result = section.contains(x, y);
        assert_eq!(
            result, target,
            "step={} x={} y={} target={} result={}",
            step, x, y, target, result
        );
    }
    test_duration.exit();
}
///
/// Transverse extent narrows towards the bow, none past it.
#[test]
fn boundary() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = "ellipse_section_boundary";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let section = section();
    assert_eq!(section.end(), 150.0);
    #[rustfmt::skip]
    let test_data = [
        (85.0, Some(25.0)),
        (124.0, Some(20.0)),
        (46.0, Some(20.0)),
        (150.0, Some(0.0)),
        (150.5, None),
        (19.0, None),
    ];
    for (step, (y, target)) in test_data.into_iter().enumerate() {
        let result = section.boundary(y);
        println!("step={} y={} target={:?} result={:?}", step, y, target, result);
        match (result, target) {
            (Some(result), Some(target)) => {
                assert!(
                    (result.right - target).abs() < 1e-9 && (result.left + target).abs() < 1e-9,
                    "step={} y={} target={:?} result={:?}",
                    step, y, target, result
                );
            }
            (None, None) => {}
            _ => panic!("step={} y={} target={:?} result={:?}", step, y, target, result),
        }
    }
    test_duration.exit();
}
