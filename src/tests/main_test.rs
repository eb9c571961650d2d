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
/// Parses the command line, negative coordinates included.
fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("mob-locator").chain(args.iter().copied()))
        .unwrap_or_else(|err| panic!("Failed parsing args={:?}: {}", args, err))
}
///
/// Text of the verdict for the points given on the command line.
#[test]
fn locate_ok() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = "main_locate_ok";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    #[rustfmt::skip]
    let test_data: [(&[&str], &str); 6] = [
        (&["0", "0", "0"], "Inside the hull, no alert"),
        (&["-30", "-130", "0"], "Person Overboard at Port side stern"),
        (&["30", "0", "0"], "Person Overboard at Starboard side middle"),
        (&["0", "0", "-20"], "Person Overboard at extreme depth"),
        (&["--depth-threshold", "-25", "0", "0", "-20"], "Inside the hull, no alert"),
        (&["0", "160", "0"], "Person Overboard at forwardmost point"),
    ];
    for (step, (args, target)) in test_data.into_iter().enumerate() {
        match locate(&cli(args)) {
            Ok(result) => assert_eq!(
                result, target,
                "step={} args={:?} target={} result={}",
                step, args, target, result
            ),
            Err(err) => panic!("step={} args={:?} unexpected error: {}", step, args, err),
        }
    }
    test_duration.exit();
}
///
/// Invalid dimensions are reported as an error naming the dimension.
#[test]
fn locate_invalid_dimension() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = "main_locate_invalid_dimension";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    #[rustfmt::skip]
    let test_data: [(&[&str], &str); 3] = [
        (&["--length", "0", "0", "0", "0"], "length"),
        (&["--width", "-50", "0", "0", "0"], "width"),
        (&["--length", "60", "0", "0", "0"], "Inconsistent sections"),
    ];
    for (step, (args, target)) in test_data.into_iter().enumerate() {
        match locate(&cli(args)) {
            Ok(result) => panic!("step={} args={:?} error expected, result={}", step, args, result),
            Err(err) => {
                let err = err.to_string();
                assert!(
                    err.starts_with("mob-locator | ") && err.contains(target),
                    "step={} args={:?} target={} result={}",
                    step, args, target, err
                );
            }
        }
    }
    test_duration.exit();
}
