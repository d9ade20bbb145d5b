use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::fake_host::{ManualFrames, RefusingFrames};

fn counter() -> Rc<Cell<u32>> {
    Rc::new(Cell::new(0))
}

#[test]
fn five_calls_in_one_frame_run_work_once() {
    let frames = Rc::new(ManualFrames::new());
    let throttle = FrameThrottle::new(Rc::clone(&frames));
    let runs = counter();

    let mut queued = 0;
    for _ in 0..5 {
        let runs = Rc::clone(&runs);
        if throttle.schedule(move || runs.set(runs.get() + 1)) {
            queued += 1;
        }
    }

    assert_eq!(queued, 1);
    assert_eq!(frames.requests.get(), 1);
    assert_eq!(runs.get(), 0, "work must wait for the frame");

    frames.run_frame();
    assert_eq!(runs.get(), 1);
}

#[test]
fn flag_clears_after_frame_runs() {
    let frames = Rc::new(ManualFrames::new());
    let throttle = FrameThrottle::new(Rc::clone(&frames));
    let runs = counter();

    let r = Rc::clone(&runs);
    assert!(throttle.schedule(move || r.set(r.get() + 1)));
    assert!(throttle.is_pending());
    frames.run_frame();
    assert!(!throttle.is_pending());

    let r = Rc::clone(&runs);
    assert!(throttle.schedule(move || r.set(r.get() + 1)));
    frames.run_frame();
    assert_eq!(runs.get(), 2);
    assert_eq!(frames.requests.get(), 2);
}

#[test]
fn dropped_calls_see_latest_state_through_shared_source() {
    let frames = Rc::new(ManualFrames::new());
    let throttle = FrameThrottle::new(Rc::clone(&frames));
    let offset = Rc::new(Cell::new(0.0_f64));
    let seen = Rc::new(Cell::new(-1.0_f64));

    for y in [10.0, 20.0, 30.0] {
        offset.set(y);
        let offset = Rc::clone(&offset);
        let seen = Rc::clone(&seen);
        throttle.schedule(move || seen.set(offset.get()));
    }
    frames.run_frame();
    assert!((seen.get() - 30.0).abs() < f64::EPSILON);
}

#[test]
fn separate_throttles_do_not_block_each_other() {
    let frames = Rc::new(ManualFrames::new());
    let a = FrameThrottle::new(Rc::clone(&frames));
    let b = FrameThrottle::new(Rc::clone(&frames));

    assert!(a.schedule(|| {}));
    assert!(b.schedule(|| {}));
    assert_eq!(frames.queued(), 2);
}

#[test]
fn refused_frame_runs_inline_and_resets_flag() {
    let throttle = FrameThrottle::new(Rc::new(RefusingFrames));
    let runs = counter();

    for _ in 0..3 {
        let r = Rc::clone(&runs);
        assert!(!throttle.schedule(move || r.set(r.get() + 1)));
        assert!(!throttle.is_pending());
    }
    assert_eq!(runs.get(), 3);
}
