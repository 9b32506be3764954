// SPDX-License-Identifier: MIT
//
// Test support: a per-thread log capture and an RGB sampling grid.
//
// The `log` facade takes one logger per process and the test harness runs
// tests on many threads, so records are tagged with the emitting thread and
// each test only sees its own.

use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::model::Rgb;

struct Capture;

static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();
static RECORDS: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());

impl Log for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let entry = (thread::current().id(), record.level(), record.args().to_string());
        RECORDS.lock().unwrap_or_else(std::sync::PoisonError::into_inner).push(entry);
    }

    fn flush(&self) {}
}

/// Run `f` and return its result with the records it logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });

    let me = thread::current().id();
    let take = || {
        let mut records = RECORDS.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let (mine, rest) = records.drain(..).partition::<Vec<_>, _>(|(id, ..)| *id == me);
        *records = rest;
        mine.into_iter().map(|(_, level, text)| (level, text)).collect::<Vec<_>>()
    };

    take();
    let out = f();
    (out, take())
}

/// Every RGB color whose channels are multiples of `step`, plus 255.
pub fn grid(step: usize) -> Vec<Rgb> {
    let mut axis: Vec<u8> = (0..=255u8).step_by(step).chain(std::iter::once(255)).collect();
    axis.dedup();
    let mut colors = Vec::with_capacity(axis.len().pow(3));
    for &r in &axis {
        for &g in &axis {
            for &b in &axis {
                colors.push(Rgb::from_bytes([r, g, b]));
            }
        }
    }
    colors
}
