#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rainbow::{Observation, Rainbow};
pub use rainbow_mock::MockConnector;
use rainbow_mock::fixtures::synthetic_daily;

/// Construct a UTC midnight for readability in tests.
pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date")
        .and_utc()
}

/// `n` synthetic daily observations spread over 2012-2024.
pub fn history(n: usize) -> Vec<Observation> {
    synthetic_daily(n, day(2012, 1, 1), day(2024, 12, 31), 7)
}

pub fn failing(name: &'static str, msg: &str) -> Arc<MockConnector> {
    MockConnector::builder().name(name).fails(msg).build()
}

pub fn returning(name: &'static str, n: usize) -> Arc<MockConnector> {
    MockConnector::builder().name(name).returns(history(n)).build()
}

pub fn rainbow_with(connectors: &[Arc<MockConnector>]) -> Rainbow {
    connectors
        .iter()
        .fold(Rainbow::builder(), |b, c| b.with_connector(c.clone()))
        .build()
        .expect("at least one connector")
}
