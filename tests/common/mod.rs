#![allow(dead_code)]

use payload_list::{LinkedList, Record};
use simplelog::{Config, LevelFilter, TestLogger};

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Build a list of records from `(number, text)` pairs, in order.
pub fn records(pairs: &[(i32, &str)]) -> LinkedList<Record> {
    let mut list = LinkedList::new();
    for &(number, text) in pairs {
        list.push_back(Record::new(number, text).unwrap()).unwrap();
    }
    list
}

/// `(number, text)` pairs of a list, front to back.
pub fn pairs(list: &LinkedList<Record>) -> Vec<(i32, String)> {
    list.iter().map(|r| (r.number(), r.text().to_string())).collect()
}
