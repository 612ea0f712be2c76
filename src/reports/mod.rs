mod log;
mod tables;

pub use self::log::ResultLog;

use gearforge::catalog::SlotCatalog;
use gearforge::search::Combination;
use std::ops::Range;

pub fn print_combination(combo: &Combination) {
    println!("\n{}", tables::combination(combo));
    println!("{}", tables::summary(&combo.totals));
}

pub fn print_slot_summary(catalog: &SlotCatalog) {
    println!("\n{}", tables::slot_summary(catalog));
}

pub fn print_ranges(ranges: &[Range<u64>]) {
    println!("\n{}", tables::ranges(ranges));
}
