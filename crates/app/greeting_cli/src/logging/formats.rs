use std::io::Write;

use flexi_logger::{DeferredNow, style};
use log::Record;

/// `LEVEL message` with a colored level, without timestamps.
pub fn cli_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    let level = record.level();
    write!(
        w,
        "{} {}",
        style(level).paint(format!("{level:<5}")),
        record.args()
    )
}
