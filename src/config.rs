use atml::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Rejected script rows are warnings, so they show up by default.
///
/// `RUST_LOG` raises or lowers the level, e.g. `RUST_LOG=info` to follow authorizations and
/// transfers as the banks log them.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
