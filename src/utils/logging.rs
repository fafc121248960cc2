use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Initialize logging for a binary.
///
/// Format: `[HH:MM:SS] [LEVEL] message`. INFO and above by default;
/// diagnostics go to standard error, leaving standard output to the
/// interactive prompts.
pub fn init_logger() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .init();
}
