use std::io::Write;

use env_logger::{Builder, Env, Target};
use log::Level;

/// Initializes stderr logging with the fixed operator tags.
///
/// Every line is prefixed `[PARSER INFO]` or `[PARSER ERROR]` —
/// the supervising process multiplexes our stderr with its own and
/// filters on that tag. Stdout stays clean for the final JSON.
///
/// `RUST_LOG` still works for filtering; default level is `info`.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .format(|buf, record| {
            let tag = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN",
                _ => "INFO",
            };
            writeln!(buf, "[PARSER {tag}] {}", record.args())
        })
        .init();
}
