use crate::config::AppConfig;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::{
    CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
};
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Logger target for create/delete events.
pub const AUDIT_TARGET: &str = "todolite::audit";
/// Logger target for one-line-per-request access logs.
pub const ACCESS_TARGET: &str = "todolite::access";

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";
const ROLL_SIZE: u64 = 10 * 1024 * 1024;

#[must_use]
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn rolling(base: &Path, stem: &str, keep: u32) -> Result<RollingFileAppender, Box<dyn Error>> {
    let roller = FixedWindowRoller::builder()
        .build(&format!("{}", base.join(format!("{stem}.{{}}.log")).display()), keep)?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(ROLL_SIZE)), Box::new(roller));
    Ok(RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(base.join(format!("{stem}.log")), Box::new(policy))?)
}

/// Configure logging globally for the process.
/// - console on stderr, so command output on stdout stays clean
/// - `dir/app.log` for everything except audit events (only when `dir` is given)
/// - `dir/audit.log` for `todolite::audit`
///
/// A second call in the same process keeps the first configuration.
///
/// # Errors
/// Returns an error if the log directory or an appender cannot be created.
pub fn configure_logging(dir: Option<&Path>, level: &str, retention: u32) -> Result<(), Box<dyn Error>> {
    let lvl = parse_level(level);
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let mut builder = Config::builder().appender(Appender::builder().build("console", Box::new(console)));
    let mut root = Root::builder().appender("console");
    let mut audit = Logger::builder().appender("console").additive(false);

    if let Some(dir) = dir {
        let base = PathBuf::from(dir);
        std::fs::create_dir_all(&base)?;
        builder = builder
            .appender(Appender::builder().build("app", Box::new(rolling(&base, "app", retention)?)))
            .appender(Appender::builder().build("audit", Box::new(rolling(&base, "audit", retention)?)));
        root = root.appender("app");
        audit = audit.appender("audit");
    }

    let config = builder
        .logger(audit.build(AUDIT_TARGET, lvl))
        .build(root.build(lvl))?;
    if let Err(e) = log4rs::init_config(config) {
        log::debug!("logger already initialized: {e}");
    }
    Ok(())
}

/// # Errors
/// See `configure_logging`.
pub fn configure_from_config(cfg: &AppConfig) -> Result<(), Box<dyn Error>> {
    configure_logging(cfg.log_dir.as_deref(), &cfg.log_level, cfg.log_retention)
}
