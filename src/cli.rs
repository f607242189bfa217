use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

// Largest grid whose cell count still fits in a u32
pub const MAX_DIVISIONS: u32 = 65535;

#[derive(Parser, Debug)]
#[command(name = "whitted")]
#[command(about = "Recursive ray tracer for a fixed room of spheres, mirrors and a cylinder")]
pub struct Args {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub debug_level: LogLevel,

    /// Grid cells along each side of the image plane, one pixel per cell
    #[arg(long, short = 'n', default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..=MAX_DIVISIONS as i64))]
    pub divisions: u32,

    /// Recursion cap for reflected and transmitted rays, primary rays are depth 1
    #[arg(long, short = 'd', default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_depth: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: String,
}
