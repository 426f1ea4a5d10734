//! Logging macros over the process-wide logger
//!
//! ```
//! use huelog::{info, warn};
//!
//! let user = "ada";
//! info!("login for {user}").ok();
//! warn!("slow request"; "status" => 200, "path" => "/health").ok();
//! ```
//!
//! Each macro evaluates to [`Result<()>`](crate::Result) carrying sink failures.

/// Log at an explicit level
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $(, $arg:expr)* $(; $($key:literal => $value:expr),+ $(,)?)?) => {{
        let level: $crate::Level = $level;
        let logger = $crate::logger();
        if $crate::Logger::is_enabled(&*logger, level) {
            let record = $crate::Record::new(level, ::std::format!($fmt $(, $arg)*))
                .with_target(::std::module_path!())
                .with_location(::std::file!(), ::std::line!())
                $($(.with_attr($crate::Attr::new($key, $value)))+)?;
            $crate::Logger::log(&*logger, record)
        } else {
            $crate::Result::Ok(())
        }
    }};
}

/// Log an error
#[macro_export]
macro_rules! error {
    ($($tt:tt)+) => { $crate::log!($crate::Level::ERROR, $($tt)+) };
}

/// Log a warning
#[macro_export]
macro_rules! warn {
    ($($tt:tt)+) => { $crate::log!($crate::Level::WARN, $($tt)+) };
}

/// Log info
#[macro_export]
macro_rules! info {
    ($($tt:tt)+) => { $crate::log!($crate::Level::INFO, $($tt)+) };
}

/// Log debug
#[macro_export]
macro_rules! debug {
    ($($tt:tt)+) => { $crate::log!($crate::Level::DEBUG, $($tt)+) };
}
