//! Logging macros that work across WASM and native targets.
//!
//! On WASM the messages go to the browser console; natively to stderr.
//! All macros compile to no-ops in release builds.

/// Logs an info message (requires `debug_assertions`).
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message (requires `debug_assertions`).
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		eprintln!("[INFO] {}", format!($($arg)*));
	}};
}

/// No-op info_log in release builds.
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (requires `debug_assertions`).
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message (requires `debug_assertions`).
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		eprintln!("[WARN] {}", format!($($arg)*));
	}};
}

/// No-op warn_log in release builds.
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message (requires `debug_assertions`).
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message (requires `debug_assertions`).
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		eprintln!("[ERROR] {}", format!($($arg)*));
	}};
}

/// No-op error_log in release builds.
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	// Import macros from crate root
	use crate::{error_log, info_log, warn_log};

	#[rstest]
	fn test_logging_macros_compile() {
		info_log!("Info message: {}", "test");
		warn_log!("Warning message: {:?}", vec![1, 2, 3]);
		error_log!("Error message: {}", "error");
	}

	#[rstest]
	fn test_logging_macros_no_args() {
		info_log!("Simple info");
		warn_log!("Simple warning");
		error_log!("Simple error");
	}
}
