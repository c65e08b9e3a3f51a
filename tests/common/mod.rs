pub mod assertions;

pub use assertions::*;

/// Route kernel diagnostics into the test harness output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
