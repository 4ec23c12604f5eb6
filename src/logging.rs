use crate::error::AppError;

/// Route the `log` facade to the browser console.
///
/// # Errors
/// Returns an error if a logger has already been installed.
pub fn setup_logging(level: log::Level) -> Result<(), AppError> {
    console_log::init_with_level(level)?;
    log::info!("Logging initialized at {level} level");
    Ok(())
}
