/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via `RUST_LOG`
/// - **Pretty formatting**: Human-readable output with timestamps and log levels
///
/// # Environment Variables
///
/// - `RUST_LOG=info` - Backend stubs log each operation they serve
/// - `RUST_LOG=debug` - Additionally logs the route chosen for every call
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
