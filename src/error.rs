use thiserror::Error;

/// Errors surfaced by the weather data adapter.
///
/// The scoring engine is total over its input domain and has no error type.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The forecast request failed (transport error or non-2xx status).
    /// Display is a fixed user-facing message; the underlying cause is
    /// logged where the request fails and never shown to the user.
    #[error("failed to fetch weather data; please try again later")]
    Fetch,

    /// The provider answered successfully but the payload did not match the
    /// expected shape (missing daily array, or parallel arrays of
    /// mismatched length).
    #[error("malformed forecast response: {0}")]
    Decode(String),
}
