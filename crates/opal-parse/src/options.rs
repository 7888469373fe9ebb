use chrono_tz::Tz;
use opal_model::StopDirectory;

/// Caller-supplied parse configuration.
///
/// Read-only during a parse; a single value can safely serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Zone used to interpret zone-naive timestamps and to render offsets.
    pub timezone: Tz,
    /// Stop-name to coordinate lookup for record enrichment.
    pub stops: StopDirectory,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Australia::Sydney,
            stops: StopDirectory::builtin(),
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    #[must_use]
    pub fn with_stops(mut self, stops: StopDirectory) -> Self {
        self.stops = stops;
        self
    }
}
