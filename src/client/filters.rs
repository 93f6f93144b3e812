//! Per-call options and query filters
//!
//! Explicit configuration structures with named optional fields; which
//! combinations are meaningful is checked by the query functions before
//! any request is issued.

/// Flags influencing how a query completes
#[derive(Debug, Clone, Copy, Default)]
pub struct CallOptions {
    /// Follow pagination links and return one merged response
    pub follow_next: bool,
    /// Report the service's rate-limit quota alongside the result
    pub return_quota: bool,
}

impl CallOptions {
    /// Create options with both flags off
    pub fn new() -> Self {
        Self::default()
    }

    /// Opt into pagination following
    #[must_use]
    pub fn follow_next(mut self, follow: bool) -> Self {
        self.follow_next = follow;
        self
    }

    /// Opt into quota reporting
    #[must_use]
    pub fn return_quota(mut self, report: bool) -> Self {
        self.return_quota = report;
        self
    }
}

/// Filter for address list queries.
///
/// `number` is only honored when `postcode` is present. The geographic
/// sort fields (`latitude`, `longitude`, `sort`) must be given together,
/// with `sort` set to `"distance"`.
#[derive(Debug, Clone, Default)]
pub struct AddressFilter {
    /// P6-formatted postcode to filter on
    pub postcode: Option<String>,
    /// Street number, honored only together with a postcode
    pub number: Option<u32>,
    /// Latitude the distance sort is calculated from
    pub latitude: Option<f64>,
    /// Longitude the distance sort is calculated from
    pub longitude: Option<f64>,
    /// Sort mode; `"distance"` is the only supported value
    pub sort: Option<String>,
}

impl AddressFilter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on a P6-formatted postcode
    #[must_use]
    pub fn postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    /// Filter on a street number
    #[must_use]
    pub fn number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    /// Set the latitude for distance sorting
    #[must_use]
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    /// Set the longitude for distance sorting
    #[must_use]
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    /// Set the sort mode
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

/// Filter for postcode list queries.
///
/// Same geographic sort rules as [`AddressFilter`].
#[derive(Debug, Clone, Default)]
pub struct PostcodeFilter {
    /// P4-formatted postcode area to filter on
    pub postcode_area: Option<String>,
    /// Latitude the distance sort is calculated from
    pub latitude: Option<f64>,
    /// Longitude the distance sort is calculated from
    pub longitude: Option<f64>,
    /// Sort mode; `"distance"` is the only supported value
    pub sort: Option<String>,
}

impl PostcodeFilter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on a P4-formatted postcode area
    #[must_use]
    pub fn postcode_area(mut self, area: impl Into<String>) -> Self {
        self.postcode_area = Some(area.into());
        self
    }

    /// Set the latitude for distance sorting
    #[must_use]
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    /// Set the longitude for distance sorting
    #[must_use]
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    /// Set the sort mode
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}
