//! Well-known navigation route constants.
//!
//! These must match the routes served by the directory UI. The form
//! controller redirects to the listing view after a successful
//! registration.

/// Listing view showing every registered school.
pub const ROUTE_SCHOOL_LIST: &str = "/schools";
