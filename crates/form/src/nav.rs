//! Navigation seam.

/// Collaborator that moves the user to another route.
///
/// The form controller calls this exactly once per successful submit, with
/// [`ROUTE_SCHOOL_LIST`](schoolbook_core::routes::ROUTE_SCHOOL_LIST).
pub trait Navigator: Send + Sync {
    /// Navigate to the given route.
    fn go_to(&self, route: &str);
}
