//! Route string rules.

/// Reason a route string was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteIssue {
    /// Route does not start with `/`.
    #[error("route must start with '/'")]
    MissingLeadingSlash,
    /// Route ends with `/` and is not the root.
    #[error("route must not end with '/'")]
    TrailingSlash,
    /// Route contains `//`.
    #[error("route must not contain empty segments")]
    EmptySegment,
    /// Route contains whitespace.
    #[error("route must not contain whitespace")]
    Whitespace,
}

/// Check that `route` is absolute and normalized.
///
/// `/` is the only route allowed to end with a slash.
pub(crate) fn check_route(route: &str) -> Result<(), RouteIssue> {
    if !route.starts_with('/') {
        return Err(RouteIssue::MissingLeadingSlash);
    }
    if route == "/" {
        return Ok(());
    }
    if route.ends_with('/') {
        return Err(RouteIssue::TrailingSlash);
    }
    if route.contains("//") {
        return Err(RouteIssue::EmptySegment);
    }
    if route.chars().any(char::is_whitespace) {
        return Err(RouteIssue::Whitespace);
    }
    Ok(())
}
