//! Host environment seam.

/// What the planner needs to know about the host environment.
///
/// The host CMS implements this against its own runtime; tests use
/// fixed-value fakes.
pub trait HostContext {
    /// True while rendering administrative screens.
    fn is_admin(&self) -> bool;

    /// True when the host serves unminified debug assets; those must come
    /// from the origin server.
    fn script_debug(&self) -> bool;

    /// True when the current user holds the given capability.
    fn user_can(&self, capability: &str) -> bool;
}
