//! Structural alternatives for first-party components.
//!
//! Components are published under an organization scope with a dotted local
//! name: `@org/<namespace>[.<namespace>...].<leaf>`. Unscoped names never
//! count, dotted or not, and neither do scoped names without a dot.

/// Component name as it appears in a flat install or below a nested
/// `node_modules`: `@scope/local` where `local` contains a dot.
pub const COMPONENT_NAME: &str = r"@[^/]+/[^/]*\.[^/]*";

/// Component name inside a flattened store entry: `@scope+local[@version...]`.
///
/// The local name ends at the first `@`, so a dotted version such as
/// `@myorg+button@1.0.0` is not mistaken for a component.
pub const COMPONENT_STORE_NAME: &str = r"@[^/@+]+\+[^/@+]*\.[^/]*";
