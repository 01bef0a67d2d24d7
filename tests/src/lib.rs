//! Workspace-level tests that only touch the public `iprange-common` API.

#[cfg(test)]
mod expansion;
#[cfg(test)]
mod parsing;
