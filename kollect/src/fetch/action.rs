use std::fmt;

/// The kind of request issued against the cluster.
///
/// Every variant has its own discriminator, so log events and errors always
/// tell a list apart from a lookup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// List every resource of a kind, optionally within one namespace.
    List,

    /// Look up a single resource by name.
    Get,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = match self {
            Self::List => "list",
            Self::Get => "get",
        };
        f.write_str(val)
    }
}
