use snafu::Snafu;

/// Errors raised while constructing a collection.
///
/// Searching never fails: a pattern set that cannot be compiled as a regular
/// expression falls back to substring matching instead.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A `kind` or `apiVersion` tag was empty.
    #[snafu(display("Collection kind and apiVersion tags must not be empty"))]
    EmptyTag,
}
