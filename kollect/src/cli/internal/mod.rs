//! Building blocks shared by the resource commands: parsing resource kinds,
//! resolving the fetch scope and writing results.

mod resource;
mod resource_kind;
mod scope;

use snafu::ResultExt;
use tokio::io::AsyncWriteExt;

pub(crate) use self::resource_kind::with_resource_kind;
pub use self::{
    resource::ResourceResolver,
    resource_kind::ResourceKind,
    scope::{OutputArgs, ScopeArgs},
};
use crate::cli::{Error, error};

pub async fn write_stdout(content: &str) -> Result<(), Error> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(content.as_bytes()).await.context(error::WriteStdoutSnafu)?;
    stdout.flush().await.context(error::WriteStdoutSnafu)
}

pub async fn write_stderr(content: &str) -> Result<(), Error> {
    let mut stderr = tokio::io::stderr();
    stderr.write_all(content.as_bytes()).await.context(error::WriteStderrSnafu)?;
    stderr.flush().await.context(error::WriteStderrSnafu)
}
