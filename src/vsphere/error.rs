use std::path::PathBuf;
use std::result;
use thiserror::Error;

pub type VsphereResult<T> = result::Result<T, VsphereError>;

#[derive(Debug, Error)]
pub enum VsphereError {
    #[error("Couldn't find the `govc` executable: {}", .0.display())]
    MissingGovc(PathBuf),

    #[error("govc returned a non-zero status code and said: {stderr}")]
    CommandFailed { stderr: String },

    #[cfg(test)]
    #[error("InjectedError")]
    InjectedError,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
impl PartialEq<VsphereError> for VsphereError {
    fn eq(&self, other: &VsphereError) -> bool {
        self.to_string() == other.to_string()
    }
}
