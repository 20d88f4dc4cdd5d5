use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Version token is empty")]
    Empty,

    #[error("`master` cannot stand for itself; expected a release line such as 5.9")]
    LatestAliasNotAllowed,
}
