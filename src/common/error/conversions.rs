//! Error conversion implementations.
//!
//! Lets `?` lift package-level errors straight into the crate error without
//! going through `OoxmlError` by hand.

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => Error::Io(e),
            other => Error::Ooxml(OoxmlError::Opc(other)),
        }
    }
}
