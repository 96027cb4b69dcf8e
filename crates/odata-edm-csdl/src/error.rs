// crates/odata-edm-csdl/src/error.rs

use quick_xml::Error as XmlError;
use std::fmt;
use std::io;
use std::string::FromUtf8Error;

/// Errors that can occur while writing a CSDL document.
///
/// The writer performs no model validation, so every variant describes a
/// failure of the output side. After any error the output stream holds a
/// partial document and must be discarded.
#[derive(Debug)]
pub enum CsdlError {
    /// The underlying stream failed to accept or flush data.
    Io(io::Error),

    /// An error reported by the `quick-xml` writer.
    XmlWriting(XmlError),

    /// The in-memory output was not valid UTF-8.
    Utf8(FromUtf8Error),

    /// A `WriterConfig` value the XML writer cannot honour.
    InvalidConfig { field: &'static str, reason: String },

    /// A tree writer call broke the element nesting contract
    /// (e.g. closing with no open element, finalizing twice).
    WriterState {
        operation: &'static str,
        reason: &'static str,
    },
}

impl From<io::Error> for CsdlError {
    fn from(e: io::Error) -> Self {
        CsdlError::Io(e)
    }
}

impl From<XmlError> for CsdlError {
    fn from(e: XmlError) -> Self {
        CsdlError::XmlWriting(e)
    }
}

impl From<FromUtf8Error> for CsdlError {
    fn from(e: FromUtf8Error) -> Self {
        CsdlError::Utf8(e)
    }
}

impl fmt::Display for CsdlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsdlError::Io(e) => write!(f, "Serialization I/O failure: {}", e),
            CsdlError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            CsdlError::Utf8(e) => write!(f, "Output is not valid UTF-8: {}", e),
            CsdlError::InvalidConfig { field, reason } => {
                write!(f, "Invalid writer configuration for '{}': {}", field, reason)
            }
            CsdlError::WriterState { operation, reason } => {
                write!(f, "Invalid tree writer call {}: {}", operation, reason)
            }
        }
    }
}

impl std::error::Error for CsdlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CsdlError::Io(e) => Some(e),
            CsdlError::XmlWriting(e) => Some(e),
            CsdlError::Utf8(e) => Some(e),
            CsdlError::InvalidConfig { .. } | CsdlError::WriterState { .. } => None,
        }
    }
}
