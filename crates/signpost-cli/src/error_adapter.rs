//! Error adapter for converting SignpostError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use signpost::SignpostError;

/// Adapter that renders a [`SignpostError`] as a miette diagnostic.
///
/// Signpost errors carry no source spans, so the adapter contributes a code
/// and, where one helps, a hint.
pub struct ErrorAdapter<'a>(pub &'a SignpostError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SignpostError::Io(_) => "signpost::io",
            SignpostError::Geometry(_) => "signpost::geometry",
            SignpostError::Config(_) => "signpost::config",
            SignpostError::Transition(_) => "signpost::transition",
            SignpostError::Export(_) => "signpost::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            SignpostError::Geometry(_) => {
                "screen, anchor, highlight and item sizes must be finite and non-negative"
            }
            SignpostError::Config(_) => "check the scene file and the configuration file",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use signpost::GeometryError;

    use super::*;

    #[test]
    fn test_codes() {
        let err = SignpostError::Config("bad".to_string());
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "signpost::config");
        assert_eq!(adapter.to_string(), "Configuration error: bad");

        let err = SignpostError::Io(std::io::Error::other("disk"));
        assert_eq!(
            ErrorAdapter(&err).code().unwrap().to_string(),
            "signpost::io"
        );
    }

    #[test]
    fn test_geometry_help() {
        let err = SignpostError::from(GeometryError::NonPositiveArrow(0.0));
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "signpost::geometry");
        assert!(adapter.help().is_some());
        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_io_has_source() {
        let err = SignpostError::Io(std::io::Error::other("disk"));
        let adapter = ErrorAdapter(&err);
        assert!(std::error::Error::source(&adapter).is_some());
        assert!(adapter.help().is_none());
    }
}
