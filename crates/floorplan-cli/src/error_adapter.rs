//! Converts [`FloorplanError`] into miette reports.
//!
//! A [`floorplan_parser::error::ParseError`] can hold several diagnostics;
//! each one becomes its own [`Reportable`] with the source attached. Every
//! other error becomes a single report without source.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use floorplan::FloorplanError;
use floorplan_parser::error::Diagnostic;

/// One report rendered by the CLI.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parser diagnostic and the source it points into.
    Diagnostic {
        diag: &'a Diagnostic,
        src: &'a str,
    },
    /// Any other error, reported without source.
    Error(&'a FloorplanError),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic { diag, .. } => f.write_str(diag.message()),
            Reportable::Error(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic { .. } => None,
            Reportable::Error(err) => std::error::Error::source(*err),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic { diag, .. } => diag
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display>),
            Reportable::Error(err) => {
                let code = match err {
                    FloorplanError::Io(_) => "floorplan::io",
                    FloorplanError::Parse { .. } => return None,
                    FloorplanError::Config(_) => "floorplan::config",
                    FloorplanError::Export(_) => "floorplan::export",
                };
                Some(Box::new(code))
            }
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic { diag, .. } => diag
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            Reportable::Error(FloorplanError::Config(_)) => Some(Box::new(
                "check the [render] and [style] sections of the configuration file",
            )),
            Reportable::Error(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic { src, .. } => Some(src as &dyn miette::SourceCode),
            Reportable::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Reportable::Diagnostic { diag, .. } = self else {
            return None;
        };
        let labels = diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Splits an error into the reports the CLI prints, one per parser diagnostic.
pub fn to_reportables(err: &FloorplanError) -> Vec<Reportable<'_>> {
    match err {
        FloorplanError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Diagnostic { diag, src })
            .collect(),
        _ => vec![Reportable::Error(err)],
    }
}

#[cfg(test)]
mod tests {
    use floorplan_parser::{
        Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("unknown wall direction `north`")
            .with_code(ErrorCode::E200)
            .with_label(Span::new(0..5), "here")
            .with_help("use top, right, bottom or left");
        let err = FloorplanError::new_parse_error(ParseError::from(diag), "north");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        let report = &reportables[0];
        assert!(matches!(report, Reportable::Diagnostic { .. }));
        assert_eq!(report.to_string(), "unknown wall direction `north`");
        assert_eq!(report.code().unwrap().to_string(), "E200");
        assert!(report.help().is_some());
        assert!(report.source_code().is_some());
    }

    #[test]
    fn test_multiple_diagnostics() {
        let diags = vec![
            Diagnostic::error("first error")
                .with_code(ErrorCode::E001)
                .with_label(Span::new(0..5), "first"),
            Diagnostic::error("second error")
                .with_code(ErrorCode::E002)
                .with_label(Span::new(10..15), "second"),
        ];
        let err = FloorplanError::new_parse_error(ParseError::from(diags), "source code here...");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "first error");
        assert_eq!(reportables[1].to_string(), "second error");
    }

    #[test]
    fn test_config_error() {
        let err = FloorplanError::Config("Invalid room fill color in config".to_string());

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        let report = &reportables[0];
        assert!(matches!(report, Reportable::Error(_)));
        assert_eq!(
            report.to_string(),
            "Configuration error: Invalid room fill color in config"
        );
        assert_eq!(report.code().unwrap().to_string(), "floorplan::config");
        assert!(report.help().is_some());
        assert!(report.source_code().is_none());
        assert!(report.labels().is_none());
    }

    #[test]
    fn test_primary_flag_on_labels() {
        let diag = Diagnostic::error("duplicate room name `A`")
            .with_label(Span::new(10..11), "duplicate")
            .with_secondary_label(Span::new(0..1), "first defined here");

        let report = Reportable::Diagnostic {
            diag: &diag,
            src: "A.........A",
        };

        let labels: Vec<_> = report.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert_eq!(labels[1].label(), Some("first defined here"));
        assert!(!labels[1].primary());
    }
}
