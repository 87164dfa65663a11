//! Sectioned plain-text report
//!
//! Only enabled sections are written, in a fixed order. Each section is a
//! heading line followed by one result per line:
//!
//! ```text
//! Emails:
//! <email>
//! Links:
//! <url>
//! Selector Data:
//! <text>
//! Potential XSS Vulnerabilities:
//! <url> (<param>)
//! ```

use crate::config::Config;
use crate::output::bundle::ExtractionBundle;
use crate::HarvestError;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Which report sections are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSections {
    pub emails: bool,
    pub links: bool,
    pub selector_data: bool,
    pub xss: bool,
}

impl ReportSections {
    /// Enables the sections matching the configured extractions
    pub fn from_config(config: &Config) -> Self {
        Self {
            emails: config.extract.emails,
            links: config.extract.links,
            selector_data: config.extract.selector.is_some(),
            xss: config.crawler.check_xss,
        }
    }
}

/// Writes the report for the enabled sections
pub fn write_report<W: Write>(
    writer: &mut W,
    bundle: &ExtractionBundle,
    sections: ReportSections,
) -> io::Result<()> {
    if sections.emails {
        write_section(writer, "Emails:", &bundle.emails)?;
    }
    if sections.links {
        write_section(writer, "Links:", &bundle.links)?;
    }
    if sections.selector_data {
        write_section(writer, "Selector Data:", &bundle.selector_matches)?;
    }
    if sections.xss {
        write_section(
            writer,
            "Potential XSS Vulnerabilities:",
            &bundle.xss_candidates,
        )?;
    }
    writer.flush()
}

fn write_section<W: Write>(
    writer: &mut W,
    heading: &str,
    entries: &BTreeSet<String>,
) -> io::Result<()> {
    writeln!(writer, "{}", heading)?;
    for entry in entries {
        writeln!(writer, "{}", entry)?;
    }
    Ok(())
}

/// Renders the report into a string
pub fn render_report(bundle: &ExtractionBundle, sections: ReportSections) -> String {
    let mut buffer = Vec::new();
    write_report(&mut buffer, bundle, sections).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Writes the report to `path`, or to standard output when `path` is `None`
///
/// An existing file at `path` is truncated.
pub fn emit_report(
    bundle: &ExtractionBundle,
    sections: ReportSections,
    path: Option<&Path>,
) -> Result<(), HarvestError> {
    match path {
        Some(path) => {
            let mut file = BufWriter::new(File::create(path)?);
            write_report(&mut file, bundle, sections)?;
            tracing::info!("Results written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_report(&mut handle, bundle, sections)?;
        }
    }
    Ok(())
}
