use serde::{Deserialize, Serialize};

use crate::core::columns::DEFAULT_COLUMNS;
use crate::core::types::{FormatVersion, PairsFormatKey};

/// Prefix marking an embedded SAM header line
pub const SAMHEADER_PREFIX: &str = "#samheader: ";

/// Default value of the `#shape:` field
pub const DEFAULT_SHAPE: &str = "upper triangle";

/// A header line classified by what it declares.
///
/// Borrowed from the raw line; the raw text itself is always what gets
/// written back out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    /// `## pairs format vX.Y`
    Version(FormatVersion),
    /// `#columns: name name ...`
    Columns(Vec<&'a str>),
    /// `#chromsize: name length`
    Chromsize { name: &'a str, length: u64 },
    /// Any other reserved `#key: value` field (including chromsize lines
    /// whose length does not parse)
    Field { key: PairsFormatKey, value: &'a str },
    /// `#samheader: <SAM line>`, holding the SAM line
    SamHeader(&'a str),
    /// Free-form comment or unrecognized line
    Comment(&'a str),
}

impl<'a> HeaderLine<'a> {
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        if let Some(version) = FormatVersion::parse_line(line) {
            return Self::Version(version);
        }
        if let Some(sam) = strip_samheader_prefix(line) {
            return Self::SamHeader(sam);
        }

        let Some((key, value)) = line
            .strip_prefix('#')
            .and_then(|rest| rest.split_once(':'))
            .and_then(|(key, value)| PairsFormatKey::parse(key.trim()).map(|k| (k, value.trim())))
        else {
            return Self::Comment(line);
        };

        match key {
            PairsFormatKey::Columns => Self::Columns(value.split_whitespace().collect()),
            PairsFormatKey::Chromsize => {
                let mut parts = value.split_whitespace();
                match (parts.next(), parts.next().map(str::parse::<u64>), parts.next()) {
                    (Some(name), Some(Ok(length)), None) => Self::Chromsize { name, length },
                    _ => Self::Field { key, value },
                }
            }
            _ => Self::Field { key, value },
        }
    }

    /// Reserved key of this line, if it declares one
    #[must_use]
    pub fn key(&self) -> Option<PairsFormatKey> {
        match self {
            Self::Columns(_) => Some(PairsFormatKey::Columns),
            Self::Chromsize { .. } => Some(PairsFormatKey::Chromsize),
            Self::Field { key, .. } => Some(*key),
            Self::Version(_) | Self::SamHeader(_) | Self::Comment(_) => None,
        }
    }
}

/// Strip the `#samheader:` tag, returning the embedded SAM line
#[must_use]
pub fn strip_samheader_prefix(line: &str) -> Option<&str> {
    line.strip_prefix(SAMHEADER_PREFIX)
        .or_else(|| line.strip_prefix("#samheader:"))
}

/// Wrap a SAM header line for embedding in a pairs header
#[must_use]
pub fn to_samheader_line(sam_line: &str) -> String {
    format!("{SAMHEADER_PREFIX}{sam_line}")
}

/// The `#`-prefixed header block of a pairs file, as an ordered list of lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairsHeader {
    lines: Vec<String>,
}

impl PairsHeader {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split header text into lines, dropping trailing line terminators
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over lines together with their classification
    pub fn classified(&self) -> impl Iterator<Item = (&str, HeaderLine<'_>)> + '_ {
        self.lines
            .iter()
            .map(|line| (line.as_str(), HeaderLine::classify(line)))
    }

    /// The version declaration line, if present
    #[must_use]
    pub fn version_line(&self) -> Option<&str> {
        self.classified()
            .find(|(_, kind)| matches!(kind, HeaderLine::Version(_)))
            .map(|(line, _)| line)
    }

    #[must_use]
    pub fn version(&self) -> Option<FormatVersion> {
        self.classified().find_map(|(_, kind)| match kind {
            HeaderLine::Version(version) => Some(version),
            _ => None,
        })
    }

    /// Column names from the `#columns:` line, if present
    #[must_use]
    pub fn column_names(&self) -> Option<Vec<&str>> {
        self.classified().find_map(|(_, kind)| match kind {
            HeaderLine::Columns(columns) => Some(columns),
            _ => None,
        })
    }

    /// Chromosome sizes from `#chromsize:` lines, in header order
    #[must_use]
    pub fn chromsizes(&self) -> Vec<(&str, u64)> {
        self.classified()
            .filter_map(|(_, kind)| match kind {
                HeaderLine::Chromsize { name, length } => Some((name, length)),
                _ => None,
            })
            .collect()
    }

    /// Embedded SAM header lines, with the `#samheader:` tag removed
    #[must_use]
    pub fn samheader_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| strip_samheader_prefix(line))
            .collect()
    }

    /// Raw lines declaring the given reserved key, in header order
    #[must_use]
    pub fn fields(&self, key: PairsFormatKey) -> Vec<&str> {
        self.classified()
            .filter(|(_, kind)| kind.key() == Some(key))
            .map(|(line, _)| line)
            .collect()
    }

    /// Header lines joined with newlines, each line terminated
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.iter().fold(String::new(), |mut text, line| {
            text.push_str(line);
            text.push('\n');
            text
        })
    }
}

impl From<Vec<String>> for PairsHeader {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

impl From<Vec<&str>> for PairsHeader {
    fn from(lines: Vec<&str>) -> Self {
        Self::new(lines.into_iter().map(str::to_string).collect())
    }
}

/// Builder for a fresh, well-formed pairs header
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    version: FormatVersion,
    shape: String,
    assembly: Option<String>,
    chromsizes: Vec<(String, u64)>,
    columns: Vec<String>,
}

impl Default for HeaderBuilder {
    fn default() -> Self {
        Self {
            version: FormatVersion::CURRENT,
            shape: DEFAULT_SHAPE.to_string(),
            assembly: None,
            chromsizes: Vec::new(),
            columns: DEFAULT_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl HeaderBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = shape.into();
        self
    }

    #[must_use]
    pub fn assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assembly = Some(assembly.into());
        self
    }

    /// Chromosome sizes, written in the given order
    #[must_use]
    pub fn chromsizes<I, S>(mut self, chromsizes: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        self.chromsizes = chromsizes
            .into_iter()
            .map(|(name, length)| (name.into(), length))
            .collect();
        self
    }

    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Version, shape, optional assembly, chromsizes, then columns
    #[must_use]
    pub fn build(self) -> PairsHeader {
        let mut lines = vec![self.version.to_line(), format!("#shape: {}", self.shape)];
        if let Some(assembly) = &self.assembly {
            lines.push(format!("#genome_assembly: {assembly}"));
        }
        lines.extend(
            self.chromsizes
                .iter()
                .map(|(name, length)| format!("#chromsize: {name} {length}")),
        );
        lines.push(format!("#columns: {}", self.columns.join(" ")));
        PairsHeader::new(lines)
    }
}

/// Standard header with the default columns and no chromosome sizes
#[must_use]
pub fn make_standard_pairsheader() -> PairsHeader {
    HeaderBuilder::new().build()
}
