//! Classification of SAM header lines embedded in pairs headers.
//!
//! Lines are kept as opaque tab-separated text. Only the record type and the
//! few tags needed for merging are inspected:
//!
//! | Record | Tags read |
//! |--------|-----------|
//! | `@HD`  | none (compared verbatim) |
//! | `@SQ`  | `SN` |
//! | `@PG`  | `ID`, `PN`, `PP` |

/// Kind of SAM header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamLineKind {
    /// `@HD` file-level metadata
    Metadata,
    /// `@SQ` sequence dictionary entry
    Sequence,
    /// `@PG` program record
    Program,
    /// `@RG`, `@CO` and anything else
    Other,
}

impl SamLineKind {
    #[must_use]
    pub fn of(line: &str) -> Self {
        match record_type(line) {
            "@HD" => Self::Metadata,
            "@SQ" => Self::Sequence,
            "@PG" => Self::Program,
            _ => Self::Other,
        }
    }
}

fn record_type(line: &str) -> &str {
    line.split('\t').next().unwrap_or_default()
}

/// Value of the first `TAG:value` field with the given tag
#[must_use]
pub fn get_tag<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    line.split('\t').skip(1).find_map(|field| {
        field
            .split_once(':')
            .filter(|(t, _)| *t == tag)
            .map(|(_, value)| value)
    })
}

/// Rewrite the values of selected tags, leaving every other field untouched
#[must_use]
pub fn rewrite_tags(line: &str, mut rewrite: impl FnMut(&str, &str) -> Option<String>) -> String {
    let mut fields = line.split('\t');
    let mut out: Vec<String> = fields.next().map(str::to_string).into_iter().collect();
    for field in fields {
        let replaced = field
            .split_once(':')
            .and_then(|(tag, value)| rewrite(tag, value).map(|v| format!("{tag}:{v}")));
        out.push(replaced.unwrap_or_else(|| field.to_string()));
    }
    out.join("\t")
}

/// An `@PG` line with its identifying tags pulled out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramRecord {
    /// `ID` tag; unique within one SAM header
    pub id: String,

    /// `PN` tag
    pub name: Option<String>,

    /// `PP` tag, the `ID` of the previous program in the chain
    pub previous: Option<String>,

    /// `VN` tag
    pub version: Option<String>,

    /// `CL` tag
    pub command_line: Option<String>,

    /// Any further `TAG:value` fields, in order
    pub extra: Vec<(String, String)>,
}

impl ProgramRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            previous: None,
            version: None,
            command_line: None,
            extra: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_command_line(mut self, command_line: impl Into<String>) -> Self {
        self.command_line = Some(command_line.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((tag.into(), value.into()));
        self
    }

    /// Parse an `@PG` line. Returns `None` for other records or when `ID` is missing.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        if SamLineKind::of(line) != SamLineKind::Program {
            return None;
        }

        let mut record = Self {
            id: String::new(),
            name: None,
            previous: None,
            version: None,
            command_line: None,
            extra: Vec::new(),
        };
        let mut has_id = false;

        for field in line.split('\t').skip(1) {
            let Some((tag, value)) = field.split_once(':') else {
                continue;
            };
            match tag {
                "ID" if !has_id => {
                    record.id = value.to_string();
                    has_id = true;
                }
                "PN" => record.name = Some(value.to_string()),
                "PP" => record.previous = Some(value.to_string()),
                "VN" => record.version = Some(value.to_string()),
                "CL" => record.command_line = Some(value.to_string()),
                _ => record.extra.push((tag.to_string(), value.to_string())),
            }
        }

        has_id.then_some(record)
    }

    /// Render as a tab-separated `@PG` line (`ID`, `PN`, `PP`, `VN`, `CL`, then extras)
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut fields = vec!["@PG".to_string(), format!("ID:{}", self.id)];
        let tagged = [
            ("PN", &self.name),
            ("PP", &self.previous),
            ("VN", &self.version),
            ("CL", &self.command_line),
        ];
        for (tag, value) in tagged {
            if let Some(value) = value {
                fields.push(format!("{tag}:{value}"));
            }
        }
        for (tag, value) in &self.extra {
            fields.push(format!("{tag}:{value}"));
        }
        fields.join("\t")
    }
}
