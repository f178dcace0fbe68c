//! Term sources: where primary and associative terms come from.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SourceError;

/// Terms plus optional parallel columns. Optional columns are either empty
/// or exactly as long as `terms`; a blank cell means "no value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermColumns {
    pub terms: Vec<String>,
    pub descriptions: Vec<String>,
    pub skus: Vec<String>,
    pub urls: Vec<String>,
    pub image_urls: Vec<String>,
}

impl TermColumns {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn validate(&self) -> Result<(), SourceError> {
        let expected = self.terms.len();
        let columns: [(&'static str, &Vec<String>); 4] = [
            ("descriptions", &self.descriptions),
            ("skus", &self.skus),
            ("urls", &self.urls),
            ("image_urls", &self.image_urls),
        ];
        for (column, values) in columns {
            if !values.is_empty() && values.len() != expected {
                return Err(SourceError::ColumnLength {
                    column,
                    expected,
                    actual: values.len(),
                });
            }
        }
        Ok(())
    }

    /// Keeps the first `limit` rows. Zero means no limit.
    pub fn limit(mut self, limit: usize) -> Self {
        if limit == 0 || limit >= self.terms.len() {
            return self;
        }
        for column in [
            &mut self.terms,
            &mut self.descriptions,
            &mut self.skus,
            &mut self.urls,
            &mut self.image_urls,
        ] {
            column.truncate(limit);
        }
        self
    }

    /// Value of an optional column at `index`, if present and not blank.
    pub fn cell(column: &[String], index: usize) -> Option<String> {
        column
            .get(index)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }
}

pub trait TermSource: Send + Sync {
    fn read_terms(&self) -> Result<TermColumns, SourceError>;

    fn name(&self) -> &str;
}

/// Terms held in memory.
pub struct StaticTermSource {
    name: String,
    columns: TermColumns,
}

impl StaticTermSource {
    pub fn new(name: impl Into<String>, columns: TermColumns) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

impl TermSource for StaticTermSource {
    fn read_terms(&self) -> Result<TermColumns, SourceError> {
        self.columns.validate()?;
        Ok(self.columns.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Deserialize)]
struct TermRow {
    term: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    sku: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

/// Reads terms from a file.
///
/// `.json` holds an array of rows, `.yaml`/`.yml` the same rows in YAML.
/// Any other extension is plain text with one term per line.
pub struct FileTermSource {
    path: PathBuf,
    limit: usize,
    name: String,
}

impl FileTermSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self {
            path,
            limit: 0,
            name,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    fn parse_error(&self, reason: impl ToString) -> SourceError {
        SourceError::Parse {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl TermSource for FileTermSource {
    fn read_terms(&self) -> Result<TermColumns, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| SourceError::ReadFile {
            path: self.path.clone(),
            source: e,
        })?;

        let columns = match extension(&self.path).as_deref() {
            Some("json") => {
                let rows: Vec<TermRow> =
                    serde_json::from_str(&content).map_err(|e| self.parse_error(e))?;
                columns_from_rows(rows)
            }
            Some("yaml") | Some("yml") => {
                let rows: Vec<TermRow> =
                    serde_yaml::from_str(&content).map_err(|e| self.parse_error(e))?;
                columns_from_rows(rows)
            }
            _ => TermColumns::from_terms(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#')),
            ),
        };

        columns.validate()?;
        log::info!("Read {} terms from {}", columns.len(), self.name);
        Ok(columns.limit(self.limit))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn columns_from_rows(rows: Vec<TermRow>) -> TermColumns {
    let has_descriptions = rows.iter().any(|r| r.description.is_some());
    let has_skus = rows.iter().any(|r| r.sku.is_some());
    let has_urls = rows.iter().any(|r| r.url.is_some());
    let has_image_urls = rows.iter().any(|r| r.image_url.is_some());

    let mut columns = TermColumns::default();
    for row in rows {
        if has_descriptions {
            columns.descriptions.push(row.description.unwrap_or_default());
        }
        if has_skus {
            columns.skus.push(row.sku.unwrap_or_default());
        }
        if has_urls {
            columns.urls.push(row.url.unwrap_or_default());
        }
        if has_image_urls {
            columns.image_urls.push(row.image_url.unwrap_or_default());
        }
        columns.terms.push(row.term);
    }
    columns
}
