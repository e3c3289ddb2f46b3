// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{
    Block, CatalogError, CodeFile, CodeListing, Description, FileName, Inline, Inlines,
    ModelError, Scenario, ScenarioCatalog, HEADING_LEVELS,
};

pub const CATALOG_FORMAT_VERSION: u32 = 1;

/// A scenario catalog stored as JSON on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ScenarioCatalog, StoreError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;
        parse_catalog(&text, Some(&self.path))
    }

    /// Writes the catalog via a sibling temp file and a rename.
    pub fn save(&self, catalog: &ScenarioCatalog) -> Result<(), StoreError> {
        let mut text = catalog_to_json_string(catalog)
            .map_err(|source| StoreError::Json { path: Some(self.path.clone()), source })?;
        text.push('\n');

        let tmp_path = tmp_path_for(&self.path);
        if let Err(source) = write_file(&tmp_path, text.as_bytes()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::Io { path: tmp_path, source });
        }
        fs::rename(&tmp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            StoreError::Io { path: self.path.clone(), source }
        })
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.flush()
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(format!(".tmp-{}", std::process::id()));
    path.with_file_name(name)
}

pub fn catalog_from_json_str(text: &str) -> Result<ScenarioCatalog, StoreError> {
    parse_catalog(text, None)
}

pub fn catalog_to_json_string(catalog: &ScenarioCatalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&catalog_to_json(catalog))
}

fn parse_catalog(text: &str, path: Option<&Path>) -> Result<ScenarioCatalog, StoreError> {
    let catalog_json: CatalogJson = serde_json::from_str(text)
        .map_err(|source| StoreError::Json { path: path.map(Path::to_path_buf), source })?;
    catalog_from_json(catalog_json)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogJson {
    version: u32,
    #[serde(default)]
    scenarios: Vec<ScenarioJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioJson {
    title: String,
    info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<Vec<BlockJson>>,
    #[serde(default)]
    code: Vec<CodeFileJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
enum BlockJson {
    Heading { level: u8, inlines: Vec<InlineJson> },
    Paragraph { inlines: Vec<InlineJson> },
    List { items: Vec<Vec<InlineJson>> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum InlineJson {
    Text(String),
    Strong(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CodeFileJson {
    filename: String,
    source: String,
}

fn catalog_to_json(catalog: &ScenarioCatalog) -> CatalogJson {
    CatalogJson {
        version: CATALOG_FORMAT_VERSION,
        scenarios: catalog.iter().map(scenario_to_json).collect(),
    }
}

fn scenario_to_json(scenario: &Scenario) -> ScenarioJson {
    ScenarioJson {
        title: scenario.title().to_owned(),
        info: scenario.info().to_owned(),
        description: scenario
            .description()
            .map(|description| description.blocks().iter().map(block_to_json).collect()),
        code: scenario
            .code()
            .iter()
            .map(|file| CodeFileJson {
                filename: file.name().to_string(),
                source: file.source().to_owned(),
            })
            .collect(),
    }
}

fn block_to_json(block: &Block) -> BlockJson {
    match block {
        Block::Heading { level, inlines } => {
            BlockJson::Heading { level: *level, inlines: inlines_to_json(inlines) }
        }
        Block::Paragraph(inlines) => BlockJson::Paragraph { inlines: inlines_to_json(inlines) },
        Block::List(items) => BlockJson::List { items: items.iter().map(inlines_to_json).collect() },
    }
}

fn inlines_to_json(inlines: &Inlines) -> Vec<InlineJson> {
    inlines
        .runs()
        .iter()
        .map(|inline| match inline {
            Inline::Text(text) => InlineJson::Text(text.clone()),
            Inline::Strong(text) => InlineJson::Strong(text.clone()),
        })
        .collect()
}

fn catalog_from_json(catalog_json: CatalogJson) -> Result<ScenarioCatalog, StoreError> {
    if catalog_json.version != CATALOG_FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion { found: catalog_json.version });
    }

    let mut scenarios = Vec::with_capacity(catalog_json.scenarios.len());
    for scenario_json in catalog_json.scenarios {
        scenarios.push(scenario_from_json(scenario_json)?);
    }
    Ok(ScenarioCatalog::new(scenarios)?)
}

fn scenario_from_json(scenario_json: ScenarioJson) -> Result<Scenario, StoreError> {
    let mut code = CodeListing::new();
    for file_json in scenario_json.code {
        let name = FileName::new(file_json.filename.clone()).map_err(|source| {
            StoreError::Model {
                scenario: scenario_json.title.clone(),
                source: ModelError::InvalidFileName(source),
            }
        })?;
        code.insert(CodeFile::new(name, file_json.source)).map_err(|source| {
            StoreError::Model { scenario: scenario_json.title.clone(), source }
        })?;
    }

    let description = scenario_json
        .description
        .map(description_from_json)
        .transpose()
        .map_err(|source| StoreError::Model { scenario: scenario_json.title.clone(), source })?;

    let mut scenario = Scenario::new(scenario_json.title, scenario_json.info).with_code(code);
    if let Some(description) = description {
        scenario = scenario.with_description(description);
    }
    Ok(scenario)
}

fn description_from_json(blocks: Vec<BlockJson>) -> Result<Description, ModelError> {
    let mut description = Description::default();
    for block in blocks {
        description = match block {
            BlockJson::Heading { level, inlines } => {
                if !HEADING_LEVELS.contains(&level) {
                    return Err(ModelError::HeadingLevel { level });
                }
                description.heading(level, inlines_from_json(inlines))
            }
            BlockJson::Paragraph { inlines } => description.paragraph(inlines_from_json(inlines)),
            BlockJson::List { items } => {
                description.list(items.into_iter().map(inlines_from_json))
            }
        };
    }
    Ok(description)
}

fn inlines_from_json(inlines: Vec<InlineJson>) -> Inlines {
    inlines.into_iter().fold(Inlines::new(), |acc, inline| match inline {
        InlineJson::Text(text) => acc.text(text),
        InlineJson::Strong(text) => acc.strong(text),
    })
}

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: Option<PathBuf>, source: serde_json::Error },
    UnsupportedVersion { found: u32 },
    Model { scenario: String, source: ModelError },
    Catalog(CatalogError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path: Some(path), source } => write!(f, "json error at {path:?}: {source}"),
            Self::Json { path: None, source } => write!(f, "json error: {source}"),
            Self::UnsupportedVersion { found } => write!(
                f,
                "unsupported catalog version {found} (expected {CATALOG_FORMAT_VERSION})"
            ),
            Self::Model { scenario, source } => write!(f, "scenario {scenario:?}: {source}"),
            Self::Catalog(source) => write!(f, "invalid catalog: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::UnsupportedVersion { .. } => None,
            Self::Model { source, .. } => Some(source),
            Self::Catalog(source) => Some(source),
        }
    }
}

impl From<CatalogError> for StoreError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}
