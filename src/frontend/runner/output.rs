use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::backend::annotations::{MissionAnnotations, SpecialWaypoint};
use crate::backend::compiler::{CompiledPackage, CompiledWaypoint};
use crate::backend::mathphysics::Point3D;
use crate::backend::task::MissionTask;
use crate::backend::waypoints::BuildOutcome;
use crate::frontend::OUTPUT_FILE_SUFFIX;
use crate::frontend::config::OutputConfig;


#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize compiled mission: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to write `{0}`")]
    Write(String, #[source] std::io::Error),
}


#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledMissionDocument {
    packages: Vec<PackageEntry>,
    special_waypoints: Vec<SpecialWaypoint>,
}

impl CompiledMissionDocument {
    #[must_use]
    pub fn new(
        packages: &[CompiledPackage],
        annotations: &MissionAnnotations
    ) -> Self {
        Self {
            packages: packages.iter().map(PackageEntry::from).collect(),
            special_waypoints: annotations.special_waypoints().to_vec(),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self)
    }
}


#[derive(Debug, Serialize)]
struct PackageEntry {
    name: String,
    waypoints: Vec<WaypointEntry>,
}

impl From<&CompiledPackage> for PackageEntry {
    fn from(package: &CompiledPackage) -> Self {
        Self {
            name: package.name().to_string(),
            waypoints: package
                .waypoints()
                .iter()
                .map(WaypointEntry::from)
                .collect(),
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WaypointEntry {
    name: String,
    #[serde(rename = "type")]
    waypoint_type: String,
    position: Point3D,
    tasks: Vec<MissionTask>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dropped_presets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<OutcomeEntry>,
}

impl From<&CompiledWaypoint> for WaypointEntry {
    fn from(waypoint: &CompiledWaypoint) -> Self {
        Self {
            name: waypoint.name().to_string(),
            waypoint_type: waypoint.waypoint_type().to_string(),
            position: *waypoint.position(),
            tasks: waypoint.mission_tasks(),
            dropped_presets: waypoint
                .dropped_presets()
                .iter()
                .map(ToString::to_string)
                .collect(),
            outcome: waypoint.outcome().map(OutcomeEntry::from),
        }
    }
}


#[derive(Debug, Serialize)]
struct OutcomeEntry {
    status: &'static str,
    appended: usize,
    diagnostics: Vec<String>,
}

impl From<&BuildOutcome> for OutcomeEntry {
    fn from(outcome: &BuildOutcome) -> Self {
        let status = match outcome {
            BuildOutcome::Complete(_)     => "complete",
            BuildOutcome::Partial { .. }  => "partial",
            BuildOutcome::Skipped(_)      => "skipped",
        };

        Self {
            status,
            appended: outcome.appended(),
            diagnostics: outcome
                .diagnostics()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}


#[must_use]
pub fn default_output_path() -> PathBuf {
    let local_time = chrono::Local::now()
        .format("%YY-%mm-%dd_%HH-%MM-%SS");

    PathBuf::from(format!("{local_time}_{OUTPUT_FILE_SUFFIX}"))
}

/// # Errors
///
/// Will return `Err` if the document cannot be serialized or written.
pub fn write_document(
    output_config: &OutputConfig,
    document: &CompiledMissionDocument,
) -> Result<Option<PathBuf>, OutputError> {
    let json_data = document.to_json()?;

    if output_config.to_stdout() {
        println!("{json_data}");

        return Ok(None);
    }

    let file_path = output_config
        .output_path()
        .map_or_else(default_output_path, Path::to_path_buf);

    fs::write(&file_path, json_data)
        .map_err(|error| {
            OutputError::Write(file_path.display().to_string(), error)
        })?;

    Ok(Some(file_path))
}
