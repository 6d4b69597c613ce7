//! Marker-file detection of the ecosystems present in a project

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::project::ProjectDir;
use crate::types::Ecosystem;

const DOTNET_SUFFIXES: [&str; 2] = [".sln", ".csproj"];

pub trait EcosystemDetector {
    fn ecosystem(&self) -> Ecosystem;

    fn detect(&self, project: &ProjectDir) -> bool;
}

pub struct PhpDetector;

impl EcosystemDetector for PhpDetector {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Php
    }

    fn detect(&self, project: &ProjectDir) -> bool {
        project.exists("composer.json")
    }
}

pub struct NodeDetector;

impl EcosystemDetector for NodeDetector {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Node
    }

    fn detect(&self, project: &ProjectDir) -> bool {
        project.exists("package.json")
    }
}

/// Solution or project files in the root or one non-hidden level below it
pub struct DotNetDetector;

impl EcosystemDetector for DotNetDetector {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::DotNet
    }

    fn detect(&self, project: &ProjectDir) -> bool {
        let root = project.root();
        if contains_dotnet_marker(root) {
            return true;
        }

        let Ok(entries) = fs::read_dir(root) else {
            return false;
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
            .filter(|entry| entry.path().is_dir())
            .any(|entry| contains_dotnet_marker(&entry.path()))
    }
}

pub struct PythonDetector;

impl EcosystemDetector for PythonDetector {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }

    fn detect(&self, project: &ProjectDir) -> bool {
        project.exists("requirements.txt") || project.exists("pyproject.toml")
    }
}

/// Listing errors (permissions and the like) count as "no marker"
fn contains_dotnet_marker(dir: &Path) -> bool {
    match fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|entry| entry.ok()).any(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            DOTNET_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
        }),
        Err(e) => {
            debug!("Skipping {}: {}", dir.display(), e);
            false
        }
    }
}

pub fn detectors() -> Vec<Box<dyn EcosystemDetector>> {
    vec![
        Box::new(PhpDetector),
        Box::new(NodeDetector),
        Box::new(DotNetDetector),
        Box::new(PythonDetector),
    ]
}

/// Every matching ecosystem, in processing order
pub fn detect_ecosystems(project: &ProjectDir) -> Vec<Ecosystem> {
    let found: Vec<Ecosystem> = detectors()
        .iter()
        .filter(|detector| detector.detect(project))
        .map(|detector| detector.ecosystem())
        .collect();

    debug!("Detected ecosystems in {}: {:?}", project.root().display(), found);
    found
}
