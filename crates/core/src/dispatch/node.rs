use super::table::{Action, DecisionTable, Rule};
use crate::error::Result;
use crate::manifest::PackageJson;
use crate::project::ProjectDir;
use crate::types::Mode;

pub const NO_RUNNER: &str = "no 'test' script or test runner (Jest/Vitest) found in package.json";

const PLAYWRIGHT_CONFIGS: [&str; 2] = ["playwright.config.ts", "playwright.config.js"];

/// A Node project with its manifest already parsed
#[derive(Debug, Clone)]
pub struct NodeProject<'a> {
    pub dir: &'a ProjectDir,
    pub manifest: PackageJson,
}

impl<'a> NodeProject<'a> {
    pub fn load(dir: &'a ProjectDir) -> Result<Self> {
        let manifest = PackageJson::load(&dir.path("package.json"))?;
        Ok(Self { dir, manifest })
    }

    /// "React" when react is a declared dependency
    pub fn label_prefix(&self) -> &'static str {
        if self.manifest.is_react() {
            "React"
        } else {
            "Node.js"
        }
    }

    fn label(&self, suite: &str) -> String {
        format!("{} {}", self.label_prefix(), suite)
    }

    fn has_playwright_config(&self) -> bool {
        PLAYWRIGHT_CONFIGS
            .iter()
            .any(|config| self.dir.exists(config))
    }
}

pub fn unit_table<'a>() -> DecisionTable<NodeProject<'a>> {
    DecisionTable::new(vec![
        Rule::new(
            "test script",
            |p: &NodeProject<'a>| p.manifest.has_real_test_script(),
            |p: &NodeProject<'a>| Action::run(p.label("NPM Test"), "npm test"),
        ),
        Rule::new(
            "test:unit script",
            |p: &NodeProject<'a>| p.manifest.has_script("test:unit"),
            |p: &NodeProject<'a>| Action::run(p.label("Unit Test"), "npm run test:unit"),
        ),
        Rule::new(
            "vitest",
            |p: &NodeProject<'a>| p.manifest.has_dependency("vitest"),
            |p: &NodeProject<'a>| Action::run(p.label("Vitest"), "npx vitest run"),
        ),
        Rule::new(
            "jest",
            |p: &NodeProject<'a>| p.manifest.has_dependency("jest"),
            |p: &NodeProject<'a>| Action::run(p.label("Jest"), "npx jest"),
        ),
        Rule::new(
            "no runner",
            |_| true,
            |p: &NodeProject<'a>| Action::skip(p.label("Unit Test"), NO_RUNNER),
        ),
    ])
}

/// No fallback row: a project without e2e tooling yields nothing
pub fn e2e_table<'a>() -> DecisionTable<NodeProject<'a>> {
    DecisionTable::new(vec![
        Rule::new(
            "playwright config",
            |p: &NodeProject<'a>| p.has_playwright_config(),
            |p: &NodeProject<'a>| Action::run(p.label("Playwright E2E"), "npx playwright test"),
        ),
        Rule::new(
            "test:e2e script",
            |p: &NodeProject<'a>| p.manifest.has_script("test:e2e"),
            |p: &NodeProject<'a>| Action::run(p.label("E2E Test"), "npm run test:e2e"),
        ),
        Rule::new(
            "cypress",
            |p: &NodeProject<'a>| p.manifest.has_dependency("cypress"),
            |p: &NodeProject<'a>| Action::run(p.label("Cypress E2E"), "npx cypress run"),
        ),
    ])
}

pub fn plan(dir: &ProjectDir, mode: Mode) -> Result<Vec<Action>> {
    let project = NodeProject::load(dir)?;
    Ok(plan_for(&project, mode))
}

pub fn plan_for(project: &NodeProject<'_>, mode: Mode) -> Vec<Action> {
    let mut actions = Vec::new();
    if mode.includes_unit() {
        actions.extend(unit_table().evaluate(project));
    }
    if mode.includes_e2e() {
        actions.extend(e2e_table().evaluate(project));
    }
    actions
}
