use std::fmt;

/// A project technology stack inferred from marker files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ecosystem {
    Php,
    Node,
    DotNet,
    Python,
}

impl Ecosystem {
    /// Processing order for a run
    pub const ALL: [Ecosystem; 4] = [
        Ecosystem::Php,
        Ecosystem::Node,
        Ecosystem::DotNet,
        Ecosystem::Python,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Ecosystem::Php => "PHP / Laravel",
            Ecosystem::Node => "Node.js / React",
            Ecosystem::DotNet => ".NET",
            Ecosystem::Python => "Python",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
