use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of catalog departments.
///
/// Every product lives in exactly one department partition. The department is
/// always resolved from caller input at write time with [`Department::resolve`];
/// anything outside this enumeration is rejected before any database or
/// filesystem work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Agriculture,
    EspController,
    GasMonitor,
    EmbeddedSystem,
}

impl Department {
    /// Partitions in the order they are visited by listing and deletion.
    pub const ALL: [Department; 4] = [
        Department::Agriculture,
        Department::EspController,
        Department::GasMonitor,
        Department::EmbeddedSystem,
    ];

    /// Maps a caller-supplied identifier to its department.
    ///
    /// Matching is exact: `"Agriculture"`, `" agriculture"` and `""` all resolve to `None`.
    pub fn resolve(identifier: &str) -> Option<Department> {
        Self::ALL
            .into_iter()
            .find(|department| department.as_str() == identifier)
    }

    /// The identifier stored in the `department` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Agriculture => "agriculture",
            Department::EspController => "espcontroller",
            Department::GasMonitor => "gasmonitor",
            Department::EmbeddedSystem => "embeddedsystem",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
