use crate::core::forcefield::labels::LabeledTopology;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyFileError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Loads a labeled topology from a TOML file.
///
/// The expected layout mirrors [`LabeledTopology`]: `[[bonds]]`, `[[angles]]`,
/// and `[[torsions]]` tables, each with an `atoms` index array and a `label`
/// SMIRKS string. Missing sections default to empty.
pub fn load_labeled_topology(path: &Path) -> Result<LabeledTopology, TopologyFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| TopologyFileError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| TopologyFileError::Toml {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::topology::{AngleTerm, BondTerm, TorsionTerm};
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    const TOPOLOGY_TOML: &str = r#"
[[bonds]]
atoms = [0, 1]
label = "[#6X4:1]-[#6X4:2]"

[[angles]]
atoms = [0, 1, 2]
label = "[a,A:1]-[#6X4:2]-[a,A:3]"

[[torsions]]
atoms = [0, 1, 2, 3]
label = "[#6X4:1]-[#6X4:2]-[#6X4:3]-[#6X4:4]"

[[torsions]]
atoms = [4, 0, 1, 2]
label = "[#1:1]-[#6X4:2]-[#6X4:3]-[#6X4:4]"
"#;

    #[test]
    fn load_parses_all_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("topology.toml");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", TOPOLOGY_TOML).unwrap();

        let topology = load_labeled_topology(&path).unwrap();
        assert_eq!(topology.bonds.len(), 1);
        assert_eq!(topology.bonds[0].atoms, BondTerm(0, 1));
        assert_eq!(topology.angles[0].atoms, AngleTerm(0, 1, 2));
        assert_eq!(topology.torsions.len(), 2);
        assert_eq!(topology.torsions[1].atoms, TorsionTerm(4, 0, 1, 2));
        assert_eq!(
            topology.torsions[0].label,
            "[#6X4:1]-[#6X4:2]-[#6X4:3]-[#6X4:4]"
        );
    }

    #[test]
    fn load_defaults_missing_sections_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("topology.toml");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "[[bonds]]\natoms = [0, 1]\nlabel = \"x\"").unwrap();

        let topology = load_labeled_topology(&path).unwrap();
        assert_eq!(topology.bonds.len(), 1);
        assert!(topology.angles.is_empty());
        assert!(topology.torsions.is_empty());
    }

    #[test]
    fn load_fails_on_malformed_atoms() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("topology.toml");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "[[torsions]]\natoms = [0, 1]\nlabel = \"x\"").unwrap();

        let result = load_labeled_topology(&path);
        assert!(matches!(result, Err(TopologyFileError::Toml { .. })));
    }

    #[test]
    fn load_fails_on_missing_file() {
        let result = load_labeled_topology(Path::new("/nonexistent/topology.toml"));
        assert!(matches!(result, Err(TopologyFileError::Io { .. })));
    }
}
