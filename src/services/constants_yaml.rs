use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::constants::EstimationConstants;
use crate::services::estimation::{ConstantsError, validate_constants};

#[derive(Error, Debug)]
pub enum ConstantsYamlError {
    #[error("failed to read constants yaml file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse constants yaml file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid constants in {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: ConstantsError,
    },
}

/// Loads [`EstimationConstants`] from a YAML file. Omitted fields keep their
/// defaults; the result is validated before it is returned.
///
/// ```yaml
/// expected_case_position: 0.5
/// duration_scaling_power: 3.2
/// ```
pub fn load_constants_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<EstimationConstants, ConstantsYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConstantsYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_constants_from_yaml_str(&contents, path)
}

fn deserialize_constants_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<EstimationConstants, ConstantsYamlError> {
    // An empty document means "all defaults".
    let constants: EstimationConstants = if input.trim().is_empty() {
        EstimationConstants::default()
    } else {
        serde_yaml::from_str(input).map_err(|source| ConstantsYamlError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?
    };
    validate_constants(&constants).map_err(|source| ConstantsYamlError::Invalid {
        path: origin_path.to_path_buf(),
        source,
    })?;
    Ok(constants)
}
