use std::fmt::Display;
use std::path::{Path, PathBuf};

use rpcreg::method_count::MethodCount;
use rpcreg::params::OUTPUT_FILENAME;

pub fn method_count(value: &str) -> Result<MethodCount, String> {
    value.parse::<MethodCount>().map_err(|e| e.to_string())
}

/// Where the generated header goes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "-"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::File(PathBuf::from(OUTPUT_FILENAME))
    }
}

pub fn output_target(path: &str) -> Result<OutputTarget, String> {
    if path.is_empty() {
        return Err("output path cannot be empty".to_owned());
    }

    let result = if path == "-" {
        OutputTarget::Stdout
    } else {
        OutputTarget::File(Path::new(path).to_path_buf())
    };

    Ok(result)
}
