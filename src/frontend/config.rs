use std::path::{Path, PathBuf};

use super::demos::Demo;


pub struct GeneralConfig {
    input: InputConfig,
    output: OutputConfig,
}

impl GeneralConfig {
    #[must_use]
    pub fn new(input: InputConfig, output: OutputConfig) -> Self {
        Self { input, output }
    }

    #[must_use]
    pub fn input_config(&self) -> &InputConfig {
        &self.input
    }

    #[must_use]
    pub fn output_config(&self) -> &OutputConfig {
        &self.output
    }
}


#[derive(Clone, Debug, PartialEq)]
pub enum InputConfig {
    Plan(PathBuf),
    Demo(Demo),
}


#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutputConfig {
    // If `None`, a timestamped file is written to the working directory.
    output_path: Option<PathBuf>,
    to_stdout: bool,
}

impl OutputConfig {
    #[must_use]
    pub fn new(output_path: Option<&Path>, to_stdout: bool) -> Self {
        Self {
            output_path: output_path.map(Path::to_path_buf),
            to_stdout,
        }
    }

    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    #[must_use]
    pub fn to_stdout(&self) -> bool {
        self.to_stdout
    }
}
