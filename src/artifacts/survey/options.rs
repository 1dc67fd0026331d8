use derive_new::new;
use std::ffi::OsString;
use std::path::PathBuf;

/// Settings for a single survey run, resolved from the command line and environment
#[derive(Debug, Clone, new)]
pub struct SurveyOptions {
    /// Directory the walk starts from, used exactly as given
    pub root: PathBuf,
    /// Program invoked for every git query
    pub git_program: OsString,
    /// Print the per-state repository counts after the report
    pub summary: bool,
}
