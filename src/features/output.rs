//! Writing rendered LaTeX to disk and handing files to a viewer

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::document::Document;
use crate::core::node::Render;
use crate::utils::error::{Error, Result};

/// File name used when a save target is a directory
pub const DEFAULT_TEX_NAME: &str = "document.tex";

/// Options for [`Document::tex_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Where to write the `.tex` file; nothing is written when unset unless
    /// `open_when_done` asks for a temporary copy
    pub filename: Option<PathBuf>,
    /// Overwrite an existing file
    pub force: bool,
    /// Open the written file with the system viewer
    pub open_when_done: bool,
}

impl OutputOptions {
    /// Write to `path`
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            filename: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn open_when_done(mut self, open: bool) -> Self {
        self.open_when_done = open;
        self
    }
}

/// Result of [`Document::tex_with`]
#[derive(Debug)]
pub struct TexOutput {
    /// The rendered document
    pub latex: String,
    /// Where the source was written, if anywhere
    pub path: Option<PathBuf>,
    /// Non-fatal problems (conflicts, viewer failures)
    pub issues: Vec<Error>,
}

impl TexOutput {
    pub fn is_success(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Document {
    /// Render the document and optionally persist and open it.
    ///
    /// A file collision without `force` is logged and recorded in
    /// [`TexOutput::issues`]; the rendered text is always returned.
    pub fn tex_with(&self, options: &OutputOptions) -> TexOutput {
        let latex = self.to_latex();
        let mut output = TexOutput {
            latex,
            path: None,
            issues: Vec::new(),
        };

        match &options.filename {
            Some(filename) => match save_latex(&output.latex, filename, options.force) {
                Ok(path) => output.path = Some(path),
                Err(e) => {
                    log::warn!("{}", e);
                    output.issues.push(e);
                }
            },
            None if options.open_when_done => match write_temp_tex(&output.latex) {
                Ok(path) => output.path = Some(path),
                Err(e) => {
                    log::warn!("Could not write temporary file: {}", e);
                    output.issues.push(e);
                }
            },
            None => {}
        }

        if options.open_when_done {
            if let Some(path) = &output.path {
                if let Err(e) = open_with_viewer(path) {
                    log::warn!("Could not open {}: {}", path.display(), e);
                    output.issues.push(e);
                }
            }
        }

        output
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Resolve a user supplied destination: expand `~`, and place
/// `default_name` inside it when it names an existing directory
pub fn resolve_destination(path: &Path, default_name: &str) -> PathBuf {
    let path = expand_home(path);
    if path.is_dir() {
        path.join(default_name)
    } else {
        path
    }
}

/// Write LaTeX source to `path`.
///
/// Refuses to replace an existing file unless `force` is set. Returns the
/// path actually written.
pub fn save_latex(text: &str, path: impl AsRef<Path>, force: bool) -> Result<PathBuf> {
    let target = resolve_destination(path.as_ref(), DEFAULT_TEX_NAME);
    if target.exists() && !force {
        return Err(Error::conflict(target));
    }
    fs::write(&target, text)?;
    log::info!("Wrote {} bytes to {}", text.len(), target.display());
    Ok(target)
}

fn write_temp_tex(text: &str) -> Result<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix("texweave-")
        .suffix(".tex")
        .tempfile()?;
    fs::write(file.path(), text)?;
    let (_, path) = file.keep().map_err(io::Error::from)?;
    log::debug!("Wrote temporary source {}", path.display());
    Ok(path)
}

/// Open a file with the platform's default application
pub fn open_with_viewer(path: &Path) -> Result<()> {
    let mut command = viewer_command(path);
    log::debug!("Opening {} with {:?}", path.display(), command);
    let status = command.status()?;
    if !status.success() {
        log::warn!("Viewer exited with {} for {}", status, path.display());
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use tempfile::TempDir;

    fn hello() -> Document {
        let mut doc = Document::new("article", Vec::<String>::new()).unwrap();
        doc.add("Hello");
        doc
    }

    #[test]
    fn test_save_latex_to_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.tex");
        let written = save_latex("\\relax", &target, false).unwrap();
        assert_eq!(written, target);
        assert_eq!(fs::read_to_string(&target).unwrap(), "\\relax");
    }

    #[test]
    fn test_save_latex_into_directory() {
        let dir = TempDir::new().unwrap();
        let written = save_latex("x", dir.path(), false).unwrap();
        assert_eq!(written, dir.path().join(DEFAULT_TEX_NAME));
    }

    #[test]
    fn test_save_latex_conflict() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("taken.tex");
        fs::write(&target, "existing").unwrap();

        let err = save_latex("new", &target, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(fs::read_to_string(&target).unwrap(), "existing");

        save_latex("new", &target, true).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home(Path::new("/abs/x")), PathBuf::from("/abs/x"));
        assert_eq!(expand_home(Path::new("rel/x")), PathBuf::from("rel/x"));
        if let Some(home) = home_dir() {
            assert_eq!(expand_home(Path::new("~/doc.tex")), home.join("doc.tex"));
        }
    }

    #[test]
    fn test_tex_with_returns_text_without_writing() {
        let out = hello().tex_with(&OutputOptions::default());
        assert!(out.latex.contains("Hello"));
        assert!(out.path.is_none());
        assert!(out.is_success());
    }

    #[test]
    fn test_tex_with_records_conflict() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("doc.tex");
        fs::write(&target, "keep me").unwrap();

        let out = hello().tex_with(&OutputOptions::to_file(&target));
        assert!(out.path.is_none());
        assert_eq!(out.issues.len(), 1);
        assert_eq!(out.issues[0].kind(), ErrorKind::Conflict);
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
        assert!(out.latex.ends_with("\\end{document}"));

        let forced = hello().tex_with(&OutputOptions::to_file(&target).force(true));
        assert!(forced.is_success());
        assert_eq!(fs::read_to_string(&target).unwrap(), forced.latex);
    }
}
