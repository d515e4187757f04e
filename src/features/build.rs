//! PDF builds through an external LaTeX compiler
//!
//! A build renders the document, writes it into a scoped temporary
//! directory, runs the compiler a fixed number of passes (so references
//! resolve), strips intermediate files and moves the PDF to its final
//! location. Compiler failures are recorded in the [`BuildReport`] and the
//! remaining steps still run.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::document::Document;
use crate::core::node::Render;
use crate::features::output::{expand_home, open_with_viewer};
use crate::utils::error::{Error, Result};

/// What one compiler run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    /// Captured stdout followed by stderr
    pub output: String,
}

impl CompileOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Turns a `.tex` file into a PDF inside `work_dir`
pub trait LatexCompiler {
    /// Run one compiler pass
    fn compile(&self, tex_path: &Path, work_dir: &Path) -> Result<CompileOutput>;
}

/// `pdflatex` on the `PATH`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pdflatex {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for Pdflatex {
    fn default() -> Self {
        Self {
            program: "pdflatex".to_string(),
            args: vec!["--shell-escape".to_string(), "--halt-on-error".to_string()],
        }
    }
}

impl Pdflatex {
    /// Use a different executable with the same arguments
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }
}

impl LatexCompiler for Pdflatex {
    fn compile(&self, tex_path: &Path, work_dir: &Path) -> Result<CompileOutput> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg("-output-directory")
            .arg(work_dir)
            .arg(tex_path)
            .current_dir(work_dir);

        log::debug!("Running {:?}", command);
        let out = command.output()?;

        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&out.stderr));

        Ok(CompileOutput {
            status: out.status.code(),
            output,
        })
    }
}

/// Options for [`Document::pdf_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Destination file or directory; the PDF stays in the build directory
    /// when unset
    pub output: Option<PathBuf>,
    /// Overwrite an existing destination
    pub force: bool,
    /// Open the PDF with the system viewer afterwards
    pub open_when_done: bool,
    /// Number of compiler passes
    pub passes: usize,
    /// Extensions of intermediate files removed after compiling
    pub clean_extensions: Vec<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output: None,
            force: false,
            open_when_done: false,
            passes: 2,
            clean_extensions: vec!["log".to_string(), "aux".to_string(), "gz".to_string()],
        }
    }
}

impl BuildOptions {
    /// Move the PDF to `path` (a file or an existing directory)
    pub fn to_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output: Some(path.into()),
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

    pub fn passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }
}

/// Outcome of a PDF build
#[derive(Debug)]
pub struct BuildReport {
    /// Final location of the PDF, if one was produced
    pub pdf: Option<PathBuf>,
    /// The compiled source, set only when the build directory was kept
    pub tex: Option<PathBuf>,
    /// Failed passes, destination conflicts and viewer errors
    pub issues: Vec<Error>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.pdf.is_some() && self.issues.is_empty()
    }
}

impl Document {
    /// Build a PDF with `pdflatex`
    pub fn pdf(&self, options: &BuildOptions) -> Result<BuildReport> {
        self.pdf_with(&Pdflatex::default(), options)
    }

    /// Build a PDF with the given compiler.
    ///
    /// Only setup failures (temp dir, writing the source, spawning the
    /// compiler) are returned as `Err`. A failed move to the destination is
    /// recorded in [`BuildReport::issues`] and the PDF stays where it was
    /// built. The build directory is removed afterwards unless the PDF
    /// still lives there.
    pub fn pdf_with<C>(&self, compiler: &C, options: &BuildOptions) -> Result<BuildReport>
    where
        C: LatexCompiler + ?Sized,
    {
        let latex = self.to_latex();

        let work_dir = tempfile::Builder::new().prefix("texweave-").tempdir()?;
        let job = work_dir
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("texweave")
            .to_string();
        let tex_path = work_dir.path().join(format!("{}.tex", job));
        fs::write(&tex_path, &latex)?;
        log::debug!("Wrote {} bytes to {}", latex.len(), tex_path.display());

        let mut issues = Vec::new();
        for pass in 1..=options.passes {
            log::debug!("Compiler pass {}/{}", pass, options.passes);
            let run = compiler.compile(&tex_path, work_dir.path())?;
            if !run.success() {
                let err = Error::build(&tex_path, run.status, run.output);
                log::warn!("{}", err);
                issues.push(err);
            }
        }

        clean_intermediates(work_dir.path(), &options.clean_extensions)?;

        let built = work_dir.path().join(format!("{}.pdf", job));
        let mut pdf = built.exists().then_some(built);

        if let (Some(src), Some(target)) = (pdf.clone(), &options.output) {
            let target = expand_home(target);
            let dest = match src.file_name() {
                Some(name) if target.is_dir() => target.join(name),
                _ => target,
            };
            if dest.exists() && !options.force {
                let err = Error::conflict(&dest);
                log::warn!("Cannot move PDF to requested location: {}", err);
                issues.push(err);
            } else {
                match move_file(&src, &dest) {
                    Ok(()) => {
                        log::info!("PDF written to {}", dest.display());
                        pdf = Some(dest);
                    }
                    Err(e) => {
                        log::warn!("Could not move PDF to {}: {}", dest.display(), e);
                        issues.push(e);
                    }
                }
            }
        }

        if options.open_when_done {
            if let Some(path) = &pdf {
                if let Err(e) = open_with_viewer(path) {
                    log::warn!("Could not open {}: {}", path.display(), e);
                    issues.push(e);
                }
            }
        }

        let still_inside = pdf
            .as_deref()
            .is_some_and(|p| p.starts_with(work_dir.path()));
        let tex = if still_inside {
            let kept = work_dir.keep();
            log::info!("Build directory kept at {}", kept.display());
            Some(tex_path)
        } else {
            None
        };

        Ok(BuildReport { pdf, tex, issues })
    }
}

/// Remove files in `dir` whose extension is one of `extensions`
fn clean_intermediates(dir: &Path, extensions: &[String]) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|x| x == ext));
        if matches {
            log::debug!("Removing {}", path.display());
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Rename, falling back to copy + delete across filesystems
fn move_file(src: &Path, dest: &Path) -> Result<()> {
    if fs::rename(src, dest).is_err() {
        fs::copy(src, dest)?;
        fs::remove_file(src)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use std::cell::Cell;
    use tempfile::TempDir;

    /// Writes a PDF and the usual side files next to the source
    struct FakeCompiler {
        status: i32,
        runs: Cell<usize>,
    }

    impl FakeCompiler {
        fn ok() -> Self {
            Self {
                status: 0,
                runs: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                status: 1,
                runs: Cell::new(0),
            }
        }
    }

    impl LatexCompiler for FakeCompiler {
        fn compile(&self, tex_path: &Path, work_dir: &Path) -> Result<CompileOutput> {
            self.runs.set(self.runs.get() + 1);
            let stem = tex_path.file_stem().unwrap().to_str().unwrap();
            for ext in ["pdf", "log", "aux", "synctex.gz"] {
                fs::write(work_dir.join(format!("{}.{}", stem, ext)), "%PDF-1.5")?;
            }
            Ok(CompileOutput {
                status: Some(self.status),
                output: "! Undefined control sequence.".to_string(),
            })
        }
    }

    fn doc() -> Document {
        let mut doc = Document::new("article", Vec::<String>::new()).unwrap();
        doc.add("Hello");
        doc
    }

    #[test]
    fn test_two_passes_and_move_to_file() {
        let out = TempDir::new().unwrap();
        let target = out.path().join("hello.pdf");
        let compiler = FakeCompiler::ok();

        let report = doc()
            .pdf_with(&compiler, &BuildOptions::to_path(&target))
            .unwrap();

        assert_eq!(compiler.runs.get(), 2);
        assert!(report.is_success());
        assert_eq!(report.pdf.as_deref(), Some(target.as_path()));
        assert!(target.exists());
        // build directory is gone once the PDF has left it
        assert!(report.tex.is_none());
    }

    #[test]
    fn test_move_into_directory_keeps_job_name() {
        let out = TempDir::new().unwrap();
        let report = doc()
            .pdf_with(&FakeCompiler::ok(), &BuildOptions::to_path(out.path()))
            .unwrap();

        let pdf = report.pdf.unwrap();
        assert_eq!(pdf.parent(), Some(out.path()));
        let stem = pdf.file_stem().unwrap().to_str().unwrap();
        assert!(stem.starts_with("texweave-"));
    }

    #[test]
    fn test_intermediates_removed_and_dir_kept_without_output() {
        let report = doc()
            .pdf_with(&FakeCompiler::ok(), &BuildOptions::default().passes(1))
            .unwrap();

        let pdf = report.pdf.clone().unwrap();
        assert!(pdf.exists());
        let dir = pdf.parent().unwrap().to_path_buf();
        let leftovers: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().is_some_and(|e| e == "log" || e == "aux" || e == "gz"))
            .collect();
        assert!(leftovers.is_empty());
        let tex = report.tex.unwrap();
        assert_eq!(tex.parent(), Some(dir.as_path()));
        assert!(tex.exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_failed_passes_are_recorded_not_fatal() {
        let out = TempDir::new().unwrap();
        let compiler = FakeCompiler::failing();
        let report = doc()
            .pdf_with(&compiler, &BuildOptions::to_path(out.path()))
            .unwrap();

        assert_eq!(compiler.runs.get(), 2);
        assert_eq!(report.issues.len(), 2);
        assert!(report.issues.iter().all(|e| e.kind() == ErrorKind::Build));
        assert!(report.issues[0].to_string().contains("Return Code: 1"));
        // the move still happened
        assert!(report.pdf.is_some());
        assert!(!report.is_success());
    }

    #[test]
    fn test_existing_destination_is_a_conflict() {
        let out = TempDir::new().unwrap();
        let target = out.path().join("taken.pdf");
        fs::write(&target, "old").unwrap();

        let report = doc()
            .pdf_with(&FakeCompiler::ok(), &BuildOptions::to_path(&target))
            .unwrap();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind(), ErrorKind::Conflict);
        assert_eq!(fs::read_to_string(&target).unwrap(), "old");

        // PDF left in the persisted build directory
        let pdf = report.pdf.unwrap();
        assert!(pdf.exists());
        assert_ne!(pdf, target);
        fs::remove_dir_all(pdf.parent().unwrap()).unwrap();

        let forced = doc()
            .pdf_with(&FakeCompiler::ok(), &BuildOptions::to_path(&target).force(true))
            .unwrap();
        assert!(forced.is_success());
        assert_eq!(fs::read_to_string(&target).unwrap(), "%PDF-1.5");
    }

    #[test]
    fn test_failed_move_keeps_build_directory() {
        let out = TempDir::new().unwrap();
        let target = out.path().join("missing").join("out.pdf");
        let report = doc()
            .pdf_with(&FakeCompiler::failing(), &BuildOptions::to_path(&target))
            .unwrap();

        let kinds: Vec<_> = report.issues.iter().map(Error::kind).collect();
        assert_eq!(kinds, [ErrorKind::Build, ErrorKind::Build, ErrorKind::Io]);
        assert!(!target.exists());

        let pdf = report.pdf.unwrap();
        assert!(pdf.exists());
        let tex = report.tex.unwrap();
        assert!(tex.exists());
        assert_eq!(pdf.parent(), tex.parent());
        fs::remove_dir_all(pdf.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_missing_compiler_is_an_io_error() {
        let compiler = Pdflatex::with_program("texweave-no-such-compiler");
        let err = doc().pdf_with(&compiler, &BuildOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
