//! Floating figures, sub-figures and `picture` drawings
//!
//! Image paths are stored exactly as given. Use [`Figure::image_in`] (and
//! the matching sub-figure method) to resolve a file name against an
//! explicit base directory.

use std::path::{Path, PathBuf};

use super::node::{impl_container, render_children, Node, Render};

fn star_mark(starred: bool) -> &'static str {
    if starred {
        "*"
    } else {
        ""
    }
}

fn include_graphics(width: &str, path: &Path) -> String {
    format!("\\includegraphics[width={}]{{{}}}\\\\", width, path.display())
}

/// A `figure` float, optionally holding an image.
///
/// ```rust
/// use texweave::{Figure, Render};
///
/// let fig = Figure::new()
///     .image("/tmp/plot.png")
///     .caption("Results")
///     .label("fig:results");
/// assert_eq!(
///     fig.to_latex(),
///     "\n\\begin{figure}[htb]\n\\begin{center}\n\\includegraphics[width=\\columnwidth]{/tmp/plot.png}\\\\\\end{center}\n\\caption{Results}\n\\label{fig:results}\n\\end{figure}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    image: Option<PathBuf>,
    width: String,
    star: bool,
    placement: String,
    center: bool,
    caption: Option<String>,
    label: Option<String>,
    children: Vec<Node>,
}

impl Default for Figure {
    fn default() -> Self {
        Figure {
            image: None,
            width: "\\columnwidth".to_string(),
            star: false,
            placement: "htb".to_string(),
            center: true,
            caption: None,
            label: None,
            children: Vec::new(),
        }
    }
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include an image at `path`
    pub fn image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = Some(path.into());
        self
    }

    /// Include `file` resolved against `base`
    pub fn image_in(self, base: impl AsRef<Path>, file: impl AsRef<Path>) -> Self {
        self.image(base.as_ref().join(file))
    }

    /// Image width, e.g. `0.8\columnwidth`
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    /// Span all text columns (`figure*`)
    pub fn star(mut self, star: bool) -> Self {
        self.star = star;
        self
    }

    pub fn placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = placement.into();
        self
    }

    pub fn center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image.as_deref()
    }
}

impl_container!(Figure);

impl Render for Figure {
    fn render(&self, out: &mut Vec<String>) {
        let star = star_mark(self.star);
        out.push(format!(
            "\n\\begin{{figure{}}}[{}]\n",
            star, self.placement
        ));

        if self.center {
            out.push("\\begin{center}\n".to_string());
        }
        if let Some(image) = &self.image {
            out.push(include_graphics(&self.width, image));
        }

        render_children(&self.children, out);

        if self.center {
            out.push("\\end{center}\n".to_string());
        }
        if let Some(caption) = &self.caption {
            out.push(format!("\\caption{{{}}}\n", caption));
        }
        if let Some(label) = &self.label {
            out.push(format!("\\label{{{}}}\n", label));
        }

        out.push(format!("\\end{{figure{}}}\n", star));
    }
}

/// A `subfigure` panel, placed inside a [`Figure`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubFigure {
    image: Option<PathBuf>,
    subfigure_width: String,
    image_width: String,
    placement: String,
    center: bool,
    caption: Option<String>,
    label: Option<String>,
    children: Vec<Node>,
}

impl Default for SubFigure {
    fn default() -> Self {
        SubFigure {
            image: None,
            subfigure_width: "0.5\\textwidth".to_string(),
            image_width: "\\textwidth".to_string(),
            placement: "htb".to_string(),
            center: true,
            caption: None,
            label: None,
            children: Vec::new(),
        }
    }
}

impl SubFigure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = Some(path.into());
        self
    }

    pub fn image_in(self, base: impl AsRef<Path>, file: impl AsRef<Path>) -> Self {
        self.image(base.as_ref().join(file))
    }

    /// Width of the panel within the enclosing figure
    pub fn subfigure_width(mut self, width: impl Into<String>) -> Self {
        self.subfigure_width = width.into();
        self
    }

    /// Width of the image within the panel
    pub fn image_width(mut self, width: impl Into<String>) -> Self {
        self.image_width = width.into();
        self
    }

    pub fn placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = placement.into();
        self
    }

    pub fn center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image.as_deref()
    }
}

impl_container!(SubFigure);

impl Render for SubFigure {
    fn render(&self, out: &mut Vec<String>) {
        out.push(format!(
            "\\begin{{subfigure}}[{}]{{{}}}\n",
            self.placement, self.subfigure_width
        ));

        if self.center {
            out.push("\\centering\n".to_string());
        }
        if let Some(image) = &self.image {
            out.push(include_graphics(&self.image_width, image));
        }

        render_children(&self.children, out);

        if let Some(caption) = &self.caption {
            out.push(format!("\n\\caption{{{}}}", caption));
        }
        if let Some(label) = &self.label {
            out.push(format!("\n\\label{{{}}}", label));
        }

        out.push("\n\\end{subfigure}\n".to_string());
    }
}

/// A `picture` drawing wrapped in a `figure` float.
///
/// Children carry the raw drawing commands (`\put`, `\line`, …).
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    width: String,
    height: String,
    unit_length: Option<String>,
    placement: String,
    center: bool,
    caption: Option<String>,
    label: Option<String>,
    star: bool,
    children: Vec<Node>,
}

impl Picture {
    /// Canvas of `width` x `height` units
    pub fn new(width: impl ToString, height: impl ToString) -> Self {
        Picture {
            width: width.to_string(),
            height: height.to_string(),
            unit_length: None,
            placement: "htb".to_string(),
            center: true,
            caption: None,
            label: None,
            star: false,
            children: Vec::new(),
        }
    }

    /// Set `\unitlength` before the float, e.g. `1mm`
    pub fn unit_length(mut self, length: impl Into<String>) -> Self {
        self.unit_length = Some(length.into());
        self
    }

    pub fn placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = placement.into();
        self
    }

    pub fn center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn star(mut self, star: bool) -> Self {
        self.star = star;
        self
    }
}

impl_container!(Picture);

impl Render for Picture {
    fn render(&self, out: &mut Vec<String>) {
        if let Some(unit) = &self.unit_length {
            out.push(format!("\n\\setlength{{\\unitlength}}{{{}}}", unit));
        }

        let star = star_mark(self.star);
        out.push(format!(
            "\n\\begin{{figure{}}}[{}]\n",
            star, self.placement
        ));
        if self.center {
            out.push("\\begin{center}\n".to_string());
        }
        out.push(format!(
            "\\begin{{picture{}}}({},{})\n",
            star, self.width, self.height
        ));

        render_children(&self.children, out);

        out.push(format!("\n\\end{{picture{}}}", star));

        // the caption sits inside the center block, the label after it
        if let Some(caption) = &self.caption {
            out.push(format!("\n\\caption{{{}}}", caption));
        }
        if self.center {
            out.push("\n\\end{center}".to_string());
        }
        if let Some(label) = &self.label {
            out.push(format!("\n\\label{{{}}}", label));
        }

        out.push(format!("\n\\end{{figure{}}}\n", star));
    }
}
