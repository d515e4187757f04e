//! Preamble items: document class, packages and commands

use std::fmt;
use std::str::FromStr;

use super::content::command_with_args;
use super::node::Render;
use crate::utils::error::Error;

/// Supported LaTeX document classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentClass {
    #[default]
    Article,
    Report,
    Book,
    ExtReport,
    ExtArticle,
}

impl DocumentClass {
    /// Every supported class, in declaration order
    pub const SUPPORTED: [DocumentClass; 5] = [
        DocumentClass::Article,
        DocumentClass::Report,
        DocumentClass::Book,
        DocumentClass::ExtReport,
        DocumentClass::ExtArticle,
    ];

    /// Class name as written in `\documentclass`
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentClass::Article => "article",
            DocumentClass::Report => "report",
            DocumentClass::Book => "book",
            DocumentClass::ExtReport => "extreport",
            DocumentClass::ExtArticle => "extarticle",
        }
    }

    /// Comma separated list of supported names, for diagnostics
    pub fn supported_names() -> String {
        Self::SUPPORTED
            .iter()
            .map(DocumentClass::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DocumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SUPPORTED
            .iter()
            .copied()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| Error::UnsupportedClass {
                name: s.to_string(),
                supported: Self::supported_names(),
            })
    }
}

/// The `\documentclass[...]{...}` declaration of a document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassDeclaration {
    pub class: DocumentClass,
    pub options: Vec<String>,
}

impl ClassDeclaration {
    pub fn new<I, S>(class: DocumentClass, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ClassDeclaration {
            class,
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl Render for ClassDeclaration {
    fn render(&self, out: &mut Vec<String>) {
        // brackets are emitted even without options
        out.push(format!(
            "\\documentclass[{}]{{{}}}\n",
            self.options.join(","),
            self.class
        ));
    }
}

/// A `\usepackage` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    options: Option<Vec<String>>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Package {
            name: name.into(),
            options: None,
        }
    }

    /// Package with a bracketed option list
    pub fn with_options<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Package {
            name: name.into(),
            options: Some(options.into_iter().map(Into::into).collect()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> Option<&[String]> {
        self.options.as_deref()
    }
}

impl Render for Package {
    fn render(&self, out: &mut Vec<String>) {
        let mut line = String::from("\\usepackage");
        if let Some(options) = &self.options {
            line.push('[');
            line.push_str(&options.join(","));
            line.push(']');
        }
        line.push_str(&format!("{{{}}}\n", self.name));
        out.push(line);
    }
}

/// A preamble command such as `\title{...}` or `\newcommand{...}{...}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    arguments: Vec<String>,
}

impl Command {
    pub fn new<I, S>(name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Command {
            name: name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

impl Render for Command {
    fn render(&self, out: &mut Vec<String>) {
        out.push(format!("{}\n", command_with_args(&self.name, &self.arguments)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_parse_supported_classes() {
        for class in DocumentClass::SUPPORTED {
            assert_eq!(class.as_str().parse::<DocumentClass>().unwrap(), class);
        }
    }

    #[test]
    fn test_unsupported_class() {
        let err = "letter".parse::<DocumentClass>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        let msg = err.to_string();
        assert!(msg.contains("'letter'"));
        assert!(msg.contains("article, report, book, extreport, extarticle"));
    }

    #[test]
    fn test_class_declaration_brackets() {
        let bare = ClassDeclaration::new(DocumentClass::Article, Vec::<String>::new());
        assert_eq!(bare.to_latex(), "\\documentclass[]{article}\n");

        let opts = ClassDeclaration::new(DocumentClass::Report, ["9pt", "twoside"]);
        assert_eq!(opts.to_latex(), "\\documentclass[9pt,twoside]{report}\n");
    }

    #[test]
    fn test_package_rendering() {
        assert_eq!(Package::new("graphicx").to_latex(), "\\usepackage{graphicx}\n");
        assert_eq!(
            Package::with_options("geometry", ["margin=1in", "a4paper"]).to_latex(),
            "\\usepackage[margin=1in,a4paper]{geometry}\n"
        );
        // an explicit empty option list keeps its brackets
        assert_eq!(
            Package::with_options("x", Vec::<String>::new()).to_latex(),
            "\\usepackage[]{x}\n"
        );
    }

    #[test]
    fn test_command_rendering() {
        assert_eq!(
            Command::new("title", ["Hello"]).to_latex(),
            "\\title{Hello}\n"
        );
        assert_eq!(
            Command::new("setcounter", ["secnumdepth", "0"]).to_latex(),
            "\\setcounter{secnumdepth}{0}\n"
        );
        assert_eq!(
            Command::new("maketitle", Vec::<String>::new()).to_latex(),
            "\\maketitle\n"
        );
    }
}
