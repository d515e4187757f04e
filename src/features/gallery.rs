//! Sample documents exercising every node type
//!
//! The samples back the `texweave` self-test binary and double as usage
//! examples. Samples that include an image look for `logo.png` in the
//! asset directory passed to [`Sample::build_in`].

use std::path::Path;

use crate::core::{
    Command, Content, Document, DocumentClass, DocumentOptions, Environment, Figure, Heading,
    List, Package, Picture, Row, SubFigure, Table, Tag,
};

/// Image file name used by the figure samples
pub const LOGO: &str = "logo.png";

/// A named sample document
#[derive(Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    builder: fn(&Path) -> Document,
}

impl Sample {
    /// Build with images resolved relative to the compiler's directory
    pub fn build(&self) -> Document {
        (self.builder)(Path::new(""))
    }

    /// Build with images resolved against `assets`
    pub fn build_in(&self, assets: &Path) -> Document {
        (self.builder)(assets)
    }
}

/// All samples, in their fixed order
pub static SAMPLES: [Sample; 16] = [
    Sample {
        name: "conference",
        description: "Conference proceedings layout",
        builder: conference,
    },
    Sample {
        name: "helloworld",
        description: "Hello World",
        builder: helloworld,
    },
    Sample {
        name: "packages",
        description: "Preamble packages",
        builder: packages,
    },
    Sample {
        name: "commands",
        description: "Preamble commands",
        builder: commands,
    },
    Sample {
        name: "formatting",
        description: "Math, bold, italic and underlined text",
        builder: formatting,
    },
    Sample {
        name: "multicol",
        description: "Two column environment",
        builder: multicol,
    },
    Sample {
        name: "quote",
        description: "Quote environment",
        builder: quote,
    },
    Sample {
        name: "lists",
        description: "Itemized and enumerated lists",
        builder: lists,
    },
    Sample {
        name: "chapters",
        description: "Chapter down to subsubsection",
        builder: chapters,
    },
    Sample {
        name: "sections",
        description: "Section down to subsubsection",
        builder: sections,
    },
    Sample {
        name: "tables",
        description: "Tables with stretchable columns",
        builder: tables,
    },
    Sample {
        name: "figures",
        description: "Figure with an image",
        builder: figures,
    },
    Sample {
        name: "subfigures",
        description: "Figure with two sub-figures",
        builder: subfigures,
    },
    Sample {
        name: "pictures",
        description: "Picture drawing",
        builder: pictures,
    },
    Sample {
        name: "multicolfigure",
        description: "Two figures in a multicols environment",
        builder: multicolfigure,
    },
    Sample {
        name: "maketitle",
        description: "Title block",
        builder: maketitle,
    },
];

/// Look up a sample by position
pub fn sample(index: usize) -> Option<&'static Sample> {
    SAMPLES.get(index)
}

/// Look up a sample by name
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name == name)
}

/// Build the sample at `index`
pub fn build(index: usize) -> Option<Document> {
    sample(index).map(Sample::build)
}

fn report() -> Document {
    Document::with_options(
        DocumentClass::Report,
        ["9pt", "twoside"],
        DocumentOptions::default(),
    )
}

fn conference(_: &Path) -> Document {
    let mut d = report();

    for name in [
        "titlesec",
        "multicol",
        "extsizes",
        "endnotes",
        "underscore",
        "changepage",
        "textcomp",
    ] {
        d.add(Package::new(name));
    }
    d.add(Package::with_options("inputenc", ["utf8x"]));
    for name in [
        "tabularx",
        "DejaVuSansMono",
        "graphicx",
        "float",
        "caption",
        "subcaption",
    ] {
        d.add(Package::new(name));
    }

    d.add(Command::new("pagestyle", ["plain"]));
    d.add(Command::new("renewcommand", ["\\chaptername", ""]));
    d.add(Command::new("newcounter", ["readblockcounter"]));
    d.add(Command::new("setcounter", ["readblockcounter", "1"]));
    d.add(Command::new(
        "newcommand",
        [
            "\\readblock",
            "\\noindent \\mbox{\\bf (\\thereadblockcounter)} \\stepcounter{readblockcounter}",
        ],
    ));

    for (length, value) in [
        ("\\hoffset", "-0.5 in"),
        ("\\oddsidemargin", "0 in"),
        ("\\evensidemargin", "0 in"),
        ("\\textwidth", "7.5 in"),
        ("\\columnsep", ".15in"),
        ("\\voffset", "-0.5 in"),
        ("\\topmargin", "0 in"),
        ("\\headheight", "0 in"),
        ("\\headsep", "0 in"),
        ("\\textheight", "9.7 in"),
        ("\\footskip", "0.3 in"),
    ] {
        d.add(Command::new("setlength", [length, value]));
    }

    d.add(
        Heading::section(
            "\\vspace{-.2in} \\huge \\center Title \\\\ \
             \\vspace{2mm} \\small Author Name \\\\ \
             \\vspace{1mm} Author Title \\\\ \
             \\vspace{1mm} \\footnotesize Event Name \\vspace{-6mm}",
        )
        .clear_double_page(true)
        .label("1"),
    );

    d
}

fn helloworld(_: &Path) -> Document {
    let mut d = report();
    d.add("Hello, World!");
    d
}

fn packages(_: &Path) -> Document {
    let mut d = report();
    d.add(Package::new("DejaVuSansMono"));
    d.add(Package::with_options("inputenc", ["utf8x"]));
    d.add("Hello, World!");
    d
}

fn commands(_: &Path) -> Document {
    let mut d = report();
    d.add(Command::new("pagestyle", ["plain"]));
    d.add(Command::new("setlength", ["\\hoffset", "-0.5 in"]));
    d.add("Hello, World!");
    d
}

fn formatting(_: &Path) -> Document {
    let mut d = report();
    d.add(Content::raw("$\\int_{a}^{b} x^2 dx$").post_newlines(2));
    d.add(Content::new("This content should be bold.").bold().post_newlines(2));
    d.add(Content::new("This content should be italic.").italic().post_newlines(2));
    d.add(
        Content::new("This content should be underlined.")
            .underline()
            .post_newlines(2),
    );
    d
}

fn multicol(_: &Path) -> Document {
    let mut d = report();
    d.add(Package::new("multicol"));
    d.add(
        Content::new("Example of multicol environment.")
            .post_newlines(1)
            .no_indent(),
    );

    let e = d.add(Environment::new("multicols").option("2"));
    e.add(
        Content::new("This content should be in column 1 of the multicols environment.")
            .post_newlines(2)
            .no_indent(),
    );
    e.add(
        Content::new("This content should be in column 2 of the multicols environment.")
            .no_indent(),
    );
    d
}

fn quote(_: &Path) -> Document {
    let mut d = report();
    d.add(Content::new("This is an example of a quote").no_indent());

    let e = d.add(Environment::new("quote"));
    e.add(
        Content::new(
            "Four score and seven years ago our fathers brought forth on this \
             continent, a new nation . . .",
        )
        .post_newlines(2),
    );
    e.add(
        "Now we are engaged in a great civil war, testing whether that nation, \
         or any nation. . .",
    );

    d.add(Content::new("Here is the next line after the quote.").no_indent());
    d
}

fn lists(_: &Path) -> Document {
    let mut d = report();
    d.add(Content::new("This is an example of an Itemized list").no_indent());
    let items = d.add(List::itemize());
    for item in ["first", "second", "third"] {
        items.add(item);
    }

    d.add(Content::new("This is an example of a tight Enumerated list").no_indent());
    let items = d.add(List::enumerate().tight(true));
    for item in ["first", "second", "third"] {
        items.add(item);
    }
    d
}

fn chapters(_: &Path) -> Document {
    let mut d = report();
    d.add("This content should be on the first page");

    let c = d.add(Heading::chapter("ChapterName").label("1").numbered(true));
    c.add("This text is part of the Chapter");

    let s = c.add(Heading::section("SectionName").label("1.1").numbered(true));
    s.add("This text is part of Section 1.1");

    let ss = s.add(Heading::subsection("SubSectionName").label("1.1.1").numbered(true));
    ss.add("This text is part of SubSection 1.1.1");

    let sss = ss.add(
        Heading::subsubsection("SubSubSectionName")
            .label("1.1.1.1")
            .numbered(true),
    );
    sss.add("This text is part of SubSubSection 1.1.1.1");
    d
}

fn sections(_: &Path) -> Document {
    let mut d = Document::with_options(
        DocumentClass::Article,
        ["9pt", "twoside"],
        DocumentOptions::default(),
    );

    let s = d.add(Heading::section("SectionName").label("1").numbered(true));
    s.add("This text is part of Section 1");

    let ss = s.add(Heading::subsection("SubSectionName").label("1.1").numbered(true));
    ss.add("This text is part of SubSection 1.1");

    let sss = ss.add(
        Heading::subsubsection("SubSubSectionName")
            .label("1.1.1")
            .numbered(true),
    );
    sss.add("This text is part of SubSubSection 1.1.1");
    d
}

fn tables(_: &Path) -> Document {
    let mut d = report();
    d.add(Package::new("tabularx"));

    d.add(
        Content::new(
            "Here is an example of a table with different three columns. The first \
             column width is just wider than the tex. The second and third column \
             widths are variable.",
        )
        .no_indent(),
    );
    let t = d.add(Table::new("| l | C | R | "));
    t.add(Row::from_cells(["aaa", "bbb", "ccc"]));
    t.add(Tag::new("hline"));
    t.add(Row::from_cells(["aaaaa", "bbbbb", "ccccc"]));
    t.add(Row::from_cells(["aaaaaaa", "bbbbbbb", "ccccccc"]));

    d.add(
        Content::new(
            "The second table removes the space between the first and second column \
             so that it appears that they are actually one column.",
        )
        .pre_newlines(2)
        .no_indent(),
    );
    let t = d.add(Table::new("| r @{} L | c | "));
    t.add(Row::from_cells(["ddd", "eee", "fff"]));
    t.add(Tag::new("hline"));
    t.add(Row::from_cells(["ddddd", "eeeee", "fffff"]));
    t.add(Row::from_cells(["ddddddd", "eeeeeee", "fffffff"]));
    d
}

fn figures(assets: &Path) -> Document {
    let mut d = report();
    d.add(Package::new("graphicx"));
    d.add(
        Content::new("This is an example of a figure")
            .post_newlines(1)
            .no_indent(),
    );
    d.add(
        Figure::new()
            .image_in(assets, LOGO)
            .width("0.25\\columnwidth")
            .placement("htb")
            .caption("This is the figure caption")
            .label("fig:Example"),
    );
    d
}

fn subfigures(assets: &Path) -> Document {
    let mut d = report();
    d.add(Package::new("graphicx"));
    d.add(Package::new("subcaption"));

    let f = d.add(
        Figure::new()
            .placement("t")
            .caption("This is the whole figure caption")
            .label("fig:Example"),
    );
    for caption in ["SubFigureA", "SubFigureB"] {
        f.add(
            SubFigure::new()
                .image_in(assets, LOGO)
                .subfigure_width("0.49\\textwidth")
                .image_width("\\textwidth")
                .placement("t")
                .caption(caption)
                .label("fig:Example"),
        );
    }
    d
}

fn pictures(_: &Path) -> Document {
    let mut d = report();
    let p = d.add(
        Picture::new(80, 70)
            .unit_length("1mm")
            .placement("h")
            .caption("This is a drawing")
            .label("fig:Drawing"),
    );

    p.add("\\def\\gridspace{20}\n");
    p.add("\\def\\doublegridspace{40}\n");
    p.add("\\def\\griddiagonal{10}\n");
    p.add("\\def\\griddot{\\circle*{2}}\n");
    p.add("\\linethickness{1.5pt}\n");

    // dots
    p.add(
        "\\multiput(20, 10)(5, 5){3}\
         {\\multiput(0, 0)(0, \\gridspace){3}\
         {\\multiput(0, 0)(\\gridspace, 0){3}\
         {\\griddot}}\
         }\n",
    );

    // straight lines
    p.add(
        "\\multiput(20, 10)(5, 5){3}\
         {\\multiput(0, 0)(0, \\gridspace){3}\
         {\\line(1, 0){\\doublegridspace}}\
         \\multiput(0, 0)(\\gridspace, 0){3}\
         {\\line(0, 1){\\doublegridspace}}\
         }\n",
    );

    // diagonal lines
    p.add(
        "\\multiput(20, 10)(0, \\gridspace){3}\
         {\\multiput(0, 0)(\\gridspace, 0){3}\
         {\\line(1, 1){\\griddiagonal}}\
         }\n",
    );

    p.add("\\linethickness{1pt}\n");

    // arrows
    p.add("\\put(20, 10){\\vector(-1, -1){5}}\n");
    p.add("\\put(30, 60){\\vector(0, 1){10}}\n");
    p.add("\\put(70, 20){\\vector(1, 0){10}}\n");

    // labels
    p.add("\\put(18, 12){\\makebox(0, 0){2}}\n");
    p.add("\\put(28, 62){\\makebox(0, 0){2}}\n");
    p.add("\\put(72, 22){\\makebox(0, 0){2}}\n");
    p.add("\\put(17, 4){\\makebox(0, 0){x}}\n");
    p.add("\\put(80, 18){\\makebox(0, 0){y}}\n");
    p.add("\\put(28, 70){\\makebox(0, 0){z}}\n");
    d
}

fn multicolfigure(assets: &Path) -> Document {
    let mut d = report();
    d.add(Package::new("multicol"));
    d.add(Package::new("graphicx"));
    d.add(Package::new("float"));

    d.add(
        Content::new("This is an example of two figures in a multicolumn Environment.")
            .post_newlines(1)
            .no_indent(),
    );

    let e = d.add(Environment::new("multicols").option("2"));
    for n in 1..=2 {
        e.add(
            Figure::new()
                .image_in(assets, LOGO)
                .width("0.25\\columnwidth")
                .placement("H")
                .caption(format!("This is figure {} caption", n))
                .label(format!("fig:Example{}", n)),
        );
    }
    d
}

fn maketitle(_: &Path) -> Document {
    let mut d = report();
    d.add(Command::new("title", ["Document Title"]));
    d.add(Command::new("author", ["Author Name"]));
    d.add(Command::new("date", ["2016-02-29"]));
    d.add(Tag::new("maketitle"));
    d
}
