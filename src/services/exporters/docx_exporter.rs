use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::{
    errors::AppResult,
    models::domain::Quiz,
    services::exporters::{question_lines, Exporter, DOCUMENT_TITLE},
};

const WORKDIR_PREFIX: &str = "quiz-docx-";
const PACKAGE_DIR: &str = "package";
const ARCHIVE_NAME: &str = "quiz.docx";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"></Relationships>"#;

/// A package part: path inside the archive and its content.
pub type Part = (&'static str, String);

/// Hand-built WordprocessingML package with one paragraph per line.
pub struct DocxExporter {
    work_root: Option<PathBuf>,
}

impl DocxExporter {
    pub fn new(work_root: Option<PathBuf>) -> Self {
        Self { work_root }
    }

    fn create_workdir(&self) -> AppResult<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORKDIR_PREFIX);

        let workdir = match &self.work_root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };
        Ok(workdir)
    }

    /// Writes the parts as a directory tree inside a fresh temporary
    /// directory, zips the tree and returns the archive bytes. The
    /// directory is removed whether or not packaging succeeds.
    pub fn package(&self, parts: &[Part]) -> AppResult<Vec<u8>> {
        let workdir = self.create_workdir()?;
        let result = write_package(workdir.path(), parts);

        let path = workdir.path().to_path_buf();
        if let Err(e) = workdir.close() {
            log::warn!("Failed to remove DOCX working directory {}: {}", path.display(), e);
        }

        result
    }
}

impl Exporter for DocxExporter {
    fn content_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }

    fn extension(&self) -> &'static str {
        "docx"
    }

    fn render(&self, quiz: &Quiz) -> AppResult<Vec<u8>> {
        let mut lines = vec![DOCUMENT_TITLE.to_string()];
        for (index, question) in quiz.questions.iter().enumerate() {
            lines.extend(question_lines(index + 1, question));
        }

        self.package(&package_parts(&lines))
    }
}

pub fn package_parts(lines: &[String]) -> Vec<Part> {
    vec![
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.to_string()),
        ("word/document.xml", document_xml(lines)),
    ]
}

fn document_xml(lines: &[String]) -> String {
    let paragraphs: String = lines
        .iter()
        .map(|line| {
            format!(
                "<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
                escape_xml(line)
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{}<w:sectPr/></w:body></w:document>",
        paragraphs
    )
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn write_package(workdir: &Path, parts: &[Part]) -> AppResult<Vec<u8>> {
    let tree = workdir.join(PACKAGE_DIR);
    for (name, content) in parts {
        let path = tree.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
    }

    let archive_path = workdir.join(ARCHIVE_NAME);
    let mut zip = ZipWriter::new(File::create(&archive_path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, _) in parts {
        zip.start_file(*name, options)?;
        zip.write_all(&fs::read(tree.join(name))?)?;
    }
    zip.finish()?;

    Ok(fs::read(&archive_path)?)
}
