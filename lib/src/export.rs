//! The whole conversion: read the catalog, localize, render and write the library files.

use std::error::Error as _;
use std::fs;
use std::path::{Path, PathBuf};

use ahash::HashSet;

use crate::config::Configuration;
use crate::library::{render_media, LibraryOutput, ShellScripts};
use crate::localize::localize;
use crate::model::Media;
use crate::reader::{read_catalog, ReadError};
use crate::xml::{XmlError, XmlNode};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("reading \"{}\"", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing \"{}\"", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: XmlError,
    },
    #[error("reading catalog \"{}\"", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
    #[error("\"{}\" was already written by another media", path.display())]
    Duplicate { path: PathBuf },
    #[error("writing \"{}\"", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A media whose files could not be written
#[derive(Debug)]
pub struct FailedMedia {
    pub title: String,
    pub error: ExportError,
}

/// What a run produced
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Media exported, localized copies and episodes included
    pub exported: usize,
    pub documents: Vec<PathBuf>,
    pub scripts: Vec<PathBuf>,
    pub failed: Vec<FailedMedia>,
}

impl ExportSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Exporter<'a> {
    config: &'a Configuration,
    localize: bool,
}

impl<'a> Exporter<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            localize: true,
        }
    }

    /// Whether to create the configured localized copies, on by default
    #[must_use]
    pub fn with_localization(mut self, enabled: bool) -> Self {
        self.localize = enabled;
        self
    }

    /// Convert the Collectorz export at `path`.
    ///
    /// Unreadable or malformed input fails before anything is written. Media that fail to
    /// write are reported in the summary and do not stop the others.
    pub fn run(&self, path: &Path) -> Result<ExportSummary, ExportError> {
        let media = self.load(path)?;
        let media = self.expand(media);

        self.export(&media)
    }

    /// Read and parse the catalog
    pub fn load(&self, path: &Path) -> Result<Vec<Media>, ExportError> {
        info!("Reading catalog \"{}\"", path.display());
        let content = fs::read_to_string(path).map_err(|source| ExportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = XmlNode::parse(&content).map_err(|source| ExportError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        read_catalog(&document, self.config).map_err(|source| ExportError::Catalog {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Every media followed by its localized copies
    pub fn expand(&self, media: Vec<Media>) -> Vec<Media> {
        let replacement = match self.config.language_replacement() {
            Some(v) if self.localize => v,
            _ => return media,
        };

        let mut expanded = Vec::with_capacity(media.len() * (1 + replacement.targets().len()));
        for item in media {
            let copies = localize(&item, &replacement);
            debug!("{} localized copies of {}", copies.len(), item.display_title());
            expanded.push(item);
            expanded.extend(copies);
        }

        expanded
    }

    /// Write the NFO documents of all media and one copy script per server
    pub fn export(&self, media: &[Media]) -> Result<ExportSummary, ExportError> {
        let mut summary = ExportSummary::default();
        let mut scripts = ShellScripts::new(self.config.servers().ids());
        let mut written: HashSet<PathBuf> = HashSet::default();

        for item in media {
            let output = render_media(item, self.config);
            let result = match find_duplicate(&output, &written) {
                Some(path) => Err(ExportError::Duplicate {
                    path: path.to_path_buf(),
                }),
                None => write_documents(&output),
            };
            match result {
                Ok(()) => {
                    scripts.merge(&output.copies);
                    written.extend(output.documents.iter().map(|v| v.path.clone()));
                    summary.exported += 1 + item.episodes().len();
                    summary
                        .documents
                        .extend(output.documents.into_iter().map(|v| v.path));
                }
                Err(error) => {
                    match error.source() {
                        Some(source) => {
                            error!("Exporting {} failed, {error}: {source}", item.display_title());
                        }
                        None => error!("Exporting {} failed, {error}", item.display_title()),
                    }
                    summary.failed.push(FailedMedia {
                        title: item.display_title(),
                        error,
                    });
                }
            }
        }

        for (id, script) in scripts.iter() {
            // scripts only exist for configured servers
            let Some(server) = self.config.server(id) else {
                continue;
            };
            let path = self.config.script_path(server);
            write_file(&path, &script.render())?;
            info!(
                "Wrote {} copy commands for \"{}\" to \"{}\"",
                script.len(),
                server.name,
                path.display()
            );
            summary.scripts.push(path);
        }

        info!(
            "Exported {} media, {} failed",
            summary.exported,
            summary.failed.len()
        );
        Ok(summary)
    }
}

/// The first document path of `output` that was written before or repeats within it
fn find_duplicate<'a>(output: &'a LibraryOutput, written: &HashSet<PathBuf>) -> Option<&'a Path> {
    let mut own: HashSet<&Path> = HashSet::default();
    output
        .documents
        .iter()
        .map(|v| v.path.as_path())
        .find(|path| written.contains(*path) || !own.insert(*path))
}

/// Write all documents of one media, removing the ones already written if any fails
fn write_documents(output: &LibraryOutput) -> Result<(), ExportError> {
    let mut written: Vec<&Path> = Vec::with_capacity(output.documents.len());
    for document in &output.documents {
        if let Err(err) = write_file(&document.path, &document.content) {
            for path in written {
                if let Err(remove_err) = fs::remove_file(path) {
                    warn!(
                        "Could not remove partial output \"{}\": {remove_err}",
                        path.display()
                    );
                }
            }
            return Err(err);
        }
        trace!("Wrote \"{}\"", document.path.display());
        written.push(&document.path);
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), ExportError> {
    let result = match path.parent() {
        Some(parent) => fs::create_dir_all(parent).and_then(|()| fs::write(path, content)),
        None => fs::write(path, content),
    };

    result.map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
