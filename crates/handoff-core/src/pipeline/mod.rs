//! Pipeline module: One injection run from knowledge to planned rewrites
//!
//! Nothing is written here. The run ends with an [`InjectOutcome`] that the
//! report module either previews or commits.

mod model;
mod options;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::error::{InjectError, Result};
use crate::extract::{element_source, extract_elements};
use crate::inject::inject;
use crate::knowledge::KnowledgeBase;
use crate::scanner::{DiscoveredFile, Language, compute_hash};
use crate::score::KnowledgeIndex;
use crate::synth::{DocStyle, synthesize};

pub use model::{FileResult, InjectOutcome};
pub use options::{DEFAULT_CONCURRENCY, InjectOptions};

/// Content longer than this with no recognizable element looks unsaved
pub const UNSAVED_MIN_LEN: usize = 50;

/// What became of one scanned file
#[derive(Debug)]
enum FileOutcome {
    /// Unknown language, or short content with nothing to document
    Skipped,
    /// Empty, binary, or content without recognizable elements
    Unsaved(std::path::PathBuf),
    /// Elements were found; `None` when every one was already documented
    Processed(Option<FileResult>),
}

/// Run the pipeline and return the planned rewrites
///
/// # Errors
/// Fails when the knowledge base is missing, the pattern is invalid or
/// matches nothing, a file cannot be read, or no file yields any element.
pub async fn run(options: &InjectOptions) -> Result<InjectOutcome> {
    let knowledge_dir = options.knowledge_dir();
    info!("Loading knowledge base from {}", knowledge_dir.display());
    let knowledge = KnowledgeBase::load(&knowledge_dir).await?;

    let index = knowledge
        .has_meaningful_content()
        .then(|| KnowledgeIndex::new(&knowledge.combined_text()));
    if index.is_none() {
        info!("Knowledge base has no meaningful content, using structural descriptions");
    }

    if let Some(language) = &options.language {
        match Language::from_name(language) {
            Some(language) => warn!(
                "Language override '{}' is ignored; languages come from file extensions",
                language
            ),
            None => warn!("Unknown language '{}' is ignored", language),
        }
    }

    let files = options.scanner().scan()?;
    if files.is_empty() {
        return Err(InjectError::NoSourceFiles);
    }
    info!("Found {} source files", files.len());

    let outcomes: Vec<Result<FileOutcome>> = stream::iter(files)
        .map(|file| process_file(file, index.as_ref()))
        .buffered(options.concurrency.max(1))
        .collect()
        .await;

    let mut outcome = InjectOutcome::default();
    let mut found_elements = false;
    for file_outcome in outcomes {
        match file_outcome? {
            FileOutcome::Skipped => {}
            FileOutcome::Unsaved(path) => outcome.unsaved.push(path),
            FileOutcome::Processed(result) => {
                found_elements = true;
                outcome.results.extend(result);
            }
        }
    }

    for path in &outcome.unsaved {
        warn!("{} appears unsaved or empty; save it and run again", path.display());
    }

    if !found_elements {
        return Err(InjectError::AllFilesUnprocessable {
            unsaved: outcome.unsaved,
        });
    }

    info!(
        "Planned {} documentation blocks across {} files",
        outcome.block_count(),
        outcome.results.len()
    );
    Ok(outcome)
}

async fn process_file(file: DiscoveredFile, index: Option<&KnowledgeIndex>) -> Result<FileOutcome> {
    let Some(language) = file.language else {
        debug!(
            "Skipping {}: {} language",
            file.path.display(),
            file.language_name()
        );
        return Ok(FileOutcome::Skipped);
    };

    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|e| InjectError::read(&file.path, e))?;
    let Ok(content) = String::from_utf8(bytes) else {
        debug!("{} is not valid UTF-8", file.path.display());
        return Ok(FileOutcome::Unsaved(file.path));
    };

    if content.trim().is_empty() {
        return Ok(FileOutcome::Unsaved(file.path));
    }

    let elements = extract_elements(&content, language);
    if elements.is_empty() {
        if content.len() > UNSAVED_MIN_LEN {
            return Ok(FileOutcome::Unsaved(file.path));
        }
        debug!("Skipping {}: nothing to document", file.path.display());
        return Ok(FileOutcome::Skipped);
    }
    debug!(
        "{}: {} elements ({})",
        file.path.display(),
        elements.len(),
        language
    );

    let Some(style) = DocStyle::for_language(language) else {
        debug!("No documentation template for {}", language);
        return Ok(FileOutcome::Processed(None));
    };

    let blocks = elements
        .iter()
        .map(|element| {
            let contexts = index
                .map(|index| index.find_relevant_contexts(&element.name))
                .unwrap_or_default();
            debug!(
                "{} {}: {} knowledge contexts",
                element.kind,
                element.name,
                contexts.len()
            );
            synthesize(element, &contexts, &element_source(&content, element), style)
        })
        .collect();

    let injection = inject(&content, blocks, style);
    if injection.is_unchanged() {
        debug!("{} is already documented", file.path.display());
        return Ok(FileOutcome::Processed(None));
    }

    Ok(FileOutcome::Processed(Some(FileResult {
        original_hash: compute_hash(content.as_bytes()),
        file: file.path,
        language,
        original_content: content,
        documentation: injection.inserted,
        new_content: injection.content,
    })))
}

#[cfg(test)]
mod tests;
