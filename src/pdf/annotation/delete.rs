//! Batch deletion of existing annotations by page, index, or unique name.
//!
//! Pure bookkeeping over the engine's enumeration and removal calls; no
//! annotation state from this crate is involved.

use std::collections::HashMap;

use log::trace;

use crate::engine::{PdfAnnotationEngine, PdfDocumentHandle, PdfPageHandle};
use crate::error::PdfMarkupError;

/// One page's worth of annotations selected by unique name ("NM" entry).
#[derive(Debug, Clone)]
pub struct PdfNamedSelection {
    pub page_index: usize,
    pub names: Vec<String>,
}

/// One page's worth of annotations selected by zero-based index.
#[derive(Debug, Clone)]
pub struct PdfIndexedSelection {
    pub page_index: usize,
    pub indices: Vec<usize>,
}

/// A batch deletion request.
#[derive(Debug, Clone)]
pub enum PdfAnnotationDeletion {
    /// Delete the named annotations on each listed page. Names that do not
    /// resolve on their page are skipped without error.
    ByName(Vec<PdfNamedSelection>),
    /// Delete the indexed annotations on each listed page.
    ByIndex(Vec<PdfIndexedSelection>),
    /// Delete every annotation on each listed page.
    Pages(Vec<usize>),
    /// Delete every annotation on every page of the document.
    All,
}

/// Executes a batch deletion against the given document and returns the
/// number of annotations removed.
///
/// Fails with [PdfMarkupError::EmptyDocument] when the document has no
/// pages; engine failures abort the batch mid-way and are surfaced, with
/// already-removed annotations staying removed.
pub fn delete_annotations(
    engine: &dyn PdfAnnotationEngine,
    document: PdfDocumentHandle,
    deletion: PdfAnnotationDeletion,
) -> Result<usize, PdfMarkupError> {
    let page_count = engine.page_count(document)?;

    if page_count == 0 {
        return Err(PdfMarkupError::EmptyDocument);
    }

    match deletion {
        PdfAnnotationDeletion::ByName(selections) => {
            delete_by_names(engine, document, &selections)
        }
        PdfAnnotationDeletion::ByIndex(selections) => {
            delete_by_indices(engine, document, &selections)
        }
        PdfAnnotationDeletion::Pages(pages) => delete_pages(engine, document, &pages),
        PdfAnnotationDeletion::All => delete_pages(engine, document, &(0..page_count).collect::<Vec<_>>()),
    }
}

fn delete_by_indices(
    engine: &dyn PdfAnnotationEngine,
    document: PdfDocumentHandle,
    selections: &[PdfIndexedSelection],
) -> Result<usize, PdfMarkupError> {
    let mut deleted = 0;

    for selection in selections {
        let page = engine.load_page(document, selection.page_index)?;
        deleted += delete_page_indices(engine, page, &selection.indices)?;
    }

    Ok(deleted)
}

/// Removes the given indices from one page, highest first, so the indices
/// of annotations still pending removal stay valid.
fn delete_page_indices(
    engine: &dyn PdfAnnotationEngine,
    page: PdfPageHandle,
    indices: &[usize],
) -> Result<usize, PdfMarkupError> {
    let mut ordered = indices.to_vec();
    ordered.sort_unstable_by(|a, b| b.cmp(a));

    let mut deleted = 0;

    for index in ordered {
        engine.remove_annotation(page, index)?;
        deleted += 1;
    }

    Ok(deleted)
}

/// Maps each annotation's unique name to its current index on the page.
/// Unnamed annotations are not included.
fn annotation_names(
    engine: &dyn PdfAnnotationEngine,
    page: PdfPageHandle,
) -> Result<HashMap<String, usize>, PdfMarkupError> {
    let count = engine.annotation_count(page)?;
    let mut names = HashMap::with_capacity(count);

    for index in 0..count {
        let name = engine.annotation_name(page, index)?;

        if !name.is_empty() {
            names.insert(name, index);
        }
    }

    Ok(names)
}

fn delete_by_names(
    engine: &dyn PdfAnnotationEngine,
    document: PdfDocumentHandle,
    selections: &[PdfNamedSelection],
) -> Result<usize, PdfMarkupError> {
    let mut deleted = 0;

    for selection in selections {
        let page = engine.load_page(document, selection.page_index)?;
        let names = annotation_names(engine, page)?;

        let indices: Vec<usize> = selection
            .names
            .iter()
            .filter_map(|name| names.get(name).copied())
            .collect();

        trace!(
            "page {}: resolved {} of {} name(s) for deletion",
            selection.page_index,
            indices.len(),
            selection.names.len()
        );

        deleted += delete_page_indices(engine, page, &indices)?;
    }

    Ok(deleted)
}

fn delete_pages(
    engine: &dyn PdfAnnotationEngine,
    document: PdfDocumentHandle,
    pages: &[usize],
) -> Result<usize, PdfMarkupError> {
    let mut deleted = 0;

    for &page_index in pages {
        let page = engine.load_page(document, page_index)?;
        let count = engine.annotation_count(page)?;

        for index in (0..count).rev() {
            engine.remove_annotation(page, index)?;
            deleted += 1;
        }
    }

    Ok(deleted)
}
