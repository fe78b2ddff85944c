// web_app/model/directory.rs - Mentor directory widget state
//
// The directory owns the loaded records, the filtered view, and the page
// cursor. It is created once per page view and mutated only from the page's
// own event handlers, so it is plain data held in a single signal.

use super::card::MentorCardView;
use super::pagination::{self, PaginationControls};
use super::{MentorRecord, PAGE_SIZE};
use crate::web_app::error::DirectoryError;

/// Where the one-time directory load stands
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed(DirectoryError),
}

/// What the records container shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerView {
    Loading,
    LoadFailed,
    NoMatches,
    Cards(Vec<MentorCardView>),
}

/// Records whose name, university, or department contains `term`,
/// case-insensitively, in their original order. An empty term keeps all.
pub fn filter_records(records: &[MentorRecord], term: &str) -> Vec<MentorRecord> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|mentor| {
            mentor.name.to_lowercase().contains(&term)
                || mentor.university.to_lowercase().contains(&term)
                || mentor.department.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MentorDirectory {
    all: Vec<MentorRecord>,
    filtered: Vec<MentorRecord>,
    current_page: usize,
    status: LoadStatus,
    // Set by a failed load; cleared by the first re-render after it
    show_failure: bool,
}

impl Default for MentorDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl MentorDirectory {
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            current_page: 1,
            status: LoadStatus::Loading,
            show_failure: false,
        }
    }

    /// A directory that has already loaded `records`
    pub fn with_records(records: Vec<MentorRecord>) -> Self {
        let mut directory = Self::new();
        directory.finish_load(Ok(records));
        directory
    }

    /// Apply the outcome of the directory load.
    ///
    /// On success both lists are populated and the first page is shown. On
    /// failure the lists stay empty and the container shows the error.
    pub fn finish_load(&mut self, outcome: Result<Vec<MentorRecord>, DirectoryError>) {
        match outcome {
            Ok(records) => {
                self.filtered = records.clone();
                self.all = records;
                self.status = LoadStatus::Loaded;
                self.show_failure = false;
            }
            Err(err) => {
                self.status = LoadStatus::Failed(err);
                self.show_failure = true;
            }
        }
    }

    /// Re-filter against `term` and go back to page 1
    pub fn filter(&mut self, term: &str) {
        self.filtered = filter_records(&self.all, term);
        self.current_page = 1;
        self.show_failure = false;
    }

    /// Jump to `page`. Callers only pass values offered by the controls.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
        self.show_failure = false;
    }

    pub fn all(&self) -> &[MentorRecord] {
        &self.all
    }

    pub fn filtered(&self) -> &[MentorRecord] {
        &self.filtered
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.filtered.len(), PAGE_SIZE)
    }

    /// The records on the current page; empty past the last page
    pub fn page_slice(&self) -> &[MentorRecord] {
        let start = self.current_page.saturating_sub(1) * PAGE_SIZE;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn container(&self) -> ContainerView {
        if self.show_failure {
            return ContainerView::LoadFailed;
        }
        if self.status == LoadStatus::Loading {
            return ContainerView::Loading;
        }

        let page = self.page_slice();
        if page.is_empty() {
            ContainerView::NoMatches
        } else {
            ContainerView::Cards(page.iter().map(MentorCardView::from).collect())
        }
    }

    pub fn pagination(&self) -> PaginationControls {
        pagination::pagination_controls(self.current_page, self.page_count())
    }
}
