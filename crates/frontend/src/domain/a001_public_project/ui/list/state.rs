use contracts::domain::a001_public_project::{CategoryCounts, ProjectFilter, ProjectRecord};
use leptos::prelude::*;

/// Rows per batch: the first batch of a filter, then every following one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchSizes {
    pub initial: usize,
    pub increment: usize,
}

impl Default for BatchSizes {
    fn default() -> Self {
        Self {
            initial: 8,
            increment: 8,
        }
    }
}

/// A batch that has been reserved but not yet appended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchTicket {
    generation: u64,
    start: usize,
    len: usize,
}

impl BatchTicket {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// First batch after a load or filter change
    pub fn is_first(&self) -> bool {
        self.start == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchOutcome {
    Appended { start: usize, len: usize },
    /// Issued under a filter that is no longer active; dropped
    Stale,
}

/// What the region under the table shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trailer {
    Hidden,
    /// Placeholder rows while a follow-up batch is pending
    Skeleton { rows: usize },
    LoadMore { remaining: usize },
    EndOfList { total: usize },
}

/// Progressive project list: filtered view plus how much of it is rendered.
///
/// `displayed_count` only grows within a filter; changing the filter starts a
/// new generation and any batch still pending from the old one is discarded
/// when it completes.
#[derive(Clone, Debug)]
pub struct ProjectListState {
    all_projects: Vec<ProjectRecord>,
    filtered_projects: Vec<ProjectRecord>,
    displayed_count: usize,
    current_filter: ProjectFilter,
    in_flight: Option<BatchTicket>,
    generation: u64,
    loaded: bool,
    batch_sizes: BatchSizes,
}

impl ProjectListState {
    pub fn new(batch_sizes: BatchSizes) -> Self {
        Self {
            all_projects: Vec::new(),
            filtered_projects: Vec::new(),
            displayed_count: 0,
            current_filter: ProjectFilter::All,
            in_flight: None,
            generation: 0,
            loaded: false,
            batch_sizes,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn all_projects(&self) -> &[ProjectRecord] {
        &self.all_projects
    }

    pub fn filtered_projects(&self) -> &[ProjectRecord] {
        &self.filtered_projects
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed_count
    }

    pub fn current_filter(&self) -> ProjectFilter {
        self.current_filter
    }

    /// Key of a rendered row; changes with every filter selection so rows remount
    pub fn row_key(&self, index: usize) -> String {
        format!("{}-{}-{}", self.current_filter.key(), self.generation, index)
    }

    pub fn remaining(&self) -> usize {
        self.filtered_projects.len() - self.displayed_count
    }

    /// Rows currently rendered
    pub fn visible_projects(&self) -> &[ProjectRecord] {
        &self.filtered_projects[..self.displayed_count]
    }

    pub fn category_counts(&self) -> CategoryCounts {
        CategoryCounts::from_records(&self.all_projects)
    }

    /// Store the project list and reserve the first batch.
    ///
    /// Only the first call has an effect.
    pub fn load(&mut self, projects: Vec<ProjectRecord>) -> Option<BatchTicket> {
        if self.loaded {
            log::warn!("Project list already loaded; ignoring reload");
            return None;
        }
        self.loaded = true;
        self.filtered_projects = self.current_filter.apply(&projects);
        self.all_projects = projects;
        self.displayed_count = 0;
        self.begin_batch()
    }

    /// Switch filter, clear the rendered rows and reserve the first batch
    pub fn set_filter(&mut self, filter: ProjectFilter) -> Option<BatchTicket> {
        self.current_filter = filter;
        self.filtered_projects = filter.apply(&self.all_projects);
        self.displayed_count = 0;
        self.generation += 1;
        // A batch pending for the previous filter goes stale with the generation bump
        self.in_flight = None;
        self.begin_batch()
    }

    /// Reserve the next batch, or `None` while one is pending or nothing remains
    pub fn begin_batch(&mut self) -> Option<BatchTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }
        let size = if self.displayed_count == 0 {
            self.batch_sizes.initial
        } else {
            self.batch_sizes.increment
        };
        let ticket = BatchTicket {
            generation: self.generation,
            start: self.displayed_count,
            len: size.max(1).min(remaining),
        };
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    /// Append a reserved batch to the rendered rows
    pub fn complete_batch(&mut self, ticket: BatchTicket) -> BatchOutcome {
        if ticket.generation != self.generation || self.in_flight != Some(ticket) {
            return BatchOutcome::Stale;
        }
        self.in_flight = None;
        self.displayed_count = ticket.start + ticket.len;
        BatchOutcome::Appended {
            start: ticket.start,
            len: ticket.len,
        }
    }

    pub fn trailer(&self) -> Trailer {
        if let Some(ticket) = self.in_flight {
            return if ticket.is_first() {
                Trailer::Hidden
            } else {
                Trailer::Skeleton { rows: ticket.len }
            };
        }
        let total = self.filtered_projects.len();
        if total == 0 {
            Trailer::Hidden
        } else if self.displayed_count >= total {
            Trailer::EndOfList { total }
        } else {
            Trailer::LoadMore {
                remaining: self.remaining(),
            }
        }
    }
}

// Created per mounted list so the state is dropped with the view
pub fn create_state(batch_sizes: BatchSizes) -> RwSignal<ProjectListState> {
    RwSignal::new(ProjectListState::new(batch_sizes))
}
