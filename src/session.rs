//! Per-container annotation session
//!
//! Owns the tree, the scheduler and the page-level display state, and turns
//! reflow signals into reverse → re-measure → re-annotate passes. The
//! container cycles between unannotated and annotated for as long as the
//! page lives; there is no terminal state.

use crate::annotate::{self, AnnotateError, AnnotationReport};
use crate::config::AnnotatorConfig;
use crate::reflow::{Scheduler, Trigger};
use crate::tree::{TextTree, TreeError};
use std::time::Duration;

pub struct Session<T: TextTree, S: Scheduler> {
    tree: T,
    scheduler: S,
    resize_debounce: Duration,
    pending_resize: Option<S::Token>,
    pending_fonts: Option<S::Token>,
    visible: bool,
}

impl<T: TextTree, S: Scheduler> Session<T, S> {
    pub fn new(tree: T, scheduler: S, config: &AnnotatorConfig) -> Self {
        Self {
            tree,
            scheduler,
            resize_debounce: config.resize_debounce(),
            pending_resize: None,
            pending_fonts: None,
            visible: true,
        }
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Run one full pass now.
    pub fn process(&mut self) -> Result<AnnotationReport, AnnotateError> {
        annotate::process(&mut self.tree)
    }

    /// Strip the annotation and leave plain text behind.
    pub fn reverse(&mut self) -> Result<usize, TreeError> {
        annotate::reverse(&mut self.tree)
    }

    /// Viewport changed size. Supersedes any resize pass still waiting.
    pub fn on_resize(&mut self) {
        if let Some(token) = self.pending_resize.take() {
            self.scheduler.cancel(token);
        }
        self.pending_resize = Some(self.scheduler.schedule(Trigger::Resize, self.resize_debounce));
    }

    /// Web fonts finished loading; metrics may have moved since the first pass.
    pub fn on_fonts_ready(&mut self) {
        if self.pending_fonts.is_some() {
            return;
        }
        self.pending_fonts = Some(self.scheduler.schedule_after_current_task(Trigger::FontsReady));
    }

    /// The fonts signal was rejected or does not exist. No re-run is needed.
    pub fn on_fonts_unavailable(&mut self, reason: &str) {
        log::debug!("fonts ready signal unavailable ({}); keeping current layout", reason);
    }

    pub fn is_pending(&self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::Resize => self.pending_resize.is_some(),
            Trigger::FontsReady => self.pending_fonts.is_some(),
        }
    }

    /// A scheduled trigger came due. Failures are logged, never raised: the
    /// page keeps its current text.
    pub fn fire(&mut self, trigger: Trigger) -> Option<AnnotationReport> {
        match trigger {
            Trigger::Resize => self.pending_resize = None,
            Trigger::FontsReady => self.pending_fonts = None,
        }
        match self.process() {
            Ok(report) => Some(report),
            Err(e) => {
                log::warn!("{:?} re-annotation failed: {}", trigger, e);
                None
            }
        }
    }

    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
        if let Err(e) = self.tree.apply_visibility(visible) {
            log::warn!("could not update transliteration visibility: {}", e);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflow::ManualScheduler;
    use crate::tree::MemoryTree;

    fn session(paragraphs: &[&str], columns: usize) -> Session<MemoryTree, ManualScheduler> {
        Session::new(
            MemoryTree::from_paragraphs(paragraphs.iter().copied(), columns),
            ManualScheduler::new(),
            &AnnotatorConfig::default(),
        )
    }

    #[test]
    fn test_resize_burst_is_coalesced() {
        let mut s = session(&["ᏓᎵᏆ"], 20);
        s.on_resize();
        s.scheduler_mut().advance(Duration::from_millis(100));
        s.on_resize();
        s.on_resize();
        assert!(s.scheduler_mut().advance(Duration::from_millis(149)).is_empty());
        assert_eq!(s.scheduler_mut().advance(Duration::from_millis(1)), vec![Trigger::Resize]);
    }

    #[test]
    fn test_fonts_ready_scheduled_once() {
        let mut s = session(&["ᏓᎵᏆ"], 20);
        s.on_fonts_ready();
        s.on_fonts_ready();
        assert_eq!(s.scheduler_mut().pending(), vec![Trigger::FontsReady]);
        assert!(s.is_pending(Trigger::FontsReady));
    }

    #[test]
    fn test_fire_clears_pending_and_annotates() {
        let mut s = session(&["ᏓᎵᏆ"], 20);
        s.on_fonts_ready();
        let fired = s.scheduler_mut().advance(Duration::ZERO);
        let report = s.fire(fired[0]).unwrap();
        assert_eq!(report.runs_annotated, 1);
        assert!(!s.is_pending(Trigger::FontsReady));
        assert!(s.tree().is_annotated());
    }

    #[test]
    fn test_visibility_is_session_state() {
        let mut s = session(&["ᏓᎵᏆ"], 20);
        assert!(s.is_visible());
        s.set_visibility(false);
        assert!(!s.is_visible());
        assert!(!s.tree().is_visible());
    }
}
