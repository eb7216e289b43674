//! Opportunistic image preloading, keyed by project id.
//!
//! Scheduling is idempotent: the first call for a project kicks off a
//! fire-and-forget fetch per image, repeats are ignored. A failed preload is
//! swallowed entirely: the gallery simply loads that image the normal way
//! when the detail view renders it.

use std::collections::HashSet;

use crate::model::ProjectRecord;
use crate::render;

#[derive(Default)]
pub struct ImagePreloader {
    seen: HashSet<&'static str>,
}

impl ImagePreloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the id as wanted; returns false when it was already scheduled.
    pub fn mark(&mut self, id: &'static str) -> bool {
        self.seen.insert(id)
    }

    pub fn schedule(&mut self, record: &'static ProjectRecord) {
        if !self.mark(record.id) {
            return;
        }
        for name in record.images {
            // Detached image elements fetch into the browser cache; errors
            // never reach the user.
            if let Ok(img) = web_sys::HtmlImageElement::new() {
                img.set_src(&render::image_url(name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_mark_schedules_repeats_do_not() {
        let mut preloader = ImagePreloader::new();
        assert!(preloader.mark("2"));
        assert!(!preloader.mark("2"));
        assert!(!preloader.mark("2"));
    }

    #[test]
    fn projects_are_tracked_independently() {
        let mut preloader = ImagePreloader::new();
        assert!(preloader.mark("1"));
        assert!(preloader.mark("2"));
        assert!(!preloader.mark("1"));
    }
}
