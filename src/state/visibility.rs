//! Viewport visibility tracking for the detail view's jump-list.
//!
//! The selection rule is pure and lives apart from the browser observer: the
//! active entry is the section with the greatest visible ratio at or above
//! the threshold, exact ties going to the earliest section in document order
//! (so an equally-visible earlier section keeps its active state instead of
//! flickering). The `VisibilityTracker` trait is the seam for environments
//! without `IntersectionObserver`; a scroll-polling fallback would implement
//! the same two methods.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// A section counts for jump-list highlighting once 30% of it is visible.
pub const ACTIVE_THRESHOLD: f64 = 0.30;

/// Detail view subsections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Overview,
    Architecture,
    Results,
    Skills,
    Images,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Architecture,
        Section::Results,
        Section::Skills,
        Section::Images,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Architecture => "architecture",
            Section::Results => "results",
            Section::Skills => "skills-used",
            Section::Images => "images",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Architecture => "Architecture",
            Section::Results => "Results",
            Section::Skills => "Technologies",
            Section::Images => "Images",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// One observed change: the target's DOM id, its visible ratio, and whether
/// it currently intersects the viewport at all.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityChange {
    pub id: String,
    pub ratio: f64,
    pub visible: bool,
}

/// Picks the active jump-list entry from the latest known ratio per section.
/// `ratios` may be in any order; document order comes from `Section::ALL`.
pub fn select_active(ratios: &[(Section, f64)]) -> Option<Section> {
    let mut best: Option<(Section, f64)> = None;
    for section in Section::ALL {
        let Some(&(_, ratio)) = ratios.iter().find(|(s, _)| *s == section) else {
            continue;
        };
        if ratio < ACTIVE_THRESHOLD {
            continue;
        }
        match best {
            // Strictly greater only: on an exact tie the earlier section wins.
            Some((_, best_ratio)) if ratio > best_ratio => best = Some((section, ratio)),
            None => best = Some((section, ratio)),
            _ => {}
        }
    }
    best.map(|(section, _)| section)
}

pub trait VisibilityTracker {
    fn observe(&self, target: &Element);
    fn disconnect(&self);
}

/// `IntersectionObserver`-backed tracker. Holds the callback closure for the
/// observer's lifetime; dropping the tracker without `disconnect` would leak
/// the observation, so callers disconnect in their cleanup path.
pub struct IntersectionTracker {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionTracker {
    /// `thresholds` are the observer's notification points; `root_margin`
    /// shrinks/grows the intersection root (viewport) edges.
    pub fn new(
        thresholds: &[f64],
        root_margin: Option<&str>,
        on_change: impl Fn(Vec<VisibilityChange>) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let mut changes = Vec::with_capacity(entries.length() as usize);
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let visible = entry.is_intersecting();
                    changes.push(VisibilityChange {
                        id: entry.target().id(),
                        ratio: if visible { entry.intersection_ratio() } else { 0.0 },
                        visible,
                    });
                }
                on_change(changes);
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        let points = js_sys::Array::new();
        for t in thresholds {
            points.push(&JsValue::from_f64(*t));
        }
        options.set_threshold(&JsValue::from(points));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        Some(Self { observer, _callback: callback })
    }

    /// Observer tuned for section highlighting: granular ratio updates
    /// around the activation threshold.
    pub fn for_sections(on_change: impl Fn(Vec<VisibilityChange>) + 'static) -> Option<Self> {
        Self::new(&[0.0, 0.15, ACTIVE_THRESHOLD, 0.5, 0.75, 1.0], None, on_change)
    }

    /// Observer tuned for the sticky back button: fires once the watched
    /// header scrolls out under the fixed nav.
    pub fn for_header(on_change: impl Fn(Vec<VisibilityChange>) + 'static) -> Option<Self> {
        Self::new(&[0.0], Some("-100px 0px 0px 0px"), on_change)
    }
}

impl VisibilityTracker for IntersectionTracker {
    fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_ratio_above_threshold_wins() {
        let ratios = [
            (Section::Overview, 0.35),
            (Section::Architecture, 0.80),
            (Section::Results, 0.40),
        ];
        assert_eq!(select_active(&ratios), Some(Section::Architecture));
    }

    #[test]
    fn nothing_qualifies_below_threshold() {
        let ratios = [(Section::Overview, 0.29), (Section::Images, 0.10)];
        assert_eq!(select_active(&ratios), None);
        assert_eq!(select_active(&[]), None);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(
            select_active(&[(Section::Results, ACTIVE_THRESHOLD)]),
            Some(Section::Results)
        );
    }

    #[test]
    fn exact_ties_keep_the_earliest_section_in_document_order() {
        let ratios = [
            (Section::Skills, 0.5),
            (Section::Architecture, 0.5),
            (Section::Results, 0.5),
        ];
        assert_eq!(select_active(&ratios), Some(Section::Architecture));
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = [(Section::Images, 0.9), (Section::Overview, 0.4)];
        let b = [(Section::Overview, 0.4), (Section::Images, 0.9)];
        assert_eq!(select_active(&a), select_active(&b));
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("nonsense"), None);
    }
}
