//! View-state store for the projects section.
//!
//! Tracks which project (if any) is open, the card that opened it (as a DOM
//! id, revalidated at restore time since the element may be gone), and a
//! LIFO history of prior snapshots for back navigation. Subscribers are
//! notified synchronously, in registration order, before the triggering call
//! returns; there is a single UI thread, so observers never see a stale
//! intermediate state.
//!
//! The store is constructed once in `App` and passed down as a handle, not
//! ambient globals.

use std::cell::{Cell, RefCell};
use std::ops::Deref;
use std::rc::Rc;

use crate::model;

pub type ProjectId = &'static str;

/// Detail view lifecycle. Opening/Closing are transient and currently
/// synchronous; they exist as distinct states so an animation delay can be
/// inserted later without widening the valid-transition set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Snapshot {
    current: Option<ProjectId>,
    origin: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub current: Option<ProjectId>,
    pub phase: DetailPhase,
    /// DOM id of the card that opened the current detail view. Only
    /// meaningful while a detail view is open; stale afterwards.
    pub origin: Option<String>,
    history: Vec<Snapshot>,
}

impl ViewState {
    pub fn is_detail_view(&self) -> bool {
        self.current.is_some()
    }

    /// Number of open transitions that can be undone with back navigation.
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    Opened { id: ProjectId },
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Subscriber = Rc<dyn Fn(&StoreEvent)>;

#[derive(Default)]
pub struct ViewStore {
    state: RefCell<ViewState>,
    subscribers: RefCell<Vec<(usize, Subscriber)>>,
    next_subscriber: Cell<usize>,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Opens a project detail view. Unknown ids are a no-op: no transition,
    /// no notification. Opening while another project is open transitions
    /// directly; there is never a state with two projects marked open.
    pub fn open(&self, id: &str, origin: Option<String>) {
        let Some(record) = model::project(id) else {
            return;
        };
        {
            let mut st = self.state.borrow_mut();
            match st.phase {
                // Transient phases never escape a single call today; refuse
                // re-entrant opens all the same.
                DetailPhase::Opening | DetailPhase::Closing => return,
                DetailPhase::Open if st.current == Some(record.id) => return,
                _ => {}
            }
            st.phase = DetailPhase::Opening;
            let snapshot = Snapshot { current: st.current, origin: st.origin.take() };
            st.history.push(snapshot);
            st.current = Some(record.id);
            st.origin = origin;
            st.phase = DetailPhase::Open;
        }
        self.notify(&StoreEvent::Opened { id: record.id });
    }

    /// Back navigation: pops the most recent snapshot, or clears to the
    /// closed state when the history is empty. No-op when already closed.
    pub fn go_back(&self) {
        let event = {
            let mut st = self.state.borrow_mut();
            if !st.is_detail_view() {
                return;
            }
            st.phase = DetailPhase::Closing;
            match st.history.pop() {
                Some(prev) => {
                    st.current = prev.current;
                    st.origin = prev.origin;
                }
                None => {
                    st.current = None;
                    st.origin = None;
                }
            }
            if let Some(id) = st.current {
                st.phase = DetailPhase::Open;
                StoreEvent::Opened { id }
            } else {
                st.phase = DetailPhase::Closed;
                StoreEvent::Closed
            }
        };
        self.notify(&event);
    }

    /// Closing and going back are the same operation for this store.
    pub fn close(&self) {
        self.go_back();
    }

    pub fn subscribe(&self, callback: impl Fn(&StoreEvent) + 'static) -> SubscriptionId {
        let id = self.next_subscriber.get();
        self.next_subscriber.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, sub: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(id, _)| *id != sub.0);
    }

    fn notify(&self, event: &StoreEvent) {
        // Clone the list first so a callback may subscribe/unsubscribe
        // without hitting a borrow error.
        let subscribers: Vec<Subscriber> =
            self.subscribers.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for cb in subscribers {
            cb(event);
        }
    }
}

/// Cheap clonable handle for passing the store through component props.
/// Equality is identity: two handles are equal iff they share the store.
#[derive(Clone)]
pub struct StoreHandle(pub Rc<ViewStore>);

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for StoreHandle {
    type Target = ViewStore;

    fn deref(&self) -> &ViewStore {
        &self.0
    }
}

/// URL fragment for an open project, e.g. `#project-2`.
pub fn fragment_for(id: &str) -> String {
    format!("#project-{id}")
}

/// Extracts a project id from a location hash; accepts the hash with or
/// without its leading `#`.
pub fn project_in_fragment(hash: &str) -> Option<&str> {
    let rest = hash.strip_prefix('#').unwrap_or(hash).strip_prefix("project-")?;
    if rest.is_empty() { None } else { Some(rest) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_back_restores_the_pre_open_snapshot() {
        let store = ViewStore::new();
        let before = store.snapshot();
        store.open("2", Some("project-card-2".into()));
        assert!(store.snapshot().is_detail_view());
        store.go_back();
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn open_sets_current_phase_and_origin() {
        let store = ViewStore::new();
        store.open("2", Some("project-card-2".into()));
        let st = store.snapshot();
        assert_eq!(st.current, Some("2"));
        assert_eq!(st.phase, DetailPhase::Open);
        assert_eq!(st.origin.as_deref(), Some("project-card-2"));
        assert!(st.is_detail_view());
    }

    #[test]
    fn unknown_id_is_a_no_op_without_notification() {
        let store = ViewStore::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        store.subscribe(move |e| sink.borrow_mut().push(e.clone()));
        store.open("99", None);
        assert_eq!(store.snapshot(), ViewState::default());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn switching_projects_never_shows_both_open() {
        let store = ViewStore::new();
        let currents = Rc::new(RefCell::new(Vec::new()));
        let sink = currents.clone();
        store.open("1", None);
        store.subscribe(move |e| {
            // Observers see the post-transition state only.
            if let StoreEvent::Opened { id } = e {
                sink.borrow_mut().push(*id);
            }
        });
        store.open("2", None);
        assert_eq!(*currents.borrow(), vec!["2"]);
        assert_eq!(store.snapshot().current, Some("2"));
        // Back restores project 1, then the closed state.
        store.go_back();
        assert_eq!(store.snapshot().current, Some("1"));
        store.go_back();
        assert_eq!(store.snapshot().current, None);
        assert_eq!(store.snapshot().phase, DetailPhase::Closed);
    }

    #[test]
    fn history_grows_on_open_and_shrinks_on_back() {
        let store = ViewStore::new();
        assert_eq!(store.snapshot().depth(), 0);
        store.open("1", None);
        store.open("2", None);
        assert_eq!(store.snapshot().depth(), 2);
        store.go_back();
        assert_eq!(store.snapshot().depth(), 1);
        store.go_back();
        assert_eq!(store.snapshot().depth(), 0);
        // Back on a closed store stays closed.
        store.go_back();
        assert_eq!(store.snapshot().depth(), 0);
    }

    #[test]
    fn reopening_the_same_project_is_a_no_op() {
        let store = ViewStore::new();
        store.open("3", None);
        let before = store.snapshot();
        store.open("3", Some("elsewhere".into()));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn subscribers_fire_in_registration_order_and_unsubscribe_stops_delivery() {
        let store = ViewStore::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let first = {
            let order = order.clone();
            store.subscribe(move |_| order.borrow_mut().push("first"))
        };
        {
            let order = order.clone();
            store.subscribe(move |_| order.borrow_mut().push("second"));
        }
        store.open("1", None);
        assert_eq!(*order.borrow(), vec!["first", "second"]);

        store.unsubscribe(first);
        store.go_back();
        assert_eq!(*order.borrow(), vec!["first", "second", "second"]);
    }

    #[test]
    fn closed_notification_carries_the_closed_event() {
        let store = ViewStore::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        store.subscribe(move |e| sink.borrow_mut().push(e.clone()));
        store.open("1", None);
        store.close();
        assert_eq!(
            *events.borrow(),
            vec![StoreEvent::Opened { id: "1" }, StoreEvent::Closed]
        );
    }

    #[test]
    fn fragment_round_trip() {
        assert_eq!(fragment_for("2"), "#project-2");
        assert_eq!(project_in_fragment("#project-2"), Some("2"));
        assert_eq!(project_in_fragment("project-10"), Some("10"));
        assert_eq!(project_in_fragment("#skills"), None);
        assert_eq!(project_in_fragment("#project-"), None);
        assert_eq!(project_in_fragment(""), None);
    }
}
