//! Lightbox state: the image list of the currently open gallery, the shown
//! index, and open/close. Navigation wraps around in both directions.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    pub images: Vec<LightboxImage>,
    pub index: usize,
    pub open: bool,
}

impl LightboxState {
    pub fn current(&self) -> Option<&LightboxImage> {
        self.images.get(self.index)
    }

    /// Single-image galleries hide the prev/next controls.
    pub fn single_image(&self) -> bool {
        self.images.len() <= 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LightboxAction {
    Open { images: Vec<LightboxImage>, index: usize },
    Close,
    Next,
    Prev,
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            LightboxAction::Open { images, index } => {
                // An empty gallery or an out-of-range index never opens.
                if images.is_empty() || index >= images.len() {
                    return self;
                }
                new.images = images;
                new.index = index;
                new.open = true;
            }
            LightboxAction::Close => {
                // Keep index so focus can return to the originating item.
                new.open = false;
            }
            LightboxAction::Next => {
                if new.open && !new.images.is_empty() {
                    new.index = (new.index + 1) % new.images.len();
                }
            }
            LightboxAction::Prev => {
                if new.open && !new.images.is_empty() {
                    new.index = new.index.checked_sub(1).unwrap_or(new.images.len() - 1);
                }
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<LightboxImage> {
        (0..n)
            .map(|i| LightboxImage {
                src: format!("assets/images/img-{i}.png"),
                alt: format!("image {i}"),
                caption: format!("img {i}"),
            })
            .collect()
    }

    fn reduce(state: LightboxState, action: LightboxAction) -> LightboxState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn open_shows_the_requested_image() {
        let st = reduce(LightboxState::default(), LightboxAction::Open { images: images(3), index: 1 });
        assert!(st.open);
        assert_eq!(st.index, 1);
        assert_eq!(st.current().unwrap().caption, "img 1");
        assert!(!st.single_image());
    }

    #[test]
    fn open_with_no_images_or_bad_index_is_a_no_op() {
        let closed = LightboxState::default();
        assert_eq!(reduce(closed.clone(), LightboxAction::Open { images: vec![], index: 0 }), closed);
        assert_eq!(reduce(closed.clone(), LightboxAction::Open { images: images(2), index: 2 }), closed);
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let mut st = reduce(LightboxState::default(), LightboxAction::Open { images: images(3), index: 2 });
        st = reduce(st, LightboxAction::Next);
        assert_eq!(st.index, 0);
        st = reduce(st, LightboxAction::Prev);
        assert_eq!(st.index, 2);
    }

    #[test]
    fn close_keeps_the_index_for_focus_restoration() {
        let opened = reduce(LightboxState::default(), LightboxAction::Open { images: images(3), index: 2 });
        let closed = reduce(opened, LightboxAction::Close);
        assert!(!closed.open);
        assert_eq!(closed.index, 2);
    }

    #[test]
    fn navigation_while_closed_is_inert() {
        let closed = LightboxState::default();
        assert_eq!(reduce(closed.clone(), LightboxAction::Next), closed);
        assert_eq!(reduce(closed.clone(), LightboxAction::Prev), closed);
    }
}
