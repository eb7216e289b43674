//! Pure view-model builders for the project catalog.
//!
//! Everything here is a deterministic function of a `ProjectRecord`: no DOM
//! access, no network, no interior state. Components interpolate the returned
//! strings as text nodes only, so attacker-controlled field content would be
//! escaped by the framework rather than parsed as markup.

use crate::model::ProjectRecord;

pub const IMAGES_PATH: &str = "assets/images/";

/// How many characters of the overview a grid card shows before truncating.
const CARD_BLURB_CHARS: usize = 160;

/// How many skill tags a grid card shows before collapsing into "+N more".
const CARD_SKILLS_SHOWN: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

/// Display caption for an image filename: extension stripped, separator
/// characters replaced with spaces. "ha-test-result.png" -> "ha test result".
pub fn caption(filename: &str) -> String {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => filename,
    };
    stem.chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect()
}

pub fn image_url(filename: &str) -> String {
    format!("{IMAGES_PATH}{filename}")
}

pub fn image_alt(index: usize, filename: &str) -> String {
    format!("Project image {}: {}", index + 1, caption(filename))
}

/// The detail header meta line, e.g. "10 technologies • 3 images".
pub fn meta_line(record: &ProjectRecord) -> String {
    format!("{} technologies • {} images", record.skills.len(), record.images.len())
}

/// Ordered gallery view models: exactly one entry per source image, in
/// record order.
pub fn detail_images(record: &ProjectRecord) -> Vec<GalleryImage> {
    record
        .images
        .iter()
        .enumerate()
        .map(|(i, name)| GalleryImage {
            src: image_url(name),
            alt: image_alt(i, name),
            caption: caption(name),
        })
        .collect()
}

/// Overview excerpt for the grid card, truncated on a char boundary.
pub fn card_blurb(record: &ProjectRecord) -> String {
    let overview = record.overview;
    if overview.chars().count() <= CARD_BLURB_CHARS {
        return overview.to_string();
    }
    let cut: String = overview.chars().take(CARD_BLURB_CHARS).collect();
    // Break at the last word boundary so the ellipsis never splits a word.
    let trimmed = match cut.rfind(' ') {
        Some(pos) => &cut[..pos],
        None => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end())
}

/// Skill tags shown on the grid card plus the count folded into "+N more".
pub fn card_skills(record: &ProjectRecord) -> (&'static [&'static str], usize) {
    let shown = record.skills.len().min(CARD_SKILLS_SHOWN);
    (&record.skills[..shown], record.skills.len() - shown)
}

/// DOM id of a project's grid card; the store records this as the focus
/// restore target when the card opens a detail view.
pub fn card_dom_id(project_id: &str) -> String {
    format!("project-card-{project_id}")
}

/// DOM id of the n-th gallery item inside the detail view.
pub fn gallery_item_id(index: usize) -> String {
    format!("gallery-item-{index}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model;

    #[test]
    fn caption_strips_extension_and_separators() {
        assert_eq!(caption("exchange-dag-diagram.jpg"), "exchange dag diagram");
        assert_eq!(caption("ip_addressing_plan.png"), "ip addressing plan");
        assert_eq!(caption("plain"), "plain");
        // A leading dot is not an extension separator.
        assert_eq!(caption(".hidden"), ".hidden");
    }

    #[test]
    fn meta_line_counts_come_from_the_record() {
        let p = model::project("2").unwrap();
        assert_eq!(meta_line(p), "10 technologies • 3 images");
    }

    #[test]
    fn detail_images_preserve_count_and_order() {
        for p in model::projects() {
            let images = detail_images(p);
            assert_eq!(images.len(), p.images.len());
            for (view, name) in images.iter().zip(p.images) {
                assert_eq!(view.src, format!("{IMAGES_PATH}{name}"));
                assert!(view.alt.contains(&view.caption));
            }
        }
    }

    #[test]
    fn card_blurb_never_splits_words() {
        let p = model::project("1").unwrap();
        let blurb = card_blurb(p);
        assert!(blurb.ends_with('…'));
        let body = blurb.trim_end_matches('…');
        assert!(p.overview.starts_with(body));
    }

    #[test]
    fn card_skills_fold_overflow_into_more_count() {
        let p = model::project("2").unwrap();
        let (shown, extra) = card_skills(p);
        assert_eq!(shown.len(), 4);
        assert_eq!(extra, 6);
        assert_eq!(shown.len() + extra, p.skills.len());
    }
}
