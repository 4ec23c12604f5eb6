//! Gallery entries and the state behind the photo marquee and viewer.

use super::collection::{contains_ci, Record, Searchable};

/// One event's photo set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryEntry {
    pub id: u32,
    pub name: String,
    pub sponsor: String,
    pub description: String,
    pub date: String,
    pub featured: bool,
    pub photos: Vec<String>,
}

impl Record for GalleryEntry {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Searchable for GalleryEntry {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.sponsor, needle)
            || contains_ci(&self.description, needle)
    }
}

/// Photo list as typed into the admin form: comma separated URLs.
pub fn parse_photo_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of `parse_photo_list`, for prefilling the form.
pub fn photo_list_text(photos: &[String]) -> String {
    photos.join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeaturedFilter {
    #[default]
    All,
    Featured,
    NotFeatured,
}

impl FeaturedFilter {
    pub const OPTIONS: [Self; 3] = [Self::All, Self::Featured, Self::NotFeatured];

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Featured => "Featured",
            Self::NotFeatured => "Not Featured",
        }
    }

    /// Parse a dropdown value; unknown labels mean `All`.
    pub fn from_label(label: &str) -> Self {
        Self::OPTIONS
            .into_iter()
            .find(|filter| filter.label() == label)
            .unwrap_or_default()
    }

    pub const fn accepts(self, entry: &GalleryEntry) -> bool {
        match self {
            Self::All => true,
            Self::Featured => entry.featured,
            Self::NotFeatured => !entry.featured,
        }
    }

    /// Entries that pass the filter, in order.
    pub fn apply(self, entries: &[GalleryEntry]) -> Vec<GalleryEntry> {
        entries
            .iter()
            .filter(|entry| self.accepts(entry))
            .cloned()
            .collect()
    }
}

/// Expanded photo viewer for one entry.
///
/// `index` always addresses a photo when `len > 0`; stepping wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhotoViewer {
    index: usize,
    len: usize,
}

impl PhotoViewer {
    /// Viewer on the first photo.
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Viewer on `index`, or on the first photo when out of range.
    pub const fn starting_at(len: usize, index: usize) -> Self {
        let index = if index < len { index } else { 0 };
        Self { index, len }
    }

    /// Photo currently shown.
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Step forward, wrapping to the first photo.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back, wrapping to the last photo.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a dot; out-of-range requests are ignored.
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// Photos repeated three times so the CSS marquee loops without a gap.
/// The reversed row walks the same strip back to front.
pub fn marquee_items(photos: &[String], reversed: bool) -> Vec<String> {
    let mut items = [photos, photos, photos].concat();
    if reversed {
        items.reverse();
    }
    items
}

/// Photo a marquee tile shows, for opening the viewer on it.
pub const fn marquee_photo_index(item_index: usize, len: usize, reversed: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let offset = item_index % len;
    if reversed {
        len - 1 - offset
    } else {
        offset
    }
}

/// Animation length in seconds: five per photo, never under twenty.
pub fn marquee_duration(photo_count: usize) -> u32 {
    u32::try_from(photo_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(5)
        .max(20)
}

/// Whether a second, reversed marquee row is shown.
pub const fn has_second_row(photo_count: usize) -> bool {
    photo_count > 2
}

/// Load state of a single image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotoLoad {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Image on the home page gallery strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryHighlight {
    pub id: u32,
    pub src: String,
    pub alt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(featured: bool) -> GalleryEntry {
        GalleryEntry {
            featured,
            ..GalleryEntry::default()
        }
    }

    #[test]
    fn test_viewer_wraps_both_ways() {
        let mut viewer = PhotoViewer::new(3);
        viewer.prev();
        assert_eq!(viewer.index(), 2);
        viewer.next();
        assert_eq!(viewer.index(), 0);
        viewer.open(1);
        assert_eq!(viewer.index(), 1);
        viewer.open(7);
        assert_eq!(viewer.index(), 1);
    }

    #[test]
    fn test_empty_viewer_stays_put() {
        let mut viewer = PhotoViewer::new(0);
        viewer.next();
        viewer.prev();
        assert_eq!(viewer.index(), 0);
        assert!(viewer.is_empty());
    }

    #[test]
    fn test_marquee_layout() {
        let photos = vec!["a".to_string(), "b".to_string()];
        assert_eq!(marquee_items(&photos, false).len(), 6);
        assert_eq!(marquee_items(&photos, true)[0], "b");
        assert_eq!(marquee_duration(2), 20);
        assert_eq!(marquee_duration(6), 30);
        assert!(!has_second_row(2));
        assert!(has_second_row(3));
    }

    #[test]
    fn test_marquee_tile_opens_its_photo() {
        let photos: Vec<String> = ["a", "b", "c"].iter().map(|p| (*p).to_string()).collect();
        for reversed in [false, true] {
            let items = marquee_items(&photos, reversed);
            for (i, src) in items.iter().enumerate() {
                assert_eq!(&photos[marquee_photo_index(i, photos.len(), reversed)], src);
            }
        }
        assert_eq!(marquee_photo_index(4, 3, false), 1);
        assert_eq!(marquee_photo_index(0, 3, true), 2);
        assert_eq!(marquee_photo_index(5, 3, true), 0);
        assert_eq!(marquee_photo_index(3, 0, true), 0);
    }

    #[test]
    fn test_viewer_starting_at() {
        assert_eq!(PhotoViewer::starting_at(4, 2).index(), 2);
        assert_eq!(PhotoViewer::starting_at(4, 9).index(), 0);
        assert_eq!(PhotoViewer::starting_at(0, 0).index(), 0);
    }

    #[test]
    fn test_featured_filter() {
        let entries = vec![entry(true), entry(false), entry(true)];
        assert_eq!(FeaturedFilter::All.apply(&entries).len(), 3);
        assert!(FeaturedFilter::Featured
            .apply(&entries)
            .iter()
            .all(|e| e.featured));
        assert_eq!(FeaturedFilter::NotFeatured.apply(&entries).len(), 1);
        assert_eq!(FeaturedFilter::from_label("Not Featured"), FeaturedFilter::NotFeatured);
    }

    #[test]
    fn test_parse_photo_list_drops_blanks() {
        let photos = parse_photo_list(" https://a.png , ,https://b.png,");
        assert_eq!(photos, vec!["https://a.png", "https://b.png"]);
        assert_eq!(photo_list_text(&photos), "https://a.png, https://b.png");
    }
}
