//! Effects - side effects declared by the reducer

use crate::state::PageWindow;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Run the page loader
    LoadPokedex { api_base: String, window: PageWindow },
    /// Download and downscale one card's artwork
    LoadArtwork { name: String, url: String },
}
