mod background;
mod blob_field;
mod tilt_card;

pub use background::{full_page_height, BackgroundSizer};
pub use blob_field::{Blob, BlobField};
pub use tilt_card::{TiltCard, Transform};
