//! Renders GitHub statistics cards as self-contained SVG.
//!
//! The entry point is [`render`], which turns a [`StatsRecord`] and a set of
//! [`RenderOptions`] into markup ready to be served as `image/svg+xml`.
//! Layout arithmetic lives in [`layout`] and can be used on its own.

pub mod card;
pub mod clock;
pub mod error;
pub mod format;
pub mod i18n;
pub mod icons;
pub mod layout;
pub mod options;
pub mod stat_card;
pub mod stats;
pub mod theme;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CardError, Result};
pub use options::{CardWidth, NumberFormat, RankIcon, RenderOptions, StatKey};
pub use stat_card::{render, render_with_clock};
pub use stats::{Rank, StatsRecord};
