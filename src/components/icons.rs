//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuCornerDownRight as EnterDir, LuEllipsis as UpDir, LuLoader as Loading,
        LuSearch as Search, LuSlidersHorizontal as Filter, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowReturnRight as EnterDir, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsFunnel as Filter, BsHourglassSplit as Loading,
        BsSearch as Search, BsThreeDots as UpDir, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(ENTER_DIR, EnterDir);
themed_icon!(UP_DIR, UpDir);
themed_icon!(FILTER, Filter);
themed_icon!(CLOSE, Close);
themed_icon!(SEARCH, Search);
themed_icon!(LOADING, Loading);
