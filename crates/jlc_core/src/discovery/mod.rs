//! Output directory discovery.
//!
//! A user who already converted parts into a directory usually has
//! `symbol`, `footprint` and model folders there. This module finds them
//! so the form can be pre-filled:
//!
//! ```text
//! kicad-libs/
//! ├── symbol/            -> symbol_dir     ("symbol")
//! │   └── JLC.kicad_sym  -> symbol library ("JLC")
//! └── footprint/         -> footprint_dir  ("footprint")
//!     └── packages3d/    -> model_dir      ("packages3d")
//! ```

mod layout;
mod scan;

pub use layout::{LibraryLayout, FOOTPRINT_KEYWORDS, MODEL_KEYWORDS, SYMBOL_KEYWORDS};
pub use scan::{find_entry, list_symbol_libraries, SYMBOL_LIB_SUFFIX};
