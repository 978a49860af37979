// Common utilities shared by the user-facing macros
//
// This module contains:
// - parse_utils: keyword/option parsing and duplicate detection

mod parse_utils;

pub use parse_utils::*;
