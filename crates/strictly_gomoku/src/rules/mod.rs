//! Game rules for five-in-a-row.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the session and the contracts can both call them.

pub mod win;

pub use win::{check_win, has_five_through, longest_run_through, WinLine};
