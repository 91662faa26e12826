//! Cursor invariant: the cursor always names an existing entry.

use super::Invariant;
use crate::History;

/// Invariant: `0 <= cursor < len` and the history is never empty.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        !history.is_empty() && history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing history entry"
    }
}
