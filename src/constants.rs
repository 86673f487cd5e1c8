//! Constants for board geometry, search limits and board rendering.
//!
//! The board is a fixed 3x3 grid. The state space is small enough that the
//! search depth acts as "play to the end of the game".

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of columns.
pub const WIDTH: usize = 3;

/// Number of rows.
pub const HEIGHT: usize = 3;

/// Total number of cells.
pub const CELLS: usize = WIDTH * HEIGHT;

/// Maximum game length for random playouts (3 times board area to allow for captures).
pub const MAX_GAME_LEN: usize = CELLS * 3;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default minimax depth. Far beyond what any line on this board reaches in practice.
pub const SEARCH_DEPTH: u32 = 1000;

// =============================================================================
// Rendering
// =============================================================================

/// White stone.
pub const GLYPH_WHITE: char = 'W';

/// Black stone.
pub const GLYPH_BLACK: char = 'B';

/// Empty point.
pub const GLYPH_EMPTY: char = '+';
