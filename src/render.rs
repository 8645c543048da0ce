//! Plain-text rendering of a session.

use crate::config::HostConfig;
use strictly_gomoku::{Coordinate, GameSession, SessionStatus};
use tracing::instrument;

/// Widest area drawn along either axis, in cells.
pub const MAX_VIEW_SPAN: i64 = 64;

/// Renders the occupied area of the board plus the configured margin.
///
/// Rows run from the highest `y` down, columns from the lowest `x` up, with
/// coordinate labels along the top and left edges. Once the game has ended,
/// marks outside the winning line use the faded symbols. An empty board is
/// drawn around the origin. Areas wider than [`MAX_VIEW_SPAN`] are clipped
/// to the lower-left corner.
#[instrument(skip_all, fields(marks = session.board().len()))]
pub fn render_board(session: &GameSession, config: &HostConfig) -> String {
    let board = session.board();
    let margin = i64::from(*config.margin());
    let (min, max) = board
        .bounds()
        .unwrap_or((Coordinate::ORIGIN, Coordinate::ORIGIN));

    let min_x = i64::from(min.x) - margin;
    let min_y = i64::from(min.y) - margin;
    let max_x = (i64::from(max.x) + margin).min(min_x + MAX_VIEW_SPAN - 1);
    let max_y = (i64::from(max.y) + margin).min(min_y + MAX_VIEW_SPAN - 1);
    let clipped = max_x < i64::from(max.x) + margin || max_y < i64::from(max.y) + margin;

    let cell_width = label_width(min_x, max_x);
    let row_label_width = label_width(min_y, max_y);
    let win_line = session.win_line();

    let mut out = format!("{:>row_label_width$}", "");
    for x in min_x..=max_x {
        out.push_str(&format!(" {:>cell_width$}", x));
    }
    out.push('\n');

    for y in (min_y..=max_y).rev() {
        out.push_str(&format!("{:>row_label_width$}", y));
        for x in min_x..=max_x {
            let symbol = match cell_at(x, y) {
                Some(cell) => match board.mark_at(cell) {
                    Some(kind) => {
                        let faded = win_line.is_some_and(|line| !line.contains(cell));
                        config.symbol(kind, faded)
                    }
                    None => *config.empty_symbol(),
                },
                None => *config.empty_symbol(),
            };
            out.push_str(&format!(" {:>cell_width$}", symbol));
        }
        out.push('\n');
    }

    if clipped {
        out.push_str("(view clipped)\n");
    }
    out
}

/// One-line summary: whose turn it is, or who won and where.
pub fn status_line(session: &GameSession, config: &HostConfig) -> String {
    match session.status() {
        SessionStatus::InProgress { turn } => {
            format!("{} to move", config.symbol(*turn, false))
        }
        SessionStatus::Ended { winner, win_line } => {
            format!("{} wins: {}", config.symbol(*winner, false), win_line)
        }
    }
}

fn label_width(low: i64, high: i64) -> usize {
    low.to_string().len().max(high.to_string().len())
}

/// Grid cell for view coordinates, which may fall outside `i32` near the edges.
fn cell_at(x: i64, y: i64) -> Option<Coordinate> {
    Some(Coordinate::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}
