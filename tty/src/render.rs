use sweeper_core::{BoardSnapshot, CellView, GameState};

fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Opened(0) => '.',
        CellView::Opened(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Mine => '*',
    }
}

/// Draws the grid with row/column indices, plus the end-of-game banner when there is one.
pub fn render(snapshot: &BoardSnapshot) -> String {
    let (rows, cols) = snapshot.size;
    let row_width = digits(rows.saturating_sub(1));
    let col_width = digits(cols.saturating_sub(1));

    let mut out = " ".repeat(row_width);
    for col in 0..cols {
        out.push_str(&format!(" {col:>col_width$}"));
    }
    out.push('\n');

    for (row, cells) in snapshot.cells.rows().into_iter().enumerate() {
        out.push_str(&format!("{row:>row_width$}"));
        for &cell in cells {
            out.push_str(&format!(" {:>col_width$}", glyph(cell)));
        }
        out.push('\n');
    }

    if let Some(banner) = banner(snapshot.state()) {
        out.push('\n');
        out.push_str(banner);
        out.push('\n');
    }
    out
}

pub fn banner(state: GameState) -> Option<&'static str> {
    match state {
        GameState::Playing => None,
        GameState::Won => Some("VICTORY! (click or press enter to restart)"),
        GameState::Lost => Some("GAME OVER (click or press enter to restart)"),
    }
}

fn digits(value: u8) -> usize {
    match value {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{BoardEngine, Button, MineLayout};

    fn engine(size: (u8, u8), mines: &[(u8, u8)]) -> BoardEngine<MineLayout> {
        BoardEngine::from_layout(MineLayout::from_mine_coords(size, mines).unwrap()).unwrap()
    }

    #[test]
    fn renders_every_visual_state() {
        let mut engine = engine((2, 3), &[(0, 0), (1, 2)]);
        engine.handle_click((0, 1), Button::Primary).unwrap();
        engine.handle_click((1, 2), Button::Secondary).unwrap();

        let text = render(&BoardSnapshot::from_engine(&engine));

        assert_eq!(text, "  0 1 2\n0 # 2 #\n1 # # F\n");
    }

    #[test]
    fn renders_zeros_and_loss_banner() {
        let mut engine = engine((1, 5), &[(0, 3)]);
        engine.handle_click((0, 0), Button::Primary).unwrap();
        engine.handle_click((0, 3), Button::Primary).unwrap();

        let text = render(&BoardSnapshot::from_engine(&engine));

        assert!(text.starts_with("  0 1 2 3 4\n0 . . 1 * #\n"));
        assert!(text.contains("GAME OVER"));
    }

    #[test]
    fn wide_boards_pad_columns() {
        let engine = engine((1, 12), &[(0, 0)]);

        let text = render(&BoardSnapshot::from_engine(&engine));
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("   0  1  2  3  4  5  6  7  8  9 10 11"));
        assert_eq!(lines.next(), Some("0  #  #  #  #  #  #  #  #  #  #  #  #"));
    }

    #[test]
    fn renders_victory_banner() {
        let mut engine = engine((1, 2), &[(0, 1)]);
        engine.handle_click((0, 0), Button::Primary).unwrap();

        let text = render(&BoardSnapshot::from_engine(&engine));

        assert_eq!(
            text,
            "  0 1\n0 1 #\n\nVICTORY! (click or press enter to restart)\n"
        );
    }

    #[test]
    fn banner_only_after_the_game() {
        assert_eq!(banner(GameState::Playing), None);
        assert!(banner(GameState::Won).unwrap().starts_with("VICTORY!"));
    }
}
