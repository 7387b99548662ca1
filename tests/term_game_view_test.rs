use tui_bricks::core::{Board, Session, Shape};
use tui_bricks::term::{palette, AnchorY, GameView, Viewport};
use tui_bricks::types::{Color, DropOutcome, FillMode};

fn screen_text(fb: &tui_bricks::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let session = Session::new(FillMode::Color);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 9*2 by 10*1 => 18x10
    // plus border => 20x12
    let fb = view.render(&session, Viewport::new(20, 12));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(19, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 11).unwrap().ch, '└');
    assert_eq!(fb.get(19, 11).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = Board::new();
    board.set(0, 13, Color::new(3));
    let session = Session::from_board(board, FillMode::Color);

    let fb = GameView::default().render(&session, Viewport::new(20, 12));

    // Inside border: (1,1) origin; board row 13 is the 10th visible row.
    let y0 = 1 + 9;
    let cell = fb.get(1, y0).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, palette(Color::new(3).unwrap()));
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_falling_brick_bold() {
    let mut session = Session::new(FillMode::Color);
    session.spawn(Shape::O);
    while session.drop() == DropOutcome::Moved {}

    let fb = GameView::default().render(&session, Viewport::new(20, 12));
    // Square at anchor (2, 13) covers board columns 2-3 in the last two rows.
    let cell = fb.get(1 + 2 * 2, 10).unwrap();
    assert_eq!(cell.ch, '█');
    assert!(cell.style.bold);

    session.materialize();
    let fb = GameView::default().render(&session, Viewport::new(20, 12));
    assert!(!fb.get(1 + 2 * 2, 10).unwrap().style.bold);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut session = Session::new(FillMode::Mono);
    session.spawn(Shape::T);

    let fb = GameView::default().render(&session, Viewport::new(50, 12));
    let all = screen_text(&fb);
    assert!(all.contains("PIECE"));
    assert!(all.contains("mono"));
    assert!(all.contains("2,1"));

    let narrow = GameView::default().render(&session, Viewport::new(20, 12));
    assert!(!screen_text(&narrow).contains("PIECE"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let session = Session::new(FillMode::Color);

    // Board frame is 12 rows tall (10 + border).
    let fb = GameView::default().render(&session, Viewport::new(20, 20));
    // start_y = (20 - 12) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&session, Viewport::new(20, 20));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
