use solver::{Cell, Grid, Position, Snake};
use std::collections::BTreeSet;
use terminal::render::{
    board::BoardRenderer,
    standard_renderer::StandardRenderer,
    types::CharDimensions,
};

fn board() -> Grid {
    Grid::new(5, 3, [Cell::new(4, 2, 4), Cell::new(1, 2, 1)]).unwrap()
}

#[test]
fn test_1x1_rendering() {
    let grid = board();
    let snake = Snake::straight(Position::new(0, 0), 3).unwrap();
    let dims = CharDimensions::new(1, 1);
    let renderer = BoardRenderer::new(StandardRenderer::new(dims));

    let lines = renderer.render(&grid, &snake, &BTreeSet::new()).into_lines();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], ".o▶··");
    assert_eq!(lines[1], "·····");
    assert_eq!(lines[2], "·░··█");
}

#[test]
fn test_2x1_rendering() {
    let grid = board();
    let snake = Snake::new(vec![
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(2, 2),
    ])
    .unwrap();
    let dims = CharDimensions::new(2, 1);
    let renderer = BoardRenderer::new(StandardRenderer::new(dims));

    let canvas = renderer.render(&grid, &snake, &BTreeSet::new());
    assert_eq!(canvas.width(), 10);
    assert_eq!(canvas.height(), 3);

    // Head at (2,2) pointing down, padded to two characters.
    assert_eq!(canvas.char_at(4, 2), Some('▼'));
    assert_eq!(canvas.char_at(5, 2), Some(' '));
    // Dark cell at (4,2) fills both characters.
    assert_eq!(canvas.char_at(8, 2), Some('█'));
    assert_eq!(canvas.char_at(9, 2), Some('█'));
}

#[test]
fn test_eaten_cells_render_as_empty() {
    let grid = board();
    let snake = Snake::straight(Position::new(0, 0), 2).unwrap();
    let dims = CharDimensions::new(1, 1);
    let renderer = BoardRenderer::new(StandardRenderer::new(dims));
    let eaten: BTreeSet<Position> = [Position::new(4, 2)].into_iter().collect();

    let lines = renderer.render(&grid, &snake, &eaten).into_lines();
    assert_eq!(lines[2], "·░···");
}

#[test]
fn test_cell_sizes_parse() {
    assert_eq!(CharDimensions::parse("2x1"), Some(CharDimensions::new(2, 1)));
    assert_eq!(CharDimensions::parse(" 3X2 "), Some(CharDimensions::new(3, 2)));
    assert_eq!(CharDimensions::parse("0x1"), None);
    assert_eq!(CharDimensions::parse("wide"), None);
}

#[test]
fn test_canvas_follows_renderer_cell_size() {
    let grid = board();
    let snake = Snake::straight(Position::new(0, 0), 2).unwrap();
    let renderer = BoardRenderer::new(StandardRenderer::new(CharDimensions::new(3, 2)));

    let canvas = renderer.render(&grid, &snake, &BTreeSet::new());
    assert_eq!(canvas.width(), 15);
    assert_eq!(canvas.height(), 6);
    // Dark cell at (4,2) fills its whole 3x2 block.
    assert_eq!(canvas.char_at(12, 4), Some('█'));
    assert_eq!(canvas.char_at(14, 5), Some('█'));
}
