use chrono::NaiveDate;
use solver::{solve, synthetic_year, Grid, Position, Snake, SolverConfig, TargetOrder};
use terminal::render::{
    board::BoardRenderer,
    standard_renderer::StandardRenderer,
    types::CharDimensions,
};
use terminal::replay::ChainPlayer;

fn main() -> anyhow::Result<()> {
    let first_day = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date");
    let grid = Grid::from_calendar(&synthetic_year(2024, first_day)?)?;
    let snake = Snake::straight(Position::new(0, 0), 4)?;

    for order in [TargetOrder::Nearest, TargetOrder::LevelLayers] {
        let config = SolverConfig {
            order,
            ..SolverConfig::default()
        };
        let route = solve(&grid, &snake, &config)?;
        println!(
            "=== {:?}: {} poses, {} eaten, {} skipped ===",
            order,
            route.len(),
            route.eaten.len(),
            route.skipped.len()
        );

        let mut player = ChainPlayer::new(route);
        player.seek(player.max_step() / 2);
        render_with_dimensions(&grid, &player, CharDimensions::new(1, 1));
        render_with_dimensions(&grid, &player, CharDimensions::new(2, 1));
    }
    Ok(())
}

fn render_with_dimensions(grid: &Grid, player: &ChainPlayer, char_dims: CharDimensions) {
    let Some(frame) = player.frame() else {
        return;
    };
    let board = BoardRenderer::new(StandardRenderer::new(char_dims));

    println!(
        "\nStep {} at {}x{} chars per cell:",
        frame.step, char_dims.horizontal, char_dims.vertical
    );
    for line in board.render(grid, &frame.pose, &frame.eaten).into_lines() {
        println!("{}", line);
    }
}
