use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use solver::{
    solve, synthetic_year, Grid, Position, Route, SearchMode, Snake, SolverConfig, TargetOrder,
    DEFAULT_BODY_LENGTH,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use terminal::input::CalendarReader;
use terminal::render::board::BoardRenderer;
use terminal::render::standard_renderer::StandardRenderer;
use terminal::render::types::CharDimensions;
use terminal::replay::ChainPlayer;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "snk-terminal",
    about = "Plan the contribution snake route for a calendar and preview it"
)]
struct Args {
    /// Contribution calendar JSON, optionally gzipped. A synthetic year is used when omitted
    #[arg(long, env = "SNK_INPUT")]
    input: Option<PathBuf>,

    /// Seed for the synthetic calendar
    #[arg(long, default_value_t = 1)]
    demo_seed: u64,

    /// First day of the synthetic calendar
    #[arg(long, default_value = "2023-01-01")]
    demo_start: NaiveDate,

    /// Where to write the route JSON (stdout when omitted)
    #[arg(long, env = "SNK_OUTPUT")]
    output: Option<PathBuf>,

    /// Solver configuration JSON; flags below override its fields
    #[arg(long, env = "SNK_CONFIG")]
    config: Option<PathBuf>,

    /// Segments in the snake, laid out along the top row from the left edge
    #[arg(long, default_value_t = DEFAULT_BODY_LENGTH)]
    body_length: usize,

    #[arg(long)]
    rest_x: Option<i16>,

    #[arg(long)]
    rest_y: Option<i16>,

    /// Path search: head | body | hybrid
    #[arg(long)]
    search: Option<String>,

    /// Target order: nearest | layers
    #[arg(long)]
    order: Option<String>,

    /// Stop at the last target instead of returning to rest
    #[arg(long)]
    no_return: bool,

    /// Print every N-th frame of the animation to stderr
    #[arg(long)]
    preview: Option<usize>,

    /// Characters per board cell in the preview, e.g. 2x1
    #[arg(long, default_value = "2x1")]
    cell_size: String,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let grid = match &args.input {
        Some(path) => CalendarReader::load_grid(path)?,
        None => {
            info!("No calendar given, using synthetic year with seed {}", args.demo_seed);
            Grid::from_calendar(&synthetic_year(args.demo_seed, args.demo_start)?)?
        }
    };

    let snake = Snake::straight(Position::new(0, 0), args.body_length)
        .context("Failed to build the initial snake")?;
    info!(
        "Solving {}x{} grid with {} targets, snake of {}",
        grid.width(),
        grid.height(),
        grid.target_count(),
        snake.len()
    );

    let route = solve(&grid, &snake, &config).context("Route planning failed")?;
    if !route.is_complete() {
        warn!("{} target(s) could not be reached", route.skipped.len());
    }
    info!(
        "Route has {} poses, {} cells eaten, {} states explored",
        route.len(),
        route.eaten.len(),
        route.stats.states_explored
    );

    if let Some(every) = args.preview {
        let dims = CharDimensions::parse(&args.cell_size)
            .ok_or_else(|| anyhow!("Invalid cell size '{}', expected WxH", args.cell_size))?;
        print_preview(&grid, route.clone(), every.max(1), dims)?;
    }

    write_route(&route, args.output.as_ref())
}

fn build_config(args: &Args) -> Result<SolverConfig> {
    let mut config = match &args.config {
        Some(path) => CalendarReader::load_config(path)?,
        None => SolverConfig::default(),
    };

    if let Some(x) = args.rest_x {
        config.rest.x = x;
    }
    if let Some(y) = args.rest_y {
        config.rest.y = y;
    }
    if let Some(search) = &args.search {
        config.search = search.parse::<SearchMode>()?;
    }
    if let Some(order) = &args.order {
        config.order = order.parse::<TargetOrder>()?;
    }
    if args.no_return {
        config.return_to_rest = false;
    }

    config.validate()?;
    Ok(config)
}

fn print_preview(grid: &Grid, route: Route, every: usize, dims: CharDimensions) -> Result<()> {
    let board = BoardRenderer::new(StandardRenderer::new(dims));
    let mut player = ChainPlayer::new(route);
    let mut err = io::stderr().lock();

    loop {
        if let Some(frame) = player.frame() {
            writeln!(err, "step {}/{}", frame.step, player.max_step())?;
            let canvas = board.render(grid, &frame.pose, &frame.eaten);
            for line in canvas.into_lines() {
                writeln!(err, "{}", line)?;
            }
            writeln!(err)?;
        }

        if player.is_finished() {
            return Ok(());
        }
        player.step_forward(every);
    }
}

fn write_route(route: &Route, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, route).context("Failed to write route")?;
            writer.flush()?;
            info!("Route written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, route).context("Failed to write route")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
