use std::process::ExitCode;

use torchmaze::{
    flow::{self, FlowConstructor, GraphicsFlow},
    hud::Hud,
    maze::{Maze, MazeLayout, TileMap},
};

/// State shared across flows. The maze and HUD each own their data, so
/// nothing global is needed yet.
#[derive(Default)]
struct State;

enum Event {}

const MAP_FILE: &str = "assets/maps/map_1.txt";

fn main() -> ExitCode {
    env_logger::init();

    // There is no degraded mode for a maze game without a maze: any map
    // problem is a fatal startup error. The exit policy lives here, not in
    // the parser.
    let map = match TileMap::load(MAP_FILE) {
        Ok(map) => map,
        Err(e) => {
            log::error!("error while reading maze data file: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let layout = match MazeLayout::from_map(&map) {
        Ok(layout) => layout,
        Err(e) => {
            log::error!("{}: {}", MAP_FILE, e);
            return ExitCode::FAILURE;
        }
    };

    let maze: FlowConstructor<State, Event> = Box::new(move |ctx| {
        Box::pin(async move {
            let mut rng = rand::thread_rng();
            let maze = match Maze::new(&ctx, layout, &mut rng).await {
                Ok(maze) => maze,
                Err(e) => panic!("Failed to load maze assets: {}", e),
            };
            Box::new(maze) as Box<dyn GraphicsFlow<_, _>>
        })
    });
    let hud: FlowConstructor<State, Event> = Box::new(|ctx| {
        Box::pin(async move {
            let hud = match Hud::new(&ctx).await {
                Ok(hud) => hud,
                Err(e) => panic!("Failed to load the font atlas: {}", e),
            };
            Box::new(hud) as Box<dyn GraphicsFlow<_, _>>
        })
    });

    match flow::run(vec![maze, hud]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
