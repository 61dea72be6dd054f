//! Windowed smoke test: the maze must put something other than the clear
//! colour on screen. Needs a display and a GPU, so it only runs with
//! `--features integration-tests`.

#[cfg(feature = "integration-tests")]
mod smoke {
    use instant::Duration;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use torchmaze::{
        DeviceEvent, WindowEvent,
        context::Context,
        flow::{self, FlowConstructor, GraphicsFlow, ImageTestResult, Out},
        maze::{Maze, MazeLayout, TileMap},
        render::Render,
    };

    const TEST_MAP: &str = "4\n4\n0 0 0 0\n0 2 1 0\n0 1 1 0\n0 0 0 0\n";

    #[derive(Default)]
    pub struct Frames(pub u32);

    struct MazeSmoke {
        maze: Maze,
    }

    impl GraphicsFlow<Frames, ()> for MazeSmoke {
        fn on_init(&mut self, ctx: &mut Context, state: &mut Frames) -> Out<Frames, ()> {
            ctx.clear_colour = wgpu::Color::BLACK;
            self.maze.on_init(ctx, state)
        }

        fn on_update(&mut self, _: &Context, state: &mut Frames, _: Duration) -> Out<Frames, ()> {
            state.0 += 1;
            Out::Empty
        }

        fn on_tick(&mut self, _: &Context, _: &mut Frames) -> Out<Frames, ()> {
            Out::Empty
        }

        fn on_device_events(
            &mut self,
            _: &Context,
            _: &mut Frames,
            _: &DeviceEvent,
        ) -> Out<Frames, ()> {
            Out::Empty
        }

        fn on_window_events(
            &mut self,
            _: &Context,
            _: &mut Frames,
            _: &WindowEvent,
        ) -> Out<Frames, ()> {
            Out::Empty
        }

        fn on_custom_events(&mut self, _: &Context, _: &mut Frames, event: ()) -> Option<()> {
            Some(event)
        }

        fn on_render(&self) -> Render<'_> {
            GraphicsFlow::<Frames, ()>::on_render(&self.maze)
        }

        fn render_to_texture(
            &self,
            _: &Context,
            state: &mut Frames,
            texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
        ) -> Result<ImageTestResult, anyhow::Error> {
            if state.0 == 0 {
                return Ok(ImageTestResult::Waiting);
            }
            let lit_pixels = texture
                .pixels()
                .filter(|p| p.0[0] > 0 || p.0[1] > 0 || p.0[2] > 0)
                .count();
            if lit_pixels > 0 {
                Ok(ImageTestResult::Passed)
            } else {
                Ok(ImageTestResult::Failed)
            }
        }
    }

    #[test]
    fn renders_more_than_the_clear_colour() {
        let map = TileMap::parse(TEST_MAP).expect("valid test map");
        let layout = MazeLayout::from_map(&map).expect("valid test layout");

        let constructor: FlowConstructor<Frames, ()> = Box::new(move |ctx| {
            Box::pin(async move {
                let mut rng = StdRng::seed_from_u64(42);
                let maze = Maze::new(&ctx, layout, &mut rng)
                    .await
                    .expect("test assets are bundled with the repo");
                Box::new(MazeSmoke { maze }) as Box<dyn GraphicsFlow<_, _>>
            })
        });

        flow::run(vec![constructor]).expect("Failed to run flow for integration test.");
    }
}
