use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use torukia_engine::assets::ImageCache;
use torukia_engine::coords::{Point, Size};
use torukia_engine::engine::{App, AppControl, Engine, EngineConfig, FrameCtx, HeadlessPlatform};
use torukia_engine::logging::{init_logging, LoggingConfig};
use torukia_engine::manager::EntityManager;
use torukia_engine::render::Renderer;
use torukia_engine::texture::{AnimatedTexture, AnimationFactory};

const FRAME: u32 = 32;
const FRAMES: u32 = 8;
const RUN_FRAMES: u64 = 120;

/// Two sprites from one sheet: a looping walk cycle and a one-shot burst that
/// is removed once the manager hears it finished.
struct Sandbox {
    manager: Rc<RefCell<EntityManager>>,
    walker: AnimatedTexture,
    burst: Option<AnimatedTexture>,
}

impl App for Sandbox {
    fn logic(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl> {
        for id in self.manager.borrow_mut().drain_finished() {
            log::info!("frame {}: '{id}' finished, despawning", ctx.frame_index);
            if self.burst.as_ref().is_some_and(|b| b.id() == id) {
                self.burst = None;
            }
        }
        Ok(AppControl::Continue)
    }

    fn view(&mut self, _ctx: &mut FrameCtx<'_>, renderer: &mut dyn Renderer) {
        self.walker.print(renderer, Point::new(64, 64));
        if let Some(burst) = self.burst.as_mut() {
            burst.print(renderer, Point::new(160, 64));
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let sheet = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => write_demo_sheet().context("failed to write demo sprite sheet")?,
    };

    let mut cache = ImageCache::new();
    let factory = AnimationFactory::new(&mut cache, &sheet, Size::new(FRAME, FRAME), 4)?;
    let manager = Rc::new(RefCell::new(EntityManager::new()));

    let mut walker = factory.make("walker", &manager)?;
    walker.set_range(0, 3)?;
    walker.play(true);

    let mut burst = factory.make("burst", &manager)?;
    burst.set_range(4, 7)?;
    burst.set_speed(2)?;
    burst.play(false);

    let mut app = Sandbox {
        manager: manager.clone(),
        walker,
        burst: Some(burst),
    };

    let mut engine = Engine::new(EngineConfig {
        name: "torukia sandbox".into(),
        ..EngineConfig::default()
    });
    let mut platform = HeadlessPlatform::new(RUN_FRAMES);
    engine.run(&mut platform, &mut app)?;

    print!("{engine}");
    println!("frames: {}", platform.frames());
    println!("draws:  {}", platform.total_draws());
    println!("finished animations: {}", manager.borrow().finished_count());

    println!("last frame:");
    for item in platform.draw_list().items() {
        println!(
            "  {:?} src=({}, {}, {}x{}) dst=({}, {})",
            item.image,
            item.source.origin.x,
            item.source.origin.y,
            item.source.size.w,
            item.source.size.h,
            item.dest.x,
            item.dest.y,
        );
    }
    Ok(())
}

/// Writes an 8-frame strip with a distinct color per frame.
fn write_demo_sheet() -> Result<PathBuf> {
    let dir = std::env::temp_dir().join("torukia-sandbox");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("demo_sheet.png");

    let img = image::RgbaImage::from_fn(FRAME * FRAMES, FRAME, |x, _y| {
        let frame = (x / FRAME) as u8;
        image::Rgba([frame * 30, 255 - frame * 30, 128, 255])
    });
    img.save(&path)
        .with_context(|| format!("failed to save {}", path.display()))?;

    log::info!("wrote demo sheet to {}", path.display());
    Ok(path)
}
