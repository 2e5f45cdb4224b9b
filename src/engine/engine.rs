use crate::{
    engine::{
        raycast::{WallSlice, cast_column},
        sprites::{SpriteProjection, project},
        types::Screen,
    },
    renderer::{Image, ImageBank, ImageError, Rect, Renderer, Rgba, SpriteSheet, rgb},
    sim::{MatchState, Simulation},
};

const CEILING: Rgba = rgb(30, 30, 30);
const FLOOR: Rgba = rgb(60, 60, 60);
const WON_BANNER: Rgba = rgb(20, 140, 40);
const LOST_BANNER: Rgba = rgb(150, 10, 10);

/// Bullets project at this fraction of the monster's scale.
const BULLET_SHRINK: i32 = 4;

/// Draws one frame of the world from the player's eye.
///
/// Frame order: ceiling/floor → wall strips (filling the depth buffer) →
/// monster → bullets → end-of-match banner.
pub struct Engine<R: Renderer> {
    pub renderer: R,
    screen: Screen,
    depth: Vec<f32>,
    images: ImageBank,
    sprites: SpriteSheet,
}

impl<R: Renderer> Engine<R> {
    pub fn new(renderer: R, w: usize, h: usize) -> Result<Self, ImageError> {
        let mut images = ImageBank::new();
        let sprites = SpriteSheet::load(&mut images)?;
        Ok(Self {
            renderer,
            screen: Screen::new(w, h),
            depth: vec![f32::INFINITY; w],
            images,
            sprites,
        })
    }

    #[inline]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Per-column wall distances from the last rendered frame.
    #[inline]
    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth
    }

    /// Render `sim` and hand the finished frame to `submit`.
    pub fn render_frame<F, T>(&mut self, sim: &Simulation, submit: F) -> Result<T, ImageError>
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        self.renderer.begin_frame(self.screen.w, self.screen.h);

        self.draw_background();
        self.draw_walls(sim);
        // No sort between the two passes: bullets overdraw the monster.
        self.draw_monster(sim)?;
        self.draw_bullets(sim)?;

        match sim.state() {
            MatchState::Playing => {}
            MatchState::Won => self.draw_banner(WON_BANNER),
            MatchState::Lost => self.draw_banner(LOST_BANNER),
        }

        Ok(self.renderer.end_frame(submit))
    }

    /*──────────────────────── passes ───────────────────────────────*/

    fn draw_background(&mut self) {
        let (w, h, half) = (self.screen.w as i32, self.screen.h as i32, self.screen.half_h);
        self.renderer.fill_rect(Rect::new(0, 0, w, half), CEILING);
        self.renderer.fill_rect(Rect::new(0, half, w, h - half), FLOOR);
    }

    fn draw_walls(&mut self, sim: &Simulation) {
        let camera = sim.player();
        for x in 0..self.screen.w {
            let hit = cast_column(camera, sim.map(), &self.screen, x);
            self.depth[x] = hit.perp_dist;

            let slice = WallSlice::from_hit(&hit, &self.screen);
            self.renderer
                .draw_vertical_segment(x as i32, slice.y0, slice.y1, slice.colour);
        }
    }

    fn draw_monster(&mut self, sim: &Simulation) -> Result<(), ImageError> {
        let enemy = sim.enemy();
        if !enemy.alive {
            return Ok(());
        }
        let image = self.images.image(self.sprites.monster)?;
        let aspect = image.w as f32 / image.h as f32;
        if let Some(proj) = project(sim.player(), enemy.pos, &self.screen, aspect, 1) {
            Self::draw_columns(&mut self.renderer, &self.screen, &self.depth, &proj, image);
        }
        Ok(())
    }

    fn draw_bullets(&mut self, sim: &Simulation) -> Result<(), ImageError> {
        for bullet in sim.bullets().active() {
            let image = self.images.image(self.sprites.bullet[bullet.anim_frame as usize & 1])?;
            if let Some(proj) = project(sim.player(), bullet.pos, &self.screen, 1.0, BULLET_SHRINK) {
                Self::draw_columns(&mut self.renderer, &self.screen, &self.depth, &proj, image);
            }
        }
        Ok(())
    }

    /// Blit every unoccluded column of a projected sprite.
    fn draw_columns(
        renderer: &mut R,
        screen: &Screen,
        depth: &[f32],
        proj: &SpriteProjection,
        image: &Image,
    ) {
        let dst = proj.rect(screen);
        for (x, u) in proj.columns(depth, image.w) {
            renderer.blit(
                image,
                Some(Rect::new(u, 0, 1, image.h as i32)),
                Rect::new(x, dst.y, 1, dst.h),
            );
        }
    }

    /// Horizontal band across the middle third of the screen.
    fn draw_banner(&mut self, colour: Rgba) {
        let third = self.screen.h as i32 / 3;
        self.renderer
            .fill_rect(Rect::new(0, third, self.screen.w as i32, third), colour);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
