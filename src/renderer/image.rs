// Repository of sprite images the renderer blits from.
// The engine refers to images through `ImageId` only.

use std::collections::HashMap;

use super::{Rgba, rgb};

/// Runtime handle for an image in the bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type ImageId = u16;

/// Row-major 0xAARRGGBB pixels; alpha 0 is transparent.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Rgba>,
}

impl Image {
    /// Fully transparent canvas.
    pub fn blank(name: &str, w: usize, h: usize) -> Self {
        Self {
            name: name.to_string(),
            w,
            h,
            pixels: vec![0; w * h],
        }
    }

    /// Paint an axis-aligned box, clipped to the canvas.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, colour: Rgba) {
        for row in y..(y + h).min(self.h) {
            for col in x..(x + w).min(self.w) {
                self.pixels[row * self.w + col] = colour;
            }
        }
    }

    /// Paint a filled disc of `radius` centred on (`cx`, `cy`).
    pub fn fill_disc(&mut self, cx: i32, cy: i32, radius: i32, colour: Rgba) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
                    self.pixels[y as usize * self.w + x as usize] = colour;
                }
            }
        }
    }

    /// The monster: red torso and base with a yellow face, 64×64.
    pub fn monster() -> Self {
        let red = rgb(255, 0, 0);
        let mut img = Self::blank("MONSTER", 64, 64);
        img.fill_rect(20, 8, 24, 40, red);
        img.fill_rect(12, 48, 40, 8, red);
        img.fill_rect(24, 16, 16, 16, rgb(255, 255, 0));
        img
    }

    /// One of the two 16×16 bullet frames; frame 1 is the larger disc.
    pub fn bullet(frame: u8) -> Self {
        let mut img = Self::blank(&format!("BULLET{frame}"), 16, 16);
        img.fill_disc(8, 8, 4 + frame as i32 * 2, rgb(255, 255, 0));
        img
    }
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ImageError {
    /// Attempted to insert a second image with an existing name.
    #[error("image name `{0}` already present in bank")]
    Duplicate(String),

    /// Requested ID is outside `0 .. bank.len()`.
    #[error("image id {0} out of range")]
    BadId(ImageId),
}

/// Name-unique image cache.
#[derive(Default)]
pub struct ImageBank {
    by_name: HashMap<String, ImageId>,
    data: Vec<Image>,
}

impl ImageBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Obtain the id for a loaded image by name.
    pub fn id(&self, name: &str) -> Option<ImageId> {
        self.by_name.get(name).copied()
    }

    /// Borrow an image by id, with bounds-checking.
    pub fn image(&self, id: ImageId) -> Result<&Image, ImageError> {
        self.data.get(id as usize).ok_or(ImageError::BadId(id))
    }

    /// Insert `img` under its own name and return the new id.
    pub fn insert(&mut self, img: Image) -> Result<ImageId, ImageError> {
        if self.by_name.contains_key(&img.name) {
            return Err(ImageError::Duplicate(img.name));
        }
        let id = self.data.len() as ImageId;
        self.by_name.insert(img.name.clone(), id);
        self.data.push(img);
        Ok(id)
    }
}

/// Handles of every sprite the game draws.
#[derive(Clone, Copy, Debug)]
pub struct SpriteSheet {
    pub monster: ImageId,
    pub bullet: [ImageId; 2],
}

impl SpriteSheet {
    /// Generate the sprite art and register it in `bank`.
    pub fn load(bank: &mut ImageBank) -> Result<Self, ImageError> {
        Ok(Self {
            monster: bank.insert(Image::monster())?,
            bullet: [bank.insert(Image::bullet(0))?, bank.insert(Image::bullet(1))?],
        })
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn at(img: &Image, x: usize, y: usize) -> Rgba {
        img.pixels[y * img.w + x]
    }

    #[test]
    fn monster_art() {
        let m = Image::monster();
        assert_eq!((m.w, m.h), (64, 64));
        assert_eq!(at(&m, 0, 0), 0); // transparent corner
        assert_eq!(at(&m, 21, 40), rgb(255, 0, 0)); // torso
        assert_eq!(at(&m, 30, 20), rgb(255, 255, 0)); // face
        assert_eq!(at(&m, 13, 50), rgb(255, 0, 0)); // base
    }

    #[test]
    fn bullet_frames_differ_in_radius() {
        let small = Image::bullet(0);
        let big = Image::bullet(1);
        assert_eq!(at(&small, 8, 8), rgb(255, 255, 0));
        assert_eq!(at(&small, 8, 13), 0);
        assert_eq!(at(&big, 8, 13), rgb(255, 255, 0));
        assert_eq!(at(&big, 0, 0), 0);
    }

    #[test]
    fn sheet_registers_three_images() {
        let mut bank = ImageBank::new();
        let sheet = SpriteSheet::load(&mut bank).unwrap();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.image(sheet.monster).unwrap().w, 64);
        assert_eq!(bank.image(sheet.bullet[1]).unwrap().name, "BULLET1");
        assert_eq!(bank.id("BULLET0"), Some(sheet.bullet[0]));
    }

    #[test]
    fn duplicate_and_bad_id() {
        let mut bank = ImageBank::new();
        bank.insert(Image::bullet(0)).unwrap();
        assert_eq!(
            bank.insert(Image::bullet(0)).unwrap_err(),
            ImageError::Duplicate("BULLET0".into())
        );
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.image(7).unwrap_err(), ImageError::BadId(7));
    }
}
