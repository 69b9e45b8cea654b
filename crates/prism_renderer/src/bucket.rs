//! Tiled parallel rendering.
//!
//! The frame is cut into square tiles ("buckets") that rayon renders as
//! independent work items. Tiles never overlap, so each one fills a private
//! pixel vector and is copied into the frame once all of them are done.

use rayon::prelude::*;

use crate::renderer::{render_pixel, ImageBuffer, RenderConfig};
use crate::Camera;
use prism_core::Scene;
use prism_math::Color;

/// Edge length of a bucket when none is requested.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// One tile of the frame, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in the render order (0 renders first)
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Number of pixels covered.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Twice the tile center, so odd sizes stay exact in integers.
    fn doubled_center(&self) -> (i64, i64) {
        (
            2 * self.x as i64 + self.width as i64,
            2 * self.y as i64 + self.height as i64,
        )
    }
}

/// Split a `width` x `height` frame into tiles of at most `bucket_size`
/// pixels on a side.
///
/// Tiles on the right and bottom edges are cropped to the frame. The list is
/// ordered center-out: tiles closest to the middle of the frame come first,
/// and `index` matches the position in the returned vector.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(size as usize)
        .flat_map(|top| {
            (0..width).step_by(size as usize).map(move |left| {
                Bucket::new(
                    left,
                    top,
                    size.min(width - left),
                    size.min(height - top),
                    0,
                )
            })
        })
        .collect();

    let (cx, cy) = (width as i64, height as i64);
    // Stable sort keeps scanline order among tiles at equal distance
    buckets.sort_by_key(|bucket| {
        let (bx, by) = bucket.doubled_center();
        (bx - cx).pow(2) + (by - cy).pow(2)
    });

    for (index, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = index;
    }
    buckets
}

/// Shade every pixel of one tile, scanline by scanline.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> Vec<Color> {
    (bucket.y..bucket.y + bucket.height)
        .flat_map(|row| (bucket.x..bucket.x + bucket.width).map(move |col| (col, row)))
        .map(|(col, row)| render_pixel(camera, scene, col, row, config))
        .collect()
}

/// A rendered tile waiting to be copied into the frame.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Tile pixels, scanline order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the tile into its region of `image`.
    pub fn write_to(&self, image: &mut ImageBuffer) {
        let Bucket { x, y, width, .. } = self.bucket;
        for (row, span) in self.pixels.chunks(width as usize).enumerate() {
            let start = ((y + row as u32) * image.width + x) as usize;
            image.pixels[start..start + span.len()].copy_from_slice(span);
        }
    }
}

/// Render the frame tile by tile on the current rayon pool.
///
/// The pixels are identical to [`crate::render`]; only the evaluation order
/// differs.
pub fn render_parallel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    bucket_size: u32,
) -> ImageBuffer {
    let buckets = generate_buckets(camera.image_width, camera.image_height, bucket_size);
    log::debug!(
        "Rendering {}x{} as {} buckets of {} px on {} threads",
        camera.image_width,
        camera.image_height,
        buckets.len(),
        bucket_size,
        rayon::current_num_threads()
    );

    let tiles: Vec<BucketResult> = buckets
        .into_par_iter()
        .map(|bucket| {
            let pixels = render_bucket(&bucket, camera, scene, config);
            BucketResult::new(bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    tiles.iter().for_each(|tile| tile.write_to(&mut image));
    image
}
