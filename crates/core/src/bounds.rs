//! Quality bounds shared by every bounded item category.
//!
//! Quality only ever moves one unit at a time. A step is taken only while the
//! value is strictly inside the bound it moves toward, so a value that starts
//! outside `[QUALITY_MIN, QUALITY_MAX]` is left where it is rather than clamped.

/// Lowest quality a degrading item can reach.
pub const QUALITY_MIN: i32 = 0;

/// Highest quality an appreciating item can reach.
pub const QUALITY_MAX: i32 = 50;

/// Raise `quality` by up to `steps` units, stopping at [`QUALITY_MAX`].
pub fn raise_quality(quality: i32, steps: u32) -> i32 {
    let mut quality = quality;
    for _ in 0..steps {
        if quality < QUALITY_MAX {
            quality += 1;
        }
    }
    quality
}

/// Lower `quality` by up to `steps` units, stopping at [`QUALITY_MIN`].
pub fn lower_quality(quality: i32, steps: u32) -> i32 {
    let mut quality = quality;
    for _ in 0..steps {
        if quality > QUALITY_MIN {
            quality -= 1;
        }
    }
    quality
}
