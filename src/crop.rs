//! Whitespace cropping around the inked portion of a scan.
//!
//! Each edge is found independently: columns (rows) are scanned inward from
//! that edge and the bound commits at the line where the running count of
//! marked lines reaches [`CROP_DEBOUNCE`]. The counted lines need not be
//! contiguous; the debounce absorbs specks of dust ahead of the glyph.
//!
//! Sparse images are an error, not a silent zero-size view: if an edge
//! never accumulates enough marked lines, or the committed bounds cross,
//! [`CropError`] reports which scan fell short.

use crate::image::ImageRgb8;
use crate::marking::{contains_marking, Region};

/// Marked lines required before an edge commits.
pub const CROP_DEBOUNCE: usize = 5;

/// Axis of a crop bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Reasons why cropping may fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropError {
    /// One or more edge scans ran out of lines before reaching
    /// [`CROP_DEBOUNCE`] marked ones. Counts are per scan direction.
    Degenerate {
        left: usize,
        right: usize,
        top: usize,
        bottom: usize,
    },
    /// Every edge committed, but the bounds cross on one axis.
    Inverted { axis: Axis, start: usize, end: usize },
}

impl std::fmt::Display for CropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropError::Degenerate {
                left,
                right,
                top,
                bottom,
            } => {
                write!(f, "crop debounce not reached:")?;
                for (name, found) in [
                    ("left", left),
                    ("right", right),
                    ("top", top),
                    ("bottom", bottom),
                ] {
                    if *found < CROP_DEBOUNCE {
                        write!(f, " {name}={found}/{CROP_DEBOUNCE}")?;
                    }
                }
                Ok(())
            }
            CropError::Inverted { axis, start, end } => {
                let axis = match axis {
                    Axis::X => "x",
                    Axis::Y => "y",
                };
                write!(f, "crop bounds crossed on {axis} axis ({start} >= {end})")
            }
        }
    }
}

/// Tight ink bounding box of `image` as a borrowed sub-view.
pub fn crop<'a>(image: &ImageRgb8<'a>) -> Result<ImageRgb8<'a>, CropError> {
    let mut x0 = None;
    let mut left = 0usize;
    for x in 0..image.w {
        if contains_marking(image, Region::column(x, image.h)) {
            left += 1;
        }
        if left >= CROP_DEBOUNCE {
            x0 = Some(x);
            break;
        }
    }

    let mut x1 = None;
    let mut right = 0usize;
    for x in (0..image.w).rev() {
        if contains_marking(image, Region::column(x, image.h)) {
            right += 1;
        }
        if right >= CROP_DEBOUNCE {
            x1 = Some(x + 1);
            break;
        }
    }

    let mut y0 = None;
    let mut top = 0usize;
    for y in 0..image.h {
        if contains_marking(image, Region::row(y, image.w)) {
            top += 1;
        }
        if top >= CROP_DEBOUNCE {
            y0 = Some(y);
            break;
        }
    }

    let mut y1 = None;
    let mut bottom = 0usize;
    for y in (0..image.h).rev() {
        if contains_marking(image, Region::row(y, image.w)) {
            bottom += 1;
        }
        if bottom >= CROP_DEBOUNCE {
            y1 = Some(y + 1);
            break;
        }
    }

    let (Some(x0), Some(x1), Some(y0), Some(y1)) = (x0, x1, y0, y1) else {
        return Err(CropError::Degenerate {
            left,
            right,
            top,
            bottom,
        });
    };
    if x1 <= x0 {
        return Err(CropError::Inverted {
            axis: Axis::X,
            start: x0,
            end: x1,
        });
    }
    if y1 <= y0 {
        return Err(CropError::Inverted {
            axis: Axis::Y,
            start: y0,
            end: y1,
        });
    }
    Ok(image.view(Region::new(x0, x1, y0, y1)))
}
