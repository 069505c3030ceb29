use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("Trajectory must contain at least one frame")]
    Empty,

    #[error("Frame {frame} has {actual} atoms, expected {expected}")]
    InconsistentFrame {
        frame: usize,
        expected: usize,
        actual: usize,
    },
}

/// An ordered sequence of frames, each an ordered sequence of atomic positions
/// in angstrom.
///
/// Construction validates that the trajectory is non-empty and that every frame
/// carries the same number of atoms; the contents are immutable afterwards, so
/// downstream code may rely on `atom_count` being uniform.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    frames: Vec<Vec<Point3<f64>>>,
}

impl Trajectory {
    pub fn new(frames: Vec<Vec<Point3<f64>>>) -> Result<Self, TrajectoryError> {
        let expected = frames.first().map(Vec::len).ok_or(TrajectoryError::Empty)?;
        for (frame, positions) in frames.iter().enumerate().skip(1) {
            if positions.len() != expected {
                return Err(TrajectoryError::InconsistentFrame {
                    frame,
                    expected,
                    actual: positions.len(),
                });
            }
        }
        Ok(Self { frames })
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.frames[0].len()
    }

    #[inline]
    pub fn frame(&self, index: usize) -> &[Point3<f64>] {
        &self.frames[index]
    }

    pub fn frames(&self) -> impl Iterator<Item = &[Point3<f64>]> {
        self.frames.iter().map(Vec::as_slice)
    }
}
