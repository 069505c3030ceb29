use crate::core::models::trajectory::{Trajectory, TrajectoryError};
use nalgebra::Point3;
use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count (value: '{value}')")]
    InvalidAtomCount { value: String },
    #[error("Invalid coordinate in field {field} (value: '{value}')")]
    InvalidCoordinate { field: usize, value: String },
    #[error("Atom record needs an element symbol and three coordinates")]
    IncompleteAtomRecord,
    #[error("File ended in the middle of a frame ({read} of {expected} atoms read)")]
    TruncatedFrame { read: usize, expected: usize },
}

/// Reads a multi-frame XYZ trajectory.
///
/// Each frame is an atom-count line, a comment line, and one `element x y z`
/// record per atom. Coordinates are taken as angstrom without conversion.
/// Element symbols are parsed but discarded; only positions matter here.
pub fn read_trajectory(reader: &mut impl BufRead) -> Result<Trajectory, XyzError> {
    let mut lines = reader.lines().enumerate();
    let mut frames: Vec<Vec<Point3<f64>>> = Vec::new();

    while let Some((index, line)) = lines.next() {
        let line = line?;
        let header_line = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let atom_count: usize = trimmed.parse().map_err(|_| XyzError::Parse {
            line: header_line,
            kind: XyzParseErrorKind::InvalidAtomCount {
                value: trimmed.to_string(),
            },
        })?;

        // Comment line; its content is ignored.
        if let Some((_, comment)) = lines.next() {
            comment?;
        }

        let mut positions = Vec::with_capacity(atom_count);
        for read in 0..atom_count {
            let Some((atom_index, atom_line)) = lines.next() else {
                return Err(XyzError::Parse {
                    line: header_line,
                    kind: XyzParseErrorKind::TruncatedFrame {
                        read,
                        expected: atom_count,
                    },
                });
            };
            positions.push(parse_atom_record(&atom_line?, atom_index + 1)?);
        }
        frames.push(positions);
    }

    Ok(Trajectory::new(frames)?)
}

fn parse_atom_record(line: &str, line_number: usize) -> Result<Point3<f64>, XyzError> {
    let mut fields = line.split_whitespace();
    let _element = fields.next().ok_or(XyzError::Parse {
        line: line_number,
        kind: XyzParseErrorKind::IncompleteAtomRecord,
    })?;

    let mut coords = [0.0f64; 3];
    for (field, coord) in coords.iter_mut().enumerate() {
        let value = fields.next().ok_or(XyzError::Parse {
            line: line_number,
            kind: XyzParseErrorKind::IncompleteAtomRecord,
        })?;
        *coord = value.parse().map_err(|_| XyzError::Parse {
            line: line_number,
            kind: XyzParseErrorKind::InvalidCoordinate {
                field: field + 1,
                value: value.to_string(),
            },
        })?;
    }

    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

/// Convenience wrapper opening `path` with a buffered reader.
pub fn load_trajectory(path: &Path) -> Result<Trajectory, XyzError> {
    let file = std::fs::File::open(path)?;
    let mut reader = io::BufReader::new(file);
    read_trajectory(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TWO_FRAMES: &str = "\
3
frame 0
C 0.0 0.0 0.0
C 1.5 0.0 0.0
O 2.1 1.1 0.0
3
frame 1
C 0.0 0.0 0.1
C 1.5 0.0 0.1
O 2.1 1.1 0.1
";

    #[test]
    fn read_trajectory_parses_all_frames() {
        let trajectory = read_trajectory(&mut Cursor::new(TWO_FRAMES)).unwrap();
        assert_eq!(trajectory.frame_count(), 2);
        assert_eq!(trajectory.atom_count(), 3);
        assert_eq!(trajectory.frame(0)[1], Point3::new(1.5, 0.0, 0.0));
        assert_eq!(trajectory.frame(1)[2], Point3::new(2.1, 1.1, 0.1));
    }

    #[test]
    fn read_trajectory_skips_blank_lines_between_frames() {
        let input = "1\ncomment\nH 0 0 0\n\n\n1\ncomment\nH 0 0 1\n";
        let trajectory = read_trajectory(&mut Cursor::new(input)).unwrap();
        assert_eq!(trajectory.frame_count(), 2);
    }

    #[test]
    fn read_trajectory_rejects_bad_atom_count() {
        let input = "two\ncomment\nH 0 0 0\n";
        let err = read_trajectory(&mut Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                line: 1,
                kind: XyzParseErrorKind::InvalidAtomCount { .. },
            }
        ));
    }

    #[test]
    fn read_trajectory_rejects_bad_coordinate() {
        let input = "1\ncomment\nH 0.0 zero 0.0\n";
        let err = read_trajectory(&mut Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                line: 3,
                kind: XyzParseErrorKind::InvalidCoordinate { field: 2, .. },
            }
        ));
    }

    #[test]
    fn read_trajectory_rejects_truncated_frame() {
        let input = "2\ncomment\nH 0 0 0\n";
        let err = read_trajectory(&mut Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                line: 1,
                kind: XyzParseErrorKind::TruncatedFrame {
                    read: 1,
                    expected: 2,
                },
            }
        ));
    }

    #[test]
    fn read_trajectory_rejects_empty_input() {
        let err = read_trajectory(&mut Cursor::new("")).unwrap_err();
        assert!(matches!(
            err,
            XyzError::Trajectory(TrajectoryError::Empty)
        ));
    }

    #[test]
    fn read_trajectory_rejects_inconsistent_frames() {
        let input = "1\na\nH 0 0 0\n2\nb\nH 0 0 0\nH 1 0 0\n";
        let err = read_trajectory(&mut Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            XyzError::Trajectory(TrajectoryError::InconsistentFrame { .. })
        ));
    }

    #[test]
    fn load_trajectory_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traj.xyz");
        std::fs::write(&path, TWO_FRAMES).unwrap();
        let trajectory = load_trajectory(&path).unwrap();
        assert_eq!(trajectory.frame_count(), 2);
    }
}
