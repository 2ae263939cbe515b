//! Line-oriented input of comma-separated point records.
//!
//! Each non-empty line holds a fixed number of comma-separated decimal
//! numbers. Several inputs are read one after another, so the records of
//! the second file follow those of the first.

pub mod options;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::geometry::{OrientedPoint3, Point3};

/// Source name used in messages for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Reads a file and returns its lines.
pub fn read_lines(path: &str) -> io::Result<Vec<String>> {
    BufReader::new(File::open(path)?).lines().collect()
}

/// A place records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Interprets a command-line argument; `-` names standard input.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(arg.to_path_buf())
        }
    }

    /// Inputs for a list of arguments, or standard input alone when the list
    /// is empty.
    pub fn from_args<P: AsRef<Path>>(args: &[P]) -> Vec<Self> {
        if args.is_empty() {
            vec![Input::Stdin]
        } else {
            args.iter().map(|a| Input::from_arg(a.as_ref())).collect()
        }
    }

    pub fn name(&self) -> String {
        match self {
            Input::Stdin => STDIN_NAME.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::File(path) => {
                let file = File::open(path)
                    .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

fn invalid(source: &str, line_no: usize, msg: impl std::fmt::Display) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("{}:{}: {}", source, line_no, msg),
    )
}

/// Parses one line of exactly `N` comma-separated numbers.
///
/// Surrounding whitespace of each field is ignored. A line with fewer or
/// more fields, or with a field that is not a number, is rejected.
pub fn parse_record<const N: usize>(line: &str) -> io::Result<[f64; N]> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != N {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "expected {} comma-separated values, found {}",
                N,
                parts.len()
            ),
        ));
    }
    let mut values = [0.0; N];
    for (value, part) in values.iter_mut().zip(parts) {
        let field = part.trim();
        *value = field.parse::<f64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid number '{}': {}", field, e),
            )
        })?;
    }
    Ok(values)
}

/// Parses an `x,y,z` line.
pub fn parse_point(line: &str) -> io::Result<Point3> {
    parse_record::<3>(line).map(Point3::from)
}

/// Parses an `x,y,z,nx,ny,nz` line.
pub fn parse_oriented_point(line: &str) -> io::Result<OrientedPoint3> {
    parse_record::<6>(line).map(OrientedPoint3::from)
}

/// Reads every record from `reader`, naming `source` in error messages.
/// Empty lines are skipped. A line holding only whitespace is a malformed
/// record.
pub fn read_records<const N: usize, T, R>(reader: R, source: &str) -> io::Result<Vec<T>>
where
    T: From<[f64; N]>,
    R: BufRead,
{
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| invalid(source, idx + 1, e))?;
        if line.is_empty() {
            continue;
        }
        let values = parse_record::<N>(&line).map_err(|e| invalid(source, idx + 1, e))?;
        records.push(T::from(values));
    }
    debug!("read {} records from {}", records.len(), source);
    Ok(records)
}

/// Reads records from each input in turn and concatenates them.
pub fn read_records_from<const N: usize, T>(inputs: &[Input]) -> io::Result<Vec<T>>
where
    T: From<[f64; N]>,
{
    let mut records = Vec::new();
    for input in inputs {
        let reader = input.open()?;
        records.extend(read_records::<N, T, _>(reader, &input.name())?);
    }
    info!("read {} records from {} input(s)", records.len(), inputs.len());
    Ok(records)
}

/// Reads `x,y,z` points from `reader`.
pub fn read_points<R: BufRead>(reader: R) -> io::Result<Vec<Point3>> {
    read_records::<3, Point3, _>(reader, STDIN_NAME)
}

/// Reads `x,y,z,nx,ny,nz` oriented points from `reader`.
pub fn read_oriented_points<R: BufRead>(reader: R) -> io::Result<Vec<OrientedPoint3>> {
    read_records::<6, OrientedPoint3, _>(reader, STDIN_NAME)
}

/// Reads `x,y,z` points from the given inputs in order.
pub fn read_points_from(inputs: &[Input]) -> io::Result<Vec<Point3>> {
    read_records_from::<3, Point3>(inputs)
}

/// Reads `x,y,z,nx,ny,nz` oriented points from the given inputs in order.
pub fn read_oriented_points_from(inputs: &[Input]) -> io::Result<Vec<OrientedPoint3>> {
    read_records_from::<6, OrientedPoint3>(inputs)
}

/// Reads `x,y,z` points from a single file.
pub fn read_points_csv(path: &str) -> io::Result<Vec<Point3>> {
    read_points_from(&[Input::File(PathBuf::from(path))])
}

/// Reads `x,y,z,nx,ny,nz` oriented points from a single file.
pub fn read_oriented_points_csv(path: &str) -> io::Result<Vec<OrientedPoint3>> {
    read_oriented_points_from(&[Input::File(PathBuf::from(path))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_points_in_order() {
        let pts = read_points(Cursor::new("0,0,0\n1,2,3\n4,4,4")).unwrap();
        assert_eq!(
            pts,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 2.0, 3.0),
                Point3::new(4.0, 4.0, 4.0),
            ]
        );
    }

    #[test]
    fn values_are_exact() {
        let pts = read_points(Cursor::new("0.1,-2.5e-3,1e10\n")).unwrap();
        assert_eq!(pts[0].x.to_bits(), 0.1f64.to_bits());
        assert_eq!(pts[0].y.to_bits(), (-2.5e-3f64).to_bits());
        assert_eq!(pts[0].z.to_bits(), 1e10f64.to_bits());
    }

    #[test]
    fn whitespace_and_crlf_tolerated() {
        let pts = read_points(Cursor::new(" 1, 2 ,3\r\n\n4,5,6\n")).unwrap();
        assert_eq!(pts, vec![Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)]);
    }

    #[test]
    fn whitespace_only_line_rejected() {
        let err = read_points(Cursor::new("1,2,3\n   \n4,5,6\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("<stdin>:2"));
        assert!(err.to_string().contains("found 1"));
    }

    #[test]
    fn too_few_fields_rejected() {
        let err = read_points(Cursor::new("1,2\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("<stdin>:1"));
        assert!(err.to_string().contains("expected 3 comma-separated values, found 2"));
    }

    #[test]
    fn too_many_fields_rejected() {
        let err = read_points(Cursor::new("1,2,3\n1,2,3,4\n")).unwrap_err();
        assert!(err.to_string().contains("<stdin>:2"));
        assert!(err.to_string().contains("found 4"));
    }

    #[test]
    fn non_numeric_field_rejected() {
        let err = parse_point("1,abc,3").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("invalid number 'abc'"));
    }

    #[test]
    fn empty_field_rejected() {
        assert!(parse_point("1,,3").is_err());
    }

    #[test]
    fn oriented_points_need_six_fields() {
        let pts = read_oriented_points(Cursor::new("1,2,3,0,0,1\n")).unwrap();
        assert_eq!(
            pts,
            vec![OrientedPoint3::new(
                Point3::new(1.0, 2.0, 3.0),
                Point3::new(0.0, 0.0, 1.0)
            )]
        );
        assert!(read_oriented_points(Cursor::new("1,2,3\n")).is_err());
    }

    #[test]
    fn dash_means_stdin() {
        let inputs = Input::from_args(&["-", "pts.csv"]);
        assert_eq!(
            inputs,
            vec![Input::Stdin, Input::File(PathBuf::from("pts.csv"))]
        );
        assert_eq!(Input::from_args::<&str>(&[]), vec![Input::Stdin]);
    }

    #[test]
    fn line_helpers_read_whole_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "1,2,3\n4,5,6\n").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(read_lines(path).unwrap(), vec!["1,2,3", "4,5,6"]);
        assert_eq!(read_to_string(path).unwrap(), "1,2,3\n4,5,6\n");
        let pts: Vec<Point3> = read_lines(path)
            .unwrap()
            .iter()
            .map(|l| parse_point(l))
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn missing_file_names_path() {
        let err = read_points_csv("/definitely/not/here.csv").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
