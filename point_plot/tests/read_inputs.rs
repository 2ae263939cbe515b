use assert_fs::prelude::*;
use point_plot::geometry::{OrientedPoint3, Point3};
use point_plot::io::{read_oriented_points_csv, read_points_csv, read_points_from, Input};

#[test]
fn files_are_concatenated_in_argument_order() {
    let dir = assert_fs::TempDir::new().unwrap();
    let first = dir.child("first.csv");
    first.write_str("1,1,1\n2,2,2\n").unwrap();
    let second = dir.child("second.csv");
    second.write_str("3,3,3\n").unwrap();

    let forward = read_points_from(&[
        Input::File(first.path().to_path_buf()),
        Input::File(second.path().to_path_buf()),
    ])
    .unwrap();
    assert_eq!(
        forward,
        vec![
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
            Point3::new(3.0, 3.0, 3.0),
        ]
    );

    let reversed = read_points_from(&[
        Input::File(second.path().to_path_buf()),
        Input::File(first.path().to_path_buf()),
    ])
    .unwrap();
    let mut expected = read_points_csv(second.path().to_str().unwrap()).unwrap();
    expected.extend(read_points_csv(first.path().to_str().unwrap()).unwrap());
    assert_eq!(reversed, expected);
    dir.close().unwrap();
}

#[test]
fn error_names_file_and_line() {
    let file = assert_fs::NamedTempFile::new("broken.csv").unwrap();
    file.write_str("0,0,0\n\n1,2,3,4\n").unwrap();
    let err = read_points_csv(file.path().to_str().unwrap()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("broken.csv:3"), "{}", msg);
    assert!(msg.contains("found 4"), "{}", msg);
}

#[test]
fn oriented_points_from_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "0.5,1.5,2.5,0,0,1\n-1,-2,-3,1,0,0\n").unwrap();
    let pts = read_oriented_points_csv(file.path().to_str().unwrap()).unwrap();
    assert_eq!(
        pts,
        vec![
            OrientedPoint3::new(Point3::new(0.5, 1.5, 2.5), Point3::new(0.0, 0.0, 1.0)),
            OrientedPoint3::new(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 0.0, 0.0)),
        ]
    );
}

#[test]
fn later_file_error_discards_everything() {
    let dir = assert_fs::TempDir::new().unwrap();
    let good = dir.child("good.csv");
    good.write_str("1,2,3\n").unwrap();
    let bad = dir.child("bad.csv");
    bad.write_str("1,2\n").unwrap();
    let result = read_points_from(&[
        Input::File(good.path().to_path_buf()),
        Input::File(bad.path().to_path_buf()),
    ]);
    assert!(result.is_err());
    dir.close().unwrap();
}
