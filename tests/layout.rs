use std::io::Write;

use day11::{Error, Position, SeatLayout, TileType};

const SAMPLE: &str = "
L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL
";

#[test]
fn parse_sample_layout() {
    let layout = SAMPLE.parse::<SeatLayout>().unwrap();

    assert_eq!(layout.width(), 10);
    assert_eq!(layout.height(), 10);
    assert_eq!(layout.tile(&Position::new(0, 0)), Ok(TileType::Empty));
    assert_eq!(layout.tile(&Position::new(0, 1)), Ok(TileType::Floor));
    assert_eq!(layout.tile(&Position::new(9, 9)), Ok(TileType::Empty));
    assert_eq!(layout.occupied_count(), 0);
    assert_eq!(layout.count(TileType::Floor), 29);
    assert_eq!(layout.count(TileType::Empty), 71);
}

#[test]
fn display_gives_back_input_text() {
    let text = "#.L\nL##\n...\n";
    let layout = text.parse::<SeatLayout>().unwrap();

    assert_eq!(layout.occupied_count(), 3);
    assert_eq!(layout.to_string(), text);
}

#[test]
fn tile_out_of_layout_is_error() {
    let layout = "L.\n#L".parse::<SeatLayout>().unwrap();

    assert_eq!(
        layout.tile(&Position::new(2, 0)),
        Err(Error::OutOfBounds(Position::new(2, 0)))
    );
    assert_eq!(
        layout.tile(&Position::new(0, 2)),
        Err(Error::OutOfBounds(Position::new(0, 2)))
    );
    assert_eq!(layout.get(&Position::new(1, 0)), Some(TileType::Occupied));
}

#[test]
fn reject_unknown_character() {
    let err = "L.L\nL?L".parse::<SeatLayout>().unwrap_err();

    assert_eq!(err, Error::InvalidSeatChar('?'));
}

#[test]
fn reject_rows_of_different_length() {
    let err = "L.L\nL.\nLLL".parse::<SeatLayout>().unwrap_err();

    assert_eq!(err, Error::InconsistentRow(3, 2));
}

#[test]
fn empty_text_gives_empty_layout() {
    let layout = "".parse::<SeatLayout>().unwrap();

    assert_eq!(layout.width(), 0);
    assert_eq!(layout.height(), 0);
    assert_eq!(layout.positions().count(), 0);
    assert_eq!(layout.to_string(), "");
}

#[test]
fn positions_are_row_major() {
    let layout = "L.L\n.#.".parse::<SeatLayout>().unwrap();
    let positions = layout.positions().collect::<Vec<_>>();

    assert_eq!(positions.len(), 6);
    assert_eq!(positions[0], Position::new(0, 0));
    assert_eq!(positions[2], Position::new(0, 2));
    assert_eq!(positions[3], Position::new(1, 0));
}

#[test]
fn read_layout_from_file() {
    let path = std::env::temp_dir().join(format!("day11_layout_{}.txt", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", SAMPLE.trim_start()).unwrap();
    drop(file);

    let layout = day11::read_layout(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(layout, SAMPLE.parse::<SeatLayout>().unwrap());
}

#[test]
fn read_layout_reports_bad_line() {
    let path = std::env::temp_dir().join(format!("day11_bad_layout_{}.txt", std::process::id()));
    std::fs::write(&path, "L.L\nL.L\nLxL\n").unwrap();

    let err = day11::read_layout(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    assert!(err.to_string().contains("line 3"));
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::InvalidSeatChar('x'))
    );
}
