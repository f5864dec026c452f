use twenty48::ui::{end_message, render_grid, render_progress_bar};
use twenty48::{GameStatus, Grid};

#[test]
fn test_render_grid() {
    let grid = Grid::from_rows([
        [2, 0, 0, 0],
        [0, 16, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 2048],
    ])
    .unwrap();
    let text = render_grid(&grid);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "+------+------+------+------+");
    assert_eq!(lines[1], "|  2   |      |      |      |");
    assert_eq!(lines[3], "|      |  16  |      |      |");
    assert_eq!(lines[7], "|      |      |      | 2048 |");
    assert_eq!(lines[8], lines[0]);
}

#[test]
fn test_render_progress_bar() {
    assert_eq!(render_progress_bar(0.0, 10), "[----------]   0%");
    assert_eq!(render_progress_bar(50.0, 10), "[#####-----]  50%");
    assert_eq!(render_progress_bar(100.0, 10), "[##########] 100%");
    assert_eq!(render_progress_bar(250.0, 4), "[####] 100%");
}

#[test]
fn test_end_message() {
    let (title, message) = end_message(GameStatus::Won, 2048).unwrap();
    assert_eq!(title, "Pass!");
    assert!(message.contains("Highest tile: 2048"));

    let (title, message) = end_message(GameStatus::Lost, 256).unwrap();
    assert_eq!(title, "Game Over");
    assert!(message.contains("Highest tile: 256"));

    assert!(end_message(GameStatus::InProgress, 8).is_none());
}
