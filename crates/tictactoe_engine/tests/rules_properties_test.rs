//! Exhaustive checks of the pure rules over every possible board.

use tictactoe_engine::{
    BOARD_SIZE, Board, Cell, Mark, Status, Verdict, WINNING_LINES, apply_move, available_moves,
    detect, is_full, is_valid_move, move_count,
};

/// Every assignment of empty/X/O to the nine cells (3^9 boards).
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(BOARD_SIZE as u32)).map(|mut code| {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        for cell in cells.iter_mut() {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Marked(Mark::X),
                _ => Cell::Marked(Mark::O),
            };
            code /= 3;
        }
        Board::from_cells(cells)
    })
}

/// Lines filled by a single mark, in scan order.
fn completed_lines(board: &Board) -> Vec<(Mark, [usize; 3])> {
    WINNING_LINES
        .iter()
        .filter_map(|line| {
            let marks: Vec<Option<Mark>> = line
                .iter()
                .map(|&i| board.get(i).and_then(|cell| cell.mark()))
                .collect();
            match marks.as_slice() {
                [Some(a), Some(b), Some(c)] if a == b && b == c => Some((*a, *line)),
                _ => None,
            }
        })
        .collect()
}

#[test]
fn test_winning_lines_are_rows_columns_diagonals() {
    assert_eq!(
        WINNING_LINES,
        [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_detect_over_all_boards() {
    let mut single_line_boards = 0;
    for board in all_boards() {
        let lines = completed_lines(&board);
        let verdict = detect(&board);
        match lines.first() {
            Some(&(mark, cells)) => {
                if lines.len() == 1 {
                    single_line_boards += 1;
                }
                assert_eq!(
                    verdict,
                    Some(Verdict::Line { mark, cells }),
                    "board:\n{}",
                    board.display()
                );
            }
            None if is_full(&board) => assert_eq!(verdict, Some(Verdict::Draw)),
            None => assert_eq!(verdict, None),
        }
    }
    assert!(single_line_boards > 0);
}

#[test]
fn test_apply_move_never_mutates_input() {
    for board in all_boards().step_by(7) {
        let copy = board;
        for index in 0..BOARD_SIZE {
            for mark in [Mark::X, Mark::O] {
                let next = apply_move(&board, index, mark);
                assert_eq!(board, copy);
                assert_eq!(next.get(index), Some(Cell::Marked(mark)));
                for other in (0..BOARD_SIZE).filter(|&i| i != index) {
                    assert_eq!(next.get(other), board.get(other));
                }
            }
        }
    }
}

#[test]
fn test_validity_follows_cell_and_status() {
    for board in all_boards().step_by(5) {
        for index in 0..BOARD_SIZE {
            assert_eq!(
                is_valid_move(&board, index, Status::Playing),
                board.is_empty(index)
            );
            assert!(!is_valid_move(&board, index, Status::Win));
            assert!(!is_valid_move(&board, index, Status::Draw));
        }
        assert!(!is_valid_move(&board, BOARD_SIZE, Status::Playing));
    }
}

#[test]
fn test_queries_agree() {
    for board in all_boards().step_by(3) {
        let available = available_moves(&board);
        assert_eq!(available.len() + move_count(&board), BOARD_SIZE);
        assert!(available.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(is_full(&board), available.is_empty());
    }
}
