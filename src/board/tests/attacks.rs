//! Attack detection tests.

use crate::board::{Board, Color, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_pawn_attacks_point_forward() {
    let board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
    // white pawn e4 hits d5 and f5, never e5 or backwards
    assert!(board.is_attacked(sq("d5"), Color::White));
    assert!(board.is_attacked(sq("f5"), Color::White));
    assert!(!board.is_attacked(sq("e5"), Color::White));
    assert!(!board.is_attacked(sq("d3"), Color::White));

    // black pawn d5 hits c4 and e4
    assert!(board.is_attacked(sq("e4"), Color::Black));
    assert!(board.is_attacked(sq("c4"), Color::Black));
    assert!(!board.is_attacked(sq("d4"), Color::Black));
    assert!(!board.is_attacked(sq("c6"), Color::Black));
}

#[test]
fn test_pawn_attacks_do_not_wrap() {
    let board = Board::from_fen("4k3/8/8/8/8/8/P6P/4K3 w - - 0 1");
    assert!(board.is_attacked(sq("b3"), Color::White));
    assert!(board.is_attacked(sq("g3"), Color::White));
    // nothing wraps around the board edge
    assert!(!board.is_attacked(sq("h2"), Color::White));
    assert!(!board.is_attacked(sq("h3"), Color::White));
    assert!(!board.is_attacked(sq("a3"), Color::White));
    assert!(!board.is_attacked(sq("a4"), Color::White));
}

#[test]
fn test_knight_and_king_steps() {
    let board = Board::from_fen("4k3/8/8/8/3N4/8/8/K7 w - - 0 1");
    for target in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
        assert!(board.is_attacked(sq(target), Color::White), "knight misses {target}");
    }
    assert!(!board.is_attacked(sq("d5"), Color::White));

    assert!(board.is_attacked(sq("b2"), Color::White));
    assert!(board.is_attacked(sq("a2"), Color::White));
    assert!(!board.is_attacked(sq("a3"), Color::White));
}

#[test]
fn test_slider_rays_stop_at_first_piece() {
    let board = Board::from_fen("4k3/8/8/8/R2n3b/8/8/4K3 w - - 0 1");
    // rook a4 sees up to the knight on d4 but not past it
    assert!(board.is_attacked(sq("c4"), Color::White));
    assert!(board.is_attacked(sq("d4"), Color::White));
    assert!(!board.is_attacked(sq("e4"), Color::White));
    assert!(board.is_attacked(sq("a8"), Color::White));

    // bishop h4 attacks diagonally only
    assert!(board.is_attacked(sq("e1"), Color::Black));
    assert!(!board.is_attacked(sq("h1"), Color::Black));
}

#[test]
fn test_ray_geometry_must_match_piece() {
    // a rook on a diagonal and a bishop on a file attack nothing along them
    let board = Board::from_fen("4k3/8/8/8/8/2r5/8/B3K3 w - - 0 1");
    assert!(!board.is_attacked(sq("b2"), Color::Black));
    assert!(!board.is_attacked(sq("a2"), Color::White));
    assert!(board.is_attacked(sq("b2"), Color::White));
    assert!(board.is_attacked(sq("c2"), Color::Black));
}

#[test]
fn test_queen_attacks_both_ways() {
    let board = Board::from_fen("4k3/8/8/8/3q4/8/8/K7 b - - 0 1");
    assert!(board.is_attacked(sq("d1"), Color::Black));
    assert!(board.is_attacked(sq("a1"), Color::Black));
    assert!(board.is_attacked(sq("h8"), Color::Black));
    assert!(!board.is_attacked(sq("e2"), Color::Black));
    assert!(board.in_check(Color::White));
}
