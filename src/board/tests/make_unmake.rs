//! Make/unmake move tests.

use crate::board::{Board, CastlingRights, Color, Move, Piece, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn find_move(board: &mut Board, uci: &str) -> Move {
    let candidate: Move = uci.parse().unwrap();
    board
        .generate_moves()
        .find_same(candidate)
        .unwrap_or_else(|| panic!("Expected move {uci} not found"))
}

/// Make and unmake every pseudo-legal move, checking full equality.
fn assert_round_trips(fen: &str) {
    let mut board = Board::from_fen(fen);
    let original = board.clone();
    for m in board.generate_pseudo_moves() {
        let info = board.make_move(m);
        board.unmake_move(m, info);
        assert_eq!(board, original, "{m:?} did not round trip in {fen}");
    }
}

#[test]
fn test_every_pseudo_move_round_trips() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    ] {
        assert_round_trips(fen);
    }
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original = board.clone();
    let mv = find_move(&mut board, "e5f6");
    assert!(mv.is_en_passant());

    let info = board.make_move(mv);
    assert_eq!(info.captured(), Some((Color::Black, Piece::Pawn)));
    assert_eq!(board.piece_at(sq("f5")), None);
    assert_eq!(board.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.halfmove_clock(), 0);

    board.unmake_move(mv, info);
    assert_eq!(board, original);
    assert_eq!(board.piece_at(sq("f5")), Some((Color::Black, Piece::Pawn)));
    assert_eq!(board.piece_at(sq("f6")), None);
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("1n6/P7/8/8/8/8/8/K1k5 w - - 3 1");
    let original = board.clone();
    let mv = find_move(&mut board, "a7b8n");
    assert!(mv.is_capture());

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(sq("b8")), Some((Color::White, Piece::Knight)));
    assert_eq!(board.piece_at(sq("a7")), None);

    board.unmake_move(mv, info);
    assert_eq!(board, original);
    assert_eq!(board.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.piece_at(sq("b8")), Some((Color::Black, Piece::Knight)));
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let original = board.clone();

    let mv = find_move(&mut board, "e1c1");
    let info = board.make_move(mv);
    assert_eq!(board.piece_at(Square::C1), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(Square::D1), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(Square::A1), None);
    assert_eq!(board.king_square(Color::White), Square::C1);
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(!board.castling_rights().has(Color::White, false));
    assert!(board.castling_rights().has(Color::Black, true));

    board.unmake_move(mv, info);
    assert_eq!(board, original);
    assert_eq!(board.king_square(Color::White), Square::E1);
}

#[test]
fn test_rook_moves_and_captures_clear_single_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = find_move(&mut board, "h1h8");
    board.make_move(mv);

    let mut expected = CastlingRights::all();
    expected.remove(Color::White, true);
    expected.remove(Color::Black, true);
    assert_eq!(board.castling_rights(), expected);
}

#[test]
fn test_double_push_sets_and_next_move_clears_ep() {
    let mut board = Board::new();
    let mv = find_move(&mut board, "d2d4");
    board.make_move(mv);
    assert_eq!(board.en_passant_target(), Some(sq("d3")));

    let mv = find_move(&mut board, "g8f6");
    board.make_move(mv);
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.fullmove_number(), 2);
}

#[test]
fn test_king_cache_follows_king_moves() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    let mv = find_move(&mut board, "e1d2");
    let info = board.make_move(mv);
    assert_eq!(board.king_square(Color::White), sq("d2"));
    board.unmake_move(mv, info);
    assert_eq!(board.king_square(Color::White), Square::E1);
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let mut initial: Vec<String> = board.generate_moves().iter().map(|m| m.to_string()).collect();
    initial.sort();

    let mv = find_move(&mut board, "e2e4");
    let info = board.make_move(mv);
    board.unmake_move(mv, info);

    let mut after: Vec<String> = board.generate_moves().iter().map(|m| m.to_string()).collect();
    after.sort();
    assert_eq!(initial, after);
}

#[test]
fn test_fullmove_number_saturates() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 4294967295");
    let before = board.clone();
    let m = find_move(&mut board, "e8d8");
    let info = board.make_move(m);
    assert_eq!(board.fullmove_number(), u32::MAX);
    assert_eq!(board.side_to_move(), Color::White);
    board.unmake_move(m, info);
    assert_eq!(board, before);
}
