//! Rules-level tests
//!
//! Exercises the legal-move layer end to end: player filtering, move execution side
//! effects, game states, history replay and the api facade.

use crate::api;
use crate::move_gen::is_square_attacked;
use crate::test_support::*;
use crate::types::PieceType::*;
use crate::Color::{Black, White};
use crate::*;

const SCHOLARS_MATE: [&str; 7] = ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"];

// ============================================================================
// Legal move generation
// ============================================================================

#[test]
fn test_standard_board_has_twenty_moves_each() {
    let board = Board::create_standard_board();
    assert_eq!(board.side_to_move(), White);
    assert_eq!(board.current_player().legal_moves().len(), 20);
    assert_eq!(board.black_player().legal_moves().len(), 20);
    assert_eq!(board.all_pieces().count(), 32);
    assert_eq!(board.current_player().game_state(), GameState::InProgress);
}

#[test]
fn test_king_alone_corner_and_center() {
    let corner = board_from(&[(King, White, "a1"), (King, Black, "h8")], White);
    assert_eq!(corner.current_player().legal_moves().len(), 3);

    let center = board_from(&[(King, White, "e4"), (King, Black, "h8")], White);
    assert_eq!(center.current_player().legal_moves().len(), 8);
}

#[test]
fn test_legal_moves_never_expose_own_king() {
    //! Walks a short opening and checks every legal move of every position reached
    let mut board = Board::create_standard_board();
    for text in ["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a5", "d2d4", "c7c6"] {
        let player = board.current_player();
        for mv in player.legal_moves() {
            let next = mv.execute(&board).expect("legal move executes");
            let color = player.color();
            assert!(
                !is_square_attacked(&next, next.king_square(color), color.opposite()),
                "{mv} leaves the {color} king attacked"
            );
        }
        let (next, _) = play(&board, &[text]);
        board = next;
    }
}

#[test]
fn test_pinned_piece_reports_leaves_player_in_check() {
    let board = board_from(
        &[(King, White, "e1"), (Bishop, White, "e2"), (Rook, Black, "e8"), (King, Black, "a8")],
        White,
    );
    let player = board.current_player();
    assert!(player.legal_moves_from(sq("e2")).is_empty());

    let mv = find_move(&board, "e2d3");
    let transition = player.make_move(&mv);
    assert_eq!(transition.status(), MoveStatus::LeavesPlayerInCheck);
    assert_eq!(transition.to_board(), &board, "rejected moves keep the board");
}

#[test]
fn test_wrong_side_is_illegal() {
    let board = Board::create_standard_board();
    let black_move = find_move(&board, "e7e5");

    let transition = board.current_player().make_move(&black_move);
    assert_eq!(transition.status(), MoveStatus::IllegalMove);

    let transition = board.black_player().make_move(&black_move);
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
    assert!(!transition.is_done());
}

#[test]
fn test_move_from_stale_board_is_illegal() {
    let start = Board::create_standard_board();
    let jump = find_move(&start, "e2e4");
    let (after, _) = play(&start, &["e2e4", "e7e5"]);
    // the pawn on e2 no longer exists
    assert_eq!(after.current_player().make_move(&jump).status(), MoveStatus::IllegalMove);
}

#[test]
fn test_shape_no_piece_can_play_is_illegal() {
    //! A knight on b1 cannot reach b3, and no king exposure is involved
    let board = Board::create_standard_board();
    let knight = board.piece(sq("b1")).expect("knight on b1");
    let mv = Move::new(knight, sq("b3"), MoveKind::Major);

    let transition = board.current_player().make_move(&mv);
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
    assert_eq!(transition.to_board(), &board);
    assert_eq!(transition.from_board(), &board);
}

#[test]
fn test_opponent_and_active_pieces() {
    let board = Board::create_standard_board();
    let white = board.current_player();
    let opponent = white.opponent();
    assert_eq!(opponent.color(), Black);
    assert_eq!(opponent.legal_moves(), board.black_player().legal_moves());
    assert_eq!(opponent.opponent().legal_moves(), white.legal_moves());

    assert_eq!(white.active_pieces().len(), 16);
    assert!(white.active_pieces().iter().all(|p| p.color == White));

    let (after, _) = play(&board, &["e2e4", "d7d5", "e4d5"]);
    assert_eq!(after.current_player().active_pieces().len(), 15);
    assert_eq!(after.current_player().opponent().active_pieces().len(), 16);
}

#[test]
fn test_transition_keeps_both_boards() {
    let board = Board::create_standard_board();
    let transition = board.current_player().make_move(&find_move(&board, "g1f3"));
    assert!(transition.is_done());
    assert_eq!(transition.from_board(), &board);
    assert_eq!(transition.to_board().piece(sq("f3")).map(|p| p.kind), Some(Knight));
    assert_eq!(transition.to_board().piece(sq("g1")), None);
}

// ============================================================================
// Game states
// ============================================================================

#[test]
fn test_scholars_mate_is_checkmate() {
    let (board, _) = play(&Board::create_standard_board(), &SCHOLARS_MATE);
    let black = board.current_player();
    assert_eq!(black.color(), Black);
    assert!(black.is_in_check());
    assert!(black.is_in_check_mate());
    assert!(!black.is_in_stale_mate());
    assert!(black.legal_moves().is_empty());
    assert_eq!(black.game_state(), GameState::Checkmate);
    assert!(black.game_state().is_terminal());
}

#[test]
fn test_stalemate_detection() {
    let board = board_from(&[(King, Black, "h8"), (Queen, White, "g6"), (King, White, "a1")], Black);
    let black = board.current_player();
    assert!(!black.is_in_check());
    assert!(black.is_in_stale_mate());
    assert!(!black.is_in_check_mate());
    assert_eq!(api::get_game_state(&board), GameState::Stalemate);
}

#[test]
fn test_check_versus_checkmate() {
    let (board, _) = play(&Board::create_standard_board(), &["e2e4", "f7f6", "d2d4", "g7g5", "d1h5"]);
    assert_eq!(board.current_player().game_state(), GameState::Checkmate);

    let (board, _) = play(&Board::create_standard_board(), &["e2e4", "f7f5", "d1h5"]);
    let black = board.current_player();
    assert_eq!(black.game_state(), GameState::Check);
    assert!(black.legal_moves().iter().all(|mv| {
        let next = mv.execute(&board).expect("legal move executes");
        !is_square_attacked(&next, next.king_square(Black), White)
    }));
}

// ============================================================================
// Move side effects
// ============================================================================

#[test]
fn test_en_passant_only_on_the_next_ply() {
    let (board, _) = play(&Board::create_standard_board(), &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(board.en_passant_target(), Some(sq("d6")));

    let capture = find_move(&board, "e5d6");
    assert!(matches!(capture.kind(), MoveKind::EnPassant { .. }));
    let next = board.current_player().make_move(&capture).into_board();
    assert_eq!(next.piece(sq("d5")), None, "victim removed");
    assert_eq!(next.piece(sq("d6")).map(|p| p.kind), Some(Pawn));
    assert_eq!(next.en_passant_target(), None);

    let (later, _) = play(&board, &["h2h3", "a6a5"]);
    assert_eq!(MoveFactory::create_move(&later, sq("e5"), sq("d6")), None);
}

#[test]
fn test_castling_relocates_rook() {
    let (board, _) = play(
        &Board::create_standard_board(),
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"],
    );
    let castle = find_move(&board, "e1g1");
    assert!(castle.is_castling());
    assert_eq!(castle.to_string(), "O-O");

    let next = board.current_player().make_move(&castle).into_board();
    assert_eq!(next.piece(sq("g1")).map(|p| p.kind), Some(King));
    assert_eq!(next.piece(sq("f1")).map(|p| p.kind), Some(Rook));
    assert_eq!(next.piece(sq("h1")), None);
    assert_eq!(next.piece(sq("e1")), None);
    assert_eq!(next.king_square(White), sq("g1"));
    assert!(next.white_player().is_castled());
    assert!(!next.black_player().is_castled());
    assert!(!next.castling_rights().king_side(White));
    assert!(!next.castling_rights().queen_side(White));
}

#[test]
fn test_castling_rights_revoked_by_moves() {
    let (board, _) = play(&Board::create_standard_board(), &["e2e4", "e7e5", "e1e2", "e8e7"]);
    let rights = board.castling_rights();
    assert!(!rights.king_side(White) && !rights.queen_side(White));
    assert!(!rights.king_side(Black) && !rights.queen_side(Black));

    let (board, _) = play(&Board::create_standard_board(), &["g1f3", "g8f6", "h1g1"]);
    let rights = board.castling_rights();
    assert!(!rights.king_side(White));
    assert!(rights.queen_side(White));
    assert!(rights.king_side(Black));

    // a rook returning to its corner does not restore the right
    let (board, _) = play(&board, &["f6g8", "g1h1"]);
    assert!(!board.castling_rights().king_side(White));
}

#[test]
fn test_promotion_default_and_override() {
    let board = board_from(
        &[(Pawn, White, "b7"), (Rook, Black, "a8"), (King, White, "e1"), (King, Black, "h5")],
        White,
    );

    let queen = find_move(&board, "b7b8");
    assert_eq!(queen.promotion(), Some(Queen));
    assert_eq!(queen.to_string(), "b8=Q");
    let next = board.current_player().make_move(&queen).into_board();
    let promoted = next.piece(sq("b8")).expect("promoted piece");
    assert_eq!((promoted.kind, promoted.color), (Queen, White));
    assert_eq!(next.piece(sq("b7")), None);

    for kind in [Rook, Bishop, Knight] {
        let mv = MoveFactory::create_promotion_move(&board, sq("b7"), sq("b8"), kind)
            .expect("promotion move");
        let next = board.current_player().make_move(&mv).into_board();
        assert_eq!(next.piece(sq("b8")).map(|p| p.kind), Some(kind));
    }

    let capture = find_move(&board, "b7a8n");
    assert_eq!(capture.to_string(), "bxa8=N");
    let next = board.current_player().make_move(&capture).into_board();
    let landed = next.piece(sq("a8")).expect("knight on a8");
    assert_eq!((landed.kind, landed.color), (Knight, White));
    assert_eq!(next.pieces(Black).count(), 1, "rook captured");
}

#[test]
fn test_promotion_rejects_bad_targets() {
    let board = board_from(&[(Pawn, White, "b7"), (King, White, "e1"), (King, Black, "h5")], White);
    assert_eq!(MoveFactory::create_promotion_move(&board, sq("b7"), sq("b8"), King), None);
    assert_eq!(MoveFactory::create_promotion_move(&board, sq("b7"), sq("b8"), Pawn), None);

    let king_step = find_move(&board, "e1e2");
    assert_eq!(
        king_step.with_promotion(Queen),
        Err(ChessEngineError::IllegalPromotion { kind: Queen })
    );
}

#[test]
fn test_move_display() {
    let board = Board::create_standard_board();
    assert_eq!(find_move(&board, "e2e4").to_string(), "e4");
    assert_eq!(find_move(&board, "g1f3").to_string(), "Nf3");

    let (board, _) = play(&board, &["e2e4", "d7d5"]);
    assert_eq!(find_move(&board, "e4d5").to_string(), "exd5");

    let (mated, moves) = play(&Board::create_standard_board(), &SCHOLARS_MATE);
    assert_eq!(moves.last().map(ToString::to_string).as_deref(), Some("Qxf7"));
    assert_eq!(mated.side_to_move(), Black);
}

#[test]
fn test_move_factory_null_move() {
    let board = Board::create_standard_board();
    assert_eq!(MoveFactory::create_move(&board, sq("e4"), sq("e5")), None, "empty source");
    assert_eq!(MoveFactory::create_move(&board, sq("e2"), sq("e5")), None, "out of reach");
    assert_eq!(MoveFactory::create_move(&board, sq("a1"), sq("a2")), None, "own piece");
    assert_eq!(MoveFactory::create_move(&board, sq("e1"), sq("g1")), None, "no castling yet");
    assert_eq!(MoveFactory::create_move(&board, 70, 10), None);
}

// ============================================================================
// Board assembly
// ============================================================================

#[test]
fn test_builder_requires_one_king_per_side() {
    let mut builder = Board::builder();
    builder.set_piece(Piece::new(King, White, sq("e1")));
    assert_eq!(builder.build(), Err(ChessEngineError::MissingKing { color: Black }));

    builder
        .set_piece(Piece::new(King, Black, sq("e8")))
        .set_piece(Piece::new(King, White, sq("d1")));
    assert!(matches!(
        builder.build(),
        Err(ChessEngineError::DuplicateKing { color: White, .. })
    ));

    builder.clear_square(sq("d1"));
    assert!(builder.build().is_ok());
}

#[test]
fn test_builder_rejects_bad_en_passant_target() {
    let mut builder = Board::builder();
    builder
        .set_piece(Piece::new(King, White, sq("e1")))
        .set_piece(Piece::new(King, Black, sq("e8")))
        .set_piece(Piece::with_first_move(Pawn, Black, sq("d5"), false))
        .set_en_passant_target(Some(sq("e3")));
    assert_eq!(
        builder.build(),
        Err(ChessEngineError::InvalidEnPassantTarget { square: sq("e3") })
    );

    builder.set_en_passant_target(Some(sq("d6")));
    assert_eq!(builder.build().map(|b| b.en_passant_target()), Ok(Some(sq("d6"))));
}

#[test]
fn test_builder_rejects_off_board_piece() {
    let mut builder = Board::builder();
    builder
        .set_piece(Piece::new(King, White, sq("e1")))
        .set_piece(Piece::new(King, Black, sq("e8")))
        .set_piece(Piece::new(Rook, White, 64));
    assert_eq!(builder.build(), Err(ChessEngineError::InvalidSquare { square: 64 }));
}

#[test]
fn test_board_display_shows_ranks_and_files() {
    let text = Board::create_standard_board().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "8  r n b q k b n r");
    assert_eq!(lines[7], "1  R N B Q K B N R");
    assert!(text.ends_with("   a b c d e f g h\n"));
}

// ============================================================================
// History and undo
// ============================================================================

#[test]
fn test_move_log_replay_round_trip() {
    let start = Board::create_standard_board();
    let (final_board, moves) = play(&start, &SCHOLARS_MATE);
    let mut log = MoveLog::new();
    for mv in &moves {
        log.push(*mv);
    }
    assert_eq!(log.len(), SCHOLARS_MATE.len());
    assert_eq!(log.replay_all(), Ok(final_board));
    assert_eq!(log.replay(0), Ok(start.clone()));

    let (after_two, _) = play(&start, &SCHOLARS_MATE[..2]);
    assert_eq!(log.replay(2), Ok(after_two));
}

#[test]
fn test_move_log_replay_restores_promotion_choice() {
    let start = board_from(&[(Pawn, White, "b7"), (King, White, "e1"), (King, Black, "h5")], White);
    let (after, moves) = play(&start, &["b7b8r"]);
    let mut log = MoveLog::starting_from(start);
    log.push(moves[0]);
    let replayed = log.replay_all().expect("replay");
    assert_eq!(replayed, after);
    assert_eq!(replayed.piece(sq("b8")).map(|p| p.kind), Some(Rook));
}

#[test]
fn test_move_log_replay_fails_on_foreign_move() {
    let start = Board::create_standard_board();
    let (after, _) = play(&start, &["e2e4"]);
    let mut log = MoveLog::new();
    // black reply recorded without white's move first
    log.push(find_move(&after, "e7e5"));
    assert!(matches!(log.replay_all(), Err(ChessEngineError::ReplayFailed { ply: 0, .. })));
}

#[test]
fn test_unmake_move_restores_previous_board() {
    let start = Board::create_standard_board();
    let (board, moves) = play(&start, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"]);
    let mut log = MoveLog::new();
    for mv in &moves {
        log.push(*mv);
    }

    let last = *log.last().expect("non-empty log");
    let transition = board.current_player().unmake_move(&last, &log);
    assert!(transition.is_done());
    let (before_castle, _) = play(&start, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);
    assert_eq!(transition.to_board(), &before_castle);
    assert!(transition.to_board().castling_rights().king_side(White));
    assert!(!transition.to_board().has_castled(White));
}

#[test]
fn test_unmake_move_restores_en_passant_target() {
    let start = Board::create_standard_board();
    let (board, moves) = play(&start, &["e2e4", "a7a6", "e4e5", "d7d5", "e5d6"]);
    let mut log = MoveLog::new();
    moves.iter().for_each(|mv| log.push(*mv));

    let undone = board.current_player().unmake_move(&moves[4], &log).into_board();
    assert_eq!(undone.en_passant_target(), Some(sq("d6")));
    assert_eq!(undone.piece(sq("d5")).map(|p| p.color), Some(Black));
}

#[test]
fn test_unmake_move_requires_last_move() {
    let start = Board::create_standard_board();
    let (board, moves) = play(&start, &["e2e4", "e7e5"]);
    let mut log = MoveLog::new();
    moves.iter().for_each(|mv| log.push(*mv));

    let transition = board.current_player().unmake_move(&moves[0], &log);
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
    assert_eq!(transition.to_board(), &board);

    let empty = MoveLog::new();
    let transition = start.current_player().unmake_move(&moves[0], &empty);
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
}

#[test]
fn test_unmake_move_rejects_board_the_log_does_not_reach() {
    let start = Board::create_standard_board();
    let (_, moves) = play(&start, &["e2e4"]);
    let mut log = MoveLog::new();
    log.push(moves[0]);

    // white to move, but the log ends with black to move
    let transition = start.current_player().unmake_move(&moves[0], &log);
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
    assert_eq!(transition.to_board(), &start);

    // parity agrees, but the last move's destination is empty on this board
    let (_, main_line) = play(&start, &["e2e4", "e7e5"]);
    let (other, _) = play(&start, &["e2e4", "d7d5"]);
    let mut log = MoveLog::new();
    main_line.iter().for_each(|mv| log.push(*mv));
    let transition = other.current_player().unmake_move(&main_line[1], &log);
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
    assert_eq!(transition.to_board(), &other);
}

// ============================================================================
// API facade
// ============================================================================

#[test]
fn test_api_round_trip() {
    let mut board = api::new_game();
    assert_eq!(board, Board::create_standard_board());
    assert_eq!(api::legal_moves_from(&board, sq("g1")).len(), 2);
    assert!(api::legal_moves_from(&board, sq("g8")).is_empty(), "not black's turn");

    assert!(api::is_legal_move(&board, sq("e2"), sq("e4")));
    assert!(!api::is_legal_move(&board, sq("e7"), sq("e5")));
    assert!(!api::is_legal_move(&board, -1, sq("e4")));
    assert!(api::do_move(&board, sq("e2"), sq("e5")).is_none());

    let mut log = MoveLog::new();
    let transition = api::do_move(&board, sq("e2"), sq("e4")).expect("pawn move");
    assert!(transition.is_done());
    log.push(*transition.transition_move());
    board = transition.into_board();
    assert_eq!(board.side_to_move(), Black);

    api::reset_game(&mut board, &mut log);
    assert_eq!(board, Board::create_standard_board());
    assert!(log.is_empty());
}

#[test]
fn test_api_promotion_move() {
    let board = board_from(&[(Pawn, Black, "g2"), (King, White, "a1"), (King, Black, "e8")], Black);
    let transition = api::do_promotion_move(&board, sq("g2"), sq("g1"), Bishop).expect("promotion");
    assert!(transition.is_done());
    assert_eq!(transition.to_board().piece(sq("g1")).map(|p| p.kind), Some(Bishop));
}

#[test]
fn test_value_types_serialize() {
    assert_eq!(serde_json::to_string(&GameState::Checkmate).unwrap(), "\"Checkmate\"");
    assert_eq!(serde_json::to_string(&MoveStatus::LeavesPlayerInCheck).unwrap(), "\"LeavesPlayerInCheck\"");

    let mv = find_move(&Board::create_standard_board(), "g1f3");
    let json = serde_json::to_string(&mv).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);
}
