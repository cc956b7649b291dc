//! Tests for the round state machine and tournament controller.

use anyhow::Result;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use terni::{
    Board, Cell, Mark, Outcome, OutcomeSink, Player, Renderer, Round, Seat, Tournament,
    TournamentLength,
};

fn cell(row: usize, col: usize) -> Cell {
    Cell::new(row, col).unwrap()
}

/// Replays a fixed move list; records rejections it was notified of.
struct ScriptedPlayer {
    name: String,
    moves: VecDeque<Cell>,
    rejected: Rc<RefCell<Vec<Cell>>>,
}

impl ScriptedPlayer {
    fn new(name: &str, moves: &[(usize, usize)]) -> Self {
        Self::with_rejection_log(name, moves, Rc::default())
    }

    fn with_rejection_log(
        name: &str,
        moves: &[(usize, usize)],
        rejected: Rc<RefCell<Vec<Cell>>>,
    ) -> Self {
        Self {
            name: name.to_string(),
            moves: moves.iter().map(|&(r, c)| cell(r, c)).collect(),
            rejected,
        }
    }
}

impl Player for ScriptedPlayer {
    fn propose(&mut self, _board: &Board, _mark: Mark) -> Result<Cell> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("{} ran out of scripted moves", self.name))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn notify_rejected(&mut self, cell: Cell) {
        self.rejected.borrow_mut().push(cell);
    }
}

/// Counts board snapshots; one per applied move.
#[derive(Default)]
struct CountingRenderer {
    frames: u32,
}

impl Renderer for CountingRenderer {
    fn render(&mut self, _board: &Board) {
        self.frames += 1;
    }
}

/// Collects everything reported by the controller.
#[derive(Default)]
struct RecordingSink {
    rounds: Vec<(u32, Outcome)>,
    tournament: Option<(Mark, u32)>,
}

impl OutcomeSink for RecordingSink {
    fn round_over(&mut self, round: u32, outcome: Outcome) {
        self.rounds.push((round, outcome));
    }

    fn tournament_over(&mut self, winner: Mark, wins: u32) {
        self.tournament = Some((winner, wins));
    }
}

fn seats(x: ScriptedPlayer, o: ScriptedPlayer) -> [Seat; 2] {
    [
        Seat::new(Mark::X, Box::new(x)),
        Seat::new(Mark::O, Box::new(o)),
    ]
}

#[test]
fn test_top_row_win_ends_round_at_turn_five() {
    // X: (0,0), (0,1), (0,2); O: (1,1), (2,2). X completes the top row
    // on the 5th half-turn, not the 9th.
    let x = ScriptedPlayer::new("X", &[(0, 0), (0, 1), (0, 2)]);
    let o = ScriptedPlayer::new("O", &[(1, 1), (2, 2)]);
    let mut seats = seats(x, o);
    let mut renderer = CountingRenderer::default();

    let mut round = Round::new(1);
    let outcome = round.play(&mut seats, &mut renderer).unwrap();

    assert_eq!(outcome, Outcome::Win(Mark::X));
    assert_eq!(*round.turn(), 5);
    assert_eq!(renderer.frames, 5);
}

#[test]
fn test_illegal_proposal_reprompts_without_consuming_turn() {
    // O first proposes (0,0), already taken by X; the round re-asks the
    // same seat and only the legal replacement is applied.
    let rejections = Rc::new(RefCell::new(Vec::new()));
    let x = ScriptedPlayer::new("X", &[(0, 0), (0, 1), (0, 2)]);
    let o = ScriptedPlayer::with_rejection_log(
        "O",
        &[(0, 0), (1, 0), (1, 1)],
        Rc::clone(&rejections),
    );
    let mut seats = seats(x, o);
    let mut renderer = CountingRenderer::default();

    let outcome = Round::new(1).play(&mut seats, &mut renderer).unwrap();

    assert_eq!(outcome, Outcome::Win(Mark::X));
    assert_eq!(*rejections.borrow(), vec![cell(0, 0)]);
    // 5 applied moves rendered; the rejected proposal never reaches the board.
    assert_eq!(renderer.frames, 5);
}

#[test]
fn test_best_of_three_ends_after_two_wins() {
    let x = ScriptedPlayer::new("X", &[(0, 0), (0, 1), (0, 2), (0, 0), (0, 1), (0, 2)]);
    let o = ScriptedPlayer::new("O", &[(1, 0), (1, 1), (1, 0), (1, 1)]);
    let mut tournament = Tournament::new(TournamentLength::BestOfThree, Box::new(x), Box::new(o));
    let mut renderer = CountingRenderer::default();
    let mut sink = RecordingSink::default();

    let winner = tournament.run(&mut renderer, &mut sink).unwrap();

    assert_eq!(winner, Mark::X);
    assert_eq!(*tournament.round(), 2);
    assert_eq!(tournament.seat(Mark::X).wins(), 2);
    assert_eq!(tournament.seat(Mark::O).wins(), 0);
    assert_eq!(
        sink.rounds,
        vec![(1, Outcome::Win(Mark::X)), (2, Outcome::Win(Mark::X))]
    );
    assert_eq!(sink.tournament, Some((Mark::X, 2)));
}

#[test]
fn test_single_length_decides_in_one_round() {
    let x = ScriptedPlayer::new("X", &[(0, 0), (0, 1), (0, 2)]);
    let o = ScriptedPlayer::new("O", &[(1, 0), (1, 1)]);
    let mut tournament = Tournament::new(TournamentLength::Single, Box::new(x), Box::new(o));
    let mut renderer = CountingRenderer::default();
    let mut sink = RecordingSink::default();

    let winner = tournament.run(&mut renderer, &mut sink).unwrap();

    assert_eq!(winner, Mark::X);
    assert_eq!(*tournament.round(), 1);
    assert_eq!(sink.tournament, Some((Mark::X, 1)));
}

#[test]
fn test_draw_round_increments_no_counter() {
    // Round 1 fills the board with no line (X O X / O X X / O X O),
    // then X takes rounds 2 and 3. The draw costs nobody a win.
    let x = ScriptedPlayer::new(
        "X",
        &[
            (0, 0),
            (0, 2),
            (1, 1),
            (1, 2),
            (2, 1), // round 1: draw
            (0, 0),
            (0, 1),
            (0, 2), // round 2: top row
            (0, 0),
            (0, 1),
            (0, 2), // round 3: top row
        ],
    );
    let o = ScriptedPlayer::new(
        "O",
        &[
            (0, 1),
            (1, 0),
            (2, 0),
            (2, 2), // round 1
            (1, 0),
            (1, 1), // round 2
            (1, 0),
            (1, 1), // round 3
        ],
    );
    let mut tournament = Tournament::new(TournamentLength::BestOfThree, Box::new(x), Box::new(o));
    let mut renderer = CountingRenderer::default();
    let mut sink = RecordingSink::default();

    let winner = tournament.run(&mut renderer, &mut sink).unwrap();

    assert_eq!(winner, Mark::X);
    assert_eq!(*tournament.round(), 3);
    assert_eq!(tournament.seat(Mark::X).wins(), 2);
    assert_eq!(tournament.seat(Mark::O).wins(), 0);
    assert_eq!(sink.rounds[0], (1, Outcome::Draw));
}

#[test]
fn test_draw_reached_under_different_permutations() {
    // Two different move orders filling the same lineless board both end
    // in a draw on the 9th half-turn.
    let scripts: [(&[(usize, usize)], &[(usize, usize)]); 2] = [
        (
            &[(0, 0), (0, 2), (1, 1), (1, 2), (2, 1)],
            &[(0, 1), (1, 0), (2, 0), (2, 2)],
        ),
        (
            &[(1, 1), (0, 0), (0, 2), (1, 2), (2, 1)],
            &[(0, 1), (1, 0), (2, 2), (2, 0)],
        ),
    ];
    for (x_moves, o_moves) in scripts {
        let x = ScriptedPlayer::new("X", x_moves);
        let o = ScriptedPlayer::new("O", o_moves);
        let mut seats = seats(x, o);
        let mut renderer = CountingRenderer::default();

        let mut round = Round::new(1);
        let outcome = round.play(&mut seats, &mut renderer).unwrap();

        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(*round.turn(), 9);
    }
}

#[test]
fn test_computer_seat_plays_a_full_tournament() {
    // Two minimax seats: every round of a single-length tournament...
    // perfect play draws forever, so cap via a scripted X that gifts O
    // nothing. Instead, verify a computer O punishes a naive scripted X.
    let x = ScriptedPlayer::new("X", &[(0, 0), (0, 1), (1, 0), (2, 1), (1, 2), (2, 0), (2, 2)]);
    let o = terni::ComputerPlayer::new("Computer");
    let mut tournament =
        Tournament::new(TournamentLength::Single, Box::new(x), Box::new(o));
    let mut renderer = CountingRenderer::default();
    let mut sink = RecordingSink::default();

    let winner = tournament.run(&mut renderer, &mut sink).unwrap();

    // The scripted X never blocks, so the searcher wins the round.
    assert_eq!(winner, Mark::O);
    assert_eq!(tournament.seat(Mark::O).wins(), 1);
}
