use crate::prelude::*;

pub struct Answer;

pub type Score = u32;

/// A shape thrown in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// How a round ends for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

/// How the second column of a guide line is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The column names the player's move (`X`, `Y` or `Z`).
    ByChoice,
    /// The column names the outcome to steer for (`X`, `Y` or `Z`).
    ByOutcome,
}

lazy_static! {
    /// Response to throw against each opponent move for each desired
    /// outcome. Total over all nine pairings.
    static ref RESPONSES: HashMap<(Move, Outcome), Move> = [
        ((Move::Rock, Outcome::Loss), Move::Scissors),
        ((Move::Rock, Outcome::Draw), Move::Rock),
        ((Move::Rock, Outcome::Win), Move::Paper),
        ((Move::Paper, Outcome::Loss), Move::Rock),
        ((Move::Paper, Outcome::Draw), Move::Paper),
        ((Move::Paper, Outcome::Win), Move::Scissors),
        ((Move::Scissors, Outcome::Loss), Move::Paper),
        ((Move::Scissors, Outcome::Draw), Move::Scissors),
        ((Move::Scissors, Outcome::Win), Move::Rock),
    ]
    .into_iter()
    .collect();
}

impl Move {
    /// Every move, in selection-score order.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    pub fn from_opponent_code(code: &str) -> Result<Self, ParseError> {
        match code {
            "A" => Ok(Self::Rock),
            "B" => Ok(Self::Paper),
            "C" => Ok(Self::Scissors),
            _ => Err(ParseError::code(code, "opponent move")),
        }
    }

    pub fn from_player_code(code: &str) -> Result<Self, ParseError> {
        match code {
            "X" => Ok(Self::Rock),
            "Y" => Ok(Self::Paper),
            "Z" => Ok(Self::Scissors),
            _ => Err(ParseError::code(code, "player move")),
        }
    }

    /// `true` when `self` wins a round against `other`.
    pub fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors)
                | (Self::Paper, Self::Rock)
                | (Self::Scissors, Self::Paper)
        )
    }

    /// How a round ends for `self` against `opponent`.
    pub fn against(self, opponent: Self) -> Outcome {
        if self.beats(opponent) {
            Outcome::Win
        } else if opponent.beats(self) {
            Outcome::Loss
        } else {
            Outcome::Draw
        }
    }

    /// The tabled response that ends a round against `opponent` with
    /// `outcome`.
    pub fn for_outcome(
        outcome: Outcome,
        opponent: Self,
    ) -> Result<Self, LookupError> {
        RESPONSES
            .get(&(opponent, outcome))
            .copied()
            .ok_or(LookupError { opponent, outcome })
    }

    /// Score for having selected this shape.
    pub fn selection_score(self) -> Score {
        match self {
            Self::Rock => 1,
            Self::Paper => 2,
            Self::Scissors => 3,
        }
    }
}

impl Outcome {
    pub fn from_code(code: &str) -> Result<Self, ParseError> {
        match code {
            "X" => Ok(Self::Loss),
            "Y" => Ok(Self::Draw),
            "Z" => Ok(Self::Win),
            _ => Err(ParseError::code(code, "desired outcome")),
        }
    }

    /// Score for how the round ended.
    pub fn score(self) -> Score {
        match self {
            Self::Loss => 0,
            Self::Draw => 3,
            Self::Win => 6,
        }
    }
}

/// The response table lists no move for this pairing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no response against {opponent:?} that ends in a {outcome:?}")]
pub struct LookupError {
    pub opponent: Move,
    pub outcome: Outcome,
}

/// Why a single guide line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// A rejected line, located within its guide.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct LoadError {
    pub line: usize,
    pub source: RoundError,
}

/// One round: what the opponent threw against what the player threw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    opponent: Move,
    player: Move,
}

impl Round {
    pub fn new(opponent: Move, player: Move) -> Self {
        Self { opponent, player }
    }

    /// Decode one `delimiter`-separated line under `mode`.
    ///
    /// The first column is always the opponent's move. The second is the
    /// player's move in [`Mode::ByChoice`] and the desired outcome in
    /// [`Mode::ByOutcome`].
    pub fn parse(
        line: &str,
        delimiter: &str,
        mode: Mode,
    ) -> Result<Self, RoundError> {
        let fields = line.trim().split(delimiter).collect_vec();
        let (opponent_code, response_code) = match fields[..] {
            [opponent, response] => (opponent, response),
            _ => return Err(ParseError::fields(2, fields.len()).into()),
        };

        let opponent = Move::from_opponent_code(opponent_code)?;
        let player = match mode {
            Mode::ByChoice => Move::from_player_code(response_code)?,
            Mode::ByOutcome => {
                let outcome = Outcome::from_code(response_code)?;
                Move::for_outcome(outcome, opponent)?
            }
        };

        Ok(Self { opponent, player })
    }

    /// Shape score plus outcome score.
    pub fn score(self) -> Score {
        self.player.selection_score()
            + self.player.against(self.opponent).score()
    }
}

/// A whole strategy guide, every round in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    rounds: Vec<Round>,
}

impl Game {
    /// Decode one round per line. The first bad line fails the whole
    /// guide; no partial game is produced.
    pub fn parse(
        text: &str,
        delimiter: &str,
        mode: Mode,
    ) -> Result<Self, LoadError> {
        let rounds = text
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                Round::parse(line, delimiter, mode)
                    .map_err(|source| LoadError { line: idx + 1, source })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { rounds })
    }

    /// Read and decode the guide at `path`.
    pub fn load<P: AsRef<Path>>(
        path: P,
        delimiter: &str,
        mode: Mode,
    ) -> Result<Self> {
        let path = path.as_ref();
        let text = parse_string(file_reader(path)?)?;
        Self::parse(&text, delimiter, mode).with_context(|| {
            format!("invalid strategy guide in {}", path.display())
        })
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Total score over every round.
    pub fn score(&self) -> Score {
        self.rounds.iter().map(|round| round.score()).sum()
    }
}

impl Solver for Answer {
    type Input = (Game, Game);
    type Output1 = Score;
    type Output2 = Score;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        let text = parse_string(r)?;
        let by_choice = Game::parse(&text, " ", Mode::ByChoice)?;
        let by_outcome = Game::parse(&text, " ", Mode::ByOutcome)?;
        Ok((by_choice, by_outcome))
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input.0.score()
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input.1.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, Arbitrary, Gen};
    use std::io::Write;

    const SAMPLE: &str = r"A Y
B X
C Z";

    impl Arbitrary for Move {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(&Self::ALL).unwrap()
        }
    }

    impl Arbitrary for Outcome {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(&[Self::Loss, Self::Draw, Self::Win]).unwrap()
        }
    }

    fn opponent_code(shape: Move) -> &'static str {
        match shape {
            Move::Rock => "A",
            Move::Paper => "B",
            Move::Scissors => "C",
        }
    }

    fn outcome_code(outcome: Outcome) -> &'static str {
        match outcome {
            Outcome::Loss => "X",
            Outcome::Draw => "Y",
            Outcome::Win => "Z",
        }
    }

    #[test]
    fn classifies_every_pairing() {
        let cases = [
            (Move::Rock, Move::Rock, Outcome::Draw),
            (Move::Rock, Move::Paper, Outcome::Loss),
            (Move::Rock, Move::Scissors, Outcome::Win),
            (Move::Paper, Move::Rock, Outcome::Win),
            (Move::Paper, Move::Paper, Outcome::Draw),
            (Move::Paper, Move::Scissors, Outcome::Loss),
            (Move::Scissors, Move::Rock, Outcome::Loss),
            (Move::Scissors, Move::Paper, Outcome::Win),
            (Move::Scissors, Move::Scissors, Outcome::Draw),
        ];
        for (player, opponent, expected) in cases {
            assert_eq!(player.against(opponent), expected);
        }
    }

    #[test]
    fn beats_is_antisymmetric() {
        for player in Move::ALL {
            for opponent in Move::ALL {
                assert!(!(player.beats(opponent) && opponent.beats(player)));
                if player == opponent {
                    assert_eq!(player.against(opponent), Outcome::Draw);
                } else {
                    assert!(player.beats(opponent) || opponent.beats(player));
                }
            }
        }
    }

    #[test]
    fn round_scores_stay_in_range() {
        for player in Move::ALL {
            for opponent in Move::ALL {
                let score = Round::new(opponent, player).score();
                assert!((1..=9).contains(&score));
            }
        }
    }

    #[test]
    fn response_table_agrees_with_the_rules() {
        for opponent in Move::ALL {
            for outcome in [Outcome::Loss, Outcome::Draw, Outcome::Win] {
                let response = Move::for_outcome(outcome, opponent).unwrap();
                assert_eq!(response.against(opponent), outcome);
            }
        }
    }

    #[test]
    fn modes_read_the_second_column_differently() {
        let choice = Round::parse("A Y", " ", Mode::ByChoice).unwrap();
        let outcome = Round::parse("A Y", " ", Mode::ByOutcome).unwrap();
        assert_eq!(choice, Round::new(Move::Rock, Move::Paper));
        assert_eq!(outcome, Round::new(Move::Rock, Move::Rock));
        assert_eq!(choice.score(), 8);
        assert_eq!(outcome.score(), 4);
    }

    #[test]
    fn scores_the_sample_by_choice() {
        let game = Game::parse(SAMPLE, " ", Mode::ByChoice).unwrap();
        let scores =
            game.rounds().iter().map(|round| round.score()).collect_vec();
        assert_eq!(scores, vec![8, 1, 6]);
        assert_eq!(game.score(), 15);
    }

    #[test]
    fn scores_the_sample_by_outcome() {
        let game = Game::parse(SAMPLE, " ", Mode::ByOutcome).unwrap();
        let scores =
            game.rounds().iter().map(|round| round.score()).collect_vec();
        assert_eq!(scores, vec![4, 1, 7]);
        assert_eq!(game.score(), 12);
    }

    #[test]
    fn wrong_field_count_is_reported() {
        let err = Round::parse("A", " ", Mode::ByChoice).unwrap_err();
        assert_eq!(err, RoundError::Parse(ParseError::fields(2, 1)));
        let err = Round::parse("A Y Z", " ", Mode::ByChoice).unwrap_err();
        assert_eq!(err, RoundError::Parse(ParseError::fields(2, 3)));
    }

    #[test]
    fn unknown_codes_are_reported() {
        let err = Round::parse("D Y", " ", Mode::ByChoice).unwrap_err();
        assert_eq!(
            err,
            RoundError::Parse(ParseError::code("D", "opponent move")),
        );
        let err = Round::parse("A Q", " ", Mode::ByChoice).unwrap_err();
        assert_eq!(
            err,
            RoundError::Parse(ParseError::code("Q", "player move")),
        );
        let err = Round::parse("A Q", " ", Mode::ByOutcome).unwrap_err();
        assert_eq!(
            err,
            RoundError::Parse(ParseError::code("Q", "desired outcome")),
        );
    }

    #[test]
    fn bad_line_reports_its_number_and_poisons_the_guide() {
        let err =
            Game::parse("A Y\nB W\nC Z", " ", Mode::ByChoice).unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(
            err.to_string(),
            r#"line 2: "W" is not a valid player move"#,
        );
    }

    #[test]
    fn honors_custom_delimiters() {
        let round = Round::parse("B,Z", ",", Mode::ByChoice).unwrap();
        assert_eq!(round, Round::new(Move::Paper, Move::Scissors));

        let err = Round::parse("B,Z", " ", Mode::ByChoice).unwrap_err();
        assert_eq!(err, RoundError::Parse(ParseError::fields(2, 1)));
    }

    #[test]
    fn edge_whitespace_on_a_line_is_tolerated() {
        let round = Round::parse("  A Y\r", " ", Mode::ByChoice).unwrap();
        assert_eq!(round, Round::new(Move::Rock, Move::Paper));
        // Interior blank lines still fail: one empty field is not two.
        let err = Round::parse("", " ", Mode::ByChoice).unwrap_err();
        assert_eq!(err, RoundError::Parse(ParseError::fields(2, 1)));
    }

    #[test]
    fn empty_guide_scores_zero() {
        let game = Game::parse("", " ", Mode::ByChoice).unwrap();
        assert!(game.rounds().is_empty());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "A Y\nB X\nC Z\n").unwrap();
        let game = Game::load(file.path(), " ", Mode::ByChoice).unwrap();
        assert_eq!(game.score(), 15);
    }

    #[test]
    fn solves_both_parts_from_one_reading() {
        let input = Answer.parse_input(SAMPLE.as_bytes()).unwrap();
        assert_eq!(Answer.solve_first(&input), 15);
        assert_eq!(Answer.solve_second(&input), 12);
    }

    quickcheck! {
        fn steered_scores_add_up(pairs: Vec<(Move, Outcome)>) -> bool {
            let text = pairs
                .iter()
                .map(|&(opponent, outcome)| {
                    format!(
                        "{} {}",
                        opponent_code(opponent),
                        outcome_code(outcome)
                    )
                })
                .join("\n");
            let game = Game::parse(&text, " ", Mode::ByOutcome).unwrap();

            let expected: Score = pairs
                .iter()
                .map(|&(opponent, outcome)| {
                    let response =
                        Move::for_outcome(outcome, opponent).unwrap();
                    response.selection_score() + outcome.score()
                })
                .sum();
            game.score() == expected
        }
    }
}
