use rand::Rng;

/// Direction the snake is travelling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Unit vector `(dx, dy)`; rows grow downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Heading that results from requesting `turn` while travelling `self`.
    ///
    /// Only quarter turns are listed. Asking for the current heading or its
    /// reverse yields `None`, so the snake can never fold back onto its neck.
    pub fn transition(self, turn: Heading) -> Option<Heading> {
        use Heading::*;
        match (self, turn) {
            (Up, Left) => Some(Left),
            (Up, Right) => Some(Right),
            (Down, Left) => Some(Left),
            (Down, Right) => Some(Right),
            (Left, Up) => Some(Up),
            (Left, Down) => Some(Down),
            (Right, Up) => Some(Up),
            (Right, Down) => Some(Down),
            _ => None,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Heading {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_transition_table_has_eight_entries() {
        let valid = Heading::ALL
            .iter()
            .flat_map(|h| Heading::ALL.iter().map(move |t| (*h, *t)))
            .filter(|(h, t)| h.transition(*t).is_some())
            .count();
        assert_eq!(valid, 8);
    }

    #[test]
    fn test_transition_never_reverses() {
        for heading in Heading::ALL {
            for turn in Heading::ALL {
                if let Some(next) = heading.transition(turn) {
                    assert_ne!(next, heading.opposite());
                    assert_ne!(next, heading);
                    assert_eq!(next, turn);
                }
            }
        }
    }

    #[test]
    fn test_same_and_reverse_are_rejected() {
        for heading in Heading::ALL {
            assert_eq!(heading.transition(heading), None);
            assert_eq!(heading.transition(heading.opposite()), None);
        }
    }

    #[test]
    fn test_delta() {
        assert_eq!(Heading::Up.delta(), (0, -1));
        assert_eq!(Heading::Down.delta(), (0, 1));
        assert_eq!(Heading::Left.delta(), (-1, 0));
        assert_eq!(Heading::Right.delta(), (1, 0));
    }

    #[test]
    fn test_random_covers_all_headings() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Heading::random(&mut rng));
        }
        assert_eq!(seen.len(), 4);
    }
}
