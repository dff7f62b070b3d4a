use std::fmt;

/// A named interval above a root: a semitone count for pitch-class
/// arithmetic plus a generic size (letter distance) carried by the
/// trailing numeral of the name.
///
/// The two are deliberately independent: a diminished fifth and an
/// augmented fourth are both six semitones but land on different
/// letters, and tonal spelling is defined by letter first, accidental
/// second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    name: &'static str,
    semitones: u8,
}

impl Interval {
    pub const MINOR_THIRD: Interval = Interval::new("m3", 3);
    pub const MAJOR_THIRD: Interval = Interval::new("M3", 4);
    pub const DIMINISHED_FIFTH: Interval = Interval::new("b5", 6);
    pub const PERFECT_FIFTH: Interval = Interval::new("P5", 7);
    pub const AUGMENTED_FIFTH: Interval = Interval::new("#5", 8);
    pub const DIMINISHED_SEVENTH: Interval = Interval::new("bb7", 9);
    pub const MINOR_SEVENTH: Interval = Interval::new("m7", 10);
    pub const MAJOR_SEVENTH: Interval = Interval::new("M7", 11);

    /// Every registered interval, in ascending semitone order.
    pub const ALL: [Interval; 8] = [
        Interval::MINOR_THIRD,
        Interval::MAJOR_THIRD,
        Interval::DIMINISHED_FIFTH,
        Interval::PERFECT_FIFTH,
        Interval::AUGMENTED_FIFTH,
        Interval::DIMINISHED_SEVENTH,
        Interval::MINOR_SEVENTH,
        Interval::MAJOR_SEVENTH,
    ];

    const fn new(name: &'static str, semitones: u8) -> Self {
        Interval { name, semitones }
    }

    /// Look up an interval by its registered name.
    pub fn lookup(name: &str) -> Option<Interval> {
        Self::ALL.iter().copied().find(|i| i.name == name)
    }

    pub fn name(self) -> &'static str {
        self.name
    }

    pub fn semitones(self) -> u8 {
        self.semitones
    }

    /// The generic (letter) size: the trailing digit run of the name,
    /// ignoring any accidental prefix ("bb7" -> 7). The registered
    /// tables stay within a single octave, so sizes are single-digit.
    pub fn generic_size(self) -> usize {
        self.name
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .expect("interval names end in their generic size")
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
