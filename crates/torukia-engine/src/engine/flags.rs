use std::fmt;

/// Subsystem switches fixed when the engine is constructed.
///
/// The integer encoding (`bits`/`from_bits`) is kept for embedding code that
/// stores flags as a plain mask: `no_video = 1`, `no_sound = 2`,
/// `no_input = 4`, `no_logic = 8`, `opengl_context = 16`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct InitFlags {
    pub no_video: bool,
    pub no_sound: bool,
    pub no_input: bool,
    pub no_logic: bool,
    pub opengl_context: bool,
}

impl InitFlags {
    pub const NO_VIDEO: u32 = 1;
    pub const NO_SOUND: u32 = 2;
    pub const NO_INPUT: u32 = 4;
    pub const NO_LOGIC: u32 = 8;
    pub const OPENGL_CONTEXT: u32 = 16;

    pub const fn empty() -> Self {
        Self {
            no_video: false,
            no_sound: false,
            no_input: false,
            no_logic: false,
            opengl_context: false,
        }
    }

    pub fn bits(self) -> u32 {
        let mut bits = 0;
        for (set, bit) in self.entries() {
            if set {
                bits |= bit;
            }
        }
        bits
    }

    /// Decodes a plain mask. Unknown bits are ignored.
    pub fn from_bits(bits: u32) -> Self {
        Self {
            no_video: bits & Self::NO_VIDEO != 0,
            no_sound: bits & Self::NO_SOUND != 0,
            no_input: bits & Self::NO_INPUT != 0,
            no_logic: bits & Self::NO_LOGIC != 0,
            opengl_context: bits & Self::OPENGL_CONTEXT != 0,
        }
    }

    fn entries(self) -> [(bool, u32); 5] {
        [
            (self.no_video, Self::NO_VIDEO),
            (self.no_sound, Self::NO_SOUND),
            (self.no_input, Self::NO_INPUT),
            (self.no_logic, Self::NO_LOGIC),
            (self.opengl_context, Self::OPENGL_CONTEXT),
        ]
    }
}

/// One line per set flag.
impl fmt::Display for InitFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = [
            (self.no_video, "No video set."),
            (self.no_sound, "No sound set."),
            (self.no_input, "No input set."),
            (self.no_logic, "No logic set."),
            (self.opengl_context, "OpenGL is set."),
        ];
        for (_, line) in lines.iter().filter(|(set, _)| *set) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Runtime condition raised while the engine runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContextFlag {
    /// Engine-level failure, e.g. a renderer reporting a failed draw.
    ErrorGeneral,
    /// `App::logic` returned an error.
    ErrorUserCode,
}

impl ContextFlag {
    pub const ALL: [ContextFlag; 2] = [ContextFlag::ErrorGeneral, ContextFlag::ErrorUserCode];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// Mask bit in the plain-integer encoding (`ErrorGeneral = 1`, `ErrorUserCode = 2`).
    #[inline]
    pub const fn bit(self) -> u32 {
        1 << self.index()
    }

    fn describe(self) -> &'static str {
        match self {
            ContextFlag::ErrorGeneral => "Error.",
            ContextFlag::ErrorUserCode => "User code fail.",
        }
    }
}

/// Mutable runtime flags, indexed by [`ContextFlag`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContextFlags([bool; ContextFlag::ALL.len()]);

impl ContextFlags {
    #[inline]
    pub fn get(&self, flag: ContextFlag) -> bool {
        self.0[flag.index()]
    }

    #[inline]
    pub fn set(&mut self, flag: ContextFlag, value: bool) {
        self.0[flag.index()] = value;
    }

    /// Whether any flag is raised.
    #[inline]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&f| f)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0 = Default::default();
    }

    pub fn bits(&self) -> u32 {
        ContextFlag::ALL
            .iter()
            .filter(|f| self.get(**f))
            .fold(0, |acc, f| acc | f.bit())
    }

    /// Replaces every flag from a plain mask. Unknown bits are ignored.
    pub fn set_bits(&mut self, bits: u32) {
        for flag in ContextFlag::ALL {
            self.set(flag, bits & flag.bit() != 0);
        }
    }
}

/// One line per raised flag.
impl fmt::Display for ContextFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in ContextFlag::ALL.iter().filter(|flag| self.get(**flag)) {
            writeln!(f, "{}", flag.describe())?;
        }
        Ok(())
    }
}
