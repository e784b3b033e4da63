/// Known debug builds, keyed by the published `checksum1` value of each
/// release. Detection is advisory labeling only; nothing else branches
/// on it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildVariant {
    MasterQuestDebug,
    GamecubeDebug0313,
    GamecubeDebug0321,
}

impl BuildVariant {
    pub fn detect(checksum1: u32) -> Option<Self> {
        match checksum1 {
            0x917D18F6 => Some(Self::MasterQuestDebug),
            0x87121EFE => Some(Self::GamecubeDebug0313),
            0x871E1C92 => Some(Self::GamecubeDebug0321),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MasterQuestDebug => "Master Quest Debug",
            Self::GamecubeDebug0313 => "GameCube Debug (03-13-2002 build)",
            Self::GamecubeDebug0321 => "GameCube Debug (03-21-2002 build)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_checksums() {
        assert_eq!(
            BuildVariant::detect(0x917D18F6),
            Some(BuildVariant::MasterQuestDebug)
        );
        assert_eq!(
            BuildVariant::detect(0x87121EFE),
            Some(BuildVariant::GamecubeDebug0313)
        );
        assert_eq!(
            BuildVariant::detect(0x871E1C92),
            Some(BuildVariant::GamecubeDebug0321)
        );
    }

    #[test]
    fn unknown_checksum_is_not_an_error() {
        assert_eq!(BuildVariant::detect(0x00000000), None);
        assert_eq!(BuildVariant::detect(0xDEADBEEF), None);
        // Off-by-one neighbors of a known value must not match.
        assert_eq!(BuildVariant::detect(0x917D18F5), None);
        assert_eq!(BuildVariant::detect(0x917D18F7), None);
    }

    #[test]
    fn labels() {
        assert_eq!(
            BuildVariant::MasterQuestDebug.label(),
            "Master Quest Debug"
        );
        assert_eq!(
            BuildVariant::GamecubeDebug0313.label(),
            "GameCube Debug (03-13-2002 build)"
        );
        assert_eq!(
            BuildVariant::GamecubeDebug0321.label(),
            "GameCube Debug (03-21-2002 build)"
        );
    }
}
