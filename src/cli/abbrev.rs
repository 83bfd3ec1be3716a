// Command names and their one-letter aliases

/// Canonical command names with their alias
pub const COMMAND_ALIASES: &[(&str, &str)] = &[
    ("task", "t"),
    ("delete", "d"),
    ("check", "c"),
    ("move", "m"),
    ("edit", "e"),
    ("prioritize", "p"),
    ("help", "h"),
];

/// Resolve a command name or alias to its canonical name.
/// Matching is exact and case-sensitive; prefixes are not expanded.
pub fn canonical_command(name: &str) -> Option<&'static str> {
    COMMAND_ALIASES
        .iter()
        .find(|(full, alias)| *full == name || *alias == name)
        .map(|(full, _)| *full)
}
