//! U.S. state names, their citation abbreviations, and typo suggestion.

/// State (or historical territory) name → short-footnote abbreviation.
const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Alabama", "Ala."),
    ("Alaska", "Alaska"),
    ("Arizona", "Ariz."),
    ("Arkansas", "Ark."),
    ("California", "Calif."),
    ("Colorado", "Colo."),
    ("Connecticut", "Conn."),
    ("Dakota", "Dak."),
    ("Delaware", "Del."),
    ("District of Columbia", "D.C."),
    ("Florida", "Fla."),
    ("Georgia", "Ga."),
    ("Hawaii", "Hawaii"),
    ("Idaho", "Idaho"),
    ("Illinois", "Ill."),
    ("Indian", "Ind. Terr."),
    ("Indiana", "Ind."),
    ("Iowa", "Iowa"),
    ("Kansas", "Kans."),
    ("Kentucky", "Ky."),
    ("Louisiana", "La."),
    ("Maine", "Maine"),
    ("Maryland", "Md."),
    ("Massachusetts", "Mass."),
    ("Michigan", "Mich."),
    ("Minnesota", "Minn."),
    ("Mississippi", "Miss."),
    ("Missouri", "Mo."),
    ("Montana", "Mont."),
    ("Nebraska", "Nebr."),
    ("Nevada", "Nev."),
    ("New Hampshire", "N.H."),
    ("New Jersey", "N.J."),
    ("New Mexico", "N.Mex."),
    ("New York", "N.Y."),
    ("North Carolina", "N.C."),
    ("North Dakota", "N.Dak."),
    ("Ohio", "Ohio"),
    ("Oklahoma", "Okla."),
    ("Oregon", "Oreg."),
    ("Orleans", "Orleans"),
    ("Pennsylvania", "Pa."),
    ("Rhode Island", "R.I."),
    ("South Carolina", "S.C."),
    ("South Dakota", "S.Dak."),
    ("Tennessee", "Tenn."),
    ("Texas", "Tex."),
    ("Utah", "Utah"),
    ("Vermont", "Vt."),
    ("Virginia", "Va."),
    ("Washington", "Wash."),
    ("West Virginia", "W.Va."),
    ("Wisconsin", "Wis."),
    ("Wyoming", "Wyo."),
];

const MAX_TYPO_DISTANCE: usize = 2;

/// Drops a trailing " Territory" so "Dakota Territory" compares as "Dakota".
pub fn normalize_state(state: &str) -> &str {
    let trimmed = state.trim();
    trimmed
        .strip_suffix(" Territory")
        .map(str::trim_end)
        .unwrap_or(trimmed)
}

/// True for a recognized state or territory name (exact case).
pub fn is_valid_state(state: &str) -> bool {
    let normalized = normalize_state(state);
    STATE_ABBREVIATIONS.iter().any(|(name, _)| *name == normalized)
}

/// Short-footnote abbreviation for a state name.
pub fn state_abbreviation(state: &str) -> Option<&'static str> {
    let normalized = normalize_state(state);
    STATE_ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, abbrev)| *abbrev)
}

/// Closest valid state within the typo threshold. Ties resolve to the
/// alphabetically first name.
pub fn suggest_state(input: &str) -> Option<&'static str> {
    let candidate = normalize_state(input);
    let len = candidate.chars().count();
    STATE_ABBREVIATIONS
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| name.chars().count().abs_diff(len) <= MAX_TYPO_DISTANCE)
        .map(|name| (levenshtein(candidate, name), name))
        .filter(|(distance, _)| *distance > 0 && *distance <= MAX_TYPO_DISTANCE)
        .min()
        .map(|(_, name)| name)
}

/// Classic edit distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate().take(m + 1) {
        row[0] = i;
    }
    for (j, val) in dp[0].iter_mut().enumerate().take(n + 1) {
        *val = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[m][n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn territories_normalize_to_their_base_name() {
        assert_eq!(normalize_state("Dakota Territory"), "Dakota");
        assert!(is_valid_state("Dakota Territory"));
        assert!(is_valid_state("Ohio"));
        assert!(!is_valid_state("ohio"));
        assert!(!is_valid_state("Calfornia"));
    }

    #[test]
    fn abbreviations() {
        assert_eq!(state_abbreviation("Virginia"), Some("Va."));
        assert_eq!(state_abbreviation("Ohio"), Some("Ohio"));
        assert_eq!(state_abbreviation("West Virginia"), Some("W.Va."));
        assert_eq!(state_abbreviation("Atlantis"), None);
    }

    #[test]
    fn suggests_closest_state() {
        assert_eq!(suggest_state("Calfornia"), Some("California"));
        assert_eq!(suggest_state("Pensylvania"), Some("Pennsylvania"));
        assert_eq!(suggest_state("Ohoi"), Some("Ohio"));
        assert_eq!(suggest_state("Stark"), None);
        assert_eq!(suggest_state("Ohio"), None);
    }

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("Calfornia", "California"), 1);
    }
}
