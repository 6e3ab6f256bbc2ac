/// Parses the guest segment out of an episode title. The segment after the
/// last `" - "` is the guest list, itself split on `" & "` or `", "`.
/// Heuristic text parsing with no escaping; a title containing the delimiter
/// elsewhere is ambiguous and resolves to the rightmost occurrence.
pub fn parse_guests(title: &str) -> Option<Vec<String>> {
    let idx = title.rfind(" - ")?;
    let segment = &title[idx + 3..];
    if segment.trim().is_empty() {
        return None;
    }
    let names = if segment.contains(" & ") || segment.contains(", ") {
        segment
            .replace(" & ", ", ")
            .split(", ")
            .map(str::to_string)
            .collect()
    } else {
        vec![segment.to_string()]
    };
    Some(names)
}

/// Display form of a guest list, as it appears in mail subjects.
pub fn display_guests(guests: &[String]) -> String {
    guests.join(" & ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_guests_with_ampersand() {
        assert_eq!(
            parse_guests("Title - Alice & Bob"),
            Some(vec!["Alice".to_string(), "Bob".to_string()])
        );
    }

    #[test]
    fn test_comma_separated_guests() {
        assert_eq!(
            parse_guests("Season Finale - Alice, Bob, Carol"),
            Some(vec![
                "Alice".to_string(),
                "Bob".to_string(),
                "Carol".to_string()
            ])
        );
    }

    #[test]
    fn test_single_guest() {
        assert_eq!(
            parse_guests("The Big One - Alice"),
            Some(vec!["Alice".to_string()])
        );
    }

    #[test]
    fn test_no_guest_segment() {
        assert_eq!(parse_guests("Title"), None);
    }

    #[test]
    fn test_last_delimiter_wins() {
        assert_eq!(
            parse_guests("Fear - and Loathing - Alice"),
            Some(vec!["Alice".to_string()])
        );
    }

    #[test]
    fn test_trailing_delimiter_yields_none() {
        assert_eq!(parse_guests("Title - "), None);
    }

    #[test]
    fn test_display_joins_with_ampersand() {
        let guests = vec!["Alice".to_string(), "Bob".to_string()];
        assert_eq!(display_guests(&guests), "Alice & Bob");
    }
}
