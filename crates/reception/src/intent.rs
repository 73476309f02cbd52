use hotel_core::RoomType;

/// What the guest is asking for.
///
/// Parsed with keyword rules; the match order below is load-bearing, e.g.
/// "book the cheapest room" is a booking request, not a price question.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    BookRoom { room_type: Option<RoomType> },
    Confirm,
    Decline,
    CheckIn,
    CheckOut,
    Availability { room_type: Option<RoomType> },
    Price { cheapest: bool },
    Features,
    Info,
    Help,
}

/// Classify one line of guest input.
pub fn parse(input: &str) -> Intent {
    let text = input.trim().to_lowercase();

    if text.contains("book") {
        return Intent::BookRoom {
            room_type: find_room_type(&text),
        };
    }
    if matches!(text.as_str(), "yes" | "confirm" | "okay" | "sure") {
        return Intent::Confirm;
    }
    if matches!(text.as_str(), "no" | "cancel") {
        return Intent::Decline;
    }
    if has_check_phrase(&text, "in") {
        return Intent::CheckIn;
    }
    if has_check_phrase(&text, "out") {
        return Intent::CheckOut;
    }
    if contains_phrase(&text, &["available", "vacancy", "free"]) {
        return Intent::Availability {
            room_type: find_room_type(&text),
        };
    }
    if contains_phrase(&text, &["price", "cost", "rate", "cheap"]) {
        return Intent::Price {
            cheapest: text.contains("cheapest"),
        };
    }
    if contains_phrase(&text, &["feature", "amenity", "include"]) {
        return Intent::Features;
    }
    if contains_phrase(&text, &["info", "detail"]) {
        return Intent::Info;
    }

    Intent::Help
}

fn contains_phrase(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}

/// Match "check in" / "check-in" / "checkin" (and the "out" variants) on word
/// boundaries, so "checking availability" is not a check-in.
fn has_check_phrase(text: &str, direction: &str) -> bool {
    let normalized = text.replace('-', " ");
    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .collect();

    let joined = format!("check{direction}");
    tokens.iter().any(|token| *token == joined)
        || tokens
            .windows(2)
            .any(|pair| pair[0] == "check" && pair[1] == direction)
}

fn find_room_type(text: &str) -> Option<RoomType> {
    RoomType::ALL
        .into_iter()
        .find(|room_type| text.contains(&room_type.to_string().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_wins_over_everything_else() {
        assert_eq!(
            parse("I'd like to book a suite, whatever the price"),
            Intent::BookRoom {
                room_type: Some(RoomType::Suite)
            }
        );
        assert_eq!(parse("book me in"), Intent::BookRoom { room_type: None });
    }

    #[test]
    fn confirmation_words_must_stand_alone() {
        assert_eq!(parse("yes"), Intent::Confirm);
        assert_eq!(parse("  Sure  "), Intent::Confirm);
        // "yes" inside a sentence is not a confirmation
        assert_eq!(parse("yes there are details I want"), Intent::Info);
    }

    #[test]
    fn decline_words() {
        assert_eq!(parse("no"), Intent::Decline);
        assert_eq!(parse("cancel"), Intent::Decline);
    }

    #[test]
    fn availability_with_and_without_type() {
        assert_eq!(
            parse("is a double free tonight?"),
            Intent::Availability {
                room_type: Some(RoomType::Double)
            }
        );
        assert_eq!(
            parse("any vacancy?"),
            Intent::Availability { room_type: None }
        );
    }

    #[test]
    fn price_questions() {
        assert_eq!(parse("what do rooms cost?"), Intent::Price { cheapest: false });
        assert_eq!(
            parse("what's the cheapest option"),
            Intent::Price { cheapest: true }
        );
    }

    #[test]
    fn features_and_info() {
        assert_eq!(parse("what amenities are included?"), Intent::Features);
        assert_eq!(parse("give me the details"), Intent::Info);
    }

    #[test]
    fn check_in_and_out_variants() {
        assert_eq!(parse("I'd like to check in please"), Intent::CheckIn);
        assert_eq!(parse("checkout time!"), Intent::CheckOut);
        assert_eq!(parse("ready for check-out"), Intent::CheckOut);
    }

    #[test]
    fn checking_something_is_not_a_check_in() {
        assert_eq!(
            parse("checking what rooms are free"),
            Intent::Availability { room_type: None }
        );
    }

    #[test]
    fn everything_else_is_help() {
        assert_eq!(parse("hello there"), Intent::Help);
        assert_eq!(parse(""), Intent::Help);
    }
}
