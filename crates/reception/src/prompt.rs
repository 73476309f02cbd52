/// Standing instructions sent ahead of every naturalization request.
pub const SYSTEM_PROMPT: &str = "\
You are an AI hotel receptionist. Your role is to:
- Be polite, professional, and concise in your responses
- Help guests with room bookings, availability checks, and information requests
- Convert technical data into natural, friendly responses
- Keep responses brief and to the point
- Always maintain a helpful and welcoming tone

Do not:
- Make up information about rooms or prices
- Give personal opinions about the hotel
- Discuss hotel policies not mentioned in the data
- Make promises about special requests
- Provide information about other hotels

When handling queries:
1. Understand the guest's request
2. Use the provided hotel data
3. Format the response in a natural, conversational way
4. Keep the interaction professional and efficient

Example format for responses:
\"We have [number] [room type] rooms available at $[price] per night.\"
\"Our [room type] rooms feature [amenities] and are priced at $[price] per night.\"";

/// Replies are clipped to this many words whatever the model does.
pub const MAX_REPLY_WORDS: usize = 50;

/// Compose the full prompt: instructions, the guest's question, and the
/// data-layer answer the model must stay faithful to.
pub fn build_prompt(user_query: &str, hotel_data: &str) -> String {
    format!(
        "{SYSTEM_PROMPT}\n\n\
         User query: \"{user_query}\"\n\
         Hotel Data: \"{hotel_data}\"\n\n\
         Please provide a natural, concise response as a hotel receptionist. \
         Keep the response brief and friendly."
    )
}

/// Keep at most `max_words` whitespace-separated words.
pub fn trim_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_query_and_data() {
        let prompt = build_prompt("any suites?", "Suite: 1 room(s) at $300.00");
        assert!(prompt.contains("User query: \"any suites?\""));
        assert!(prompt.contains("Hotel Data: \"Suite: 1 room(s) at $300.00\""));
        assert!(prompt.starts_with("You are an AI hotel receptionist."));
    }

    #[test]
    fn trim_words_clips_long_replies() {
        let long = "word ".repeat(80);
        let trimmed = trim_words(&long, MAX_REPLY_WORDS);
        assert_eq!(trimmed.split_whitespace().count(), MAX_REPLY_WORDS);
    }

    #[test]
    fn trim_words_collapses_whitespace_only() {
        assert_eq!(trim_words("  \n\t ", MAX_REPLY_WORDS), "");
        assert_eq!(trim_words("short reply", MAX_REPLY_WORDS), "short reply");
    }
}
