/// Returns the last 4 characters of a submitted card number. Everything
/// before them is discarded and never reaches storage. Inputs shorter than
/// 4 characters come back whole.
pub fn last_four(card_number: &str) -> &str {
    let len = card_number.chars().count();
    match card_number.char_indices().nth(len.saturating_sub(4)) {
        Some((idx, _)) => &card_number[idx..],
        None => card_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_a_full_pan() {
        assert_eq!(last_four("4111111111111111"), "1111");
        assert_eq!(last_four("5500005555555559"), "5559");
    }

    #[test]
    fn keeps_short_inputs_whole() {
        assert_eq!(last_four("123"), "123");
        assert_eq!(last_four(""), "");
    }

    #[test]
    fn exactly_four_is_unchanged() {
        assert_eq!(last_four("9876"), "9876");
    }

    #[test]
    fn length_is_measured_in_characters() {
        // Submitted numbers sometimes arrive with separators.
        assert_eq!(last_four("4111-1111"), "1111");
    }
}
