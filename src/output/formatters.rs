//! Formatting utilities for terminal output

use crate::core::{EmojiPalette, Guess, RatingLetter};
use colored::{ColoredString, Colorize};

/// Format a rated row as emoji squares
#[must_use]
pub fn rating_to_emoji(guess: &Guess, palette: EmojiPalette) -> String {
    guess.to_emoji(palette)
}

/// Color one letter box the way its rating marker would
#[must_use]
pub fn colored_letter(letter: char, rating: RatingLetter) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match rating {
        RatingLetter::Correct => text.black().on_green().bold(),
        RatingLetter::Misplaced => text.black().on_yellow().bold(),
        RatingLetter::Wrong => text.white().on_bright_black(),
    }
}

/// Color every letter of `word` by its rating
///
/// Letters beyond the rating length are left plain.
#[must_use]
pub fn colored_word(word: &str, guess: &Guess) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| match guess.ratings().get(i) {
            Some(&rating) => colored_letter(c, rating).to_string(),
            None => format!(" {c} "),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_to_emoji_all_wrong() {
        let guess: Guess = "WWWWW".parse().unwrap();
        assert_eq!(rating_to_emoji(&guess, EmojiPalette::STANDARD), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn rating_to_emoji_nerdle() {
        let guess: Guess = "CMMWWCCC".parse().unwrap();
        assert_eq!(rating_to_emoji(&guess, EmojiPalette::NERDLE), "🟩🟪🟪⬜⬜🟩🟩🟩");
    }

    #[test]
    fn colored_word_keeps_letters() {
        colored::control::set_override(false);
        let guess: Guess = "CM".parse().unwrap();
        assert_eq!(colored_word("abc", &guess), " A  B  c ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
