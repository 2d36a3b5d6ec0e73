//! Reading-time estimates.

use std::num::NonZeroU32;

/// Reading speed assumed when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: NonZeroU32 = match NonZeroU32::new(200) {
    Some(wpm) => wpm,
    None => unreachable!(),
};

/// Minutes needed to read `content` at 200 words per minute, never less than one.
#[must_use]
pub fn calculate_reading_time(content: &str) -> u32 {
    reading_time_with(content, DEFAULT_WORDS_PER_MINUTE)
}

/// Minutes needed to read `content` at the given speed, rounded up, never less than one.
///
/// Words are whitespace-separated runs; markup inside `content` counts as words too.
#[must_use]
pub fn reading_time_with(content: &str, words_per_minute: NonZeroU32) -> u32 {
    let words = u32::try_from(content.split_whitespace().count()).unwrap_or(u32::MAX);
    words.div_ceil(words_per_minute.get()).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn empty_content_takes_a_minute() {
        assert_eq!(calculate_reading_time(""), 1);
        assert_eq!(calculate_reading_time("   \n\t "), 1);
    }

    #[test]
    fn rounds_up() {
        assert_eq!(calculate_reading_time(&words(200)), 1);
        assert_eq!(calculate_reading_time(&words(201)), 2);
        assert_eq!(calculate_reading_time(&words(400)), 2);
        assert_eq!(calculate_reading_time(&words(401)), 3);
    }

    #[test]
    fn custom_speed() {
        let wpm = NonZeroU32::new(100).unwrap();
        assert_eq!(reading_time_with(&words(250), wpm), 3);
    }
}
