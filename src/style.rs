//! ANSI escape sequences used to mark up log lines.

pub const DIM: &str = "\x1b[2m";
pub const BRIGHT: &str = "\x1b[1m";
pub const NORMAL: &str = "\x1b[22m";
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const WHITE: &str = "\x1b[37m";

/// Remove every `ESC[...m` run from `text`.
///
/// For consumers that read the log file outside a terminal and want the
/// markup treated as transparent.
pub fn strip_codes(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for esc in chars.by_ref() {
                if esc == 'm' {
                    break;
                }
            }
        } else {
            stripped.push(ch);
        }
    }
    stripped
}

#[cfg(test)]
mod style_tests {
    use super::*;

    #[test]
    fn test_strip_codes() {
        let line = format!("{}12:00:00.000{} - {}{}hello{}", DIM, BRIGHT, NORMAL, BLUE, RESET);
        assert_eq!(strip_codes(&line), "12:00:00.000 - hello");
    }

    #[test]
    fn test_strip_codes_plain_text_untouched() {
        assert_eq!(strip_codes("no markup here"), "no markup here");
    }
}
