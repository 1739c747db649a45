// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Determine a terminal's [`Profile`] heuristically from its environment variables.
//!
//! All functions take an [`Environ`] so they can run against a fixed set of variables.
//! The values that are consulted:
//!
//! | Variable             | Effect                                                      |
//! |----------------------|-------------------------------------------------------------|
//! | `CI`                 | non empty means the stream is not a TTY                     |
//! | `GOOGLE_CLOUD_SHELL` | `true` means [`Profile::TrueColor`]                         |
//! | `COLORTERM`          | `truecolor`/`24bit` or `yes`/`true`                          |
//! | `TERM`               | allowlisted names, `linux`/`xterm`, `*256color*`, `*color*` |
//! | `TERM_PROGRAM`       | `tmux` lifts the `screen*` cap on true color                |
//! | `NO_COLOR`           | non empty disables color                                    |
//! | `CLICOLOR`           | `0` disables color unless forced                            |
//! | `CLICOLOR_FORCE`     | non empty and not `0` forces at least [`Profile::Ansi`]     |

use crate::{DEBUG_TERMENV_DETECT, Environ, Profile};

/// `TERM` values of terminals that are known to support 24 bit color.
pub const TRUE_COLOR_TERMS: [&str; 6] = [
    "alacritty",
    "contour",
    "rio",
    "wezterm",
    "xterm-ghostty",
    "xterm-kitty",
];

/// Raw capability detection. Ignores `NO_COLOR` and friends, see
/// [`env_color_profile()`] for that.
#[must_use]
pub fn detect_color_profile(env: &dyn Environ, is_tty: bool) -> Profile {
    let it = helpers::detect(env, is_tty);

    DEBUG_TERMENV_DETECT.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Detected color profile",
            profile = %it,
            is_tty = ?is_tty,
            term = %env.getenv("TERM"),
            colorterm = %env.getenv("COLORTERM"),
        );
    });

    it
}

/// Whether the user asked for no color, via `NO_COLOR` (any non empty value) or
/// `CLICOLOR=0` (ignored when [`cli_color_forced()`]).
#[must_use]
pub fn env_no_color(env: &dyn Environ) -> bool {
    let no_color = !env.getenv("NO_COLOR").is_empty();
    let cli_color_off = env.getenv("CLICOLOR") == "0" && !cli_color_forced(env);
    no_color || cli_color_off
}

/// `CLICOLOR_FORCE` is set to something other than `0`.
#[must_use]
pub fn cli_color_forced(env: &dyn Environ) -> bool {
    let forced = env.getenv("CLICOLOR_FORCE");
    !forced.is_empty() && forced != "0"
}

/// Detection that respects the user's wishes:
/// 1. [`env_no_color()`] means [`Profile::Ascii`].
/// 2. Otherwise [`detect_color_profile()`], except that an [`Profile::Ascii`] result is
///    bumped up to [`Profile::Ansi`] (and no higher) when [`cli_color_forced()`].
#[must_use]
pub fn env_color_profile(env: &dyn Environ, is_tty: bool) -> Profile {
    if env_no_color(env) {
        DEBUG_TERMENV_DETECT.then(|| {
            tracing::debug!(message = "Color disabled by NO_COLOR or CLICOLOR=0");
        });
        return Profile::Ascii;
    }

    let detected = detect_color_profile(env, is_tty);
    if detected == Profile::Ascii && cli_color_forced(env) {
        DEBUG_TERMENV_DETECT.then(|| {
            tracing::debug!(message = "Color forced by CLICOLOR_FORCE", profile = %Profile::Ansi);
        });
        return Profile::Ansi;
    }
    detected
}

/// Decides whether to treat the destination as interactive.
/// 1. `assume_tty` or `unsafe_tty` force `true`.
/// 2. A non empty `CI` forces `false`, since CI runners are not interactive even when
///    they allocate a pty.
/// 3. Otherwise the writer's own answer, or `false` when it has none.
#[must_use]
pub fn resolve_is_tty(
    env: &dyn Environ,
    assume_tty: bool,
    unsafe_tty: bool,
    writer_is_tty: Option<bool>,
) -> bool {
    if assume_tty || unsafe_tty {
        return true;
    }
    if !env.getenv("CI").is_empty() {
        return false;
    }
    writer_is_tty.unwrap_or(false)
}

mod helpers {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    pub fn detect(env: &dyn Environ, is_tty: bool) -> Profile {
        if !is_tty {
            return Profile::Ascii;
        }

        if env.getenv("GOOGLE_CLOUD_SHELL") == "true" {
            return Profile::TrueColor;
        }

        let term = env.getenv("TERM").to_lowercase();
        let color_term = env.getenv("COLORTERM").to_lowercase();

        match color_term.as_str() {
            "truecolor" | "24bit" => {
                // screen can't pass 24 bit color through, tmux can.
                if term.starts_with("screen") && env.getenv("TERM_PROGRAM") != "tmux" {
                    return Profile::Ansi256;
                }
                return Profile::TrueColor;
            }
            "yes" | "true" => return Profile::Ansi256,
            _ => {}
        }

        if TRUE_COLOR_TERMS.contains(&term.as_str()) {
            return Profile::TrueColor;
        }

        if term == "linux" || term == "xterm" {
            return Profile::Ansi;
        }

        if check_256_color(&term) {
            return Profile::Ansi256;
        }

        if check_ansi_color(&term) {
            return Profile::Ansi;
        }

        Profile::Ascii
    }

    pub fn check_256_color(term: &str) -> bool { term.contains("256color") }

    pub fn check_ansi_color(term: &str) -> bool {
        term.contains("color") || term.contains("ansi")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapEnviron;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn env_with(vars: &[(&str, &str)]) -> MapEnviron { vars.iter().copied().collect() }

    #[test_case(&[("TERM", "xterm-256color")], Profile::Ansi256 ; "xterm 256color")]
    #[test_case(&[("TERM", "XTERM-256COLOR")], Profile::Ansi256 ; "term case insensitive")]
    #[test_case(&[("TERM", "xterm")], Profile::Ansi ; "plain xterm")]
    #[test_case(&[("TERM", "linux")], Profile::Ansi ; "linux console")]
    #[test_case(&[("TERM", "xterm-color")], Profile::Ansi ; "color substring")]
    #[test_case(&[("TERM", "ansi")], Profile::Ansi ; "ansi substring")]
    #[test_case(&[("TERM", "dumb")], Profile::Ascii ; "dumb")]
    #[test_case(&[], Profile::Ascii ; "nothing set")]
    #[test_case(&[("TERM", "xterm-kitty")], Profile::TrueColor ; "kitty")]
    #[test_case(&[("TERM", "wezterm")], Profile::TrueColor ; "wezterm")]
    #[test_case(&[("TERM", "xterm-ghostty")], Profile::TrueColor ; "ghostty")]
    #[test_case(&[("TERM", "alacritty-direct")], Profile::Ascii ; "allowlist is exact")]
    #[test_case(&[("COLORTERM", "truecolor")], Profile::TrueColor ; "colorterm truecolor")]
    #[test_case(&[("COLORTERM", "24BIT")], Profile::TrueColor ; "colorterm 24bit")]
    #[test_case(&[("COLORTERM", "yes")], Profile::Ansi256 ; "colorterm yes")]
    #[test_case(&[("COLORTERM", "true")], Profile::Ansi256 ; "colorterm true")]
    #[test_case(&[("COLORTERM", "truecolor"), ("TERM", "screen-256color")],
        Profile::Ansi256 ; "screen caps truecolor")]
    #[test_case(&[("COLORTERM", "truecolor"), ("TERM", "screen"), ("TERM_PROGRAM", "tmux")],
        Profile::TrueColor ; "tmux lifts the screen cap")]
    #[test_case(&[("GOOGLE_CLOUD_SHELL", "true"), ("TERM", "dumb")],
        Profile::TrueColor ; "google cloud shell")]
    fn test_detect_color_profile_tty(vars: &[(&str, &str)], expected: Profile) {
        let env = env_with(vars);
        assert_eq!(detect_color_profile(&env, true), expected);
    }

    #[test]
    fn test_detect_color_profile_not_a_tty_is_ascii() {
        let env = env_with(&[("TERM", "xterm-kitty"), ("COLORTERM", "truecolor")]);
        assert_eq!(detect_color_profile(&env, false), Profile::Ascii);
    }

    #[test_case(&[], false ; "nothing set")]
    #[test_case(&[("NO_COLOR", "1")], true ; "no color")]
    #[test_case(&[("NO_COLOR", "")], false ; "empty no color")]
    #[test_case(&[("CLICOLOR", "0")], true ; "clicolor off")]
    #[test_case(&[("CLICOLOR", "1")], false ; "clicolor on")]
    #[test_case(&[("CLICOLOR", "0"), ("CLICOLOR_FORCE", "1")], false ; "force beats clicolor")]
    #[test_case(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")], true ; "no color beats force")]
    fn test_env_no_color(vars: &[(&str, &str)], expected: bool) {
        assert_eq!(env_no_color(&env_with(vars)), expected);
    }

    #[test_case("", false)]
    #[test_case("0", false)]
    #[test_case("1", true)]
    #[test_case("yes", true)]
    fn test_cli_color_forced(value: &str, expected: bool) {
        let env = env_with(&[("CLICOLOR_FORCE", value)]);
        assert_eq!(cli_color_forced(&env), expected);
    }

    #[test]
    fn test_env_color_profile_no_color_wins_over_term() {
        let env = env_with(&[("NO_COLOR", "1"), ("TERM", "xterm-kitty")]);
        assert_eq!(env_color_profile(&env, true), Profile::Ascii);
    }

    #[test]
    fn test_env_color_profile_force_only_lifts_to_ansi() {
        let env = env_with(&[("CLICOLOR_FORCE", "1"), ("TERM", "dumb")]);
        assert_eq!(env_color_profile(&env, true), Profile::Ansi);
        assert_eq!(env_color_profile(&env, false), Profile::Ansi);

        let env = env_with(&[("CLICOLOR_FORCE", "1"), ("TERM", "xterm-256color")]);
        assert_eq!(env_color_profile(&env, true), Profile::Ansi256);
    }

    #[test]
    fn test_resolve_is_tty() {
        let empty = env_with(&[]);
        let ci = env_with(&[("CI", "true")]);

        assert!(resolve_is_tty(&empty, false, false, Some(true)));
        assert!(!resolve_is_tty(&empty, false, false, Some(false)));
        assert!(!resolve_is_tty(&empty, false, false, None));
        assert!(!resolve_is_tty(&ci, false, false, Some(true)));
        assert!(resolve_is_tty(&ci, true, false, Some(false)));
        assert!(resolve_is_tty(&ci, false, true, None));
    }
}
