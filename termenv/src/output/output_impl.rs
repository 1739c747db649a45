// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::OnceCell,
          fmt::{Debug, Formatter},
          io::{self, IsTerminal, Write}};

use crate::{Color, DEBUG_TERMENV_OUTPUT, Environ, ProcessEnviron, Profile, Style,
            TermenvResult, detect_color_profile, env_color_profile, env_no_color, hsl_lightness,
            resolve_is_tty};

/// A destination for styled text: a writer, the environment that describes it, and the
/// [`Profile`] that writes to it are rendered with.
///
/// The profile is resolved once, when the output is built, via
/// [`env_color_profile()`] (unless [`OutputBuilder::profile()`] pins it). Changes to the
/// environment after that are not picked up; build a new `Output` instead.
///
/// ```rust
/// use r3bl_termenv::{Color, MapEnviron, Output, Profile};
///
/// let env = MapEnviron::default()
///     .with("TERM", "xterm-kitty")
///     .with("COLORFGBG", "15;0");
/// let output = Output::builder(Vec::<u8>::new())
///     .environ(env)
///     .assume_tty(true)
///     .build();
///
/// assert_eq!(output.profile(), Profile::TrueColor);
/// assert_eq!(output.background_color(), Color::ansi(0));
/// assert!(output.has_dark_background());
/// ```
pub struct Output {
    writer: Box<dyn Write + Send>,
    writer_is_tty: Option<bool>,
    environ: Box<dyn Environ>,
    profile: Profile,
    assume_tty: bool,
    unsafe_tty: bool,
    cache: bool,
    fg_color: OnceCell<Color>,
    bg_color: OnceCell<Color>,
}

/// Options for [`Output`]. Create one with [`Output::builder()`].
pub struct OutputBuilder {
    writer: Box<dyn Write + Send>,
    writer_is_tty: Option<bool>,
    environ: Option<Box<dyn Environ>>,
    profile: Option<Profile>,
    assume_tty: bool,
    unsafe_tty: bool,
    cache: bool,
}

mod output_builder_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl OutputBuilder {
        /// Pins the profile instead of detecting it.
        #[must_use]
        pub fn profile(mut self, profile: Profile) -> Self {
            self.profile = Some(profile);
            self
        }

        /// Reads variables from `environ` instead of the process environment.
        #[must_use]
        pub fn environ(mut self, environ: impl Environ + 'static) -> Self {
            self.environ = Some(Box::new(environ));
            self
        }

        /// Treat the writer as a TTY no matter what it or `CI` say.
        #[must_use]
        pub fn assume_tty(mut self, assume_tty: bool) -> Self {
            self.assume_tty = assume_tty;
            self
        }

        /// Like [`Self::assume_tty()`]. Intended for writers that are known to end up on
        /// a terminal even though they can't tell.
        #[must_use]
        pub fn unsafe_tty(mut self) -> Self {
            self.unsafe_tty = true;
            self
        }

        /// Memoize [`Output::foreground_color()`] and [`Output::background_color()`].
        /// When enabled both are computed right away, at build time.
        #[must_use]
        pub fn color_cache(mut self, cache: bool) -> Self {
            self.cache = cache;
            self
        }

        /// What the writer reports about being a terminal. `None` means it can't tell,
        /// which counts as "not a TTY".
        #[must_use]
        pub fn tty_flag(mut self, writer_is_tty: Option<bool>) -> Self {
            self.writer_is_tty = writer_is_tty;
            self
        }

        #[must_use]
        pub fn build(self) -> Output {
            let mut output = Output {
                writer: self.writer,
                writer_is_tty: self.writer_is_tty,
                environ: self
                    .environ
                    .unwrap_or_else(|| Box::new(ProcessEnviron)),
                profile: Profile::Ascii,
                assume_tty: self.assume_tty,
                unsafe_tty: self.unsafe_tty,
                cache: self.cache,
                fg_color: OnceCell::new(),
                bg_color: OnceCell::new(),
            };

            output.profile = match self.profile {
                Some(profile) => profile,
                None => output.env_color_profile(),
            };

            if output.cache {
                output.warm_color_cache();
            }

            DEBUG_TERMENV_OUTPUT.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "Output built",
                    profile = %output.profile,
                    is_tty = ?output.is_tty(),
                    cache = ?output.cache,
                );
            });

            output
        }
    }
}

mod output_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Output {
        /// Standard output, with its TTY status taken from [`IsTerminal`].
        #[must_use]
        pub fn stdout() -> Self {
            let is_tty = io::stdout().is_terminal();
            Self::builder(io::stdout()).tty_flag(Some(is_tty)).build()
        }

        /// Standard error, with its TTY status taken from [`IsTerminal`].
        #[must_use]
        pub fn stderr() -> Self {
            let is_tty = io::stderr().is_terminal();
            Self::builder(io::stderr()).tty_flag(Some(is_tty)).build()
        }

        /// An output with default options. Since an arbitrary writer can't report
        /// whether it is a terminal, this resolves to [`Profile::Ascii`] unless the
        /// environment forces color.
        #[must_use]
        pub fn new(writer: impl Write + Send + 'static) -> Self {
            Self::builder(writer).build()
        }

        #[must_use]
        pub fn builder(writer: impl Write + Send + 'static) -> OutputBuilder {
            OutputBuilder {
                writer: Box::new(writer),
                writer_is_tty: None,
                environ: None,
                profile: None,
                assume_tty: false,
                unsafe_tty: false,
                cache: false,
            }
        }

        #[must_use]
        pub fn profile(&self) -> Profile { self.profile }

        pub fn set_profile(&mut self, profile: Profile) { self.profile = profile; }

        #[must_use]
        pub fn environ(&self) -> &dyn Environ { self.environ.as_ref() }

        /// See [`resolve_is_tty()`].
        #[must_use]
        pub fn is_tty(&self) -> bool {
            resolve_is_tty(
                self.environ(),
                self.assume_tty,
                self.unsafe_tty,
                self.writer_is_tty,
            )
        }

        /// Raw capability detection, ignoring `NO_COLOR`.
        #[must_use]
        pub fn color_profile(&self) -> Profile {
            detect_color_profile(self.environ(), self.is_tty())
        }

        /// Detection that respects `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`.
        #[must_use]
        pub fn env_color_profile(&self) -> Profile {
            env_color_profile(self.environ(), self.is_tty())
        }

        #[must_use]
        pub fn env_no_color(&self) -> bool { env_no_color(self.environ()) }

        /// The terminal's default foreground, from the first field of `COLORFGBG`.
        /// [`Color::NoColor`] when that is missing or this isn't a TTY.
        #[must_use]
        pub fn foreground_color(&self) -> Color {
            if self.cache {
                return self
                    .fg_color
                    .get_or_init(|| self.read_colorfgbg(ColorFgBgField::First))
                    .clone();
            }
            self.read_colorfgbg(ColorFgBgField::First)
        }

        /// The terminal's default background, from the last field of `COLORFGBG`.
        /// [`Color::NoColor`] when that is missing or this isn't a TTY.
        #[must_use]
        pub fn background_color(&self) -> Color {
            if self.cache {
                return self
                    .bg_color
                    .get_or_init(|| self.read_colorfgbg(ColorFgBgField::Last))
                    .clone();
            }
            self.read_colorfgbg(ColorFgBgField::Last)
        }

        /// Whether the background's HSL lightness is below one half. Assumes dark
        /// when the background can't be determined.
        #[must_use]
        pub fn has_dark_background(&self) -> bool {
            match self.background_color().to_rgb() {
                Some(rgb) => hsl_lightness(rgb) < 0.5,
                None => true,
            }
        }

        /// Parses `input` as a color (see [`Profile::color()`]) and converts it to this
        /// output's profile.
        #[must_use]
        pub fn color(&self, input: &str) -> Option<Color> { self.profile.color(input) }

        #[must_use]
        pub fn convert(&self, color: &Color) -> Color { self.profile.convert(color) }

        /// A [`Style`] bound to this output's profile.
        #[must_use]
        pub fn string(&self, text: impl Into<String>) -> Style {
            self.profile.string(text)
        }

        /// Several pieces of text joined with a space, see [`Profile::strings()`].
        #[must_use]
        pub fn strings<I>(&self, parts: I) -> Style
        where
            I: IntoIterator,
            I::Item: AsRef<str>,
        {
            self.profile.strings(parts)
        }

        /// # Errors
        ///
        /// Returns an error if the underlying writer fails.
        pub fn write_str(&mut self, input: &str) -> TermenvResult<()> {
            self.writer.write_all(input.as_bytes())?;
            Ok(())
        }

        pub(super) fn warm_color_cache(&self) {
            self.fg_color
                .get_or_init(|| self.read_colorfgbg(ColorFgBgField::First));
            self.bg_color
                .get_or_init(|| self.read_colorfgbg(ColorFgBgField::Last));
        }

        fn read_colorfgbg(&self, field: ColorFgBgField) -> Color {
            if !self.is_tty() {
                return Color::NoColor;
            }
            parse_colorfgbg(&self.environ.getenv("COLORFGBG"), field)
        }
    }

    impl Write for Output {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.writer.write(buf) }

        fn flush(&mut self) -> io::Result<()> { self.writer.flush() }
    }

    impl Debug for Output {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Output")
                .field("profile", &self.profile)
                .field("writer_is_tty", &self.writer_is_tty)
                .field("environ", &self.environ)
                .field("assume_tty", &self.assume_tty)
                .field("unsafe_tty", &self.unsafe_tty)
                .field("cache", &self.cache)
                .field("fg_color", &self.fg_color.get())
                .field("bg_color", &self.bg_color.get())
                .finish_non_exhaustive()
        }
    }

    impl Debug for OutputBuilder {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("OutputBuilder")
                .field("profile", &self.profile)
                .field("writer_is_tty", &self.writer_is_tty)
                .field("environ", &self.environ)
                .field("assume_tty", &self.assume_tty)
                .field("unsafe_tty", &self.unsafe_tty)
                .field("cache", &self.cache)
                .finish_non_exhaustive()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColorFgBgField {
    First,
    Last,
}

/// `COLORFGBG` looks like `"15;0"` or `"15;default;0"`. Without a `;` there is nothing
/// to read. The picked field must be an unsigned integer, it is taken as an ANSI index.
fn parse_colorfgbg(value: &str, field: ColorFgBgField) -> Color {
    if !value.contains(';') {
        return Color::NoColor;
    }
    let mut fields = value.split(';');
    let token = match field {
        ColorFgBgField::First => fields.next(),
        ColorFgBgField::Last => fields.next_back(),
    };
    token
        .and_then(|it| it.parse::<u32>().ok())
        .map_or(Color::NoColor, Color::ansi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapEnviron;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use test_case::test_case;

    /// Cloneable writer so tests can inspect what was written.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn tty_output(env: MapEnviron) -> Output {
        Output::builder(io::sink()).environ(env).assume_tty(true).build()
    }

    #[test]
    fn test_profile_resolved_at_build() {
        let output = tty_output(MapEnviron::new().with("TERM", "xterm-256color"));
        assert_eq!(output.profile(), Profile::Ansi256);
        assert_eq!(output.color_profile(), Profile::Ansi256);
    }

    #[test]
    fn test_explicit_profile_wins() {
        let output = Output::builder(io::sink())
            .environ(MapEnviron::new().with("NO_COLOR", "1"))
            .profile(Profile::TrueColor)
            .build();
        assert_eq!(output.profile(), Profile::TrueColor);
        assert_eq!(output.env_color_profile(), Profile::Ascii);
        assert!(output.env_no_color());
    }

    #[test]
    fn test_unknown_writer_is_not_a_tty() {
        let output = Output::builder(io::sink())
            .environ(MapEnviron::new().with("TERM", "xterm-kitty"))
            .build();
        assert!(!output.is_tty());
        assert_eq!(output.profile(), Profile::Ascii);
    }

    #[test]
    fn test_tty_flag_and_ci() {
        let env = MapEnviron::new().with("TERM", "xterm-kitty");
        let output = Output::builder(io::sink())
            .environ(env.clone())
            .tty_flag(Some(true))
            .build();
        assert!(output.is_tty());
        assert_eq!(output.profile(), Profile::TrueColor);

        let output = Output::builder(io::sink())
            .environ(env.with("CI", "1"))
            .tty_flag(Some(true))
            .build();
        assert!(!output.is_tty());
        assert_eq!(output.profile(), Profile::Ascii);
    }

    #[test]
    fn test_unsafe_tty_ignores_ci() {
        let output = Output::builder(io::sink())
            .environ(MapEnviron::new().with("CI", "1").with("TERM", "xterm"))
            .unsafe_tty()
            .build();
        assert!(output.is_tty());
        assert_eq!(output.profile(), Profile::Ansi);
    }

    #[test_case("15;0", Color::ansi(15), Color::ansi(0) ; "two fields")]
    #[test_case("7;default;4", Color::ansi(7), Color::ansi(4) ; "three fields")]
    #[test_case("15", Color::NoColor, Color::NoColor ; "no separator")]
    #[test_case("", Color::NoColor, Color::NoColor ; "unset")]
    #[test_case("default;default", Color::NoColor, Color::NoColor ; "not numbers")]
    #[test_case(";12", Color::NoColor, Color::ansi(12) ; "empty first field")]
    fn test_colorfgbg(value: &str, fg: Color, bg: Color) {
        let output = tty_output(MapEnviron::new().with("COLORFGBG", value));
        assert_eq!(output.foreground_color(), fg);
        assert_eq!(output.background_color(), bg);
    }

    #[test]
    fn test_colorfgbg_ignored_when_not_a_tty() {
        let output = Output::builder(io::sink())
            .environ(MapEnviron::new().with("COLORFGBG", "15;0"))
            .build();
        assert_eq!(output.foreground_color(), Color::NoColor);
        assert_eq!(output.background_color(), Color::NoColor);
    }

    #[test_case("15;0", true ; "black background")]
    #[test_case("0;15", false ; "white background")]
    #[test_case("0;7", false ; "light gray background")]
    #[test_case("15;4", true ; "blue background")]
    #[test_case("", true ; "unknown assumes dark")]
    #[test_case("0;999", true ; "out of palette assumes dark")]
    fn test_has_dark_background(value: &str, expected: bool) {
        let output = tty_output(MapEnviron::new().with("COLORFGBG", value));
        assert_eq!(output.has_dark_background(), expected);
    }

    /// Environ whose values can be changed after the output was built.
    #[derive(Debug, Clone, Default)]
    struct SharedEnviron(Arc<Mutex<MapEnviron>>);

    impl Environ for SharedEnviron {
        fn environ(&self) -> Vec<String> { self.0.lock().unwrap().environ() }

        fn getenv(&self, key: &str) -> String { self.0.lock().unwrap().getenv(key) }
    }

    #[test]
    fn test_color_cache_is_computed_once() {
        let env = SharedEnviron::default();
        env.0.lock().unwrap().set("COLORFGBG", "15;0");

        let cached = Output::builder(io::sink())
            .environ(env.clone())
            .assume_tty(true)
            .color_cache(true)
            .build();
        let uncached = Output::builder(io::sink())
            .environ(env.clone())
            .assume_tty(true)
            .build();

        env.0.lock().unwrap().set("COLORFGBG", "0;15");

        assert_eq!(cached.foreground_color(), Color::ansi(15));
        assert_eq!(cached.background_color(), Color::ansi(0));
        assert_eq!(uncached.foreground_color(), Color::ansi(0));
        assert_eq!(uncached.background_color(), Color::ansi(15));
    }

    #[test_case(Profile::TrueColor, "#ff0000", Some(Color::rgb("#ff0000")))]
    #[test_case(Profile::Ansi, "#ff0000", Some(Color::ansi(9)))]
    #[test_case(Profile::Ansi, "", None)]
    #[test_case(Profile::Ascii, "12", Some(Color::NoColor))]
    fn test_color(profile: Profile, input: &str, expected: Option<Color>) {
        let output = Output::builder(io::sink()).profile(profile).build();
        assert_eq!(output.color(input), expected);
    }

    #[test]
    fn test_string_and_set_profile() {
        let mut output = Output::builder(io::sink()).profile(Profile::Ansi).build();
        assert_eq!(output.string("x").bold().to_string(), "\x1b[1mx\x1b[0m");

        output.set_profile(Profile::Ascii);
        assert_eq!(output.string("x").bold().to_string(), "x");
    }

    #[test]
    fn test_strings_uses_output_profile() {
        let output = Output::builder(io::sink()).profile(Profile::Ansi).build();
        assert_eq!(
            output.strings(["a", "b"]).italic().to_string(),
            "\x1b[3ma b\x1b[0m"
        );
    }

    #[test]
    fn test_writes_reach_the_sink() {
        let buffer = SharedBuffer::default();
        let mut output = Output::builder(buffer.clone()).profile(Profile::Ansi).build();

        let styled = output.string("hi").underline().to_string();
        output.write_str(&styled).unwrap();
        write!(output, "!").unwrap();
        output.flush().unwrap();

        assert_eq!(buffer.contents(), "\x1b[4mhi\x1b[0m!");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let mut output = Output::builder(BrokenPipe).profile(Profile::Ansi).build();
        let result = output.write_str("x");
        assert!(matches!(
            result,
            Err(crate::TermenvError::Io(ref it)) if it.kind() == io::ErrorKind::BrokenPipe
        ));
        assert!(output.hide_cursor().is_err());
    }

    #[test]
    fn test_debug_does_not_need_writer() {
        let output = Output::builder(io::sink()).profile(Profile::Ansi).build();
        let it = format!("{output:?}");
        assert!(it.starts_with("Output {"));
        assert!(it.contains("profile: Ansi"));
    }
}
