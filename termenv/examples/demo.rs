// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints what `r3bl_termenv` detects about the current terminal, then shows the same
//! colors degraded for every profile.
//!
//! ```sh
//! cargo run --example demo -- --log
//! cargo run --example demo -- --profile ansi --assume-tty
//! NO_COLOR=1 cargo run --example demo
//! ```

use std::io::Write;

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_termenv::{Color, Output, Profile, hyperlink};
use strum::IntoEnumIterator;

/// Show detected terminal capabilities and sample styled output.
#[derive(Debug, Parser)]
#[command(name = "demo", version)]
struct CLIArg {
    /// Render with this profile instead of the detected one
    /// (truecolor, ansi256, ansi, ascii)
    #[arg(long, short = 'p')]
    profile: Option<Profile>,

    /// Treat stdout as a terminal even when it is piped or running in CI
    #[arg(long)]
    assume_tty: bool,

    /// Print debug events to stderr
    #[arg(long)]
    log: bool,
}

const SAMPLE_COLORS: [&str; 6] = ["#ff0000", "#ff8800", "#5f00ff", "#00afaf", "196", "9"];

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    if cli_arg.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stdout());
    let mut builder = Output::builder(std::io::stdout())
        .tty_flag(Some(is_tty))
        .assume_tty(cli_arg.assume_tty)
        .color_cache(true);
    if let Some(profile) = cli_arg.profile {
        builder = builder.profile(profile);
    }
    let mut output = builder.build();

    let summary = format!(
        "tty: {}\ncolor profile: {}\nenv color profile: {}\nNO_COLOR: {}\n\
         foreground: {:?}\nbackground: {:?}\ndark background: {}\n",
        output.is_tty(),
        output.color_profile(),
        output.env_color_profile(),
        output.env_no_color(),
        output.foreground_color(),
        output.background_color(),
        output.has_dark_background(),
    );
    output.write_str(&summary)?;

    let title = output.string("Styles").bold().underline().to_string();
    writeln!(output, "\n{title}").into_diagnostic()?;
    let base = output.string("sample");
    let samples = [
        base.bold(),
        base.faint(),
        base.italic(),
        base.underline(),
        base.overline(),
        base.blink(),
        base.reverse(),
        base.cross_out(),
    ];
    let line = samples.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    writeln!(output, "{line}").into_diagnostic()?;

    let title = output.string("Colors per profile").bold().underline().to_string();
    writeln!(output, "\n{title}").into_diagnostic()?;
    for profile in Profile::iter() {
        let mut line = format!("{:>10}: ", profile.name());
        for sample in SAMPLE_COLORS {
            let color = profile.color(sample).unwrap_or(Color::NoColor);
            let cell = profile.string(format!(" {sample:>7} ")).reverse().foreground(&color);
            line.push_str(&cell.to_string());
            line.push(' ');
        }
        writeln!(output, "{line}").into_diagnostic()?;
    }

    let link = hyperlink("https://github.com/r3bl-org/r3bl-open-core", "r3bl-open-core");
    writeln!(output, "\n{link}").into_diagnostic()?;
    output.flush().into_diagnostic()?;

    Ok(())
}
