//! Terminal output for search results and works listings

use crate::index::snippet::Snippet;
use crate::toc::WorksMap;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print snippets with the match highlighted, separated by `--`
pub fn print_snippets(snippets: &[Snippet], color: bool) -> io::Result<()> {
    let mut out = stdout(color);

    for (i, snippet) in snippets.iter().enumerate() {
        if i > 0 {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            writeln!(out, "--")?;
            out.reset()?;
        }

        // Corpus offset header
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", snippet.start + snippet.match_start)?;
        out.reset()?;
        writeln!(out, ":")?;

        print_highlighted(&mut out, snippet)?;
        writeln!(out)?;
    }

    Ok(())
}

fn print_highlighted(out: &mut StandardStream, snippet: &Snippet) -> io::Result<()> {
    let text = &snippet.text;
    let start = snippet.match_start.min(text.len());
    let end = snippet.match_end.min(text.len());

    // Fall back to plain text if the positions are not on char boundaries
    if start >= end || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
        return write!(out, "{}", text);
    }

    write!(out, "{}", &text[..start])?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "{}", &text[start..end])?;
    out.reset()?;
    write!(out, "{}", &text[end..])
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut out = io::stdout().lock();
    writeln!(out, "{}", json)
}

/// Print work titles, sorted
pub fn print_works(works: &WorksMap, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    let mut titles = works.titles();
    titles.sort_unstable();

    for title in titles {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(out, "{}", title)?;
        out.reset()?;
    }

    Ok(())
}
