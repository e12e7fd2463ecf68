use colored::Colorize;
use minestatus_format::{parse, Rgb, StyledRun};
use minestatus_models::ServerStatus;

const MOTD_FALLBACK: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Prints the MOTD lines under a check result. The raw form carries the
/// formatting codes, so it is preferred for terminal rendering; clean is the
/// fallback, absent MOTDs print nothing.
pub fn print_motd(status: &ServerStatus) {
    let lines = match status.motd_raw.as_ref().or(status.motd_clean.as_ref()) {
        Some(lines) => lines,
        None => return,
    };

    for line in lines {
        println!("      {}", ansi_line(line));
    }
}

fn ansi_line(line: &str) -> String {
    parse(line, MOTD_FALLBACK)
        .into_iter()
        .map(render_run)
        .collect()
}

fn render_run(run: StyledRun) -> String {
    let mut piece = run
        .text
        .truecolor(run.color.r, run.color.g, run.color.b);
    if run.bold {
        piece = piece.bold();
    }
    if run.italic {
        piece = piece.italic();
    }
    if run.underline {
        piece = piece.underline();
    }
    if run.strikethrough {
        piece = piece.strikethrough();
    }
    piece.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_never_reach_the_terminal() {
        colored::control::set_override(false);
        assert_eq!(ansi_line("§a§lHello§r World"), "Hello World");
        assert_eq!(ansi_line("plain"), "plain");
        colored::control::unset_override();
    }
}
