//! `scicalc` CLI: evaluate calculator expressions from the command line or
//! an interactive prompt.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use log::debug;

use scicalc::{format_value, AngleMode, Session};

#[derive(Parser)]
#[command(version, about = "Scientific calculator expression engine")]
struct Cli {
    /// Evaluate an expression instead of reading standard input. May be
    /// repeated, all expressions share the same `Ans`.
    #[arg(short = 'e', long = "eval", value_name = "EXPR")]
    eval: Vec<String>,

    /// Angle mode for trigonometric functions: "deg" (default) or "rad"
    #[arg(long, default_value = "deg")]
    mode: AngleMode,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut session = Session::with_angle_mode(cli.mode);

    if cli.eval.is_empty() {
        if let Err(e) = repl(&mut session) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        return;
    }

    let mut failed = false;
    for expression in &cli.eval {
        match session.evaluate(expression) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                debug!("{e}");
                println!("{}", e.user_message());
                failed = true;
            }
        }
    }
    if failed {
        process::exit(1);
    }
}

/// Read one expression per line until end of input or `:q`
fn repl(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "[{}] > ", session.angle_mode())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":q" | ":quit" => break,
            ":deg" => session.set_angle_mode(AngleMode::Degrees),
            ":rad" => session.set_angle_mode(AngleMode::Radians),
            ":mode" => {
                session.toggle_angle_mode();
            }
            ":ans" => writeln!(stdout, "{}", format_value(session.last_answer()))?,
            expression => match session.evaluate(expression) {
                Ok(result) if result.is_empty() => {}
                Ok(result) => writeln!(stdout, "{result}")?,
                Err(e) => {
                    debug!("{e}");
                    writeln!(stdout, "{}", e.user_message())?;
                }
            },
        }
        write!(stdout, "[{}] > ", session.angle_mode())?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}
