use arith_repl::config::Config;
use arith_repl::session::{LineOutcome, Session};
use log::info;
use rustyline::{error::ReadlineError, DefaultEditor};

type DynResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> DynResult {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("dotenvy load with error {}", e);
        }
    }
    // lexer warnings are shown unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    repl(Session::new(Config::from_env()))
}

fn repl(session: Session) -> DynResult {
    info!("Running in REPL mode");
    println!("Repl v0.1");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(&session.config().prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    rl.add_history_entry(&line)?;
                }
                match session.run_line(&line) {
                    LineOutcome::Exit => break,
                    LineOutcome::Evaluated { report, .. } | LineOutcome::Failed { report, .. } => {
                        println!("{}\n\n", report)
                    }
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}
