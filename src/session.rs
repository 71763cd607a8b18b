use std::fmt::Write;

use log::debug;
use thiserror::Error;

use crate::config::Config;
use crate::interpret::{self, evaluate, RuntimeVal};
use crate::parse::{lex, ParseError, Parser};

pub const SEPARATOR: &str = "--------";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Interpreter error: {0}")]
    Interpret(#[from] interpret::Error),
}

#[derive(Debug)]
pub enum LineOutcome {
    Exit,
    Evaluated { report: String, value: RuntimeVal },
    Failed { report: String, error: Error },
}

/// One interactive session. Each line runs the whole pipeline on its own,
/// so a failing line never affects the next one.
pub struct Session {
    config: Config,
    parser: Parser,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            parser: Parser::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_exit(line: &str) -> bool {
        line.is_empty() || line.contains("exit")
    }

    pub fn run_line(&self, line: &str) -> LineOutcome {
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        if Self::is_exit(line) {
            debug!("exit requested");
            return LineOutcome::Exit;
        }

        let mut report = String::new();
        match self.run_pipeline(line, &mut report) {
            Ok(value) => {
                report_value(&mut report, &value);
                report.push_str(SEPARATOR);
                LineOutcome::Evaluated { report, value }
            }
            Err(error) => {
                debug!("{:?}", error);
                let _ = writeln!(report, "{}", error);
                report.push_str(SEPARATOR);
                LineOutcome::Failed { report, error }
            }
        }
    }

    fn run_pipeline(&self, line: &str, report: &mut String) -> Result<RuntimeVal, Error> {
        let lexed = lex(line);
        if self.config.show_tokens {
            let tokens: Vec<String> = lexed.items.iter().map(|li| li.token.to_string()).collect();
            // writing into a String cannot fail
            let _ = writeln!(report, "[{}]", tokens.join(", "));
        }

        let program = self.parser.parse_lexed(line, &lexed)?;
        if self.config.show_ast {
            let _ = writeln!(report, "{:#?}", program);
        }

        Ok(evaluate(&program)?)
    }
}

fn report_value(report: &mut String, value: &RuntimeVal) {
    let _ = writeln!(report, "{{ type: {}, value: {} }}", value.type_name(), value);
}
