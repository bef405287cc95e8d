//! Interactive command loop for running searches by hand.

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::{algorithms, run_search, RunConfig};

pub const HELP: &str = "\
OVERVIEW:

This program runs search algorithms over weighted, directed graphs.
The input graph is read from \"file/input.txt\" and the report is written to \"file/output.txt\",
unless other files are chosen with the commands below.

INPUT GRAPH SYNTAX:

Each node of the graph is on its own line:
<node_name> <heuristic> <S|G|nothing> : <neighbour_1> <dist_1> ... <neighbour_b> <dist_b>

If a node has no neighbours, write \"none\" after the colon.
Mark the single starting node with \"S\" after its heuristic, and any goal nodes with \"G\".

For example:
S 24 S : A 3 B 9 C 4

This is node S with heuristic 24. It is the starting node, and has arcs
to A of length 3, to B of length 9 and to C of length 4.

COMMANDS:

/help = display this help message
/exit = terminate the program
/run <algorithm> [reversed] = search the input graph and write the report
/limit <n> = examine at most n paths before giving up
/input <file> = read the graph from another file
/output <file> = write the report to another file";

const WELCOME: &str =
    "Welcome to the search algorithms program! Please type /help to learn how to use this program.";
const FAREWELL: &str = "Thank you for using the search algorithms program. See you later!";
const INVALID: &str = "Sorry, but that is not a valid command. Please try again!";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    Exit,
    Run { algorithm: String, reversed: bool },
    Limit(usize),
    Input(PathBuf),
    Output(PathBuf),
}

#[derive(Debug, Error, PartialEq)]
enum CommandError {
    #[error("Sorry, but that is not a valid command. Please try again!")]
    Invalid,

    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().ok_or(CommandError::Invalid)?;
        let args: Vec<&str> = words.collect();

        match (command, args.as_slice()) {
            ("/help", []) => Ok(Command::Help),
            ("/exit", []) => Ok(Command::Exit),
            ("/run", [algorithm]) => Ok(Command::Run {
                algorithm: algorithm.to_string(),
                reversed: false,
            }),
            ("/run", [algorithm, "reversed"]) => Ok(Command::Run {
                algorithm: algorithm.to_string(),
                reversed: true,
            }),
            ("/run", _) => Err(CommandError::Usage("/run <algorithm> [reversed]")),
            ("/limit", [n]) => n
                .parse()
                .map(Command::Limit)
                .map_err(|_| CommandError::Usage("/limit <n>")),
            ("/limit", _) => Err(CommandError::Usage("/limit <n>")),
            ("/input", [path]) => Ok(Command::Input(PathBuf::from(path))),
            ("/input", _) => Err(CommandError::Usage("/input <file>")),
            ("/output", [path]) => Ok(Command::Output(PathBuf::from(path))),
            ("/output", _) => Err(CommandError::Usage("/output <file>")),
            _ => Err(CommandError::Invalid),
        }
    }
}

/// Reads commands line by line until `/exit` or the end of input.
pub struct Console<R, W>
where
    R: BufRead,
    W: Write,
{
    input: R,
    output: W,
    config: RunConfig,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, config: RunConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", WELCOME)?;

        let mut line = String::new();
        loop {
            write!(self.output, "\n>>> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.trim().parse::<Command>() {
                Ok(Command::Exit) => {
                    writeln!(self.output, "\n{}", FAREWELL)?;
                    return Ok(());
                }
                Ok(command) => self.execute(command)?,
                Err(e) => writeln!(self.output, "\n{}", e)?,
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        debug!(?command, "console");
        match command {
            Command::Help => {
                writeln!(self.output, "\n{}\n\nALGORITHMS:\n", HELP)?;
                for algorithm in algorithms() {
                    writeln!(self.output, "{} = {}", algorithm.name, algorithm.title)?;
                }
            }
            Command::Exit => {}
            Command::Run {
                algorithm,
                reversed,
            } => {
                let config = RunConfig {
                    reversed,
                    ..self.config.clone()
                };
                match run_search(&config, &algorithm) {
                    Ok(report) => {
                        writeln!(self.output)?;
                        for line in report.result() {
                            writeln!(self.output, "{}", line)?;
                        }
                        writeln!(
                            self.output,
                            "\nThe full report is in {}",
                            config.output.display()
                        )?;
                    }
                    Err(e) => writeln!(self.output, "\nError: {}", e)?,
                }
            }
            Command::Limit(limit) => match self.config.set_limit(limit) {
                Ok(()) => writeln!(self.output, "\nVisit limit set to {}", limit)?,
                Err(e) => writeln!(self.output, "\nError: {}", e)?,
            },
            Command::Input(path) => {
                writeln!(self.output, "\nReading graphs from {}", path.display())?;
                self.config.input = path;
            }
            Command::Output(path) => {
                writeln!(self.output, "\nWriting reports to {}", path.display())?;
                self.config.output = path;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    fn session(input: &str, config: RunConfig) -> (String, RunConfig) {
        let mut console = Console::new(input.as_bytes(), Vec::new(), config);
        console.run().unwrap();
        let config = console.config().clone();
        let output = String::from_utf8(console.into_output()).unwrap();
        (output, config)
    }

    #[test]
    fn parse_commands() {
        assert_eq!("/help".parse::<Command>(), Ok(Command::Help));
        assert_eq!(
            "/run  astar".parse::<Command>(),
            Ok(Command::Run {
                algorithm: "astar".to_string(),
                reversed: false
            })
        );
        assert_eq!(
            "/run dfs reversed".parse::<Command>(),
            Ok(Command::Run {
                algorithm: "dfs".to_string(),
                reversed: true
            })
        );
        assert_eq!("/limit 20".parse::<Command>(), Ok(Command::Limit(20)));
        assert_eq!(
            "/limit many".parse::<Command>(),
            Err(CommandError::Usage("/limit <n>"))
        );
        assert_eq!(
            "/run dfs backwards".parse::<Command>(),
            Err(CommandError::Usage("/run <algorithm> [reversed]"))
        );
        assert_eq!("help".parse::<Command>(), Err(CommandError::Invalid));
        assert_eq!("/exit now".parse::<Command>(), Err(CommandError::Invalid));
    }

    #[test]
    fn help_and_exit() {
        let (output, _) = session("/help\n/exit\n/help\n", RunConfig::default());
        assert!(output.starts_with(&format!("\n{}\n", WELCOME)));
        assert_eq!(output.matches("COMMANDS:").count(), 1);
        assert!(output.contains("bnb = branch and bound search\n"));
        assert!(output.ends_with(&format!("\n>>> \n{}\n", FAREWELL)));
    }

    #[test]
    fn invalid_command() {
        let (output, _) = session("\n   \nsearch everything\n", RunConfig::default());
        assert_eq!(output.matches(INVALID).count(), 1);
        assert!(!output.contains(FAREWELL));
    }

    #[test]
    fn configure() {
        let (output, config) = session(
            "/limit 0\n/limit 50\n/input graphs/a.txt\n/output reports/a.txt\n/exit\n",
            RunConfig::default(),
        );
        assert!(output.contains("Error: The visit limit must be a positive integer"));
        assert!(output.contains("Visit limit set to 50"));
        assert_eq!(
            config,
            RunConfig {
                input: PathBuf::from("graphs/a.txt"),
                output: PathBuf::from("reports/a.txt"),
                limit: 50,
                reversed: false,
            }
        );
    }

    #[test]
    fn run_searches() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, include_str!("../graphs/example.txt")).unwrap();
        let config = RunConfig {
            input,
            output: dir.path().join("output.txt"),
            ..RunConfig::default()
        };

        let (output, config) = session("/run dfs reversed\n/run lcfs\n/run bogo\n", config);
        assert!(output.contains("Solution path: S-A-C-D-G1\n"));
        assert!(output.contains("Solution path: S-C-D-G1\n"));
        assert!(output.contains("Error: Unknown algorithm \"bogo\""));
        assert!(!config.reversed);

        let report = fs::read_to_string(&config.output).unwrap();
        assert!(report.contains("Algorithm: lowest-cost-first search\n"));
    }

    #[test]
    fn run_missing_graph() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            input: dir.path().join("missing.txt"),
            output: dir.path().join("output.txt"),
            ..RunConfig::default()
        };
        let (output, _) = session("/run bfs\n/exit\n", config);
        assert!(output.contains("Error: Input not found"));
        assert!(output.contains(FAREWELL));
    }
}
