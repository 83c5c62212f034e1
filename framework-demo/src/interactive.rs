//! Line-oriented session loop.

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::sync::Arc;

use anyhow::Result;
use framework_adapters::traits::ModelAdapter;
use framework_config::DemoConfig;
use framework_demo::render;
use framework_primitives::{Mode, ModelId, Strategy, Temperature};
use framework_runner::{DemoRunner, Session, offline_report};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::commands;

const HELP: &str = "\
Commands:
  strategy <name>     select a strategy (slug or display name)
  mode <offline|online>
  task <text>         set the basic prompt
  prompt <text>       replace the strategy prompt
  regenerate          rebuild the strategy prompt from the task
  sample              load the recorded example task
  clear               empty both prompts
  yes | no            answer a pending clear question
  model <id>          set the model for live runs
  temperature <t>     set the temperature (0 to 2)
  samples <n>         set the self-consistency sample count
  run                 compare basic and strategy prompts
  show                print the session as JSON
  help
  quit";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Empty,
    Help,
    Show,
    Strategy(Strategy),
    Mode(Mode),
    Task(String),
    Prompt(String),
    Regenerate,
    Sample,
    Clear,
    Confirm(bool),
    Model(ModelId),
    Temperature(Temperature),
    Samples(NonZeroUsize),
    Run,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "help" | "?" => Command::Help,
        "show" => Command::Show,
        "strategy" => Command::Strategy(rest.parse().map_err(|err| format!("{err}"))?),
        "mode" => Command::Mode(rest.parse().map_err(|err| format!("{err}"))?),
        "task" => Command::Task(rest.to_owned()),
        "prompt" => Command::Prompt(rest.to_owned()),
        "regenerate" => Command::Regenerate,
        "sample" => Command::Sample,
        "clear" => Command::Clear,
        "yes" | "y" => Command::Confirm(true),
        "no" | "n" => Command::Confirm(false),
        "model" => Command::Model(rest.parse().map_err(|err| format!("{err}"))?),
        "temperature" => Command::Temperature(rest.parse().map_err(|err| format!("{err}"))?),
        "samples" => Command::Samples(
            rest.parse()
                .map_err(|_| format!("sample count `{rest}` must be a positive integer"))?,
        ),
        "run" => Command::Run,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}` (type `help`)")),
    };
    Ok(command)
}

struct Shell {
    config: DemoConfig,
    session: Session,
    adapter: Option<Arc<dyn ModelAdapter>>,
}

impl Shell {
    fn new(config: DemoConfig, samples: NonZeroUsize) -> Self {
        let session = Session::new(config.mode, config.completion_settings(), samples);
        Self {
            config,
            session,
            adapter: None,
        }
    }

    async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        if self.session.pending_clear()
            && !matches!(
                command,
                Command::Confirm(_) | Command::Help | Command::Show | Command::Quit
            )
        {
            writeln!(out, "Answer `yes` to clear both prompts or `no` to keep them.")?;
            return Ok(Flow::Continue);
        }

        match command {
            Command::Empty => {}
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => writeln!(out, "{}", self.session.to_json()?)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Strategy(strategy) => {
                self.session.select_strategy(strategy);
                writeln!(out, "Selected {strategy}.")?;
                if self.session.pending_clear() {
                    writeln!(
                        out,
                        "Strategy changed with text present. Clear both prompts? (yes/no)"
                    )?;
                }
            }
            Command::Confirm(confirm) => {
                if self.session.pending_clear() {
                    self.session.resolve_pending_clear(confirm);
                    writeln!(
                        out,
                        "{}",
                        if confirm { "Prompts cleared." } else { "Prompts kept." }
                    )?;
                } else {
                    writeln!(out, "Nothing to confirm.")?;
                }
            }
            Command::Mode(mode) => {
                self.session.set_mode(mode);
                writeln!(out, "Mode: {mode}.")?;
            }
            Command::Task(text) => {
                if let Err(err) = self.session.set_basic_prompt(text) {
                    writeln!(out, "{err}")?;
                }
                self.write_prompts(out)?;
            }
            Command::Prompt(text) => {
                self.session.set_strategy_prompt(text);
                self.write_prompts(out)?;
            }
            Command::Regenerate => match self.session.regenerate_strategy_prompt() {
                Ok(()) => self.write_prompts(out)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Sample => match self.session.load_sample() {
                Ok(()) => self.write_prompts(out)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Clear => {
                self.session.clear();
                writeln!(out, "Prompts cleared.")?;
            }
            Command::Model(model) => {
                self.session.set_model(model);
                writeln!(out, "Model: {model}.")?;
            }
            Command::Temperature(temperature) => {
                self.session.set_temperature(temperature);
                writeln!(out, "Temperature: {temperature}.")?;
            }
            Command::Samples(samples) => {
                self.session.set_samples(samples);
                writeln!(out, "Samples: {samples}.")?;
            }
            Command::Run => self.run(out).await?,
        }
        Ok(Flow::Continue)
    }

    async fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let strategy = self.session.strategy();
        if self.session.mode() == Mode::Offline {
            let report = offline_report(strategy)?;
            render::write_report(out, &report)?;
            return Ok(());
        }

        let adapter = match self.adapter() {
            Ok(adapter) => adapter,
            Err(err) => {
                writeln!(out, "error: {err:#}")?;
                return Ok(());
            }
        };
        let runner = DemoRunner::new(adapter, self.session.settings())
            .with_samples(self.session.samples());

        match runner
            .run(
                strategy,
                self.session.basic_prompt(),
                self.session.strategy_prompt(),
            )
            .await
        {
            Ok(report) => render::write_report(out, &report)?,
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(())
    }

    fn adapter(&mut self) -> Result<Arc<dyn ModelAdapter>> {
        if let Some(adapter) = &self.adapter {
            return Ok(Arc::clone(adapter));
        }
        let adapter = commands::connect(&self.config)?;
        self.adapter = Some(Arc::clone(&adapter));
        Ok(adapter)
    }

    fn write_prompts<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Basic Prompt:\n{}\n", self.session.basic_prompt())?;
        writeln!(
            out,
            "{} Prompt:\n{}",
            self.session.strategy(),
            self.session.strategy_prompt()
        )
    }
}

pub async fn run(config: DemoConfig) -> Result<()> {
    let samples = commands::sample_count(&config)?;
    let mut shell = Shell::new(config, samples);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = io::stdout();

    writeln!(out, "{HELP}")?;
    loop {
        write!(
            out,
            "[{} | {}]> ",
            shell.session.mode(),
            shell.session.strategy().slug()
        )?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_command(&line) {
            Ok(command) => {
                debug!(?command, "session command");
                if shell.execute(command, &mut out).await? == Flow::Quit {
                    break;
                }
            }
            Err(message) => writeln!(out, "{message}")?,
        }
    }
    Ok(())
}
