use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use super::command::{parse_age, Command, Invocation};
use super::display::display_outcome;
use super::error::CliError;
use crate::storage::{Employee, EmployeeStore, RecordId, StoreError};

/// Result of handling one command line (or one scripted insert).
#[derive(Debug)]
pub enum Outcome {
    Listed(Vec<Employee>),
    Inserted(RecordId),
    InsertFailed(StoreError),
    /// The age text that failed to parse.
    InvalidAge(String),
    /// The unrecognized command line.
    NoSuchOption(String),
    /// Input ran out partway through the insert dialogue.
    Abandoned,
}

/// Line-driven front end over an [`EmployeeStore`].
///
/// Prompts for the insert dialogue go to `output`; results are logged.
pub struct CLI<'a, S: ?Sized, R, W> {
    store: &'a S,
    input: R,
    output: W,
}

impl<'a, S, R, W> CLI<'a, S, R, W>
where
    S: EmployeeStore + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(store: &'a S, input: R, output: W) -> Self {
        CLI { store, input, output }
    }

    /// Handle commands until the input is exhausted.
    ///
    /// Only a failed listing or an unreadable input ends the loop early.
    pub async fn run(&mut self) -> Result<(), CliError> {
        while let Some(outcome) = self.step().await? {
            display_outcome(&outcome);
        }
        debug!("input exhausted");
        Ok(())
    }

    /// Read and handle one command line. `None` once the input is exhausted.
    pub async fn step(&mut self) -> Result<Option<Outcome>, CliError> {
        let Some(line) = self.read_line().await? else {
            return Ok(None);
        };

        let outcome = match line.parse::<Command>() {
            Ok(Command::List) => Outcome::Listed(self.store.list_all().await?),
            Ok(Command::Insert) => self.collect_and_insert().await?,
            Err(_) => Outcome::NoSuchOption(line),
        };
        Ok(Some(outcome))
    }

    /// The three-prompt dialogue. A bad age abandons it before gender is asked.
    async fn collect_and_insert(&mut self) -> Result<Outcome, CliError> {
        let Some(name) = self.prompt("name: ").await? else {
            return Ok(Outcome::Abandoned);
        };
        let Some(age_text) = self.prompt("age: ").await? else {
            return Ok(Outcome::Abandoned);
        };
        let Ok(age) = parse_age(&age_text) else {
            return Ok(Outcome::InvalidAge(age_text));
        };
        let Some(gender) = self.prompt("gender: ").await? else {
            return Ok(Outcome::Abandoned);
        };

        Ok(store_employee(self.store, Employee { name, age, gender }).await)
    }

    async fn prompt(&mut self, label: &str) -> Result<Option<String>, CliError> {
        self.output.write_all(label.as_bytes()).await?;
        self.output.flush().await?;
        self.read_line().await
    }

    /// One line without its `\n` / `\r\n`. Bytes that are not UTF-8 are
    /// replaced rather than rejected.
    async fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// The scripted path: validate the age, insert once, report.
pub async fn insert_once<S>(store: &S, name: &str, age: &str, gender: &str) -> Outcome
where
    S: EmployeeStore + ?Sized,
{
    match parse_age(age) {
        Ok(age) => store_employee(store, Employee::new(name, age, gender)).await,
        Err(_) => Outcome::InvalidAge(age.to_string()),
    }
}

/// Drive the store according to how the process was invoked.
pub async fn run_invocation<S, R, W>(
    store: &S,
    invocation: Invocation,
    input: R,
    output: W,
) -> Result<(), CliError>
where
    S: EmployeeStore + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match invocation {
        Invocation::InsertOnce { name, age, gender } => {
            display_outcome(&insert_once(store, &name, &age, &gender).await);
            Ok(())
        }
        Invocation::Interactive => CLI::new(store, input, output).run().await,
    }
}

/// Run the invocation, stopping early on Ctrl-C, then disconnect the store.
///
/// The store is disconnected exactly once whichever way the run ends.
pub async fn serve<S, R, W>(
    store: &S,
    invocation: Invocation,
    input: R,
    output: W,
) -> Result<(), CliError>
where
    S: EmployeeStore + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let result = tokio::select! {
        result = run_invocation(store, invocation, input, output) => result,
        _ = interrupted() => {
            info!("interrupted, shutting down");
            Ok(())
        }
    };
    store.disconnect().await;
    result
}

async fn interrupted() {
    // No handler means no interrupt to wait for.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

async fn store_employee<S>(store: &S, employee: Employee) -> Outcome
where
    S: EmployeeStore + ?Sized,
{
    match store.insert(&employee).await {
        Ok(id) => Outcome::Inserted(id),
        Err(e) => Outcome::InsertFailed(e),
    }
}
