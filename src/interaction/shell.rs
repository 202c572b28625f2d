use crate::error::{AppError, Result};
use crate::index::IndexTable;
use crate::interaction::input::{Input, Prompted};
use crate::interaction::presenter::Presenter;
use crate::models::EntityType;
use crate::search::{QuerySession, ResultProjector, SearchError};
use std::io::Write;
use std::str::FromStr;
use strum::EnumString;

/// Top level menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum SearchMode {
    /// One value across every field of every entity type
    #[strum(serialize = "1")]
    Broad,

    /// Entity type, then field, then value
    #[strum(serialize = "2")]
    Field,

    /// Print the searchable fields of every entity type
    #[strum(serialize = "3")]
    ListFields,
}

/// How a single query ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Quit,
}

/// Interactive query loop.
///
/// Query errors are printed and the user is offered another search; load
/// and index errors never reach here. `quit` at any prompt ends the session
/// without an error.
pub struct Shell<'t, 'a, I, P, W> {
    session: QuerySession<'t, 'a>,
    projector: ResultProjector<'t, 'a>,
    input: I,
    presenter: P,
    out: W,
}

impl<'t, 'a, I, P, W> Shell<'t, 'a, I, P, W>
where
    I: Input,
    P: Presenter,
    W: Write,
{
    pub fn new(table: &'t IndexTable<'a>, input: I, presenter: P, out: W) -> Self {
        Self {
            session: QuerySession::new(table),
            projector: ResultProjector::new(table),
            input,
            presenter,
            out,
        }
    }

    pub fn into_parts(self) -> (I, P, W) {
        (self.input, self.presenter, self.out)
    }

    /// Run queries until the user quits or declines another search
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            match self.run_query() {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Done) => {}
                Err(err) if err.is_recoverable() => self.report(&err)?,
                Err(err) => return Err(err),
            }

            if !self.request_new_search()? {
                break;
            }
        }

        writeln!(self.out, "Bye")?;
        Ok(())
    }

    /// Read a menu choice and carry out one query
    pub fn run_query(&mut self) -> Result<Outcome> {
        let Some(choice) = self.read()? else {
            return Ok(Outcome::Quit);
        };

        let mode = SearchMode::from_str(choice.trim())
            .map_err(|_| SearchError::UnknownSearchMode(choice.clone()))?;

        match mode {
            SearchMode::Broad => self.broad_search(),
            SearchMode::Field => self.field_search(),
            SearchMode::ListFields => self.list_fields(),
        }
    }

    fn broad_search(&mut self) -> Result<Outcome> {
        let Some(value) = self.prompt("Enter search value")? else {
            return Ok(Outcome::Quit);
        };

        let matches = self.session.broad_search(&value)?;
        let projection = self.projector.project_broad(&matches);
        self.presenter.present_broad(&projection)?;
        Ok(Outcome::Done)
    }

    fn field_search(&mut self) -> Result<Outcome> {
        let choices: Vec<String> = EntityType::ALL
            .iter()
            .map(|entity| format!("{}) {}", entity.key(), entity.label()))
            .collect();
        let Some(key) = self.prompt(&format!("Select {}", choices.join(" or ")))? else {
            return Ok(Outcome::Quit);
        };
        let entity = self.session.select_entity(&key)?;

        writeln!(self.out, "Available search fields:")?;
        for name in entity.field_names() {
            writeln!(self.out, "  {}", name)?;
        }

        let Some(name) = self.prompt("Enter search field")? else {
            return Ok(Outcome::Quit);
        };
        let field = entity.select_field(&name)?;

        let hint = format!("Enter search value ({})", field.field_type());
        let Some(value) = self.prompt(&hint)? else {
            return Ok(Outcome::Quit);
        };

        let matches = field.lookup(&value)?;
        let projection = self.projector.project(&matches);
        self.presenter.present(&projection)?;
        Ok(Outcome::Done)
    }

    fn list_fields(&mut self) -> Result<Outcome> {
        let table = self.session.table();
        for entity in EntityType::ALL {
            writeln!(self.out, "----------------------")?;
            writeln!(self.out, "Search {} with", entity)?;
            for field in table.fields_of(entity) {
                writeln!(self.out, "  {} ({})", field.name, field.field_type)?;
            }
        }
        Ok(Outcome::Done)
    }

    /// Ask whether to run another query; `n` or `quit` ends the session
    fn request_new_search(&mut self) -> Result<bool> {
        Ok(match self.prompt("Search again? (y/n)")? {
            Some(answer) => !answer.trim().eq_ignore_ascii_case("n"),
            None => false,
        })
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "Select search options:")?;
        writeln!(self.out, "  * Press 1 to search every field of every entity")?;
        writeln!(self.out, "  * Press 2 to search by entity and field")?;
        writeln!(self.out, "  * Press 3 to view a list of searchable fields")?;
        writeln!(self.out, "  * Type 'quit' to exit")?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        writeln!(self.out, "{}", message)?;
        self.read()
    }

    fn read(&mut self) -> Result<Option<String>> {
        self.out.flush()?;
        Ok(match self.input.next_line()? {
            Prompted::Quit => None,
            Prompted::Line(text) => Some(text),
        })
    }

    fn report(&mut self, err: &AppError) -> Result<()> {
        tracing::debug!(error_code = err.error_code(), error = %err, "Query failed");
        writeln!(self.out, "{}", err)?;
        Ok(())
    }
}
