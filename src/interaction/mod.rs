//! Terminal collaborators: line input, result presentation and the
//! interactive shell that ties them to a query session

mod input;
mod presenter;
mod shell;

pub use input::{Console, Input, Prompted, ScriptedInput, QUIT_COMMAND};
pub use presenter::{JsonPresenter, Presenter};
pub use shell::{Outcome, SearchMode, Shell};
