use crate::commands::{CmdResult, Outcome};
use crate::model::{Book, YearInput};
use crate::shelf::Shelf;
use tracing::{debug, warn};

pub fn run(
    shelf: &mut Shelf,
    title: String,
    author: String,
    genre: String,
    year: YearInput,
) -> CmdResult {
    let year = match year.coerce() {
        Ok(year) => year,
        Err(e) => {
            warn!(%title, error = %e, "rejected book");
            return CmdResult::from_outcome(Outcome::InvalidYear);
        }
    };

    debug!(%title, %author, year, "adding book");
    shelf.push(Book {
        title,
        author,
        genre,
        year,
    });
    CmdResult::from_outcome(Outcome::BookAdded)
}
