use crate::commands::CmdResult;
use crate::shelf::Shelf;

pub fn run(shelf: &Shelf) -> CmdResult {
    CmdResult::default().with_listed_books(shelf.books().to_vec())
}
