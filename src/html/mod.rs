pub mod dom;
pub mod parser;
pub mod scanner;
pub mod search;
pub mod token;

pub use dom::{flatten, ElementChildren, ElementNode, Node};
pub use parser::{parse_document, Parser};
pub use scanner::{scan, Scanner};
pub use search::{find_first, findall, Pattern};
pub use token::Token;
