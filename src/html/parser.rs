use std::collections::VecDeque;

use super::dom::{ElementNode, Node};
use super::token::Token;

/// Naive recursive-descent tree builder.
///
/// Every non-closing tag opens a node, and *any* closing tag ends the node
/// currently being built, whatever its name. All recursive calls drain the
/// same token queue, which is what keeps siblings and parents in step.
pub struct Parser {
    tokens: VecDeque<Token>,
}

impl Parser {
    pub fn new(tokens: impl Into<VecDeque<Token>>) -> Parser {
        Parser {
            tokens: tokens.into(),
        }
    }

    fn eof(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    pub fn parse_element(&mut self, tag: String) -> ElementNode {
        let mut node = ElementNode::new(tag);

        while let Some(token) = self.tokens.pop_front() {
            if token.is_closing() {
                node.closing_tag = Some(token.into_string());
                return node;
            }

            match token {
                Token::Tag(tag) => {
                    let child = self.parse_element(tag);
                    node.children.push(Node::Element(child));
                }
                Token::Text(text) => node.children.push(Node::Text(text)),
            }
        }

        tracing::debug!(tag = %node.tag, "tokens exhausted before closing tag");

        node
    }
}

/// Builds the document tree: the first token is the outermost tag and the
/// rest of the stream is nested under it.
///
/// Returns `None` for an empty stream.
pub fn parse_document(tokens: Vec<Token>) -> Option<ElementNode> {
    let mut parser = Parser::new(tokens);
    let root = parser.tokens.pop_front()?.into_string();

    let document = parser.parse_element(root);

    if !parser.eof() {
        tracing::debug!(
            tag = %document.tag,
            dropped = parser.remaining(),
            "root closed before end of input"
        );
    }

    Some(document)
}
