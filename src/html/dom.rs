#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(ElementNode),
    Text(String),
}

/// One opening tag and everything the naive builder nested under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: String,
    pub children: ElementChildren,
    /// `None` when the tokens ran out before any closing tag showed up.
    pub closing_tag: Option<String>,
}

pub type ElementChildren = Vec<Node>;

impl Node {
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl ElementNode {
    pub fn new(tag: String) -> ElementNode {
        ElementNode {
            tag,
            children: ElementChildren::new(),
            closing_tag: None,
        }
    }

    pub fn elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn text_content(&self) -> String {
        let mut content = String::new();
        push_children_text(&self.children, &mut content);
        content
    }
}

/// Concatenates every descendant text run in document order. Tags are never
/// part of the output.
pub fn flatten(node: &Node) -> String {
    match node {
        Node::Text(text) => text.clone(),
        Node::Element(element) => element.text_content(),
    }
}

fn push_children_text(children: &[Node], content: &mut String) {
    for child in children {
        match child {
            Node::Text(text) => content.push_str(text),
            Node::Element(element) => push_children_text(&element.children, content),
        }
    }
}
