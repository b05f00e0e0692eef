//! Markup tree helpers over `markup5ever_rcdom`, serialized with html5ever

use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

pub use markup5ever_rcdom::Handle;

/// Create an element with attributes
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Element holding a single text child
pub fn text_element(tag: &str, attrs: Vec<(&str, &str)>, text: &str) -> Handle {
    let element = create_element(tag, attrs);
    append(&element, create_text(text));
    element
}

pub fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Serialize a node and everything below it
pub fn serialize_node(handle: &Handle) -> io::Result<String> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    serialize(&mut output, &SerializableHandle::from(handle.clone()), opts)?;

    String::from_utf8(output).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Text escaped for markup content, via the serializer
pub fn escape_text(text: &str) -> io::Result<String> {
    serialize_node(&create_text(text))
}

pub fn tag_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

pub fn get_attr(handle: &Handle, attr: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == attr)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

pub fn has_class(handle: &Handle, class: &str) -> bool {
    get_attr(handle, "class").map_or(false, |c| c.split_whitespace().any(|c| c == class))
}

/// Direct element children, skipping text
pub fn child_elements(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|c| tag_name(c).is_some())
        .cloned()
        .collect()
}

/// Concatenated text of this node and all descendants
pub fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        out.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// All elements in document order (this node included) matching `pred`
pub fn find_all<F>(handle: &Handle, pred: F) -> Vec<Handle>
where
    F: Fn(&Handle) -> bool,
{
    let mut found = Vec::new();
    collect_matching(handle, &pred, &mut found);
    found
}

fn collect_matching<F>(handle: &Handle, pred: &F, found: &mut Vec<Handle>)
where
    F: Fn(&Handle) -> bool,
{
    if tag_name(handle).is_some() && pred(handle) {
        found.push(handle.clone());
    }
    for child in handle.children.borrow().iter() {
        collect_matching(child, pred, found);
    }
}
