//! Shared fixtures: small registered object graphs.

#![allow(dead_code)]

use refdiff_core::introspect::Capability;
use refdiff_core::reflect;
use serde::Serialize;

pub const PARTY: Capability = Capability::new("party");
pub const ADDRESSABLE: Capability = Capability::new("addressable");
pub const LINE_ITEM: Capability = Capability::new("line_item");

/// Self-similar node: every level has the same type, so fixed-type walks
/// can descend through it.
pub struct Node {
    pub a: Option<Box<Node>>,
    pub b: Option<Box<Node>>,
    pub c: Option<String>,
}

reflect!(Node {
    a: optional,
    b: optional,
    c: optional,
});

impl Node {
    pub fn empty() -> Self {
        Self {
            a: None,
            b: None,
            c: None,
        }
    }
}

/// `{a: {b: {c: "leaf"}}}`
pub fn leaf_graph() -> Node {
    Node {
        a: Some(Box::new(Node {
            b: Some(Box::new(Node {
                c: Some("leaf".to_string()),
                ..Node::empty()
            })),
            ..Node::empty()
        })),
        ..Node::empty()
    }
}

pub struct Contact {
    name: String,
    email: Option<String>,
}

reflect!(Contact {
    name: value,
    email: optional,
});

impl Contact {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            email: Some(format!("{}@example.com", name)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

pub struct Line {
    sku: String,
    qty: u32,
}

reflect!(Line {
    sku: value,
    qty: value,
});

impl Line {
    pub fn new(sku: &str, qty: u32) -> Self {
        Self {
            sku: sku.to_string(),
            qty,
        }
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }
}

/// Fields are private on purpose: the registry still reads them.
pub struct Invoice {
    number: String,
    buyer: Contact,
    seller: Option<Contact>,
    ship_to: Option<Contact>,
    lines: Vec<Line>,
    backorders: Option<Vec<Line>>,
    notes: Vec<String>,
}

reflect!(Invoice {
    number: value,
    buyer: value [PARTY, ADDRESSABLE],
    seller: optional [PARTY],
    ship_to: optional [ADDRESSABLE],
    lines: list [LINE_ITEM],
    backorders: optional_list [LINE_ITEM],
    notes: list,
});

pub fn invoice() -> Invoice {
    Invoice {
        number: "INV-1".to_string(),
        buyer: Contact::new("bob"),
        seller: Some(Contact::new("sam")),
        ship_to: None,
        lines: vec![Line::new("A-1", 2), Line::new("B-2", 1)],
        backorders: Some(vec![Line::new("C-3", 5)]),
        notes: vec!["fragile".to_string()],
    }
}

pub fn invoice_without_optionals() -> Invoice {
    Invoice {
        seller: None,
        backorders: None,
        ..invoice()
    }
}

/// Has no usable `Eq`/`Hash` (f64 field); diffable only by fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub sensor: String,
    pub value: f64,
    pub comment: Option<String>,
}

pub fn measurement(sensor: &str, value: f64) -> Measurement {
    Measurement {
        sensor: sensor.to_string(),
        value,
        comment: None,
    }
}

/// Serialization always fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque(pub u8);

impl Serialize for Opaque {
    fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("opaque values cannot be serialized"))
    }
}
