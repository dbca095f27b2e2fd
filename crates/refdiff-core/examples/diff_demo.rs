//! refdiff walkthrough
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! 1. Diffing collections by equality and by content fingerprint
//! 2. Resolving a value through a dot-delimited field path
//! 3. Aggregating fields by capability

use refdiff_core::introspect::downcast;
use refdiff_core::logging_facility::{init, Profile};
use refdiff_core::{
    collect_by_capability, flatten_lists_by_capability, get_diff, get_diff_any, reflect,
    resolve_from, Capability,
};
use serde::Serialize;

const PARTY: Capability = Capability::new("party");
const LINE_ITEM: Capability = Capability::new("line_item");

struct Contact {
    name: String,
}

reflect!(Contact { name: value });

struct Line {
    sku: String,
}

reflect!(Line { sku: value });

struct Order {
    buyer: Contact,
    seller: Option<Contact>,
    lines: Vec<Line>,
}

reflect!(Order {
    buyer: value [PARTY],
    seller: optional [PARTY],
    lines: list [LINE_ITEM],
});

#[derive(Debug, Serialize)]
struct Reading {
    sensor: String,
    celsius: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("## Part 1: Diffing\n");

    let diff = get_diff(
        vec!["apple", "orange", "banana"],
        vec!["banana", "grape", "apple"],
    );
    println!("added:   {:?}", diff.added);
    println!("removed: {:?}", diff.removed);
    println!("equal:   {:?}\n", diff.equal);

    let before = vec![
        Reading {
            sensor: "north".to_string(),
            celsius: 20.5,
        },
        Reading {
            sensor: "south".to_string(),
            celsius: 18.0,
        },
    ];
    let after = vec![
        Reading {
            sensor: "north".to_string(),
            celsius: 20.5,
        },
        Reading {
            sensor: "south".to_string(),
            celsius: 18.25,
        },
    ];
    let readings = get_diff_any(before, after)?;
    println!("changed readings: {:?}\n", readings.added);

    println!("## Part 2: Path resolution\n");

    let order = Order {
        buyer: Contact {
            name: "bob".to_string(),
        },
        seller: None,
        lines: vec![
            Line {
                sku: "A-1".to_string(),
            },
            Line {
                sku: "B-2".to_string(),
            },
        ],
    };

    // Every segment is looked up on Order; "name" is not an Order field.
    let found = resolve_from(Some(&order), "buyer.name")?;
    let buyer = downcast::<Contact>(found).expect("stops at the contact");
    println!("buyer.name resolves to the buyer: {}\n", buyer.name);

    println!("## Part 3: Capabilities\n");

    let parties = collect_by_capability(&order, &PARTY)?;
    // One entry per PARTY field; the unset seller shows up as None.
    println!(
        "party fields: {}, set: {}",
        parties.len(),
        parties.iter().flatten().count()
    );

    let skus: Vec<&str> = flatten_lists_by_capability(&order, &LINE_ITEM)?
        .into_iter()
        .filter_map(|v| downcast::<Line>(v).map(|l| l.sku.as_str()))
        .collect();
    println!("line items: {:?}", skus);

    Ok(())
}
